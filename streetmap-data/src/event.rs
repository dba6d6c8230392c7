//! The markup event-source contract.
//!
//! The builder consumes a flat, pull-based sequence of typed events and
//! never touches raw bytes. Any tokenizer can feed it by implementing
//! [`EventSource`]; in-memory sequences get the contract for free through
//! the blanket iterator impl.

use std::str::Utf8Error;

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// One event from the markup tokenizer.
///
/// Attribute pairs preserve source order; the builder relies on that order
/// when attributes double as tags.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupEvent {
    /// An element opened, carrying its attributes in source order.
    Start {
        /// Element name, e.g. `node`, `way`, `nd`, `tag`.
        name: String,
        /// Ordered `(key, value)` attribute pairs.
        attributes: Vec<(String, String)>,
    },
    /// An element closed.
    End {
        /// Element name matching the earlier start.
        name: String,
    },
    /// Character data between elements. Carries no map information.
    Text(String),
}

impl MarkupEvent {
    /// Build a start event from any iterable of attribute pairs.
    pub fn start<N, A, K, V>(name: N, attributes: A) -> Self
    where
        N: Into<String>,
        A: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Start {
            name: name.into(),
            attributes: attributes
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Build an end event.
    pub fn end<N: Into<String>>(name: N) -> Self {
        Self::End { name: name.into() }
    }
}

/// Structural tokenizer failures. These abort construction; schema-level
/// irregularities never surface here.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// The tokenizer hit malformed low-level syntax.
    #[error("malformed markup syntax")]
    Syntax {
        /// Underlying tokenizer error.
        #[source]
        source: quick_xml::Error,
    },
    /// An element's attribute list could not be tokenized.
    #[error("malformed attribute list")]
    Attribute {
        /// Underlying attribute error.
        #[source]
        source: AttrError,
    },
    /// Element or attribute bytes were not valid UTF-8.
    #[error("markup is not valid UTF-8")]
    Encoding {
        /// Underlying decode error.
        #[source]
        source: Utf8Error,
    },
}

/// A pull-based producer of markup events.
///
/// `Ok(None)` signals ordinary end of stream. An `Err` is a structural
/// failure: the consumer stops pulling and construction fails.
pub trait EventSource {
    /// Pull the next event, `Ok(None)` at end of stream.
    fn next_event(&mut self) -> Result<Option<MarkupEvent>, MarkupError>;
}

/// In-memory event sequences are sources in their own right, which keeps
/// tests and synthetic streams free of tokenizer plumbing.
impl<I> EventSource for I
where
    I: Iterator<Item = MarkupEvent>,
{
    fn next_event(&mut self) -> Result<Option<MarkupEvent>, MarkupError> {
        Ok(self.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn iterator_sources_yield_in_order_then_exhaust() {
        let mut source = vec![
            MarkupEvent::start("node", [("id", "1")]),
            MarkupEvent::end("node"),
        ]
        .into_iter();

        assert_eq!(
            source.next_event().ok().flatten(),
            Some(MarkupEvent::start("node", [("id", "1")]))
        );
        assert_eq!(
            source.next_event().ok().flatten(),
            Some(MarkupEvent::end("node"))
        );
        assert_eq!(source.next_event().ok().flatten(), None);
    }

    #[rstest]
    fn start_helper_preserves_attribute_order() {
        let event = MarkupEvent::start("node", [("id", "1"), ("lat", "2.0"), ("lon", "3.0")]);
        let MarkupEvent::Start { attributes, .. } = event else {
            panic!("expected a start event");
        };
        let keys: Vec<_> = attributes.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["id", "lat", "lon"]);
    }
}
