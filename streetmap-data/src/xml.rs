//! quick-xml adapter for the event-source contract.
//!
//! Translates the tokenizer's events into [`MarkupEvent`]s: self-closing
//! elements become a start/end pair, declarations and comments are
//! skipped, and any tokenizer failure surfaces as a structural
//! [`MarkupError`].

use std::io::BufRead;
use std::str;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::event::{EventSource, MarkupError, MarkupEvent};

/// An [`EventSource`] over any buffered XML byte stream.
///
/// # Examples
/// ```
/// use streetmap_data::{EventSource, MarkupEvent, XmlEventSource};
///
/// # fn main() -> Result<(), streetmap_data::MarkupError> {
/// let mut source = XmlEventSource::new(r#"<node id="1"/>"#.as_bytes());
/// assert_eq!(
///     source.next_event()?,
///     Some(MarkupEvent::start("node", [("id", "1")]))
/// );
/// assert_eq!(source.next_event()?, Some(MarkupEvent::end("node")));
/// assert_eq!(source.next_event()?, None);
/// # Ok(())
/// # }
/// ```
pub struct XmlEventSource<R: BufRead> {
    reader: Reader<R>,
    buffer: Vec<u8>,
    // End half of a self-closing element, held until the next pull.
    pending_end: Option<String>,
}

impl<R: BufRead> XmlEventSource<R> {
    /// Wrap a buffered reader of XML bytes.
    pub fn new(reader: R) -> Self {
        let mut reader = Reader::from_reader(reader);
        // Whitespace-only character data carries nothing at this level.
        reader.config_mut().trim_text(true);
        Self {
            reader,
            buffer: Vec::new(),
            pending_end: None,
        }
    }

    fn start_event(element: &BytesStart<'_>) -> Result<MarkupEvent, MarkupError> {
        let name = decode(element.name().as_ref())?.to_owned();
        let mut attributes = Vec::new();
        for attribute in element.attributes() {
            let attribute =
                attribute.map_err(|source| MarkupError::Attribute { source })?;
            let key = decode(attribute.key.as_ref())?.to_owned();
            let value = decode(&attribute.value)?.to_owned();
            attributes.push((key, value));
        }
        Ok(MarkupEvent::Start { name, attributes })
    }
}

impl<R: BufRead> EventSource for XmlEventSource<R> {
    fn next_event(&mut self) -> Result<Option<MarkupEvent>, MarkupError> {
        if let Some(name) = self.pending_end.take() {
            return Ok(Some(MarkupEvent::End { name }));
        }
        loop {
            self.buffer.clear();
            match self
                .reader
                .read_event_into(&mut self.buffer)
                .map_err(|source| MarkupError::Syntax { source })?
            {
                Event::Eof => return Ok(None),
                Event::Start(element) => return Ok(Some(Self::start_event(&element)?)),
                Event::Empty(element) => {
                    let event = Self::start_event(&element)?;
                    if let MarkupEvent::Start { name, .. } = &event {
                        self.pending_end = Some(name.clone());
                    }
                    return Ok(Some(event));
                }
                Event::End(element) => {
                    let name = decode(element.name().as_ref())?.to_owned();
                    return Ok(Some(MarkupEvent::End { name }));
                }
                Event::Text(text) => {
                    let text = text
                        .unescape()
                        .map_err(|source| MarkupError::Syntax { source })?;
                    return Ok(Some(MarkupEvent::Text(text.into_owned())));
                }
                // Declarations, comments, CDATA, processing instructions
                // and doctypes carry no map data.
                _ => {}
            }
        }
    }
}

fn decode(bytes: &[u8]) -> Result<&str, MarkupError> {
    str::from_utf8(bytes).map_err(|source| MarkupError::Encoding { source })
}
