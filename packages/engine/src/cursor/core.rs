//! `ScanCursor` implementation

use std::io::{BufRead, Write};

use super::filter::ElementFilter;
use crate::config::ExtractorConfig;
use crate::error::{SiftError, SiftResult};
use crate::expression::QualifiedName;
use crate::serializer::{Capture, ExtractedValue, Representation};
use crate::tokenizer::{XmlEvent, XmlTokenizer};
use crate::tree::DefaultTreeBuilder;

/// Pull cursor with element-level navigation helpers
pub struct ScanCursor<R> {
    tokenizer: XmlTokenizer<R>,
    current: Option<XmlEvent>,
    config: ExtractorConfig,
}

impl<'a> ScanCursor<&'a [u8]> {
    /// Cursor over an in-memory document
    #[must_use]
    pub fn from_str(xml: &'a str) -> Self {
        Self::with_config(xml.as_bytes(), &ExtractorConfig::default())
    }
}

impl<R: BufRead> ScanCursor<R> {
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, &ExtractorConfig::default())
    }

    pub fn with_config(reader: R, config: &ExtractorConfig) -> Self {
        Self {
            tokenizer: XmlTokenizer::with_config(reader, config),
            current: None,
            config: config.clone(),
        }
    }

    /// Step to the next token; returns `false` once the document has ended
    ///
    /// # Errors
    /// Propagates tokenizer errors.
    pub fn advance(&mut self) -> SiftResult<bool> {
        let event = self.tokenizer.next_event()?;
        let more = !matches!(event, XmlEvent::EndDocument);
        self.current = Some(event);
        Ok(more)
    }

    /// Token the cursor is positioned on
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<&XmlEvent> {
        self.current.as_ref()
    }

    /// Name of the current element-open or element-close token
    #[must_use]
    pub fn current_name(&self) -> Option<&QualifiedName> {
        match &self.current {
            Some(XmlEvent::StartElement(start)) => Some(&start.name),
            Some(XmlEvent::EndElement(end)) => Some(&end.name),
            _ => None,
        }
    }

    /// Content of the current character or CDATA token
    #[must_use]
    pub fn current_text(&self) -> Option<&str> {
        match &self.current {
            Some(XmlEvent::Characters(text) | XmlEvent::CData(text)) => Some(text),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn at_end(&self) -> bool {
        matches!(self.current, Some(XmlEvent::EndDocument))
    }

    /// Advance to the next element-open token accepted by `filter`
    ///
    /// Returns `false` when the document ends first.
    ///
    /// # Errors
    /// Propagates tokenizer errors.
    pub fn next_element(&mut self, filter: &ElementFilter) -> SiftResult<bool> {
        while self.advance()? {
            if let Some(XmlEvent::StartElement(start)) = &self.current {
                if filter.matches(&start.name) {
                    tracing::trace!(
                        target: "xmlsift::cursor",
                        element = %start.name,
                        depth = self.tokenizer.depth(),
                        "positioned on element"
                    );
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Text of the current text-only element, leaving the cursor on its close
    ///
    /// # Errors
    /// Fails if the cursor is not on an element-open token or the element
    /// has child elements.
    pub fn element_text(&mut self) -> SiftResult<String> {
        self.require_element()?;
        let mut text = String::new();
        loop {
            self.advance()?;
            match &self.current {
                Some(XmlEvent::Characters(run) | XmlEvent::CData(run)) => text.push_str(run),
                Some(XmlEvent::EndElement(_)) => return Ok(text),
                Some(XmlEvent::StartElement(start)) => {
                    return Err(SiftError::stream(format!(
                        "element text requested but child element {} found",
                        start.name
                    )));
                }
                _ => return Err(SiftError::stream("document ended inside an element")),
            }
        }
    }

    /// Text of the next element accepted by `filter`
    ///
    /// # Errors
    /// See [`Self::element_text`].
    pub fn next_element_text(&mut self, filter: &ElementFilter) -> SiftResult<Option<String>> {
        if !self.next_element(filter)? {
            return Ok(None);
        }
        self.element_text().map(Some)
    }

    /// Count remaining elements accepted by `filter`, consuming the input
    ///
    /// # Errors
    /// Propagates tokenizer errors.
    pub fn count(&mut self, filter: &ElementFilter) -> SiftResult<usize> {
        let mut count = 0;
        while self.next_element(filter)? {
            count += 1;
        }
        tracing::debug!(target: "xmlsift::cursor", count, "counted elements");
        Ok(count)
    }

    /// Render the current element, consuming its subtree
    ///
    /// The cursor is left on the element's close token.
    ///
    /// # Errors
    /// Fails with "no more elements" at the end of the document and when the
    /// cursor is not on an element-open token.
    pub fn element(&mut self, representation: Representation) -> SiftResult<ExtractedValue> {
        let start = match &self.current {
            Some(XmlEvent::StartElement(start)) => start,
            _ => return Err(self.not_on_element()),
        };
        let mut capture = Capture::begin(start, representation, self.config.skip_whitespace_text)?;

        loop {
            let event = self.tokenizer.next_event()?;
            let done = capture.feed(&event)?;
            self.current = Some(event);
            if done {
                break;
            }
        }
        capture.finish(&DefaultTreeBuilder, &self.config)
    }

    /// Render the next element accepted by `filter`
    ///
    /// # Errors
    /// See [`Self::element`].
    pub fn next_element_as(
        &mut self,
        representation: Representation,
        filter: &ElementFilter,
    ) -> SiftResult<Option<ExtractedValue>> {
        if !self.next_element(filter)? {
            return Ok(None);
        }
        self.element(representation).map(Some)
    }

    /// Write the current element's markup to `writer`
    ///
    /// # Errors
    /// See [`Self::element`]; write failures are stream errors.
    pub fn write_element<W: Write>(&mut self, writer: &mut W) -> SiftResult<()> {
        let markup = self.element(Representation::Markup)?.into_string()?;
        writer.write_all(markup.as_bytes())?;
        Ok(())
    }

    /// Write the next element accepted by `filter`; returns whether one was found
    ///
    /// # Errors
    /// See [`Self::write_element`].
    pub fn write_next_element<W: Write>(
        &mut self,
        writer: &mut W,
        filter: &ElementFilter,
    ) -> SiftResult<bool> {
        if !self.next_element(filter)? {
            return Ok(false);
        }
        self.write_element(writer)?;
        Ok(true)
    }

    /// Advance to the next element and return its name
    ///
    /// The name displays in `{uri}local` form.
    ///
    /// # Errors
    /// Propagates tokenizer errors.
    pub fn next_element_type(&mut self) -> SiftResult<Option<QualifiedName>> {
        if !self.next_element(&ElementFilter::any())? {
            return Ok(None);
        }
        Ok(self.current_name().cloned())
    }

    fn require_element(&self) -> SiftResult<()> {
        match &self.current {
            Some(XmlEvent::StartElement(_)) => Ok(()),
            _ => Err(self.not_on_element()),
        }
    }

    fn not_on_element(&self) -> SiftError {
        let position = self.tokenizer.position();
        if self.at_end() {
            SiftError::stream_at("no more elements on the stream", position)
        } else {
            SiftError::stream_at("cursor is not positioned on an element", position)
        }
    }
}
