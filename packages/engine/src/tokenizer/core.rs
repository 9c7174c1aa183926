//! `XmlTokenizer` implementation

use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::events::{ElementEnd, ElementStart, NamespaceBinding, XmlAttribute, XmlEvent};
use super::namespaces::NamespaceScope;
use crate::config::ExtractorConfig;
use crate::error::{SiftError, SiftResult};
use crate::expression::QualifiedName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    NotStarted,
    Prolog,
    InRoot,
    Epilog,
    Finished,
}

/// Namespace-aware pull tokenizer over one input
///
/// A tokenizer is bound to its input for its whole life and is not reusable;
/// create a new one per document. Dropping it releases the input.
pub struct XmlTokenizer<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    scope: NamespaceScope,
    open: Vec<ElementEnd>,
    pending_end: bool,
    phase: Phase,
    max_depth: usize,
}

impl<'a> XmlTokenizer<&'a [u8]> {
    /// Tokenize an in-memory document with default settings
    #[must_use]
    pub fn from_str(xml: &'a str) -> Self {
        Self::with_config(xml.as_bytes(), &ExtractorConfig::default())
    }
}

impl<R: BufRead> XmlTokenizer<R> {
    /// Tokenize a buffered reader with default settings
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, &ExtractorConfig::default())
    }

    /// Tokenize a buffered reader
    pub fn with_config(reader: R, config: &ExtractorConfig) -> Self {
        let mut reader = Reader::from_reader(reader);
        let reader_config = reader.config_mut();
        reader_config.check_end_names = true;
        reader_config.expand_empty_elements = false;
        reader_config.trim_text(false);

        Self {
            reader,
            buf: Vec::with_capacity(config.buffer_capacity),
            scope: NamespaceScope::new(),
            open: Vec::new(),
            pending_end: false,
            phase: Phase::NotStarted,
            max_depth: config.max_depth,
        }
    }

    /// Number of currently open elements
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Bytes consumed from the input so far
    #[inline]
    #[must_use]
    pub fn position(&self) -> u64 {
        self.reader.buffer_position() as u64
    }

    /// Namespace bindings visible at the current position
    #[must_use]
    pub fn in_scope_namespaces(&self) -> Vec<NamespaceBinding> {
        self.scope.in_scope()
    }

    /// Pull the next event
    ///
    /// After `EndDocument` every further call returns `EndDocument` again.
    ///
    /// # Errors
    /// Any malformed construct or read failure is a stream error; the
    /// tokenizer should not be used after one.
    pub fn next_event(&mut self) -> SiftResult<XmlEvent> {
        match self.phase {
            Phase::NotStarted => {
                self.phase = Phase::Prolog;
                return Ok(XmlEvent::StartDocument);
            }
            Phase::Finished => return Ok(XmlEvent::EndDocument),
            _ => {}
        }

        if self.pending_end {
            self.pending_end = false;
            return Ok(XmlEvent::EndElement(self.close_element()?));
        }

        let mut buf = std::mem::take(&mut self.buf);
        let result = self.read_significant(&mut buf);
        buf.clear();
        self.buf = buf;

        let position = self.position();
        result.map_err(|e| e.at_position(position))
    }

    fn read_significant(&mut self, buf: &mut Vec<u8>) -> SiftResult<XmlEvent> {
        loop {
            buf.clear();
            let event = self.reader.read_event_into(buf)?;
            match event {
                Event::Start(start) => return self.open_element(&start).map(XmlEvent::StartElement),
                Event::Empty(start) => {
                    let element = self.open_element(&start)?;
                    self.pending_end = true;
                    return Ok(XmlEvent::StartElement(element));
                }
                Event::End(_) => return Ok(XmlEvent::EndElement(self.close_element()?)),
                Event::Text(text) => {
                    let text = text.unescape()?;
                    if self.phase != Phase::InRoot {
                        if text.trim().is_empty() {
                            continue;
                        }
                        return Err(SiftError::stream("character data outside the root element"));
                    }
                    return Ok(XmlEvent::Characters(text.into_owned()));
                }
                Event::CData(cdata) => {
                    if self.phase != Phase::InRoot {
                        return Err(SiftError::stream("CDATA section outside the root element"));
                    }
                    let content = std::str::from_utf8(&cdata)?.to_string();
                    return Ok(XmlEvent::CData(content));
                }
                Event::Eof => return self.finish(),
                _ => {}
            }
        }
    }

    fn open_element(&mut self, start: &BytesStart<'_>) -> SiftResult<ElementStart> {
        match self.phase {
            Phase::Epilog => return Err(SiftError::stream("document has more than one root element")),
            Phase::Prolog => self.phase = Phase::InRoot,
            _ => {}
        }
        if self.open.len() >= self.max_depth {
            return Err(SiftError::stream(format!(
                "element nesting exceeds the configured maximum depth of {}",
                self.max_depth
            )));
        }

        let raw = std::str::from_utf8(start.name().as_ref())?.to_string();
        let (prefix, local_name) = split_raw_name(&raw);

        let mut namespaces = Vec::new();
        let mut raw_attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
            let value = attr.unescape_value()?.into_owned();
            if key == "xmlns" {
                namespaces.push(NamespaceBinding::new(None, value));
            } else if let Some(declared) = key.strip_prefix("xmlns:") {
                namespaces.push(NamespaceBinding::new(Some(declared), value));
            } else {
                raw_attributes.push((key, value));
            }
        }
        self.scope.push_frame(namespaces.clone());

        let namespace = self.resolve(prefix, &raw)?;
        let name = QualifiedName::new(namespace, local_name);

        let mut attributes = Vec::with_capacity(raw_attributes.len());
        for (key, value) in raw_attributes {
            let (attr_prefix, attr_local) = split_raw_name(&key);
            // Unprefixed attributes are never in the default namespace
            let attr_namespace = match attr_prefix {
                Some(_) => self.resolve(attr_prefix, &key)?,
                None => String::new(),
            };
            attributes.push(XmlAttribute {
                prefix: attr_prefix.map(str::to_string),
                name: QualifiedName::new(attr_namespace, attr_local),
                value,
            });
        }

        let prefix = prefix.map(str::to_string);
        self.open.push(ElementEnd {
            name: name.clone(),
            prefix: prefix.clone(),
        });

        tracing::trace!(
            target: "xmlsift::tokenizer",
            element = %name,
            depth = self.open.len(),
            "element open"
        );

        Ok(ElementStart {
            name,
            prefix,
            attributes,
            namespaces,
        })
    }

    fn close_element(&mut self) -> SiftResult<ElementEnd> {
        let end = self
            .open
            .pop()
            .ok_or_else(|| SiftError::stream("closing tag without a matching opening tag"))?;
        self.scope.pop_frame();
        if self.open.is_empty() {
            self.phase = Phase::Epilog;
        }
        Ok(end)
    }

    fn finish(&mut self) -> SiftResult<XmlEvent> {
        if let Some(innermost) = self.open.last() {
            return Err(SiftError::stream(format!(
                "unexpected end of document: {} unclosed element(s), innermost <{}>",
                self.open.len(),
                innermost.raw_name()
            )));
        }
        if self.phase == Phase::Prolog {
            return Err(SiftError::stream("document has no root element"));
        }
        self.phase = Phase::Finished;
        Ok(XmlEvent::EndDocument)
    }

    fn resolve(&self, prefix: Option<&str>, raw: &str) -> SiftResult<String> {
        self.scope
            .resolve(prefix)
            .map(str::to_string)
            .ok_or_else(|| SiftError::stream(format!("unbound namespace prefix in '{raw}'")))
    }
}

fn split_raw_name(raw: &str) -> (Option<&str>, &str) {
    match raw.split_once(':') {
        Some((prefix, local)) => (Some(prefix), local),
        None => (None, raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(xml: &str) -> SiftResult<Vec<XmlEvent>> {
        let mut tokenizer = XmlTokenizer::from_str(xml);
        let mut events = Vec::new();
        loop {
            let event = tokenizer.next_event()?;
            let done = event == XmlEvent::EndDocument;
            events.push(event);
            if done {
                return Ok(events);
            }
        }
    }

    #[test]
    fn resolves_prefixed_and_default_namespaces() {
        let events = collect(r#"<a xmlns="urn:a" xmlns:b="urn:b"><b:c x="1" b:y="2"/></a>"#)
            .expect("well-formed");
        let XmlEvent::StartElement(root) = &events[1] else {
            panic!("expected root start, got {:?}", events[1]);
        };
        assert_eq!(root.name, QualifiedName::new("urn:a", "a"));
        assert_eq!(root.namespaces.len(), 2);

        let XmlEvent::StartElement(child) = &events[2] else {
            panic!("expected child start, got {:?}", events[2]);
        };
        assert_eq!(child.name, QualifiedName::new("urn:b", "c"));
        assert_eq!(child.raw_name(), "b:c");
        assert_eq!(child.attributes[0].name.namespace(), "");
        assert_eq!(child.attributes[1].name.namespace(), "urn:b");
        assert!(matches!(events[3], XmlEvent::EndElement(_)));
    }

    #[test]
    fn empty_elements_expand_to_open_and_close() {
        let events = collect("<a><b/></a>").expect("well-formed");
        assert_eq!(events.len(), 6);
        assert!(matches!(&events[3], XmlEvent::EndElement(end) if end.name.local_name() == "b"));
    }

    #[test]
    fn keeps_cdata_separate_from_text() {
        let events = collect("<a>x<![CDATA[<y/>]]></a>").expect("well-formed");
        assert_eq!(events[2], XmlEvent::Characters("x".to_string()));
        assert_eq!(events[3], XmlEvent::CData("<y/>".to_string()));
    }

    #[test]
    fn rejects_malformed_documents() {
        for xml in [
            "<a><b></a>",
            "<a>",
            "<a></a><b></b>",
            "</a>",
            "<p:a></p:a>",
            "",
            "<a></a>trailing",
        ] {
            let err = collect(xml).expect_err(xml);
            assert!(err.is_stream(), "{xml}: {err}");
        }
    }

    #[test]
    fn reports_bindings_in_scope() {
        let mut tokenizer =
            XmlTokenizer::from_str(r#"<a xmlns="urn:a" xmlns:b="urn:b"><c xmlns:b="urn:inner"/></a>"#);
        assert_eq!(tokenizer.next_event().expect("prolog"), XmlEvent::StartDocument);
        assert!(matches!(tokenizer.next_event().expect("open a"), XmlEvent::StartElement(_)));
        assert_eq!(tokenizer.depth(), 1);
        assert_eq!(tokenizer.in_scope_namespaces().len(), 2);

        assert!(matches!(tokenizer.next_event().expect("open c"), XmlEvent::StartElement(_)));
        assert_eq!(tokenizer.depth(), 2);
        let bindings = tokenizer.in_scope_namespaces();
        assert_eq!(bindings.len(), 2);
        assert!(bindings.contains(&NamespaceBinding::new(Some("b"), "urn:inner")));
        assert!(bindings.contains(&NamespaceBinding::new(None, "urn:a")));
    }

    #[test]
    fn enforces_max_depth() {
        let config = ExtractorConfig::default().with_max_depth(2);
        let mut tokenizer = XmlTokenizer::with_config("<a><b><c/></b></a>".as_bytes(), &config);
        let mut result = Ok(XmlEvent::StartDocument);
        for _ in 0..4 {
            result = tokenizer.next_event();
        }
        assert!(result.is_err());
    }

    #[test]
    fn ends_repeat_after_document_end() {
        let mut tokenizer = XmlTokenizer::from_str("<a/>");
        while tokenizer.next_event().expect("well-formed") != XmlEvent::EndDocument {}
        assert_eq!(tokenizer.next_event().expect("finished"), XmlEvent::EndDocument);
    }
}
