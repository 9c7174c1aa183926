//! Namespace-minimal markup rendering

use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{SiftError, SiftResult};
use crate::tokenizer::{ElementEnd, ElementStart, NamespaceBinding, XML_NAMESPACE};

/// Bindings declared inside the fragment, one frame per open element
#[derive(Debug, Default)]
struct DeclaredNamespaces {
    frames: Vec<Vec<NamespaceBinding>>,
}

impl DeclaredNamespaces {
    /// Whether `binding` is already in effect, looking at `pending` first
    fn is_visible(&self, pending: &[NamespaceBinding], binding: &NamespaceBinding) -> bool {
        let innermost = pending
            .iter()
            .rev()
            .chain(self.frames.iter().rev().flat_map(|frame| frame.iter().rev()))
            .find(|declared| declared.prefix == binding.prefix);

        match innermost {
            Some(declared) => declared.uri == binding.uri,
            // Outside any default declaration, unprefixed names have no namespace
            None => binding.prefix.is_none() && binding.uri.is_empty(),
        }
    }
}

/// Writes one standalone fragment
///
/// Declarations written on an element in the source are kept unless the same
/// binding is already in effect within the fragment. Bindings the fragment
/// inherited from outside are added at the first element that uses them.
pub struct MarkupWriter {
    writer: Writer<Vec<u8>>,
    declared: DeclaredNamespaces,
    skip_whitespace_text: bool,
}

impl MarkupWriter {
    #[must_use]
    pub fn new(skip_whitespace_text: bool) -> Self {
        Self {
            writer: Writer::new(Vec::new()),
            declared: DeclaredNamespaces::default(),
            skip_whitespace_text,
        }
    }

    /// Writer that puts each element on its own line, indented by `indent` spaces per level
    #[must_use]
    pub fn indented(skip_whitespace_text: bool, indent: usize) -> Self {
        Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', indent),
            declared: DeclaredNamespaces::default(),
            skip_whitespace_text,
        }
    }

    /// Write `<?xml version="1.0" encoding="UTF-8"?>`
    ///
    /// # Errors
    /// Fails once anything else has been written.
    pub fn declaration(&mut self) -> SiftResult<()> {
        if !self.writer.get_ref().is_empty() {
            return Err(SiftError::stream("XML declaration must precede the fragment"));
        }
        self.write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
    }

    /// Open an element, declaring whatever bindings it needs
    ///
    /// # Errors
    /// Fails only if the underlying writer fails.
    pub fn start(&mut self, element: &ElementStart) -> SiftResult<()> {
        let mut declarations: Vec<NamespaceBinding> = Vec::new();

        for binding in &element.namespaces {
            if !self.declared.is_visible(&declarations, binding) {
                declarations.push(binding.clone());
            }
        }

        let required = std::iter::once(element.name_binding()).chain(
            element
                .attributes
                .iter()
                .filter(|attr| attr.prefix.is_some())
                .map(|attr| NamespaceBinding::new(attr.prefix.as_deref(), attr.name.namespace())),
        );
        for binding in required {
            if binding.prefix.as_deref() == Some("xml") && binding.uri == XML_NAMESPACE {
                continue;
            }
            if !self.declared.is_visible(&declarations, &binding) {
                declarations.push(binding);
            }
        }

        let raw_name = element.raw_name();
        let mut start = BytesStart::new(raw_name.as_str());
        for binding in &declarations {
            start.push_attribute((binding.attribute_name().as_str(), binding.uri.as_str()));
        }
        for attr in &element.attributes {
            start.push_attribute((attr.raw_name().as_str(), attr.value.as_str()));
        }

        self.declared.frames.push(declarations);
        self.write(Event::Start(start))
    }

    /// Write character data, escaping markup characters
    ///
    /// # Errors
    /// Fails only if the underlying writer fails.
    pub fn characters(&mut self, text: &str) -> SiftResult<()> {
        if self.skip_whitespace_text && text.trim().is_empty() {
            return Ok(());
        }
        let escaped = partial_escape(text);
        self.write(Event::Text(BytesText::from_escaped(escaped)))
    }

    /// Write a CDATA section verbatim
    ///
    /// # Errors
    /// Fails only if the underlying writer fails.
    pub fn cdata(&mut self, content: &str) -> SiftResult<()> {
        self.write(Event::CData(BytesCData::new(content)))
    }

    /// Close an element
    ///
    /// # Errors
    /// Fails when no element is open or the writer fails.
    pub fn end(&mut self, element: &ElementEnd) -> SiftResult<()> {
        if self.declared.frames.pop().is_none() {
            return Err(SiftError::stream(format!(
                "closing </{}> with no open element in fragment",
                element.raw_name()
            )));
        }
        self.write(Event::End(BytesEnd::new(element.raw_name())))
    }

    /// Take the rendered fragment
    ///
    /// # Errors
    /// Fails if elements are still open.
    pub fn finish(self) -> SiftResult<String> {
        if !self.declared.frames.is_empty() {
            return Err(SiftError::stream(format!(
                "fragment ended with {} unclosed element(s)",
                self.declared.frames.len()
            )));
        }
        Ok(String::from_utf8(self.writer.into_inner())?)
    }

    fn write(&mut self, event: Event<'_>) -> SiftResult<()> {
        self.writer
            .write_event(event)
            .map_err(|e| SiftError::stream(format!("failed to write fragment: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::QualifiedName;
    use crate::tokenizer::XmlAttribute;

    fn start(prefix: Option<&str>, ns: &str, local: &str, decls: Vec<NamespaceBinding>) -> ElementStart {
        ElementStart {
            name: QualifiedName::new(ns, local),
            prefix: prefix.map(str::to_string),
            attributes: Vec::new(),
            namespaces: decls,
        }
    }

    fn end(prefix: Option<&str>, ns: &str, local: &str) -> ElementEnd {
        ElementEnd {
            name: QualifiedName::new(ns, local),
            prefix: prefix.map(str::to_string),
        }
    }

    #[test]
    fn inherited_binding_is_declared_once() {
        let ord = "http://acme.com/nouns/order";
        let mut writer = MarkupWriter::new(true);
        writer.start(&start(Some("ord"), ord, "item", vec![])).expect("start");
        writer.start(&start(Some("ord"), ord, "sku", vec![])).expect("start");
        writer.characters("005012").expect("text");
        writer.end(&end(Some("ord"), ord, "sku")).expect("end");
        writer.end(&end(Some("ord"), ord, "item")).expect("end");

        assert_eq!(
            writer.finish().expect("finish"),
            r#"<ord:item xmlns:ord="http://acme.com/nouns/order"><ord:sku>005012</ord:sku></ord:item>"#
        );
    }

    #[test]
    fn sibling_subtrees_each_declare_their_own_binding() {
        let mut writer = MarkupWriter::new(true);
        writer.start(&start(None, "", "root", vec![])).expect("start");
        for _ in 0..2 {
            writer
                .start(&start(Some("x"), "urn:x", "a", vec![NamespaceBinding::new(Some("x"), "urn:x")]))
                .expect("start");
            writer.end(&end(Some("x"), "urn:x", "a")).expect("end");
        }
        writer.end(&end(None, "", "root")).expect("end");

        assert_eq!(
            writer.finish().expect("finish"),
            r#"<root><x:a xmlns:x="urn:x"></x:a><x:a xmlns:x="urn:x"></x:a></root>"#
        );
    }

    #[test]
    fn prefixed_attribute_binding_is_declared() {
        let mut element = start(None, "", "a", vec![]);
        element.attributes.push(XmlAttribute {
            prefix: Some("xsi".to_string()),
            name: QualifiedName::new("http://www.w3.org/2001/XMLSchema-instance", "nil"),
            value: "true".to_string(),
        });
        let mut writer = MarkupWriter::new(true);
        writer.start(&element).expect("start");
        writer.end(&end(None, "", "a")).expect("end");
        assert_eq!(
            writer.finish().expect("finish"),
            r#"<a xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:nil="true"></a>"#
        );
    }

    #[test]
    fn escapes_text_and_keeps_cdata_verbatim() {
        let mut writer = MarkupWriter::new(true);
        writer.start(&start(None, "", "a", vec![])).expect("start");
        writer.characters("1 < 2 & 3").expect("text");
        writer.cdata("<raw & kept>").expect("cdata");
        writer.end(&end(None, "", "a")).expect("end");
        assert_eq!(
            writer.finish().expect("finish"),
            "<a>1 &lt; 2 &amp; 3<![CDATA[<raw & kept>]]></a>"
        );
    }

    #[test]
    fn unbalanced_close_is_an_error() {
        let mut writer = MarkupWriter::new(true);
        assert!(writer.end(&end(None, "", "a")).is_err());
    }
}
