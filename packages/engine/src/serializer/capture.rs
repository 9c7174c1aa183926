//! Capture of one matched subtree

use super::markup::MarkupWriter;
use super::representation::{ExtractedValue, Representation};
use super::text::TextCollector;
use crate::config::ExtractorConfig;
use crate::error::{SiftError, SiftResult};
use crate::tokenizer::{ElementStart, XmlEvent};
use crate::tree::TreeBuilder;

enum Sink {
    Text(TextCollector),
    Markup(MarkupWriter),
}

/// Buffers the tokens of one element, from its open through its balanced close
///
/// Depth is counted over every nested element, so a descendant with the same
/// name as the captured element never ends the capture early.
pub struct Capture {
    representation: Representation,
    sink: Sink,
    depth: usize,
}

impl Capture {
    /// Start capturing at `start`
    ///
    /// # Errors
    /// Fails only if the markup writer fails.
    pub fn begin(
        start: &ElementStart,
        representation: Representation,
        skip_whitespace_text: bool,
    ) -> SiftResult<Self> {
        let sink = match representation {
            Representation::Text => Sink::Text(TextCollector::new()),
            Representation::Markup | Representation::TreeNode => {
                let mut writer = MarkupWriter::new(skip_whitespace_text);
                writer.start(start)?;
                Sink::Markup(writer)
            }
        };
        Ok(Self {
            representation,
            sink,
            depth: 1,
        })
    }

    /// Feed the next token; returns `true` once the captured element closed
    ///
    /// # Errors
    /// Fails when fed after completion, on document boundaries, or when the
    /// writer fails.
    pub fn feed(&mut self, event: &XmlEvent) -> SiftResult<bool> {
        if self.depth == 0 {
            return Err(SiftError::stream("capture fed after its element closed"));
        }

        match (event, &mut self.sink) {
            (XmlEvent::StartElement(start), sink) => {
                self.depth += 1;
                if let Sink::Markup(writer) = sink {
                    writer.start(start)?;
                }
            }
            (XmlEvent::EndElement(end), sink) => {
                self.depth -= 1;
                if let Sink::Markup(writer) = sink {
                    writer.end(end)?;
                }
            }
            (XmlEvent::Characters(text), Sink::Text(collector)) => collector.characters(text),
            (XmlEvent::Characters(text), Sink::Markup(writer)) => writer.characters(text)?,
            (XmlEvent::CData(content), Sink::Text(collector)) => collector.cdata(content),
            (XmlEvent::CData(content), Sink::Markup(writer)) => writer.cdata(content)?,
            (XmlEvent::StartDocument | XmlEvent::EndDocument, _) => {
                return Err(SiftError::stream("document boundary inside a captured element"));
            }
        }

        Ok(self.depth == 0)
    }

    /// Render the captured element
    ///
    /// # Errors
    /// Fails if the element has not closed yet or tree building fails.
    pub fn finish(
        self,
        tree_builder: &dyn TreeBuilder,
        config: &ExtractorConfig,
    ) -> SiftResult<ExtractedValue> {
        if self.depth != 0 {
            return Err(SiftError::stream("captured element did not close"));
        }
        match (self.representation, self.sink) {
            (Representation::Text, Sink::Text(collector)) => Ok(ExtractedValue::Text(collector.finish())),
            (Representation::Markup, Sink::Markup(writer)) => Ok(ExtractedValue::Markup(writer.finish()?)),
            (Representation::TreeNode, Sink::Markup(writer)) => {
                let markup = writer.finish()?;
                Ok(ExtractedValue::Node(tree_builder.build(&markup, config)?))
            }
            (representation, _) => Err(SiftError::unsupported_representation(representation.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::XmlTokenizer;
    use crate::tree::DefaultTreeBuilder;

    fn capture_first(xml: &str, local: &str, representation: Representation) -> ExtractedValue {
        let mut tokenizer = XmlTokenizer::from_str(xml);
        loop {
            match tokenizer.next_event().expect("well-formed") {
                XmlEvent::StartElement(start) if start.name.local_name() == local => {
                    let mut capture = Capture::begin(&start, representation, true).expect("begin");
                    while !capture.feed(&tokenizer.next_event().expect("event")).expect("feed") {}
                    return capture.finish(&DefaultTreeBuilder, &ExtractorConfig::default()).expect("finish");
                }
                XmlEvent::EndDocument => panic!("{local} not found"),
                _ => {}
            }
        }
    }

    #[test]
    fn same_named_descendant_does_not_end_capture() {
        let xml = "<r><item><item>inner</item><tail>t</tail></item></r>";
        let value = capture_first(xml, "item", Representation::Markup);
        assert_eq!(
            value,
            ExtractedValue::Markup("<item><item>inner</item><tail>t</tail></item>".to_string())
        );
    }

    #[test]
    fn text_capture_concatenates_content() {
        let xml = "<r><a>\n  <b>one</b>\n  <c>two</c>\n</a></r>";
        let value = capture_first(xml, "a", Representation::Text);
        assert_eq!(value, ExtractedValue::Text("onetwo".to_string()));
    }

    #[test]
    fn tree_capture_builds_node() {
        let xml = r#"<r xmlns:p="urn:p"><p:a k="v">x</p:a></r>"#;
        let value = capture_first(xml, "a", Representation::TreeNode);
        let node = value.as_node().and_then(|n| n.as_element()).expect("element");
        assert_eq!(node.namespace_uri(), "urn:p");
        assert_eq!(node.attribute("k"), Some("v"));
    }
}
