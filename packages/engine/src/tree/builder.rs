//! Markup to tree conversion

use super::node::{XmlElement, XmlNode};
use crate::config::ExtractorConfig;
use crate::error::{SiftError, SiftResult};
use crate::tokenizer::{XmlEvent, XmlTokenizer};

/// Converts a markup string into an owned tree
pub trait TreeBuilder: Send + Sync {
    /// Build the tree rooted at the document element of `markup`
    ///
    /// `config` is the configuration of the scan that captured the markup,
    /// so limits such as `max_depth` apply to the rebuilt tree as well.
    ///
    /// # Errors
    /// Fails with a stream error for malformed markup.
    fn build(&self, markup: &str, config: &ExtractorConfig) -> SiftResult<XmlNode>;
}

/// Tree builder driven by [`XmlTokenizer`]
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTreeBuilder;

impl TreeBuilder for DefaultTreeBuilder {
    fn build(&self, markup: &str, config: &ExtractorConfig) -> SiftResult<XmlNode> {
        let mut tokenizer = XmlTokenizer::with_config(markup.as_bytes(), config);
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root = None;

        loop {
            match tokenizer.next_event()? {
                XmlEvent::StartElement(start) => stack.push(XmlElement::from_start(start)),
                XmlEvent::EndElement(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| SiftError::stream("unbalanced markup"))?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(XmlNode::Element(element)),
                        None => root = Some(XmlNode::Element(element)),
                    }
                }
                XmlEvent::Characters(text) => {
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(XmlNode::Text(text));
                    }
                }
                XmlEvent::CData(content) => {
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(XmlNode::CData(content));
                    }
                }
                XmlEvent::StartDocument => {}
                XmlEvent::EndDocument => break,
            }
        }

        root.ok_or_else(|| SiftError::stream("markup has no root element"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(markup: &str) -> SiftResult<XmlNode> {
        DefaultTreeBuilder.build(markup, &ExtractorConfig::default())
    }

    #[test]
    fn builds_navigable_tree() {
        let node = build(r#"<ord:quantity xmlns:ord="http://acme.com/nouns/order" unit="ea">438</ord:quantity>"#)
            .expect("well-formed");
        let element = node.as_element().expect("element root");
        assert_eq!(element.node_name(), "ord:quantity");
        assert_eq!(element.local_name(), "quantity");
        assert_eq!(element.namespace_uri(), "http://acme.com/nouns/order");
        assert_eq!(element.attribute("unit"), Some("ea"));
        assert_eq!(element.first_child().and_then(XmlNode::node_value), Some("438"));
    }

    #[test]
    fn tree_renders_back_to_markup() {
        let markup = r#"<a xmlns="urn:a"><b x="1">t</b><![CDATA[c]]></a>"#;
        let node = build(markup).expect("well-formed");
        assert_eq!(node.to_markup().expect("render"), markup);
    }

    #[test]
    fn pretty_printed_markup_with_declaration() {
        let node = build("<a><b>t</b><c>u</c></a>").expect("well-formed");
        assert_eq!(
            node.to_markup_with(2, true).expect("render"),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<a>\n  <b>t</b>\n  <c>u</c>\n</a>"
        );
        assert_eq!(node.to_markup_with(0, false).expect("render"), "<a><b>t</b><c>u</c></a>");
    }

    #[test]
    fn find_searches_descendants() {
        let node = build("<a><b><c>deep</c></b><c>shallow</c></a>")
            .expect("well-formed");
        let element = node.as_element().expect("element");
        assert_eq!(element.find("c").map(XmlElement::text_content).as_deref(), Some("deep"));
        assert_eq!(element.child_elements().count(), 2);
    }

    #[test]
    fn malformed_markup_is_rejected() {
        assert!(build("<a><b></a>").is_err());
    }

    #[test]
    fn depth_limit_follows_config() {
        let markup = format!("{}{}", "<x>".repeat(600), "</x>".repeat(600));
        let err = build(&markup).expect_err("default limit is 512");
        assert_eq!(err.kind(), crate::error::ErrorKind::Stream);

        let deep = ExtractorConfig {
            max_depth: 1000,
            ..ExtractorConfig::default()
        };
        let node = DefaultTreeBuilder.build(&markup, &deep).expect("within limit");
        assert_eq!(node.as_element().map(XmlElement::local_name), Some("x"));
    }
}
