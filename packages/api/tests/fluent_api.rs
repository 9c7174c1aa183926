//! Fluent builder behaviour

use std::fs;

use tempfile::TempDir;
use xmlsift::{ErrorKind, ExtractorConfig, FileResourceReader, Sift, XmlNode};

const ORDER: &str = r#"<?xml version="1.0"?>
<ord:Order xmlns:ord="http://acme.com/nouns/order">
    <ord:customerId>customerFor-5</ord:customerId>
    <ord:item sku="048793"><ord:quantity>438</ord:quantity></ord:item>
    <ord:item sku="005012"><ord:quantity>149</ord:quantity></ord:item>
</ord:Order>"#;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn text_values_by_any_selector_spelling() {
    init_logging();
    let values = Sift::text()
        .select("//Order/customerId")
        .select("item/quantity")
        .debug()
        .from_str(ORDER)
        .expect("scan");

    assert_eq!(values.len(), 2);
    assert_eq!(values.get("//Order/customerId").map(String::as_str), Some("customerFor-5"));
    assert_eq!(values.get("//item/quantity").map(String::as_str), Some("438"));
    assert_eq!(values.get("item/quantity").map(String::as_str), Some("438"));
}

#[test]
fn markup_first_value() {
    let markup = Sift::markup().select("//Order/customerId").first(ORDER).expect("scan");
    assert_eq!(
        markup.as_deref(),
        Some(r#"<ord:customerId xmlns:ord="http://acme.com/nouns/order">customerFor-5</ord:customerId>"#)
    );
}

#[test]
fn tree_values() {
    let node = Sift::tree()
        .select("//item")
        .first(ORDER)
        .expect("scan")
        .expect("matched");
    let item = node.as_element().expect("element");
    assert_eq!(item.attribute("sku"), Some("048793"));
    assert_eq!(item.find("quantity").map(|q| q.text_content()), Some("438".to_string()));
}

#[test]
fn attribute_selector_in_tree_mode_is_text_node() {
    let node = Sift::tree().select("//item@sku").first(ORDER).expect("scan");
    assert_eq!(node, Some(XmlNode::Text("048793".to_string())));
}

#[test]
fn switching_output_kind_keeps_selectors() {
    let builder = Sift::text().select("//item/quantity");
    let markup = builder.as_markup().first(ORDER).expect("scan");
    assert_eq!(
        markup.as_deref(),
        Some(r#"<ord:quantity xmlns:ord="http://acme.com/nouns/order">438</ord:quantity>"#)
    );
}

#[test]
fn bad_selector_is_reported_not_swallowed() {
    let err = Sift::text()
        .select("//Order/customerId")
        .select("//Order/")
        .from_str(ORDER)
        .expect_err("trailing slash");
    assert_eq!(err.kind(), ErrorKind::SelectorSyntax);
}

#[test]
fn first_reports_rejected_selector() {
    let err = Sift::text()
        .select("//Order/")
        .first(ORDER)
        .expect_err("only selector was rejected");
    assert_eq!(err.kind(), ErrorKind::SelectorSyntax);
}

#[test]
fn first_reports_invalid_settings() {
    let err = Sift::text()
        .select("//Order/customerId")
        .max_depth(0)
        .first(ORDER)
        .expect_err("zero depth");
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn invalid_settings_are_configuration_errors() {
    let err = Sift::text()
        .select("//Order")
        .max_depth(0)
        .from_str(ORDER)
        .expect_err("zero depth");
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn read_to_end_reports_trailing_corruption() {
    let xml = "<r><a>1</a><b>";
    assert!(Sift::text().select("//a").from_str(xml).is_ok());
    let err = Sift::text().select("//a").read_to_end().from_str(xml).expect_err("unclosed");
    assert_eq!(err.kind(), ErrorKind::Stream);
}

#[test]
fn keep_whitespace_in_markup() {
    let markup = Sift::markup()
        .select("//item")
        .config(ExtractorConfig::default())
        .keep_whitespace()
        .first("<r><item> <a>x</a> </item></r>")
        .expect("scan");
    assert_eq!(markup.as_deref(), Some("<item> <a>x</a> </item>"));
}

#[test]
fn from_file_and_resource() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("order.xml"), ORDER).expect("write");

    let from_file = Sift::text()
        .select("//customerId")
        .from_file(dir.path().join("order.xml"))
        .expect("scan");
    assert_eq!(from_file.get("//customerId").map(String::as_str), Some("customerFor-5"));

    let resources = FileResourceReader::new(dir.path());
    let from_resource = Sift::text()
        .select("//customerId")
        .from_resource(&resources, "order.xml")
        .expect("scan");
    assert_eq!(from_resource.into_map().get("//customerId").map(String::as_str), Some("customerFor-5"));

    let missing = Sift::text().select("//customerId").from_file(dir.path().join("nope.xml"));
    assert_eq!(missing.expect_err("missing").kind(), ErrorKind::Resource);
}

#[test]
fn document_type_shortcut() {
    assert_eq!(
        Sift::document_type(ORDER).expect("root"),
        "{http://acme.com/nouns/order}Order"
    );
}

#[test]
fn cursor_shortcut_counts_items() {
    let mut cursor = Sift::cursor(ORDER);
    assert_eq!(cursor.count(&"item".into()).expect("scan"), 2);
}

#[test]
fn scan_stats_travel_with_values() {
    let values = Sift::text().select("//customerId").from_str(ORDER).expect("scan");
    assert!(values.stats().stopped_early);
    assert_eq!(values.stats().matches, 1);
}
