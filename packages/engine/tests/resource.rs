//! Resource loading from the filesystem

use std::fs;

use tempfile::TempDir;
use xmlsift_engine::{
    read_to_string, ErrorKind, FileResourceReader, PathExtractor, Representation, ResourceReader,
};

fn fixture_dir() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    fs::create_dir_all(dir.path().join("orders")).expect("subdir");
    fs::write(
        dir.path().join("orders/order.xml"),
        r#"<o:order xmlns:o="urn:orders"><o:id>77</o:id></o:order>"#,
    )
    .expect("write fixture");
    dir
}

#[test]
fn loads_named_resource_relative_to_root() {
    let dir = fixture_dir();
    let reader = FileResourceReader::new(dir.path());

    let xml = reader.read_resource("orders/order.xml").expect("readable");
    let results = PathExtractor::from_selectors(["//order/id"])
        .expect("valid")
        .extract_str(&xml, Representation::Text)
        .expect("scan");
    assert_eq!(results.get_selector("//order/id").expect("valid").and_then(|v| v.as_str()), Some("77"));
}

#[test]
fn leading_slash_is_relative_to_root() {
    let dir = fixture_dir();
    let reader = FileResourceReader::new(dir.path());
    assert!(reader.read_resource("/orders/order.xml").is_ok());
}

#[test]
fn missing_resource_names_the_resource() {
    let dir = fixture_dir();
    let reader = FileResourceReader::new(dir.path());
    let err = reader.read_resource("orders/missing.xml").expect_err("missing");
    assert_eq!(err.kind(), ErrorKind::Resource);
    assert!(err.to_string().contains("orders/missing.xml"));
}

#[test]
fn read_to_string_from_file() {
    let dir = fixture_dir();
    let file = fs::File::open(dir.path().join("orders/order.xml")).expect("open");
    let text = read_to_string(file).expect("utf8");
    assert!(text.starts_with("<o:order"));
}
