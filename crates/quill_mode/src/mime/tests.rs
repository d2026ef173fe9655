use super::*;

#[test]
fn plain_javascript_types() {
    for mime in [
        "text/javascript",
        "text/ecmascript",
        "application/javascript",
        "application/x-javascript",
        "application/ecmascript",
    ] {
        assert_eq!(dialect_for_mime(mime), Some(Dialect::empty()), "{mime}");
    }
}

#[test]
fn json_family() {
    for mime in ["application/json", "application/x-json", "application/manifest+json"] {
        assert_eq!(dialect_for_mime(mime), Some(Dialect::JSON), "{mime}");
    }
    assert_eq!(dialect_for_mime("application/ld+json"), Some(Dialect::JSONLD));
}

#[test]
fn typescript_types() {
    assert_eq!(dialect_for_mime("text/typescript"), Some(Dialect::TYPESCRIPT));
    assert_eq!(
        dialect_for_mime("application/typescript"),
        Some(Dialect::TYPESCRIPT)
    );
}

#[test]
fn case_insensitive_and_unknown() {
    assert_eq!(dialect_for_mime("Application/JSON"), Some(Dialect::JSON));
    assert_eq!(dialect_for_mime("text/html"), None);
}

#[test]
fn names() {
    assert_eq!(dialect_for_name("json"), Some(Dialect::JSON));
    assert_eq!(dialect_for_name("jsonld"), Some(Dialect::JSONLD));
    assert_eq!(dialect_for_name("javascript"), Some(Dialect::empty()));
    assert_eq!(dialect_for_name("JSON"), None);
}
