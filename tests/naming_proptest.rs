//! Property-based tests for the naming convention and the type registry

use namedconf::camel_to_hyphened;
use namedconf::namedconf::ast::{TypeRegistry, KNOWN_KINDS};
use namedconf::{parse_document, AstNode};
use proptest::prelude::*;

/// Strategy: one to four capitalized words
fn camel_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z][a-z]{0,6}", 1..5)
}

/// Strategy: statement tags the grammar accepts as bare words
fn statement_tag() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_-]{0,12}"
}

proptest! {
    #[test]
    fn test_translator_joins_words_with_hyphens(words in camel_words()) {
        let identifier = words.concat();
        let expected = words
            .iter()
            .map(|w| w.to_lowercase())
            .collect::<Vec<_>>()
            .join("-");
        prop_assert_eq!(camel_to_hyphened(&identifier), expected);
    }

    #[test]
    fn test_translator_output_is_lowercase(words in camel_words()) {
        let keyword = camel_to_hyphened(&words.concat());
        prop_assert!(!keyword.chars().any(|c| c.is_uppercase()));
        prop_assert!(!keyword.starts_with('-'));
    }

    #[test]
    fn test_unknown_tags_match_exactly(tag in statement_tag()) {
        prop_assume!(TypeRegistry::global().lookup(&tag).is_none());

        let results = parse_document(&format!("{} value;", tag)).unwrap();
        prop_assert_eq!(results[0].node_type(), tag.as_str());
        prop_assert!(results[0].is_same_nodetype(&tag));
        prop_assert_eq!(results.search(&tag).len(), 1);
        prop_assert_eq!(results.to_string(), format!("{} value;", tag));
    }
}

#[test]
fn test_registry_keywords_come_from_identifiers() {
    let registry = TypeRegistry::global();
    for kind in KNOWN_KINDS {
        let keyword = camel_to_hyphened(kind.identifier());
        assert_eq!(registry.kind_of(&keyword), Some(kind));
    }
    assert_eq!(
        registry
            .kind_of(&camel_to_hyphened("CheckNames"))
            .map(|kind| kind.keyword()),
        Some("check-names")
    );
}
