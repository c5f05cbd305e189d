use crate::namedconf::ast::{AstNode, Node, NodeError};
use crate::namedconf::parser::{parse_document, Error};
use crate::namedconf::processor::samples::NamedConfSources;
use crate::namedconf::testing::assert_results;

#[test]
fn test_flat_statements() -> Result<(), Box<dyn std::error::Error>> {
    let source = NamedConfSources::get_string("000-statements.conf")?;
    let results = parse_document(&source)?;

    assert_results(&results)
        .node_count(4)
        .node(0, |node| {
            node.node_type("directory")
                .field("value", "/var/na/named")
                .text("directory \"/var/na/named\";");
        })
        .node(1, |node| {
            node.is_unknown()
                .node_type("aaa")
                .field("value", "master")
                .as_list(&["aaa", "master"]);
        })
        .node(2, |node| {
            node.node_type("check-names")
                .field("target", "slave")
                .field("value", "ignore")
                .text("check-names slave ignore;");
        })
        .node(3, |node| {
            node.node_type("include")
                .field("value", "named.local.conf")
                .text("include \"named.local.conf\";");
        });
    Ok(())
}

#[test]
fn test_options_block() -> Result<(), Box<dyn std::error::Error>> {
    let source = NamedConfSources::get_string("010-options.conf")?;
    let results = parse_document(&source)?;

    assert_results(&results).node_count(1).node(0, |options| {
        options
            .node_type("options")
            .child_count(2)
            .child(0, |child| {
                child.node_type("directory").field("value", "/var/na/named");
            })
            .child(1, |child| {
                child.node_type("check-names").field("target", "slave");
            });
    });
    Ok(())
}

#[test]
fn test_zones() -> Result<(), Box<dyn std::error::Error>> {
    let source = NamedConfSources::get_string("020-zones.conf")?;
    let results = parse_document(&source)?;

    assert_results(&results)
        .node_count(2)
        .search_finds("zone", 2)
        .node(0, |zone| {
            zone.node_type("zone")
                .field("name", "zone_name")
                .contains("directory", true)
                .contains("acl", false);
        })
        .node(1, |zone| {
            zone.field("name", "example.com")
                .field("class", "IN")
                .child_count(3)
                .child(2, |child| {
                    child
                        .is_unknown()
                        .node_type("allow-update")
                        .text("allow-update {\nnone;\n};");
                });
        });
    Ok(())
}

#[test]
fn test_key_and_controls() -> Result<(), Box<dyn std::error::Error>> {
    let source = NamedConfSources::get_string("030-keys-controls.conf")?;
    let results = parse_document(&source)?;

    assert_results(&results)
        .node_count(2)
        .node(0, |key| {
            key.node_type("key")
                .field("name", "rndc-key")
                .field("algorithm", "hmac-sha256")
                .field("secret", "c2VjcmV0LXNlY3JldA==")
                .text("key {\n algorithm hmac-sha256;\n secret \"c2VjcmV0LXNlY3JldA==\";\n};");
        })
        .node(1, |controls| {
            controls.node_type("controls").child_count(1).child(0, |inet| {
                inet.node_type("inet")
                    .field("ipaddr", "127.0.0.1")
                    .field("port", "953")
                    .text(
                        "inet 127.0.0.1 port 953 allow {\n127.0.0.1;\n::1;\n} keys {\n\"rndc-key\";\n};",
                    );
            });
        });
    Ok(())
}

#[test]
fn test_acl_entries() -> Result<(), Box<dyn std::error::Error>> {
    let source = NamedConfSources::get_string("040-acl.conf")?;
    let results = parse_document(&source)?;

    assert_results(&results)
        .node_count(2)
        .node(0, |acl| {
            acl.node_type("acl")
                .field("name", "trusted")
                .child_count(3)
                .child(2, |entry| {
                    entry.is_unknown().node_type("localhost").text("localhost;");
                })
                .text("acl {\n10.0.0.0/8;\n192.168.1.0/24;\nlocalhost;\n};");
        })
        .node(1, |acl| {
            acl.field("name", "blocked").child(0, |entry| {
                entry.node_type("!192.0.2.13");
            });
        });
    Ok(())
}

#[test]
fn test_unknown_blocks_keep_their_content() -> Result<(), Box<dyn std::error::Error>> {
    let source = NamedConfSources::get_string("050-unknown-blocks.conf")?;
    let results = parse_document(&source)?;

    assert_results(&results)
        .node_count(2)
        .node(0, |logging| {
            logging
                .is_unknown()
                .node_type("logging")
                .child_count(2)
                .child(0, |channel| {
                    channel
                        .node_type("channel")
                        .field("name", "default_log")
                        .child_count(3)
                        .child(0, |file| {
                            file.text("file \"/var/log/named/default.log\" versions 3 size 5m;");
                        });
                })
                .child(1, |category| {
                    category.text("category default {\ndefault_log;\n};");
                });
        })
        .node(1, |view| {
            view.node_type("view")
                .field("name", "internal")
                .contains("recursion", true)
                .contains("match-clients", true);
        });
    Ok(())
}

#[test]
fn test_full_configuration() -> Result<(), Box<dyn std::error::Error>> {
    let source = NamedConfSources::get_string("060-full.conf")?;
    let results = parse_document(&source)?;

    assert_results(&results)
        .node_count(7)
        .search_finds("zone", 3)
        .search_finds("include", 1)
        .search_finds("view", 0)
        .node(2, |options| {
            options
                .node_type("options")
                .child_count(7)
                .contains("dnssec-validation", true)
                .child(1, |listen_on| {
                    listen_on.text("listen-on port 53 {\n127.0.0.1;\n};");
                })
                .child(5, |check_names| {
                    check_names.as_list(&["check-names", "master", "warn"]);
                });
        });
    Ok(())
}

#[test]
fn test_key_references_in_address_lists() -> Result<(), Box<dyn std::error::Error>> {
    let source = NamedConfSources::get_string("070-key-references.conf")?;
    let results = parse_document(&source)?;

    assert_results(&results)
        .node_count(3)
        .search_finds("key", 1)
        .node(0, |key| {
            key.node_type("key").field("name", "xfer");
        })
        .node(1, |acl| {
            acl.node_type("acl")
                .field("name", "a")
                .child_count(2)
                .child(0, |reference| {
                    reference
                        .is_unknown()
                        .node_type("key")
                        .field("value", "xfer")
                        .text("key \"xfer\";");
                });
        })
        .node(2, |options| {
            options.child_count(1).child(0, |transfer| {
                transfer
                    .is_unknown()
                    .node_type("allow-transfer")
                    .child_count(1)
                    .text("allow-transfer {\nkey \"xfer\";\n};");
            });
        });
    Ok(())
}

#[test]
fn test_search_is_one_level_deep() {
    let results =
        parse_document("options { directory \"/a\"; }; zone \"z\" { directory \"/b\"; };").unwrap();
    assert!(results.search("directory").is_empty());
    let options = &results[0];
    let found = options.search("directory");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].to_string(), "directory \"/a\";");
}

#[test]
fn test_rendering_of_whole_document() {
    let results =
        parse_document("directory \"/var/na/named\";\n\n  aaa   master ;\ncheck-names slave ignore;")
            .unwrap();
    assert_eq!(
        results.to_string(),
        "directory \"/var/na/named\";\naaa master;\ncheck-names slave ignore;"
    );
}

#[test]
fn test_empty_document() {
    let results = parse_document("// nothing here\n").unwrap();
    assert!(results.is_empty());
    assert_eq!(results.to_string(), "");
}

#[test]
fn test_key_without_algorithm_aborts_document() {
    let err = parse_document("zone \"z\" { key \"k\" { secret \"abc\"; }; };").unwrap_err();
    match err {
        Error::Node(NodeError::MissingSubNode { node_type, kind }) => {
            assert_eq!(node_type, "key");
            assert_eq!(kind, "algorithm");
        }
        other => panic!("Expected missing sub-node, got {:?}", other),
    }
}

#[test]
fn test_key_without_secret_aborts_document() {
    assert!(matches!(
        parse_document("key \"k\" { algorithm hmac-md5; };"),
        Err(Error::Node(NodeError::MissingSubNode { .. }))
    ));
}

#[test]
fn test_zone_without_name() {
    assert!(matches!(
        parse_document("zone { type master; };"),
        Err(Error::Node(NodeError::MissingRequiredField { .. }))
    ));
}

#[test]
fn test_check_names_needs_two_words() {
    assert!(matches!(
        parse_document("check-names warn;"),
        Err(Error::Node(NodeError::UnexpectedShape { .. }))
    ));
}

#[test]
fn test_zone_check_names_needs_a_target() {
    assert!(matches!(
        parse_document("zone \"z\" { type master; check-names warn; };"),
        Err(Error::Node(NodeError::UnexpectedShape { .. }))
    ));
}

#[test]
fn test_include_without_value() {
    assert!(matches!(
        parse_document("include;"),
        Err(Error::Node(NodeError::MissingRequiredField { .. }))
    ));
}

#[test]
fn test_syntax_error_reports_position() {
    let err = parse_document("options {\n  directory \"/a\"\n};").unwrap_err();
    match err {
        Error::Syntax(errors) => {
            assert_eq!(errors[0].line, 3);
            assert_eq!(errors[0].column, 1);
        }
        other => panic!("Expected syntax error, got {:?}", other),
    }
}

#[test]
fn test_unknown_tag_round_trip() {
    let results = parse_document("FooBar 1;").unwrap();
    let node = &results[0];
    assert!(matches!(node, Node::Unknown(_)));
    assert!(node.is_same_nodetype("FooBar"));
    assert!(!node.is_same_nodetype("foo-bar"));
    assert_eq!(results.search("FooBar").len(), 1);
}
