//! Name formatter behavior: template resolution, sanitization, and the
//! declaration contract.

use heiti::{MetricIdentity, NameFormatter, NamingError};

fn identity() -> MetricIdentity {
    MetricIdentity::new("namespace", "subsystem", "name")
}

fn formatter(format: &str, label_names: &[&str]) -> NameFormatter {
    let names: Vec<String> = label_names.iter().map(|n| n.to_string()).collect();
    NameFormatter::new(identity(), &names, format)
}

// ============================================================================
// Fully-qualified names
// ============================================================================

#[test]
fn fully_qualified_name_joins_non_empty_parts() {
    for (namespace, subsystem, name, expected) in [
        ("namespace", "subsystem", "name", "namespace.subsystem.name"),
        ("namespace", "", "name", "namespace.name"),
        ("", "subsystem", "name", "subsystem.name"),
        ("", "", "name", "name"),
        ("", "", "", ""),
    ] {
        let f = NameFormatter::new(MetricIdentity::new(namespace, subsystem, name), &[], "");
        assert_eq!(f.fully_qualified_name(), expected);
    }
}

// ============================================================================
// Template resolution
// ============================================================================

#[test]
fn reserved_tokens_expand_identity() {
    let f = formatter("%{#namespace}%{#name}", &[]);
    assert_eq!(f.format(&[]), "namespacename");
}

#[test]
fn unpaired_trailing_key_binds_unknown() {
    let f = formatter("%{#namespace}%{name}", &["name"]);
    assert_eq!(f.format(&["name"]), "namespaceunknown");
}

#[test]
fn label_placeholder_resolves_supplied_value() {
    let f = formatter("%{#namespace}%{p2p}", &["p2p"]);
    assert_eq!(f.format(&["p2p", "gossip"]), "namespacegossip");
}

#[test]
fn default_template_is_fqname() {
    let f = formatter("", &[]);
    assert_eq!(f.format(&[]), "namespace.subsystem.name");
}

#[test]
fn fqname_token_passes_through_unsanitized() {
    // The fully-qualified name intentionally keeps its dots.
    let f = formatter("%{#fqname}", &[]);
    assert_eq!(f.format(&[]), "namespace.subsystem.name");
}

#[test]
fn identity_tokens_are_never_sanitized() {
    let f = NameFormatter::new(
        MetricIdentity::new("name:space", "sub system", "na.me"),
        &[],
        "%{#namespace}/%{#subsystem}/%{#name}",
    );
    assert_eq!(f.format(&[]), "name:space/sub system/na.me");
}

#[test]
fn literal_template_passes_through() {
    let f = formatter("alpha.beta gamma", &["ignored"]);
    assert_eq!(f.format(&["ignored", "value"]), "alpha.beta gamma");
}

#[test]
fn literals_surround_placeholders_in_order() {
    let f = formatter("pre_%{#name}_mid_%{kind}_post", &["kind"]);
    assert_eq!(f.format(&["kind", "tcp"]), "pre_name_mid_tcp_post");
}

#[test]
fn unterminated_placeholder_stays_literal() {
    let f = formatter("%{123abc", &[]);
    assert_eq!(f.format(&[]), "%{123abc");
}

#[test]
fn duplicate_keys_last_write_wins() {
    let f = formatter("%{kind}", &["kind"]);
    assert_eq!(f.format(&["kind", "udp", "kind", "tcp"]), "tcp");
}

#[test]
fn subsystem_token_expands() {
    let f = formatter("%{#subsystem}.%{#name}", &[]);
    assert_eq!(f.format(&[]), "subsystem.name");
}

// ============================================================================
// Sanitization
// ============================================================================

#[test]
fn label_values_sanitize_separator_characters() {
    let f = formatter("%{src}", &["src"]);
    for (value, expected) in [
        ("", ""),
        (" ", "_"),
        ("  ", "__"),
        ("   ", "___"),
        (".", "_"),
        ("..", "__"),
        ("...", "___"),
        ("s", "s"),
        ("apple", "apple"),
        ("You are handsome.", "You_are_handsome_"),
        ("My name: Satoshi Nakamoto.", "My_name__Satoshi_Nakamoto_"),
        ("|", "_"),
        ("||", "__"),
        ("| |", "___"),
        ("a\tb\nc", "a_b_c"),
    ] {
        assert_eq!(f.format(&["src", value]), expected, "value {value:?}");
    }
}

// ============================================================================
// Contract violations
// ============================================================================

#[test]
#[should_panic(expected = "undeclared label name: color")]
fn format_panics_on_undeclared_key() {
    formatter("%{#fqname}", &["region"]).format(&["color", "red"]);
}

#[test]
#[should_panic(expected = "template references missing label: region")]
fn format_panics_on_unreferenced_declared_label() {
    // Declared but not supplied: the placeholder cannot resolve.
    formatter("%{region}", &["region"]).format(&[]);
}

#[test]
fn try_format_returns_undeclared_key() {
    let err = formatter("%{#fqname}", &["region"])
        .try_format(&["color", "red"])
        .unwrap_err();
    assert_eq!(err, NamingError::UndeclaredLabel("color".into()));
}

#[test]
fn try_format_returns_missing_template_label() {
    let err = formatter("%{region}", &["region"])
        .try_format(&[])
        .unwrap_err();
    assert_eq!(err, NamingError::MissingTemplateLabel("region".into()));
}

// ============================================================================
// Empty-token placeholder
// ============================================================================

#[test]
fn empty_token_resolves_as_empty_label_key() {
    // `%{}` looks up the empty-string label key; a schema that declares
    // it resolves normally, values sanitized as usual.
    let f = formatter("name_%{}", &[""]);
    assert_eq!(f.format(&["", "x y"]), "name_x_y");
}

#[test]
fn empty_token_fails_without_empty_label() {
    let err = formatter("name_%{}", &["region"]).try_format(&[]).unwrap_err();
    assert_eq!(err, NamingError::MissingTemplateLabel(String::new()));
}
