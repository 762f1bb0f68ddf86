use campus_domain::config::{EnrollmentConfig, RuleKind};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let cfg = EnrollmentConfig::default();
    assert_eq!(cfg.max_credit_load, 24);
    assert_eq!(cfg.rules, vec![RuleKind::CreditLimit, RuleKind::Prerequisite]);
}

#[test]
fn empty_document_yields_defaults() {
    let cfg: EnrollmentConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg, EnrollmentConfig::default());
}

#[test]
fn enrollment_config_deserializes() {
    let raw = json!({
        "max_credit_load": 21,
        "rules": ["prerequisite", "credit_limit"]
    });

    let cfg: EnrollmentConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.max_credit_load, 21);
    assert_eq!(cfg.rules, vec![RuleKind::Prerequisite, RuleKind::CreditLimit]);
}

#[test]
fn unknown_rule_name_is_rejected() {
    let raw = json!({ "rules": ["credit_limit", "gpa_floor"] });
    assert!(serde_json::from_value::<EnrollmentConfig>(raw).is_err());
}

#[test]
fn rule_kind_display_matches_serialized_form() {
    for kind in [RuleKind::CreditLimit, RuleKind::Prerequisite] {
        let serialized = serde_json::to_value(kind).expect("serialize rule kind");
        assert_eq!(serialized, json!(kind.to_string()));
    }
}
