use clause_catalog::placeholder;
use clause_form::{render_template, FormEngine, FormError, IssueKind, Mode};
use clause_test_utils::{
    builtin_catalog, create_test_catalog, engine_with, PAYMENT_ID, PAYMENT_VALUES,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::BTreeMap;

#[test]
fn test_payment_scenario() {
    let catalog = builtin_catalog();
    let mut engine = engine_with(catalog, PAYMENT_ID, &PAYMENT_VALUES);
    let out = engine.render().unwrap().to_string();

    assert!(out.contains("**1. Payment Obligation:** Acme Corp shall pay Widget Inc the amount of $5,000 in [currency]."));
    assert!(out.contains("Payment shall be made [schedule] from the date of invoice"));
    assert!(out.contains("d) Widget Inc's tax identification number"));
    assert!(!out.contains("{{"));
    // literal brackets in the body are untouched
    assert!(out.contains("[specify source]"));
}

#[test]
fn test_render_is_idempotent() {
    let catalog = builtin_catalog();
    let mut engine = engine_with(catalog, "nda", &[("disclosingParty", "Acme")]);
    let first = engine.render().unwrap().to_string();
    let second = engine.render().unwrap().to_string();
    assert_eq!(first, second);
}

#[test]
fn test_reset_then_render_fails() {
    let catalog = builtin_catalog();
    let mut engine = engine_with(catalog, "ip", &[("licensor", "Acme")]);
    engine.render().unwrap();

    engine.reset();
    assert_eq!(engine.mode(), Mode::Browsing);
    assert_eq!(engine.render(), Err(FormError::NoActiveTemplate));
    assert_eq!(engine.rendered_output(), "");
    assert!(engine.values().is_empty());
}

#[test]
fn test_nonexistent_selection_from_browsing() {
    let catalog = builtin_catalog();
    let mut engine = FormEngine::new(catalog);

    let err = engine.select_template("nonexistent-id").unwrap_err();
    assert_eq!(err, FormError::TemplateNotFound("nonexistent-id".into()));
    assert_eq!(engine.mode(), Mode::Browsing);
    assert_eq!(engine.render(), Err(FormError::NoActiveTemplate));
}

#[test]
fn test_nonexistent_selection_while_editing() {
    let catalog = builtin_catalog();
    let mut engine = engine_with(catalog, PAYMENT_ID, &PAYMENT_VALUES);

    assert!(engine.select_template("nonexistent-id").is_err());
    assert_eq!(engine.mode(), Mode::Editing);
    assert_eq!(engine.active_template().unwrap().id, PAYMENT_ID);
    assert!(engine.render().unwrap().contains("Acme Corp"));
}

#[test]
fn test_excess_keys_are_ignored() {
    let catalog = create_test_catalog();
    let mut engine = engine_with(&catalog, "notice", &[("address", "1 Main St"), ("bogus", "x")]);
    assert_eq!(engine.render().unwrap(), "Notices go to 1 Main St.");
}

#[test]
fn test_no_type_coercion_at_render() {
    let catalog = create_test_catalog();
    let mut engine = engine_with(
        &catalog,
        "lease",
        &[("months", "about a year"), ("start", "next spring"), ("use", "Whatever")],
    );
    assert_eq!(
        engine.render().unwrap(),
        "[tenant] leases from [landlord] starting next spring for about a year months (Whatever).\n[tenant] signs below."
    );

    let kinds: Vec<_> = engine
        .validate()
        .unwrap()
        .into_iter()
        .map(|issue| (issue.field, issue.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("tenant".to_string(), IssueKind::Missing),
            ("landlord".to_string(), IssueKind::Missing),
            ("start".to_string(), IssueKind::InvalidDate),
            ("months".to_string(), IssueKind::NotNumeric),
            ("use".to_string(), IssueKind::NotAChoice),
        ]
    );
}

#[test]
fn test_stray_keys_are_reported_by_validation() {
    let catalog = create_test_catalog();
    let engine = engine_with(&catalog, "notice", &[("adress", "typo"), ("empty", "")]);
    let issues = engine.validate().unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::UnknownField);
    assert_eq!(issues[0].to_string(), "adress: not a field of this template");
}

#[test]
fn test_every_builtin_template_renders_without_tokens() {
    let catalog = builtin_catalog();
    for template in catalog.templates() {
        let mut engine = FormEngine::new(catalog);
        engine.select_template(&template.id).unwrap();
        let out = engine.render().unwrap();
        for name in template.placeholders() {
            assert!(out.contains(&format!("[{name}]")), "{}: {name}", template.id);
        }
        assert!(!out.contains("{{"), "{}", template.id);
    }
}

#[test]
fn test_state_serializes_for_presentation() {
    let catalog = create_test_catalog();
    let engine = engine_with(&catalog, "notice", &[("address", "HQ")]);
    let json = serde_json::to_value(engine.state()).unwrap();
    assert_eq!(json["active_template_id"], "notice");
    assert_eq!(json["values"]["address"], "HQ");
}

proptest! {
    #[test]
    fn prop_substitution_complete(
        values in proptest::collection::btree_map("[a-z]{1,6}", "[A-Za-z0-9 ]{0,8}", 0..6),
    ) {
        let catalog = create_test_catalog();
        let template = catalog.get("lease").unwrap();
        let values: BTreeMap<String, String> = values
            .into_iter()
            .chain([("tenant".to_string(), "T".to_string())])
            .collect();
        let out = render_template(template, &values);

        // values carry no braces, so naive per-token replacement is equivalent
        let mut expected = template.body.clone();
        for name in template.placeholders() {
            let replacement = match values.get(name) {
                Some(v) if !v.is_empty() => v.clone(),
                _ => placeholder::fallback(name),
            };
            expected = expected.replace(&format!("{{{{{name}}}}}"), &replacement);
        }
        prop_assert_eq!(&out, &expected);
        prop_assert!(!out.contains("{{"));
        for name in template.placeholders() {
            match values.get(name).filter(|v| !v.is_empty()) {
                Some(v) => prop_assert!(out.contains(v.as_str())),
                None => {
                    let fallback = placeholder::fallback(name);
                    prop_assert!(out.contains(&fallback), "no {} in output", fallback);
                }
            }
        }
    }

    #[test]
    fn prop_render_idempotent(tenant in "[A-Za-z ]{0,10}", months in "[0-9]{0,3}") {
        let catalog = create_test_catalog();
        let mut engine = engine_with(&catalog, "lease", &[("tenant", tenant.as_str()), ("months", months.as_str())]);
        let first = engine.render().unwrap().to_string();
        let second = engine.render().unwrap().to_string();
        prop_assert_eq!(first, second);
    }
}
