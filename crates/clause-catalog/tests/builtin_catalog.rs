use clause_catalog::{Catalog, CatalogLint, FieldKind};
use proptest::prelude::*;

fn builtin() -> &'static Catalog {
    Catalog::builtin().unwrap()
}

fn ids(templates: &[&clause_catalog::ClauseTemplate]) -> Vec<String> {
    templates.iter().map(|t| t.id.clone()).collect()
}

#[test]
fn test_builtin_loads_in_declared_order() {
    let all: Vec<_> = builtin().templates().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(
        all,
        vec![
            "nda",
            "arbitration",
            "indemnity",
            "termination",
            "limitation",
            "ip",
            "payment",
            "force-majeure",
            "amendments",
            "severability",
        ]
    );
}

#[test]
fn test_empty_search_is_identity() {
    let catalog = builtin();
    let hits = catalog.search("", "");
    assert_eq!(hits.len(), catalog.len());
    for (hit, template) in hits.iter().zip(catalog.templates()) {
        assert_eq!(hit.id, template.id);
    }
}

#[test]
fn test_builtin_categories() {
    assert_eq!(
        builtin().list_categories(),
        vec![
            "Confidentiality",
            "Dispute Resolution",
            "Risk Management",
            "Contract Management",
            "Intellectual Property",
            "Financial",
        ]
    );
}

#[test]
fn test_lowercase_query_finds_nda() {
    let catalog = builtin();
    assert!(ids(&catalog.search("confidential", "")).contains(&"nda".to_string()));
    // "staNDArd" and "maNDAtory" match too
    assert_eq!(ids(&catalog.search("nda", "")), vec!["nda", "arbitration"]);
    assert_eq!(ids(&catalog.search("NON-DISCLOSURE", "")), vec!["nda"]);
}

#[test]
fn test_category_filter_is_case_sensitive() {
    let catalog = builtin();
    assert_eq!(
        ids(&catalog.search("", "Risk Management")),
        vec!["indemnity", "limitation", "force-majeure"]
    );
    assert!(catalog.search("", "risk management").is_empty());
}

#[test]
fn test_text_and_category_combined() {
    let catalog = builtin();
    assert_eq!(
        ids(&catalog.search("liability", "Risk Management")),
        vec!["indemnity", "limitation"]
    );
    assert!(catalog.search("liability", "Financial").is_empty());
}

#[test]
fn test_payment_schema() {
    let payment = builtin().get("payment").unwrap();
    let names: Vec<_> = payment.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["payer", "payee", "amount", "schedule", "method", "lateFee", "currency"]
    );
    let schedule = payment.field("schedule").unwrap();
    assert_eq!(schedule.kind, FieldKind::SingleChoice);
    assert_eq!(schedule.choices.first().map(String::as_str), Some("Upon execution"));
    assert_eq!(payment.field("lateFee").unwrap().kind, FieldKind::Numeric);
    assert_eq!(payment.required_fields().count(), 3);
}

#[test]
fn test_builtin_lints_unreferenced_fields() {
    assert_eq!(
        builtin().lints(),
        &[
            CatalogLint::UnreferencedField {
                template: "nda".into(),
                field: "exceptions".into()
            },
            CatalogLint::UnreferencedField {
                template: "limitation".into(),
                field: "capType".into()
            },
        ]
    );
}

#[test]
fn test_bodies_keep_layout() {
    let nda = builtin().get("nda").unwrap();
    assert!(nda.body.starts_with("**CONFIDENTIALITY AND NON-DISCLOSURE**\n\n"));
    assert!(nda
        .body
        .contains("\n   a) Hold and maintain the Confidential Information in strict confidence\n"));
    assert!(!nda.body.ends_with('\n'));
}

proptest! {
    #[test]
    fn prop_search_is_ordered_subset(query in "[a-zA-Z ]{0,6}", cat_idx in 0usize..8) {
        let catalog = builtin();
        let categories = catalog.list_categories();
        let category = categories.get(cat_idx).copied().unwrap_or("");
        let all = ids(&catalog.search("", ""));
        let hits = ids(&catalog.search(&query, category));

        let mut cursor = all.iter();
        for hit in &hits {
            prop_assert!(cursor.any(|id| id == hit));
        }
    }

    #[test]
    fn prop_narrowing_never_adds(query in "[a-z]{0,4}", extra in "[a-z]{1,3}", cat_idx in 0usize..8) {
        let catalog = builtin();
        let categories = catalog.list_categories();
        let category = categories.get(cat_idx).copied().unwrap_or("");

        let wide = ids(&catalog.search(&query, ""));
        let by_category = ids(&catalog.search(&query, category));
        let longer = format!("{query}{extra}");
        let by_text = ids(&catalog.search(&longer, ""));

        prop_assert!(by_category.iter().all(|id| wide.contains(id)));
        prop_assert!(by_text.iter().all(|id| wide.contains(id)));
    }
}
