//! Testing utilities for the clausegen workspace
//!
//! Shared fixtures: a small catalog covering every field kind, the built-in
//! catalog, and the payment scenario.

#![allow(missing_docs)]

use clause_catalog::{Catalog, ClauseTemplate, FieldKind, FieldSpec};
use clause_form::FormEngine;

pub const PAYMENT_ID: &str = "payment";

/// Payment scenario input; `schedule` is deliberately absent
pub const PAYMENT_VALUES: [(&str, &str); 3] = [
    ("payer", "Acme Corp"),
    ("payee", "Widget Inc"),
    ("amount", "$5,000"),
];

pub fn builtin_catalog() -> &'static Catalog {
    Catalog::builtin().unwrap()
}

pub fn create_lease_template() -> ClauseTemplate {
    ClauseTemplate::new(
        "lease",
        "Lease Terms",
        "Property",
        "{{tenant}} leases from {{landlord}} starting {{start}} for {{months}} months ({{use}}).\n{{tenant}} signs below.",
    )
    .with_description("Residential lease basics")
    .with_field(FieldSpec::short_text("tenant", "Tenant").required())
    .with_field(FieldSpec::short_text("landlord", "Landlord").required())
    .with_field(FieldSpec::new("start", "Start Date", FieldKind::Date))
    .with_field(FieldSpec::new("months", "Months", FieldKind::Numeric).with_hint("12"))
    .with_field(FieldSpec::single_choice("use", "Use", ["Residential", "Commercial"]))
    .with_field(FieldSpec::new("notes", "Notes", FieldKind::MultilineText))
}

pub fn create_notice_template() -> ClauseTemplate {
    ClauseTemplate::new("notice", "Notice Clause", "Contract Management", "Notices go to {{address}}.")
        .with_description("Where formal notices are delivered")
        .with_field(FieldSpec::short_text("address", "Address"))
}

pub fn create_test_catalog() -> Catalog {
    Catalog::from_templates(vec![create_lease_template(), create_notice_template()]).unwrap()
}

pub fn engine_with<'c>(catalog: &'c Catalog, id: &str, values: &[(&str, &str)]) -> FormEngine<'c> {
    let mut engine = FormEngine::new(catalog);
    engine.select_template(id).unwrap();
    for (name, value) in values {
        engine.set_field_value(*name, *value);
    }
    engine
}
