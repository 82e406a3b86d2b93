mod common;

use jiff::civil::date;
use msscalc_core::models::derived::DerivedFields;
use msscalc_core::models::inputs::RawInputs;
use msscalc_engine::derive::recompute;
use msscalc_engine::error::Rejection;
use msscalc_engine::fields::Field;
use msscalc_engine::validation::{FieldIssue, IssueKind, Validation, can_submit, field_issues};

use common::{FixedBmiZ, aged, complete_inputs};

fn gate(inputs: &RawInputs) -> Result<(), Rejection> {
    can_submit(inputs, &recompute(inputs, &FixedBmiZ(0.0)))
}

#[test]
fn complete_adult_form_passes() {
    assert_eq!(gate(&complete_inputs()), Ok(()));
}

#[test]
fn missing_sex_is_rejected_regardless_of_other_fields() {
    let mut inputs = complete_inputs();
    inputs.sex = None;
    inputs.waist = "80".to_string();
    assert_eq!(gate(&inputs), Err(Rejection::MissingRequiredFields));
}

#[test]
fn each_lab_value_is_required() {
    let clears: [fn(&mut RawInputs); 4] = [
        |i| i.sbp.clear(),
        |i| i.glucose.clear(),
        |i| i.hdl.clear(),
        |i| i.triglyceride.clear(),
    ];
    for clear in clears {
        let mut inputs = complete_inputs();
        clear(&mut inputs);
        assert_eq!(gate(&inputs), Err(Rejection::MissingRequiredFields));
    }
}

#[test]
fn malformed_lab_text_counts_as_missing() {
    let mut inputs = complete_inputs();
    inputs.hdl = "fifty".to_string();
    assert_eq!(gate(&inputs), Err(Rejection::MissingRequiredFields));
}

#[test]
fn waist_alone_satisfies_body_composition() {
    let mut inputs = complete_inputs();
    inputs.height.clear();
    inputs.weight.clear();
    assert_eq!(gate(&inputs), Err(Rejection::MissingRequiredFields));

    inputs.waist = "88".to_string();
    assert_eq!(gate(&inputs), Ok(()));
}

#[test]
fn height_without_weight_is_not_enough() {
    let mut inputs = complete_inputs();
    inputs.weight.clear();
    assert_eq!(gate(&inputs), Err(Rejection::MissingRequiredFields));
}

#[test]
fn minimum_age_is_two() {
    assert_eq!(gate(&aged(1)), Err(Rejection::SubjectTooYoung));
    assert_eq!(gate(&aged(2)), Ok(()));
}

#[test]
fn missing_fields_are_reported_before_age() {
    let mut inputs = aged(1);
    inputs.sex = None;
    assert_eq!(gate(&inputs), Err(Rejection::MissingRequiredFields));
}

#[test]
fn gate_only_reads_the_age_it_is_given() {
    let derived = DerivedFields {
        age_years: Some(0),
        ..DerivedFields::default()
    };
    assert_eq!(
        can_submit(&complete_inputs(), &derived),
        Err(Rejection::SubjectTooYoung)
    );
}

#[test]
fn rejection_reasons_have_stable_messages() {
    assert_eq!(Rejection::MissingRequiredFields.to_string(), "missing required fields");
    assert_eq!(Rejection::SubjectTooYoung.to_string(), "subject too young");

    let validation = Validation::from(Err(Rejection::SubjectTooYoung));
    assert!(!validation.ok);
    assert_eq!(validation.reason.as_deref(), Some("subject too young"));
    assert!(Validation::from(Ok(())).ok);
}

#[test]
fn complete_form_has_no_field_issues() {
    assert!(field_issues(&complete_inputs()).is_empty());
}

#[test]
fn field_issues_flag_required_malformed_and_negative_values() {
    let mut inputs = complete_inputs();
    inputs.sex = None;
    inputs.sbp.clear();
    inputs.hdl = "abc".to_string();
    inputs.glucose = "-5".to_string();

    let issues = field_issues(&inputs);
    assert!(issues.contains(&FieldIssue {
        field: Field::Sex,
        kind: IssueKind::Required
    }));
    assert!(issues.contains(&FieldIssue {
        field: Field::Sbp,
        kind: IssueKind::Required
    }));
    assert!(issues.contains(&FieldIssue {
        field: Field::Hdl,
        kind: IssueKind::NotANumber
    }));
    assert!(issues.contains(&FieldIssue {
        field: Field::Glucose,
        kind: IssueKind::Negative
    }));
    assert_eq!(issues.len(), 4);
}

#[test]
fn waist_releases_height_and_weight_requirement() {
    let mut inputs = complete_inputs();
    inputs.height.clear();
    inputs.weight.clear();
    let fields: Vec<Field> = field_issues(&inputs).iter().map(|i| i.field).collect();
    assert_eq!(fields, vec![Field::Height, Field::Weight]);

    inputs.waist = "80".to_string();
    assert!(field_issues(&inputs).is_empty());
}

#[test]
fn second_birthday_on_leap_day_counts_on_february_28() {
    let mut inputs = complete_inputs();
    inputs.birth_date = Some(date(2020, 2, 29));
    inputs.appointment_date = Some(date(2022, 2, 28));

    let derived = recompute(&inputs, &FixedBmiZ(0.0));
    assert_eq!(derived.age_years, Some(2));
    assert_eq!(can_submit(&inputs, &derived), Ok(()));
}
