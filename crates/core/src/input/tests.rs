use chrono::NaiveDate;
use rstest::rstest;
use rust_decimal_macros::dec;
use serde_json::json;

use super::*;
use crate::project::{Payment, PaymentStatus, PaymentType, Project, ProjectSnapshot, StaffLocation};
use feeburn_shared::AppError;
use feeburn_shared::types::Currency;

fn raw_project() -> serde_json::Value {
    json!({
        "id": "01890a5d-ac96-774b-bcce-b302099a8057",
        "name": "Diriyah Gate Villa",
        "code": "DGV-02",
        "total_contract_value": "250000.00",
        "start_date": "2024-03-01",
        "end_date": "2025-02-28"
    })
}

#[test]
fn test_project_defaults() {
    let raw: RawProject = serde_json::from_value(raw_project()).unwrap();
    let project = Project::try_from(raw).unwrap();

    assert_eq!(project.total_contract_value, dec!(250000));
    assert_eq!(project.overhead_multiplier, dec!(2.5));
    assert_eq!(project.target_margin, dec!(20));
    assert_eq!(project.currency, Currency::Sar);
    assert_eq!(project.stoppage_days, 0);
    assert_eq!(project.percent_complete, dec!(0));
    assert_eq!(project.start_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert_eq!(project.manager, None);
}

#[test]
fn test_decimal_strings_are_trimmed() {
    let mut value = raw_project();
    value["overhead_multiplier"] = json!(" 2.75 ");
    let raw: RawProject = serde_json::from_value(value).unwrap();

    let project = Project::try_from(raw).unwrap();

    assert_eq!(project.overhead_multiplier, dec!(2.75));
}

#[test]
fn test_negative_money_is_accepted() {
    let mut value = raw_project();
    value["total_contract_value"] = json!("-1500");
    let raw: RawProject = serde_json::from_value(value).unwrap();

    let project = Project::try_from(raw).unwrap();

    assert_eq!(project.total_contract_value, dec!(-1500));
}

#[test]
fn test_invalid_decimal_names_field() {
    let mut value = raw_project();
    value["target_margin"] = json!("twenty");
    let raw: RawProject = serde_json::from_value(value).unwrap();

    let err = Project::try_from(raw).unwrap_err();

    assert_eq!(
        err,
        InputError::InvalidDecimal {
            field: "target_margin",
            value: "twenty".to_string(),
        }
    );
}

#[rstest]
#[case("2024-13-01")]
#[case("01/03/2024")]
#[case("")]
fn test_invalid_date(#[case] date: &str) {
    let mut value = raw_project();
    value["end_date"] = json!(date);
    let raw: RawProject = serde_json::from_value(value).unwrap();

    let err = Project::try_from(raw).unwrap_err();

    assert!(matches!(err, InputError::InvalidDate { field: "end_date", .. }));
}

#[rstest]
#[case("0", dec!(0))]
#[case("37.5", dec!(37.5))]
#[case("100", dec!(100))]
fn test_percent_complete_in_range(#[case] raw: &str, #[case] expected: rust_decimal::Decimal) {
    assert_eq!(parse_percent_complete(raw).unwrap(), expected);
}

#[rstest]
#[case("-1")]
#[case("100.01")]
#[case("250")]
fn test_percent_complete_out_of_range(#[case] raw: &str) {
    let err = parse_percent_complete(raw).unwrap_err();

    assert!(matches!(err, InputError::OutOfRange { field: "percent_complete", .. }));
}

#[test]
fn test_persisted_percent_complete_is_range_checked() {
    let mut value = raw_project();
    value["percent_complete"] = json!("120");
    let raw: RawProject = serde_json::from_value(value).unwrap();

    assert!(Project::try_from(raw).is_err());
}

#[test]
fn test_payment_defaults() {
    let raw: RawPayment = serde_json::from_value(json!({
        "id": "01890a5d-ac96-774b-bcce-b302099a8058",
        "project_id": "01890a5d-ac96-774b-bcce-b302099a8057",
        "title": "Schematic design",
        "amount": "40000",
        "date": "2024-05-15"
    }))
    .unwrap();

    let payment = Payment::try_from(raw).unwrap();

    assert_eq!(payment.payment_type, PaymentType::Contract);
    assert_eq!(payment.status, PaymentStatus::Pending);
    assert_eq!(payment.paid_amount, Some(dec!(0)));
    assert_eq!(payment.amount, dec!(40000));
}

#[test]
fn test_unknown_payment_status_is_rejected() {
    let result = serde_json::from_value::<RawPayment>(json!({
        "id": "01890a5d-ac96-774b-bcce-b302099a8058",
        "project_id": "01890a5d-ac96-774b-bcce-b302099a8057",
        "title": "Schematic design",
        "amount": "40000",
        "date": "2024-05-15",
        "status": "Waived"
    }));

    assert!(result.is_err());
}

#[test]
fn test_snapshot_conversion() {
    let project_id = "01890a5d-ac96-774b-bcce-b302099a8057";
    let staff_id = "01890a5d-ac96-774b-bcce-b302099a8060";
    let raw: RawProjectSnapshot = serde_json::from_value(json!({
        "project": raw_project(),
        "staff": [{
            "id": staff_id,
            "project_id": project_id,
            "name": "Omar",
            "role": "Project Architect",
            "base_rate": "120",
            "location": "Riyadh"
        }],
        "time_logs": [{
            "id": "01890a5d-ac96-774b-bcce-b302099a8061",
            "project_id": project_id,
            "staff_id": staff_id,
            "hours": "7.5",
            "phase": "Schematic",
            "start_date": "2024-03-04",
            "end_date": "2024-03-04"
        }],
        "expenses": [{
            "id": "01890a5d-ac96-774b-bcce-b302099a8062",
            "project_id": project_id,
            "category": "Travel",
            "amount": "850",
            "reimbursable": true
        }]
    }))
    .unwrap();

    let snapshot = ProjectSnapshot::try_from(raw).unwrap();

    assert_eq!(snapshot.staff.len(), 1);
    assert_eq!(snapshot.staff[0].location, StaffLocation::Riyadh);
    assert_eq!(snapshot.staff[0].base_rate, dec!(120));
    assert_eq!(snapshot.time_logs[0].hours, dec!(7.5));
    assert!(snapshot.expenses[0].reimbursable);
    assert!(snapshot.payments.is_empty());
    assert!(snapshot.budget_labor.is_empty());
}

#[test]
fn test_one_bad_row_fails_the_snapshot() {
    let project_id = "01890a5d-ac96-774b-bcce-b302099a8057";
    let raw: RawProjectSnapshot = serde_json::from_value(json!({
        "project": raw_project(),
        "budget_expenses": [
            {
                "id": "01890a5d-ac96-774b-bcce-b302099a8070",
                "project_id": project_id,
                "category": "Printing",
                "amount": "1200"
            },
            {
                "id": "01890a5d-ac96-774b-bcce-b302099a8071",
                "project_id": project_id,
                "category": "Printing",
                "amount": "1,200"
            }
        ]
    }))
    .unwrap();

    let err = ProjectSnapshot::try_from(raw).unwrap_err();

    assert!(matches!(err, InputError::InvalidDecimal { field: "amount", .. }));
}

#[test]
fn test_input_error_maps_to_validation() {
    let err: AppError = parse_percent_complete("abc").unwrap_err().into();

    assert_eq!(err.status_code(), 400);
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}

#[test]
fn test_limits() {
    assert_eq!(MAX_MONEY, dec!(9999999999999.99));
    assert_eq!(MAX_QUANTITY, dec!(99999999.99));
    assert_eq!(MAX_FACTOR, dec!(999.99));
}

#[test]
fn test_oversized_contract_value_is_out_of_range() {
    let mut value = raw_project();
    value["total_contract_value"] = json!("79228162514264337593543950335");
    let raw: RawProject = serde_json::from_value(value).unwrap();

    let err = Project::try_from(raw).unwrap_err();

    assert!(matches!(
        err,
        InputError::OutOfRange { field: "total_contract_value", .. }
    ));
}

#[rstest]
#[case("9999999999999.99", true)]
#[case("-9999999999999.99", true)]
#[case("10000000000000", false)]
#[case("-10000000000000", false)]
fn test_money_bounds(#[case] raw: &str, #[case] accepted: bool) {
    assert_eq!(parse_money("amount", raw).is_ok(), accepted);
}

#[rstest]
#[case("99999999.99", true)]
#[case("100000000", false)]
fn test_quantity_bounds(#[case] raw: &str, #[case] accepted: bool) {
    assert_eq!(parse_quantity("hours", raw).is_ok(), accepted);
}

#[rstest]
#[case("overhead_multiplier", "999.99", true)]
#[case("overhead_multiplier", "1000", false)]
#[case("target_margin", "-1000", false)]
fn test_factor_bounds(#[case] field: &str, #[case] raw: &str, #[case] accepted: bool) {
    let mut value = raw_project();
    value[field] = json!(raw);
    let project: RawProject = serde_json::from_value(value).unwrap();

    assert_eq!(Project::try_from(project).is_ok(), accepted);
}

#[rstest]
#[case("85.125", dec!(85.13))]
#[case("-2.345", dec!(-2.35))]
#[case("7.5", dec!(7.5))]
fn test_bounded_values_round_to_cents(#[case] raw: &str, #[case] expected: rust_decimal::Decimal) {
    assert_eq!(parse_quantity("base_rate", raw).unwrap(), expected);
}

#[test]
fn test_rounding_applies_before_the_limit() {
    // Rounds up past the limit.
    assert!(parse_money("amount", "9999999999999.995").is_err());
    assert!(parse_money("amount", "9999999999999.994").is_ok());
}

#[test]
fn test_excessive_stoppage_days() {
    let mut value = raw_project();
    value["stoppage_days"] = json!(MAX_STOPPAGE_DAYS + 1);
    let raw: RawProject = serde_json::from_value(value).unwrap();

    let err = Project::try_from(raw).unwrap_err();

    assert!(matches!(err, InputError::OutOfRange { field: "stoppage_days", .. }));
}
