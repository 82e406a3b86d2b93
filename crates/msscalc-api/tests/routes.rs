use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use msscalc_api::config::ApiConfig;
use msscalc_api::middleware::audit::REQUEST_ID_HEADER;
use msscalc_api::router;
use msscalc_api::state::AppState;
use msscalc_core::models::demographics::{RaceEthnicity, Sex};
use msscalc_reference::lms::{LmsRow, LmsTable};
use msscalc_reference::mets::{AdiposityMeasure, AgeBand, CoefficientRow, MetsModel};

fn test_state() -> AppState {
    let lms = LmsTable::from_rows(vec![
        LmsRow {
            sex: Sex::Female,
            age_months: 0.0,
            l: -2.0,
            m: 18.0,
            s: 0.12,
        },
        LmsRow {
            sex: Sex::Female,
            age_months: 240.5,
            l: -2.0,
            m: 21.0,
            s: 0.12,
        },
    ])
    .unwrap();

    let row = |age_band: AgeBand, adiposity: AdiposityMeasure| CoefficientRow {
        sex: Sex::Female,
        race_ethnicity: RaceEthnicity::White,
        age_band,
        adiposity,
        intercept: -5.0,
        adiposity_coef: 0.05,
        hdl: -0.02,
        sbp: 0.01,
        ln_triglyceride: 0.8,
        glucose: 0.01,
    };
    let mets = MetsModel::from_rows(vec![
        row(AgeBand::Adult, AdiposityMeasure::Bmi),
        row(AgeBand::Adult, AdiposityMeasure::Waist),
        row(AgeBand::Adolescent, AdiposityMeasure::Bmi),
    ])
    .unwrap();

    AppState {
        bmi_reference: Arc::new(lms),
        scoring_model: Arc::new(mets),
    }
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router(test_state())
        .oneshot(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn adult_form() -> Value {
    json!({
        "birth_date": "",
        "appointment_date": "2024-06-15",
        "sex": "FEMALE",
        "race_ethnicity": "WHITE",
        "height": "160",
        "height_unit": "cm",
        "weight": "60",
        "weight_unit": "kg",
        "waist": "80",
        "waist_unit": "cm",
        "hdl": "50",
        "sbp": "120",
        "triglyceride": "120",
        "glucose": "75"
    })
}

#[tokio::test]
async fn health_reports_ok_with_request_id() {
    let response = router(test_state())
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
}

#[tokio::test]
async fn compute_scores_a_complete_adult_form() {
    let (status, body) = post_json("/compute", adult_form()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["validation"]["ok"], true);
    assert!((body["derived"]["bmi"].as_f64().unwrap() - 23.4375).abs() < 1e-9);
    assert_eq!(body["request"]["age"], 25);
    assert_eq!(body["request"]["waist"], 80.0);
    assert!(body["result"]["mets_z_bmi"].is_number());
    assert!(body["result"]["mets_z_wc"].is_number());
    assert_eq!(body["summary"]["entries"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn compute_suppresses_waist_for_adolescents() {
    let mut form = adult_form();
    form["birth_date"] = json!("2010-01-01");

    let (status, body) = post_json("/compute", form).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["derived"]["age_years"], 14);
    assert!(body["derived"]["bmi_z_score"].is_number());
    assert!(body["request"]["waist"].is_null());
    assert_eq!(body["visibility"]["waist"], false);
    assert!(body["result"]["mets_z_wc"].is_null());
}

#[tokio::test]
async fn compute_reports_gate_rejection_in_body() {
    let mut form = adult_form();
    form["sex"] = Value::Null;

    let (status, body) = post_json("/compute", form).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["validation"]["ok"], false);
    assert_eq!(body["validation"]["reason"], "missing required fields");
    assert!(body["result"].is_null());
    assert!(
        body["issues"]
            .as_array()
            .unwrap()
            .contains(&json!({ "field": "sex", "kind": "required" }))
    );
}

#[tokio::test]
async fn compute_reports_too_young_in_body_not_as_an_error_status() {
    let mut form = adult_form();
    form["birth_date"] = json!("2023-01-01");

    let (status, body) = post_json("/compute", form).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["validation"]["reason"], "subject too young");
    assert!(body["request"].is_null());
}

#[tokio::test]
async fn compute_rejects_malformed_json_before_the_handler() {
    let response = router(test_state())
        .oneshot(
            Request::post("/compute")
                .header("content-type", "application/json")
                .body(Body::from("{\"sex\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn compute_rejects_zero_triglyceride_as_unprocessable() {
    let mut form = adult_form();
    form["triglyceride"] = json!("0");

    let (status, body) = post_json("/compute", form).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("triglyceride"));
}

#[tokio::test]
async fn percentile_of_zero_is_fifty() {
    let (status, body) = post_json("/percentile", json!({ "z": 0.0 })).await;

    assert_eq!(status, StatusCode::OK);
    assert!((body["percentile"].as_f64().unwrap() - 50.0).abs() < 1e-9);
}

#[test]
fn config_requires_reference_paths() {
    let empty: HashMap<&str, &str> = HashMap::new();
    assert!(ApiConfig::from_lookup(|k| empty.get(k).map(|v| v.to_string())).is_err());

    let vars = HashMap::from([
        ("MSSCALC_LMS_TABLE", "/data/lms.json"),
        ("MSSCALC_METS_COEFFICIENTS", "/data/mets.json"),
    ]);
    let config = ApiConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
    assert_eq!(config.bind_addr, "127.0.0.1:8080");
    assert!(!config.lambda);
    assert_eq!(config.lms_table.to_str(), Some("/data/lms.json"));
}
