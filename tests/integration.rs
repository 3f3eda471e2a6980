//! Integration tests for the Sprint Capacity Engine.
//!
//! This test suite drives the `/snapshot` endpoint end to end:
//! - Total and remaining capacity over the sprint calendar
//! - Time off before, during and after "now"
//! - Assignment aggregation and the team roster boundary
//! - Sprint resolution failures
//! - Malformed payloads

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use sprint_capacity::api::{AppState, create_router};
use sprint_capacity::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post_snapshot(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/snapshot")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_iteration(name: &str, start: Option<&str>, finish: Option<&str>) -> Value {
    json!({
        "id": format!("iteration-{}", name.to_lowercase().replace(' ', "-")),
        "name": name,
        "path": format!("Fabrikam\\{}", name),
        "attributes": {
            "startDate": start.map(|d| format!("{}T00:00:00Z", d)),
            "finishDate": finish.map(|d| format!("{}T00:00:00Z", d)),
        }
    })
}

/// Two full Monday-to-Friday weeks: 2024-01-01 to 2024-01-12.
fn default_iterations() -> Vec<Value> {
    vec![
        create_iteration("Sprint 4", Some("2023-12-18"), Some("2023-12-29")),
        create_iteration("Sprint 5", Some("2024-01-01"), Some("2024-01-12")),
        create_iteration("Sprint 6", Some("2024-01-15"), Some("2024-01-26")),
    ]
}

fn create_member(unique_name: &str, capacity_per_day: f64, days_off: Vec<(&str, &str)>) -> Value {
    json!({
        "teamMember": { "displayName": unique_name, "uniqueName": unique_name },
        "activities": [ { "capacityPerDay": capacity_per_day, "name": "Development" } ],
        "daysOff": days_off
            .into_iter()
            .map(|(start, end)| json!({
                "start": format!("{}T00:00:00Z", start),
                "end": format!("{}T00:00:00Z", end),
            }))
            .collect::<Vec<_>>(),
    })
}

fn create_work_item(id: u64, assignee: Option<&str>, remaining: Option<f64>) -> Value {
    let mut fields = serde_json::Map::new();
    fields.insert("System.Id".to_string(), json!(id));
    fields.insert("System.State".to_string(), json!("Active"));
    if let Some(name) = assignee {
        fields.insert(
            "System.AssignedTo".to_string(),
            json!({ "displayName": name, "uniqueName": name }),
        );
    }
    if let Some(hours) = remaining {
        fields.insert(
            "Microsoft.VSTS.Scheduling.RemainingWork".to_string(),
            json!(hours),
        );
    }
    json!({ "id": id, "fields": fields })
}

fn create_request(
    sprint: &str,
    as_of: &str,
    iterations: Vec<Value>,
    members: Vec<Value>,
    work_items: Vec<Value>,
) -> Value {
    json!({
        "organization": "contoso",
        "project": "Fabrikam",
        "team": "Platform Team",
        "sprint": sprint,
        "as_of": as_of,
        "iterations": { "count": iterations.len(), "value": iterations },
        "capacities": { "count": members.len(), "value": members },
        "work_items": { "count": work_items.len(), "value": work_items },
    })
}

fn row<'a>(result: &'a Value, name: &str) -> &'a Value {
    result["rows"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["name"] == name)
        .unwrap_or_else(|| panic!("No row for member '{}'", name))
}

fn assert_hours(row: &Value, column: &str, expected: &str) {
    let actual = decimal(row[column].as_str().unwrap());
    assert_eq!(
        actual,
        decimal(expected),
        "Expected {} {}, got {}",
        column,
        expected,
        actual
    );
}

// =============================================================================
// SECTION 1: Sprint capacity
// =============================================================================

#[tokio::test]
async fn test_full_capacity_before_sprint_starts() {
    let request = create_request(
        "Sprint 5",
        "2023-12-27T08:00:00",
        default_iterations(),
        vec![create_member("alice@example.com", 6.0, vec![])],
        vec![],
    );

    let (status, result) = post_snapshot(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["snapshot"]["num_days_in_sprint"], 10);
    let alice = row(&result, "alice@example.com");
    assert_hours(alice, "total_sprint_hours", "60");
    assert_hours(alice, "remaining_sprint_hours", "60");
    assert_hours(alice, "currently_assigned", "0");
}

#[tokio::test]
async fn test_mid_sprint_with_day_off() {
    // now = second Monday; one day off on Tuesday 2024-01-09
    let request = create_request(
        "Sprint 5",
        "2024-01-08T16:20:00",
        default_iterations(),
        vec![create_member(
            "alice@example.com",
            6.0,
            vec![("2024-01-09", "2024-01-09")],
        )],
        vec![],
    );

    let (status, result) = post_snapshot(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    let alice = row(&result, "alice@example.com");
    assert_hours(alice, "total_sprint_hours", "60");
    assert_hours(alice, "remaining_sprint_hours", "24");
}

#[tokio::test]
async fn test_sprint_over_has_no_remaining_capacity() {
    let request = create_request(
        "Sprint 5",
        "2024-01-20T00:00:00",
        default_iterations(),
        vec![create_member("alice@example.com", 6.0, vec![])],
        vec![],
    );

    let (status, result) = post_snapshot(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    let alice = row(&result, "alice@example.com");
    assert_hours(alice, "total_sprint_hours", "60");
    assert_hours(alice, "remaining_sprint_hours", "0");
}

#[tokio::test]
async fn test_long_leave_clamps_remaining_at_zero() {
    let request = create_request(
        "Sprint 5",
        "2024-01-10T00:00:00",
        default_iterations(),
        vec![create_member(
            "alice@example.com",
            7.5,
            vec![("2024-01-01", "2024-03-31")],
        )],
        vec![],
    );

    let (status, result) = post_snapshot(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    let alice = row(&result, "alice@example.com");
    assert_hours(alice, "total_sprint_hours", "75");
    assert_hours(alice, "remaining_sprint_hours", "0");
}

#[tokio::test]
async fn test_weekend_time_off_does_not_reduce_capacity() {
    let request = create_request(
        "Sprint 5",
        "2024-01-01T00:00:00",
        default_iterations(),
        vec![create_member(
            "alice@example.com",
            6.0,
            vec![("2024-01-06", "2024-01-07")],
        )],
        vec![],
    );

    let (_, result) = post_snapshot(create_router_for_test(), request).await;

    assert_hours(row(&result, "alice@example.com"), "remaining_sprint_hours", "60");
}

#[tokio::test]
async fn test_sprint_name_match_ignores_case() {
    let request = create_request(
        "  sprint 5 ",
        "2024-01-01T00:00:00",
        default_iterations(),
        vec![create_member("alice@example.com", 6.0, vec![])],
        vec![],
    );

    let (status, result) = post_snapshot(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["snapshot"]["num_days_in_sprint"], 10);
    // The requested name is reported as given
    assert_eq!(row(&result, "alice@example.com")["sprint"], "  sprint 5 ");
}

// =============================================================================
// SECTION 2: Assignments
// =============================================================================

#[tokio::test]
async fn test_assigned_work_is_summed_per_member() {
    let request = create_request(
        "Sprint 5",
        "2024-01-08T09:00:00",
        default_iterations(),
        vec![
            create_member("alice@example.com", 6.0, vec![]),
            create_member("bob@example.com", 4.0, vec![]),
        ],
        vec![
            create_work_item(1, Some("alice@example.com"), Some(3.0)),
            create_work_item(2, Some("alice@example.com"), Some(5.0)),
            create_work_item(3, Some("bob@example.com"), None),
            create_work_item(4, None, Some(13.0)),
            create_work_item(5, Some("outsider@example.com"), Some(21.0)),
        ],
    );

    let (status, result) = post_snapshot(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["rows"].as_array().unwrap().len(), 2);
    assert_hours(row(&result, "alice@example.com"), "currently_assigned", "8");
    assert_hours(row(&result, "bob@example.com"), "currently_assigned", "0");
}

#[tokio::test]
async fn test_rows_preserve_roster_order_and_constant_columns() {
    let request = create_request(
        "Sprint 5",
        "2024-01-08T09:05:10",
        default_iterations(),
        vec![
            create_member("zoe@example.com", 6.0, vec![]),
            create_member("adam@example.com", 6.0, vec![]),
        ],
        vec![],
    );

    let (_, result) = post_snapshot(create_router_for_test(), request).await;
    let rows = result["rows"].as_array().unwrap();

    assert_eq!(rows[0]["name"], "zoe@example.com");
    assert_eq!(rows[1]["name"], "adam@example.com");
    for r in rows {
        assert_eq!(r["organization"], "contoso");
        assert_eq!(r["project"], "Fabrikam");
        assert_eq!(r["team"], "Platform Team");
        assert_eq!(r["snapshot_datetime"], "2024-01-08 09:05:10");
        assert_eq!(r["num_days_in_sprint"], 10);
    }
}

#[tokio::test]
async fn test_empty_team_returns_empty_snapshot() {
    let request = create_request(
        "Sprint 5",
        "2024-01-08T09:00:00",
        default_iterations(),
        vec![],
        vec![create_work_item(1, Some("alice@example.com"), Some(3.0))],
    );

    let (status, result) = post_snapshot(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["rows"].as_array().unwrap().is_empty());
}

// =============================================================================
// SECTION 3: Error cases
// =============================================================================

#[tokio::test]
async fn test_unknown_sprint_returns_not_found() {
    let request = create_request(
        "Sprint 5",
        "2024-01-08T09:00:00",
        vec![
            create_iteration("Sprint 4", Some("2023-12-18"), Some("2023-12-29")),
            create_iteration("Sprint 6", Some("2024-01-15"), Some("2024-01-26")),
        ],
        vec![create_member("alice@example.com", 6.0, vec![])],
        vec![],
    );

    let (status, result) = post_snapshot(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(result["code"], "SPRINT_NOT_FOUND");
    assert!(result.get("rows").is_none());
}

#[tokio::test]
async fn test_sprint_without_dates_returns_unprocessable() {
    let request = create_request(
        "Sprint 7",
        "2024-01-08T09:00:00",
        vec![create_iteration("Sprint 7", None, None)],
        vec![create_member("alice@example.com", 6.0, vec![])],
        vec![],
    );

    let (status, result) = post_snapshot(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(result["code"], "MISSING_SPRINT_DATES");
}

#[tokio::test]
async fn test_malformed_time_off_rejects_whole_request() {
    let mut bad_member = create_member("bob@example.com", 6.0, vec![]);
    bad_member["daysOff"] = json!([{ "start": "2024-01-09", "end": "2024-01-09T00:00:00Z" }]);

    let request = create_request(
        "Sprint 5",
        "2024-01-08T09:00:00",
        default_iterations(),
        vec![create_member("alice@example.com", 6.0, vec![]), bad_member],
        vec![],
    );

    let (status, result) = post_snapshot(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_RECORD");
    assert!(result["message"].as_str().unwrap().contains("bob@example.com"));
}

#[tokio::test]
async fn test_wrong_content_type_is_rejected() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/snapshot")
                .header("Content-Type", "text/plain")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["code"], "MISSING_CONTENT_TYPE");
}
