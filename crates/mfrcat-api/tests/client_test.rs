#![allow(clippy::unwrap_used)]
// Integration tests for `VpicClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mfrcat_api::{Error, TransportConfig, VpicClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, VpicClient) {
    let server = MockServer::start().await;
    let client = VpicClient::new(&server.uri(), &TransportConfig::default()).unwrap();
    (server, client)
}

fn manufacturers_envelope() -> serde_json::Value {
    json!({
        "Count": 2,
        "Message": "Response returned successfully",
        "SearchCriteria": null,
        "Results": [
            {
                "Country": "UNITED STATES (USA)",
                "Mfr_ID": 955,
                "Mfr_Name": "TESLA, INC.",
                "VehicleTypes": [
                    {"IsPrimary": true, "Name": "Passenger Car"},
                    {"IsPrimary": false, "Name": "Multipurpose Passenger Vehicle (MPV)"}
                ]
            },
            {
                "Country": "GERMANY",
                "Mfr_ID": 1041,
                "Mfr_Name": "BMW AG",
                "VehicleTypes": []
            }
        ]
    })
}

// ── Manufacturer list ───────────────────────────────────────────────

#[tokio::test]
async fn test_all_manufacturers() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/vehicles/getallmanufacturers"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(manufacturers_envelope()))
        .mount(&server)
        .await;

    let manufacturers = client.all_manufacturers().await.unwrap();

    assert_eq!(manufacturers.len(), 2);
    assert_eq!(manufacturers[0].id, 955);
    assert_eq!(manufacturers[0].name, "TESLA, INC.");
    assert_eq!(manufacturers[0].vehicle_types.len(), 2);
    assert_eq!(manufacturers[0].vehicle_types[0].name, "Passenger Car");
    assert!(manufacturers[1].vehicle_types.is_empty());
}

#[tokio::test]
async fn test_all_manufacturers_empty_results() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/vehicles/getallmanufacturers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Count": 0,
            "Message": "ok",
            "Results": []
        })))
        .mount(&server)
        .await;

    let manufacturers = client.all_manufacturers().await.unwrap();
    assert!(manufacturers.is_empty());
}

#[tokio::test]
async fn test_server_error_maps_to_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/vehicles/getallmanufacturers"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let result = client.all_manufacturers().await;

    match result {
        Err(Error::Api { status, ref message }) => {
            assert_eq!(status, 503);
            assert!(
                message.contains("Service Unavailable"),
                "expected body in message, got: {message}"
            );
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_garbage_body_maps_to_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/vehicles/getallmanufacturers"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let result = client.all_manufacturers().await;

    match result {
        Err(Error::Deserialization { ref body, .. }) => {
            assert!(body.contains("maintenance"));
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

// ── Manufacturer details ────────────────────────────────────────────

#[tokio::test]
async fn test_manufacturer_details() {
    let (server, client) = setup().await;

    let envelope = json!({
        "Count": 1,
        "Message": "Response returned successfully",
        "Results": [{
            "Mfr_Name": "TESLA, INC.",
            "Mfr_RegisteredName": "Tesla, Inc.",
            "Current_Head": "Elon Musk",
            "Current_Head_Exec_Title": "CEO",
            "Address": "1 Tesla Road",
            "City": "Austin",
            "State": "TEXAS",
            "Zip": "78725"
        }]
    });

    Mock::given(method("GET"))
        .and(path("/vehicles/getmanufacturerdetails/955"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let detail = client.manufacturer_details(955).await.unwrap();

    assert_eq!(detail.name.as_deref(), Some("TESLA, INC."));
    assert_eq!(detail.registered_name.as_deref(), Some("Tesla, Inc."));
    assert_eq!(detail.current_head.as_deref(), Some("Elon Musk"));
    assert_eq!(detail.current_head_title.as_deref(), Some("CEO"));
    assert_eq!(detail.city.as_deref(), Some("Austin"));
    assert_eq!(detail.zip.as_deref(), Some("78725"));
}

#[tokio::test]
async fn test_manufacturer_details_empty_results_is_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/vehicles/getmanufacturerdetails/99999"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Count": 0,
            "Message": "no results",
            "Results": []
        })))
        .mount(&server)
        .await;

    let result = client.manufacturer_details(99999).await;

    match result {
        Err(ref err @ Error::NotFound { id }) => {
            assert_eq!(id, 99999);
            assert!(err.is_not_found());
        }
        other => panic!("expected NotFound error, got: {other:?}"),
    }
}
