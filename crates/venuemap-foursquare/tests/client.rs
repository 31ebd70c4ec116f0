//! Integration tests for `FoursquareClient` using wiremock HTTP mocks.

use std::time::Duration;

use venuemap_core::{LatLng, VenueStore};
use venuemap_foursquare::{FoursquareClient, FoursquareError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> FoursquareClient {
    FoursquareClient::with_base_url("test-id", "test-secret", 30, base_url)
        .expect("client construction should not fail")
}

fn katoomba() -> LatLng {
    LatLng::new(-33.714_955, 150.311_407)
}

fn explore_body() -> serde_json::Value {
    serde_json::json!({
        "meta": { "code": 200, "requestId": "5a1b" },
        "response": {
            "headerLocation": "Katoomba",
            "totalResults": 2,
            "groups": [{
                "name": "recommended",
                "items": [
                    {
                        "venue": {
                            "id": "4b6a3f0cf964a520f4ce2be3",
                            "name": "Echo Point Lookout",
                            "contact": {},
                            "location": {
                                "lat": -33.7321,
                                "lng": 150.3118,
                                "formattedAddress": ["Echo Point Rd", "Katoomba NSW 2780", "Australia"]
                            },
                            "rating": 9.4,
                            "categories": [{ "name": "Scenic Lookout" }]
                        }
                    },
                    {
                        "venue": {
                            "id": "4b58d2f0f964a520d96b28e3",
                            "name": "Paragon Cafe",
                            "contact": { "formattedPhone": "(02) 4782 2928" },
                            "location": {
                                "lat": -33.7128,
                                "lng": 150.3116,
                                "formattedAddress": ["65 Katoomba St", "Katoomba NSW 2780", "Australia"]
                            },
                            "url": "http://paragoncafe.example",
                            "categories": [{ "name": "Café" }]
                        }
                    }
                ]
            }]
        }
    })
}

#[tokio::test]
async fn explore_returns_first_group_items_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/venues/explore"))
        .and(query_param("client_id", "test-id"))
        .and(query_param("client_secret", "test-secret"))
        .and(query_param("ll", "-33.714955,150.311407"))
        .and(query_param("v", "20130815"))
        .and(query_param("section", "topPicks"))
        .and(query_param("limit", "15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(explore_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let items = client.explore(katoomba()).await.expect("should fetch venues");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["venue"]["name"], "Echo Point Lookout");
    assert_eq!(items[1]["venue"]["name"], "Paragon Cafe");
}

#[tokio::test]
async fn explore_items_load_into_store() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/venues/explore"))
        .respond_with(ResponseTemplate::new(200).set_body_json(explore_body()))
        .mount(&server)
        .await;

    let items = test_client(&server.uri())
        .explore(katoomba())
        .await
        .unwrap();

    let mut store = VenueStore::new();
    store.load(&items).expect("provider items should convert");
    let cafe = store.get("4b58d2f0f964a520d96b28e3").unwrap();
    assert_eq!(cafe.phone(), "(02) 4782 2928");
    assert_eq!(cafe.category(), "Café");
    assert_eq!(store.set_filter("lookout").len(), 1);
}

#[tokio::test]
async fn explore_without_groups_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/venues/explore"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "meta": { "code": 200 },
            "response": { "groups": [] }
        })))
        .mount(&server)
        .await;

    let items = test_client(&server.uri())
        .explore(katoomba())
        .await
        .unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn explore_surfaces_api_error_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/venues/explore"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "meta": {
                "code": 401,
                "errorType": "invalid_auth",
                "errorDetail": "OAuth token invalid or revoked."
            },
            "response": {}
        })))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .explore(katoomba())
        .await
        .unwrap_err();

    assert!(
        matches!(err, FoursquareError::ApiError { code: 401, ref error_type, .. } if error_type == "invalid_auth"),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn explore_server_error_without_envelope_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/venues/explore"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .explore(katoomba())
        .await
        .unwrap_err();

    assert!(
        matches!(err, FoursquareError::UnexpectedStatus { status: 503, .. }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn explore_malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/venues/explore"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"meta\": "))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .explore(katoomba())
        .await
        .unwrap_err();

    assert!(matches!(err, FoursquareError::Deserialize { .. }), "got: {err:?}");
}

#[tokio::test]
async fn transport_error_does_not_leak_client_secret() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/venues/explore"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(explore_body())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = FoursquareClient::with_base_url("test-id", "TOPSECRET", 1, &server.uri())
        .expect("client construction should not fail");
    let err = client.explore(katoomba()).await.unwrap_err();

    assert!(matches!(err, FoursquareError::Http(_)), "got: {err:?}");
    assert!(!err.to_string().contains("TOPSECRET"), "leaked: {err}");
    assert!(!format!("{err:?}").contains("TOPSECRET"), "leaked: {err:?}");
}
