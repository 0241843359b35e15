//! Fetch chain tests against a mocked Congress.gov API.

use lawchat_congress::{
    BillReference, CongressClient, CongressConfig, CongressError, TEXT_NOT_AVAILABLE,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-key";

fn client_for(server: &MockServer) -> CongressClient {
    let config = CongressConfig::builder(API_KEY)
        .api_base_url(server.uri())
        .timeout_secs(5)
        .build();
    CongressClient::new(&config).expect("client creation")
}

fn hr_3076() -> BillReference {
    BillReference::parse("hr.3076.117").expect("valid bill id")
}

fn bill_body(text_versions: serde_json::Value) -> serde_json::Value {
    json!({
        "bill": {
            "congress": 117,
            "number": "3076",
            "type": "HR",
            "title": "Postal Service Reform Act of 2022",
            "introducedDate": "2021-05-11",
            "latestAction": {"actionDate": "2022-04-06", "text": "Became Public Law No: 117-108."},
            "policyArea": {"name": "Government Operations and Politics"},
            "sponsors": [{"bioguideId": "M000087", "fullName": "Rep. Maloney, Carolyn B. [D-NY-12]"}],
            "laws": [{"number": "117-108", "type": "Public Law"}],
            "textVersions": text_versions
        },
        "request": {"billNumber": "3076", "billType": "hr", "congress": "117"}
    })
}

async fn mount_bill(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/bill/117/hr/3076"))
        .and(query_param("format", "json"))
        .and(query_param("api_key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

fn text_versions_url(server: &MockServer) -> String {
    format!("{}/bill/117/hr/3076/text?format=json", server.uri())
}

#[tokio::test]
async fn test_full_chain_resolves_latest_text() {
    let server = MockServer::start().await;

    mount_bill(
        &server,
        bill_body(json!({"count": 2, "url": text_versions_url(&server)})),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/bill/117/hr/3076/text"))
        .and(query_param("api_key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "textVersions": [
                {"date": "2022-04-06T04:00:00Z", "type": "Enrolled Bill",
                 "url": format!("{}/text/enrolled?format=json", server.uri())},
                {"date": "2021-05-11T04:00:00Z", "type": "Introduced in House",
                 "url": format!("{}/text/introduced?format=json", server.uri())}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/text/enrolled"))
        .and(query_param("format", "json"))
        .and(query_param("api_key", API_KEY))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"text": "SECTION 1. SHORT TITLE."})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/text/introduced"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "old"})))
        .expect(0)
        .mount(&server)
        .await;

    let details = client_for(&server)
        .fetch_law_details(&hr_3076())
        .await
        .expect("lookup succeeds");

    assert_eq!(details.title, json!("Postal Service Reform Act of 2022"));
    assert_eq!(details.bill_type, json!("HR"));
    assert_eq!(details.congress, json!(117));
    assert_eq!(details.text_content, "SECTION 1. SHORT TITLE.");
    assert_eq!(details.laws, json!([{"number": "117-108", "type": "Public Law"}]));
    assert_eq!(details.subjects, json!({}));
}

#[tokio::test]
async fn test_no_text_versions_url_gives_empty_text() {
    let server = MockServer::start().await;

    let mut body = bill_body(json!(null));
    body["bill"]
        .as_object_mut()
        .expect("bill object")
        .remove("textVersions");
    mount_bill(&server, body).await;

    let details = client_for(&server)
        .fetch_law_details(&hr_3076())
        .await
        .expect("lookup succeeds");

    assert_eq!(details.text_content, "");
    assert_eq!(details.text_versions, json!({}));

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_metadata_failure_stops_chain() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bill/117/hr/3076"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/bill/117/hr/3076/text"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"textVersions": []})))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_law_details(&hr_3076())
        .await
        .expect_err("metadata failure is fatal");

    assert!(matches!(err, CongressError::Http(_)));
    assert!(!err.to_string().contains(API_KEY), "error leaks api key: {err}");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_missing_bill_object() {
    let server = MockServer::start().await;

    mount_bill(&server, json!({"error": "not found"})).await;

    let err = client_for(&server)
        .fetch_law_details(&hr_3076())
        .await
        .expect_err("missing bill object");

    assert!(matches!(err, CongressError::MissingBill));
}

#[tokio::test]
async fn test_non_json_metadata_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bill/117/hr/3076"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_law_details(&hr_3076())
        .await
        .expect_err("html body");

    assert!(matches!(err, CongressError::Decode { .. }));
}

#[tokio::test]
async fn test_text_versions_failure_degrades_to_sentinel() {
    let server = MockServer::start().await;

    mount_bill(
        &server,
        bill_body(json!({"count": 1, "url": text_versions_url(&server)})),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/bill/117/hr/3076/text"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let details = client_for(&server)
        .fetch_law_details(&hr_3076())
        .await
        .expect("sub-fetch failures are swallowed");

    assert_eq!(details.text_content, TEXT_NOT_AVAILABLE);
    assert_eq!(details.title, json!("Postal Service Reform Act of 2022"));
}

#[tokio::test]
async fn test_text_content_failure_degrades_to_sentinel() {
    let server = MockServer::start().await;

    mount_bill(
        &server,
        bill_body(json!({"count": 1, "url": text_versions_url(&server)})),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/bill/117/hr/3076/text"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "textVersions": [{"url": format!("{}/text/enrolled?format=json", server.uri())}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/text/enrolled"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let details = client_for(&server)
        .fetch_law_details(&hr_3076())
        .await
        .expect("sub-fetch failures are swallowed");

    assert_eq!(details.text_content, TEXT_NOT_AVAILABLE);
}

#[tokio::test]
async fn test_text_content_falls_back_to_nested_version() {
    let server = MockServer::start().await;

    mount_bill(
        &server,
        bill_body(json!({"count": 1, "url": text_versions_url(&server)})),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/bill/117/hr/3076/text"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "textVersions": [{"url": format!("{}/text/enrolled?format=json", server.uri())}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/text/enrolled"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "textVersions": [{"text": "nested text"}]
        })))
        .mount(&server)
        .await;

    let details = client_for(&server)
        .fetch_law_details(&hr_3076())
        .await
        .expect("lookup succeeds");

    assert_eq!(details.text_content, "nested text");
}

#[tokio::test]
async fn test_empty_text_versions_list_gives_empty_text() {
    let server = MockServer::start().await;

    mount_bill(
        &server,
        bill_body(json!({"count": 0, "url": text_versions_url(&server)})),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/bill/117/hr/3076/text"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"textVersions": []})))
        .expect(1)
        .mount(&server)
        .await;

    let details = client_for(&server)
        .fetch_law_details(&hr_3076())
        .await
        .expect("lookup succeeds");

    assert_eq!(details.text_content, "");
}

#[tokio::test]
async fn test_null_text_versions_list_gives_empty_text() {
    let server = MockServer::start().await;

    mount_bill(
        &server,
        bill_body(json!({"count": 0, "url": text_versions_url(&server)})),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/bill/117/hr/3076/text"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"textVersions": null})))
        .expect(1)
        .mount(&server)
        .await;

    let details = client_for(&server)
        .fetch_law_details(&hr_3076())
        .await
        .expect("lookup succeeds");

    assert_eq!(details.text_content, "");
}

#[tokio::test]
async fn test_null_scalar_fields_pass_through() {
    let server = MockServer::start().await;

    let mut body = bill_body(json!({"count": 1, "url": text_versions_url(&server)}));
    body["bill"]["title"] = json!(null);
    body["bill"]["introducedDate"] = json!(null);
    mount_bill(&server, body).await;

    Mock::given(method("GET"))
        .and(path("/bill/117/hr/3076/text"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "textVersions": [{"url": format!("{}/text/enrolled?format=json", server.uri())}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/text/enrolled"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"text": "SECTION 1. SHORT TITLE."})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let details = client_for(&server)
        .fetch_law_details(&hr_3076())
        .await
        .expect("null metadata fields do not fail the lookup");

    assert_eq!(details.title, json!(null));
    assert_eq!(details.introduced_date, json!(null));
    assert_eq!(details.bill_type, json!("HR"));
    assert_eq!(details.text_content, "SECTION 1. SHORT TITLE.");
}

#[tokio::test]
async fn test_bill_type_is_lowercased_in_request() {
    let server = MockServer::start().await;

    mount_bill(&server, bill_body(json!({}))).await;

    let bill = BillReference::parse("HR.3076.117").expect("valid bill id");
    let details = client_for(&server)
        .fetch_law_details(&bill)
        .await
        .expect("lookup succeeds");

    assert_eq!(details.text_content, "");
}
