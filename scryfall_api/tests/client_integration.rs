use scryfall_api::{Client, Error, FetchJson, NamedQuery, Query};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn get_named_card_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("black_lotus.json");

    Mock::given(method("GET"))
        .and(path("/cards/named"))
        .and(query_param("exact", "Black Lotus"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result = client
        .get_named_card(&NamedQuery::exact("Black Lotus"))
        .await;
    assert!(result.is_ok());

    let card = result.unwrap();
    assert_eq!(card["name"], "Black Lotus");
    assert_eq!(card["prices"]["usd"], "50000.00");
    assert!(card["prices"]["eur"].is_null());
}

#[tokio::test]
async fn fetch_json_sends_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards/named"))
        .and(header(
            "user-agent",
            scryfall_api::default_user_agent().as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("shock.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let url = NamedQuery::exact("Shock")
        .to_url(client.base_url())
        .unwrap();
    let card = client.fetch_json(&url).await.unwrap();
    assert_eq!(card["prices"]["tix"], "0.03");
}

#[tokio::test]
async fn get_named_card_with_set() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards/named"))
        .and(query_param("exact", "Shock"))
        .and(query_param("set", "m21"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("shock.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let card = client
        .get_named_card(&NamedQuery::exact("Shock").with_set("m21"))
        .await
        .unwrap();
    assert_eq!(card["set"], "m21");
}

#[tokio::test]
async fn get_named_card_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards/named"))
        .respond_with(ResponseTemplate::new(404).set_body_string(load_fixture("not_found.json")))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client
        .get_named_card(&NamedQuery::exact("Blak Lotus"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    match err {
        Error::NotFound { details } => assert!(details.contains("Blak Lotus")),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn get_named_card_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards/named"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client
        .get_named_card(&NamedQuery::exact("Black Lotus"))
        .await
        .unwrap_err();
    assert!(!err.is_not_found());
    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn get_named_card_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards/named"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result = client
        .get_named_card(&NamedQuery::exact("Black Lotus"))
        .await;
    assert!(matches!(result, Err(Error::Decode(_))));
}

#[tokio::test]
async fn unreachable_host_is_request_failure() {
    // Nothing listens on the discard port.
    let client = Client::with_base_url("http://127.0.0.1:9").unwrap();
    let result = client
        .get_named_card(&NamedQuery::exact("Black Lotus"))
        .await;
    assert!(matches!(result, Err(Error::RequestFailed(_))));
}
