//! Integration tests for `HotpepperClient` using wiremock HTTP mocks.

use gurume_core::Coordinate;
use gurume_hotpepper::{HotpepperClient, HotpepperError, RadiusCode, SearchQuery, GENRE_ALL};
use wiremock::matchers::{method, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> HotpepperClient {
    HotpepperClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

fn tokyo() -> Coordinate {
    Coordinate::new(35.6608183454, 139.7754267645)
}

fn shop_json(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "address": "東京都中央区銀座1-1-1",
        "access": "銀座駅徒歩2分",
        "lat": 35.671,
        "lng": 139.765,
        "logo_image": "https://img.example/logo.jpg",
        "photo": { "mobile": { "l": "https://img.example/l.jpg", "s": "https://img.example/s.jpg" } },
        "open": "月～金 11:00～22:00",
        "close": "日曜",
        "budget": { "name": "〜500円", "average": "450円" },
        "genre": { "name": "ラーメン", "catch": "こだわりの一杯" },
        "urls": { "pc": format!("https://www.hotpepper.jp/str{id}/") },
        "coupon_urls": { "pc": "https://coupon.example/pc", "sp": "https://coupon.example/sp" },
        "tel": "03-0000-0000"
    })
}

#[tokio::test]
async fn search_returns_shops_in_provider_order() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "results": { "shop": [shop_json("J001", "一番"), shop_json("J002", "二番")] }
    });

    Mock::given(method("GET"))
        .and(query_param("key", "test-key"))
        .and(query_param("format", "json"))
        .and(query_param("count", "100"))
        .and(query_param("range", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let query = SearchQuery::new(tokyo(), RadiusCode::R1km);
    let shops = client
        .search_restaurants(&query)
        .await
        .expect("should parse shops");

    assert_eq!(shops.len(), 2);
    assert_eq!(shops[0].id, "J001");
    assert_eq!(shops[0].name, "一番");
    assert_eq!(shops[1].id, "J002");
    assert_eq!(shops[0].genre.name, "ラーメン");
}

#[tokio::test]
async fn search_omits_sentinel_filters_from_request() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "results": { "shop": [shop_json("J003", "三番")] } });

    Mock::given(method("GET"))
        .and(query_param("keyword", "ラーメン"))
        .and(query_param("range", "4"))
        .and(query_param_is_missing("genre"))
        .and(query_param_is_missing("budget"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let query = SearchQuery::new(tokyo(), RadiusCode::R2km)
        .with_keyword("ラーメン")
        .with_genre_label(GENRE_ALL);
    let shops = client
        .search_restaurants(&query)
        .await
        .expect("sentinel genre must not become a genre param");
    assert_eq!(shops.len(), 1);
}

#[tokio::test]
async fn search_sends_filter_codes() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "results": { "shop": [] } });

    Mock::given(method("GET"))
        .and(query_param("genre", "G013"))
        .and(query_param("budget", "B009"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let query = SearchQuery::new(tokyo(), RadiusCode::R1km)
        .with_genre_label("ラーメン")
        .with_budget_label("〜500円");
    let shops = client
        .search_restaurants(&query)
        .await
        .expect("filters should be sent as codes");
    assert!(shops.is_empty());
}

#[tokio::test]
async fn empty_shop_list_is_ok_not_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "results": { "shop": [] } });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let shops = client
        .search_restaurants(&SearchQuery::new(tokyo(), RadiusCode::R1km))
        .await
        .expect("empty result is not an error");
    assert!(shops.is_empty());
}

#[tokio::test]
async fn same_query_twice_yields_same_content() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "results": { "shop": [shop_json("J001", "一番"), shop_json("J002", "二番")] }
    });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let query = SearchQuery::new(tokyo(), RadiusCode::R1km);
    let first = client.search_restaurants(&query).await.expect("first call");
    let second = client.search_restaurants(&query).await.expect("second call");
    assert_eq!(first, second);
}

#[tokio::test]
async fn missing_results_key_is_deserialize_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "error": [{ "code": 3000, "message": "bad request" }] });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .search_restaurants(&SearchQuery::new(tokyo(), RadiusCode::R1km))
        .await;
    assert!(matches!(result, Err(HotpepperError::Deserialize { .. })));
}

#[tokio::test]
async fn server_error_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .search_restaurants(&SearchQuery::new(tokyo(), RadiusCode::R1km))
        .await;
    assert!(matches!(result, Err(HotpepperError::Http(_))));
}

#[tokio::test]
async fn detail_returns_first_shop() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "results": { "shop": [shop_json("J001234567", "麺屋テスト")] } });

    Mock::given(method("GET"))
        .and(query_param("id", "J001234567"))
        .and(query_param_is_missing("count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let shop = client
        .get_restaurant_detail("J001234567")
        .await
        .expect("should parse detail");
    assert_eq!(shop.name, "麺屋テスト");
    assert_eq!(shop.urls.pc, "https://www.hotpepper.jp/strJ001234567/");
}

#[tokio::test]
async fn detail_with_empty_shop_list_is_not_found() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "results": { "shop": [] } });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.get_restaurant_detail("J000000000").await;
    assert!(
        matches!(result, Err(HotpepperError::NotFound(ref id)) if id == "J000000000"),
        "expected NotFound, got: {result:?}"
    );
}
