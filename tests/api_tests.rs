use atlas::api::ApiError;
use atlas::{FilterCriteria, RestCountriesClient, available_timezones, compute_sections};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, path_regex, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

/// A minimal country JSON object in the v3.1 wire shape
fn country_json(name: &str, continent: &str, timezone: &str) -> serde_json::Value {
    serde_json::json!({
        "name": { "common": name, "official": format!("Republic of {name}") },
        "capital": [format!("{name} City")],
        "region": continent,
        "population": 1_000_000u64,
        "flags": { "png": format!("https://flagcdn.com/w320/{}.png", name.to_lowercase()), "svg": "" },
        "timezones": [timezone],
        "continents": [continent]
    })
}

// ============================================================================
// Collection Fetch Tests
// ============================================================================

#[tokio::test]
async fn test_all_returns_countries_sorted_by_name() {
    let mock_server = MockServer::start().await;

    // Deliberately unsorted wire order
    let body = serde_json::json!([
        country_json("Peru", "South America", "UTC-05:00"),
        country_json("Iceland", "Europe", "UTC"),
        country_json("portugal", "Europe", "UTC"),
        country_json("Japan", "Asia", "UTC+09:00"),
    ]);

    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = RestCountriesClient::new(&mock_server.uri());
    let countries = client.all().await.unwrap();

    let names: Vec<&str> = countries.iter().map(|c| c.name.common.as_str()).collect();
    // Case-insensitive ascending order
    assert_eq!(names, vec!["Iceland", "Japan", "Peru", "portugal"]);
}

#[tokio::test]
async fn test_all_server_error_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = RestCountriesClient::new(&mock_server.uri());
    let err = client.all().await.unwrap_err();

    match err {
        ApiError::Status { status } => assert_eq!(status.as_u16(), 500),
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_is_tolerated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([country_json("Peru", "South America", "UTC-05:00")])),
        )
        .mount(&mock_server)
        .await;

    let client = RestCountriesClient::new(&format!("{}/", mock_server.uri()));
    let countries = client.all().await.unwrap();
    assert_eq!(countries.len(), 1);
}

// ============================================================================
// Per-Name Lookup Tests
// ============================================================================

#[tokio::test]
async fn test_by_name_unwraps_single_element_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/name/Peru"))
        .and(query_param("fullText", "true"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([country_json("Peru", "South America", "UTC-05:00")])),
        )
        .mount(&mock_server)
        .await;

    let client = RestCountriesClient::new(&mock_server.uri());
    let country = client.by_name("Peru").await.unwrap();

    assert_eq!(country.name.common, "Peru");
    assert_eq!(country.primary_capital(), Some("Peru City"));
}

#[tokio::test]
async fn test_by_name_encodes_spaces() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex("^/name/South(%20| )Africa$"))
        .and(query_param("fullText", "true"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([country_json("South Africa", "Africa", "UTC+02:00")])),
        )
        .mount(&mock_server)
        .await;

    let client = RestCountriesClient::new(&mock_server.uri());
    let country = client.by_name("South Africa").await.unwrap();
    assert_eq!(country.name.common, "South Africa");
}

#[tokio::test]
async fn test_by_name_404_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/name/Atlantis"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = RestCountriesClient::new(&mock_server.uri());
    let err = client.by_name("Atlantis").await.unwrap_err();

    match err {
        ApiError::NotFound(name) => assert_eq!(name, "Atlantis"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_by_name_empty_array_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/name/Nowhere"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = RestCountriesClient::new(&mock_server.uri());
    let err = client.by_name("Nowhere").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

// ============================================================================
// Fetch-Then-Derive Pipeline Tests
// ============================================================================

#[tokio::test]
async fn test_fetched_collection_feeds_the_section_engine() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!([
        country_json("Portugal", "Europe", "UTC"),
        country_json("Peru", "South America", "UTC-05:00"),
        country_json("Iceland", "Europe", "UTC"),
    ]);

    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = RestCountriesClient::new(&mock_server.uri());
    let countries = client.all().await.unwrap();

    // Ungrouped: sections inherit the base sort
    let sections = compute_sections(&countries, &FilterCriteria::default());
    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["I", "P"]);
    assert_eq!(sections[1].items.len(), 2);

    // Filtered by continent
    let criteria = FilterCriteria {
        continents: vec!["Europe".to_string()],
        ..FilterCriteria::default()
    };
    let sections = compute_sections(&countries, &criteria);
    let names: Vec<&str> = sections
        .iter()
        .flat_map(|s| s.items.iter().map(|c| c.name.common.as_str()))
        .collect();
    assert_eq!(names, vec!["Iceland", "Portugal"]);

    // Timezone options come from the full collection
    assert_eq!(
        available_timezones(&countries),
        vec!["UTC".to_string(), "UTC-05:00".to_string()]
    );
}
