//! Integration tests for the OpenWeatherMap client using wiremock
//!
//! These tests verify the weather client's behavior against a mock HTTP
//! server, ensuring proper handling of various response scenarios.

use integration_openweather::{OpenWeatherClient, OpenWeatherConfig, WeatherApi, WeatherApiError};
use secrecy::SecretString;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

// ============================================================================
// Test helpers
// ============================================================================

/// Sample current-conditions response for Paris
fn sample_current_response() -> serde_json::Value {
    serde_json::json!({
        "coord": {"lon": 2.3488, "lat": 48.8534},
        "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
        "base": "stations",
        "main": {
            "temp": 293.55,
            "feels_like": 293.13,
            "temp_min": 292.15,
            "temp_max": 294.82,
            "pressure": 1014,
            "humidity": 60
        },
        "visibility": 10000,
        "wind": {"speed": 3.6, "deg": 160},
        "clouds": {"all": 0},
        "dt": 1_661_870_592,
        "sys": {"type": 2, "id": 2_041_230, "country": "FR", "sunrise": 1_661_834_187, "sunset": 1_661_882_248},
        "timezone": 7200,
        "id": 2_988_507,
        "name": "Paris",
        "cod": 200
    })
}

/// Sample forecast response with the given number of 3-hour points
///
/// Points start at 2022-08-30 12:00 UTC and step forward 3 hours each.
fn sample_forecast_response(count: usize) -> serde_json::Value {
    let base_dt: i64 = 1_661_860_800;
    let list: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            let category = if i % 2 == 0 { "Clear" } else { "Clouds" };
            let description = if i % 2 == 0 { "clear sky" } else { "few clouds" };
            serde_json::json!({
                "dt": base_dt + (i as i64) * 10_800,
                "main": {
                    "temp": 293.0 + (i as f64) * 0.1,
                    "feels_like": 292.8 + (i as f64) * 0.1,
                    "temp_min": 292.5 + (i as f64) * 0.1,
                    "temp_max": 293.5 + (i as f64) * 0.1,
                    "pressure": 1015,
                    "humidity": 65
                },
                "weather": [{"main": category, "description": description}],
                "wind": {"speed": 2.5, "deg": 200}
            })
        })
        .collect();

    serde_json::json!({
        "cod": "200",
        "message": 0,
        "cnt": count,
        "list": list,
        "city": {"id": 2_988_507, "name": "Paris", "country": "FR", "timezone": 7200}
    })
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> OpenWeatherClient {
    create_test_client_with_timeout(mock_server, 5)
}

fn create_test_client_with_timeout(mock_server: &MockServer, timeout_secs: u64) -> OpenWeatherClient {
    let config = OpenWeatherConfig {
        api_key: Some(SecretString::from("test-key")),
        base_url: mock_server.uri(),
        timeout_secs,
        ..Default::default()
    };
    #[allow(clippy::expect_used)]
    OpenWeatherClient::new(config).expect("Failed to create client")
}

/// Setup a mock for the /weather endpoint with the given response
async fn setup_current_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

/// Setup a mock for the /forecast endpoint with the given response
async fn setup_forecast_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_current_weather_success() {
    let mock_server = MockServer::start().await;

    setup_current_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_current_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current_weather("Paris").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let snapshot = result.unwrap();
    assert_eq!(snapshot.city, "Paris");
    assert_eq!(snapshot.country, Some("FR".to_string()));
    assert!((snapshot.temperature - 293.55).abs() < 0.001);
    assert_eq!(snapshot.humidity, 60);
    assert_eq!(snapshot.wind_speed, Some(3.6));
    assert_eq!(snapshot.condition.category, "Clear");
    assert_eq!(snapshot.condition.description, "clear sky");
}

#[tokio::test]
async fn test_forecast_success() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_forecast_response(40)),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.forecast("Paris", 5).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let series = result.unwrap();
    assert_eq!(series.city, "Paris");
    assert_eq!(series.country, Some("FR".to_string()));
    assert_eq!(series.points.len(), 40);
    assert!(
        series
            .points
            .windows(2)
            .all(|pair| pair[0].timestamp < pair[1].timestamp),
        "Expected points in ascending timestamp order"
    );
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_city_not_found_maps_status_and_message() {
    let mock_server = MockServer::start().await;

    setup_current_mock(
        &mock_server,
        ResponseTemplate::new(404)
            .set_body_json(serde_json::json!({"cod": "404", "message": "city not found"})),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current_weather("Nowhereville").await;

    match result {
        Err(WeatherApiError::Api { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "city not found");
        }
        other => panic!("Expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_without_body_uses_fallback_message() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.forecast("Paris", 3).await;

    match result {
        Err(WeatherApiError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Unknown error");
        }
        other => panic!("Expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_response_is_decode_error() {
    let mock_server = MockServer::start().await;

    setup_current_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("not valid json"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current_weather("Paris").await;

    assert!(
        matches!(result, Err(WeatherApiError::Decode(_))),
        "Expected Decode, got: {result:?}"
    );
}

#[tokio::test]
async fn test_empty_condition_array_is_decode_error() {
    let mock_server = MockServer::start().await;

    let mut body = sample_current_response();
    body["weather"] = serde_json::json!([]);
    setup_current_mock(&mock_server, ResponseTemplate::new(200).set_body_json(body)).await;

    let client = create_test_client(&mock_server);
    let result = client.current_weather("Paris").await;

    assert!(
        matches!(result, Err(WeatherApiError::Decode(_))),
        "Expected Decode, got: {result:?}"
    );
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let mock_server = MockServer::start().await;

    // Server delays response longer than the client timeout
    setup_current_mock(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_json(sample_current_response())
            .set_delay(std::time::Duration::from_secs(3)),
    )
    .await;

    let client = create_test_client_with_timeout(&mock_server, 1);
    let result = client.current_weather("Paris").await;

    assert!(
        matches!(result, Err(WeatherApiError::Timeout { timeout_secs: 1 })),
        "Expected Timeout, got: {result:?}"
    );
}

#[tokio::test]
async fn test_unreachable_server_is_connection_error() {
    let config = OpenWeatherConfig {
        api_key: Some(SecretString::from("test-key")),
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 5,
        ..Default::default()
    };
    let client = OpenWeatherClient::new(config).expect("Failed to create client");

    let result = client.current_weather("Paris").await;

    assert!(
        matches!(result, Err(WeatherApiError::ConnectionFailed(_))),
        "Expected ConnectionFailed, got: {result:?}"
    );
}

// ============================================================================
// Input validation scenarios
// ============================================================================

#[tokio::test]
async fn test_empty_city_is_rejected_without_request() {
    let mock_server = MockServer::start().await;

    // The expectation of zero matched requests is verified when the mock
    // server shuts down.
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    let result = client.current_weather("").await;
    assert!(
        matches!(result, Err(WeatherApiError::InvalidRequest(_))),
        "Expected InvalidRequest, got: {result:?}"
    );

    let result = client.current_weather("   ").await;
    assert!(
        matches!(result, Err(WeatherApiError::InvalidRequest(_))),
        "Expected InvalidRequest, got: {result:?}"
    );
}

#[tokio::test]
async fn test_out_of_range_days_are_rejected_without_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response(8)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    let result = client.forecast("Paris", 0).await;
    assert!(
        matches!(result, Err(WeatherApiError::InvalidRequest(_))),
        "Expected InvalidRequest, got: {result:?}"
    );

    let result = client.forecast("Paris", 6).await;
    assert!(
        matches!(result, Err(WeatherApiError::InvalidRequest(_))),
        "Expected InvalidRequest, got: {result:?}"
    );
}

// ============================================================================
// Query parameter verification
// ============================================================================

#[tokio::test]
async fn test_current_request_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Paris"))
        .and(query_param("appid", "test-key"))
        .and(query_param("lang", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_weather("Paris").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn test_forecast_request_scales_days_to_points() {
    let mock_server = MockServer::start().await;

    // 3 days at a 3-hour cadence is 24 points
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "Paris"))
        .and(query_param("cnt", "24"))
        .and(query_param("appid", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response(24)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.forecast("Paris", 3).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn test_city_name_is_trimmed_before_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_weather("  Paris  ").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}
