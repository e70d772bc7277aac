use mockito::Matcher;
use serde_json::json;

use crate::error::AirVisualError;
use crate::CloudApi;

const TEST_API_KEY: &str = "abcde12345";

#[tokio::test]
async fn countries() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({
        "status": "success",
        "data": [
            { "country": "Andorra" },
            { "country": "Argentina" },
            { "country": "Australia" },
            { "country": "Austria" }
        ]
    });
    let mock = server
        .mock("GET", "/v2/countries")
        .match_query(Matcher::UrlEncoded("key".into(), TEST_API_KEY.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let cloud_api = CloudApi::with_server_root(TEST_API_KEY, &server.url());
    let data = cloud_api.supported.countries().await.unwrap();

    assert_eq!(data.as_array().unwrap().len(), 4);
    assert_eq!(data[0]["country"], "Andorra");
    mock.assert_async().await;
}

#[tokio::test]
async fn states() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({
        "status": "success",
        "data": [
            { "state": "California" },
            { "state": "Colorado" },
            { "state": "Oregon" }
        ]
    });
    let mock = server
        .mock("GET", "/v2/states")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("country".into(), "USA".into()),
            Matcher::UrlEncoded("key".into(), TEST_API_KEY.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let cloud_api = CloudApi::with_server_root(TEST_API_KEY, &server.url());
    let data = cloud_api.supported.states("USA").await.unwrap();

    assert_eq!(data.as_array().unwrap().len(), 3);
    mock.assert_async().await;
}

#[tokio::test]
async fn cities() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({
        "status": "success",
        "data": [
            { "city": "Fresno" },
            { "city": "Los Angeles" },
            { "city": "San Francisco" }
        ]
    });
    let mock = server
        .mock("GET", "/v2/cities")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("state".into(), "California".into()),
            Matcher::UrlEncoded("country".into(), "USA".into()),
            Matcher::UrlEncoded("key".into(), TEST_API_KEY.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let cloud_api = CloudApi::with_server_root(TEST_API_KEY, &server.url());
    let data = cloud_api.supported.cities("USA", "California").await.unwrap();

    assert_eq!(data.as_array().unwrap().len(), 3);
    mock.assert_async().await;
}

#[tokio::test]
async fn stations() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({
        "status": "success",
        "data": [
            {
                "station": "US Embassy in Beijing",
                "location": { "type": "Point", "coordinates": [116.466258, 39.954352] }
            },
            {
                "station": "Botanical Garden",
                "location": { "type": "Point", "coordinates": [116.205310, 40.002480] }
            }
        ]
    });
    let mock = server
        .mock("GET", "/v2/stations")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("city".into(), "Beijing".into()),
            Matcher::UrlEncoded("state".into(), "Beijing".into()),
            Matcher::UrlEncoded("country".into(), "China".into()),
            Matcher::UrlEncoded("key".into(), TEST_API_KEY.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let cloud_api = CloudApi::with_server_root(TEST_API_KEY, &server.url());
    let data = cloud_api
        .supported
        .stations("Beijing", "Beijing", "China")
        .await
        .unwrap();

    assert_eq!(data.as_array().unwrap().len(), 2);
    assert_eq!(data[0]["station"], "US Embassy in Beijing");
    mock.assert_async().await;
}

#[tokio::test]
async fn blank_country_never_hits_the_network() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let cloud_api = CloudApi::with_server_root(TEST_API_KEY, &server.url());
    let err = cloud_api.supported.states("  ").await.unwrap_err();

    assert!(matches!(err, AirVisualError::InvalidRequest(_)));
    mock.assert_async().await;
}
