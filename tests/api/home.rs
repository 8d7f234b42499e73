use crate::helpers::{pitch_json, spawn_app};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn an_empty_search_shows_the_empty_state() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(method("GET"))
        .and(path("/pitches"))
        .and(query_param("query", "health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&app.content_server)
        .await;

    // Act
    let response = app.get_home(Some("health")).await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains("No startups found"));
    assert!(html_page.contains(r#"Search results for "health""#));
    assert!(!html_page.contains(r#"class="startup-card""#));
}

#[tokio::test]
async fn every_pitch_gets_a_card_keyed_by_its_id() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(method("GET"))
        .and(path("/pitches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            pitch_json("a1", "Hungarian Parliament", "Random"),
            pitch_json("b2", "MediVan", "Health"),
        ])))
        .expect(1)
        .mount(&app.content_server)
        .await;

    // Act
    let html_page = app.get_home_html(None).await;

    // Assert
    assert!(html_page.contains("All Startups"));
    assert!(html_page.contains(r#"id="startup-a1""#));
    assert!(html_page.contains(r#"id="startup-b2""#));
    assert!(html_page.contains("MediVan"));
    assert!(html_page.contains("John"));
    assert!(html_page.contains("November 3, 2024"));
    assert!(!html_page.contains("No startups found"));
}

#[tokio::test]
async fn a_blank_query_lists_everything() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(method("GET"))
        .and(path("/pitches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&app.content_server)
        .await;

    // Act
    let html_page = app.get_home_html(Some("  ")).await;

    // Assert
    assert!(html_page.contains("All Startups"));
    let requests = app.content_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn the_listing_fails_with_500_if_the_content_api_is_down() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(method("GET"))
        .and(path("/pitches"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&app.content_server)
        .await;

    // Act
    let response = app.get_home(None).await;

    // Assert
    assert_eq!(response.status().as_u16(), 500);
}
