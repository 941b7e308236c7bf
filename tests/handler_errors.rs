mod common;

#[tokio::test]
async fn test_root_greeting() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_text("Hi I am root");
}

#[tokio::test]
async fn test_undefined_route_is_not_found() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/nowhere/at/all").await;

    response.assert_status_not_found();
    assert!(response.text().contains("Page not found!"));
}

#[tokio::test]
async fn test_unsupported_method_is_not_found() {
    let (server, _store) = common::create_test_server();

    let response = server.patch("/listings").await;

    response.assert_status_not_found();
    assert!(response.text().contains("Page not found!"));
}

#[tokio::test]
async fn test_unsupported_override_is_not_found() {
    let (server, store) = common::create_test_server();
    let listing = common::create_test_listing(&store).await;

    let response = server
        .post(&format!("/listings/{}", listing.id))
        .add_query_param("_method", "PATCH")
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_malformed_id_is_not_found() {
    let (server, _store) = common::create_test_server();

    for path in ["/listings/abc", "/listings/-1", "/listings/0/edit"] {
        let response = server.get(path).await;
        response.assert_status_not_found();
        assert!(response.text().contains("Page not found!"));
    }
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let (server, _store) = common::create_test_server();

    server.get("/listings/").await.assert_status_ok();
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/static/css/style.css").await;

    response.assert_status_ok();
    assert!(response.text().contains(".navbar"));
}

#[tokio::test]
async fn test_missing_static_asset_is_not_found() {
    let (server, _store) = common::create_test_server();

    server
        .get("/static/css/missing.css")
        .await
        .assert_status_not_found();
}
