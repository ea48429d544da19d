mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn health_check_returns_ok() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;

    let response = app.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    assert_eq!(body["message"], "Health check");
    assert_eq!(body["data"]["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn root_reports_api_online() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;

    let response = app.get("/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(String::from_utf8(response.body)?.trim(), "API online!");
    Ok(())
}

#[tokio::test]
async fn unknown_route_is_404() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;

    let response = app.get("/suppliers").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["data"]["path"], "/suppliers");
    Ok(())
}
