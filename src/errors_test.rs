use super::*;
use axum::body::to_bytes;

async fn response_parts(err: ApiError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn bad_request_carries_message() {
    let (status, json) = response_parts(ApiError::bad_request("Missing fields")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Missing fields");
}

#[tokio::test]
async fn unauthorized_default_message() {
    let (status, json) = response_parts(ApiError::unauthorized()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Unauthorized");
}

#[tokio::test]
async fn internal_hides_details_from_clients() {
    let (status, json) = response_parts(ApiError::Internal("connection refused".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Internal server error");
}

#[tokio::test]
async fn email_exists_maps_to_400() {
    let (status, json) = response_parts(CustomerError::EmailExists.into()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Email exists");
}

#[tokio::test]
async fn invalid_service_maps_to_400() {
    let (status, json) = response_parts(OrderError::InvalidService.into()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid service");
}

#[tokio::test]
async fn ownership_mismatch_maps_to_403_unauthorized_body() {
    let (status, json) = response_parts(OrderError::NotOwner.into()).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"], "Unauthorized");
}

#[tokio::test]
async fn catalog_not_found_maps_to_404() {
    let (status, json) = response_parts(CatalogError::NotFound("s9".into()).into()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Not found");
}
