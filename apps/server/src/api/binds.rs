use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use coverhub_carriers::{GenericBindRequest, GenericBindResponse};
use tokio_util::sync::CancellationToken;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[utoipa::path(
    post,
    path = "/api/v1/bind",
    responses(
        (status = 200, description = "Policy bound"),
        (status = 400, description = "Bind rejected or failed")
    )
)]
pub async fn bind_quote(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenericBindRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<GenericBindResponse>)> {
    let Json(request) = payload?;

    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    let service = state.bind_service.clone();
    let response = tokio::spawn(async move { service.process_bind(&request, &cancel).await })
        .await
        .map_err(|e| ApiError::Internal(format!("Bind task failed: {}", e)))?;

    let status = if response.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    Ok((status, Json(response)))
}
