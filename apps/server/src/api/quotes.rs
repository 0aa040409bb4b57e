use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use coverhub_carriers::{GenericQuoteRequest, GenericQuoteResponse};
use tokio_util::sync::CancellationToken;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

/// 200 with the quote on success, 400 with the same body shape on failure.
#[utoipa::path(
    post,
    path = "/api/v1/quote",
    responses(
        (status = 200, description = "Quote issued"),
        (status = 400, description = "Quote could not be issued")
    )
)]
pub async fn create_quote(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenericQuoteRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<GenericQuoteResponse>)> {
    let Json(request) = payload?;

    // Dropping the guard, as happens when the client goes away, cancels the
    // carrier call.
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    let service = state.quote_service.clone();
    let response = tokio::spawn(async move { service.process_quote(&request, &cancel).await })
        .await
        .map_err(|e| ApiError::Internal(format!("Quote task failed: {}", e)))?;

    let status = if response.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    Ok((status, Json(response)))
}
