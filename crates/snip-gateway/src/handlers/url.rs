use crate::error::{ApiError, Result};
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct ShortenQuery {
    pub api: Option<String>,
    pub uri: Option<String>,
}

/// `GET /shorten/{app}?api={key}&uri={uri}`
///
/// Answers with the composed short URL as the bare body, typed as JSON
/// (the response shape of the original service).
pub async fn shorten_handler(
    Path(app_id): Path<String>,
    Query(query): Query<ShortenQuery>,
    State(state): State<AppState>,
) -> Result<Response> {
    let api = query.api.ok_or(ApiError::ApiKeyNotFound)?;
    let app = state
        .registry
        .find_by_key(&app_id, &api)
        .ok_or(ApiError::ApiKeyNotFound)?;
    let uri = query
        .uri
        .filter(|uri| !uri.is_empty())
        .ok_or(ApiError::MissingUri)?;

    let code = state.shortener.shorten(app, &uri).await?;
    let short_url = code.to_url(&app.url);
    debug!(tenant = %app.id, uri = %uri, short_url = %short_url, "shortened uri");

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        short_url,
    )
        .into_response())
}

/// `ANY /s/{app}/{id}`
///
/// Redirects permanently to the resolved URI.
pub async fn resolve_handler(
    Path((app_id, code)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Response> {
    if code.is_empty() {
        return Err(ApiError::MissingShortCode);
    }
    let app = state
        .registry
        .find_by_id(&app_id)
        .ok_or(ApiError::UnknownApplication)?;

    let uri = state
        .shortener
        .resolve(app, &code)
        .await?
        .ok_or(ApiError::CodeNotFound)?;
    debug!(tenant = %app.id, code = %code, uri = %uri, "resolved identifier");

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, uri)]).into_response())
}
