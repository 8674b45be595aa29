use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use analyzer::{analyze_json, parse_natural_language, StringFilter};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use store::StringRecord;

/// Query parameters for listing strings.
///
/// Numbers are parsed as signed so that negative values reach validation
/// and produce a descriptive error instead of a generic parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct ListStringsQuery {
    pub is_palindrome: Option<bool>,
    pub min_length: Option<i64>,
    pub max_length: Option<i64>,
    pub word_count: Option<i64>,
    pub contains_character: Option<String>,
}

impl ListStringsQuery {
    /// Validate the raw parameters and build a filter.
    pub fn into_filter(self) -> ServerResult<StringFilter> {
        let filter = StringFilter {
            is_palindrome: self.is_palindrome,
            min_length: non_negative("min_length", self.min_length)?,
            max_length: non_negative("max_length", self.max_length)?,
            word_count: non_negative("word_count", self.word_count)?,
            contains_character: self
                .contains_character
                .as_deref()
                .map(single_char)
                .transpose()?,
        };
        filter.validate()?;
        Ok(filter)
    }
}

fn non_negative(name: &str, value: Option<i64>) -> ServerResult<Option<usize>> {
    value
        .map(|v| {
            usize::try_from(v)
                .map_err(|_| ServerError::BadRequest(format!("{name} must be >= 0")))
        })
        .transpose()
}

fn single_char(value: &str) -> ServerResult<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(ServerError::BadRequest(
            "contains_character must be a single character".to_string(),
        )),
    }
}

/// Response for `GET /strings`
#[derive(Debug, Serialize, Deserialize)]
pub struct ListStringsResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub filters_applied: StringFilter,
}

/// Query parameters for `GET /strings/filter-by-natural-language`
#[derive(Debug, Default, Deserialize)]
pub struct NaturalLanguageQuery {
    pub query: Option<String>,
}

/// How a natural language query was understood
#[derive(Debug, Serialize, Deserialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: StringFilter,
}

/// Response for `GET /strings/filter-by-natural-language`
#[derive(Debug, Serialize, Deserialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

/// Analyze and store a string.
///
/// Body: `{"value": "<string>"}`. A malformed body or missing `value` is a
/// 400, a `value` of any other JSON type is a 422, an existing value is a 409.
/// Oversized bodies are a 413 and a missing JSON content type a 415.
pub async fn create_string(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> ServerResult<impl IntoResponse> {
    let Json(body) = payload?;

    let value = body
        .as_object()
        .and_then(|obj| obj.get("value"))
        .ok_or_else(|| {
            ServerError::BadRequest("Invalid request body or missing \"value\" field".to_string())
        })?;

    let analysis = analyze_json(value)?;
    let record = StringRecord::new(analysis, Utc::now());

    if let Err(err) = state.store.insert(&record) {
        if matches!(err, store::StoreError::Conflict) {
            metrics::counter!("strings_conflicts_total").increment(1);
        }
        return Err(err.into());
    }

    metrics::counter!("strings_created_total").increment(1);
    tracing::info!(id = %record.id, length = record.properties.length, "String created");

    Ok((StatusCode::CREATED, Json(record)))
}

/// List stored strings, optionally filtered by properties.
pub async fn list_strings(
    State(state): State<Arc<ServerState>>,
    query: Result<Query<ListStringsQuery>, QueryRejection>,
) -> ServerResult<impl IntoResponse> {
    let Query(query) = query.map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;
    let filter = query.into_filter()?;

    let data = state.store.list(&filter)?;

    Ok(Json(ListStringsResponse {
        count: data.len(),
        data,
        filters_applied: filter,
    }))
}

/// List stored strings selected by a plain-English query.
pub async fn filter_by_natural_language(
    State(state): State<Arc<ServerState>>,
    query: Result<Query<NaturalLanguageQuery>, QueryRejection>,
) -> ServerResult<impl IntoResponse> {
    let Query(query) = query.map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;
    let original = query
        .query
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| ServerError::BadRequest("query parameter is required".to_string()))?;

    let filter = parse_natural_language(&original)?;
    tracing::debug!(query = %original, filters = ?filter, "Parsed natural language query");

    let data = state.store.list(&filter)?;

    Ok(Json(NaturalLanguageResponse {
        count: data.len(),
        data,
        interpreted_query: InterpretedQuery {
            original,
            parsed_filters: filter,
        },
    }))
}

/// Fetch one string by its exact value.
pub async fn get_string(
    State(state): State<Arc<ServerState>>,
    Path(string_value): Path<String>,
) -> ServerResult<impl IntoResponse> {
    Ok(Json(state.store.get(&string_value)?))
}

/// Delete one string by its exact value. Responds 204 with an empty body.
pub async fn delete_string(
    State(state): State<Arc<ServerState>>,
    Path(string_value): Path<String>,
) -> ServerResult<impl IntoResponse> {
    state.store.delete(&string_value)?;
    metrics::counter!("strings_deleted_total").increment(1);
    Ok(StatusCode::NO_CONTENT)
}
