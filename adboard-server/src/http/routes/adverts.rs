//! Advertisement endpoints
//!
//! One pooled connection per request: acquired before validation, used
//! for every store call, and returned to the pool when the handler
//! exits on any path (the connection guard drops on success, validation
//! failure, not-found, and storage failure alike).

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::db::repos::{Advert, AdvertRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{AdvertDraft, AdvertPatch};

/// Full advertisement response
#[derive(Serialize)]
pub struct AdvertResponse {
    pub id: i64,
    pub header: String,
    pub description: String,
    pub created_at: String,
    pub owner: String,
}

impl From<Advert> for AdvertResponse {
    fn from(a: Advert) -> Self {
        Self {
            id: a.id,
            header: a.header,
            description: a.description,
            created_at: a.created_at.to_rfc3339(),
            owner: a.owner,
        }
    }
}

/// Creation response: just the assigned id
#[derive(Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// Deletion confirmation
#[derive(Serialize)]
pub struct DeletedResponse {
    pub status: &'static str,
}

/// POST /adv/ - create an advertisement
async fn create_advert(
    State(state): State<Arc<AppState>>,
    Json(body): Json<JsonValue>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let mut conn = state.pool.acquire().await?;

    let draft = AdvertDraft::from_json(&body)?;
    let advert = AdvertRepo::new(&mut conn).create(draft).await?;

    Ok(Json(CreatedResponse { id: advert.id }))
}

/// GET /adv/{id}/ - fetch a single advertisement
async fn get_advert(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<AdvertResponse>, ApiError> {
    let mut conn = state.pool.acquire().await?;

    let advert = AdvertRepo::new(&mut conn).load(id).await?;

    Ok(Json(AdvertResponse::from(advert)))
}

/// PATCH /adv/{id}/ - partially update an advertisement
async fn patch_advert(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<JsonValue>,
) -> Result<Json<AdvertResponse>, ApiError> {
    let mut conn = state.pool.acquire().await?;

    let patch = AdvertPatch::from_json(&body)?;
    let advert = AdvertRepo::new(&mut conn).update(id, patch).await?;

    Ok(Json(AdvertResponse::from(advert)))
}

/// DELETE /adv/{id}/ - delete an advertisement
async fn delete_advert(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let mut conn = state.pool.acquire().await?;

    AdvertRepo::new(&mut conn).delete(id).await?;

    Ok(Json(DeletedResponse { status: "deleted" }))
}

/// Advertisement routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/adv/", post(create_advert))
        .route(
            "/adv/{id}/",
            get(get_advert).patch(patch_advert).delete(delete_advert),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_advert() -> Advert {
        Advert {
            id: 1,
            header: "h1".to_owned(),
            description: "d1".to_owned(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
            owner: "o1".to_owned(),
        }
    }

    #[test]
    fn advert_response_serializes_created_at_as_iso8601() {
        let response = AdvertResponse::from(sample_advert());
        assert_eq!(response.created_at, "2024-05-01T12:30:00+00:00");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["header"], "h1");
        assert_eq!(json["description"], "d1");
        assert_eq!(json["owner"], "o1");
        assert_eq!(json["created_at"], "2024-05-01T12:30:00+00:00");
    }

    #[test]
    fn created_response_shape() {
        let json = serde_json::to_value(CreatedResponse { id: 7 }).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7}));
    }

    #[test]
    fn deleted_response_shape() {
        let json = serde_json::to_value(DeletedResponse { status: "deleted" }).unwrap();
        assert_eq!(json, serde_json::json!({"status": "deleted"}));
    }
}
