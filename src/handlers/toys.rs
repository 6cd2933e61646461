use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    Extension,
};
use serde_json::{json, Value};

use crate::api::pet_to_api_value;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::{guards::parse_id, ResourceKind};
use crate::state::AppState;

// Bodies are taken raw; the toy service parses them after its guards pass.

/// POST /toys/:pet_id - add a toy to a pet, responds 201 with the whole pet
pub async fn create(
    State(state): State<AppState>,
    Path(pet_id): Path<String>,
    auth_user: Option<Extension<AuthUser>>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Value> {
    let pet_id = parse_id(&pet_id, ResourceKind::Pet)?;
    let body = body?;

    let requester = auth_user.map(|Extension(user)| user.user_id);
    let pet = state.toys.create_toy(requester, pet_id, &body).await?;

    Ok(ApiResponse::created(json!({ "pet": pet_to_api_value(&pet) })))
}

/// PATCH /toys/:pet_id/:toy_id - merge fields into a toy, owner only, responds 204
pub async fn update(
    State(state): State<AppState>,
    Path((pet_id, toy_id)): Path<(String, String)>,
    Extension(auth_user): Extension<AuthUser>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<()> {
    let pet_id = parse_id(&pet_id, ResourceKind::Pet)?;
    let toy_id = parse_id(&toy_id, ResourceKind::Toy)?;
    let body = body?;

    state
        .toys
        .update_toy(auth_user.user_id, pet_id, toy_id, &body)
        .await?;

    Ok(ApiResponse::no_content())
}

/// DELETE /toys/:pet_id/:toy_id - remove a toy, owner only, responds 204
pub async fn destroy(
    State(state): State<AppState>,
    Path((pet_id, toy_id)): Path<(String, String)>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<()> {
    let pet_id = parse_id(&pet_id, ResourceKind::Pet)?;
    let toy_id = parse_id(&toy_id, ResourceKind::Toy)?;

    state
        .toys
        .delete_toy(auth_user.user_id, pet_id, toy_id)
        .await?;

    Ok(ApiResponse::no_content())
}
