use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    Extension,
};
use serde_json::{json, Value};

use crate::api::{parse_resource, pet_to_api_value};
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::{guards::parse_id, ResourceKind, ServiceError};
use crate::state::AppState;

/// POST /pets - create a pet owned by the requester
pub async fn create(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Value> {
    let pet = parse_resource(&body?, "pet").map_err(ServiceError::from)?;

    let pet = state.pets.create_pet(auth_user.user_id, &pet).await?;
    Ok(ApiResponse::created(json!({ "pet": pet_to_api_value(&pet) })))
}

/// GET /pets/:pet_id
pub async fn show(State(state): State<AppState>, Path(pet_id): Path<String>) -> ApiResult<Value> {
    let pet_id = parse_id(&pet_id, ResourceKind::Pet)?;
    let pet = state.pets.show_pet(pet_id).await?;
    Ok(ApiResponse::success(json!({ "pet": pet_to_api_value(&pet) })))
}
