use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::state::AppState;
use crate::users::dto::{CreateUserInput, UpdateUserInput, UpdatedResponse};
use crate::users::repo_types::User;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(get_all_users).post(create_user))
        .route(
            "/user/:id",
            get(get_user_by_id).put(update_user).delete(delete_user),
        )
}

#[instrument(skip(state, data))]
async fn create_user(
    State(state): State<AppState>,
    Json(data): Json<CreateUserInput>,
) -> Result<(StatusCode, Json<User>), ServiceError> {
    let user = state.users.create(data).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip(state))]
async fn get_all_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ServiceError> {
    let users = state.users.get_all().await?;
    Ok(Json(users))
}

#[instrument(skip(state))]
async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, ServiceError> {
    let user = state.users.get_by_id(id).await?;
    Ok(Json(user))
}

#[instrument(skip(state, data))]
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateUserInput>,
) -> Result<Json<UpdatedResponse>, ServiceError> {
    state.users.update(id, data).await?;
    Ok(Json(UpdatedResponse {
        message: "user was updated",
    }))
}

#[instrument(skip(state))]
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServiceError> {
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
