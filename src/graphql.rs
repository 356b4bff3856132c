use async_graphql::{Context, EmptySubscription, Object, Schema};
use axum::{extract::State, Json};
use uuid::Uuid;

use crate::state::AppState;
use crate::users::dto::{CreateUserInput, UpdateUserInput};
use crate::users::repo_types::User;
use crate::users::services::UserService;

pub type UserSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(users: UserService) -> UserSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(users)
        .finish()
}

pub async fn graphql_handler(
    State(state): State<AppState>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(state.schema.execute(request).await)
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn get_all_user(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        let users = ctx.data_unchecked::<UserService>();
        Ok(users.get_all().await?)
    }

    async fn get_by_id_user(&self, ctx: &Context<'_>, id: Uuid) -> async_graphql::Result<User> {
        let users = ctx.data_unchecked::<UserService>();
        Ok(users.get_by_id(id).await?)
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        data: CreateUserInput,
    ) -> async_graphql::Result<User> {
        let users = ctx.data_unchecked::<UserService>();
        Ok(users.create(data).await?)
    }

    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        data: UpdateUserInput,
    ) -> async_graphql::Result<String> {
        let users = ctx.data_unchecked::<UserService>();
        users.update(id, data).await?;
        Ok("user was updated".to_string())
    }

    async fn delete_user(&self, ctx: &Context<'_>, id: Uuid) -> async_graphql::Result<String> {
        let users = ctx.data_unchecked::<UserService>();
        users.delete(id).await?;
        Ok("user was deleted".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    #[tokio::test]
    async fn schema_exposes_user_operations() {
        let state = AppState::fake();
        let sdl = state.schema.sdl();
        assert!(sdl.contains("getAllUser"));
        assert!(sdl.contains("getByIdUser"));
        assert!(sdl.contains("createUser"));
        assert!(sdl.contains("updateUser"));
        assert!(sdl.contains("deleteUser"));
        assert!(sdl.contains("userName"));
    }
}
