use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User record in the database.
///
/// `user_name` lives in the legacy `first_name` column and is exposed to
/// clients as `userName`. The `password` field holds the Argon2 hash once
/// the row is persisted and is serialized as-is.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, SimpleObject)]
pub struct User {
    pub id: Uuid,
    #[serde(rename = "userName")]
    #[sqlx(rename = "first_name")]
    pub user_name: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_client_field_names() {
        let user = User {
            id: Uuid::new_v4(),
            user_name: "test".into(),
            email: "test@test.com".into(),
            password: "$argon2id$stub".into(),
        };
        let json = serde_json::to_value(&user).expect("serialize");
        assert_eq!(json["userName"], "test");
        assert_eq!(json["email"], "test@test.com");
        // No redaction: the stored hash is part of the payload.
        assert_eq!(json["password"], "$argon2id$stub");
    }
}
