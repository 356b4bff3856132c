use async_graphql::InputObject;
use serde::{Deserialize, Serialize};

/// Request body for user creation; all fields required.
#[derive(Debug, Clone, Deserialize, InputObject)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// Partial update; only supplied fields are written.
#[derive(Debug, Clone, Default, Deserialize, InputObject)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserInput {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body returned on a successful update.
#[derive(Debug, Serialize)]
pub struct UpdatedResponse {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_input_uses_camel_case() {
        let input: CreateUserInput = serde_json::from_str(
            r#"{"userName":"test","email":"test@test.com","password":"123456"}"#,
        )
        .expect("deserialize");
        assert_eq!(input.user_name, "test");
        assert_eq!(input.email, "test@test.com");
        assert_eq!(input.password, "123456");
    }

    #[test]
    fn create_input_requires_all_fields() {
        let result =
            serde_json::from_str::<CreateUserInput>(r#"{"userName":"test","email":"a@b.c"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_input_fields_are_optional() {
        let input: UpdateUserInput =
            serde_json::from_str(r#"{"email":"test2@test.com"}"#).expect("deserialize");
        assert_eq!(input.email.as_deref(), Some("test2@test.com"));
        assert!(input.user_name.is_none());
        assert!(input.password.is_none());
    }

    #[test]
    fn updated_response_body() {
        let body = serde_json::to_string(&UpdatedResponse {
            message: "user was updated",
        })
        .expect("serialize");
        assert_eq!(body, r#"{"message":"user was updated"}"#);
    }
}
