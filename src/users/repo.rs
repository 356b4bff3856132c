use sqlx::{PgExecutor, PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::errors::StoreError;
use crate::users::dto::{CreateUserInput, UpdateUserInput};
use crate::users::password::hash_password;
use crate::users::repo_types::User;

/// Open transaction on a pooled connection. Commit and rollback consume the
/// handle; dropping it uncommitted rolls back and returns the connection to
/// the pool, so release happens exactly once on every path.
pub type UserTx = Transaction<'static, Postgres>;

/// All SQL against the `users` table. Every operation runs on the executor
/// the caller hands in: `store.db()` for an implicit connection, or
/// `&mut *tx` to join an open transaction.
#[derive(Clone)]
pub struct UserStore {
    pool: PgPool,
}

impl UserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn db(&self) -> &PgPool {
        &self.pool
    }

    pub async fn begin(&self) -> Result<UserTx, StoreError> {
        Ok(self.pool.begin().await?)
    }

    pub async fn commit(&self, tx: UserTx) -> Result<(), StoreError> {
        Ok(tx.commit().await?)
    }

    pub async fn rollback(&self, tx: UserTx) -> Result<(), StoreError> {
        Ok(tx.rollback().await?)
    }

    /// Insert a new row, hashing the password first. Returns the generated id.
    pub async fn create(
        &self,
        exec: impl PgExecutor<'_>,
        data: &CreateUserInput,
    ) -> Result<Uuid, StoreError> {
        let hashed = hash_password(&data.password)?;
        let (id,): (Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO users (first_name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&data.user_name)
        .bind(&data.email)
        .bind(&hashed)
        .fetch_one(exec)
        .await?;
        Ok(id)
    }

    pub async fn get_all(&self, exec: impl PgExecutor<'_>) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, email, password
            FROM users
            "#,
        )
        .fetch_all(exec)
        .await?;
        Ok(users)
    }

    /// `None` when no row matches; only I/O failures are errors.
    pub async fn get_by_id(
        &self,
        exec: impl PgExecutor<'_>,
        id: Uuid,
    ) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, email, password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(exec)
        .await?;
        Ok(user)
    }

    /// Write only the supplied fields; a supplied password is hashed before
    /// it reaches the table. Returns the affected row count (0 for a
    /// nonexistent id).
    pub async fn update(
        &self,
        exec: impl PgExecutor<'_>,
        id: Uuid,
        data: &UpdateUserInput,
    ) -> Result<u64, StoreError> {
        let hashed = match &data.password {
            Some(plain) => Some(hash_password(plain)?),
            None => None,
        };
        let result = sqlx::query(
            r#"
            UPDATE users
            SET first_name = COALESCE($2, first_name),
                email      = COALESCE($3, email),
                password   = COALESCE($4, password)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&data.user_name)
        .bind(&data.email)
        .bind(&hashed)
        .execute(exec)
        .await?;
        Ok(result.rows_affected())
    }

    /// No-op when the id does not exist.
    pub async fn delete(&self, exec: impl PgExecutor<'_>, id: Uuid) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(exec)
            .await?;
        Ok(())
    }
}
