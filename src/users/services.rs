use tracing::{debug, error};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::users::dto::{CreateUserInput, UpdateUserInput};
use crate::users::repo::UserStore;
use crate::users::repo_types::User;

/// Orchestration over [`UserStore`]: transactional create plus not-found
/// semantics for point lookups and updates.
#[derive(Clone)]
pub struct UserService {
    store: UserStore,
}

impl UserService {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }

    /// Insert and immediately re-read the row inside one transaction.
    /// Commit only when both steps succeed; roll back otherwise. The handle
    /// never leaves this method, and its connection is released on every
    /// path (commit and rollback consume it, drop covers the rest).
    pub async fn create(&self, data: CreateUserInput) -> Result<User, ServiceError> {
        let mut tx = self.store.begin().await?;

        let read_back = match self.store.create(&mut *tx, &data).await {
            Ok(id) => self.store.get_by_id(&mut *tx, id).await,
            Err(e) => Err(e),
        };

        match read_back {
            Ok(Some(user)) => {
                self.store.commit(tx).await?;
                debug!(id = %user.id, "user created");
                Ok(user)
            }
            Ok(None) => {
                // Treat an inserted row that its own transaction cannot
                // re-read as a failed write.
                error!("inserted row not visible inside its own transaction, rolling back");
                if let Err(e) = self.store.rollback(tx).await {
                    error!(error = %e, "rollback failed");
                }
                Err(ServiceError::Internal)
            }
            Err(e) => {
                error!(error = %e, "create failed, rolling back");
                if let Err(e) = self.store.rollback(tx).await {
                    error!(error = %e, "rollback failed");
                }
                Err(ServiceError::Internal)
            }
        }
    }

    pub async fn get_all(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self.store.get_all(self.store.db()).await?)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<User, ServiceError> {
        self.store
            .get_by_id(self.store.db(), id)
            .await?
            .ok_or(ServiceError::NoContent)
    }

    pub async fn update(&self, id: Uuid, data: UpdateUserInput) -> Result<(), ServiceError> {
        let affected = self.store.update(self.store.db(), id, &data).await?;
        if affected == 0 {
            return Err(ServiceError::NoContent);
        }
        Ok(())
    }

    /// The existence probe's result is discarded on purpose: deleting a row
    /// that is already gone succeeds silently. Only probe I/O failures
    /// propagate.
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let _ = self.store.get_by_id(self.store.db(), id).await?;
        self.store.delete(self.store.db(), id).await?;
        Ok(())
    }
}
