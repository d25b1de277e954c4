//! User service - registry operations gated by the caller's subject.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use common::{AppError, AppResult, OptionExt};
use domain::{is_admin_subject, User, UserCreate, UserQuery};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
///
/// `subject` is the verified token subject of the caller. Every operation
/// except [`UserService::get_user`] requires the admin subject.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List users, filtered, sorted and paginated by `query`
    async fn list_users(&self, subject: &str, query: &UserQuery) -> AppResult<Vec<User>>;

    /// Get one user; any verified subject may read
    async fn get_user(&self, subject: &str, id: i64) -> AppResult<User>;

    /// Create a user under the next free ID
    async fn create_user(&self, subject: &str, data: UserCreate) -> AppResult<User>;

    /// Replace a user's name and email
    async fn update_user(&self, subject: &str, id: i64, data: UserCreate) -> AppResult<User>;

    /// Remove a user
    async fn delete_user(&self, subject: &str, id: i64) -> AppResult<()>;

    /// Number of stored users (for health reporting)
    async fn user_count(&self) -> AppResult<usize>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

/// Fail with `Forbidden` unless `subject` is the admin principal.
fn require_admin(subject: &str) -> AppResult<()> {
    if is_admin_subject(subject) {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self, subject: &str, query: &UserQuery) -> AppResult<Vec<User>> {
        require_admin(subject)?;
        let users = self.repo.list().await?;
        Ok(query.apply(users))
    }

    async fn get_user(&self, _subject: &str, id: i64) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found("User")
    }

    async fn create_user(&self, subject: &str, data: UserCreate) -> AppResult<User> {
        require_admin(subject)?;
        let user = self.repo.create(data).await?;
        info!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn update_user(&self, subject: &str, id: i64, data: UserCreate) -> AppResult<User> {
        require_admin(subject)?;
        let user = self.repo.update(id, data).await?;
        info!(user_id = id, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, subject: &str, id: i64) -> AppResult<()> {
        require_admin(subject)?;
        self.repo.delete(id).await?;
        info!(user_id = id, "User deleted");
        Ok(())
    }

    async fn user_count(&self) -> AppResult<usize> {
        self.repo.count().await
    }
}
