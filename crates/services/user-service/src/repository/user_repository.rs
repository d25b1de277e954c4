//! User repository with an in-memory implementation.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::{AppError, AppResult, OptionExt};
use domain::{User, UserCreate, SEED_USERS};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const USER: &str = "User";

/// User repository trait for dependency injection.
///
/// `list` returns records in insertion order.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Insert a new user under the next free ID
    async fn create(&self, data: UserCreate) -> AppResult<User>;

    /// Replace name and email of an existing user
    async fn update(&self, id: i64, data: UserCreate) -> AppResult<User>;

    /// Remove a user
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// List all users in insertion order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Number of stored users
    async fn count(&self) -> AppResult<usize>;
}

/// Map plus the highest ID ever handed out, guarded together.
#[derive(Debug, Default)]
struct Registry {
    users: BTreeMap<i64, User>,
    last_id: i64,
}

impl Registry {
    fn next_id(&self) -> i64 {
        let max_existing = self.users.keys().next_back().copied().unwrap_or(0);
        max_existing.max(self.last_id) + 1
    }
}

/// Process-local registry.
///
/// IDs only ever grow, so key order is insertion order and a `BTreeMap`
/// iterates in the order records were created.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Registry>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the seed records
    pub fn seeded() -> Self {
        Self::with_users(SEED_USERS.iter().map(|&(id, name, email)| User {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }))
    }

    /// Create a store holding `users`; a later duplicate ID replaces an earlier one
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users: BTreeMap<i64, User> = users.into_iter().map(|u| (u.id, u)).collect();
        // Preloaded IDs count as assigned
        let last_id = users.keys().next_back().copied().unwrap_or(0);
        Self {
            inner: RwLock::new(Registry { users, last_id }),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let registry = self.inner.read().await;
        Ok(registry.users.get(&id).cloned())
    }

    async fn create(&self, data: UserCreate) -> AppResult<User> {
        let mut registry = self.inner.write().await;
        let id = registry.next_id();
        let user = User::new(id, data);

        registry.users.insert(id, user.clone());
        registry.last_id = id;
        Ok(user)
    }

    async fn update(&self, id: i64, data: UserCreate) -> AppResult<User> {
        let mut registry = self.inner.write().await;
        let user = registry.users.get_mut(&id).ok_or_not_found(USER)?;
        user.replace(data);
        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut registry = self.inner.write().await;
        registry
            .users
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(USER))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let registry = self.inner.read().await;
        Ok(registry.users.values().cloned().collect())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.inner.read().await.users.len())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn data(name: &str) -> UserCreate {
        UserCreate::new(name, format!("{}@x.com", name.to_lowercase()))
    }

    #[tokio::test]
    async fn test_seeded_store() {
        let store = MemoryStore::seeded();
        let users = store.list().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].name, "Rethabile");
        assert_eq!(users[0].email, "retha@gmail.com");
        assert_eq!(users[1].id, 2);
        assert_eq!(users[1].name, "mosa");
    }

    #[tokio::test]
    async fn test_create_after_seeds_gets_id_3() {
        let store = MemoryStore::seeded();
        let user = store.create(data("Lee")).await.unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(store.find_by_id(3).await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_ids_start_at_one_and_increase() {
        let store = MemoryStore::new();
        for expected in 1..=5 {
            assert_eq!(store.create(data("u")).await.unwrap().id, expected);
        }
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = MemoryStore::new();
        assert_eq!(store.create(data("a")).await.unwrap().id, 1);
        store.delete(1).await.unwrap();
        assert_eq!(store.create(data("b")).await.unwrap().id, 2);

        store.delete(2).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
        assert_eq!(store.create(data("c")).await.unwrap().id, 3);
    }

    #[tokio::test]
    async fn test_deleted_seed_id_not_reused() {
        let store = MemoryStore::seeded();
        store.delete(2).await.unwrap();

        let user = store.create(data("Lee")).await.unwrap();
        assert_eq!(user.id, 3);
    }

    #[tokio::test]
    async fn test_next_id_follows_max_existing() {
        let store = MemoryStore::with_users(vec![User::new(10, data("x"))]);
        assert_eq!(store.create(data("y")).await.unwrap().id, 11);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_position() {
        let store = MemoryStore::seeded();
        let updated = store
            .update(1, UserCreate::new("Retha", "new@gmail.com"))
            .await
            .unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "Retha");

        let users = store.list().await.unwrap();
        assert_eq!(users[0], updated);
        assert_eq!(users[1].id, 2);
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let store = MemoryStore::seeded();
        let err = store.update(99, data("x")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryStore::seeded();
        store.delete(2).await.unwrap();

        assert_eq!(store.find_by_id(2).await.unwrap(), None);
        let err = store.delete(2).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_duplicate_names_and_emails_allowed() {
        let store = MemoryStore::new();
        let a = store.create(data("Same")).await.unwrap();
        let b = store.create(data("Same")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.email, b.email);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_get_unique_ids() {
        let store = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create(data(&format!("u{}", i))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=50).collect::<Vec<i64>>());
        assert_eq!(store.count().await.unwrap(), 50);
    }
}
