//! In-memory `UserStore` adapter (Variant A).
//!
//! Records live in an ordered collection owned by the store object; there is
//! no module-level state. Identifiers come from a creation counter, so an id
//! is never reused after deletion even though deletion leaves a gap in the
//! collection.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{NewUser, User, UserId, UserPatch};

#[derive(Debug, Default)]
struct StoreState {
    users: Vec<User>,
    created: i64,
}

/// In-memory user store serialising access through a mutex.
///
/// The lock is held only across synchronous sections, never across an
/// `.await` point.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    state: Mutex<StoreState>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, StoreState>, UserStoreError> {
        self.state
            .lock()
            .map_err(|_| UserStoreError::query("user store mutex poisoned"))
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, UserStoreError> {
        Ok(self.lock()?.users.clone())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, UserStoreError> {
        let mut state = self.lock()?;
        state.created += 1;
        let user = User::new(UserId::new(state.created), new_user.name, new_user.email);
        state.users.push(user.clone());
        Ok(user)
    }

    async fn get(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
        let state = self.lock()?;
        Ok(state.users.iter().find(|user| user.id() == id).cloned())
    }

    async fn update(&self, id: UserId, patch: UserPatch) -> Result<User, UserStoreError> {
        let mut state = self.lock()?;
        let user = state
            .users
            .iter_mut()
            .find(|user| user.id() == id)
            .ok_or_else(|| UserStoreError::not_found(id))?;
        user.apply(patch);
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> Result<(), UserStoreError> {
        let mut state = self.lock()?;
        state.users.retain(|user| user.id() != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: i64) -> UserId {
        UserId::new(value)
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids_and_records_are_retrievable() {
        let store = InMemoryUserStore::new();

        let ann = store
            .create(NewUser::new("Ann", "a@x.com"))
            .await
            .expect("create Ann");
        let bo = store
            .create(NewUser::new("Bo", "b@x.com"))
            .await
            .expect("create Bo");

        assert_eq!(ann.id(), id(1));
        assert_eq!(bo.id(), id(2));
        assert_eq!(store.get(id(1)).await.expect("get"), Some(ann));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_deletion() {
        let store = InMemoryUserStore::new();
        store
            .create(NewUser::new("Ann", "a@x.com"))
            .await
            .expect("create Ann");
        store.delete(id(1)).await.expect("delete Ann");

        let bo = store
            .create(NewUser::new("Bo", "b@x.com"))
            .await
            .expect("create Bo");

        assert_eq!(bo.id(), id(2));
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = InMemoryUserStore::new();
        for (name, email) in [("Ann", "a@x.com"), ("Bo", "b@x.com"), ("Cy", "c@x.com")] {
            store
                .create(NewUser::new(name, email))
                .await
                .expect("create user");
        }
        store.delete(id(2)).await.expect("delete Bo");

        let names: Vec<String> = store
            .list()
            .await
            .expect("list users")
            .into_iter()
            .map(|user| user.name().to_owned())
            .collect();

        assert_eq!(names, vec!["Ann", "Cy"]);
    }

    #[tokio::test]
    async fn get_reports_absence_as_none() {
        let store = InMemoryUserStore::new();
        assert_eq!(store.get(id(7)).await.expect("get"), None);
    }

    #[tokio::test]
    async fn update_merges_fields_and_rejects_missing_ids() {
        let store = InMemoryUserStore::new();
        store
            .create(NewUser::new("Bo", "b@x.com"))
            .await
            .expect("create Bo");

        let updated = store
            .update(id(1), UserPatch::rename("Robert"))
            .await
            .expect("update Bo");
        assert_eq!(updated.name(), "Robert");
        assert_eq!(updated.email(), "b@x.com");

        let err = store
            .update(id(9), UserPatch::rename("Nobody"))
            .await
            .expect_err("missing id must fail");
        assert_eq!(err, UserStoreError::not_found(9_i64));
    }

    #[tokio::test]
    async fn delete_is_a_no_op_for_missing_ids() {
        let store = InMemoryUserStore::new();
        store.delete(id(41)).await.expect("delete succeeds");
    }
}
