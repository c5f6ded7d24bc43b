use std::collections::HashMap;

use async_trait::async_trait;

use super::{ProfileStore, StoreError, UserRecord};

/// In-process profile store backed by a seeded map.
///
/// The map is immutable after construction, so lookups need no locking.
pub struct MemoryStore {
    users: HashMap<String, UserRecord>,
}

impl MemoryStore {
    pub fn new(users: HashMap<String, UserRecord>) -> Self {
        Self { users }
    }

    /// The demo dataset: two users keyed by short handles.
    pub fn demo() -> Self {
        let mut users = HashMap::new();
        users.insert(
            "one".to_string(),
            UserRecord {
                name: "Alice".to_string(),
                email: "alice@email.com".to_string(),
            },
        );
        users.insert(
            "two".to_string(),
            UserRecord {
                name: "Bob".to_string(),
                email: "bob@email.com".to_string(),
            },
        );
        Self::new(users)
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn find_user(&self, key: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.get(key).cloned())
    }
}
