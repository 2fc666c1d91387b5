use std::collections::HashMap;

use sysinfo::Users;

pub const UNKNOWN_USER: &str = "unknown";

/// `uid -> name` table read once from the account database.
#[derive(Debug, Default, Clone)]
pub struct UserTable {
    names: HashMap<u32, String>,
}

impl UserTable {
    pub fn load() -> Self {
        let users = Users::new_with_refreshed_list();
        let table = Self::from_entries(
            users
                .list()
                .iter()
                .map(|user| (**user.id(), user.name().to_string())),
        );
        tracing::info!(users = table.len(), "loaded account database");
        table
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (u32, String)>) -> Self {
        UserTable {
            names: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, uid: u32) -> Option<&str> {
        self.names.get(&uid).map(String::as_str)
    }

    /// Display name for an optional uid, falling back to [`UNKNOWN_USER`].
    pub fn display_name(&self, uid: Option<u32>) -> String {
        uid.and_then(|uid| self.get(uid))
            .unwrap_or(UNKNOWN_USER)
            .to_string()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
