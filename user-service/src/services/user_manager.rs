// User Manager
// Owns the in-memory user list and exposes add/find/list/update/remove

use crate::config::UserManagerConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::models::User;

use std::cell::RefCell;
use std::rc::Rc;

/// Handle to a manager-owned record. Field changes made through it are
/// visible to the manager.
pub type SharedUser = Rc<RefCell<User>>;

/// In-memory collection of users kept in insertion order.
///
/// Ids are `len + 1` at insert time and are never renumbered, so a remove
/// followed by an add can hand out an id that is already in use.
pub struct UserManager {
    users: Vec<SharedUser>,
    config: UserManagerConfig,
}

impl UserManager {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            config: UserManagerConfig::default(),
        }
    }

    /// Build a manager from a validated config, reserving `initial_capacity` up front.
    pub fn with_config(config: UserManagerConfig) -> ServiceResult<Self> {
        config.validate()?;

        let mut users = Vec::new();
        users.try_reserve(config.initial_capacity).map_err(|e| {
            ServiceError::InvalidConfig(format!(
                "cannot reserve initialCapacity ({}): {}",
                config.initial_capacity, e
            ))
        })?;

        Ok(Self { users, config })
    }

    pub fn config(&self) -> &UserManagerConfig {
        &self.config
    }

    /// Create a user, append it and return a handle to the stored record.
    ///
    /// Duplicate emails are accepted.
    pub fn add_user(&mut self, name: impl Into<String>, email: impl Into<String>) -> SharedUser {
        if let Some(max) = self.config.max_users {
            if self.users.len() >= max {
                tracing::warn!(max_users = max, count = self.users.len(), "user limit exceeded");
            }
        }

        let mut user = User::new(name, email);
        user.id = self.users.len() as u64 + 1;
        tracing::debug!(id = user.id, email = %user.email, "added user");

        let user = Rc::new(RefCell::new(user));
        self.users.push(Rc::clone(&user));
        user
    }

    /// First user whose email matches exactly (case-sensitive), in insertion order.
    ///
    /// Records the caller currently holds mutably borrowed are skipped.
    pub fn find_user_by_email(&self, email: &str) -> Option<SharedUser> {
        tracing::trace!(email, "looking up user");
        self.position(email).map(|idx| Rc::clone(&self.users[idx]))
    }

    /// Snapshot of the user list.
    ///
    /// The returned `Vec` is independent of the manager, but its elements
    /// share the underlying records.
    pub fn get_all_users(&self) -> Vec<SharedUser> {
        self.users.clone()
    }

    /// Update name and/or email of the first user matching `email`.
    /// Empty arguments leave the corresponding field unchanged.
    ///
    /// Returns false when no user matches or the match is borrowed elsewhere.
    pub fn update_user(&self, email: &str, new_name: &str, new_email: &str) -> bool {
        let found = match self.position(email) {
            Some(idx) => match self.users[idx].try_borrow_mut() {
                Ok(mut user) => {
                    user.update_info(new_name, new_email);
                    true
                }
                Err(_) => false,
            },
            None => false,
        };
        tracing::debug!(email, found, "update user");
        found
    }

    /// Remove the first user matching `email`. Remaining ids are not renumbered.
    pub fn remove_user(&mut self, email: &str) -> bool {
        let found = match self.position(email) {
            Some(idx) => {
                self.users.remove(idx);
                true
            }
            None => false,
        };
        tracing::debug!(email, found, "remove user");
        found
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Serialize all users, in insertion order, as a JSON array.
    pub fn to_json(&self) -> ServiceResult<String> {
        let users = self
            .users
            .iter()
            .enumerate()
            .map(|(idx, u)| {
                u.try_borrow()
                    .map(|user| user.clone())
                    .map_err(|_| ServiceError::RecordBorrowed(idx))
            })
            .collect::<ServiceResult<Vec<User>>>()?;
        Ok(serde_json::to_string(&users)?)
    }

    fn position(&self, email: &str) -> Option<usize> {
        self.users
            .iter()
            .position(|u| u.try_borrow().is_ok_and(|user| user.email == email))
    }
}

impl Default for UserManager {
    fn default() -> Self {
        Self::new()
    }
}
