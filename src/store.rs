//! In-memory user directory standing in for the eventual network-backed
//! API.
//!
//! Every operation is asynchronous and sleeps for a per-operation latency
//! before touching the collection, so callers cross the same suspension
//! points they would against a real backend. Mutations take the write lock
//! for their whole read-modify-write, so two edits cannot interleave.

use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::sleep;

use crate::errors::AppError;
use crate::models::role::Role;
use crate::models::user::{User, UserDraft, UserListResponse};

/// Simulated round-trip latency per store operation.
#[derive(Debug, Clone, Copy)]
pub struct MockLatency {
    pub list: Duration,
    pub create: Duration,
    pub update: Duration,
    pub set_status: Duration,
    pub delete: Duration,
}

impl Default for MockLatency {
    fn default() -> Self {
        MockLatency {
            list: Duration::from_millis(500),
            create: Duration::from_millis(1000),
            update: Duration::from_millis(1000),
            set_status: Duration::from_millis(300),
            delete: Duration::from_millis(300),
        }
    }
}

impl MockLatency {
    /// No artificial delay. Used by tests.
    pub fn none() -> Self {
        MockLatency {
            list: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            set_status: Duration::ZERO,
            delete: Duration::ZERO,
        }
    }
}

/// The mock user directory. Constructed once per process and shared by
/// reference; data lives for the lifetime of the process.
pub struct UserDirectory {
    users: RwLock<Vec<User>>,
    latency: MockLatency,
    actor_role: Role,
}

impl UserDirectory {
    pub fn new(users: Vec<User>, latency: MockLatency, actor_role: Role) -> Self {
        UserDirectory { users: RwLock::new(users), latency, actor_role }
    }

    /// Directory pre-loaded with the mock data set, acting as an Admin.
    pub fn seeded(latency: MockLatency) -> Self {
        Self::new(mock_users(), latency, Role::Admin)
    }

    /// Role of the acting user. Fixed in the mock implementation.
    pub fn current_actor_role(&self) -> Role {
        self.actor_role
    }

    /// All users, or only the active ones, in stored order. Never fails
    /// today, but keeps the fallible signature the networked
    /// implementation will have.
    pub async fn list(&self, active_only: bool) -> Result<UserListResponse, AppError> {
        sleep(self.latency.list).await;
        let users = self.users.read().await;
        let users: Vec<User> = if active_only {
            users.iter().filter(|u| u.status).cloned().collect()
        } else {
            users.clone()
        };
        let total = users.len();
        Ok(UserListResponse { users, total })
    }

    /// Append a new user. Fails with `EmailExists` on a case-insensitive
    /// email collision; otherwise assigns the next id and defaults the
    /// status to active.
    pub async fn create(&self, draft: &UserDraft) -> Result<User, AppError> {
        sleep(self.latency.create).await;
        let draft = draft.trimmed();
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(&draft.email)) {
            return Err(AppError::EmailExists);
        }
        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = User {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            role: draft.role,
            status: draft.status.unwrap_or(true),
        };
        users.push(user.clone());
        log::debug!("created user {} <{}>", user.id, user.email);
        Ok(user)
    }

    /// Overwrite name, email and role of an existing user; id and status
    /// are preserved. Fails if the id is absent or another user already
    /// holds the email.
    pub async fn update(&self, id: i64, draft: &UserDraft) -> Result<User, AppError> {
        sleep(self.latency.update).await;
        let draft = draft.trimmed();
        let mut users = self.users.write().await;
        let index = users.iter().position(|u| u.id == id).ok_or(AppError::NotFound)?;
        if users
            .iter()
            .any(|u| u.id != id && u.email.eq_ignore_ascii_case(&draft.email))
        {
            return Err(AppError::EmailExists);
        }
        let user = &mut users[index];
        user.first_name = draft.first_name;
        user.last_name = draft.last_name;
        user.email = draft.email;
        user.role = draft.role;
        Ok(user.clone())
    }

    /// Flip the active flag in place.
    pub async fn set_status(&self, id: i64, active: bool) -> Result<(), AppError> {
        sleep(self.latency.set_status).await;
        let mut users = self.users.write().await;
        let user = users.iter_mut().find(|u| u.id == id).ok_or(AppError::NotFound)?;
        user.status = active;
        Ok(())
    }

    /// Remove the record.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        sleep(self.latency.delete).await;
        let mut users = self.users.write().await;
        let index = users.iter().position(|u| u.id == id).ok_or(AppError::NotFound)?;
        users.remove(index);
        log::debug!("deleted user {id}");
        Ok(())
    }

    /// Case-insensitive email collision probe for the form's live check.
    /// `exclude_id` exempts the user being edited from matching itself.
    pub async fn email_taken(&self, email: &str, exclude_id: Option<i64>) -> bool {
        sleep(self.latency.list).await;
        let email = email.trim();
        let users = self.users.read().await;
        users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(email) && Some(u.id) != exclude_id)
    }
}

fn seed(id: i64, first: &str, last: &str, email: &str, role: Role, status: bool) -> User {
    User {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        role,
        status,
    }
}

/// The fixed mock data set.
fn mock_users() -> Vec<User> {
    vec![
        seed(1, "Alice", "Johnson", "alice.johnson@example.com", Role::Admin, true),
        seed(2, "Bob", "Smith", "bob.smith@example.com", Role::User, true),
        seed(3, "Charlie", "Brown", "charlie.brown@example.com", Role::Manager, false),
        seed(4, "Diana", "Wilson", "diana.wilson@example.com", Role::User, true),
        seed(5, "Edward", "Davis", "edward.davis@example.com", Role::Admin, false),
        seed(6, "Fiona", "Miller", "fiona.miller@example.com", Role::User, true),
        seed(7, "George", "Garcia", "george.garcia@example.com", Role::Manager, true),
        seed(8, "Helen", "Martinez", "helen.martinez@example.com", Role::User, false),
        seed(9, "Ivan", "Rodriguez", "ivan.rodriguez@example.com", Role::Admin, true),
        seed(10, "Julia", "Lopez", "julia.lopez@example.com", Role::User, true),
        seed(11, "Kevin", "Gonzalez", "kevin.gonzalez@example.com", Role::Manager, false),
        seed(12, "Laura", "Hernandez", "laura.hernandez@example.com", Role::User, true),
    ]
}
