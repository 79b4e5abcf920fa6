use serde::{Deserialize, Serialize};

use super::role::Role;

/// A directory member as stored and as sent over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    /// Active flag. Deactivated users stay in the directory but drop out
    /// of the active-only listing.
    pub status: bool,
}

/// Unsaved, form-local user data pending validation and submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    /// Only honored on create; defaults to active when absent.
    #[serde(default)]
    pub status: Option<bool>,
}

impl UserDraft {
    /// Normalized copy with surrounding whitespace stripped from the text
    /// fields.
    pub fn trimmed(&self) -> UserDraft {
        UserDraft {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role,
            status: self.status,
        }
    }
}

/// Store answer for a list call: the matching users plus their count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
    pub total: usize,
}

/// One page of a sorted listing, with pagination metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPage {
    pub users: Vec<User>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
}

/// Columns the user table can sort on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    FirstName,
    LastName,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

/// View-local sort order. Defaults to first name ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub dir: SortDir,
}

impl SortSpec {
    /// Build from query parameters; unknown values fall back to the
    /// default column and direction.
    pub fn from_params(field: Option<&str>, dir: Option<&str>) -> Self {
        let field = match field {
            Some("lastName") => SortField::LastName,
            Some("email") => SortField::Email,
            _ => SortField::FirstName,
        };
        let dir = if dir == Some("desc") { SortDir::Desc } else { SortDir::Asc };
        SortSpec { field, dir }
    }
}

/// Sort users in place; comparisons are case-insensitive.
pub fn sort_users(users: &mut [User], spec: SortSpec) {
    users.sort_by(|a, b| {
        let key = |u: &User| match spec.field {
            SortField::FirstName => u.first_name.to_lowercase(),
            SortField::LastName => u.last_name.to_lowercase(),
            SortField::Email => u.email.to_lowercase(),
        };
        let ord = key(a).cmp(&key(b));
        match spec.dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });
}

/// Slice one page out of an already sorted list.
pub fn paginate(users: Vec<User>, page: usize, per_page: usize) -> UserPage {
    let page = page.max(1);
    let per_page = per_page.clamp(1, 100);
    let total = users.len();
    let total_pages = total.div_ceil(per_page);
    let users: Vec<User> = users
        .into_iter()
        .skip((page - 1).saturating_mul(per_page))
        .take(per_page)
        .collect();
    UserPage { users, total, page, per_page, total_pages }
}
