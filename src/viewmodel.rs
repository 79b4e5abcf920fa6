//! Headless view-model for the user administration screen.
//!
//! Owns the fetch state, the active-only filter, and the view-local sort
//! and page position. Status toggles and deletes pass through a yes/no
//! confirmation gate; declining leaves everything untouched. After any
//! successful mutation the full list is reloaded from the store, so the
//! displayed rows are always store-consistent.

use std::sync::Arc;

use crate::forms::user_form::{FormMode, FormOutcome, UserForm};
use crate::models::role::Role;
use crate::models::user::{SortSpec, User, UserPage, paginate, sort_users};
use crate::store::UserDirectory;

/// Fetch state of the user list.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded(Vec<User>),
    LoadError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient, dismissible notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

pub struct UserAdmin {
    store: Arc<UserDirectory>,
    state: LoadState,
    show_active_only: bool,
    sort: SortSpec,
    page: usize,
    per_page: usize,
    notices: Vec<Notice>,
    actor_role: Role,
}

impl UserAdmin {
    pub fn new(store: Arc<UserDirectory>) -> Self {
        let actor_role = store.current_actor_role();
        UserAdmin {
            store,
            state: LoadState::Idle,
            show_active_only: true,
            sort: SortSpec::default(),
            page: 1,
            per_page: 10,
            notices: vec![],
            actor_role,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn actor_role(&self) -> Role {
        self.actor_role
    }

    pub fn show_active_only(&self) -> bool {
        self.show_active_only
    }

    /// Drain pending notifications for display.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Fetch the list from the store, re-entering `Loading` first.
    pub async fn load(&mut self) {
        self.state = LoadState::Loading;
        match self.store.list(self.show_active_only).await {
            Ok(response) => self.state = LoadState::Loaded(response.users),
            Err(e) => {
                log::warn!("user list load failed: {e}");
                self.state = LoadState::LoadError(e.to_string());
                self.push_error("Failed to load users");
            }
        }
    }

    /// Flip the active-only filter and refetch.
    pub async fn toggle_active_filter(&mut self) {
        self.show_active_only = !self.show_active_only;
        self.load().await;
    }

    /// Sort is view-local; changing it never refetches.
    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    /// Page position is view-local; changing it never refetches.
    pub fn set_page(&mut self, page: usize, per_page: usize) {
        self.page = page;
        self.per_page = per_page;
    }

    /// The rows currently on screen: the loaded list, sorted, one page.
    /// Empty while not in the `Loaded` state.
    pub fn visible_page(&self) -> UserPage {
        let mut users = match &self.state {
            LoadState::Loaded(users) => users.clone(),
            _ => vec![],
        };
        sort_users(&mut users, self.sort);
        paginate(users, self.page, self.per_page)
    }

    /// Open the add dialog.
    pub fn open_add_form(&self) -> UserForm {
        UserForm::add(Arc::clone(&self.store))
    }

    /// Open the edit dialog seeded with a row.
    pub fn open_edit_form(&self, user: User) -> UserForm {
        UserForm::edit(Arc::clone(&self.store), user)
    }

    /// Apply a closed dialog's payload: a successful save notifies and
    /// reloads; cancellation is a no-op.
    pub async fn on_form_closed(&mut self, outcome: &FormOutcome) {
        if !outcome.success || outcome.user.is_none() {
            return;
        }
        match outcome.mode {
            Some(FormMode::Add) => self.push_success("User created successfully"),
            Some(FormMode::Edit) => self.push_success("User updated successfully"),
            None => {}
        }
        self.load().await;
    }

    /// Status toggle behind its confirmation gate. Flips to the opposite
    /// of the row's current status when confirmed.
    pub async fn confirm_status_toggle(&mut self, user: &User, confirmed: bool) {
        if !confirmed {
            return;
        }
        let new_status = !user.status;
        match self.store.set_status(user.id, new_status).await {
            Ok(()) => {
                self.push_success(if new_status {
                    "User activated successfully"
                } else {
                    "User deactivated successfully"
                });
                self.load().await;
            }
            Err(e) => {
                log::warn!("status update for user {} failed: {e}", user.id);
                self.push_error("Failed to update user status");
            }
        }
    }

    /// Delete behind its confirmation gate.
    pub async fn confirm_delete(&mut self, user: &User, confirmed: bool) {
        if !confirmed {
            return;
        }
        match self.store.delete(user.id).await {
            Ok(()) => {
                self.push_success(format!(
                    "{} {} has been deleted successfully",
                    user.first_name, user.last_name
                ));
                self.load().await;
            }
            Err(e) => {
                log::warn!("delete of user {} failed: {e}", user.id);
                self.push_error("Failed to delete user. Please try again.");
            }
        }
    }

    fn push_success(&mut self, message: impl Into<String>) {
        self.notices.push(Notice { kind: NoticeKind::Success, message: message.into() });
    }

    fn push_error(&mut self, message: impl Into<String>) {
        self.notices.push(Notice { kind: NoticeKind::Error, message: message.into() });
    }
}
