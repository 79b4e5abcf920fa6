//! Add/edit user dialog flow: draft validation on submit, role-hierarchy
//! gating, and submission serialization.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::role::{self, Role, RoleOption};
use crate::models::user::{User, UserDraft};
use crate::store::UserDirectory;

use super::validate;

/// Whether the dialog was opened to add a new user or edit an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    Add,
    Edit,
}

/// Payload the dialog closes with.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FormOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<FormMode>,
    pub cancelled: bool,
}

/// Validate a draft on submit. Returns every field error at once; the
/// asynchronous email-uniqueness check lives in [`super::email_check`].
pub fn validate_draft(draft: &UserDraft, actor: Role) -> Vec<String> {
    let mut errors = vec![];
    errors.extend(validate::validate_name(&draft.first_name, "First name"));
    errors.extend(validate::validate_name(&draft.last_name, "Last name"));
    errors.extend(validate::validate_email(&draft.email));
    if !actor.may_assign(draft.role) {
        errors.push(format!(
            "The {} role is outside your assignable roles",
            draft.role.label()
        ));
    }
    errors
}

/// One open add/edit dialog. The in-flight flag is shared-readable so a
/// second submit through the same handle is rejected while the first is
/// still pending.
pub struct UserForm {
    store: Arc<UserDirectory>,
    mode: FormMode,
    existing: Option<User>,
    submitting: AtomicBool,
}

impl UserForm {
    pub fn add(store: Arc<UserDirectory>) -> Self {
        UserForm { store, mode: FormMode::Add, existing: None, submitting: AtomicBool::new(false) }
    }

    pub fn edit(store: Arc<UserDirectory>, user: User) -> Self {
        UserForm {
            store,
            mode: FormMode::Edit,
            existing: Some(user),
            submitting: AtomicBool::new(false),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// The record the edit dialog was seeded with, if any.
    pub fn existing(&self) -> Option<&User> {
        self.existing.as_ref()
    }

    /// Selectable roles for this dialog, per the acting user's hierarchy
    /// allowance.
    pub fn available_roles(&self) -> Vec<RoleOption> {
        role::options_for(self.store.current_actor_role())
    }

    /// Submit the draft. Blocked while a prior submission is pending or
    /// while the draft is invalid; on success returns the close payload.
    pub async fn submit(&self, draft: &UserDraft) -> Result<FormOutcome, AppError> {
        if self.submitting.swap(true, Ordering::SeqCst) {
            return Err(AppError::Validation(vec![
                "A submission is already in progress".to_string(),
            ]));
        }
        let errors = validate_draft(draft, self.store.current_actor_role());
        if !errors.is_empty() {
            self.submitting.store(false, Ordering::SeqCst);
            return Err(AppError::Validation(errors));
        }

        let result = match (self.mode, &self.existing) {
            (FormMode::Add, _) => self.store.create(draft).await,
            (FormMode::Edit, Some(user)) => self.store.update(user.id, draft).await,
            (FormMode::Edit, None) => Err(AppError::NotFound),
        };
        self.submitting.store(false, Ordering::SeqCst);

        let user = result?;
        Ok(FormOutcome {
            success: true,
            user: Some(user),
            mode: Some(self.mode),
            cancelled: false,
        })
    }

    /// Close without saving. The draft is discarded.
    pub fn cancel(self) -> FormOutcome {
        FormOutcome { success: false, user: None, mode: None, cancelled: true }
    }
}
