use actix_session::Session;

use crate::errors::AppError;
use crate::models::role::Role;

pub fn get_actor_email(session: &Session) -> Option<String> {
    session.get::<String>("actor_email").unwrap_or(None)
}

pub fn get_actor_role(session: &Session) -> Option<Role> {
    session.get::<Role>("actor_role").unwrap_or(None)
}

/// Establish the signed-in actor on the session.
pub fn sign_in(session: &Session, email: &str, role: Role) -> Result<(), AppError> {
    session
        .insert("actor_email", email)
        .map_err(|e| AppError::Session(e.to_string()))?;
    session
        .insert("actor_role", role)
        .map_err(|e| AppError::Session(e.to_string()))?;
    Ok(())
}

/// The signed-in actor's role, or a session error when unauthenticated.
pub fn require_actor(session: &Session) -> Result<Role, AppError> {
    get_actor_role(session).ok_or_else(|| AppError::Session("Not authenticated".to_string()))
}
