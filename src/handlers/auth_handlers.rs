use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::{mock_idp, session as auth_session};
use crate::errors::AppError;
use crate::store::UserDirectory;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /login — exchange credentials for a mock id token, run the login
/// mutation stub, and establish the session on success.
pub async fn login(
    store: web::Data<UserDirectory>,
    session: Session,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let token = match mock_idp::sign_in(body.email.trim(), &body.password) {
        Ok(token) => token,
        Err(errors) => return Err(AppError::Validation(errors)),
    };

    let response = mock_idp::login(&token);
    if response.success {
        auth_session::sign_in(&session, body.email.trim(), store.current_actor_role())?;
        log::info!("actor {} signed in", body.email.trim());
    }
    Ok(HttpResponse::Ok().json(response))
}

/// POST /logout
pub async fn logout(session: Session) -> HttpResponse {
    session.purge();
    HttpResponse::NoContent().finish()
}
