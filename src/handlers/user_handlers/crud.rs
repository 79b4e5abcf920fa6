use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;

use crate::errors::AppError;
use crate::forms::user_form::UserForm;
use crate::models::user::UserDraft;
use crate::store::UserDirectory;

/// POST /users — run the add-dialog flow over the submitted draft.
pub async fn create(
    store: web::Data<UserDirectory>,
    body: web::Json<UserDraft>,
) -> Result<HttpResponse, AppError> {
    let form = UserForm::add(store.into_inner());
    let outcome = form.submit(&body).await?;
    Ok(HttpResponse::Created().json(outcome))
}

/// PUT /users/{id} — run the edit-dialog flow, seeded with the stored
/// record.
pub async fn update(
    store: web::Data<UserDirectory>,
    path: web::Path<i64>,
    body: web::Json<UserDraft>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let store = store.into_inner();
    let current = store
        .list(false)
        .await?
        .users
        .into_iter()
        .find(|u| u.id == id)
        .ok_or(AppError::NotFound)?;

    let form = UserForm::edit(store, current);
    let outcome = form.submit(&body).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub active: bool,
}

/// POST /users/{id}/status — flip the active flag. The confirmation
/// dialog gates this on the client; the server just applies the decision.
pub async fn set_status(
    store: web::Data<UserDirectory>,
    path: web::Path<i64>,
    body: web::Json<StatusBody>,
) -> Result<HttpResponse, AppError> {
    store.set_status(path.into_inner(), body.active).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

/// DELETE /users/{id}
pub async fn delete(
    store: web::Data<UserDirectory>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    store.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[derive(Debug, Deserialize)]
pub struct CheckEmailQuery {
    email: String,
    exclude_id: Option<i64>,
}

/// GET /users/check-email — availability probe behind the form's
/// debounced uniqueness check. `exclude_id` carries the edited user's id.
pub async fn check_email(
    store: web::Data<UserDirectory>,
    query: web::Query<CheckEmailQuery>,
) -> Result<HttpResponse, AppError> {
    let available = !store.email_taken(&query.email, query.exclude_id).await;
    Ok(HttpResponse::Ok().json(json!({ "available": available })))
}
