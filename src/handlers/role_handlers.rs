use actix_session::Session;
use actix_web::HttpResponse;

use crate::auth::session::require_actor;
use crate::errors::AppError;
use crate::models::role;

/// GET /roles — role options the signed-in actor may assign, annotated
/// for the role selector.
pub async fn options(session: Session) -> Result<HttpResponse, AppError> {
    let actor = require_actor(&session)?;
    Ok(HttpResponse::Ok().json(role::options_for(actor)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::sign_in;
    use crate::models::role::Role;
    use actix_session::{SessionMiddleware, storage::CookieSessionStore};
    use actix_web::cookie::Key;
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};

    async fn establish(session: Session) -> HttpResponse {
        sign_in(&session, "manager@example.com", Role::Manager).unwrap();
        HttpResponse::NoContent().finish()
    }

    #[actix_rt::test]
    async fn options_follow_the_session_actor() {
        let key = Key::generate();
        let app = test::init_service(
            App::new()
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), key)
                        .cookie_secure(false)
                        .build(),
                )
                .route("/establish", web::post().to(establish))
                .route("/roles", web::get().to(options)),
        )
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::post().uri("/establish").to_request())
                .await;
        let cookie = resp.response().cookies().next().unwrap().into_owned();

        let req = test::TestRequest::get().uri("/roles").cookie(cookie).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let values: Vec<&str> =
            body.as_array().unwrap().iter().map(|o| o["value"].as_str().unwrap()).collect();
        assert_eq!(values, vec!["Manager", "User"]);
    }

    #[actix_rt::test]
    async fn options_require_a_session() {
        let app = test::init_service(
            App::new()
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
                        .cookie_secure(false)
                        .build(),
                )
                .route("/roles", web::get().to(options)),
        )
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/roles").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
