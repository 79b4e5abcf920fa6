use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use userdesk::handlers::{auth_handlers, role_handlers, user_handlers};
use userdesk::models::role;
use userdesk::store::{MockLatency, UserDirectory};
use userdesk::auth;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // A broken hierarchy table is a programming error; refuse to start.
    role::verify_hierarchy().expect("role hierarchy must be total and self-inclusive");

    // One directory per process, shared by reference. Data resets on restart.
    let store = web::Data::new(UserDirectory::seeded(MockLatency::default()));

    // Session encryption key — load from SESSION_KEY env var for persistent
    // sessions across restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need 64+) — generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set — generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        let session_mw =
            SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                .cookie_secure(false)
                .cookie_http_only(true)
                .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            // Public routes
            .route("/login", web::post().to(auth_handlers::login))
            // Root redirect
            .route(
                "/",
                web::get().to(|| async {
                    actix_web::HttpResponse::SeeOther()
                        .insert_header(("Location", "/users"))
                        .finish()
                }),
            )
            // Protected routes
            .service(
                web::scope("")
                    .wrap(actix_web::middleware::from_fn(auth::middleware::require_auth))
                    .route("/logout", web::post().to(auth_handlers::logout))
                    // /users/check-email BEFORE /users/{id} to avoid routing conflict
                    .route("/users/check-email", web::get().to(user_handlers::check_email))
                    .route("/users", web::get().to(user_handlers::list))
                    .route("/users", web::post().to(user_handlers::create))
                    .route("/users/{id}", web::put().to(user_handlers::update))
                    .route("/users/{id}/status", web::post().to(user_handlers::set_status))
                    .route("/users/{id}", web::delete().to(user_handlers::delete))
                    .route("/roles", web::get().to(role_handlers::options)),
            )
    })
    .bind(bind_addr.as_str())?
    .run()
    .await
}
