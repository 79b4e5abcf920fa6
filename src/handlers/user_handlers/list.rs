use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::user::{SortSpec, paginate, sort_users};
use crate::store::UserDirectory;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    active_only: Option<bool>,
    /// One of `firstName`, `lastName`, `email`.
    sort: Option<String>,
    /// `asc` or `desc`.
    dir: Option<String>,
    page: Option<usize>,
    per_page: Option<usize>,
}

/// GET /users — one sorted page of the directory. The active-only filter
/// defaults to on; sorting and paging happen view-side over the full fetch.
pub async fn list(
    store: web::Data<UserDirectory>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let active_only = query.active_only.unwrap_or(true);
    let response = store.list(active_only).await?;

    let mut users = response.users;
    sort_users(&mut users, SortSpec::from_params(query.sort.as_deref(), query.dir.as_deref()));
    let page = paginate(users, query.page.unwrap_or(1), query.per_page.unwrap_or(10));
    Ok(HttpResponse::Ok().json(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockLatency;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};

    async fn get(uri: &str) -> serde_json::Value {
        let store = web::Data::new(UserDirectory::seeded(MockLatency::none()));
        let app = test::init_service(
            App::new().app_data(store).route("/users", web::get().to(list)),
        )
        .await;
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        test::read_body_json(resp).await
    }

    #[actix_rt::test]
    async fn defaults_to_active_only_sorted_by_first_name() {
        let body = get("/users").await;
        assert_eq!(body["total"], 8);
        assert_eq!(body["users"][0]["firstName"], "Alice");
    }

    #[actix_rt::test]
    async fn full_listing_with_sort_and_paging() {
        let body = get("/users?active_only=false&sort=lastName&dir=desc&page=1&per_page=5").await;
        assert_eq!(body["total"], 12);
        assert_eq!(body["totalPages"], 3);
        assert_eq!(body["users"].as_array().unwrap().len(), 5);
        assert_eq!(body["users"][0]["lastName"], "Wilson");
    }

    #[actix_rt::test]
    async fn later_pages_pick_up_where_the_previous_left_off() {
        let first = get("/users?active_only=false&per_page=10&page=1").await;
        let second = get("/users?active_only=false&per_page=10&page=2").await;
        assert_eq!(first["users"].as_array().unwrap().len(), 10);
        assert_eq!(second["users"].as_array().unwrap().len(), 2);
    }
}
