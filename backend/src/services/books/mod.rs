//! # Book Service Module
//!
//! CRUD endpoints for the library's book records, all under `/books`.
//!
//! ## Sub-modules:
//! - `create`: validates and inserts a new book.
//! - `list`: returns every book, paginated by `skip`/`limit`.
//! - `get`: returns a single book.
//! - `update`: applies a partial update.
//! - `delete`: removes a book.

mod create;
mod delete;
mod get;
mod list;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

/// The base path for all book endpoints.
const API_PATH: &str = "/books";

/// Configures and returns the Actix `Scope` for the book routes.
///
/// # Registered Routes:
///
/// *   **`POST /books`**: body is a `NewBook`; responds `201 Created` with the stored `Book`.
/// *   **`GET /books`**: optional `skip` and `limit` query parameters; responds with a JSON array.
/// *   **`GET /books/{book_id}`**: the `Book`, or `404` when unknown.
/// *   **`PUT /books/{book_id}`**: body is a `BookUpdate`; only the fields present are changed.
/// *   **`DELETE /books/{book_id}`**: `204 No Content`, or `404` when unknown.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(create::process))
        .route("", get().to(list::process))
        .route("/{book_id}", get().to(get::process))
        .route("/{book_id}", put().to(update::process))
        .route("/{book_id}", delete().to(delete::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::services::{json_config, path_config, query_config};
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::model::book::{Book, BookStatus};
    use serde_json::{json, Value};

    macro_rules! library_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(json_config())
                    .app_data(query_config())
                    .app_data(path_config())
                    .app_data(web::Data::new(Database::open_in_memory().unwrap()))
                    .service(configure_routes()),
            )
            .await
        };
    }

    macro_rules! post_book {
        ($app:expr, $body:expr) => {{
            let req = test::TestRequest::post()
                .uri("/books")
                .set_json($body)
                .to_request();
            let resp = test::call_service(&$app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
            let book: Book = test::read_body_json(resp).await;
            book
        }};
    }

    #[actix_web::test]
    async fn create_assigns_id_and_defaults() {
        let app = library_app!();
        let book = post_book!(app, json!({ "title": "Emma", "author": "Jane Austen" }));

        assert_eq!(book.id, 1);
        assert_eq!(book.title, "Emma");
        assert_eq!(book.status, BookStatus::WantToRead);
    }

    #[actix_web::test]
    async fn create_rejects_empty_title() {
        let app = library_app!();
        let req = test::TestRequest::post()
            .uri("/books")
            .set_json(json!({ "title": "", "author": "Jane Austen" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "title: must not be empty");
    }

    #[actix_web::test]
    async fn create_rejects_missing_author_as_unprocessable() {
        let app = library_app!();
        let req = test::TestRequest::post()
            .uri("/books")
            .set_json(json!({ "title": "Emma" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn list_returns_books_in_id_order_with_pagination() {
        let app = library_app!();
        for title in ["A", "B", "C"] {
            post_book!(app, json!({ "title": title, "author": "X" }));
        }

        let req = test::TestRequest::get().uri("/books").to_request();
        let all: Vec<Book> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.iter().map(|b| b.title.as_str()).collect::<Vec<_>>(), ["A", "B", "C"]);

        let req = test::TestRequest::get()
            .uri("/books?skip=1&limit=1")
            .to_request();
        let page: Vec<Book> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].title, "B");
    }

    #[actix_web::test]
    async fn negative_limit_is_unprocessable_with_detail() {
        let app = library_app!();
        let req = test::TestRequest::get().uri("/books?limit=-1").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["detail"].as_str().unwrap().starts_with("Invalid request: "));
    }

    #[actix_web::test]
    async fn non_numeric_id_is_unprocessable_with_detail() {
        let app = library_app!();
        let req = test::TestRequest::get().uri("/books/abc").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["detail"].is_string());
    }

    #[actix_web::test]
    async fn list_on_empty_library_is_an_empty_array() {
        let app = library_app!();
        let req = test::TestRequest::get().uri("/books").to_request();
        let all: Vec<Book> = test::call_and_read_body_json(&app, req).await;
        assert!(all.is_empty());
    }

    #[actix_web::test]
    async fn get_unknown_book_is_404() {
        let app = library_app!();
        let req = test::TestRequest::get().uri("/books/99").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Book not found");
    }

    #[actix_web::test]
    async fn partial_update_changes_only_given_fields() {
        let app = library_app!();
        let created = post_book!(
            app,
            json!({ "title": "Dune", "author": "Frank Herbert", "genre": "Sci-Fi" })
        );

        let req = test::TestRequest::put()
            .uri(&format!("/books/{}", created.id))
            .set_json(json!({ "status": "reading" }))
            .to_request();
        let updated: Book = test::call_and_read_body_json(&app, req).await;

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.status, BookStatus::Reading);
        assert_eq!(updated.title, "Dune");
        assert_eq!(updated.genre.as_deref(), Some("Sci-Fi"));

        let req = test::TestRequest::get()
            .uri(&format!("/books/{}", created.id))
            .to_request();
        let fetched: Book = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, updated);
    }

    #[actix_web::test]
    async fn explicit_null_clears_optional_field() {
        let app = library_app!();
        let created = post_book!(
            app,
            json!({ "title": "Dune", "author": "Frank Herbert", "genre": "SF", "notes": "Spice" })
        );

        let req = test::TestRequest::put()
            .uri(&format!("/books/{}", created.id))
            .set_json(json!({ "genre": null }))
            .to_request();
        let updated: Book = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.genre, None);
        assert_eq!(updated.notes.as_deref(), Some("Spice"));

        let req = test::TestRequest::get()
            .uri(&format!("/books/{}", created.id))
            .to_request();
        let fetched: Book = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched.genre, None);
    }

    #[actix_web::test]
    async fn update_unknown_book_is_404() {
        let app = library_app!();
        let req = test::TestRequest::put()
            .uri("/books/5")
            .set_json(json!({ "title": "Nope" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn update_rejects_unknown_status() {
        let app = library_app!();
        let created = post_book!(app, json!({ "title": "Emma", "author": "Jane Austen" }));
        let req = test::TestRequest::put()
            .uri(&format!("/books/{}", created.id))
            .set_json(json!({ "status": "shelved" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn delete_returns_204_then_book_is_gone() {
        let app = library_app!();
        let created = post_book!(app, json!({ "title": "Emma", "author": "Jane Austen" }));
        let uri = format!("/books/{}", created.id);

        let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let body = test::read_body(resp).await;
        assert!(body.is_empty());

        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
