//! Integration tests for API endpoints.
//!
//! These tests spin the full router up on an OS-assigned port over the
//! in-memory store, then exercise it with a real HTTP client. They check
//! status codes and the flat `{ name, message }` error bodies clients
//! key on.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use sea_orm::DbErr;

use rentals_api::api::{create_router, AppState};
use rentals_api::domain::{Movie, NewRental, Rental, User};
use rentals_api::errors::{AppError, AppResult};
use rentals_api::infra::{InMemoryStore, MovieRepository, RentalRepository, UserRepository};
use rentals_api::services::RentalManager;

// =============================================================================
// Test Helpers
// =============================================================================

/// Start the server on an ephemeral port, returning its base URL and the
/// backing store for seeding.
async fn spawn_test_server() -> (String, InMemoryStore) {
    let store = InMemoryStore::new();
    let rental_service = RentalManager::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        1,
    );
    let app = create_router(AppState::new(Arc::new(rental_service)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://127.0.0.1:{}", port), store)
}

fn user_born_years_ago(id: i32, years: i64) -> User {
    User {
        id,
        name: "Test User".to_string(),
        birth_date: (Utc::now() - Duration::days(years * 365 + 30)).date_naive(),
    }
}

fn sample_movie(id: i32) -> Movie {
    Movie {
        id,
        name: format!("Movie {id}"),
        adults_only: false,
        rental_id: None,
    }
}

fn sample_rental(id: i32, user_id: i32) -> Rental {
    Rental {
        id,
        date: Utc::now() - Duration::days(1),
        end_date: Utc::now() + Duration::days(1),
        user_id,
        closed: false,
        movies_id: vec![9],
    }
}

// =============================================================================
// Service endpoints
// =============================================================================

#[tokio::test]
async fn test_root_endpoint_returns_service_banner() {
    let (base, _store) = spawn_test_server().await;

    let resp = reqwest::get(format!("{}/", base)).await.unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "Movie Rentals API");
}

#[tokio::test]
async fn test_health_endpoint_reports_ok() {
    let (base, _store) = spawn_test_server().await;

    let resp = reqwest::get(format!("{}/health", base)).await.unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (base, _store) = spawn_test_server().await;

    let resp = reqwest::get(format!("{}/api-docs/openapi.json", base))
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);

    let doc: serde_json::Value = resp.json().await.unwrap();
    assert!(doc["paths"]["/rentals"].get("post").is_some());
    assert!(doc["paths"]["/rentals/{id}"].get("get").is_some());
    // The request schema carries its field examples
    assert_eq!(
        doc["components"]["schemas"]["CreateRentalRequest"]["properties"]["userId"]["example"],
        1
    );
}

// =============================================================================
// POST /rentals
// =============================================================================

#[tokio::test]
async fn test_create_rental_returns_created_rental() {
    let (base, store) = spawn_test_server().await;
    store.insert_user(user_born_years_ago(1, 30)).await;
    store.insert_movie(sample_movie(1)).await;
    store.insert_movie(sample_movie(2)).await;

    let resp = reqwest::Client::new()
        .post(format!("{}/rentals", base))
        .json(&serde_json::json!({ "userId": 1, "moviesId": [1, 2] }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 201);

    let rental: Rental = resp.json().await.unwrap();
    assert_eq!(rental.id, 1);
    assert_eq!(rental.user_id, 1);
    assert_eq!(rental.movies_id, vec![1, 2]);
    assert!(!rental.closed);
}

#[tokio::test]
async fn test_create_rental_open_rental_conflict_body() {
    let (base, store) = spawn_test_server().await;
    store.insert_user(user_born_years_ago(1, 30)).await;
    store.insert_movie(sample_movie(1)).await;
    store.insert_rental(sample_rental(1, 1)).await;

    let resp = reqwest::Client::new()
        .post(format!("{}/rentals", base))
        .json(&serde_json::json!({ "userId": 1, "moviesId": [1] }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 409);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "PendentRentalError");
    assert_eq!(body["message"], "The user already have a rental!");
}

#[tokio::test]
async fn test_create_rental_unknown_movie_not_found_body() {
    let (base, store) = spawn_test_server().await;
    store.insert_user(user_born_years_ago(1, 30)).await;

    let resp = reqwest::Client::new()
        .post(format!("{}/rentals", base))
        .json(&serde_json::json!({ "userId": 1, "moviesId": [15554] }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "NotFoundError");
    assert_eq!(body["message"], "Movie not found.");
}

#[tokio::test]
async fn test_create_rental_minor_forbidden_body() {
    let (base, store) = spawn_test_server().await;
    store.insert_user(user_born_years_ago(1, 10)).await;
    store
        .insert_movie(Movie {
            adults_only: true,
            ..sample_movie(1)
        })
        .await;

    let resp = reqwest::Client::new()
        .post(format!("{}/rentals", base))
        .json(&serde_json::json!({ "userId": 1, "moviesId": [1] }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 403);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "InsufficientAgeError");
    assert_eq!(body["message"], "Cannot see that movie.");
}

#[tokio::test]
async fn test_create_rental_movie_taken_conflict_body() {
    let (base, store) = spawn_test_server().await;
    store.insert_user(user_born_years_ago(1, 30)).await;
    store
        .insert_movie(Movie {
            rental_id: Some(2),
            ..sample_movie(1)
        })
        .await;

    let resp = reqwest::Client::new()
        .post(format!("{}/rentals", base))
        .json(&serde_json::json!({ "userId": 1, "moviesId": [1] }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 409);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "MovieInRentalError");
    assert_eq!(body["message"], "Movie already in a rental.");
}

#[tokio::test]
async fn test_create_rental_empty_movie_list_rejected() {
    let (base, store) = spawn_test_server().await;
    store.insert_user(user_born_years_ago(1, 30)).await;

    let resp = reqwest::Client::new()
        .post(format!("{}/rentals", base))
        .json(&serde_json::json!({ "userId": 1, "moviesId": [] }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "ValidationError");
}

// =============================================================================
// GET /rentals
// =============================================================================

#[tokio::test]
async fn test_list_rentals_returns_all_in_store_order() {
    let (base, store) = spawn_test_server().await;
    store.insert_rental(sample_rental(5, 1)).await;
    store.insert_rental(sample_rental(2, 3)).await;

    let resp = reqwest::get(format!("{}/rentals", base)).await.unwrap();

    assert_eq!(resp.status(), 200);

    let rentals: Vec<Rental> = resp.json().await.unwrap();
    let ids: Vec<i32> = rentals.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![5, 2]);
}

#[tokio::test]
async fn test_get_rental_by_id_returns_the_rental() {
    let (base, store) = spawn_test_server().await;
    store.insert_rental(sample_rental(7, 1)).await;

    let resp = reqwest::get(format!("{}/rentals/7", base)).await.unwrap();

    assert_eq!(resp.status(), 200);

    let rental: Rental = resp.json().await.unwrap();
    assert_eq!(rental.id, 7);
    assert_eq!(rental.movies_id, vec![9]);
}

#[tokio::test]
async fn test_get_rental_by_id_not_found_body() {
    let (base, _store) = spawn_test_server().await;

    let resp = reqwest::get(format!("{}/rentals/1", base)).await.unwrap();

    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "NotFoundError");
    assert_eq!(body["message"], "Rental not found.");
}

// =============================================================================
// Wire format
// =============================================================================

#[tokio::test]
async fn test_rental_body_uses_camel_case_fields() {
    let (base, store) = spawn_test_server().await;
    store.insert_rental(sample_rental(1, 4)).await;

    let resp = reqwest::get(format!("{}/rentals/1", base)).await.unwrap();
    let body: serde_json::Value = resp.json().await.unwrap();

    assert_eq!(body["userId"], 4);
    assert_eq!(body["moviesId"], serde_json::json!([9]));
    assert!(body.get("endDate").is_some());
    assert!(body.get("user_id").is_none());
}

// Age edge: a user who turns 18 today can rent an adult-only movie
#[tokio::test]
async fn test_create_rental_at_exact_age_threshold() {
    let (base, store) = spawn_test_server().await;
    let today = Utc::now().date_naive();
    let birth_date = NaiveDate::from_ymd_opt(today.year() - 18, today.month(), today.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(today.year() - 18, 2, 28).unwrap());
    store
        .insert_user(User {
            id: 1,
            name: "Barely Adult".to_string(),
            birth_date,
        })
        .await;
    store
        .insert_movie(Movie {
            adults_only: true,
            ..sample_movie(1)
        })
        .await;

    let resp = reqwest::Client::new()
        .post(format!("{}/rentals", base))
        .json(&serde_json::json!({ "userId": 1, "moviesId": [1] }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 201);
}

// =============================================================================
// Store failures
// =============================================================================

/// Store double whose every call fails the way a lost connection would
struct FailingStore;

fn connection_lost() -> AppError {
    AppError::Database(DbErr::Custom("connection reset".to_string()))
}

#[async_trait]
impl UserRepository for FailingStore {
    async fn find_by_id(&self, _id: i32) -> AppResult<Option<User>> {
        Err(connection_lost())
    }
}

#[async_trait]
impl MovieRepository for FailingStore {
    async fn find_by_id(&self, _id: i32) -> AppResult<Option<Movie>> {
        Err(connection_lost())
    }
}

#[async_trait]
impl RentalRepository for FailingStore {
    async fn find_all(&self) -> AppResult<Vec<Rental>> {
        Err(connection_lost())
    }

    async fn find_by_id(&self, _id: i32) -> AppResult<Option<Rental>> {
        Err(connection_lost())
    }

    async fn find_by_user_id(&self, _user_id: i32) -> AppResult<Vec<Rental>> {
        Err(connection_lost())
    }

    async fn create(&self, _rental: NewRental) -> AppResult<Rental> {
        Err(connection_lost())
    }
}

/// Serve the router over the always-failing store
async fn spawn_failing_server() -> String {
    let rental_service = RentalManager::new(
        Arc::new(FailingStore),
        Arc::new(FailingStore),
        Arc::new(FailingStore),
        1,
    );
    let app = create_router(AppState::new(Arc::new(rental_service)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn test_store_failure_maps_to_generic_500_body() {
    let base = spawn_failing_server().await;

    let resp = reqwest::get(format!("{}/rentals", base)).await.unwrap();

    assert_eq!(resp.status(), 500);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "DatabaseError");
    assert_eq!(body["message"], "A database error occurred");
    // The store's own message stays on the server side
    assert!(!body.to_string().contains("connection reset"));
}
