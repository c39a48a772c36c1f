//! API handlers for the catalog REST endpoints

pub mod authors;
pub mod books;
pub mod genres;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header::LOCATION, request::Parts, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{de::DeserializeOwned, Serialize};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use validator::Validate;

use crate::{config::CorsConfig, error::AppError, models::ApiResponse, AppState};

/// Version prefix of every catalog route
pub const API_PREFIX: &str = "/api/v1";

/// JSON body extractor that runs `validator` rules before the handler.
///
/// Both malformed bodies and rule violations are rejected with a 400
/// "Invalid data" envelope.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(vec![rejection.body_text()]))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// `:id` path segment; a non-numeric or out-of-range id is rejected with the
/// same "Invalid data" envelope as a bad body
pub struct IdPath(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Validation(vec![rejection.body_text()]))?;
        Ok(IdPath(id))
    }
}

/// 201 with a Location header for successful creations, the envelope's own
/// status otherwise
pub(crate) fn created<T: Serialize>(collection: &str, id: Option<i32>, response: ApiResponse<T>) -> Response {
    match id {
        Some(id) if response.success => {
            let location = format!("{}/{}/{}", API_PREFIX, collection, id);
            (StatusCode::CREATED, [(LOCATION, location)], Json(response)).into_response()
        }
        _ => response.into_response(),
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Authors
        .route("/authors", get(authors::list_authors).post(authors::create_author))
        .route(
            "/authors/:id",
            get(authors::get_author)
                .put(authors::update_author)
                .delete(authors::delete_author),
        )
        // Genres
        .route("/genres", get(genres::list_genres).post(genres::create_genre))
        .route(
            "/genres/:id",
            get(genres::get_genre)
                .put(genres::update_genre)
                .delete(genres::delete_genre),
        )
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .with_state(state);

    Router::new()
        .nest(API_PREFIX, api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
