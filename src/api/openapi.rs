//! OpenAPI documentation

use axum::Router;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, genres, health};

/// Response envelope wrapping every catalog payload
#[derive(ToSchema)]
pub struct Envelope {
    pub success: bool,
    /// Human-readable summary
    pub message: String,
    /// Operation payload, omitted on failure
    #[schema(value_type = Object)]
    pub data: Option<()>,
    /// One entry per error, empty on success
    pub errors: Vec<String>,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "1.0.0",
        description = "Authors, genres and books REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        // Genres
        genres::list_genres,
        genres::get_genre,
        genres::create_genre,
        genres::update_genre,
        genres::delete_genre,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
    ),
    components(
        schemas(
            Envelope,
            crate::models::author::AuthorView,
            crate::models::author::AuthorRequest,
            crate::models::genre::GenreView,
            crate::models::genre::GenreRequest,
            crate::models::book::BookView,
            crate::models::book::BookRequest,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "authors", description = "Author management"),
        (name = "genres", description = "Genre management"),
        (name = "books", description = "Book management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
