//! Catalog Server
//!
//! REST JSON API managing a small library catalog of authors, genres and
//! books, backed by PostgreSQL or an in-memory store.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::CatalogStore;
use services::{AuthorService, BookService, GenreService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn CatalogStore>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn CatalogStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Services are built per request around the shared store handle
    pub fn authors(&self) -> AuthorService {
        AuthorService::new(self.store.clone())
    }

    pub fn genres(&self) -> GenreService {
        GenreService::new(self.store.clone())
    }

    pub fn books(&self) -> BookService {
        BookService::new(self.store.clone())
    }
}
