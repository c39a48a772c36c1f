//! Domain services
//!
//! Every operation returns an [`ApiResponse`](crate::models::ApiResponse);
//! store faults are converted into failure envelopes and never propagate.

pub mod authors;
pub mod books;
pub mod genres;

pub use authors::AuthorService;
pub use books::BookService;
pub use genres::GenreService;
