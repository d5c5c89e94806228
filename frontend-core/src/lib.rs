//! frontend-core: Shared infrastructure for the books-frontend workspace.
pub mod error;
pub mod middleware;
pub mod observability;
pub mod paging;

pub use error::AppError;
