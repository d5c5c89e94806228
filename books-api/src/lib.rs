//! books-api: typed client for the remote bookkeeping HTTP API.
//!
//! The remote backend is a PHP-style JSON API (one `.php` endpoint per
//! resource). This crate owns the wire models, the error taxonomy for
//! classifying its failure modes, and the pure statement-recomputation core.

pub mod client;
pub mod currency;
pub mod error;
pub mod legacy;
pub mod models;
pub mod statement;

pub use client::BooksApiClient;
pub use error::ApiError;
