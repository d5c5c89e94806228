pub mod app;
pub mod auth;
pub mod catalog;
pub mod contacts;
pub mod invoices;
pub mod metrics;
pub mod payments;
pub mod quotations;
pub mod settings;
pub mod statements;
pub mod users;
