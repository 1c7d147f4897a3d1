//! Auth module: domain, repository and service layers for the single admin login.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;

pub use service::AuthService;
