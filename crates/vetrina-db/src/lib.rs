pub mod client_repository;
pub mod config;
pub mod contact_repository;
pub mod database;
pub mod newsletter_repository;
pub mod project_repository;

pub use client_repository::ClientRepository;
pub use config::DatabaseConfig;
pub use contact_repository::ContactRepository;
pub use database::Database;
pub use newsletter_repository::NewsletterRepository;
pub use project_repository::ProjectRepository;
