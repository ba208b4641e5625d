pub mod error;
pub mod models;

pub use error::AppError;
pub use models::{
    Client, ClientPatch, ContactSubmission, NewClient, NewContactSubmission, NewProject,
    NewSubscriber, NewsletterSubscriber, Project, ProjectPatch,
};
