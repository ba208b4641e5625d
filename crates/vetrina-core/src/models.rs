use chrono::{DateTime, Utc};

use crate::error::AppError;

/// A portfolio project shown on the public site.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub link: Option<String>,
}

/// DTO for inserting a new project.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub link: Option<String>,
}

impl NewProject {
    /// Validate required fields. An empty string counts as missing.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        image_url: Option<String>,
        link: Option<String>,
    ) -> Result<Self, AppError> {
        let (Some(title), Some(description)) = (non_empty(title), non_empty(description)) else {
            return Err(AppError::Validation(
                "Title and description are required".into(),
            ));
        };
        Ok(Self {
            title,
            description,
            image_url,
            link,
        })
    }
}

/// Partial update for a project.
///
/// Outer `None` means "leave unchanged". For the nullable columns the inner
/// `Option` distinguishes clearing the value from replacing it.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<Option<String>>,
    pub link: Option<Option<String>>,
}

impl ProjectPatch {
    /// Overwrite the fields present in the patch, keeping the rest.
    pub fn apply(&self, project: &mut Project) {
        if let Some(title) = &self.title {
            project.title = title.clone();
        }
        if let Some(description) = &self.description {
            project.description = description.clone();
        }
        if let Some(image_url) = &self.image_url {
            project.image_url = image_url.clone();
        }
        if let Some(link) = &self.link {
            project.link = link.clone();
        }
    }
}

/// Rating assigned to a testimonial when the request omits one.
pub const DEFAULT_RATING: i64 = 5;

/// A client testimonial.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub testimonial: String,
    pub image_url: Option<String>,
    pub rating: i64,
}

/// DTO for inserting a new client testimonial.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub testimonial: String,
    pub image_url: Option<String>,
    pub rating: i64,
}

impl NewClient {
    /// Validate required fields and default the rating to [`DEFAULT_RATING`].
    pub fn new(
        name: Option<String>,
        testimonial: Option<String>,
        image_url: Option<String>,
        rating: Option<i64>,
    ) -> Result<Self, AppError> {
        let (Some(name), Some(testimonial)) = (non_empty(name), non_empty(testimonial)) else {
            return Err(AppError::Validation(
                "Name and testimonial are required".into(),
            ));
        };
        Ok(Self {
            name,
            testimonial,
            image_url,
            rating: rating.unwrap_or(DEFAULT_RATING),
        })
    }
}

/// Partial update for a client testimonial.
#[derive(Debug, Clone, Default)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub testimonial: Option<String>,
    pub image_url: Option<Option<String>>,
    pub rating: Option<i64>,
}

impl ClientPatch {
    /// Overwrite the fields present in the patch, keeping the rest.
    pub fn apply(&self, client: &mut Client) {
        if let Some(name) = &self.name {
            client.name = name.clone();
        }
        if let Some(testimonial) = &self.testimonial {
            client.testimonial = testimonial.clone();
        }
        if let Some(image_url) = &self.image_url {
            client.image_url = image_url.clone();
        }
        if let Some(rating) = self.rating {
            client.rating = rating;
        }
    }
}

/// A message submitted through the public contact form.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ContactSubmission {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// DTO for inserting a contact form submission.
#[derive(Debug, Clone)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl NewContactSubmission {
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        message: Option<String>,
    ) -> Result<Self, AppError> {
        let (Some(name), Some(email), Some(message)) =
            (non_empty(name), non_empty(email), non_empty(message))
        else {
            return Err(AppError::Validation("Missing required fields".into()));
        };
        Ok(Self {
            name,
            email,
            message,
        })
    }
}

/// A newsletter subscription.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NewsletterSubscriber {
    pub id: i64,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
}

/// DTO for inserting a newsletter subscription.
#[derive(Debug, Clone)]
pub struct NewSubscriber {
    pub email: String,
}

impl NewSubscriber {
    pub fn new(email: Option<String>) -> Result<Self, AppError> {
        let Some(email) = non_empty(email) else {
            return Err(AppError::Validation("Email is required".into()));
        };
        Ok(Self { email })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
