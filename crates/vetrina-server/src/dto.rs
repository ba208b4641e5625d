use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use vetrina_core::models::{
    Client, ClientPatch, ContactSubmission, NewsletterSubscriber, Project, ProjectPatch,
};

/// Deserializer for fields where an explicit `null` must be distinguishable
/// from an omitted field: combine with `#[serde(default)]` so that absent
/// fields stay `None` while a present `null` becomes `Some(None)`.
fn double_option<'de, T, D>(de: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub link: Option<String>,
}

/// Partial update body: only fields present in the JSON are applied.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub link: Option<Option<String>>,
}

impl From<UpdateProjectRequest> for ProjectPatch {
    fn from(body: UpdateProjectRequest) -> Self {
        ProjectPatch {
            title: body.title,
            description: body.description,
            image_url: body.image_url,
            link: body.link,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ProjectResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub link: Option<String>,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            image_url: p.image_url,
            link: p.link,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ProjectRecordResponse {
    pub message: String,
    pub data: ProjectResponse,
}

// ---------------------------------------------------------------------------
// Clients
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateClientRequest {
    pub name: Option<String>,
    pub testimonial: Option<String>,
    pub image_url: Option<String>,
    pub rating: Option<i64>,
}

/// Partial update body: only fields present in the JSON are applied.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct UpdateClientRequest {
    pub name: Option<String>,
    pub testimonial: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
    pub rating: Option<i64>,
}

impl From<UpdateClientRequest> for ClientPatch {
    fn from(body: UpdateClientRequest) -> Self {
        ClientPatch {
            name: body.name,
            testimonial: body.testimonial,
            image_url: body.image_url,
            rating: body.rating,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ClientResponse {
    pub id: i64,
    pub name: String,
    pub testimonial: String,
    pub image_url: Option<String>,
    pub rating: i64,
}

impl From<Client> for ClientResponse {
    fn from(c: Client) -> Self {
        Self {
            id: c.id,
            name: c.name,
            testimonial: c.testimonial,
            image_url: c.image_url,
            rating: c.rating,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ClientRecordResponse {
    pub message: String,
    pub data: ClientResponse,
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ContactSubmissionResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContactSubmission> for ContactSubmissionResponse {
    fn from(s: ContactSubmission) -> Self {
        Self {
            id: s.id,
            name: s.name,
            email: s.email,
            message: s.message,
            created_at: s.created_at,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ContactRecordResponse {
    pub message: String,
    pub data: ContactSubmissionResponse,
}

// ---------------------------------------------------------------------------
// Newsletter
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SubscribeRequest {
    pub email: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SubscriberResponse {
    pub id: i64,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
}

impl From<NewsletterSubscriber> for SubscriberResponse {
    fn from(s: NewsletterSubscriber) -> Self {
        Self {
            id: s.id,
            email: s.email,
            subscribed_at: s.subscribed_at,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SubscriberRecordResponse {
    pub message: String,
    pub data: SubscriberResponse,
}

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct DeletedResponse {
    pub message: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
