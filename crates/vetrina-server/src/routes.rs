use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use vetrina_core::AppError;
use vetrina_core::models::{
    ClientPatch, NewClient, NewContactSubmission, NewProject, NewSubscriber, ProjectPatch,
};

use crate::dto::{
    ClientRecordResponse, ClientResponse, ContactRecordResponse, ContactRequest,
    ContactSubmissionResponse, CreateClientRequest, CreateProjectRequest, DeletedResponse,
    HealthResponse, ProjectRecordResponse, ProjectResponse, SubscribeRequest,
    SubscriberRecordResponse, SubscriberResponse, UpdateClientRequest, UpdateProjectRequest,
};
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the full router: the public `/api` group, the admin `/admin/api`
/// group, and the system endpoints.
///
/// The admin group carries no authentication, mirroring the deployment this
/// serves; it must sit behind a trusted boundary.
pub fn router(state: Arc<AppState>) -> Router {
    let public = Router::new()
        .route("/projects", get(list_projects))
        .route("/clients", get(list_clients))
        .route("/contact", post(submit_contact))
        .route("/newsletter", post(subscribe_newsletter));

    let admin = Router::new()
        .route("/projects", get(admin_list_projects))
        .route("/projects", post(admin_create_project))
        .route("/projects/{id}", put(admin_update_project))
        .route("/projects/{id}", delete(admin_delete_project))
        .route("/clients", get(admin_list_clients))
        .route("/clients", post(admin_create_client))
        .route("/clients/{id}", put(admin_update_client))
        .route("/clients/{id}", delete(admin_delete_client))
        .route("/contact-submissions", get(admin_list_contact_submissions))
        .route(
            "/contact-submissions/{id}",
            delete(admin_delete_contact_submission),
        )
        .route("/newsletter-subscribers", get(admin_list_subscribers))
        .route("/newsletter-subscribers/{id}", delete(admin_delete_subscriber));

    Router::new()
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", public)
        .nest("/admin/api", admin)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (status = 200, description = "All projects", body = [ProjectResponse]),
    ),
    tag = "public"
)]
pub async fn list_projects(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let projects = state.db.project_repo().list().await?;
    let response: Vec<ProjectResponse> = projects.into_iter().map(Into::into).collect();

    Ok(axum::Json(response))
}

#[utoipa::path(
    get,
    path = "/api/clients",
    responses(
        (status = 200, description = "All client testimonials", body = [ClientResponse]),
    ),
    tag = "public"
)]
pub async fn list_clients(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let clients = state.db.client_repo().list().await?;
    let response: Vec<ClientResponse> = clients.into_iter().map(Into::into).collect();

    Ok(axum::Json(response))
}

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Submission stored", body = ContactRecordResponse),
        (status = 400, description = "Missing required fields", body = crate::dto::ErrorResponse),
    ),
    tag = "public"
)]
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<ContactRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let submission = NewContactSubmission::new(body.name, body.email, body.message)?;
    let record = state.db.contact_repo().insert(&submission).await?;

    let response = ContactRecordResponse {
        message: "Contact form submitted successfully".to_string(),
        data: record.into(),
    };

    Ok((StatusCode::CREATED, axum::Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/newsletter",
    request_body = SubscribeRequest,
    responses(
        (status = 201, description = "Subscribed", body = SubscriberRecordResponse),
        (status = 400, description = "Missing or already subscribed email", body = crate::dto::ErrorResponse),
    ),
    tag = "public"
)]
pub async fn subscribe_newsletter(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<SubscribeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let subscriber = NewSubscriber::new(body.email)?;

    let existing = state
        .db
        .newsletter_repo()
        .find_by_email(&subscriber.email)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict("Email already subscribed".into()).into());
    }

    let record = state.db.newsletter_repo().insert(&subscriber).await?;

    let response = SubscriberRecordResponse {
        message: "Successfully subscribed to newsletter".to_string(),
        data: record.into(),
    };

    Ok((StatusCode::CREATED, axum::Json(response)))
}

// ---------------------------------------------------------------------------
// Admin: projects
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/admin/api/projects",
    responses(
        (status = 200, description = "All projects", body = [ProjectResponse]),
    ),
    tag = "projects"
)]
pub async fn admin_list_projects(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let projects = state.db.project_repo().list().await?;
    let response: Vec<ProjectResponse> = projects.into_iter().map(Into::into).collect();

    Ok(axum::Json(response))
}

#[utoipa::path(
    post,
    path = "/admin/api/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created", body = ProjectRecordResponse),
        (status = 400, description = "Missing required fields", body = crate::dto::ErrorResponse),
    ),
    tag = "projects"
)]
pub async fn admin_create_project(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<CreateProjectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new_project = NewProject::new(body.title, body.description, body.image_url, body.link)?;
    let project = state.db.project_repo().insert(&new_project).await?;

    let response = ProjectRecordResponse {
        message: "Project created successfully".to_string(),
        data: project.into(),
    };

    Ok((StatusCode::CREATED, axum::Json(response)))
}

#[utoipa::path(
    put,
    path = "/admin/api/projects/{id}",
    params(
        ("id" = i64, Path, description = "Project ID")
    ),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Project updated", body = ProjectRecordResponse),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
    ),
    tag = "projects"
)]
pub async fn admin_update_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    axum::Json(body): axum::Json<UpdateProjectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let patch = ProjectPatch::from(body);
    let project = state
        .db
        .project_repo()
        .update(id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

    let response = ProjectRecordResponse {
        message: "Project updated successfully".to_string(),
        data: project.into(),
    };

    Ok(axum::Json(response))
}

#[utoipa::path(
    delete,
    path = "/admin/api/projects/{id}",
    params(
        ("id" = i64, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project deleted", body = DeletedResponse),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
    ),
    tag = "projects"
)]
pub async fn admin_delete_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.db.project_repo().delete(id).await? {
        return Err(AppError::NotFound("Project not found".into()).into());
    }

    Ok(axum::Json(DeletedResponse {
        message: "Project deleted successfully".to_string(),
    }))
}

// ---------------------------------------------------------------------------
// Admin: clients
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/admin/api/clients",
    responses(
        (status = 200, description = "All client testimonials", body = [ClientResponse]),
    ),
    tag = "clients"
)]
pub async fn admin_list_clients(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let clients = state.db.client_repo().list().await?;
    let response: Vec<ClientResponse> = clients.into_iter().map(Into::into).collect();

    Ok(axum::Json(response))
}

#[utoipa::path(
    post,
    path = "/admin/api/clients",
    request_body = CreateClientRequest,
    responses(
        (status = 201, description = "Client added", body = ClientRecordResponse),
        (status = 400, description = "Missing required fields", body = crate::dto::ErrorResponse),
    ),
    tag = "clients"
)]
pub async fn admin_create_client(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<CreateClientRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new_client = NewClient::new(body.name, body.testimonial, body.image_url, body.rating)?;
    let client = state.db.client_repo().insert(&new_client).await?;

    let response = ClientRecordResponse {
        message: "Client added successfully".to_string(),
        data: client.into(),
    };

    Ok((StatusCode::CREATED, axum::Json(response)))
}

#[utoipa::path(
    put,
    path = "/admin/api/clients/{id}",
    params(
        ("id" = i64, Path, description = "Client ID")
    ),
    request_body = UpdateClientRequest,
    responses(
        (status = 200, description = "Client updated", body = ClientRecordResponse),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
    ),
    tag = "clients"
)]
pub async fn admin_update_client(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    axum::Json(body): axum::Json<UpdateClientRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let patch = ClientPatch::from(body);
    let client = state
        .db
        .client_repo()
        .update(id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound("Client not found".into()))?;

    let response = ClientRecordResponse {
        message: "Client updated successfully".to_string(),
        data: client.into(),
    };

    Ok(axum::Json(response))
}

#[utoipa::path(
    delete,
    path = "/admin/api/clients/{id}",
    params(
        ("id" = i64, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client deleted", body = DeletedResponse),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
    ),
    tag = "clients"
)]
pub async fn admin_delete_client(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.db.client_repo().delete(id).await? {
        return Err(AppError::NotFound("Client not found".into()).into());
    }

    Ok(axum::Json(DeletedResponse {
        message: "Client deleted successfully".to_string(),
    }))
}

// ---------------------------------------------------------------------------
// Admin: contact submissions
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/admin/api/contact-submissions",
    responses(
        (status = 200, description = "All contact form submissions", body = [ContactSubmissionResponse]),
    ),
    tag = "contact"
)]
pub async fn admin_list_contact_submissions(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let submissions = state.db.contact_repo().list().await?;
    let response: Vec<ContactSubmissionResponse> =
        submissions.into_iter().map(Into::into).collect();

    Ok(axum::Json(response))
}

#[utoipa::path(
    delete,
    path = "/admin/api/contact-submissions/{id}",
    params(
        ("id" = i64, Path, description = "Submission ID")
    ),
    responses(
        (status = 200, description = "Submission deleted", body = DeletedResponse),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
    ),
    tag = "contact"
)]
pub async fn admin_delete_contact_submission(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.db.contact_repo().delete(id).await? {
        return Err(AppError::NotFound("Submission not found".into()).into());
    }

    Ok(axum::Json(DeletedResponse {
        message: "Submission deleted successfully".to_string(),
    }))
}

// ---------------------------------------------------------------------------
// Admin: newsletter subscribers
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/admin/api/newsletter-subscribers",
    responses(
        (status = 200, description = "All newsletter subscribers", body = [SubscriberResponse]),
    ),
    tag = "newsletter"
)]
pub async fn admin_list_subscribers(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let subscribers = state.db.newsletter_repo().list().await?;
    let response: Vec<SubscriberResponse> = subscribers.into_iter().map(Into::into).collect();

    Ok(axum::Json(response))
}

#[utoipa::path(
    delete,
    path = "/admin/api/newsletter-subscribers/{id}",
    params(
        ("id" = i64, Path, description = "Subscriber ID")
    ),
    responses(
        (status = 200, description = "Subscriber removed", body = DeletedResponse),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
    ),
    tag = "newsletter"
)]
pub async fn admin_delete_subscriber(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.db.newsletter_repo().delete(id).await? {
        return Err(AppError::NotFound("Subscriber not found".into()).into());
    }

    Ok(axum::Json(DeletedResponse {
        message: "Subscriber deleted successfully".to_string(),
    }))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let db_status = match state.db.health_check().await {
        Ok(()) => "ok",
        Err(_) => "error",
    };

    let status = if db_status == "ok" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if db_status == "ok" {
            "healthy"
        } else {
            "unhealthy"
        },
        database: db_status,
    };

    (status, axum::Json(response))
}
