use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vetrina API",
        version = "0.1.0",
        description = "Portfolio website backend: projects, testimonials, contact form, and newsletter."
    ),
    paths(
        crate::routes::list_projects,
        crate::routes::list_clients,
        crate::routes::submit_contact,
        crate::routes::subscribe_newsletter,
        crate::routes::admin_list_projects,
        crate::routes::admin_create_project,
        crate::routes::admin_update_project,
        crate::routes::admin_delete_project,
        crate::routes::admin_list_clients,
        crate::routes::admin_create_client,
        crate::routes::admin_update_client,
        crate::routes::admin_delete_client,
        crate::routes::admin_list_contact_submissions,
        crate::routes::admin_delete_contact_submission,
        crate::routes::admin_list_subscribers,
        crate::routes::admin_delete_subscriber,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::CreateProjectRequest,
        crate::dto::UpdateProjectRequest,
        crate::dto::ProjectResponse,
        crate::dto::ProjectRecordResponse,
        crate::dto::CreateClientRequest,
        crate::dto::UpdateClientRequest,
        crate::dto::ClientResponse,
        crate::dto::ClientRecordResponse,
        crate::dto::ContactRequest,
        crate::dto::ContactSubmissionResponse,
        crate::dto::ContactRecordResponse,
        crate::dto::SubscribeRequest,
        crate::dto::SubscriberResponse,
        crate::dto::SubscriberRecordResponse,
        crate::dto::DeletedResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "public", description = "Public site endpoints"),
        (name = "projects", description = "Project management"),
        (name = "clients", description = "Client testimonial management"),
        (name = "contact", description = "Contact form submissions"),
        (name = "newsletter", description = "Newsletter subscribers"),
        (name = "system", description = "Health and system status"),
    )
)]
pub struct ApiDoc;
