use crate::data::{ContactPayload, ContactWeb, DeletedResponse};
use crate::handlers;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Contacts API", description = "Manage a collection of contacts"),
    paths(
        handlers::contacts::return_contacts,
        handlers::contacts::return_contact,
        handlers::contacts::new_contact,
        handlers::contacts::edit_contact,
        handlers::contacts::remove_contact,
    ),
    components(schemas(ContactWeb, ContactPayload, DeletedResponse))
)]
pub struct ApiDocs;
