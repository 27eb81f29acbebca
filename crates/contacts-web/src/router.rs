use crate::api_docs::ApiDocs;
use crate::constants::{CONTACTS_BASE_PATH, MAX_JSON_BODY_BYTES};
use crate::handlers;
use contacts_api::service::ServiceContext;
use log::info;
use rocket::data::ByteUnit;
use rocket::figment::Figment;
use rocket::http::Method;
use rocket::serde::json::Json;
use rocket::{Build, Request, Rocket, catch, catchers, routes};
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use serde::Serialize;
use serde_json::json;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Serialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(error: &'static str, message: String, code: u16) -> Self {
        Self {
            error,
            message,
            code,
        }
    }

    pub fn to_json_string(&self) -> String {
        json!({ "error": self.error, "message": self.message }).to_string()
    }

    fn into_json(self) -> Json<serde_json::Value> {
        Json(json!({ "error": self.error, "message": self.message }))
    }
}

pub fn rocket_main(context: ServiceContext) -> Result<Rocket<Build>, rocket_cors::Error> {
    let conf = context.config.clone();
    let config = Figment::from(rocket::Config::default())
        .merge(("limits.json", ByteUnit::Byte(MAX_JSON_BODY_BYTES)))
        .merge(("port", conf.http_port))
        .merge(("address", conf.http_address.to_owned()));

    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::all())
        .allowed_headers(AllowedHeaders::all())
        .allowed_methods(
            vec![
                Method::Get,
                Method::Post,
                Method::Put,
                Method::Delete,
                Method::Options,
            ]
            .into_iter()
            .map(From::from)
            .collect(),
        )
        .to_cors()?;

    let rocket = rocket::custom(config)
        .attach(cors.clone())
        // catchers for CORS and API errors
        .mount("/", rocket_cors::catch_all_options_routes())
        .register(
            "/",
            catchers![bad_request, not_found, unprocessable_entity, internal_error],
        )
        .manage(context)
        .manage(cors)
        .mount(
            CONTACTS_BASE_PATH,
            routes![
                handlers::contacts::return_contacts,
                handlers::contacts::return_contact,
                handlers::contacts::new_contact,
                handlers::contacts::edit_contact,
                handlers::contacts::remove_contact,
            ],
        )
        .mount(
            "/",
            SwaggerUi::new("/swagger-ui/<_..>").url("/api-docs/openapi.json", ApiDocs::openapi()),
        );

    info!("HTTP Server Listening on {}", conf.http_listen_url());

    Ok(rocket)
}

#[catch(400)]
fn bad_request(req: &Request) -> Json<serde_json::Value> {
    ErrorResponse::new(
        "bad_request",
        format!("The request to '{}' could not be parsed", req.uri()),
        400,
    )
    .into_json()
}

#[catch(404)]
fn not_found(req: &Request) -> Json<serde_json::Value> {
    ErrorResponse::new(
        "not_found",
        format!("We couldn't find the requested path '{}'", req.uri()),
        404,
    )
    .into_json()
}

#[catch(422)]
fn unprocessable_entity(req: &Request) -> Json<serde_json::Value> {
    ErrorResponse::new(
        "unprocessable_entity",
        format!(
            "The body sent to '{}' must contain firstName, lastName, email and country",
            req.uri()
        ),
        422,
    )
    .into_json()
}

#[catch(500)]
fn internal_error(req: &Request) -> Json<serde_json::Value> {
    ErrorResponse::new(
        "internal_error",
        format!("Request to '{}' failed", req.uri()),
        500,
    )
    .into_json()
}
