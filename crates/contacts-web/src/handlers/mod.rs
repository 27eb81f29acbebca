use crate::router::ErrorResponse;
use contacts_api::service::Error;
use log::error;
use rocket::Response;
use rocket::http::{ContentType, Status};
use rocket::response::Responder;
use std::io::Cursor;

pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub mod contacts;

impl<'r, 'o: 'r> Responder<'r, 'o> for crate::error::Error {
    fn respond_to(self, req: &rocket::Request) -> rocket::response::Result<'o> {
        match self {
            crate::error::Error::Service(e) => ServiceError(e).respond_to(req),
        }
    }
}

pub struct ServiceError(Error);

impl<'r, 'o: 'r> Responder<'r, 'o> for ServiceError {
    fn respond_to(self, _req: &rocket::Request) -> rocket::response::Result<'o> {
        match self.0 {
            Error::NotFound => build_error_response(ErrorResponse::new(
                "not_found",
                "not found".to_string(),
                404,
            )),
            Error::Validation(msg) => {
                build_error_response(ErrorResponse::new("bad_request", msg, 400))
            }
            // storage faults are logged and reported without internals, the server keeps
            // handling other requests
            Error::Persistence(e) => {
                error!("{e}");
                build_error_response(ErrorResponse::new(
                    "internal_error",
                    "The contact store could not complete the request".to_string(),
                    500,
                ))
            }
        }
    }
}

fn build_error_response<'o>(err_resp: ErrorResponse) -> rocket::response::Result<'o> {
    let status = Status::from_code(err_resp.code).unwrap_or(Status::InternalServerError);
    let body = err_resp.to_json_string();
    Response::build()
        .status(status)
        .header(ContentType::JSON)
        .sized_body(body.len(), Cursor::new(body))
        .ok()
}
