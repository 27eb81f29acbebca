pub mod api;
pub mod config;
pub mod terminal;
pub mod view;

use thiserror::Error;

pub use api::{ContactApi, HttpContactApi};
pub use contacts_core::{Contact, ContactFields};
pub use view::{ContactsView, DraftField};

/// Generic client result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generic client error type
#[derive(Debug, Error)]
pub enum Error {
    /// the draft can't be submitted, because the named fields are empty
    #[error("Please fill all fields, missing: {}", .0.join(", "))]
    Validation(Vec<&'static str>),

    /// the server doesn't know the contact with the given id
    #[error("Contact {0} not found")]
    NotFound(String),

    /// the server answered with a non-success status
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// the request could not be sent or the response could not be read
    #[error("Http client error: {0}")]
    Http(#[from] reqwest::Error),

    /// the server applied the change to the contact, but reloading the list failed
    #[error("Contact {id} was changed, but the list could not be reloaded: {source}")]
    Reload {
        id: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid backend url: {0}")]
    InvalidBaseUrl(String),
}
