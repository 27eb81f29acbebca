use crate::{Error, Result};
use async_trait::async_trait;
use contacts_core::{Contact, ContactFields};
use log::{debug, error};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use url::Url;

const CONTACTS_PATH: &str = "contacts";

/// The requests the client view can make against the contacts server
#[async_trait]
pub trait ContactApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Contact>>;
    async fn create(&self, fields: &ContactFields) -> Result<Contact>;
    async fn update(&self, id: &str, fields: &ContactFields) -> Result<Contact>;
    async fn delete(&self, id: &str) -> Result<()>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Talks to the contacts server over HTTP with JSON bodies
#[derive(Clone)]
pub struct HttpContactApi {
    client: Client,
    base_url: Url,
}

impl HttpContactApi {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Builds `<base>/contacts` or `<base>/contacts/<id>`, percent-encoding the id
    pub fn contacts_url(&self, id: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::InvalidBaseUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().push(CONTACTS_PATH);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }
}

async fn handle_response<T: DeserializeOwned>(res: Response, id: Option<&str>) -> Result<T> {
    let status = res.status();
    if status.is_success() {
        return Ok(res.json::<T>().await?);
    }
    if let (StatusCode::NOT_FOUND, Some(id)) = (status, id) {
        return Err(Error::NotFound(id.to_owned()));
    }
    let message = match res.json::<ErrorBody>().await {
        Ok(body) if !body.message.is_empty() => body.message,
        _ => status.canonical_reason().unwrap_or("unknown error").to_string(),
    };
    error!("Request failed with {status}: {message}");
    Err(Error::Server {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl ContactApi for HttpContactApi {
    async fn list(&self) -> Result<Vec<Contact>> {
        let url = self.contacts_url(None)?;
        debug!("GET {url}");
        let res = self.client.get(url).send().await?;
        handle_response(res, None).await
    }

    async fn create(&self, fields: &ContactFields) -> Result<Contact> {
        let url = self.contacts_url(None)?;
        debug!("POST {url}");
        let res = self.client.post(url).json(fields).send().await?;
        handle_response(res, None).await
    }

    async fn update(&self, id: &str, fields: &ContactFields) -> Result<Contact> {
        let url = self.contacts_url(Some(id))?;
        debug!("PUT {url}");
        let res = self.client.put(url).json(fields).send().await?;
        handle_response(res, Some(id)).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let url = self.contacts_url(Some(id))?;
        debug!("DELETE {url}");
        let res = self.client.delete(url).send().await?;
        let _: IgnoredAny = handle_response(res, Some(id)).await?;
        Ok(())
    }
}
