//! Remote HTTP document store
//!
//! Talks to a document endpoint that exposes one JSON document per user:
//!
//! - `GET  {base}/users/{id}`: 200 with the document, 404 if it doesn't exist
//! - `PUT  {base}/users/{id}`: replace the document with the request body
//!
//! No retry and no backoff; a failed request is returned to the caller.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};

use crate::error::{HouseholdError, HouseholdResult};
use crate::models::AccountRecord;

use super::document::{validate_user_id, DocumentStore};

const UA: &str = concat!("household-account/", env!("CARGO_PKG_VERSION"));

/// Document store behind an HTTP endpoint
pub struct RemoteStore {
    base_url: Url,
    client: Client,
}

impl RemoteStore {
    /// Create a store for the endpoint rooted at `base_url`
    pub fn new(base_url: &str) -> HouseholdResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent(UA)
            .build()?;

        Self::with_client(base_url, client)
    }

    /// Create a store that sends its requests through `client`
    pub fn with_client(base_url: &str, client: Client) -> HouseholdResult<Self> {
        let mut base_url = Url::parse(base_url.trim()).map_err(|e| {
            HouseholdError::Config(format!("Invalid remote URL {:?}: {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(HouseholdError::Config(format!(
                "Remote URL cannot hold a path: {}",
                base_url
            )));
        }
        base_url.set_query(None);
        base_url.set_fragment(None);

        Ok(Self { base_url, client })
    }

    /// URL of the document for `user_id`
    pub fn document_url(&self, user_id: &str) -> HouseholdResult<Url> {
        validate_user_id(user_id)?;

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                HouseholdError::Config(format!("Remote URL cannot hold a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .push("users")
            .push(user_id);
        Ok(url)
    }
}

impl DocumentStore for RemoteStore {
    fn fetch(&self, user_id: &str) -> HouseholdResult<Option<AccountRecord>> {
        let url = self.document_url(user_id)?;
        let resp = self.client.get(url.as_str()).send()?;

        match resp.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let record: AccountRecord = resp.json().map_err(|e| {
                    HouseholdError::Remote(format!("Failed to parse document at {}: {}", url, e))
                })?;
                Ok(Some(record))
            }
            status => Err(HouseholdError::Remote(format!(
                "GET {} returned {}",
                url, status
            ))),
        }
    }

    fn replace(&self, user_id: &str, record: &AccountRecord) -> HouseholdResult<()> {
        let url = self.document_url(user_id)?;
        let resp = self.client.put(url.as_str()).json(record).send()?;

        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(HouseholdError::Remote(format!(
                "PUT {} returned {}",
                url, status
            )))
        }
    }

    fn describe(&self) -> String {
        self.base_url.as_str().trim_end_matches('/').to_string()
    }
}
