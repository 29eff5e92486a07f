use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::errors::{CoreError, Result};
use crate::store::{Query, Resource};

/// Async client for the remote collection store.
///
/// One logical request per call; failures surface once and are never retried
/// here. Dropping a pending future cancels the request.
#[derive(Debug, Clone)]
pub struct RestStore {
    base_url: String,
    client: reqwest::Client,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url: String = base_url.into();
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the collection records matching the query.
    pub async fn list<T: Resource>(&self, query: &Query) -> Result<Vec<T>> {
        debug!(collection = T::COLLECTION, "listing records");
        let response = self
            .client
            .get(self.collection_url(T::COLLECTION))
            .query(query.params())
            .send()
            .await?;
        decode(response, T::COLLECTION).await
    }

    /// Fetches one record by id. A remote 404 maps to [`CoreError::NotFound`].
    pub async fn get<T: Resource>(&self, id: &str) -> Result<T> {
        debug!(collection = T::COLLECTION, id, "fetching record");
        let response = self
            .client
            .get(self.item_url(T::COLLECTION, id))
            .send()
            .await?;
        decode(response, &format!("{}/{}", T::COLLECTION, id)).await
    }

    /// Stores a new record and returns the remote echo.
    pub async fn create<T: Resource>(&self, record: &T) -> Result<T> {
        debug!(collection = T::COLLECTION, id = record.id(), "creating record");
        let response = self
            .client
            .post(self.collection_url(T::COLLECTION))
            .json(record)
            .send()
            .await?;
        decode(response, T::COLLECTION).await
    }

    /// Applies a partial update to one record and returns the updated copy.
    pub async fn patch<T: Resource, P: Serialize>(&self, id: &str, patch: &P) -> Result<T> {
        debug!(collection = T::COLLECTION, id, "patching record");
        let response = self
            .client
            .patch(self.item_url(T::COLLECTION, id))
            .json(patch)
            .send()
            .await?;
        decode(response, &format!("{}/{}", T::COLLECTION, id)).await
    }

    /// Deletes one record.
    pub async fn delete<T: Resource>(&self, id: &str) -> Result<()> {
        debug!(collection = T::COLLECTION, id, "deleting record");
        let response = self
            .client
            .delete(self.item_url(T::COLLECTION, id))
            .send()
            .await?;
        check_status(&response, &format!("{}/{}", T::COLLECTION, id))?;
        Ok(())
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    fn item_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, collection, id)
    }
}

fn check_status(response: &Response, what: &str) -> Result<()> {
    match response.status() {
        StatusCode::NOT_FOUND => Err(CoreError::NotFound(what.to_string())),
        status if status.is_success() => Ok(()),
        status => Err(CoreError::UnexpectedStatus(status)),
    }
}

async fn decode<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    check_status(&response, what)?;
    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let store = RestStore::new("http://localhost:3001/", Duration::from_secs(5)).unwrap();
        assert_eq!(store.base_url(), "http://localhost:3001");
    }
}
