//! Orchestrates the two-stage fetch: list categories, then one joke each.
//!
//! # Design
//! Per-category failures must not abort the batch, so this module is the
//! boundary where they are absorbed: a `null` or undecodable joke payload
//! becomes `Ok(None)` and contributes nothing. Hard client failures
//! (`ApiError`) are a different matter: they propagate out of every method
//! here and abort the whole run. The same split applies to the category
//! listing: a response of the wrong shape soft-fails to an empty list,
//! while an HTTP or transport error propagates.
//!
//! Calls are made one at a time, in the order the API returned the
//! categories, so the output order is reproducible for a given listing.

use log::{error, info};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::JokeRecord;

const CATEGORIES_ENDPOINT: &str = "categories";
const RANDOM_ENDPOINT: &str = "random";

/// Sequential collector over an API-supplied category list.
pub struct Collector {
    client: ApiClient,
}

impl Collector {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the category list.
    ///
    /// A response that is not a non-empty array of strings logs an error
    /// and yields an empty list; client errors propagate.
    pub fn all_categories(&self) -> Result<Vec<String>, ApiError> {
        info!("fetching category list");
        let data = self.client.get(CATEGORIES_ENDPOINT, &[])?;

        match serde_json::from_value::<Vec<String>>(data) {
            Ok(categories) if !categories.is_empty() => {
                info!("found {} categories", categories.len());
                Ok(categories)
            }
            _ => {
                error!("category listing was empty or had an unexpected shape, continuing with none");
                Ok(Vec::new())
            }
        }
    }

    /// Fetch one joke for `category`.
    ///
    /// `Ok(None)` means the category produced no usable joke (a `null`
    /// response or an undecodable payload); that is not an error. The
    /// record's `category` field is the requested one, whatever labels the
    /// payload itself carried.
    pub fn joke_for_category(&self, category: &str) -> Result<Option<JokeRecord>, ApiError> {
        info!("fetching joke for category '{category}'");
        let data = self.client.get(RANDOM_ENDPOINT, &[("category", category)])?;

        if data.is_null() {
            return Ok(None);
        }
        match JokeRecord::from_value(category, &data) {
            Some(record) => Ok(Some(record)),
            None => {
                error!("could not map joke payload for category '{category}', skipping it");
                Ok(None)
            }
        }
    }

    /// Run the whole collection: one joke per category, skipping categories
    /// that produced none. An empty category list short-circuits to an
    /// empty batch.
    pub fn collect_all_jokes(&self) -> Result<Vec<JokeRecord>, ApiError> {
        let categories = self.all_categories()?;
        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let mut jokes = Vec::with_capacity(categories.len());
        for category in &categories {
            if let Some(joke) = self.joke_for_category(category)? {
                jokes.push(joke);
            }
        }

        info!(
            "collection finished: {} jokes from {} categories",
            jokes.len(),
            categories.len()
        );
        Ok(jokes)
    }
}
