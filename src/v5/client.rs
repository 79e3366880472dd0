/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v5::errors::PinterestError;
use crate::v5::{AccessToken, ApiClient, ApiConfig, ApiParams};
use async_stream::try_stream;
use futures::Stream;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Handle used by all of the resource types to talk to the API.
///
/// Cloning is cheap, the underlying connection pool is shared.
///
/// ```rust,no_run
/// use pinterest::v5::{AccessToken, ApiConfig, Client, Scope, UserAccount};
///
/// async fn whoami() -> Result<(), pinterest::v5::PinterestError> {
///     let config = ApiConfig::from_env()?;
///     let mut token = AccessToken::new(&config, None);
///     token.fetch(Some(&[Scope::ReadUsers]), true).await?;
///     let client = Client::new(&config, &token)?;
///     println!("{}", UserAccount::get(client).await?);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    api_client: Arc<ApiClient>,
}

impl Client {
    /// Creates a client for the configured API host using the fetched access token
    pub fn new(config: &ApiConfig, access_token: &AccessToken) -> Result<Self, PinterestError> {
        Self::from_token(&config.api_uri, access_token.access_token()?)
    }

    /// Creates a client from a raw bearer token
    pub fn from_token(api_uri: &str, access_token: &str) -> Result<Self, PinterestError> {
        Ok(Self {
            api_client: Arc::new(ApiClient::new(api_uri, access_token)?),
        })
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&ApiParams<'_>>,
    ) -> Result<T, PinterestError> {
        self.api_client.get(path, params).await
    }

    pub async fn post<T: DeserializeOwned, D: Serialize + ?Sized>(
        &self,
        path: &str,
        data: &D,
    ) -> Result<T, PinterestError> {
        self.api_client.post(path, data).await
    }

    pub async fn put<T: DeserializeOwned, D: Serialize + ?Sized>(
        &self,
        path: &str,
        data: &D,
    ) -> Result<T, PinterestError> {
        self.api_client.put(path, data).await
    }

    pub async fn patch<T: DeserializeOwned, D: Serialize + ?Sized>(
        &self,
        path: &str,
        data: &D,
    ) -> Result<T, PinterestError> {
        self.api_client.patch(path, data).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), PinterestError> {
        self.api_client.delete(path).await
    }

    /// Pages through a list endpoint and returns its items as a stream.
    ///
    /// Pinterest returns an opaque `bookmark` with every page that has a successor. The
    /// bookmark is added to the original query to get the next page. Paging stops when there
    /// is no bookmark or when a bookmarked page comes back empty.
    pub fn items<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&ApiParams<'_>>,
    ) -> impl Stream<Item = Result<T, PinterestError>> + use<T> {
        let api_client = self.api_client.clone();
        let first_url = self.api_client.url(path, params);

        try_stream! {
            let base_url = first_url?;
            let mut bookmark: Option<String> = None;
            loop {
                let mut req_url = base_url.clone();
                if let Some(bookmark) = &bookmark {
                    req_url.query_pairs_mut().append_pair("bookmark", bookmark);
                }
                let page = api_client.get_url::<Page<T>>(req_url).await?;
                let items = page.items.unwrap_or_default();

                // An empty page after a bookmark means something went wrong upstream
                if bookmark.is_some() && items.is_empty() {
                    break;
                }
                for item in items {
                    yield item
                }

                bookmark = page.bookmark.filter(|b| !b.is_empty());
                if bookmark.is_none() {
                    break;
                }
            }
        }
    }
}

// One page of a list response
#[derive(Deserialize, Debug)]
struct Page<T> {
    items: Option<Vec<T>>,

    #[serde(default)]
    bookmark: Option<String>,
}
