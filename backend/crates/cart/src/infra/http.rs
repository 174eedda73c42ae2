//! HTTP adapters for the catalog and order services

use kernel::id::ProductId;
use platform::http::join_url;
use reqwest::StatusCode;

use crate::domain::order::OrderDraft;
use crate::domain::ports::{CatalogLookup, OrderSubmitter};
use crate::domain::product::Product;
use crate::error::RemoteError;

/// `GET {base}/products/{id}`; anything but 200 is a failure
#[derive(Clone)]
pub struct HttpCatalogLookup {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogLookup {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl CatalogLookup for HttpCatalogLookup {
    async fn product(&self, id: ProductId) -> Result<Product, RemoteError> {
        let url = join_url(&self.base_url, &format!("/products/{id}"));
        let response = self.client.get(&url).send().await?;

        if response.status() != StatusCode::OK {
            return Err(RemoteError::Status {
                service: "product-service",
                status: response.status().as_u16(),
            });
        }

        response
            .json::<Product>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

/// `POST {base}/orders`; 200 and 201 count as accepted
#[derive(Clone)]
pub struct HttpOrderSubmitter {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOrderSubmitter {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl OrderSubmitter for HttpOrderSubmitter {
    async fn submit(&self, order: &OrderDraft) -> Result<(), RemoteError> {
        let url = join_url(&self.base_url, "/orders");
        let response = self.client.post(&url).json(order).send().await?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => Ok(()),
            status => Err(RemoteError::Status {
                service: "order-service",
                status: status.as_u16(),
            }),
        }
    }
}
