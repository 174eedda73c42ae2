//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;

use kernel::id::ProductId;
use platform::cache::CacheStore;
use platform::extract::{JsonBody, PathParams};

use crate::application::{
    CreateProductInput, CreateProductUseCase, DeleteProductUseCase, GetProductUseCase,
    ListProductsUseCase,
};
use crate::domain::product::Product;
use crate::domain::repository::ProductRepository;
use crate::error::CatalogResult;
use crate::presentation::dto::CreateProductRequest;

/// Shared state for catalog handlers
pub struct CatalogAppState<R, C>
where
    R: ProductRepository + Send + Sync + 'static,
    C: CacheStore + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub cache: Arc<C>,
}

impl<R, C> Clone for CatalogAppState<R, C>
where
    R: ProductRepository + Send + Sync + 'static,
    C: CacheStore + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            cache: self.cache.clone(),
        }
    }
}

/// POST /products
pub async fn create_product<R, C>(
    State(state): State<CatalogAppState<R, C>>,
    JsonBody(req): JsonBody<CreateProductRequest>,
) -> CatalogResult<(StatusCode, Json<Product>)>
where
    R: ProductRepository + Send + Sync + 'static,
    C: CacheStore + Send + Sync + 'static,
{
    let use_case = CreateProductUseCase::new(state.repo.clone());
    let product = use_case
        .execute(CreateProductInput {
            name: req.name,
            description: req.description,
            price: req.price,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /products
pub async fn list_products<R, C>(
    State(state): State<CatalogAppState<R, C>>,
) -> CatalogResult<Json<Vec<Product>>>
where
    R: ProductRepository + Send + Sync + 'static,
    C: CacheStore + Send + Sync + 'static,
{
    let use_case = ListProductsUseCase::new(state.repo.clone());
    Ok(Json(use_case.execute().await?))
}

/// GET /products/{id}
pub async fn get_product<R, C>(
    State(state): State<CatalogAppState<R, C>>,
    PathParams(id): PathParams<ProductId>,
) -> CatalogResult<Json<Product>>
where
    R: ProductRepository + Send + Sync + 'static,
    C: CacheStore + Send + Sync + 'static,
{
    let use_case = GetProductUseCase::new(state.repo.clone(), state.cache.clone());
    Ok(Json(use_case.execute(id).await?))
}

/// DELETE /products/{id}
pub async fn delete_product<R, C>(
    State(state): State<CatalogAppState<R, C>>,
    PathParams(id): PathParams<ProductId>,
) -> CatalogResult<StatusCode>
where
    R: ProductRepository + Send + Sync + 'static,
    C: CacheStore + Send + Sync + 'static,
{
    let use_case = DeleteProductUseCase::new(state.repo.clone(), state.cache.clone());
    use_case.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /health
pub async fn health() -> &'static str {
    "product-service OK"
}
