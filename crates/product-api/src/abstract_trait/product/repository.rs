use crate::{
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductRepository = Arc<dyn ProductRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError>;
    async fn create(&self, req: &CreateProductRequest) -> Result<ProductModel, RepositoryError>;
    async fn update(&self, req: &UpdateProductRequest) -> Result<ProductModel, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
