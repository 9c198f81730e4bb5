use crate::{
    abstract_trait::product::{repository::DynProductRepository, service::ProductServiceTrait},
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::{
            api::ApiResponse,
            product::{CreateProductResponse, ProductResponse},
        },
    },
};
use async_trait::async_trait;
use axum::http::StatusCode;
use shared::errors::{RepositoryError, ServiceError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductService {
    repository: DynProductRepository,
}

impl ProductService {
    pub fn new(repository: DynProductRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        info!("🔍 Finding all products");

        let products = self.repository.find_all().await?;

        let data = products.into_iter().map(ProductResponse::from).collect();

        Ok(ApiResponse {
            success: true,
            message: "Products retrieved successfully.".to_string(),
            status: StatusCode::OK.as_u16() as i32,
            data: Some(data),
        })
    }

    async fn find_all_counted(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let mut response = self.find_all().await?;

        let count = response.data.as_ref().map(Vec::len).unwrap_or(0);
        response.message = format!("Found {count} products.");

        Ok(response)
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🆔 Finding product by ID: {id}");

        let product = self.repository.find_by_id(id).await?;

        // A missing product is still a 200 with no data here; only update
        // and delete surface absence as an error.
        Ok(match product {
            Some(product) => ApiResponse {
                success: true,
                message: "Product retrieved successfully.".to_string(),
                status: StatusCode::OK.as_u16() as i32,
                data: Some(ProductResponse::from(product)),
            },
            None => ApiResponse {
                success: true,
                message: format!("Product with ID {id} not found."),
                status: StatusCode::OK.as_u16() as i32,
                data: None,
            },
        })
    }

    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<CreateProductResponse>, ServiceError> {
        info!("📦 Creating product: {}", req.name);

        let req = CreateProductRequest {
            price: req.price.round_dp(2),
            ..req.clone()
        };

        let product = self.repository.create(&req).await.map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", req.name, err);
            ServiceError::from(err)
        })?;

        Ok(ApiResponse {
            success: true,
            message: "The product has been created successfully.".to_string(),
            status: StatusCode::CREATED.as_u16() as i32,
            data: Some(CreateProductResponse {
                product_id: product.product_id,
            }),
        })
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<()>, ServiceError> {
        info!("🔄 Updating product with ID: {id}");

        if req.id != id {
            return Err(ServiceError::IdMismatch {
                path: id,
                body: req.id,
            });
        }

        let req = UpdateProductRequest {
            price: req.price.round_dp(2),
            ..req.clone()
        };

        match self.repository.update(&req).await {
            Ok(_) => Ok(ApiResponse {
                success: true,
                message: format!("Product with ID {id} updated successfully."),
                status: StatusCode::OK.as_u16() as i32,
                data: None,
            }),
            Err(RepositoryError::NotFound) => Err(ServiceError::NotFound(format!(
                "Product with ID {id} not found."
            ))),
            Err(err) => {
                error!("❌ Failed to update product {id}: {:?}", err);
                Err(ServiceError::from(err))
            }
        }
    }

    async fn delete_product(&self, id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Deleting product with ID: {id}");

        match self.repository.delete(id).await {
            Ok(()) => Ok(()),
            Err(RepositoryError::NotFound) => Err(ServiceError::NotFound(format!(
                "Product with ID {id} not found."
            ))),
            Err(err) => {
                error!("❌ Failed to delete product {id}: {:?}", err);
                Err(ServiceError::from(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::product::repository::MockProductRepositoryTrait;
    use crate::model::product::Product as ProductModel;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn sample_model(id: i32) -> ProductModel {
        ProductModel {
            product_id: id,
            name: "Pen".to_string(),
            description: "Blue".to_string(),
            price: Decimal::new(150, 2),
            image: "pen.jpg".to_string(),
        }
    }

    fn create_request(price: Decimal) -> CreateProductRequest {
        CreateProductRequest {
            name: "Pen".to_string(),
            description: "Blue".to_string(),
            price,
            image: "pen.jpg".to_string(),
        }
    }

    fn update_request(id: i32, price: Decimal) -> UpdateProductRequest {
        UpdateProductRequest {
            id,
            name: "Pen".to_string(),
            description: "Black".to_string(),
            price,
            image: "pen.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn update_with_mismatched_ids_never_touches_storage() {
        // No expectations on the mock: any repository call panics.
        let repo = MockProductRepositoryTrait::new();
        let service = ProductService::new(Arc::new(repo));

        let result = service
            .update_product(1, &update_request(2, Decimal::new(175, 2)))
            .await;

        match result {
            Err(ServiceError::IdMismatch { path, body }) => {
                assert_eq!(path, 1);
                assert_eq!(body, 2);
            }
            other => panic!("expected IdMismatch, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_on_missing_id_is_not_found() {
        let mut repo = MockProductRepositoryTrait::new();
        repo.expect_update()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        let service = ProductService::new(Arc::new(repo));

        let result = service
            .update_product(42, &update_request(42, Decimal::new(175, 2)))
            .await;

        match result {
            Err(ServiceError::NotFound(msg)) => assert!(msg.contains("42")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn delete_on_missing_id_is_not_found() {
        let mut repo = MockProductRepositoryTrait::new();
        repo.expect_delete()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        let service = ProductService::new(Arc::new(repo));

        match service.delete_product(7).await {
            Err(ServiceError::NotFound(msg)) => assert!(msg.contains("7")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_normalizes_price_to_two_decimals() {
        let mut repo = MockProductRepositoryTrait::new();
        repo.expect_create()
            .withf(|req| req.price == Decimal::new(176, 2))
            .times(1)
            .returning(|_| Ok(sample_model(1)));

        let service = ProductService::new(Arc::new(repo));

        let response = service
            .create_product(&create_request(Decimal::new(1759, 3)))
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.status, 201);
        assert_eq!(response.data.unwrap().product_id, 1);
    }

    #[tokio::test]
    async fn find_by_id_on_missing_id_is_empty_success() {
        let mut repo = MockProductRepositoryTrait::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = ProductService::new(Arc::new(repo));

        let response = service.find_by_id(99).await.unwrap();

        assert!(response.success);
        assert_eq!(response.status, 200);
        assert!(response.data.is_none());
        assert!(response.message.contains("99"));
    }

    #[tokio::test]
    async fn find_all_counted_reports_count_in_message() {
        let mut repo = MockProductRepositoryTrait::new();
        repo.expect_find_all()
            .times(1)
            .returning(|| Ok(vec![sample_model(1), sample_model(2)]));

        let service = ProductService::new(Arc::new(repo));

        let response = service.find_all_counted().await.unwrap();

        assert_eq!(response.message, "Found 2 products.");
        assert_eq!(response.data.unwrap().len(), 2);
    }
}
