use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Pen")]
    pub name: String,

    #[schema(example = "Blue ballpoint pen")]
    pub description: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 1.5)]
    pub price: Decimal,

    #[schema(example = "pen.jpg")]
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    /// Must match the ID in the request path. Absent defaults to 0, which
    /// never matches a stored row.
    #[serde(default)]
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Pen")]
    pub name: String,

    #[schema(example = "Black ballpoint pen")]
    pub description: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 1.75)]
    pub price: Decimal,

    #[schema(example = "pen.jpg")]
    pub image: String,
}
