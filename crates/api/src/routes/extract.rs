//! Structured product extraction.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use openai_brain::{preview, ProductRecord};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DescriptionParams {
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub description: String,
    pub product_data: ProductRecord,
}

/// `POST /extract-product/?description=...`
pub async fn extract_product(
    State(state): State<AppState>,
    params: std::result::Result<Query<DescriptionParams>, QueryRejection>,
) -> Result<Json<ProductResponse>> {
    let Query(DescriptionParams { description }) = params?;
    info!("Received product description: {}...", preview(&description));

    let product_data = state.brain.extract_product(&description).await?;

    Ok(Json(ProductResponse {
        description,
        product_data,
    }))
}
