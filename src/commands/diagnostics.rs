//! Backend health checks.

use anyhow::Result;
use serde_json::Value;

use crate::api::PlantApi;

#[tracing::instrument(skip(api))]
pub async fn test<A: PlantApi + ?Sized>(api: &A) -> Result<Value> {
    api.test_endpoint().await
}

#[tracing::instrument(skip(api))]
pub async fn columns<A: PlantApi + ?Sized>(api: &A) -> Result<Value> {
    api.dataset_columns().await
}
