use anyhow::Result;
use log::info;
use serde_json::Value;

use crate::api::PlantApi;
use crate::model::Pagination;

/// List plants, one page at a time.
#[tracing::instrument(skip(api))]
pub async fn list<A: PlantApi + ?Sized>(
    api: &A,
    skip: Option<u32>,
    limit: Option<u32>,
) -> Result<Value> {
    api.list_plants(Pagination::new(skip, limit)).await
}

/// Search plants by name.
#[tracing::instrument(skip(api))]
pub async fn filter<A: PlantApi + ?Sized>(api: &A, name: &str) -> Result<Value> {
    api.filter_plants(name.trim()).await
}

#[tracing::instrument(skip(api))]
pub async fn like<A: PlantApi + ?Sized>(api: &A, plant_id: u32) -> Result<Value> {
    let response = api.like_plant(plant_id).await?;
    info!("Liked plant {}", plant_id);
    Ok(response)
}

#[tracing::instrument(skip(api))]
pub async fn unlike<A: PlantApi + ?Sized>(api: &A, plant_id: u32) -> Result<Value> {
    let response = api.unlike_plant(plant_id).await?;
    info!("Removed like from plant {}", plant_id);
    Ok(response)
}

#[tracing::instrument(skip(api))]
pub async fn likes<A: PlantApi + ?Sized>(api: &A) -> Result<Value> {
    api.liked_plants().await
}
