use anyhow::Result;
use log::info;
use serde_json::Value;

use crate::api::PlantApi;
use crate::model::Rating;

/// Rate a received recommendation. The rating is checked before anything is sent.
#[tracing::instrument(skip(api))]
pub async fn rate<A: PlantApi + ?Sized>(api: &A, submission_id: u32, rating: u8) -> Result<Value> {
    let rating = Rating::try_from(rating)?;
    let response = api.rate_recommendation(submission_id, rating).await?;
    info!("Rated submission {} with {}", submission_id, rating);
    Ok(response)
}

/// List past recommendations; `rated_only` hides the ones nobody rated yet.
#[tracing::instrument(skip(api))]
pub async fn list<A: PlantApi + ?Sized>(api: &A, rated_only: bool) -> Result<Value> {
    api.list_recommendations(!rated_only).await
}

/// Delete every stored submission, recommendation and like on the backend.
#[tracing::instrument(skip(api))]
pub async fn clear<A: PlantApi + ?Sized>(api: &A) -> Result<Value> {
    let response = api.clear_recommendation_data().await?;
    info!("Cleared stored recommendation data");
    Ok(response)
}
