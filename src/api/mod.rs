//! Plant recommendation API.
//!
//! Each operation maps to exactly one backend endpoint and hands back the
//! response body as parsed JSON, untouched. Non-success statuses surface as
//! [`crate::http::HttpError`] inside the returned `anyhow::Error`.

mod client;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::model::{
    FreeTextSubmission, Pagination, QuestionnaireSubmission, Rating, RecommendationCounts,
    UserStudySubmission,
};

pub use client::PlantApiClient;

/// Operations offered by the plant recommendation backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlantApi: Send + Sync {
    /// `GET /plants/all?skip&limit`
    async fn list_plants(&self, page: Pagination) -> Result<Value>;

    /// `GET /plants/filter?name=`
    async fn filter_plants(&self, name: &str) -> Result<Value>;

    /// `POST /plants/{id}/like`
    async fn like_plant(&self, plant_id: u32) -> Result<Value>;

    /// `DELETE /plants/{id}/like`
    async fn unlike_plant(&self, plant_id: u32) -> Result<Value>;

    /// `GET /plants/all/likes`
    async fn liked_plants(&self) -> Result<Value>;

    /// `GET /questions/all`
    async fn list_questions(&self) -> Result<Value>;

    /// `POST /questions/` with the answers as body.
    async fn submit_questionnaire(
        &self,
        submission: &QuestionnaireSubmission,
        counts: RecommendationCounts,
    ) -> Result<Value>;

    /// `POST /questions/free_text` with the text as body.
    async fn submit_free_text(
        &self,
        submission: &FreeTextSubmission,
        counts: RecommendationCounts,
    ) -> Result<Value>;

    /// `GET /user_study/questions`
    async fn user_study_questions(&self) -> Result<Value>;

    /// `POST /user_study/submit`
    async fn submit_user_study(&self, submission: &UserStudySubmission) -> Result<Value>;

    /// `POST /recommendation/{id}/submit?rating=`
    async fn rate_recommendation(&self, submission_id: u32, rating: Rating) -> Result<Value>;

    /// `GET /recommendation/all?include_unrated=`
    async fn list_recommendations(&self, include_unrated: bool) -> Result<Value>;

    /// `DELETE /recommendation/metadata`: wipes stored submissions, recommendations and likes.
    async fn clear_recommendation_data(&self) -> Result<Value>;

    /// `GET /test`
    async fn test_endpoint(&self) -> Result<Value>;

    /// `GET /data/columns`
    async fn dataset_columns(&self) -> Result<Value>;
}
