//! reqwest-backed implementation of [`PlantApi`].

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::http::HttpClient;
use crate::model::{
    FreeTextSubmission, Pagination, QuestionnaireSubmission, Rating, RecommendationCounts,
    UserStudySubmission,
};

use super::PlantApi;

/// Client for the plant recommendation backend.
#[derive(Clone, Debug)]
pub struct PlantApiClient {
    http_client: HttpClient,
    config: ApiConfig,
}

impl PlantApiClient {
    /// Builds a client with its own reqwest connection pool.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http_client = HttpClient::new(config.build_client()?);
        Ok(Self::from_http_client(http_client, config))
    }

    /// Create from an existing HttpClient.
    pub fn from_http_client(http_client: HttpClient, config: ApiConfig) -> Self {
        debug!("Plant API client targeting {}", config.base_url());
        Self {
            http_client,
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

fn ensure_positive(id: u32, what: &str) -> Result<u32> {
    anyhow::ensure!(id > 0, "Invalid {} {}. Expected a positive integer.", what, id);
    Ok(id)
}

#[async_trait]
impl PlantApi for PlantApiClient {
    #[tracing::instrument(skip(self))]
    async fn list_plants(&self, page: Pagination) -> Result<Value> {
        self.http_client
            .get_json_with_query(&self.url("/plants/all"), &page.query())
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn filter_plants(&self, name: &str) -> Result<Value> {
        self.http_client
            .get_json_with_query(&self.url("/plants/filter"), &[("name", name.to_string())])
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn like_plant(&self, plant_id: u32) -> Result<Value> {
        let plant_id = ensure_positive(plant_id, "plant id")?;
        self.http_client
            .post_empty_json(&self.url(&format!("/plants/{}/like", plant_id)), &[])
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn unlike_plant(&self, plant_id: u32) -> Result<Value> {
        let plant_id = ensure_positive(plant_id, "plant id")?;
        self.http_client
            .delete_json(&self.url(&format!("/plants/{}/like", plant_id)))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn liked_plants(&self) -> Result<Value> {
        self.http_client.get_json(&self.url("/plants/all/likes")).await
    }

    #[tracing::instrument(skip(self))]
    async fn list_questions(&self) -> Result<Value> {
        self.http_client.get_json(&self.url("/questions/all")).await
    }

    #[tracing::instrument(skip(self, submission))]
    async fn submit_questionnaire(
        &self,
        submission: &QuestionnaireSubmission,
        counts: RecommendationCounts,
    ) -> Result<Value> {
        debug!(
            "Submitting questionnaire with {} answers",
            submission.answers.len()
        );
        self.http_client
            .post_json(&self.url("/questions/"), &counts.query(), submission)
            .await
    }

    #[tracing::instrument(skip(self, submission))]
    async fn submit_free_text(
        &self,
        submission: &FreeTextSubmission,
        counts: RecommendationCounts,
    ) -> Result<Value> {
        self.http_client
            .post_json(&self.url("/questions/free_text"), &counts.query(), submission)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn user_study_questions(&self) -> Result<Value> {
        self.http_client
            .get_json(&self.url("/user_study/questions"))
            .await
    }

    #[tracing::instrument(skip(self, submission))]
    async fn submit_user_study(&self, submission: &UserStudySubmission) -> Result<Value> {
        debug!(
            "Submitting user study for {} with {} answers",
            submission.user_name,
            submission.user_study_answers.len()
        );
        self.http_client
            .post_json(&self.url("/user_study/submit"), &[], submission)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn rate_recommendation(&self, submission_id: u32, rating: Rating) -> Result<Value> {
        let submission_id = ensure_positive(submission_id, "submission id")?;
        self.http_client
            .post_empty_json(
                &self.url(&format!("/recommendation/{}/submit", submission_id)),
                &[("rating", rating.to_string())],
            )
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn list_recommendations(&self, include_unrated: bool) -> Result<Value> {
        self.http_client
            .get_json_with_query(
                &self.url("/recommendation/all"),
                &[("include_unrated", include_unrated.to_string())],
            )
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn clear_recommendation_data(&self) -> Result<Value> {
        self.http_client
            .delete_json(&self.url("/recommendation/metadata"))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn test_endpoint(&self) -> Result<Value> {
        self.http_client.get_json(&self.url("/test")).await
    }

    #[tracing::instrument(skip(self))]
    async fn dataset_columns(&self) -> Result<Value> {
        self.http_client.get_json(&self.url("/data/columns")).await
    }
}
