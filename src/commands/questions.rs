use anyhow::Result;
use log::info;
use serde_json::Value;

use crate::api::PlantApi;
use crate::model::{
    AnswerSelection, FreeTextSubmission, QuestionnaireSubmission, RecommendationCounts,
};

/// Fetch the questionnaire with its answer options.
#[tracing::instrument(skip(api))]
pub async fn list<A: PlantApi + ?Sized>(api: &A) -> Result<Value> {
    api.list_questions().await
}

/// Send questionnaire answers and return the recommendations.
#[tracing::instrument(skip(api))]
pub async fn submit<A: PlantApi + ?Sized>(
    api: &A,
    answers: Vec<AnswerSelection>,
    free_text: Option<String>,
    counts: RecommendationCounts,
) -> Result<Value> {
    anyhow::ensure!(!answers.is_empty(), "At least one answer is required.");

    let free_text = free_text.map(|text| text.trim().to_string());
    let submission = QuestionnaireSubmission::new(answers, free_text);
    let response = api.submit_questionnaire(&submission, counts).await?;
    info!(
        "Submitted {} answers at {}",
        submission.answers.len(),
        submission.created_at
    );
    Ok(response)
}

/// Send a free-text description and return the recommendations.
#[tracing::instrument(skip(api))]
pub async fn free_text<A: PlantApi + ?Sized>(
    api: &A,
    text: &str,
    counts: RecommendationCounts,
) -> Result<Value> {
    let text = text.trim();
    anyhow::ensure!(!text.is_empty(), "Free text must not be empty.");

    api.submit_free_text(&FreeTextSubmission::new(text), counts)
        .await
}
