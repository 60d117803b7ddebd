use anyhow::{Context, Result};
use log::{debug, info};
use serde_json::Value;
use std::path::Path;
use tokio::io::AsyncReadExt;

use crate::api::PlantApi;
use crate::model::UserStudySubmission;

/// Fetch the user-study questionnaire.
#[tracing::instrument(skip(api))]
pub async fn questions<A: PlantApi + ?Sized>(api: &A) -> Result<Value> {
    api.user_study_questions().await
}

/// Submit user-study answers read from a JSON file, or stdin when `source` is `-`.
#[tracing::instrument(skip(api))]
pub async fn submit<A: PlantApi + ?Sized>(api: &A, source: &Path) -> Result<Value> {
    let raw = read_source(source).await?;
    let submission = parse_submission(&raw)
        .with_context(|| format!("Invalid user study submission in {}", source.display()))?;

    let response = api.submit_user_study(&submission).await?;
    info!(
        "Submitted user study for {} ({} answers)",
        submission.user_name,
        submission.user_study_answers.len()
    );
    Ok(response)
}

async fn read_source(source: &Path) -> Result<String> {
    if source == Path::new("-") {
        debug!("Reading user study submission from stdin");
        let mut raw = String::new();
        tokio::io::stdin()
            .read_to_string(&mut raw)
            .await
            .context("Failed to read user study submission from stdin")?;
        return Ok(raw);
    }

    debug!("Reading user study submission from {:?}", source);
    tokio::fs::read_to_string(source)
        .await
        .with_context(|| format!("Failed to read {}", source.display()))
}

fn parse_submission(raw: &str) -> Result<UserStudySubmission> {
    let submission: UserStudySubmission = serde_json::from_str(raw)?;
    anyhow::ensure!(
        !submission.user_name.trim().is_empty(),
        "user_name must not be empty"
    );
    Ok(submission)
}
