use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One answered question: `question_id:answer_id` on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSelection {
    pub question_id: u32,
    pub answer_id: u32,
}

impl fmt::Display for AnswerSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.question_id, self.answer_id)
    }
}

impl FromStr for AnswerSelection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((question, answer)) = s.split_once(':') else {
            anyhow::bail!("Invalid answer '{}'. Expected 'QUESTION_ID:ANSWER_ID'.", s);
        };

        let parse_id = |part: &str, what: &str| -> Result<u32> {
            match part.trim().parse::<u32>() {
                Ok(id) if id > 0 => Ok(id),
                _ => anyhow::bail!(
                    "Invalid {} '{}' in answer '{}'. Expected a positive integer.",
                    what,
                    part,
                    s
                ),
            }
        };

        Ok(AnswerSelection {
            question_id: parse_id(question, "question id")?,
            answer_id: parse_id(answer, "answer id")?,
        })
    }
}

/// A completed questionnaire sent to `POST /questions/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireSubmission {
    pub answers: Vec<AnswerSelection>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub free_text: String,
}

impl QuestionnaireSubmission {
    /// Stamps the answers with the current time.
    pub fn new(answers: Vec<AnswerSelection>, free_text: Option<String>) -> Self {
        Self {
            answers,
            created_at: Utc::now(),
            free_text: free_text.unwrap_or_default(),
        }
    }
}

/// Free-text input sent to `POST /questions/free_text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeTextSubmission {
    pub created_at: DateTime<Utc>,
    pub free_text: String,
}

impl FreeTextSubmission {
    pub fn new(free_text: impl Into<String>) -> Self {
        Self {
            created_at: Utc::now(),
            free_text: free_text.into(),
        }
    }
}

/// A single answered user-study item. Rating items carry `rating`, open
/// items carry `free_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStudyAnswerItem {
    pub section_id: u32,
    pub item_id: u32,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub free_text: Option<String>,
}

/// User-study results sent to `POST /user_study/submit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStudySubmission {
    pub user_name: String,
    /// Defaults to the time the submission is read when absent.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    pub user_study_answers: Vec<UserStudyAnswerItem>,
}
