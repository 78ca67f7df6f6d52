use crate::error::SlideError;
use crate::story::StoryRecord;
use log::warn;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Caption/title generation seam. One operation: complete a prompt into a
/// short piece of text. Implementations may fail; callers always have a
/// deterministic fallback and never let a provider failure escape the
/// story boundary.
pub trait Summarizer {
    fn complete(
        &self,
        system: &str,
        user: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, SlideError>;
}

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Editorial prompt used to turn a narrative into a one/two-sentence
/// post caption.
pub const SUMMARY_SYSTEM_PROMPT: &str = "You are a skilled editor for The New York Times. \
    Create a concise, engaging summary of the following text in the style of a NYT subheading. \
    The summary should be 1-2 sentences that give readers a peek into the story without \
    revealing everything, similar to how many news outlets do on their instagram/social media \
    posts. *Ensure that the caption results in a full sentence, and ends cohesively*";
pub const SUMMARY_MAX_TOKENS: u32 = 30;
pub const SUMMARY_TEMPERATURE: f32 = 0.6;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Blocking client for an OpenAI-compatible chat completions endpoint.
pub struct OpenAiSummarizer {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
}

impl OpenAiSummarizer {
    pub fn new(api_key: String) -> OpenAiSummarizer {
        OpenAiSummarizer::with_model(api_key, DEFAULT_MODEL.into())
    }

    pub fn with_model(api_key: String, model: String) -> OpenAiSummarizer {
        OpenAiSummarizer {
            client: reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .expect("failed to build HTTP client"),
            api_key,
            model,
        }
    }
}

impl Summarizer for OpenAiSummarizer {
    fn complete(
        &self,
        system: &str,
        user: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, SlideError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens,
            temperature,
        };

        let response = self
            .client
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            // surface the provider's own message when the body parses
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(SlideError::Provider(format!(
                "completion endpoint returned {status}: {message}"
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| SlideError::Provider(format!("malformed completion response: {e}")))?;

        parsed
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| SlideError::Provider("completion returned no content".into()))
    }
}

/// Deterministic fallback when no caption can be generated: the first 100
/// characters of the source text, with an ellipsis when truncated.
pub fn fallback_caption(text: &str) -> String {
    const LIMIT: usize = 100;
    if text.chars().count() > LIMIT {
        let cut: String = text.chars().take(LIMIT).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

/// Produce the caption for a story. A caption supplied on the record wins
/// outright; otherwise a summary is generated and the CTA line appended.
/// Provider failures fall back to truncated source text; this function
/// never fails and never aborts a batch.
pub fn resolve_caption(
    record: &StoryRecord,
    summarizer: Option<&dyn Summarizer>,
    cta_text: &str,
) -> String {
    if let Some(caption) = &record.caption {
        return caption.clone();
    }

    let summary = summarizer
        .and_then(|s| {
            match s.complete(
                SUMMARY_SYSTEM_PROMPT,
                &record.narrative,
                SUMMARY_MAX_TOKENS,
                SUMMARY_TEMPERATURE,
            ) {
                Ok(text) => Some(text),
                Err(e) => {
                    warn!("caption generation failed, using truncated source text: {e}");
                    None
                }
            }
        })
        .unwrap_or_else(|| fallback_caption(&record.narrative));

    format!("{summary}\n\n{cta_text}")
}
