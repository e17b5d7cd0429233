use serde::{Deserialize, Serialize};

use super::http::{HttpClient, HttpRequest, HttpResponse};
use super::sequence::{RequestSequencer, Ticket};
use crate::config::AssistantConfig;
use crate::error::{AssistantError, FetchError};
use crate::model::HttpMethod;

/// Sequencer key of the assistant widget.
pub const ASSISTANT_WIDGET: &str = "assistant";

/// Reply shown in place of an answer when a question fails.
pub const FALLBACK_REPLY: &str =
    "Sorry, there was an error processing your question. Please try again.";

#[derive(Debug, Serialize)]
struct Question<'a> {
    question: &'a str,
    model: &'a str,
}

#[derive(Debug, Deserialize)]
struct Answer {
    answer: String,
}

/// Client for the question-answering endpoint behind the assistant widget.
pub struct AssistantClient<C> {
    client: C,
    url: String,
    model: String,
    sequencer: RequestSequencer,
}

impl<C: HttpClient> AssistantClient<C> {
    pub fn new(client: C, url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            model: model.into(),
            sequencer: RequestSequencer::new(),
        }
    }

    /// `None` when no endpoint is configured.
    pub fn from_config(client: C, config: &AssistantConfig) -> Option<Self> {
        let url = config.url.as_deref()?;
        Some(Self::new(client, url, config.model.as_str()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Start a question; an unanswered earlier question becomes stale.
    pub fn prepare(&mut self, question: &str) -> Result<(Ticket, HttpRequest), AssistantError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AssistantError::EmptyQuestion);
        }
        let payload = serde_json::to_string(&Question {
            question,
            model: &self.model,
        })?;
        let request = HttpRequest::new(HttpMethod::Post, self.url.as_str())
            .header("Content-Type", "application/json")
            .body(payload);
        Ok((self.sequencer.begin(ASSISTANT_WIDGET), request))
    }

    /// Settle a question; `None` when a newer one has started since.
    pub fn complete(
        &self,
        ticket: &Ticket,
        result: Result<HttpResponse, FetchError>,
    ) -> Option<Result<String, AssistantError>> {
        self.sequencer.accept(ticket, decode(result))
    }

    /// Ask a question and wait for the answer.
    pub fn ask(&mut self, question: &str) -> Option<Result<String, AssistantError>> {
        let (ticket, request) = match self.prepare(question) {
            Ok(prepared) => prepared,
            Err(e) => return Some(Err(e)),
        };
        let result = self.client.fetch(&request);
        self.complete(&ticket, result)
    }
}

fn decode(result: Result<HttpResponse, FetchError>) -> Result<String, AssistantError> {
    let response = result?;
    if !response.is_success() {
        return Err(AssistantError::Status(response.status));
    }
    let answer: Answer = serde_json::from_str(&response.body)?;
    Ok(answer.answer)
}
