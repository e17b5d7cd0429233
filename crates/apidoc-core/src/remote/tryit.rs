use std::time::{Duration, Instant};

use indexmap::IndexMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::http::{HttpClient, HttpRequest, HttpResponse};
use super::sequence::{RequestSequencer, Ticket};
use crate::docs::EndpointSection;
use crate::error::FetchError;
use crate::parse::document::ParameterLocation;

/// Characters `encodeURIComponent` leaves alone.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const BEARER_PLACEHOLDER: &str = "Bearer {access_token}";

/// Shown in the response area while a request is in flight.
pub const PENDING_TEXT: &str = "Sending...";

const CORS_HINT: &str =
    "\n\nPossible CORS error, or the endpoint is not reachable from this client.";

/// Values typed into a try-it form, keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TryItInputs {
    values: IndexMap<String, String>,
    body: Option<String>,
}

impl TryItInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The value typed for `name`, if non-empty.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Build the request a try-it form submits.
///
/// `server_url` is the first declared server, used as-is; with none declared
/// the URL is just the path.
pub fn build_request(
    section: &EndpointSection,
    server_url: Option<&str>,
    has_auth: bool,
    inputs: &TryItInputs,
) -> HttpRequest {
    let mut url = format!(
        "{}{}",
        server_url.unwrap_or_default(),
        substitute_path(&section.path, section, inputs)
    );

    let query: Vec<String> = section
        .try_it
        .fields
        .iter()
        .filter(|f| f.location == ParameterLocation::Query)
        .filter_map(|f| {
            inputs.get(&f.name).map(|value| {
                format!(
                    "{}={}",
                    utf8_percent_encode(&f.name, COMPONENT),
                    utf8_percent_encode(value, COMPONENT)
                )
            })
        })
        .collect();
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query.join("&"));
    }

    let mut request =
        HttpRequest::new(section.method, url).header("Content-Type", "application/json");

    if section.try_it.body.is_some()
        && let Some(body) = inputs.body.as_deref().filter(|b| !b.is_empty())
    {
        request = request.body(body);
    }
    if has_auth {
        request = request.header("Authorization", BEARER_PLACEHOLDER);
    }
    request
}

/// Replace `{name}` placeholders with path-parameter inputs. Placeholders
/// without a value are kept verbatim.
fn substitute_path(path: &str, section: &EndpointSection, inputs: &TryItInputs) -> String {
    let value_for = |key: &str| {
        section
            .try_it
            .fields
            .iter()
            .any(|f| f.location == ParameterLocation::Path && f.name == key)
            .then(|| inputs.get(key))
            .flatten()
    };

    let mut out = String::with_capacity(path.len());
    let mut rest = path;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) if end > 0 => {
                let key = &after[..end];
                match value_for(key) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// What the response area of a try-it form shows once a request settles.
#[derive(Debug, Clone, PartialEq)]
pub enum TryItOutcome {
    Response {
        status: u16,
        status_text: String,
        elapsed_ms: f64,
        output: String,
    },
    Failure {
        output: String,
    },
}

impl TryItOutcome {
    /// Text of the status bar above the response area.
    pub fn status_line(&self) -> String {
        match self {
            TryItOutcome::Response {
                status,
                status_text,
                elapsed_ms,
                ..
            } => format!("HTTP {status} {status_text} {elapsed_ms:.2} ms"),
            TryItOutcome::Failure { .. } => "Error".to_string(),
        }
    }

    pub fn output(&self) -> &str {
        match self {
            TryItOutcome::Response { output, .. } | TryItOutcome::Failure { output } => output,
        }
    }
}

/// Render a settled response: JSON bodies are pretty-printed, others shown
/// raw, and non-2xx responses repeat the body under an error heading.
pub fn format_response(response: &HttpResponse, elapsed: Duration) -> TryItOutcome {
    let shown = pretty_body(&response.body);
    let output = if response.is_success() {
        shown
    } else {
        format!("{shown}\n\nError details:\n{shown}")
    };
    TryItOutcome::Response {
        status: response.status,
        status_text: response.status_text.clone(),
        elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        output,
    }
}

pub fn format_failure(error: &FetchError) -> TryItOutcome {
    let mut output = format!("Error: {error}");
    if matches!(error, FetchError::Network(_)) {
        output.push_str(CORS_HINT);
    }
    TryItOutcome::Failure { output }
}

fn pretty_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| serde_json::to_string_pretty(&json).ok())
        .unwrap_or_else(|| body.to_string())
}

/// Drives try-it submissions through the host's HTTP client, one sequence
/// per operation.
pub struct TryItExecutor<C> {
    client: C,
    sequencer: RequestSequencer,
}

impl<C: HttpClient> TryItExecutor<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            sequencer: RequestSequencer::new(),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Start a submission. Any earlier submission of the same operation
    /// becomes stale.
    pub fn prepare(
        &mut self,
        section: &EndpointSection,
        server_url: Option<&str>,
        has_auth: bool,
        inputs: &TryItInputs,
    ) -> (Ticket, HttpRequest) {
        let ticket = self.sequencer.begin(&section.ids.operation_id);
        let request = build_request(section, server_url, has_auth, inputs);
        log::debug!("try-it {} {}", request.method, request.url);
        (ticket, request)
    }

    /// Settle a submission; `None` when a newer one has started since.
    pub fn complete(
        &self,
        ticket: &Ticket,
        result: Result<HttpResponse, FetchError>,
        elapsed: Duration,
    ) -> Option<TryItOutcome> {
        let outcome = match result {
            Ok(response) => format_response(&response, elapsed),
            Err(e) => format_failure(&e),
        };
        self.sequencer.accept(ticket, outcome)
    }

    /// Prepare, fetch, and settle in one call.
    pub fn submit(
        &mut self,
        section: &EndpointSection,
        server_url: Option<&str>,
        has_auth: bool,
        inputs: &TryItInputs,
    ) -> Option<TryItOutcome> {
        let (ticket, request) = self.prepare(section, server_url, has_auth, inputs);
        let started = Instant::now();
        let result = self.client.fetch(&request);
        self.complete(&ticket, result, started.elapsed())
    }
}
