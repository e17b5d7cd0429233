pub mod assistant;
pub mod http;
pub mod sequence;
pub mod tryit;

pub use assistant::{ASSISTANT_WIDGET, AssistantClient, FALLBACK_REPLY};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use sequence::{RequestSequencer, Ticket};
pub use tryit::{
    BEARER_PLACEHOLDER, PENDING_TEXT, TryItExecutor, TryItInputs, TryItOutcome, build_request,
    format_failure, format_response,
};
