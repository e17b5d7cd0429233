use serde::Serialize;

use crate::model::ApiModel;
use crate::transform::INTRO_IDS;

/// One of the four fixed sections preceding the endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntroSection {
    pub id: String,
    pub title: String,
    pub body: IntroBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntroBody {
    Text { text: String },
    BaseUrl { url: String },
    StatusCodes {
        description: String,
        groups: Vec<StatusCodeGroup>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusClass {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCodeGroup {
    pub id: String,
    pub title: String,
    pub class: StatusClass,
    pub codes: Vec<StatusCode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCode {
    pub code: u16,
    pub title: String,
    pub description: String,
}

/// Sidebar captions of the intro sections, aligned with [`INTRO_IDS`].
pub const INTRO_LABELS: [&str; 4] = ["Introduction", "Authentication", "Base URL", "Status and Error Codes"];

const AUTH_REQUIRED: &str = "All requests require authentication with a valid access token.";
const AUTH_UNAVAILABLE: &str = "Authentication information not available.";
const STATUS_DESCRIPTION: &str =
    "Every API call returns an HTTP status code that can tell you more about the response.";

const SUCCESS_CODES: &[(u16, &str, &str)] = &[
    (200, "OK", "The request succeeded. The requested resource was fetched and sent in the response body."),
    (201, "Created", "The request succeeded and a new resource was created as a result."),
    (204, "No Content", "The request succeeded but there is no content to return. Typically used for deletions."),
];

const CLIENT_ERROR_CODES: &[(u16, &str, &str)] = &[
    (400, "Bad Request", "The request has malformed syntax or cannot be processed. Check the parameters sent."),
    (401, "Unauthorized", "The client lacks valid authentication credentials. Check your access token."),
    (403, "Forbidden", "The server refuses to respond. Usually caused by insufficient access permissions."),
    (404, "Not Found", "The requested resource was not found but may be available again in the future."),
    (422, "Unprocessable Entity", "The request body contains semantic errors, such as a wrong format, missing required fields, or logical errors."),
    (429, "Too Many Requests", "The client exceeded the rate limit. Wait before retrying."),
];

/// Build the four intro sections in [`INTRO_IDS`] order.
pub fn intro_sections(model: &ApiModel) -> Vec<IntroSection> {
    let [introduction, authentication, base_url, status_codes] = INTRO_IDS;
    vec![
        IntroSection {
            id: introduction.to_string(),
            title: INTRO_LABELS[0].to_string(),
            body: IntroBody::Text {
                text: model.info.description.clone(),
            },
        },
        IntroSection {
            id: authentication.to_string(),
            title: INTRO_LABELS[1].to_string(),
            body: IntroBody::Text {
                text: (if model.has_auth { AUTH_REQUIRED } else { AUTH_UNAVAILABLE }).to_string(),
            },
        },
        IntroSection {
            id: base_url.to_string(),
            title: INTRO_LABELS[2].to_string(),
            body: IntroBody::BaseUrl {
                url: model.server_url.clone(),
            },
        },
        IntroSection {
            id: status_codes.to_string(),
            title: INTRO_LABELS[3].to_string(),
            body: IntroBody::StatusCodes {
                description: STATUS_DESCRIPTION.to_string(),
                groups: status_catalog(),
            },
        },
    ]
}

/// The fixed 2xx/4xx status catalog.
pub fn status_catalog() -> Vec<StatusCodeGroup> {
    vec![
        code_group("success-codes", "Success Codes (2xx)", StatusClass::Success, SUCCESS_CODES),
        code_group("client-error-codes", "Client Errors (4xx)", StatusClass::Error, CLIENT_ERROR_CODES),
    ]
}

fn code_group(id: &str, title: &str, class: StatusClass, codes: &[(u16, &str, &str)]) -> StatusCodeGroup {
    StatusCodeGroup {
        id: id.to_string(),
        title: title.to_string(),
        class,
        codes: codes
            .iter()
            .map(|(code, title, description)| StatusCode {
                code: *code,
                title: title.to_string(),
                description: description.to_string(),
            })
            .collect(),
    }
}
