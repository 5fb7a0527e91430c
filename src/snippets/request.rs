use crate::models::{EndpointDescriptor, HttpMethod};
use regex::{Captures, Regex};
use serde_json::Value;
use std::sync::LazyLock;

pub const ADMIN_CREDENTIAL: &str = "YOUR_ADMIN_API_KEY";
pub const STANDARD_CREDENTIAL: &str = "YOUR_ACTIONS_API_KEY";

const ADMIN_GROUP: &str = "users";
const PRIVILEGED_ID_PREFIX: &str = "delete-";

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":(\w+)").expect("placeholder pattern compiles"));

/// Example payload attached to a request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Value),
    /// Literal text that did not parse as JSON; embedded verbatim.
    Raw(String),
}

impl RequestBody {
    pub fn parse(endpoint_id: &str, literal: &str) -> Self {
        match serde_json::from_str(literal) {
            Ok(value) => RequestBody::Json(value),
            Err(err) => {
                tracing::warn!(
                    endpoint = endpoint_id,
                    "Request body is not valid JSON, embedding raw text: {}",
                    err
                );
                RequestBody::Raw(literal.to_string())
            }
        }
    }
}

/// Convention-neutral description of one example call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestExample {
    pub method: HttpMethod,
    pub url: String,
    pub credential: Option<&'static str>,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl RequestExample {
    pub fn from_endpoint(endpoint: &EndpointDescriptor, base_url: &str) -> Self {
        let credential = endpoint.requires_auth().then(|| credential_for(endpoint));
        let body = endpoint
            .request_body()
            .map(|literal| RequestBody::parse(&endpoint.id, literal));

        let mut headers = Vec::new();
        if let Some(credential) = credential {
            headers.push((
                "Authorization".to_string(),
                format!("Bearer {}", credential),
            ));
        }
        if body.is_some() {
            headers.push((
                "Content-Type".to_string(),
                "application/json".to_string(),
            ));
        }

        Self {
            method: endpoint.method,
            url: resolve_url(base_url, &endpoint.path),
            credential,
            headers,
            body,
        }
    }
}

/// Rewrites each `:name` segment to `{name}` and prefixes the origin.
pub fn resolve_url(base_url: &str, path: &str) -> String {
    let example_path =
        PLACEHOLDER_REGEX.replace_all(path, |caps: &Captures| format!("{{{}}}", &caps[1]));
    format!("{}{}", base_url.trim_end_matches('/'), example_path)
}

/// Placeholder key shown in samples. Cosmetic only.
pub fn credential_for(endpoint: &EndpointDescriptor) -> &'static str {
    if endpoint.group == ADMIN_GROUP || endpoint.id.starts_with(PRIVILEGED_ID_PREFIX) {
        ADMIN_CREDENTIAL
    } else {
        STANDARD_CREDENTIAL
    }
}
