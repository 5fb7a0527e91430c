use crate::snippets::CodeSample;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Integer,
    Boolean,
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParamType::String => "string",
            ParamType::Integer => "integer",
            ParamType::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExampleValue {
    Boolean(bool),
    Integer(i64),
    Text(String),
}

impl fmt::Display for ExampleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExampleValue::Boolean(value) => write!(f, "{}", value),
            ExampleValue::Integer(value) => write!(f, "{}", value),
            ExampleValue::Text(value) => f.write_str(value),
        }
    }
}

/// Whether a request must carry an API key.
///
/// On the wire this is the optional `requiresAuth` boolean. A missing field
/// means the endpoint is protected; only an explicit `false` makes it public.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum AuthRequirement {
    #[default]
    Required,
    NotRequired,
}

impl From<bool> for AuthRequirement {
    fn from(required: bool) -> Self {
        if required {
            AuthRequirement::Required
        } else {
            AuthRequirement::NotRequired
        }
    }
}

impl From<AuthRequirement> for bool {
    fn from(requirement: AuthRequirement) -> Self {
        requirement == AuthRequirement::Required
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    #[serde(default)]
    pub required: bool,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<ExampleValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseCode {
    pub code: u16,
    pub description: String,
    pub success: bool,
}

impl ResponseCode {
    /// Anything below 400 counts as success.
    pub fn is_success_code(&self) -> bool {
        self.code < 400
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDescriptor {
    pub id: String,
    pub method: HttpMethod,
    pub path: String,
    #[serde(default)]
    pub group: String,
    pub description: String,
    #[serde(default)]
    pub requires_auth: AuthRequirement,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path_parameters: Vec<ParameterDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query_parameters: Vec<ParameterDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub request_headers: Vec<ParameterDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub request_body_schema: Vec<ParameterDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_body: Option<String>,
    #[serde(default)]
    pub response_codes: Vec<ResponseCode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub response_field_descriptions: Vec<ParameterDescriptor>,
}

impl EndpointDescriptor {
    pub fn requires_auth(&self) -> bool {
        self.requires_auth == AuthRequirement::Required
    }

    /// Names of the `:name` segments in `path`, in order of appearance.
    pub fn path_placeholders(&self) -> Vec<&str> {
        self.path
            .split('/')
            .filter_map(|segment| segment.strip_prefix(':'))
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// The request body example, ignoring blank literals.
    pub fn request_body(&self) -> Option<&str> {
        self.request_body
            .as_deref()
            .filter(|body| !body.trim().is_empty())
    }

    pub fn response_body(&self) -> Option<&str> {
        self.response_body
            .as_deref()
            .filter(|body| !body.trim().is_empty())
    }
}

/// The registry document as stored in `data/endpoints.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDocumentation {
    pub title: String,
    pub base_url: String,
    pub endpoints: Vec<EndpointDescriptor>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EndpointPage {
    pub route: String,
    #[serde(flatten)]
    pub endpoint: EndpointDescriptor,
    pub samples: Vec<CodeSample>,
}

/// Everything a static renderer needs, produced by `export`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationBundle {
    pub title: String,
    pub base_url: String,
    pub endpoints: Vec<EndpointPage>,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
