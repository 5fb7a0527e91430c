//! Ready-to-paste request examples for documented endpoints.
//!
//! Each endpoint is first lowered into a [`RequestExample`], then handed to one
//! formatter per calling convention. Output is deterministic text.

pub mod curl;
pub mod javascript;
pub mod python;
pub mod request;

pub use request::RequestExample;

use crate::models::EndpointDescriptor;
use serde::Serialize;

pub const DEFAULT_BASE_URL: &str = "https://api.vorlie.pl";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    Curl,
    Python,
    JavaScript,
}

impl SampleKind {
    /// Display order of the example tabs.
    pub const ALL: [SampleKind; 3] = [SampleKind::Curl, SampleKind::Python, SampleKind::JavaScript];

    pub fn id(&self) -> &'static str {
        match self {
            SampleKind::Curl => "curl",
            SampleKind::Python => "python",
            SampleKind::JavaScript => "javascript",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SampleKind::Curl => "cURL",
            SampleKind::Python => "Python",
            SampleKind::JavaScript => "JavaScript",
        }
    }

    pub fn language(&self) -> &'static str {
        match self {
            SampleKind::Curl => "bash",
            SampleKind::Python => "python",
            SampleKind::JavaScript => "javascript",
        }
    }

    fn render(&self, request: &RequestExample) -> String {
        match self {
            SampleKind::Curl => curl::render(request),
            SampleKind::Python => python::render(request),
            SampleKind::JavaScript => javascript::render(request),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeSample {
    pub id: &'static str,
    pub label: &'static str,
    pub language: &'static str,
    pub code: String,
}

#[derive(Debug, Clone)]
pub struct SampleGenerator {
    base_url: String,
}

impl Default for SampleGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl SampleGenerator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request_for(&self, endpoint: &EndpointDescriptor) -> RequestExample {
        RequestExample::from_endpoint(endpoint, &self.base_url)
    }

    /// cURL, Python and JavaScript samples, always in that order.
    pub fn generate(&self, endpoint: &EndpointDescriptor) -> Vec<CodeSample> {
        let request = self.request_for(endpoint);
        tracing::debug!(endpoint = %endpoint.id, url = %request.url, "Generating code samples");

        SampleKind::ALL
            .iter()
            .map(|kind| CodeSample {
                id: kind.id(),
                label: kind.label(),
                language: kind.language(),
                code: kind.render(&request),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use serde_json::{Value, json};

    fn endpoint(value: Value) -> EndpointDescriptor {
        serde_json::from_value(value).unwrap()
    }

    fn put_actions() -> EndpointDescriptor {
        endpoint(json!({
            "id": "put-actions",
            "method": "PUT",
            "path": "/v1/actions",
            "group": "actions",
            "description": "Creates a new GIF action.",
            "requiresAuth": true,
            "requestBody": "{\"tag\":\"hug\"}"
        }))
    }

    #[test]
    fn test_sample_order_and_tags() {
        let samples = SampleGenerator::default().generate(&put_actions());
        let tags: Vec<(&str, &str, &str)> = samples
            .iter()
            .map(|s| (s.id, s.label, s.language))
            .collect();
        assert_eq!(
            tags,
            vec![
                ("curl", "cURL", "bash"),
                ("python", "Python", "python"),
                ("javascript", "JavaScript", "javascript"),
            ]
        );
    }

    #[test]
    fn test_generation_is_deterministic() {
        let generator = SampleGenerator::default();
        for endpoint in Registry::builtin().unwrap().endpoints() {
            assert_eq!(generator.generate(endpoint), generator.generate(endpoint));
        }
    }

    #[test]
    fn test_public_endpoint_samples_carry_no_auth_header() {
        let tags = endpoint(json!({
            "id": "get-action-tags",
            "method": "GET",
            "path": "/v1/actions/tags",
            "group": "actions",
            "description": "",
            "requiresAuth": false
        }));
        let samples = SampleGenerator::default().generate(&tags);
        for sample in &samples {
            assert!(!sample.code.contains("Authorization"), "{}", sample.code);
            assert!(!sample.code.contains("API_KEY"), "{}", sample.code);
        }
        assert!(samples[0].code.contains("/v1/actions/tags"));
    }

    #[test]
    fn test_every_public_builtin_endpoint_omits_auth() {
        let generator = SampleGenerator::default();
        let registry = Registry::builtin().unwrap();
        for endpoint in registry.endpoints().filter(|e| !e.requires_auth()) {
            for sample in generator.generate(endpoint) {
                assert!(!sample.code.contains("Authorization"));
            }
        }
    }

    #[test]
    fn test_body_endpoint_samples_carry_content_type_and_body() {
        let samples = SampleGenerator::default().generate(&put_actions());
        for sample in &samples {
            assert!(sample.code.contains("Content-Type"), "{}", sample.code);
            assert!(sample.code.contains("application/json"));
            assert!(sample.code.contains("hug"), "{}", sample.code);
            assert!(sample.code.contains("Bearer YOUR_ACTIONS_API_KEY"));
        }
    }

    #[test]
    fn test_builtin_body_fields_appear_in_every_sample() {
        let registry = Registry::builtin().unwrap();
        let endpoint = registry.lookup("put-actions").unwrap();
        let body: Value = serde_json::from_str(endpoint.request_body().unwrap()).unwrap();
        let fields = body.as_object().unwrap();

        for sample in SampleGenerator::default().generate(endpoint) {
            for (name, value) in fields {
                assert!(sample.code.contains(name.as_str()), "{} missing {}", sample.id, name);
                assert!(sample.code.contains(value.as_str().unwrap()));
            }
        }
    }

    #[test]
    fn test_python_body_round_trips() {
        let registry = Registry::builtin().unwrap();
        let endpoint = registry.lookup("put-actions").unwrap();
        let original: Value = serde_json::from_str(endpoint.request_body().unwrap()).unwrap();

        let samples = SampleGenerator::default().generate(endpoint);
        let python = &samples[1].code;
        let start = python.find("json_body = ").unwrap() + "json_body = ".len();
        let end = start + python[start..].find("\n#").unwrap();
        let embedded: Value = serde_json::from_str(&python[start..end]).unwrap();
        assert_eq!(embedded, original);
    }

    #[test]
    fn test_javascript_body_round_trips() {
        let samples = SampleGenerator::default().generate(&put_actions());
        let js = &samples[2].code;
        let start = js.find("JSON.stringify(").unwrap() + "JSON.stringify(".len();
        let end = start + js[start..].find(")\n};").unwrap();
        let embedded: Value = serde_json::from_str(&js[start..end]).unwrap();
        assert_eq!(embedded, json!({"tag": "hug"}));
    }

    #[test]
    fn test_malformed_body_degrades_to_raw_text() {
        let broken = endpoint(json!({
            "id": "put-actions",
            "method": "PUT",
            "path": "/v1/actions",
            "group": "actions",
            "description": "",
            "requestBody": "{tag: 'hug'}"
        }));
        let samples = SampleGenerator::default().generate(&broken);
        assert!(samples[0].code.contains(r"-d '{tag: '\''hug'\''}'"));
        assert!(samples[1].code.contains("body = \"{tag: 'hug'}\""));
        assert!(samples[2].code.contains("body: \"{tag: 'hug'}\""));
    }

    #[test]
    fn test_delete_user_uses_admin_key_and_bracketed_url() {
        let delete_user = endpoint(json!({
            "id": "delete-user",
            "method": "DELETE",
            "path": "/v1/users/:user_id",
            "group": "users",
            "description": ""
        }));
        let generator = SampleGenerator::default();
        assert_eq!(
            generator.request_for(&delete_user).url,
            "https://api.vorlie.pl/v1/users/{user_id}"
        );
        for sample in generator.generate(&delete_user) {
            assert!(sample.code.contains("{user_id}"));
            assert!(sample.code.contains("YOUR_ADMIN_API_KEY"));
            assert!(!sample.code.contains(":user_id"));
        }
    }

    #[test]
    fn test_custom_base_url() {
        let generator = SampleGenerator::new("http://localhost:8080");
        let samples = generator.generate(&put_actions());
        assert!(samples[0].code.contains("'http://localhost:8080/v1/actions'"));
    }
}
