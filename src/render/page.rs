use crate::models::{EndpointDescriptor, ParamType, ParameterDescriptor};
use crate::snippets::CodeSample;
use crate::snippets::request::{STANDARD_CREDENTIAL, credential_for};

pub fn endpoint_page(endpoint: &EndpointDescriptor, samples: &[CodeSample]) -> String {
    let mut page = String::new();

    page.push_str(&format!("# `{}` {}\n\n", endpoint.method, endpoint.path));
    page.push_str(&format!("{}\n\n", endpoint.description));

    if endpoint.requires_auth() {
        page.push_str("**Authentication:** API key required (`Authorization: Bearer <key>`).\n\n");
    } else {
        page.push_str("**Authentication:** none, this endpoint is public.\n\n");
    }

    page.push_str("## Parameters\n\n");
    if endpoint.path_placeholders().is_empty() && endpoint.path_parameters.is_empty() {
        page.push_str("_No path parameters required for this endpoint._\n\n");
    } else {
        page.push_str(&parameter_table("Path Parameters", &path_parameters(endpoint)));
    }
    page.push_str(&parameter_table("Query Parameters", &endpoint.query_parameters));
    page.push_str(&parameter_table("Request Headers", &endpoint.request_headers));
    page.push_str(&parameter_table("Request Body", &endpoint.request_body_schema));

    if !samples.is_empty() {
        page.push_str("## Request Examples\n\n");
        page.push_str(&replacement_note(endpoint));
        for sample in samples {
            page.push_str(&format!(
                "### {}\n\n```{}\n{}\n```\n\n",
                sample.label, sample.language, sample.code
            ));
        }
    }

    if let Some(body) = endpoint.request_body() {
        page.push_str(&format!("## Request Body Example\n\n```json\n{}\n```\n\n", body));
    }

    if let Some(body) = endpoint.response_body() {
        page.push_str(&format!("## Response Body Example\n\n```json\n{}\n```\n\n", body));
    }

    if !endpoint.response_field_descriptions.is_empty() {
        page.push_str("## Field Descriptions\n\n");
        for field in &endpoint.response_field_descriptions {
            page.push_str(&format!(
                "- `{}` ({}): {}\n",
                field.name, field.param_type, field.description
            ));
        }
        page.push('\n');
    }

    if !endpoint.response_codes.is_empty() {
        page.push_str("## Response Codes\n\n");
        for response in &endpoint.response_codes {
            let marker = if response.success { "✓" } else { "✗" };
            page.push_str(&format!(
                "- {} `{}` {}\n",
                marker, response.code, response.description
            ));
        }
        page.push('\n');
    }

    page.trim_end().to_string() + "\n"
}

/// Declared path parameters, plus a bare `string` row for any undeclared placeholder.
fn path_parameters(endpoint: &EndpointDescriptor) -> Vec<ParameterDescriptor> {
    let mut parameters = endpoint.path_parameters.clone();
    for placeholder in endpoint.path_placeholders() {
        if !parameters.iter().any(|param| param.name == placeholder) {
            parameters.push(ParameterDescriptor {
                name: placeholder.to_string(),
                param_type: ParamType::String,
                required: true,
                description: String::new(),
                example: None,
            });
        }
    }
    parameters
}

fn replacement_note(endpoint: &EndpointDescriptor) -> String {
    let parameter = endpoint
        .path_placeholders()
        .first()
        .map_or_else(|| "{parameter}".to_string(), |name| format!("{{{}}}", name));

    match endpoint.requires_auth().then(|| credential_for(endpoint)) {
        Some(credential) => format!(
            "Remember to replace placeholders like `{}` and path parameters (e.g., `{}`) \
             with actual values.\n\n",
            credential, parameter
        ),
        None => format!(
            "Remember to replace path parameters (e.g., `{}`) with actual values.\n\n",
            parameter
        ),
    }
}

fn parameter_table(title: &str, parameters: &[ParameterDescriptor]) -> String {
    if parameters.is_empty() {
        return String::new();
    }

    let mut table = format!(
        "### {}\n\n| Name | Type | Description |\n| --- | --- | --- |\n",
        title
    );
    for param in parameters {
        let name = if param.required {
            format!("`{}`*", param.name)
        } else {
            format!("`{}`", param.name)
        };

        let mut description = param.description.replace('|', "\\|");
        if param.required {
            description.push_str(" (required)");
        }
        if let Some(example) = &param.example {
            description.push_str(&format!(" Example: `{}`", example));
        }

        table.push_str(&format!(
            "| {} | {} | {} |\n",
            name, param.param_type, description
        ));
    }
    table.push('\n');
    table
}

pub fn not_found(path: &str) -> String {
    format!(
        "# 404\n\nPage Not Found: `{}` does not match any documented page or endpoint.\n",
        path
    )
}

pub fn introduction(title: &str, base_url: &str) -> String {
    format!(
        "# {title}\n\n\
         ## Base URL\n\n`{base_url}`\n\n\
         ## Authentication\n\n\
         Most endpoints expect an API key sent as a Bearer token in the `Authorization` header.\n\n\
         ## Versioning\n\n\
         All endpoints are served under the `/v1` prefix.\n\n\
         ## Rate Limiting\n\n\
         Requests are limited per source IP address. Exceeding the limit returns \
         `HTTP 429 Too Many Requests` with a `Retry-After` header.\n"
    )
}

pub fn authentication(base_url: &str) -> String {
    let host = base_url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');
    format!(
        "# Authentication\n\n\
         Most requests require an API key provided as a Bearer token \
         in the `Authorization` header.\n\n\
         ```http\nGET /v1/actions/tags HTTP/1.1\nHost: {host}\n\
         Authorization: Bearer {STANDARD_CREDENTIAL}\n```\n\n\
         Requests without a valid key receive `401 Unauthorized` or `403 Forbidden`.\n\n\
         ## API Key Types\n\n\
         - **Actions key**: access to endpoints under `/v1/actions/`.\n\
         - **User management key**: access to endpoints under `/v1/users/`. \
         Private, not distributed.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use crate::snippets::SampleGenerator;

    fn page_for(id: &str) -> String {
        let registry = Registry::builtin().unwrap();
        let endpoint = registry.lookup(id).unwrap();
        let samples = SampleGenerator::default().generate(endpoint);
        endpoint_page(endpoint, &samples)
    }

    #[test]
    fn test_page_title_and_examples() {
        let page = page_for("put-actions");
        assert!(page.starts_with("# `PUT` /v1/actions\n"));
        assert!(page.contains("```bash\ncurl -X PUT"));
        assert!(page.contains("### Python"));
        assert!(page.contains("```javascript\n"));
        assert!(page.contains("## Request Body Example"));
    }

    #[test]
    fn test_parameter_table_marks_required_and_examples() {
        let page = page_for("put-actions");
        assert!(page.contains("### Request Body\n"));
        assert!(page.contains(
            "| `tag`* | string | The category/tag associated with the gif. \
             (required) Example: `hug` |"
        ));
    }

    #[test]
    fn test_missing_path_parameters_note() {
        let page = page_for("get-action-tags");
        assert!(page.contains("No path parameters required"));
        assert!(page.contains("none, this endpoint is public"));
    }

    #[test]
    fn test_response_codes_and_fields() {
        let page = page_for("get-user-by-id-banner");
        assert!(page.contains("### Path Parameters"));
        assert!(page.contains("- ✓ `200` Success."));
        assert!(page.contains("- ✗ `404` User does not have a banner set."));
        assert!(page.contains("- `banner_url` (string):"));
    }

    fn render(value: serde_json::Value) -> String {
        let endpoint: EndpointDescriptor = serde_json::from_value(value).unwrap();
        let samples = SampleGenerator::default().generate(&endpoint);
        endpoint_page(&endpoint, &samples)
    }

    #[test]
    fn test_undeclared_placeholder_gets_string_row() {
        let page = render(serde_json::json!({
            "id": "delete-action",
            "method": "DELETE",
            "path": "/v1/actions/:gif_id",
            "description": "Deletes a GIF action by ID."
        }));
        assert!(!page.contains("No path parameters required"));
        assert!(page.contains("### Path Parameters"));
        assert!(page.contains("| `gif_id`* | string |  (required) |"));
    }

    #[test]
    fn test_declared_parameters_are_not_duplicated() {
        let page = page_for("delete-action");
        assert_eq!(page.matches("| `gif_id`*").count(), 1);
        assert!(page.contains("| `gif_id`* | integer |"));
    }

    #[test]
    fn test_replacement_note_names_credential_and_placeholder() {
        let page = page_for("delete-user");
        assert!(page.contains(
            "Remember to replace placeholders like `YOUR_ADMIN_API_KEY` and path parameters \
             (e.g., `{user_id}`) with actual values."
        ));

        let page = page_for("get-action-tags");
        assert!(page.contains("Remember to replace path parameters (e.g., `{parameter}`)"));
        assert!(!page.contains("API_KEY"));
    }

    #[test]
    fn test_blank_request_body_has_no_example_section() {
        let page = render(serde_json::json!({
            "id": "put-actions",
            "method": "PUT",
            "path": "/v1/actions",
            "description": "",
            "requestBody": "  \n "
        }));
        assert!(!page.contains("## Request Body Example"));
        assert!(!page.contains("Content-Type"));
    }

    #[test]
    fn test_not_found_mentions_path() {
        assert!(not_found("/nowhere").contains("`/nowhere`"));
    }

    #[test]
    fn test_authentication_page_uses_host() {
        let page = authentication("https://api.vorlie.pl");
        assert!(page.contains("Host: api.vorlie.pl\n"));
        assert!(page.contains("Bearer YOUR_ACTIONS_API_KEY"));
    }
}
