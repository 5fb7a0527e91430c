use super::request::{RequestBody, RequestExample};

pub fn render(request: &RequestExample) -> String {
    let mut lines = vec![format!(
        "curl -X {} {}",
        request.method,
        shell_quote(&request.url)
    )];

    for (name, value) in &request.headers {
        lines.push(format!("  -H {}", shell_quote(&format!("{}: {}", name, value))));
    }

    if let Some(body) = &request.body {
        let payload = match body {
            RequestBody::Json(value) => value.to_string(),
            RequestBody::Raw(text) => text.clone(),
        };
        lines.push(format!("  -d {}", shell_quote(&payload)));
    }

    lines.join(" \\\n")
}

/// Wraps `text` in single quotes, closing and reopening around embedded ones.
fn shell_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "'\\''"))
}
