use super::request::{RequestBody, RequestExample};
use serde_json::Value;

const FETCH_CALL: &str = "fetch(url, options)
  .then(response => {
    if (!response.ok) throw new Error(`HTTP error! status: ${response.status}`);
    return response.json();
  })
  .then(data => console.log(data))
  .catch(error => console.error('Error fetching data:', error));";

pub fn render(request: &RequestExample) -> String {
    let mut code = format!("const url = {};\n", quote(&request.url));
    if let Some(credential) = request.credential {
        code.push_str(&format!("// Replace {} with your actual key\n", credential));
    }

    let mut entries = vec![format!("  method: {}", quote(request.method.as_str()))];

    if !request.headers.is_empty() {
        let headers: Vec<String> = request
            .headers
            .iter()
            .map(|(name, value)| format!("    {}: {}", quote(name), quote(value)))
            .collect();
        entries.push(format!("  headers: {{\n{}\n  }}", headers.join(",\n")));
    }

    match &request.body {
        Some(RequestBody::Json(value)) => {
            let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
            entries.push(format!("  body: JSON.stringify({})", pretty.replace('\n', "\n  ")));
        }
        Some(RequestBody::Raw(text)) => entries.push(format!("  body: {}", quote(text))),
        None => {}
    }

    code.push_str(&format!("\nconst options = {{\n{}\n}};\n\n", entries.join(",\n")));
    code.push_str(FETCH_CALL);
    code
}

fn quote(text: &str) -> String {
    Value::from(text).to_string()
}
