use super::request::{RequestBody, RequestExample};
use serde_json::Value;

pub fn render(request: &RequestExample) -> String {
    let mut code = String::from("import requests\n\n");
    code.push_str(&format!("url = {}\n", quote(&request.url)));

    if !request.headers.is_empty() {
        code.push_str("headers = {\n");
        for (name, value) in &request.headers {
            code.push_str(&format!("    {}: {},\n", quote(name), quote(value)));
        }
        code.push_str("}\n");
    }

    let mut arguments = vec![quote(request.method.as_str()), "url".to_string()];
    if !request.headers.is_empty() {
        arguments.push("headers=headers".to_string());
    }

    match &request.body {
        Some(RequestBody::Json(value)) => {
            code.push_str(&format!("json_body = {}\n", literal(value, 0)));
            arguments.push("json=json_body".to_string());
        }
        Some(RequestBody::Raw(text)) => {
            code.push_str(&format!("body = {}\n", quote(text)));
            arguments.push("data=body".to_string());
        }
        None => {}
    }

    if let Some(credential) = request.credential {
        code.push_str(&format!("# Replace {} with your actual key\n", credential));
    }

    code.push_str(&format!(
        "\nresponse = requests.request({})\n\nprint(response.status_code)\nprint(response.json())",
        arguments.join(", ")
    ));
    code
}

fn quote(text: &str) -> String {
    Value::from(text).to_string()
}

/// Python literal for a JSON value, laid out like two-space pretty JSON.
fn literal(value: &Value, depth: usize) -> String {
    let indent = "  ".repeat(depth + 1);
    let closing = "  ".repeat(depth);
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => quote(text),
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Array(items) => {
            let items: Vec<String> = items
                .iter()
                .map(|item| format!("{}{}", indent, literal(item, depth + 1)))
                .collect();
            format!("[\n{}\n{}]", items.join(",\n"), closing)
        }
        Value::Object(fields) if fields.is_empty() => "{}".to_string(),
        Value::Object(fields) => {
            let fields: Vec<String> = fields
                .iter()
                .map(|(key, item)| {
                    format!("{}{}: {}", indent, quote(key), literal(item, depth + 1))
                })
                .collect();
            format!("{{\n{}\n{}}}", fields.join(",\n"), closing)
        }
    }
}
