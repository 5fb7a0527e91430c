use super::Registry;
use crate::models::HttpMethod;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    DuplicateId {
        id: String,
    },
    DuplicateRoute {
        id: String,
        method: HttpMethod,
        path: String,
    },
    MissingPathParameter {
        id: String,
        placeholder: String,
    },
    ResponseCodeMismatch {
        id: String,
        code: u16,
        success: bool,
    },
    InvalidExampleBody {
        id: String,
        field: &'static str,
        reason: String,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DuplicateId { id } => write!(f, "{}: id declared more than once", id),
            Violation::DuplicateRoute { id, method, path } => {
                write!(f, "{}: route {} {} already documented", id, method, path)
            }
            Violation::MissingPathParameter { id, placeholder } => write!(
                f,
                "{}: placeholder ':{}' has no pathParameters entry",
                id, placeholder
            ),
            Violation::ResponseCodeMismatch { id, code, success } => write!(
                f,
                "{}: response code {} marked success={} but codes below 400 are successes",
                id, code, success
            ),
            Violation::InvalidExampleBody { id, field, reason } => {
                write!(f, "{}: {} is not valid JSON ({})", id, field, reason)
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

impl Registry {
    /// Checks the registry-wide invariants, reporting violations in declaration order.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();
        let mut seen_ids = HashSet::new();
        let mut seen_routes = HashSet::new();

        for endpoint in self.endpoints() {
            if !seen_ids.insert(endpoint.id.as_str()) {
                report.violations.push(Violation::DuplicateId {
                    id: endpoint.id.clone(),
                });
            }

            if !seen_routes.insert((endpoint.method, endpoint.path.as_str())) {
                report.violations.push(Violation::DuplicateRoute {
                    id: endpoint.id.clone(),
                    method: endpoint.method,
                    path: endpoint.path.clone(),
                });
            }

            for placeholder in endpoint.path_placeholders() {
                let documented = endpoint
                    .path_parameters
                    .iter()
                    .any(|param| param.name == placeholder);
                if !documented {
                    report.violations.push(Violation::MissingPathParameter {
                        id: endpoint.id.clone(),
                        placeholder: placeholder.to_string(),
                    });
                }
            }

            for response in &endpoint.response_codes {
                if response.success != response.is_success_code() {
                    report.violations.push(Violation::ResponseCodeMismatch {
                        id: endpoint.id.clone(),
                        code: response.code,
                        success: response.success,
                    });
                }
            }

            let bodies = [
                ("requestBody", endpoint.request_body()),
                ("responseBody", endpoint.response_body()),
            ];
            for (field, body) in bodies {
                let Some(body) = body else { continue };
                if let Err(err) = serde_json::from_str::<serde_json::Value>(body) {
                    report.violations.push(Violation::InvalidExampleBody {
                        id: endpoint.id.clone(),
                        field,
                        reason: err.to_string(),
                    });
                }
            }
        }

        tracing::debug!(
            endpoints = self.len(),
            violations = report.violations.len(),
            "Validated registry"
        );
        report
    }
}
