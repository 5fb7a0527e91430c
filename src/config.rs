use std::path::PathBuf;

pub const REGISTRY_ENV: &str = "VORLIE_DOCS_REGISTRY";
pub const BASE_URL_ENV: &str = "VORLIE_DOCS_BASE_URL";

/// Runtime settings. Flags win over environment variables; anything left
/// unset falls back to the embedded registry and its `baseUrl`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocsConfig {
    pub registry_path: Option<PathBuf>,
    pub base_url: Option<String>,
}

impl DocsConfig {
    pub fn resolve(registry_flag: Option<PathBuf>, base_url_flag: Option<String>) -> Self {
        Self::resolve_with(registry_flag, base_url_flag, |key| std::env::var(key).ok())
    }

    fn resolve_with(
        registry_flag: Option<PathBuf>,
        base_url_flag: Option<String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let non_empty = |value: String| (!value.trim().is_empty()).then_some(value);

        Self {
            registry_path: registry_flag
                .or_else(|| env(REGISTRY_ENV).and_then(non_empty).map(PathBuf::from)),
            base_url: base_url_flag
                .and_then(non_empty)
                .or_else(|| env(BASE_URL_ENV).and_then(non_empty)),
        }
    }
}
