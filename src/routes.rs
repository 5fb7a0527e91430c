use crate::models::EndpointDescriptor;
use crate::registry::Registry;

const ENDPOINT_PREFIX: &str = "/api-reference/";

#[derive(Debug)]
pub enum Page<'a> {
    Introduction,
    Authentication,
    Endpoint(&'a EndpointDescriptor),
    NotFound,
}

pub fn route_for(id: &str) -> String {
    format!("{}{}", ENDPOINT_PREFIX, id)
}

/// Maps a site path onto a page. Never fails: unknown paths are `NotFound`.
pub fn resolve<'a>(registry: &'a Registry, path: &str) -> Page<'a> {
    let trimmed = path.trim_end_matches('/');
    match trimmed {
        "" | "/introduction" => Page::Introduction,
        "/authentication" => Page::Authentication,
        _ => match trimmed.strip_prefix(ENDPOINT_PREFIX) {
            Some(id) if !id.is_empty() && !id.contains('/') => registry
                .get(id)
                .map_or(Page::NotFound, Page::Endpoint),
            _ => Page::NotFound,
        },
    }
}
