use crate::registry::NavGroup;
use crate::routes::route_for;

/// Sidebar as a Markdown outline: static pages first, then one section per group.
pub fn sidebar(title: &str, groups: &[NavGroup<'_>]) -> String {
    let mut out = format!(
        "# {}\n\n- [Introduction](/introduction)\n- [Authentication](/authentication)\n",
        title
    );

    for group in groups {
        out.push_str(&format!("\n## {}\n\n", group.label.to_uppercase()));
        for endpoint in &group.endpoints {
            out.push_str(&format!(
                "- `{:<6}` [{}]({})\n",
                endpoint.method,
                endpoint.path,
                route_for(&endpoint.id)
            ));
        }
    }

    out
}
