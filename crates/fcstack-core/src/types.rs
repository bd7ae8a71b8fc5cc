//! Naming helpers shared by the request layer.

/// Append a version or alias qualifier to a resource name.
///
/// ```
/// use fcstack_core::qualified_name;
///
/// assert_eq!(qualified_name("svc", Some("LATEST")), "svc.LATEST");
/// assert_eq!(qualified_name("svc", Some("")), "svc");
/// assert_eq!(qualified_name("svc", None), "svc");
/// ```
#[must_use]
pub fn qualified_name(name: &str, qualifier: Option<&str>) -> String {
    match qualifier {
        Some(q) if !q.is_empty() => format!("{name}.{q}"),
        _ => name.to_owned(),
    }
}
