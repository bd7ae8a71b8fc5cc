//! Paging parameters shared by the `list_*` operations.

use fcstack_auth::Queries;
use typed_builder::TypedBuilder;

/// Options accepted by every list call.
///
/// Rendered as the query parameters `limit`, `nextToken`, `prefix` and
/// `startKey`; unset fields are omitted.
///
/// # Examples
///
/// ```
/// use fcstack_model::ListOptions;
///
/// let opts = ListOptions::builder().limit(2).prefix("demo").build();
/// assert_eq!(opts.to_queries().to_query_string(), "limit=2&prefix=demo");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, TypedBuilder)]
pub struct ListOptions {
    /// Maximum number of items to return.
    #[builder(default, setter(strip_option))]
    pub limit: Option<u32>,
    /// Token returned by the previous page.
    #[builder(default, setter(into, strip_option))]
    pub next_token: Option<String>,
    /// Only return names starting with this prefix.
    #[builder(default, setter(into, strip_option))]
    pub prefix: Option<String>,
    /// Only return names sorting after this key.
    #[builder(default, setter(into, strip_option))]
    pub start_key: Option<String>,
    /// Additional query parameters for endpoint-specific filters.
    #[builder(default)]
    pub extra: Queries,
}

impl ListOptions {
    /// Render the options as query parameters.
    #[must_use]
    pub fn to_queries(&self) -> Queries {
        let mut queries = self.extra.clone();
        if let Some(limit) = self.limit {
            queries.insert("limit", limit.to_string());
        }
        if let Some(token) = &self.next_token {
            queries.insert("nextToken", token.as_str());
        }
        if let Some(prefix) = &self.prefix {
            queries.insert("prefix", prefix.as_str());
        }
        if let Some(start_key) = &self.start_key {
            queries.insert("startKey", start_key.as_str());
        }
        queries
    }
}

#[cfg(test)]
mod tests {
    use fcstack_auth::QueryValue;

    use super::*;

    #[test]
    fn test_should_render_nothing_for_default_options() {
        assert!(ListOptions::default().to_queries().is_empty());
    }

    #[test]
    fn test_should_render_camel_case_keys() {
        let opts = ListOptions::builder()
            .next_token("tok")
            .start_key("b")
            .build();
        let queries = opts.to_queries();

        assert_eq!(
            queries.get("nextToken"),
            Some(&QueryValue::Single("tok".to_owned()))
        );
        assert_eq!(
            queries.get("startKey"),
            Some(&QueryValue::Single("b".to_owned()))
        );
        assert_eq!(queries.len(), 2);
    }

    #[test]
    fn test_should_merge_extra_queries() {
        let opts = ListOptions::builder()
            .limit(5)
            .extra(Queries::new().with("serviceName", "svc"))
            .build();
        let queries = opts.to_queries();

        assert_eq!(queries.len(), 2);
        assert!(queries.get("serviceName").is_some());
    }
}
