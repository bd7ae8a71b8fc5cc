//! Query parameters as they participate in the canonical resource.
//!
//! Each key maps to exactly one of three shapes:
//!
//! ```text
//! Single("v")        -> key=v
//! Multi(["x", "y"])  -> key=x, key=y
//! Flag               -> key
//! ```

use serde_json::Value;

use crate::error::AuthError;

/// The value bound to a single query key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// One value, rendered as `key=value`.
    Single(String),
    /// Several values, rendered as one `key=value` entry each. Never empty.
    Multi(Vec<String>),
    /// A valueless flag parameter, rendered as the bare key.
    Flag,
}

impl QueryValue {
    /// Build a multi-valued parameter. An empty list yields [`QueryValue::Flag`].
    pub fn multi<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            Self::Flag
        } else {
            Self::Multi(values)
        }
    }

    /// Parse a dynamic JSON value: a scalar or an array of scalars.
    fn from_json(key: &str, value: &Value) -> Result<Self, AuthError> {
        match value {
            Value::Array(items) => {
                let values = items
                    .iter()
                    .map(|item| {
                        scalar_to_string(item).ok_or_else(|| {
                            AuthError::InvalidQueries(format!(
                                "values of `{key}` must be strings, numbers or booleans"
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::multi(values))
            }
            other => scalar_to_string(other).map(Self::Single).ok_or_else(|| {
                AuthError::InvalidQueries(format!(
                    "`{key}` must be a string or a list of strings, got {other}"
                ))
            }),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        Self::multi(values)
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(values: Vec<&str>) -> Self {
        Self::multi(values)
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// An ordered collection of unescaped query parameters.
///
/// Inserting an existing key replaces its value in place.
///
/// # Examples
///
/// ```
/// use fcstack_auth::{Queries, QueryValue};
///
/// let queries: Queries = [("b", QueryValue::from("2")), ("a", QueryValue::from("1"))]
///     .into_iter()
///     .collect();
/// assert_eq!(queries.canonical_entries(), vec!["a=1", "b=2"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queries {
    params: Vec<(String, QueryValue)>,
}

impl Queries {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.params.push((key, value)),
        }
    }

    /// Builder-style [`Queries::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up the value bound to `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether no parameters are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Validate a dynamic JSON value as a queries mapping.
    ///
    /// The value must be an object whose members are strings, numbers,
    /// booleans, or arrays of those. An empty array marks a flag parameter.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidQueries`] for any other shape.
    pub fn from_json(value: &Value) -> Result<Self, AuthError> {
        let Value::Object(map) = value else {
            return Err(AuthError::InvalidQueries(format!(
                "a mapping is required for queries, got {value}"
            )));
        };

        let mut queries = Self::new();
        for (key, value) in map {
            queries.insert(key.clone(), QueryValue::from_json(key, value)?);
        }
        Ok(queries)
    }

    /// Flatten into `key=value` / bare `key` entries sorted lexicographically.
    #[must_use]
    pub fn canonical_entries(&self) -> Vec<String> {
        let mut entries = Vec::with_capacity(self.params.len());
        for (key, value) in &self.params {
            match value {
                QueryValue::Single(v) => entries.push(format!("{key}={v}")),
                QueryValue::Multi(values) => {
                    entries.extend(values.iter().map(|v| format!("{key}={v}")));
                }
                QueryValue::Flag => entries.push(key.clone()),
            }
        }
        entries.sort_unstable();
        entries
    }

    /// Render the URL-encoded query string sent on the wire (without `?`).
    ///
    /// ```
    /// use fcstack_auth::{Queries, QueryValue};
    ///
    /// let queries = Queries::new()
    ///     .with("q", "a b")
    ///     .with("tag", vec!["x", "y"])
    ///     .with("debug", QueryValue::Flag);
    /// assert_eq!(queries.to_query_string(), "q=a+b&tag=x&tag=y&debug");
    /// ```
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        for (key, value) in &self.params {
            let key: String = form_urlencoded::byte_serialize(key.as_bytes()).collect();
            match value {
                QueryValue::Single(v) => pairs.push(format!("{key}={}", encode(v))),
                QueryValue::Multi(values) => {
                    pairs.extend(values.iter().map(|v| format!("{key}={}", encode(v))));
                }
                QueryValue::Flag => pairs.push(key),
            }
        }
        pairs.join("&")
    }
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

impl<K, V> FromIterator<(K, V)> for Queries
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut queries = Self::new();
        for (key, value) in iter {
            queries.insert(key, value);
        }
        queries
    }
}

impl TryFrom<&Value> for Queries {
    type Error = AuthError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_json(value)
    }
}
