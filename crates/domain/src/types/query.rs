//! Optional query parameters
//!
//! Each list/detail operation accepts an optional parameter set. Only the
//! fields a caller actually sets are rendered into the query string:
//! integers in decimal, booleans as `true`/`false`, strings verbatim.

use std::fmt;

/// Ordered `(key, value)` pairs ready to append to a URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs {
    pairs: Vec<(&'static str, String)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render an integer field when present
    pub fn int(&mut self, key: &'static str, value: Option<i32>) -> &mut Self {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    /// Render a boolean field as `true`/`false` when present
    pub fn boolean(&mut self, key: &'static str, value: Option<bool>) -> &mut Self {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    /// Render a text field when present
    pub fn text(&mut self, key: &'static str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    /// Value rendered for `key`, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// A parameter set that knows how to render itself as query pairs
pub trait QueryParameters {
    /// Append every present field to `pairs`
    fn append_to(&self, pairs: &mut QueryPairs);

    fn to_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        self.append_to(&mut pairs);
        pairs
    }
}

/// Sort order accepted by every list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SortDirection {
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paging and ordering fields shared by every list endpoint
///
/// Server defaults: `limit` 50, `offset` 0, `sort_field` `id`,
/// `sort_direction` ASC.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paging {
    pub limit: Option<i32>,
    pub offset: Option<i32>,
    pub sort_field: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

impl Paging {
    /// First `limit` records
    pub fn limit(limit: i32) -> Self {
        Self { limit: Some(limit), ..Default::default() }
    }

    #[must_use]
    pub fn with_offset(mut self, offset: i32) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn sorted_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_field = Some(field.into());
        self.sort_direction = Some(direction);
        self
    }
}

impl QueryParameters for Paging {
    fn append_to(&self, pairs: &mut QueryPairs) {
        pairs
            .int("limit", self.limit)
            .int("offset", self.offset)
            .text("sort_field", self.sort_field.as_deref())
            .text("sort_direction", self.sort_direction.map(SortDirection::as_str));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_omitted() {
        let pairs = Paging::default().to_pairs();
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_paging_renders_present_fields_in_order() {
        let pairs = Paging::limit(10).with_offset(20).sorted_by("id", SortDirection::Desc).to_pairs();

        let rendered: Vec<_> = pairs.iter().collect();
        assert_eq!(
            rendered,
            vec![("limit", "10"), ("offset", "20"), ("sort_field", "id"), ("sort_direction", "DESC")]
        );
    }

    #[test]
    fn test_scalar_rendering() {
        let mut pairs = QueryPairs::new();
        pairs.boolean("yes", Some(true)).boolean("no", Some(false)).int("neg", Some(-3));

        assert_eq!(pairs.get("yes"), Some("true"));
        assert_eq!(pairs.get("no"), Some("false"));
        assert_eq!(pairs.get("neg"), Some("-3"));
        assert_eq!(pairs.get("missing"), None);
        assert_eq!(pairs.len(), 3);
    }
}
