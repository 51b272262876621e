//! URL query parameters used to relabel UI controls (`?ui-x=Left`).

use std::collections::HashMap;

/// Decoded `key=value` pairs; later pairs overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: HashMap<String, String>,
}

impl QueryParams {
    /// Parse `location.search`; a leading `?` is optional.
    pub fn parse(search: &str) -> Self {
        let mut out = Self::default();
        out.merge_search(search);
        out
    }

    /// Layer a query string over the current pairs.
    pub fn merge_search(&mut self, search: &str) {
        let query = search.strip_prefix('?').unwrap_or(search);
        for (k, v) in url::form_urlencoded::parse(query.as_bytes()) {
            self.params.insert(k.into_owned(), v.into_owned());
        }
    }

    /// Set a pair programmatically, e.g. before merging the page URL.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Label override for a control called `name`. Empty values don't count.
    pub fn ui_label(&self, name: &str) -> Option<&str> {
        self.get(&format!("ui-{name}")).filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_ui_override() {
        let q = QueryParams::parse("?ui-x=Foo&other=1");
        assert_eq!(q.ui_label("x"), Some("Foo"));
        assert_eq!(q.ui_label("y"), None);
        assert_eq!(q.get("other"), Some("1"));
    }

    #[test]
    fn percent_decodes_keys_and_values() {
        let q = QueryParams::parse("ui-x=Left%20%26%20Right");
        assert_eq!(q.ui_label("x"), Some("Left & Right"));
    }

    #[test]
    fn empty_and_bare_keys_are_not_labels() {
        let q = QueryParams::parse("ui-x=&ui-y");
        assert_eq!(q.ui_label("x"), None);
        assert_eq!(q.ui_label("y"), None);
    }

    #[test]
    fn url_overrides_programmatic_pairs() {
        let mut q = QueryParams::default();
        q.insert("ui-x", "Preset");
        q.insert("ui-y", "Kept");
        q.merge_search("?ui-x=FromUrl");
        assert_eq!(q.ui_label("x"), Some("FromUrl"));
        assert_eq!(q.ui_label("y"), Some("Kept"));
    }

    #[test]
    fn empty_search_is_empty() {
        assert_eq!(QueryParams::parse(""), QueryParams::default());
    }
}
