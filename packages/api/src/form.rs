//! Form field serialization.
//!
//! A [`FormQuery`] is the ordered `(name, value)` list a browser `FormData` yields.
//! Order and repeated names are preserved, so `person_ids` checkboxes survive intact.

use url::form_urlencoded;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormQuery {
    fields: Vec<(String, String)>,
}

impl FormQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to append a field.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Every value submitted under `name`, in form order.
    pub fn all(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// `application/x-www-form-urlencoded` serialization.
    pub fn to_query_string(&self) -> String {
        self.encode(&[])
    }

    /// `<base>?<fields>[&extra...]`, or just `<base>` when there is nothing to append.
    pub fn url_with(&self, base: &str, extra: &[(&str, &str)]) -> String {
        let query = self.encode(extra);
        if query.is_empty() {
            base.to_string()
        } else {
            format!("{base}?{query}")
        }
    }

    fn encode(&self, extra: &[(&str, &str)]) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.fields {
            serializer.append_pair(name, value);
        }
        for (name, value) in extra {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormQuery {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
