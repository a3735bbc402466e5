use serde::{Deserialize, Serialize};

use super::Pagination;

/// One person returned by the people search endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: i64,
    /// Display name, "First Last".
    pub name: String,
    pub region: String,
    pub direction: String,
    pub department: String,
    pub team: String,
    pub cell: String,
    /// Already recorded as attending the service being edited.
    #[serde(default)]
    pub marked: bool,
}

impl SearchResult {
    /// Hierarchy path from region down to cell, in display order.
    pub fn hierarchy(&self) -> [&str; 5] {
        [
            &self.region,
            &self.direction,
            &self.department,
            &self.team,
            &self.cell,
        ]
    }
}

/// One row of the filtered saints table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonRow {
    #[serde(default)]
    pub person_id: Option<i64>,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub cell: String,
    pub team: String,
    pub department: String,
    pub direction: String,
    pub region: String,
    pub is_active: bool,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl PersonRow {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Body of a background filter request.
///
/// The server also sends pre-rendered `html`/`pagination_html` fields; they are
/// ignored in favour of rendering from the structured data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterResponse {
    pub people: Vec<PersonRow>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}
