use serde::{Deserialize, Serialize};

/// A single catalog record for a medical-journal artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub category: String,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    pub content: String,
}

/// Per-request filter constraints, deserialized straight from the query
/// string. A field that is absent or an empty string means "no filter".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterCriteria {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Static sort descriptors echoed back by `/options`; not derived from data.
pub const SORT_OPTIONS: [SortOption; 2] = [
    SortOption {
        value: "name",
        label: "Sort by Name",
    },
    SortOption {
        value: "id",
        label: "Sort by ID",
    },
];

#[derive(Debug, Serialize)]
pub struct DocumentListResponse {
    pub documents: Vec<Document>,
    pub response_time_ms: f64,
}

/// Single-document payload: the document fields flattened at the top level
/// with the timing field alongside them.
#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    #[serde(flatten)]
    pub document: Document,
    pub response_time_ms: f64,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub categories: Vec<String>,
    pub types: Vec<String>,
    #[serde(rename = "sortOptions")]
    pub sort_options: Vec<SortOption>,
    pub response_time_ms: f64,
}
