use std::collections::BTreeSet;

use crate::models::{Document, FilterCriteria};

/// Immutable in-memory catalog of documents. Built once at startup and
/// shared read-only behind an `Arc`; there are no create/update/delete
/// operations, so concurrent requests never race on it.
#[derive(Debug)]
pub struct DocumentStore {
    documents: Vec<Document>,
}

impl DocumentStore {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Store seeded with the fixed sample catalog (ids 1-12).
    pub fn with_sample_data() -> Self {
        Self::new(sample_documents())
    }

    pub fn all(&self) -> &[Document] {
        &self.documents
    }

    /// Exact-id lookup. `None` means the id is unknown, which the HTTP
    /// layer surfaces as a 404.
    pub fn get(&self, id: u32) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    /// Stable conjunctive filter: keeps the documents matching every
    /// supplied criterion, in their original relative order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<Document> {
        self.documents
            .iter()
            .filter(|doc| matches(doc, criteria))
            .cloned()
            .collect()
    }

    /// Distinct categories present in the store, lexicographically sorted.
    pub fn categories(&self) -> Vec<String> {
        distinct(self.documents.iter().map(|doc| doc.category.as_str()))
    }

    /// Distinct document types present in the store, lexicographically sorted.
    pub fn types(&self) -> Vec<String> {
        distinct(self.documents.iter().map(|doc| doc.doc_type.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

/// An absent criterion and an empty-string criterion both mean "no filter".
fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn matches(doc: &Document, criteria: &FilterCriteria) -> bool {
    if let Some(term) = active(&criteria.search) {
        let term = term.to_lowercase();
        if !doc.title.to_lowercase().contains(&term)
            && !doc.abstract_text.to_lowercase().contains(&term)
        {
            return false;
        }
    }

    if let Some(doc_type) = active(&criteria.doc_type) {
        if doc.doc_type.to_lowercase() != doc_type.to_lowercase() {
            return false;
        }
    }

    if let Some(category) = active(&criteria.category) {
        if doc.category.to_lowercase() != category.to_lowercase() {
            return false;
        }
    }

    true
}

fn document(
    id: u32,
    title: &str,
    doc_type: &str,
    category: &str,
    abstract_text: &str,
    content: &str,
) -> Document {
    Document {
        id,
        title: title.to_string(),
        doc_type: doc_type.to_string(),
        category: category.to_string(),
        abstract_text: abstract_text.to_string(),
        content: content.to_string(),
    }
}

/// Sample catalog of medical journal documents with various types and categories.
fn sample_documents() -> Vec<Document> {
    vec![
        document(
            1,
            "Advances in Cardiology",
            "Review",
            "Cardiology",
            "This review discusses recent advances in cardiology...",
            "Full content of the review on advances in cardiology. Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
        ),
        document(
            2,
            "Neurological Cases in Pediatrics",
            "Case Report",
            "Neurology",
            "A case report on neurological issues in pediatric patients...",
            "Detailed content about neurological cases in pediatric neurology. Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
        ),
        document(
            3,
            "Oncology: New Frontiers",
            "Research Article",
            "Oncology",
            "Research article exploring new frontiers in oncology treatments...",
            "In-depth research content on oncology. Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
        ),
        document(
            4,
            "Clinical Study on Diabetes",
            "Clinical Study",
            "Endocrinology",
            "A clinical study discussing diabetes advancements...",
            "Study details, methodology, results, and discussion on diabetes. Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
        ),
        document(
            5,
            "Innovations in Medical Imaging",
            "Review",
            "Radiology",
            "Review of recent innovations in medical imaging technologies...",
            "Detailed discussion on medical imaging innovations. Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
        ),
        document(
            6,
            "Emergency Medicine Protocols",
            "Guidelines",
            "Emergency Medicine",
            "Updated protocols for emergency medicine procedures...",
            "Comprehensive guidelines for emergency medicine procedures and best practices. Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
        ),
        document(
            7,
            "Psychiatric Treatment Methods",
            "Clinical Study",
            "Psychiatry",
            "Study on modern psychiatric treatment approaches...",
            "Analysis of various psychiatric treatment methods and their effectiveness. Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
        ),
        document(
            8,
            "Surgical Techniques in Orthopedics",
            "Research Article",
            "Orthopedics",
            "New surgical techniques for joint replacement...",
            "Detailed description of innovative surgical techniques in orthopedics. Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
        ),
        document(
            9,
            "Pediatric Vaccination Studies",
            "Clinical Study",
            "Pediatrics",
            "Analysis of vaccination effectiveness in children...",
            "Comprehensive study of vaccination outcomes in pediatric populations. Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
        ),
        document(
            10,
            "Dermatology Case Series",
            "Case Report",
            "Dermatology",
            "Series of unusual dermatological cases and treatments...",
            "Collection of interesting dermatological cases and their management. Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
        ),
        document(
            11,
            "Advances in Ophthalmology",
            "Review",
            "Ophthalmology",
            "Recent developments in eye surgery and treatment...",
            "Overview of latest advances in ophthalmological procedures and treatments. Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
        ),
        document(
            12,
            "Infectious Disease Management",
            "Guidelines",
            "Infectious Disease",
            "Updated guidelines for managing infectious diseases...",
            "Current protocols and guidelines for infectious disease management and control. Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(documents: &[Document]) -> Vec<u32> {
        documents.iter().map(|doc| doc.id).collect()
    }

    fn criteria(search: &str, doc_type: &str, category: &str) -> FilterCriteria {
        let opt = |s: &str| {
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        };
        FilterCriteria {
            search: opt(search),
            doc_type: opt(doc_type),
            category: opt(category),
        }
    }

    #[test]
    fn test_empty_criteria_returns_full_store_in_order() {
        let store = DocumentStore::with_sample_data();
        let result = store.filter(&FilterCriteria::default());

        assert_eq!(ids(&result), (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_string_criteria_are_no_filters() {
        let store = DocumentStore::with_sample_data();
        let empty = FilterCriteria {
            search: Some(String::new()),
            doc_type: Some(String::new()),
            category: Some(String::new()),
        };

        assert_eq!(store.filter(&empty).len(), store.all().len());
    }

    #[test]
    fn test_search_matches_title_substring_case_insensitive() {
        let store = DocumentStore::with_sample_data();

        for term in ["cardiology", "CARDIOLOGY", "Advances in Car"] {
            let result = store.filter(&criteria(term, "", ""));
            assert!(
                result.iter().any(|doc| doc.id == 1),
                "term {:?} should match document 1",
                term
            );
        }
    }

    #[test]
    fn test_search_matches_abstract() {
        let store = DocumentStore::with_sample_data();

        // "joint replacement" only appears in the abstract of document 8
        let result = store.filter(&criteria("joint replacement", "", ""));
        assert_eq!(ids(&result), vec![8]);
    }

    #[test]
    fn test_search_with_no_matches_returns_empty() {
        let store = DocumentStore::with_sample_data();
        let result = store.filter(&criteria("veterinary", "", ""));

        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_by_type_is_case_insensitive_exact() {
        let store = DocumentStore::with_sample_data();

        let result = store.filter(&criteria("", "review", ""));
        assert_eq!(ids(&result), vec![1, 5, 11]);

        // "Rev" is a substring, not an exact type
        let result = store.filter(&criteria("", "Rev", ""));
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_by_category() {
        let store = DocumentStore::with_sample_data();

        let result = store.filter(&criteria("", "", "Oncology"));
        assert_eq!(ids(&result), vec![3]);

        let result = store.filter(&criteria("", "", "oncology"));
        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn test_unknown_type_or_category_yields_no_matches() {
        let store = DocumentStore::with_sample_data();

        assert!(store.filter(&criteria("", "Editorial", "")).is_empty());
        assert!(store.filter(&criteria("", "", "Astrology")).is_empty());
    }

    #[test]
    fn test_criteria_combine_conjunctively() {
        let store = DocumentStore::with_sample_data();

        // Both Review documents mentioning "advances" in the title
        let result = store.filter(&criteria("advances", "Review", ""));
        assert_eq!(ids(&result), vec![1, 11]);

        // Narrowed further by category
        let result = store.filter(&criteria("advances", "Review", "Ophthalmology"));
        assert_eq!(ids(&result), vec![11]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let store = DocumentStore::with_sample_data();
        let query = criteria("in", "", "");

        let first = store.filter(&query);
        let second = store.filter(&query);

        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn test_get_by_id() {
        let store = DocumentStore::with_sample_data();

        let doc = store.get(3).expect("document 3 should exist");
        assert_eq!(doc.title, "Oncology: New Frontiers");
        assert!(!doc.content.is_empty());

        assert!(store.get(999).is_none());
    }

    #[test]
    fn test_categories_are_sorted_and_distinct() {
        let store = DocumentStore::with_sample_data();
        let categories = store.categories();

        assert_eq!(categories.len(), 12);
        let mut sorted = categories.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(categories, sorted);
        assert_eq!(categories[0], "Cardiology");
    }

    #[test]
    fn test_types_are_sorted_and_distinct() {
        let store = DocumentStore::with_sample_data();

        assert_eq!(
            store.types(),
            vec![
                "Case Report",
                "Clinical Study",
                "Guidelines",
                "Research Article",
                "Review"
            ]
        );
    }

    #[test]
    fn test_document_json_field_names() {
        let store = DocumentStore::with_sample_data();
        let value = serde_json::to_value(store.get(1).unwrap()).unwrap();

        assert_eq!(value["type"], "Review");
        assert_eq!(
            value["abstract"],
            "This review discusses recent advances in cardiology..."
        );
        assert!(value.get("doc_type").is_none());
    }
}
