//! Client-facing UMLS data shapes.
//!
//! These describe what the UMLS search and hierarchy endpoints return once
//! they have passed through the proxy. The proxy itself never parses them.

use serde::{Deserialize, Serialize};

/// One concept hit from a UMLS search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UmlsSearchResult {
    /// Concept unique identifier (CUI)
    pub ui: String,
    pub name: String,
    pub root_source: String,
    /// Every vocabulary this concept appears in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<UmlsSource>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_types: Option<Vec<SemanticType>>,
    /// Number of atoms (source codes) for the concept
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atom_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Mapping of a concept into a single source vocabulary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UmlsSource {
    pub code: String,
    pub vocabulary: String,
    pub term: String,
    pub source_concept: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticType {
    pub name: String,
    pub uri: String,
}

/// Related concept, e.g. a parent (`PAR`) or child (`CHD`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UmlsRelationship {
    pub cui: String,
    pub name: String,
    pub relationship_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_relation_label: Option<String>,
}

/// Atom-level node in an ancestor/descendant tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UmlsHierarchyNode {
    /// Atom unique identifier (AUI)
    pub ui: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub root_source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Relevance,
    Alphabetical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchUmlsRequest {
    pub search_term: String,
    /// Restrict hits to these root sources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabularies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchUmlsResponse {
    pub success: bool,
    pub data: Vec<UmlsSearchResult>,
    pub page_number: u32,
    pub page_size: u32,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_result_with_only_required_fields() {
        let result: UmlsSearchResult = serde_json::from_value(json!({
            "ui": "C0004057",
            "name": "Aspirin",
            "rootSource": "MTH"
        }))
        .unwrap();

        assert_eq!(result.ui, "C0004057");
        assert_eq!(result.root_source, "MTH");
        assert!(result.sources.is_none());
        assert!(result.semantic_types.is_none());
        assert!(result.atom_count.is_none());

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({"ui": "C0004057", "name": "Aspirin", "rootSource": "MTH"})
        );
    }

    #[test]
    fn test_search_result_missing_required_field_fails() {
        let result = serde_json::from_value::<UmlsSearchResult>(json!({
            "ui": "C0004057",
            "name": "Aspirin"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_search_result_full() {
        let result: UmlsSearchResult = serde_json::from_value(json!({
            "ui": "C0004057",
            "name": "Aspirin",
            "rootSource": "MTH",
            "sources": [{
                "code": "1191",
                "vocabulary": "RXNORM",
                "term": "aspirin",
                "sourceConcept": "1191"
            }],
            "semanticTypes": [{
                "name": "Pharmacologic Substance",
                "uri": "/api/umls/semantic-network/2024AB/TUI/T121"
            }],
            "atomCount": 112,
            "status": "R"
        }))
        .unwrap();

        let sources = result.sources.unwrap();
        assert_eq!(sources[0].vocabulary, "RXNORM");
        assert_eq!(sources[0].source_concept, "1191");
        assert_eq!(
            result.semantic_types.unwrap()[0].name,
            "Pharmacologic Substance"
        );
        assert_eq!(result.atom_count, Some(112));
        assert_eq!(result.status.as_deref(), Some("R"));
    }

    #[test]
    fn test_relationship_and_hierarchy_node() {
        let rel: UmlsRelationship = serde_json::from_value(json!({
            "cui": "C0003211",
            "name": "Anti-Inflammatory Agents, Non-Steroidal",
            "relationshipLabel": "PAR"
        }))
        .unwrap();
        assert_eq!(rel.relationship_label, "PAR");
        assert!(rel.additional_relation_label.is_none());

        let node: UmlsHierarchyNode = serde_json::from_value(json!({
            "ui": "A0016012",
            "name": "Aspirin",
            "code": "387458008",
            "rootSource": "SNOMEDCT_US",
            "relationLabel": "CHD"
        }))
        .unwrap();
        assert_eq!(node.code.as_deref(), Some("387458008"));
        assert_eq!(node.relation_label.as_deref(), Some("CHD"));
    }

    #[test]
    fn test_search_request_sort_modes() {
        let request: SearchUmlsRequest = serde_json::from_value(json!({
            "searchTerm": "aspirin",
            "vocabularies": ["RXNORM", "SNOMEDCT_US"],
            "pageNumber": 2,
            "pageSize": 25,
            "sortBy": "alphabetical"
        }))
        .unwrap();
        assert_eq!(request.sort_by, Some(SortBy::Alphabetical));
        assert_eq!(request.page_number, Some(2));

        let bad = serde_json::from_value::<SearchUmlsRequest>(json!({
            "searchTerm": "aspirin",
            "sortBy": "newest"
        }));
        assert!(bad.is_err());
        assert_eq!(SortBy::default(), SortBy::Relevance);
    }

    #[test]
    fn test_search_response_serializes_camel_case() {
        let response = SearchUmlsResponse {
            success: true,
            data: vec![],
            page_number: 1,
            page_size: 25,
            total: 0,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({"success": true, "data": [], "pageNumber": 1, "pageSize": 25, "total": 0})
        );
    }
}
