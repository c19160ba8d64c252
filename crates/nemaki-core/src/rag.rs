//! Semantic (RAG) search request and response types.

use serde::{Deserialize, Serialize};

/// Health of the vector search backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RagHealth {
    pub enabled: bool,
    pub status: String,
}

/// Body of `POST /rag/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RagSearchRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_boost: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_boost: Option<f32>,
}

impl RagSearchRequest {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            top_k: None,
            min_score: None,
            folder_id: None,
            property_boost: None,
            content_boost: None,
        }
    }
}

/// One matching chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RagHit {
    pub document_id: String,
    pub document_name: Option<String>,
    pub score: f32,
    pub chunk_text: Option<String>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RagSearchResponse {
    pub query: String,
    #[serde(default)]
    pub total_results: u32,
    #[serde(default)]
    pub results: Vec<RagHit>,
    pub top_k: Option<u32>,
}
