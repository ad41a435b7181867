use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Task key preselected before the catalog has loaded.
pub const DEFAULT_TASK: &str = "sentiment_analysis";

/// One entry from the remote task catalog. Some entries (embeddings)
/// carry no prompt; extra server-side fields such as the model hint are
/// ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskPreset {
    pub name: String,
    pub description: String,
    pub prompt: Option<String>,
}

pub type TaskCatalog = HashMap<String, TaskPreset>;

/// Envelope returned by `GET /api/pr-tasks`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskCatalogResponse {
    pub tasks: TaskCatalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_envelope_deserializes() {
        let body = r#"{
            "tasks": {
                "sentiment_analysis": {
                    "name": "Sentiment Analysis",
                    "description": "Analyze sentiment and themes in content",
                    "prompt": "Analyze the following content for sentiment and key themes:",
                    "model": "gpt-4"
                },
                "content_embedding": {
                    "name": "Content Embedding",
                    "description": "Generate embeddings for content analysis",
                    "model": "embeddings"
                }
            }
        }"#;
        let parsed: TaskCatalogResponse = serde_json::from_str(body).expect("should parse");
        assert_eq!(parsed.tasks.len(), 2);

        let analysis = &parsed.tasks["sentiment_analysis"];
        assert_eq!(analysis.name, "Sentiment Analysis");
        assert!(analysis.prompt.as_deref().unwrap().starts_with("Analyze"));

        // Embedding tasks ship without a prompt
        assert!(parsed.tasks["content_embedding"].prompt.is_none());
    }
}
