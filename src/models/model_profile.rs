use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One entry from the remote model catalog. Chat models carry token and
/// temperature limits; the image model carries quality and size instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelProfile {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

pub type ModelCatalog = HashMap<String, ModelProfile>;

/// Envelope returned by `GET /api/models`.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelCatalogResponse {
    pub models: ModelCatalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_catalog_envelope_deserializes() {
        let body = r#"{
            "models": {
                "gpt-4": {"name": "gpt-4", "max_tokens": 2048, "temperature": 0.7},
                "dall-e-3": {"name": "dall-e-3", "quality": "standard", "size": "1024x1024"}
            }
        }"#;
        let parsed: ModelCatalogResponse = serde_json::from_str(body).expect("should parse");
        assert_eq!(parsed.models["gpt-4"].max_tokens, Some(2048));
        assert!(parsed.models["dall-e-3"].max_tokens.is_none());
        assert_eq!(parsed.models["dall-e-3"].size.as_deref(), Some("1024x1024"));
    }
}
