use serde_json::Value;

use crate::models::message::ModelInfo;

/// Shown when the service returns nothing renderable.
const EMPTY_RESPONSE_PLACEHOLDER: &str = "No response content";

/// A normalized agent reply: display content plus optional model metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentReply {
    pub content: String,
    pub model_info: Option<ModelInfo>,
}

/// Flatten the service's task-dependent response shapes into one
/// displayable reply.
///
/// The service tags nothing: image generation carries `image_url`,
/// embeddings carry `embedding`, chat tasks carry one of several text
/// fields. Presence is checked in priority order and the first hit wins;
/// an unrecognized object falls back to its serialized form so unknown
/// shapes still render.
pub fn normalize_response(body: &Value) -> AgentReply {
    let response = body.get("response");

    let Some(obj) = response.and_then(Value::as_object) else {
        return AgentReply {
            content: scalar_content(response),
            model_info: None,
        };
    };

    let params = obj.get("parameters").and_then(Value::as_object);
    let model_info = obj
        .get("model_used")
        .and_then(Value::as_str)
        .map(|name| ModelInfo {
            name: name.to_string(),
            temperature: params
                .and_then(|p| p.get("temperature"))
                .and_then(Value::as_f64),
            max_tokens: params
                .and_then(|p| p.get("max_tokens"))
                .and_then(Value::as_i64),
        });

    let content = if let Some(url) = obj
        .get("image_url")
        .and_then(Value::as_str)
        .filter(|u| !u.is_empty())
    {
        format!("![Generated Image]({url})")
    } else if let Some(embedding) = obj.get("embedding").filter(|v| !v.is_null()) {
        let pretty = serde_json::to_string_pretty(embedding)
            .unwrap_or_else(|_| embedding.to_string());
        format!("```json\n{pretty}\n```")
    } else if let Some(text) = first_text_field(obj) {
        text.to_string()
    } else {
        Value::Object(obj.clone()).to_string()
    };

    AgentReply { content, model_info }
}

fn first_text_field(obj: &serde_json::Map<String, Value>) -> Option<&str> {
    ["analysis", "content", "response"]
        .iter()
        .find_map(|key| obj.get(*key).and_then(Value::as_str).filter(|s| !s.is_empty()))
}

fn scalar_content(response: Option<&Value>) -> String {
    match response {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        None | Some(Value::Null) | Some(Value::String(_)) => {
            EMPTY_RESPONSE_PLACEHOLDER.to_string()
        }
        // Bare numbers, booleans and arrays are unusual but still renderable.
        Some(other) => other.to_string(),
    }
}
