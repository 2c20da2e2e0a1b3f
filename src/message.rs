// src/message.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Graph JSON from the plot; any shape is accepted.
    #[serde(default = "empty_object", deserialize_with = "null_as_empty")]
    pub context: Value,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

// An explicit `"context": null` counts as absent, like a missing field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Value, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(if value.is_null() { empty_object() } else { value })
}
