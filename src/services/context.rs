use serde::Serialize;
use serde_json::{Map, Value, json};

/// Largest context payload, in characters, embedded into a prompt.
pub const MAX_CONTEXT_CHARS: usize = 20_000;

/// Curves kept by the slimming fallback.
const SLIM_CURVE_LIMIT: usize = 8;

const EMPTY_CONTEXT: &str = "{}";

/// Serialize the graph context compactly and clamp its size to protect the
/// prompt.
///
/// A context that fits within `max_chars` (counted in characters, not bytes)
/// passes through unchanged. An oversized one is slimmed in a single pass to
/// its first 8 `curves` entries plus the `settings` block; the slimmed form is
/// used even if it is still over the cap. Serialization trouble of any kind
/// degrades to `"{}"` instead of failing the request.
pub fn clamp_context<C: Serialize>(ctx: &C, max_chars: usize) -> String {
    let payload = match serde_json::to_string(ctx) {
        Ok(payload) => payload,
        Err(_) => return EMPTY_CONTEXT.to_string(),
    };
    if payload.chars().count() <= max_chars {
        return payload;
    }

    // Huge payload: keep the essential fields only.
    let Ok(value) = serde_json::to_value(ctx) else {
        return EMPTY_CONTEXT.to_string();
    };
    let Some(fields) = value.as_object() else {
        // Nothing to slim in a non-object context.
        return EMPTY_CONTEXT.to_string();
    };

    let curves: Vec<Value> = fields
        .get("curves")
        .and_then(Value::as_array)
        .map(|curves| curves.iter().take(SLIM_CURVE_LIMIT).cloned().collect())
        .unwrap_or_default();
    let settings = fields
        .get("settings")
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()));

    let slim = json!({ "curves": curves, "settings": settings });
    serde_json::to_string(&slim).unwrap_or_else(|_| EMPTY_CONTEXT.to_string())
}
