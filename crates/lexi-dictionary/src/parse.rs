use serde_json::Value;

/// Pull the first definition text of every meaning in the first entry.
///
/// Expected shape:
/// `[{ "meanings": [{ "definitions": [{ "definition": "..." }] }] }]`
///
/// Anything else degrades: a missing or non-array `meanings` gives an empty
/// list, and a meaning without a usable first definition is skipped.
pub fn extract_definitions(json: &Value) -> Vec<String> {
    let Some(meanings) = json
        .get(0)
        .and_then(|entry| entry.get("meanings"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    meanings
        .iter()
        .filter_map(|meaning| {
            meaning["definitions"]
                .get(0)
                .and_then(|d| d["definition"].as_str())
                .map(str::to_string)
        })
        .collect()
}
