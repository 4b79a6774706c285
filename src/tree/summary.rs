use crate::ast::Value;
use crate::json;

/// Longest scalar rendering kept before truncation.
const MAX_SCALAR_LEN: usize = 60;

/// One-line display text for a value: scalars render as their JSON
/// form, containers as a child count.
pub(super) fn summarize(value: &Value) -> String {
    match value {
        Value::Array(elements) => {
            format!("[{} item{}]", elements.len(), if elements.len() != 1 { "s" } else { "" })
        }
        Value::Object(entries) => {
            format!("{{{} key{}}}", entries.len(), if entries.len() != 1 { "s" } else { "" })
        }
        scalar => truncate(json::to_string(scalar)),
    }
}

fn truncate(text: String) -> String {
    if text.chars().count() <= MAX_SCALAR_LEN {
        return text;
    }
    let head: String = text.chars().take(MAX_SCALAR_LEN).collect();
    format!("{}…", head)
}
