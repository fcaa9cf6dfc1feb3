//! Tool handlers
//!
//! Conversion failures are tool results with `isError: true`, not protocol
//! errors: the client shows the message and the user corrects the input.
//! Protocol errors are reserved for malformed calls.

use serde_json::{json, Value as JsonValue};
use quickunit_core::ErrorReport;
use quickunit_units::{
    Category, Conversion, ConversionError, ConversionTable, Widget, table_by_name,
};
use crate::config::Config;
use crate::McpError;

pub fn handle_tools_list() -> Result<JsonValue, McpError> {
    Ok(json!({
        "tools": [
            {
                "name": "quick_convert",
                "description": "Convert a value with the quick converter (length and temperature).",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": {
                            "type": ["number", "string"],
                            "description": "Value to convert; text is read up to the first non-numeric character"
                        },
                        "from": { "type": "string", "description": "Source unit, e.g. \"celsius\"" },
                        "to": { "type": "string", "description": "Target unit, e.g. \"fahrenheit\"" },
                        "category": { "type": "string", "description": "Optional category scope" }
                    },
                    "required": ["value", "from", "to"]
                }
            },
            {
                "name": "mini_convert",
                "description": "Convert a value with a category's mini converter.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": {
                            "type": ["number", "string"],
                            "description": "Value to convert"
                        },
                        "category": {
                            "type": "string",
                            "enum": ["length", "area", "volume", "temperature", "mass"]
                        },
                        "from": { "type": "string", "description": "Source unit" },
                        "to": { "type": "string", "description": "Target unit" }
                    },
                    "required": ["value", "category", "from", "to"]
                }
            },
            {
                "name": "list_conversions",
                "description": "List the unit pairs a converter supports, with their formulas.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "table": { "type": "string", "enum": ["quick", "mini"] },
                        "category": { "type": "string", "description": "Only this category" }
                    }
                }
            }
        ]
    }))
}

pub fn handle_tool_call(config: &Config, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params.get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    match name {
        "quick_convert" => tool_convert(Widget::Quick, &args),
        "mini_convert" => tool_convert(Widget::Mini, &args),
        "list_conversions" => tool_list_conversions(config, &args),
        _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
    }
}

fn required_str<'a>(args: &'a JsonValue, key: &str) -> Result<&'a str, McpError> {
    args.get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params(format!("Missing {} argument", key)))
}

fn optional_str<'a>(args: &'a JsonValue, key: &str) -> Result<Option<&'a str>, McpError> {
    match args.get(key) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(McpError::invalid_params(format!(
            "{} must be a string, got {}", key, other
        ))),
    }
}

fn tool_convert(widget: Widget, args: &JsonValue) -> Result<JsonValue, McpError> {
    let from = required_str(args, "from")?;
    let to = required_str(args, "to")?;
    let category = match widget {
        Widget::Quick => optional_str(args, "category")?,
        Widget::Mini => Some(required_str(args, "category")?),
    };

    let table = widget.table();
    let result = match args.get("value") {
        None | Some(JsonValue::Null) => widget.convert_text("", from, to, category),
        Some(JsonValue::String(text)) => widget.convert_text(text, from, to, category),
        Some(JsonValue::Number(n)) => match n.as_f64() {
            Some(value) => table.describe(value, from, to, category),
            None => Err(ConversionError::invalid_text(&n.to_string())),
        },
        Some(other) => {
            return Err(McpError::invalid_params(format!(
                "value must be a number or a string, got {}", other
            )));
        }
    };

    tracing::debug!(table = table.name(), from, to, ok = result.is_ok(), "conversion");
    Ok(conversion_result(widget, table, &result))
}

fn conversion_result(
    widget: Widget,
    table: &ConversionTable,
    result: &Result<Conversion, ConversionError>,
) -> JsonValue {
    let outcome = widget.outcome(result);
    match result {
        Ok(conversion) => json!({
            "content": [{ "type": "text", "text": outcome.message }],
            "status": outcome.status,
            "result": conversion.result,
            "display": outcome.message,
            "conversion": conversion,
            "isError": false
        }),
        Err(e) => {
            let report: ErrorReport = e.report(table.name());
            json!({
                "content": [{ "type": "text", "text": outcome.message }],
                "status": outcome.status,
                "error": report,
                "isError": true
            })
        }
    }
}

fn tool_list_conversions(config: &Config, args: &JsonValue) -> Result<JsonValue, McpError> {
    let table = match optional_str(args, "table")? {
        Some(name) => table_by_name(name).ok_or_else(|| {
            McpError::invalid_params(format!("Unknown table: {}. Expected quick or mini", name))
        })?,
        None => config.default_table,
    };

    let categories = match optional_str(args, "category")? {
        Some(id) => {
            let category = Category::parse(id)
                .ok_or_else(|| McpError::invalid_params(format!("Unknown category: {}", id)))?;
            vec![category]
        }
        None => table.categories(),
    };

    let mut text = String::new();
    let mut listing = Vec::new();
    for category in categories {
        let pairs = table.pairs(category);
        let units = category.units();
        let ids: Vec<&str> = units.iter().map(|u| u.id()).collect();
        text.push_str(&format!("{} ({}):\n", category, ids.join(", ")));
        for (key, formula) in &pairs {
            text.push_str(&format!(
                "  {} -> {} ({} to {}): {}\n",
                key.from, key.to, key.from.name(), key.to.name(), formula
            ));
        }
        listing.push(json!({
            "category": category,
            "units": units,
            "pairs": pairs.iter().map(|(key, formula)| json!({
                "from": key.from,
                "to": key.to,
                "description": format!("{} to {}", key.from.name(), key.to.name()),
                "formula": formula.expr()
            })).collect::<Vec<_>>()
        }));
    }

    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "table": table.name(),
        "categories": listing
    }))
}
