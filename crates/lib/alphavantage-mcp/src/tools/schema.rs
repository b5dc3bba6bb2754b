//! JSON Schema rendering of endpoint parameter contracts.

use std::sync::Arc;

use alphavantage_schema::models::{
    Applicability,
    EndpointSchema,
    MovingAverageType,
    ParamDefault,
    ParamKind,
    ParamSpec,
};
use rmcp::model::{JsonObject, Tool};
use serde_json::{Value, json};

/// Builds the MCP tool descriptor for one catalog entry.
#[must_use]
pub fn tool_for(endpoint: &EndpointSchema) -> Tool {
    Tool::new(endpoint.name, endpoint.description, Arc::new(input_schema(endpoint)))
}

/// `object` schema with one property per declared parameter.
#[must_use]
pub fn input_schema(endpoint: &EndpointSchema) -> JsonObject {
    let mut properties = JsonObject::new();
    for spec in endpoint.parameters {
        properties.insert(spec.name.to_string(), Value::Object(property(spec)));
    }
    let required: Vec<&str> = endpoint
        .required_parameters()
        .map(|spec| spec.name)
        .collect();

    let mut schema = JsonObject::new();
    schema.insert("type".into(), json!("object"));
    schema.insert("properties".into(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".into(), json!(required));
    }
    schema.insert("additionalProperties".into(), json!(false));
    schema
}

fn property(spec: &ParamSpec) -> JsonObject {
    let mut property = match kind_schema(spec.kind) {
        Value::Object(object) => object,
        _ => JsonObject::new(),
    };

    let mut description = spec.description.to_string();
    if spec.applicability == Applicability::IntradayInterval
        && !description.contains("intraday")
    {
        description.push_str(" Only valid with an intraday interval.");
    }
    property.insert("description".into(), json!(description));

    match spec.default {
        ParamDefault::Unset => {}
        ParamDefault::Text(value) => {
            property.insert("default".into(), json!(value));
        }
        ParamDefault::Integer(value) => {
            property.insert("default".into(), json!(value));
        }
        ParamDefault::Float(value) => {
            property.insert("default".into(), json!(value));
        }
    }
    property
}

fn kind_schema(kind: ParamKind) -> Value {
    match kind {
        ParamKind::Text => json!({"type": "string"}),
        ParamKind::Choice(allowed) => json!({"type": "string", "enum": allowed}),
        ParamKind::MovingAverage => {
            let aliases: Vec<&str> = MovingAverageType::ALL
                .iter()
                .map(|kind| kind.alias())
                .collect();
            json!({
                "oneOf": [
                    {"type": "integer", "minimum": 0, "maximum": 8},
                    {"type": "string", "enum": aliases}
                ]
            })
        }
        ParamKind::Integer { min, max } => {
            if max == i64::MAX {
                json!({"type": "integer", "minimum": min})
            } else {
                json!({"type": "integer", "minimum": min, "maximum": max})
            }
        }
        ParamKind::Float { positive: true } => json!({"type": "number", "exclusiveMinimum": 0}),
        ParamKind::Float { positive: false } => json!({"type": "number"}),
        ParamKind::Date { format, earliest } => {
            let mut schema = json!({"type": "string", "pattern": format.regex()});
            if let Some(earliest) = earliest {
                schema["formatMinimum"] = json!(earliest);
            }
            schema
        }
    }
}

#[cfg(test)]
mod tests {
    use alphavantage_core::ToolRegistry;

    use super::*;

    fn schema_of(tool: &str) -> JsonObject {
        let registry = ToolRegistry::builtin().unwrap();
        input_schema(registry.lookup(tool).unwrap())
    }

    #[test]
    fn intraday_schema_lists_enums_defaults_and_required() {
        let schema = schema_of("get_intraday");
        assert_eq!(schema["required"], json!(["symbol"]));
        assert_eq!(schema["additionalProperties"], json!(false));
        let interval = &schema["properties"]["interval"];
        assert_eq!(interval["enum"], json!(["1min", "5min", "15min", "30min", "60min"]));
        assert_eq!(interval["default"], json!("15min"));
        assert_eq!(schema["properties"]["month"]["pattern"], json!(r"^\d\d\d\d-\d\d$"));
        assert!(schema["properties"]["entitlement"].get("default").is_none());
    }

    #[test]
    fn matype_accepts_code_or_alias() {
        let schema = schema_of("get_bbands");
        let matype = &schema["properties"]["matype"]["oneOf"];
        assert_eq!(matype[0]["maximum"], json!(8));
        assert_eq!(matype[1]["enum"][1], json!("EMA"));
    }

    #[test]
    fn parameterless_tools_have_no_required_list() {
        let schema = schema_of("get_top_gainers");
        assert!(!schema.contains_key("required"));
        assert_eq!(schema["properties"], json!({}));
    }

    #[test]
    fn news_limit_is_bounded() {
        let schema = schema_of("get_news_sentiment");
        assert_eq!(schema["properties"]["limit"]["maximum"], json!(1000));
        assert_eq!(schema["properties"]["limit"]["default"], json!(50));
    }

    #[test]
    fn tool_descriptor_carries_name_and_description() {
        let registry = ToolRegistry::builtin().unwrap();
        let tool = tool_for(registry.lookup("get_wti").unwrap());
        assert_eq!(tool.name, "get_wti");
        assert!(tool.input_schema.contains_key("properties"));
    }
}
