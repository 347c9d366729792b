//! Response schema for transcript analysis
//!
//! The same schema value is sent to the service as the output constraint and
//! used locally to validate whatever comes back. Type names follow the
//! service's uppercase convention (`OBJECT`, `ARRAY`, `STRING`).

use depo_domain::Ruling;
use serde_json::{json, Map, Value};
use std::fmt;
use std::sync::LazyLock;

static RESPONSE_SCHEMA: LazyLock<Value> = LazyLock::new(build_response_schema);

/// The declarative output schema for an analysis result
pub fn response_schema() -> &'static Value {
    &RESPONSE_SCHEMA
}

fn build_response_schema() -> Value {
    let rulings: Vec<&str> = Ruling::ALL.iter().map(Ruling::as_str).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "keyFactsAndAdmissions": {
                "type": "ARRAY",
                "description": "Critical facts established and admissions made by a witness.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "fact": {
                            "type": "STRING",
                            "description": "The statement or fact itself."
                        },
                        "witness": {
                            "type": "STRING",
                            "description": "Who made the statement."
                        },
                        "pageLine": {
                            "type": "STRING",
                            "description": "Page and line where the statement appears, e.g. 'Page 25, Line 10'."
                        },
                        "summary": {
                            "type": "STRING",
                            "description": "Short note on why the statement matters."
                        }
                    },
                    "required": ["fact", "witness", "pageLine", "summary"],
                    "propertyOrdering": ["fact", "witness", "pageLine", "summary"]
                }
            },
            "exhibitsReferenced": {
                "type": "ARRAY",
                "description": "Every exhibit mentioned or introduced.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": {
                            "type": "STRING",
                            "description": "Exhibit identifier, e.g. 'Exhibit 1' or 'Plaintiff's Exhibit A'."
                        },
                        "description": {
                            "type": "STRING",
                            "description": "Short description of the exhibit."
                        },
                        "pageLine": {
                            "type": "STRING",
                            "description": "Page and line of the first reference to the exhibit."
                        }
                    },
                    "required": ["id", "description", "pageLine"],
                    "propertyOrdering": ["id", "description", "pageLine"]
                }
            },
            "objectionsLog": {
                "type": "ARRAY",
                "description": "Every objection raised during the deposition.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "type": {
                            "type": "STRING",
                            "description": "Kind of objection, e.g. 'Hearsay', 'Leading', 'Form'."
                        },
                        "by": {
                            "type": "STRING",
                            "description": "Attorney or party who objected."
                        },
                        "ruling": {
                            "type": "STRING",
                            "format": "enum",
                            "enum": rulings,
                            "description": "Ruling on the objection if one is stated on the record."
                        },
                        "pageLine": {
                            "type": "STRING",
                            "description": "Page and line where the objection was made."
                        }
                    },
                    "required": ["type", "by", "ruling", "pageLine"],
                    "propertyOrdering": ["type", "by", "ruling", "pageLine"]
                }
            }
        },
        "required": ["keyFactsAndAdmissions", "exhibitsReferenced", "objectionsLog"],
        "propertyOrdering": ["keyFactsAndAdmissions", "exhibitsReferenced", "objectionsLog"]
    })
}

/// First place a value departs from a schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// JSON path of the offending value, e.g. `$.objectionsLog[2].ruling`
    pub path: String,
    /// What is wrong with it
    pub message: String,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl std::error::Error for SchemaViolation {}

/// Check `value` against `schema`
///
/// Supports the subset used by [`response_schema`]: `OBJECT` with
/// `properties`/`required`, `ARRAY` with `items`, and `STRING` with an
/// optional `enum`. Properties the schema does not declare are ignored.
pub fn validate(value: &Value, schema: &Value) -> Result<(), SchemaViolation> {
    check(value, schema, "$")
}

fn check(value: &Value, schema: &Value, path: &str) -> Result<(), SchemaViolation> {
    let violation = |message: String| SchemaViolation {
        path: path.to_string(),
        message,
    };

    match schema.get("type").and_then(Value::as_str) {
        Some("OBJECT") => {
            let object = value
                .as_object()
                .ok_or_else(|| violation(format!("expected object, found {}", kind(value))))?;
            check_object(object, schema, path)
        }
        Some("ARRAY") => {
            let items = value
                .as_array()
                .ok_or_else(|| violation(format!("expected array, found {}", kind(value))))?;
            let Some(item_schema) = schema.get("items") else {
                return Ok(());
            };
            for (i, item) in items.iter().enumerate() {
                check(item, item_schema, &format!("{}[{}]", path, i))?;
            }
            Ok(())
        }
        Some("STRING") => {
            let s = value
                .as_str()
                .ok_or_else(|| violation(format!("expected string, found {}", kind(value))))?;
            if let Some(allowed) = schema.get("enum").and_then(Value::as_array) {
                if !allowed.iter().any(|a| a.as_str() == Some(s)) {
                    let names: Vec<&str> = allowed.iter().filter_map(Value::as_str).collect();
                    return Err(violation(format!(
                        "'{}' is not one of: {}",
                        s,
                        names.join(", ")
                    )));
                }
            }
            Ok(())
        }
        Some(other) => Err(violation(format!("unsupported schema type '{}'", other))),
        None => Err(violation("schema has no type".to_string())),
    }
}

fn check_object(
    object: &Map<String, Value>,
    schema: &Value,
    path: &str,
) -> Result<(), SchemaViolation> {
    if let Some(required) = schema.get("required").and_then(Value::as_array) {
        for name in required.iter().filter_map(Value::as_str) {
            if !object.contains_key(name) {
                return Err(SchemaViolation {
                    path: path.to_string(),
                    message: format!("missing required field '{}'", name),
                });
            }
        }
    }

    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return Ok(());
    };

    // Declared order when available so the first violation is stable
    let ordering: Vec<&str> = match schema.get("propertyOrdering").and_then(Value::as_array) {
        Some(order) => order.iter().filter_map(Value::as_str).collect(),
        None => properties.keys().map(String::as_str).collect(),
    };

    for name in ordering {
        if let (Some(field), Some(field_schema)) = (object.get(name), properties.get(name)) {
            check(field, field_schema, &format!("{}.{}", path, name))?;
        }
    }
    Ok(())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Value {
        json!({
            "keyFactsAndAdmissions": [
                {"fact": "Saw the light turn red", "witness": "J. Doe", "pageLine": "Page 12, Line 4", "summary": "Places plaintiff at the light"}
            ],
            "exhibitsReferenced": [
                {"id": "Exhibit 1", "description": "Police report", "pageLine": "Page 3, Line 2"}
            ],
            "objectionsLog": [
                {"type": "Form", "by": "Ms. Lee", "ruling": "Not Stated", "pageLine": "Page 14, Line 9"}
            ]
        })
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(validate(&valid(), response_schema()).is_ok());
    }

    #[test]
    fn test_empty_sections_pass() {
        let value = json!({"keyFactsAndAdmissions": [], "exhibitsReferenced": [], "objectionsLog": []});
        assert!(validate(&value, response_schema()).is_ok());
    }

    #[test]
    fn test_missing_section() {
        let value = json!({"keyFactsAndAdmissions": [], "objectionsLog": []});
        let err = validate(&value, response_schema()).unwrap_err();
        assert_eq!(err.path, "$");
        assert!(err.message.contains("exhibitsReferenced"));
    }

    #[test]
    fn test_missing_nested_field_reports_path() {
        let mut value = valid();
        value["exhibitsReferenced"][0]
            .as_object_mut()
            .unwrap()
            .remove("pageLine");
        let err = validate(&value, response_schema()).unwrap_err();
        assert_eq!(err.path, "$.exhibitsReferenced[0]");
        assert!(err.message.contains("pageLine"));
    }

    #[test]
    fn test_ruling_outside_enum() {
        let mut value = valid();
        value["objectionsLog"][0]["ruling"] = json!("Denied");
        let err = validate(&value, response_schema()).unwrap_err();
        assert_eq!(err.path, "$.objectionsLog[0].ruling");
        assert!(err.message.contains("Denied"));
        assert!(err.message.contains("Not Stated"));
    }

    #[test]
    fn test_wrong_types() {
        let mut value = valid();
        value["keyFactsAndAdmissions"][0]["fact"] = json!(42);
        let err = validate(&value, response_schema()).unwrap_err();
        assert_eq!(err.path, "$.keyFactsAndAdmissions[0].fact");
        assert!(err.message.contains("number"));

        let err = validate(&json!([]), response_schema()).unwrap_err();
        assert!(err.message.contains("expected object"));

        let value = json!({"keyFactsAndAdmissions": {}, "exhibitsReferenced": [], "objectionsLog": []});
        let err = validate(&value, response_schema()).unwrap_err();
        assert_eq!(err.path, "$.keyFactsAndAdmissions");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let mut value = valid();
        value["confidence"] = json!(0.9);
        value["objectionsLog"][0]["note"] = json!("withdrawn later");
        assert!(validate(&value, response_schema()).is_ok());
    }

    #[test]
    fn test_schema_lists_every_ruling() {
        let allowed = &response_schema()["properties"]["objectionsLog"]["items"]["properties"]["ruling"]["enum"];
        assert_eq!(allowed, &json!(["Sustained", "Overruled", "Not Stated"]));
    }

    #[test]
    fn test_every_field_is_required() {
        let schema = response_schema();
        for section in ["keyFactsAndAdmissions", "exhibitsReferenced", "objectionsLog"] {
            let items = &schema["properties"][section]["items"];
            let declared = items["properties"].as_object().unwrap().len();
            let required = items["required"].as_array().unwrap().len();
            assert_eq!(declared, required, "section {}", section);
        }
    }
}
