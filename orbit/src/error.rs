use serde_json::Value;

/// Malformed props input. Style misses (unknown token keys) are never errors;
/// they only drop the affected class.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PropsError {
    #[error("props must be a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("prop '{prop}' expects a token string or a breakpoint map, got {found}")]
    InvalidValue { prop: String, found: &'static str },
    #[error("unknown breakpoint '{0}'")]
    UnknownBreakpoint(String),
    #[error("'className' must be a string, got {0}")]
    InvalidClassName(&'static str),
    #[error("unknown element tag '{0}'")]
    UnknownTag(String),
    #[error("'children' must be a string or an array of strings")]
    InvalidChildren,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown {category} token '{key}'")]
pub struct UnknownToken {
    pub category: &'static str,
    pub key: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown token category '{0}', expected one of: colors, spacing, radii, layout, typography")]
pub struct UnknownCategory(pub String);

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
