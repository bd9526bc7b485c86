use thiserror::Error;

/// Raised by a [`crate::RouterAdapter`] when one layer does not have the
/// shape it expects
///
/// The extractor logs these and moves on to the next layer; they never reach
/// the caller of [`crate::extract`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayerInspectionError {
    #[error("layer is not an object")]
    NotAnObject,

    #[error("route methods must be an object mapping verbs to flags, found {found}")]
    MethodsNotMapping { found: &'static str },

    #[error("route path must be a string, found {found}")]
    PathNotString { found: &'static str },

    #[error("mounted router has no nested stack")]
    MissingNestedStack,

    #[error("route registers unknown method {0:?}")]
    UnknownMethod(String),
}

/// Short JSON type name used in error messages
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
