use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LightboxError {
    #[error("Element #{id} not found")]
    MissingElement { id: String },
    #[error("No close control with class .{class}")]
    MissingCloseControl { class: String },
    #[error("No window or document available")]
    NoDocument,
    #[error("DOM error: {0}")]
    Dom(String),
    #[error("Invalid lightbox config: {0}")]
    Config(String),
}

impl LightboxError {
    pub fn missing(id: &str) -> Self {
        LightboxError::MissingElement { id: id.to_string() }
    }
}

impl From<JsValue> for LightboxError {
    fn from(value: JsValue) -> Self {
        LightboxError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<serde_json::Error> for LightboxError {
    fn from(e: serde_json::Error) -> Self {
        LightboxError::Config(e.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for LightboxError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        LightboxError::Config(e.to_string())
    }
}

pub type Result<T, E = LightboxError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_message() {
        let err = LightboxError::missing("galleryModal");
        assert_eq!(err.to_string(), "Element #galleryModal not found");
    }

    #[test]
    fn missing_close_control_message() {
        let err = LightboxError::MissingCloseControl { class: "close".to_string() };
        assert_eq!(err.to_string(), "No close control with class .close");
    }

    #[test]
    fn json_error_becomes_config_error() {
        let err: LightboxError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, LightboxError::Config(_)));
        assert!(err.to_string().starts_with("Invalid lightbox config:"));
    }
}
