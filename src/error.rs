//! Structured error types for tilegrid.

/// All errors that can occur while loading data into or driving the grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// JSON decoding error during bulk load.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Bulk-load input was valid JSON but not the expected shape.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Configuration rejected by [`crate::config::GridConfig::validate`].
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Invalid cell reference.
    #[error("Invalid cell reference: {0}")]
    CellRef(String),

    /// Drawing surface or DOM failure.
    #[error("Render error: {0}")]
    Render(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl From<String> for GridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for GridError {
    fn from(v: wasm_bindgen::JsValue) -> Self {
        Self::Render(v.as_string().unwrap_or_else(|| format!("{v:?}")))
    }
}
