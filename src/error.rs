//! Error type for browser-side installation failures.
//!
//! A missing DOM hook is never an error: installers return `Ok(None)` for
//! that case. These variants cover the browser refusing an operation.

#[derive(Debug, thiserror::Error)]
pub enum BehaviorError {
    #[error("no global window object")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("dom operation `{op}` failed: {message}")]
    Dom { op: &'static str, message: String },
    #[error("invalid config block: {0}")]
    Config(#[from] serde_json::Error),
}

impl BehaviorError {
    /// Wrap a thrown JavaScript value from the operation named `op`.
    #[cfg(feature = "hydrate")]
    pub fn dom(op: &'static str) -> impl FnOnce(wasm_bindgen::JsValue) -> Self {
        move |err| Self::Dom {
            op,
            message: err.as_string().unwrap_or_else(|| format!("{err:?}")),
        }
    }
}
