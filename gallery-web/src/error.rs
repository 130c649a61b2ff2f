use thiserror::Error;

/// Reasons mounting the gallery can fail
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("No window available")]
    NoWindow,
    #[error("No document available")]
    NoDocument,
    #[error("Document has no body")]
    NoBody,
    #[error("Missing element #{id}")]
    MissingElement { id: String },
    #[error("Element #{id} is not {expected}")]
    WrongElementType { id: String, expected: &'static str },
    #[error("Invalid selector: {selector:?}")]
    InvalidSelector { selector: String },
    #[error("Invalid gallery config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<GalleryError> for wasm_bindgen::JsValue {
    fn from(err: GalleryError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
