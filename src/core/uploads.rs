use async_trait::async_trait;
use thiserror::Error;

/// An image received as part of a multipart form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub content: Vec<u8>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UploadStorage {
    /// Persists the image and returns its public URL.
    async fn store(&self, image: ImageUpload) -> Result<String, UploadError>;

    /// Returns the raw bytes and content type of a previously stored image.
    async fn load(&self, filename: String) -> Result<(Vec<u8>, &'static str), UploadError>;
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("File not found")]
    NotFound,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
