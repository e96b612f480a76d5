use crate::core::uploads::{ImageUpload, UploadError, UploadStorage};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

fn content_type(extension: &str) -> &'static str {
    match extension {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Stores post images on the local filesystem under a generated name and
/// serves them back by filename.
#[derive(Debug, Clone)]
pub struct FsUploadStore {
    directory: PathBuf,
    public_url: String,
}

impl FsUploadStore {
    pub fn new(directory: impl Into<PathBuf>, public_url: String) -> Self {
        Self {
            directory: directory.into(),
            public_url: public_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl UploadStorage for FsUploadStore {
    async fn store(&self, image: ImageUpload) -> Result<String, UploadError> {
        let extension = Path::new(&image.filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .ok_or_else(|| UploadError::UnsupportedType(image.filename.clone()))?;

        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(UploadError::UnsupportedType(image.filename));
        }

        let name = format!("{}.{extension}", Uuid::new_v4());
        debug!("Storing upload {name}");

        tokio::fs::create_dir_all(&self.directory).await?;
        tokio::fs::write(self.directory.join(&name), &image.content).await?;

        Ok(format!("{}/uploads/{name}", self.public_url))
    }

    async fn load(&self, filename: String) -> Result<(Vec<u8>, &'static str), UploadError> {
        // only bare filenames, no traversal
        if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
            return Err(UploadError::NotFound);
        }

        let extension = Path::new(&filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match tokio::fs::read(self.directory.join(&filename)).await {
            Ok(bytes) => Ok((bytes, content_type(&extension))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(UploadError::NotFound),
            Err(e) => Err(UploadError::Io(e)),
        }
    }
}
