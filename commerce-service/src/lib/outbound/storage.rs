use std::path::Path;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::ports::ImageStore;

/// Product images kept in a local directory and served by an external
/// file server under `{public_url}/images/products/`.
pub struct LocalImageStore {
    root: PathBuf,
    public_url: String,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>, public_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_url: public_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a bare file name inside the image directory.
    ///
    /// Names with separators or dot segments are refused.
    fn resolve(&self, file_name: &str) -> Option<PathBuf> {
        let is_bare = !file_name.is_empty()
            && file_name != "."
            && file_name != ".."
            && !file_name.contains(['/', '\\']);

        is_bare.then(|| self.root.join(file_name))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn exists(&self, file_name: &str) -> Result<bool, ProductError> {
        let Some(path) = self.resolve(file_name) else {
            tracing::debug!(file_name, "Rejected image name");
            return Ok(false);
        };

        tokio::fs::try_exists(&path)
            .await
            .map_err(|e| ProductError::ImageStore(e.to_string()))
    }

    async fn remove(&self, file_name: &str) -> Result<(), ProductError> {
        let path = self
            .resolve(file_name)
            .ok_or_else(|| ProductError::ImageStore(format!("invalid image name: {}", file_name)))?;

        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| ProductError::ImageStore(e.to_string()))
    }

    fn public_url(&self, file_name: &str) -> String {
        format!("{}/images/products/{}", self.public_url, file_name)
    }
}
