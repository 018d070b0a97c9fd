use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::repositories::StorageRepository;
use crate::shared::constants::STORAGE_DIR_NAME;
use crate::shared::error::WalletError;

/// File-backed key-value store, one file per key.
///
/// File names are a hash of the key so keys are not enumerable from the
/// directory listing.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// OS-specific app data directory
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("./secure_storage"))
            .join(STORAGE_DIR_NAME)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_path(&self, key: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());
        let hash = hasher.finalize();
        let filename = hex::encode(&hash[..16]);
        self.dir.join(format!("{}.dat", filename))
    }
}

#[async_trait]
impl StorageRepository for FileStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, WalletError> {
        match fs::read(self.file_path(key)).await {
            Ok(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|e| WalletError::storage(format!("Stored value is not UTF-8: {}", e))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), WalletError> {
        fs::create_dir_all(&self.dir).await?;
        let path = self.file_path(key);
        let tmp_path = path.with_extension("tmp");

        // A leftover temp file would keep its old mode
        match fs::remove_file(&tmp_path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        let mut options = fs::OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options.open(&tmp_path).await?;
        file.write_all(value.as_bytes()).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&tmp_path, &path).await?;
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), WalletError> {
        match fs::remove_file(self.file_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_storage_operations() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let storage = FileStorage::new(dir.path().join("wallet"));

        assert_eq!(storage.get_item("Development.NETWORK").await.expect("read"), None);

        storage.set_item("Development.NETWORK", "Local Playground").await
            .expect("Failed to store value");
        assert_eq!(
            storage.get_item("Development.NETWORK").await.expect("read"),
            Some("Local Playground".to_string())
        );
        assert!(storage.exists("Development.NETWORK").await.expect("exists"));

        storage.set_item("Development.NETWORK", "TestNet").await
            .expect("Failed to overwrite value");
        assert_eq!(
            storage.get_item("Development.NETWORK").await.expect("read"),
            Some("TestNet".to_string())
        );

        storage.remove_item("Development.NETWORK").await.expect("Failed to remove");
        storage.remove_item("Development.NETWORK").await.expect("Remove must be idempotent");
        assert_eq!(storage.get_item("Development.NETWORK").await.expect("read"), None);
    }

    #[tokio::test]
    async fn test_file_names_do_not_leak_keys() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let storage = FileStorage::new(dir.path());
        storage.set_item("Development.Local Playground.MNEMONIC_SEED", "00").await
            .expect("Failed to store value");

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .expect("Failed to list dir")
            .flatten()
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names.len(), 1);
        assert!(!names[0].contains("MNEMONIC"));
        assert!(names[0].ends_with(".dat"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_file_permissions() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let storage = FileStorage::new(dir.path());
        storage.set_item("key", "value").await.expect("Failed to store value");

        let mode = std::fs::metadata(storage.file_path("key"))
            .expect("Failed to stat file")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_stale_temp_file_is_replaced_with_private_file() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let storage = FileStorage::new(dir.path());

        let tmp_path = storage.file_path("key").with_extension("tmp");
        std::fs::write(&tmp_path, "stale").expect("Failed to write temp file");
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o644))
            .expect("Failed to chmod temp file");

        storage.set_item("key", "value").await.expect("Failed to store value");

        assert!(!tmp_path.exists());
        let mode = std::fs::metadata(storage.file_path("key"))
            .expect("Failed to stat file")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(storage.get_item("key").await.expect("read"), Some("value".to_string()));
    }
}
