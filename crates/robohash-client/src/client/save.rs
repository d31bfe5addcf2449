//! Saving avatars to disk.

use std::path::Path;

use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::{RoboHashError, RoboHashResult};
use crate::http::HttpBackend;
use crate::image::RoboHashImage;
use crate::request::RoboHashRequestBuilder;
use crate::util::is_valid_filename;

use super::RoboHashClient;

impl<B: HttpBackend> RoboHashClient<B> {
    /// Download the avatar described by `builder` and write it to `path`.
    ///
    /// The destination must not exist. Missing parent directories are
    /// created. The bytes are written as served, so the file format follows
    /// the builder's extension.
    pub async fn save_to_file(
        &self,
        builder: &RoboHashRequestBuilder,
        path: impl AsRef<Path>,
    ) -> RoboHashResult<RoboHashImage> {
        let path = path.as_ref();
        check_destination(path)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| RoboHashError::io("create directory", parent, e))?;
        }

        let image = self.fetch_image(builder).await?;

        // create_new: never clobber a file that appeared while downloading
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::AlreadyExists {
                    RoboHashError::DestinationExists {
                        path: path.to_path_buf(),
                    }
                } else {
                    RoboHashError::io("create", path, e)
                }
            })?;
        write_created_file(file, path, image.bytes()).await?;

        tracing::info!(
            path = %path.display(),
            bytes = image.len(),
            key = builder.avatar_key(),
            "Saved RoboHash avatar"
        );
        Ok(image)
    }
}

/// Write `bytes` to the file this call just created at `path`.
///
/// On failure the partial file is removed so the destination is free again.
async fn write_created_file<W>(mut writer: W, path: &Path, bytes: &[u8]) -> RoboHashResult<()>
where
    W: AsyncWrite + Unpin,
{
    let result = match writer.write_all(bytes).await {
        Ok(()) => writer
            .flush()
            .await
            .map_err(|e| RoboHashError::io("flush", path, e)),
        Err(e) => Err(RoboHashError::io("write", path, e)),
    };

    if result.is_err() {
        drop(writer);
        if let Err(e) = fs::remove_file(path).await {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Could not remove partially written avatar"
            );
        }
    }
    result
}

/// Reject directories, existing files and unusable file names.
fn check_destination(path: &Path) -> RoboHashResult<()> {
    if path.is_dir() {
        return Err(RoboHashError::DestinationIsDirectory {
            path: path.to_path_buf(),
        });
    }
    if path.exists() {
        return Err(RoboHashError::DestinationExists {
            path: path.to_path_buf(),
        });
    }

    let valid_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(is_valid_filename);
    if !valid_name {
        return Err(RoboHashError::InvalidFilename {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::fake_client;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use crate::image::samples;
    use crate::options::{BackgroundSet, ImageExtension, ImageSet, UseGravatar};
    use std::io;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    fn png_backend() -> FakeBackend {
        FakeBackend::new().with_default(CannedResponse::ok(samples::png(500, 500), "image/png"))
    }

    #[tokio::test]
    async fn test_save_to_file_writes_image() {
        let dir = tempfile::tempdir().unwrap();
        let client = fake_client(png_backend());
        let mut builder = RoboHashRequestBuilder::new("2bf1b7a19bcad06a8e894d7373a4cfc7").unwrap();
        builder
            .set_size(500, 500)
            .unwrap()
            .set_use_gravatar(UseGravatar::Hashed)
            .add_image_set(ImageSet::Humans)
            .set_background_set(BackgroundSet::SpiralAndPatterns);

        let path = dir
            .path()
            .join(ImageExtension::Png.add_as_suffix("builder"));
        let image = client.save_to_file(&builder, &path).await.unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, image.bytes());
        assert_eq!(image.dimensions(), Some((500, 500)));
    }

    #[tokio::test]
    async fn test_save_to_file_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let client = fake_client(png_backend());
        let builder = RoboHashRequestBuilder::new("minimal").unwrap();

        let path = dir.path().join("nested/avatars/minimal.png");
        client.save_to_file(&builder, &path).await.unwrap();
        assert!(path.is_file());
    }

    #[tokio::test]
    async fn test_save_to_file_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        let backend = png_backend();
        let client = fake_client(backend);
        let builder = RoboHashRequestBuilder::new("key").unwrap();

        let result = client.save_to_file(&builder, dir.path()).await;
        assert!(matches!(
            result,
            Err(RoboHashError::DestinationIsDirectory { .. })
        ));
        assert!(client.backend.requested().is_empty());
    }

    #[tokio::test]
    async fn test_save_to_file_rejects_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("existing.png");
        std::fs::write(&existing, b"keep me").unwrap();

        let client = fake_client(png_backend());
        let builder = RoboHashRequestBuilder::new("key").unwrap();

        let result = client.save_to_file(&builder, &existing).await;
        assert!(matches!(result, Err(RoboHashError::DestinationExists { .. })));
        assert_eq!(std::fs::read(&existing).unwrap(), b"keep me");
        assert!(client.backend.requested().is_empty());
    }

    #[tokio::test]
    async fn test_save_to_file_rejects_invalid_filename() {
        let dir = tempfile::tempdir().unwrap();
        let client = fake_client(png_backend());
        let builder = RoboHashRequestBuilder::new("key").unwrap();

        let result = client
            .save_to_file(&builder, dir.path().join("what?.png"))
            .await;
        assert!(matches!(result, Err(RoboHashError::InvalidFilename { .. })));
    }

    /// Accepts nothing: every write fails as if the disk were full.
    struct FullDisk;

    impl AsyncWrite for FullDisk {
        fn poll_write(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            _buf: &[u8],
        ) -> Poll<io::Result<usize>> {
            Poll::Ready(Err(io::Error::other("no space left on device")))
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }

        fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }
    }

    #[tokio::test]
    async fn test_failed_write_removes_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.png");
        std::fs::write(&path, b"\x89PN").unwrap();

        let result = write_created_file(FullDisk, &path, &samples::png(300, 300)).await;
        assert!(matches!(
            result,
            Err(RoboHashError::Io {
                operation: "write",
                ..
            })
        ));
        assert!(!path.exists());

        // The destination is usable again
        let client = fake_client(png_backend());
        let builder = RoboHashRequestBuilder::new("key").unwrap();
        client.save_to_file(&builder, &path).await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), samples::png(500, 500));
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let client = fake_client(FakeBackend::new().with_default(CannedResponse::status(404)));
        let builder = RoboHashRequestBuilder::new("key").unwrap();
        let path = dir.path().join("missing.png");

        let result = client.save_to_file(&builder, &path).await;
        assert!(matches!(
            result,
            Err(RoboHashError::RequestFailed { status: 404, .. })
        ));
        assert!(!path.exists());
    }
}
