//! Resource file writing.

use std::path::Path;

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::resource::ResourceFetcher;

/// Download `url` and write the whole body to `dest`.
///
/// `dest` must not exist; an existing file is never overwritten. Returns the
/// number of bytes written.
pub async fn save_resource<F>(fetcher: &F, url: &str, dest: &Path) -> Result<u64>
where
    F: ResourceFetcher + ?Sized,
{
    let body = fetcher.fetch(url).await?;

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest)
        .await?;

    if let Err(e) = write_all(&mut file, &body).await {
        drop(file);
        if let Err(cleanup) = tokio::fs::remove_file(dest).await {
            tracing::warn!("Failed to remove partial file {}: {}", dest.display(), cleanup);
        }
        return Err(e.into());
    }

    Ok(body.len() as u64)
}

async fn write_all(file: &mut tokio::fs::File, body: &[u8]) -> std::io::Result<()> {
    file.write_all(body).await?;
    file.flush().await
}
