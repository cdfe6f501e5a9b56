// Teacher snapshot file used to carry the in-memory repository across restarts.
//
// Responsibilities
// - Load the file at startup. A file that does not exist yet means an empty directory.
// - Write the whole repository back on shutdown.

use anyhow::Context;
use std::io::ErrorKind;
use std::path::Path;

use crate::shared::infrastructure::teacher_repository::in_memory::InMemoryTeacherRepository;

/// Number of teachers read from `path`.
pub async fn load_snapshot(
    repository: &InMemoryTeacherRepository,
    path: &Path,
) -> anyhow::Result<usize> {
    let json = match tokio::fs::read_to_string(path).await {
        Ok(json) => json,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no teacher snapshot yet");
            return Ok(0);
        }
        Err(error) => {
            return Err(error).with_context(|| format!("reading snapshot {}", path.display()));
        }
    };
    let count = repository
        .import_snapshot(&json)
        .await
        .with_context(|| format!("importing snapshot {}", path.display()))?;
    tracing::info!(count, path = %path.display(), "teacher snapshot loaded");
    Ok(count)
}

pub async fn save_snapshot(
    repository: &InMemoryTeacherRepository,
    path: &Path,
) -> anyhow::Result<()> {
    let json = repository.export_snapshot().await?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("writing snapshot {}", path.display()))?;
    tracing::info!(path = %path.display(), "teacher snapshot saved");
    Ok(())
}

/// Resolves on Ctrl-C so the server can drain and the snapshot can be written.
pub async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "listening for shutdown failed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
