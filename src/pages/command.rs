//! Mutate-then-reload commands.
//!
//! A page action issues one write and, only if it succeeds, reloads the
//! affected collection. Both steps run inside one spawned task so the reload
//! always observes the write.

use std::future::Future;

use crate::error::ApiError;

/// Result of a [`mutate_then_reload`] command.
#[derive(Debug, Clone)]
pub enum CommandOutcome<T> {
    /// The write succeeded and the collection was reloaded.
    Reloaded(T),
    /// The write failed; nothing was reloaded.
    MutationFailed(ApiError),
    /// The write succeeded but the reload failed.
    ReloadFailed(ApiError),
}

impl<T> CommandOutcome<T> {
    pub fn is_reloaded(&self) -> bool {
        matches!(self, CommandOutcome::Reloaded(_))
    }
}

/// Run `mutate`, then `reload` if the write succeeded.
pub async fn mutate_then_reload<M, Fm, Fr, R, T>(mutate: Fm, reload: R) -> CommandOutcome<T>
where
    Fm: Future<Output = Result<M, ApiError>>,
    R: FnOnce() -> Fr,
    Fr: Future<Output = Result<T, ApiError>>,
{
    if let Err(e) = mutate.await {
        return CommandOutcome::MutationFailed(e);
    }
    match reload().await {
        Ok(value) => CommandOutcome::Reloaded(value),
        Err(e) => CommandOutcome::ReloadFailed(e),
    }
}
