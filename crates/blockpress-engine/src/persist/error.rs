use thiserror::Error;

/// The only way persistence fails outright.
///
/// Append failures after the container exists are reported as
/// [`FailedBatch`](super::FailedBatch) entries instead.
#[derive(Debug, Error)]
pub enum PersistError<E: std::error::Error + 'static> {
    #[error("Failed to create container: {source}")]
    ContainerCreation { source: E },
}
