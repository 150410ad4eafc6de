//! Background extraction
//!
//! A caller that already knows which family it will need next can start the
//! extraction early and collect the network later. Dropping the handle does
//! not stop the task; call [`PrefetchHandle::cancel`] for that.

use std::sync::Arc;

use tokio::task::JoinHandle;

use super::cancel::CancelFlag;
use super::resolver::CrossReferenceResolver;
use crate::error::{Result, XrefError};
use crate::network::FamilyNetwork;

/// Handle to an extraction running on the tokio runtime
#[derive(Debug)]
pub struct PrefetchHandle {
    family_id: String,
    cancel: CancelFlag,
    task: JoinHandle<Result<FamilyNetwork>>,
}

impl PrefetchHandle {
    /// Start extracting `family_id` in the background
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn spawn(resolver: Arc<CrossReferenceResolver>, family_id: impl Into<String>) -> Self {
        let family_id = family_id.into();
        let cancel = CancelFlag::new();

        let task = {
            let family_id = family_id.clone();
            let cancel = cancel.clone();
            tokio::spawn(async move { resolver.extract_with_cancel(&family_id, &cancel).await })
        };

        log::debug!("Prefetching {family_id}");
        Self {
            family_id,
            cancel,
            task,
        }
    }

    /// Id of the family being extracted
    #[must_use]
    pub fn family_id(&self) -> &str {
        &self.family_id
    }

    /// Ask the extraction to stop at its next suspension point
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether the background task has finished
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the extraction to finish
    ///
    /// # Errors
    /// Returns the extraction's own error, [`XrefError::Cancelled`] after
    /// [`Self::cancel`], or [`XrefError::Task`] if the task panicked.
    pub async fn wait(self) -> Result<FamilyNetwork> {
        self.task
            .await
            .map_err(|e| XrefError::Task(format!("prefetch of {} failed: {e}", self.family_id)))?
    }
}
