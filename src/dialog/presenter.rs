//! Presenter contract for rendering modal dialogs.
//!
//! This module defines the abstraction layer between the stream operators and
//! whatever actually draws dialogs, allowing different surfaces (native UI,
//! terminal, scripted playback) to be used interchangeably.

use async_trait::async_trait;
use thiserror::Error;

use super::types::DialogRequest;

/// Errors a presenter can report.
#[derive(Debug, Error)]
pub enum PresenterError {
    /// The dialog was torn down without a selection
    #[error("Dialog dismissed without a selection")]
    Dismissed,

    /// No display surface is available for the requested context
    #[error("Presenter unavailable: {0}")]
    Unavailable(String),
}

/// Collaborator that renders modal dialogs and reports the user's selection.
///
/// `show` resolves exactly once with the zero-based index of the selected
/// button, referring to the order of `request.buttons`. Dropping the returned
/// future before it resolves cancels the presentation: implementations must
/// dismiss the dialog and treat the interaction as void.
#[async_trait]
pub trait DialogPresenter: Send + Sync {
    /// Present a modal dialog and wait for the user's selection.
    async fn show(&self, request: DialogRequest) -> Result<usize, PresenterError>;
}
