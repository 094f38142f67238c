//! Stream alert operators.
//!
//! Extends any [`Stream`] with dialog-backed operators: informational alerts
//! (`notify`), confirmations (`confirm`, `filter_confirmed`) and
//! delete-confirmations (`confirm_delete`). Each element triggers a dialog on
//! the supplied [`DialogPresenter`]; the user's selection is folded back into
//! the stream.
//!
//! All operators follow the switch-to-latest discipline: at most one dialog is
//! pending per subscription, and a new upstream element cancels the pending
//! dialog before presenting its own. Dropping the operator stream cancels the
//! pending dialog as well.
//!
//! # Example
//!
//! ```ignore
//! let deleted = delete_requests
//!     .filter_confirmed(
//!         presenter,
//!         ConfirmParams::new(context)
//!             .message("Remove ##name##?")
//!             .resolver(|_token, file: &FileEntry| file.name.clone()),
//!     );
//! ```

mod confirm;
mod notify;
mod params;

pub use params::{ConfirmParams, NotifyParams, TokenResolver};

use std::sync::Arc;

use futures::stream::BoxStream;
use futures::Stream;

use crate::dialog::{ConfirmationResponse, DialogContext, DialogPresenter};

/// Alert-dialog operators over any [`Stream`].
pub trait AlertStreamExt: Stream {
    /// Present an informational single-button dialog per element.
    ///
    /// The message template is rendered with the element before presentation.
    /// With `wait_for_user` set, the element is emitted only after the dialog
    /// is dismissed; otherwise it is emitted immediately and the dialog runs
    /// as a side effect whose dismissal produces no stream event. A new
    /// element supersedes a still-open dialog.
    fn notify(
        self,
        presenter: Arc<dyn DialogPresenter>,
        params: NotifyParams<Self::Item>,
    ) -> BoxStream<'static, Self::Item>
    where
        Self: Sized + Send + 'static,
        Self::Item: Send + 'static,
    {
        notify::notify(self, presenter, params)
    }

    /// Present a two-button confirmation dialog per element.
    ///
    /// Suspends the element until the user selects a button, then emits
    /// `ConfirmationResponse { confirmed, value }` where `confirmed` is true
    /// exactly when the confirm button (index 0) was selected. Elements
    /// superseded by a newer one produce no response.
    fn confirm(
        self,
        presenter: Arc<dyn DialogPresenter>,
        params: ConfirmParams<Self::Item>,
    ) -> BoxStream<'static, ConfirmationResponse<Self::Item>>
    where
        Self: Sized + Send + 'static,
        Self::Item: Send + 'static,
    {
        confirm::confirm(self, presenter, params)
    }

    /// [`confirm`](Self::confirm), then keep only confirmed elements,
    /// re-emitting just the value. Declined elements are silently dropped.
    fn filter_confirmed(
        self,
        presenter: Arc<dyn DialogPresenter>,
        params: ConfirmParams<Self::Item>,
    ) -> BoxStream<'static, Self::Item>
    where
        Self: Sized + Send + 'static,
        Self::Item: Send + 'static,
    {
        confirm::filter_confirmed(self, presenter, params)
    }

    /// [`confirm`](Self::confirm) preconfigured for destructive flows:
    /// "Deleting" title, a destructive "Delete" confirm button and a "Cancel"
    /// button. The message template still goes through token substitution.
    fn confirm_delete(
        self,
        presenter: Arc<dyn DialogPresenter>,
        context: DialogContext,
        message: Option<String>,
        resolver: Option<TokenResolver<Self::Item>>,
    ) -> BoxStream<'static, ConfirmationResponse<Self::Item>>
    where
        Self: Sized + Send + 'static,
        Self::Item: Send + 'static,
    {
        let mut params = ConfirmParams::deleting(context);
        params.message = message;
        params.resolver = resolver;
        confirm::confirm(self, presenter, params)
    }
}

impl<S: Stream> AlertStreamExt for S {}
