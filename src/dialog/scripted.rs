//! Scripted in-process presenter.
//!
//! Plays back a queue of pre-scripted button selections instead of rendering
//! anything, and records what happened to every presented dialog. Used by the
//! test suites and by headless embedders that need deterministic dialog flows.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use super::presenter::{DialogPresenter, PresenterError};
use super::types::DialogRequest;

/// One scripted reply, consumed per `show` call in FIFO order.
///
/// When the script runs dry, further dialogs behave like [`ScriptedReply::Hold`].
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    /// Resolve immediately with the given button index
    Select(usize),
    /// Resolve with the given button index after a delay
    SelectAfter(Duration, usize),
    /// Never resolve; the dialog stays up until the caller cancels it
    Hold,
    /// Fail the presentation
    Fail(String),
}

/// What ultimately happened to a presented dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// A button was selected
    Selected(usize),
    /// The `show` future was dropped before a selection was made
    Cancelled,
    /// The presenter reported an error
    Failed,
}

/// In-process [`DialogPresenter`] driven by a scripted reply queue.
pub struct ScriptedPresenter {
    /// Replies to play back, one per `show` call
    script: Mutex<VecDeque<ScriptedReply>>,
    /// Every request that was presented, in order
    requests: Mutex<Vec<DialogRequest>>,
    /// Outcome per request id, written on resolution or cancellation
    outcomes: Arc<DashMap<Uuid, DialogOutcome>>,
}

impl ScriptedPresenter {
    /// Create a presenter with an empty script.
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            outcomes: Arc::new(DashMap::new()),
        }
    }

    /// Create a presenter preloaded with replies.
    pub fn with_script(replies: impl IntoIterator<Item = ScriptedReply>) -> Self {
        let presenter = Self::new();
        presenter
            .script
            .lock()
            .expect("script lock poisoned")
            .extend(replies);
        presenter
    }

    /// Append a reply to the script.
    pub fn push(&self, reply: ScriptedReply) {
        self.script
            .lock()
            .expect("script lock poisoned")
            .push_back(reply);
    }

    /// Requests presented so far, in presentation order.
    pub fn requests(&self) -> Vec<DialogRequest> {
        self.requests.lock().expect("request lock poisoned").clone()
    }

    /// Outcome recorded for a request, if it resolved or was cancelled.
    pub fn outcome(&self, id: Uuid) -> Option<DialogOutcome> {
        self.outcomes.get(&id).map(|entry| entry.clone())
    }

    /// Number of dialogs presented so far.
    pub fn shown_count(&self) -> usize {
        self.requests.lock().expect("request lock poisoned").len()
    }

    /// Number of dialogs that were cancelled before resolving.
    pub fn cancelled_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|entry| *entry.value() == DialogOutcome::Cancelled)
            .count()
    }
}

impl Default for ScriptedPresenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Records a cancellation if the `show` future is dropped mid-flight.
struct PendingGuard {
    outcomes: Arc<DashMap<Uuid, DialogOutcome>>,
    id: Uuid,
    armed: bool,
}

impl PendingGuard {
    fn new(outcomes: Arc<DashMap<Uuid, DialogOutcome>>, id: Uuid) -> Self {
        Self {
            outcomes,
            id,
            armed: true,
        }
    }

    fn complete(mut self, outcome: DialogOutcome) {
        self.armed = false;
        self.outcomes.insert(self.id, outcome);
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        if self.armed {
            tracing::debug!(request_id = %self.id, "scripted dialog cancelled");
            self.outcomes.insert(self.id, DialogOutcome::Cancelled);
        }
    }
}

#[async_trait]
impl DialogPresenter for ScriptedPresenter {
    async fn show(&self, request: DialogRequest) -> Result<usize, PresenterError> {
        let reply = self
            .script
            .lock()
            .expect("script lock poisoned")
            .pop_front()
            .unwrap_or(ScriptedReply::Hold);

        tracing::debug!(
            request_id = %request.id,
            buttons = request.buttons.len(),
            reply = ?reply,
            "scripted dialog presented"
        );

        let id = request.id;
        self.requests
            .lock()
            .expect("request lock poisoned")
            .push(request);

        let guard = PendingGuard::new(self.outcomes.clone(), id);

        match reply {
            ScriptedReply::Select(index) => {
                guard.complete(DialogOutcome::Selected(index));
                Ok(index)
            }
            ScriptedReply::SelectAfter(delay, index) => {
                tokio::time::sleep(delay).await;
                guard.complete(DialogOutcome::Selected(index));
                Ok(index)
            }
            // Parks until the caller drops the future; the guard records the
            // cancellation.
            ScriptedReply::Hold => std::future::pending().await,
            ScriptedReply::Fail(reason) => {
                guard.complete(DialogOutcome::Failed);
                Err(PresenterError::Unavailable(reason))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::{AlertButton, DialogContext};

    fn request() -> DialogRequest {
        DialogRequest::new(
            DialogContext::new(),
            Some("Title".to_string()),
            Some("Body".to_string()),
            vec![AlertButton::action("OK")],
        )
    }

    #[tokio::test]
    async fn test_select_resolves_and_records() {
        let presenter = ScriptedPresenter::with_script([ScriptedReply::Select(1)]);
        let req = request();
        let id = req.id;

        let index = presenter.show(req).await.unwrap();
        assert_eq!(index, 1);
        assert_eq!(presenter.shown_count(), 1);
        assert_eq!(presenter.outcome(id), Some(DialogOutcome::Selected(1)));
    }

    #[tokio::test]
    async fn test_dropping_show_records_cancellation() {
        let presenter = ScriptedPresenter::with_script([ScriptedReply::Hold]);
        let req = request();
        let id = req.id;

        {
            let mut show = tokio_test::task::spawn(presenter.show(req));
            assert!(show.poll().is_pending());
        }

        assert_eq!(presenter.outcome(id), Some(DialogOutcome::Cancelled));
        assert_eq!(presenter.cancelled_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_script_holds() {
        let presenter = ScriptedPresenter::new();
        let req = request();
        let id = req.id;

        let result =
            tokio::time::timeout(Duration::from_millis(10), presenter.show(req)).await;
        assert!(result.is_err());
        assert_eq!(presenter.outcome(id), Some(DialogOutcome::Cancelled));
    }

    #[tokio::test]
    async fn test_fail_reply() {
        let presenter = ScriptedPresenter::with_script([ScriptedReply::Fail("no surface".into())]);
        let req = request();
        let id = req.id;

        let result = presenter.show(req).await;
        assert!(matches!(result, Err(PresenterError::Unavailable(_))));
        assert_eq!(presenter.outcome(id), Some(DialogOutcome::Failed));
    }

    #[tokio::test]
    async fn test_select_after_delay() {
        let presenter =
            ScriptedPresenter::with_script([ScriptedReply::SelectAfter(Duration::from_millis(5), 0)]);

        let index = presenter.show(request()).await.unwrap();
        assert_eq!(index, 0);
    }
}
