//! Dialog model and presenter contract.
//!
//! This module provides:
//! - The dialog data model (`AlertButton`, `DialogRequest`, responses)
//! - The `DialogPresenter` trait implemented by the embedding application
//! - `ScriptedPresenter`, an in-process presenter for tests and headless flows

mod presenter;
mod scripted;
mod types;

pub use presenter::{DialogPresenter, PresenterError};
pub use scripted::{DialogOutcome, ScriptedPresenter, ScriptedReply};
pub use types::{AlertButton, ButtonRole, ConfirmationResponse, DialogContext, DialogRequest};
