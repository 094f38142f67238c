//! Alert and confirmation dialog operators for async streams.

// Domain layer
pub mod dialog;
pub mod template;

// Operator layer
pub mod operators;

// Re-export the public surface at the crate root
pub use dialog::{
    AlertButton, ButtonRole, ConfirmationResponse, DialogContext, DialogOutcome, DialogPresenter,
    DialogRequest, PresenterError, ScriptedPresenter, ScriptedReply,
};
pub use operators::{AlertStreamExt, ConfirmParams, NotifyParams, TokenResolver};
pub use template::{render, TokenRules};
