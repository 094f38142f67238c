//! Operator parameters.

use std::sync::Arc;

use crate::dialog::{AlertButton, DialogContext};
use crate::template::{render, TokenRules};

/// Per-element replacement text supplier for template tokens.
///
/// Receives the matched token (delimiters included) and the upstream element.
pub type TokenResolver<E> = Arc<dyn Fn(&str, &E) -> String + Send + Sync>;

/// Parameters for the `notify` operator.
pub struct NotifyParams<E> {
    /// Display surface for the dialog
    pub context: DialogContext,
    /// Dialog title (optional)
    pub title: Option<String>,
    /// Dialog body template (optional)
    pub message: Option<String>,
    /// Label of the single dismiss button
    pub button_title: String,
    /// When true, the element is emitted only after the dialog is dismissed
    pub wait_for_user: bool,
    /// Token delimiters for the message template
    pub rules: TokenRules,
    /// Token resolver; without one the message passes through unchanged
    pub resolver: Option<TokenResolver<E>>,
}

impl<E> NotifyParams<E> {
    /// Create parameters with an "OK" button and non-blocking presentation.
    pub fn new(context: DialogContext) -> Self {
        Self {
            context,
            title: None,
            message: None,
            button_title: "OK".to_string(),
            wait_for_user: false,
            rules: TokenRules::default(),
            resolver: None,
        }
    }

    /// Set the dialog title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the message template.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the dismiss button label.
    pub fn button_title(mut self, title: impl Into<String>) -> Self {
        self.button_title = title.into();
        self
    }

    /// Suspend emission of each element until its dialog is dismissed.
    pub fn wait_for_user(mut self, wait: bool) -> Self {
        self.wait_for_user = wait;
        self
    }

    /// Set the token delimiters.
    pub fn rules(mut self, rules: TokenRules) -> Self {
        self.rules = rules;
        self
    }

    /// Set the token resolver.
    pub fn resolver(
        mut self,
        resolver: impl Fn(&str, &E) -> String + Send + Sync + 'static,
    ) -> Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    pub(crate) fn render_message(&self, element: &E) -> Option<String> {
        let resolver = self
            .resolver
            .as_deref()
            .map(|r| r as &dyn Fn(&str, &E) -> String);
        render(self.message.as_deref(), element, &self.rules, resolver)
    }
}

/// Parameters for the `confirm` family of operators.
pub struct ConfirmParams<E> {
    /// Display surface for the dialog
    pub context: DialogContext,
    /// Dialog title (optional)
    pub title: Option<String>,
    /// Dialog body template (optional)
    pub message: Option<String>,
    /// Button at index 0; selecting it confirms
    pub confirm_button: AlertButton,
    /// Button at index 1; selecting it declines
    pub cancel_button: AlertButton,
    /// Token delimiters for the message template
    pub rules: TokenRules,
    /// Token resolver; without one the message passes through unchanged
    pub resolver: Option<TokenResolver<E>>,
}

impl<E> ConfirmParams<E> {
    /// Create parameters with "OK" / "Cancel" buttons.
    pub fn new(context: DialogContext) -> Self {
        Self {
            context,
            title: None,
            message: None,
            confirm_button: AlertButton::action("OK"),
            cancel_button: AlertButton::cancel("Cancel"),
            rules: TokenRules::default(),
            resolver: None,
        }
    }

    /// Delete-confirmation defaults: "Deleting" title, a destructive "Delete"
    /// confirm button and a "Cancel" button.
    pub fn deleting(context: DialogContext) -> Self {
        Self {
            title: Some("Deleting".to_string()),
            confirm_button: AlertButton::destructive("Delete"),
            ..Self::new(context)
        }
    }

    /// Set the dialog title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the message template.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the confirm button (index 0).
    pub fn confirm_button(mut self, button: AlertButton) -> Self {
        self.confirm_button = button;
        self
    }

    /// Set the cancel button (index 1).
    pub fn cancel_button(mut self, button: AlertButton) -> Self {
        self.cancel_button = button;
        self
    }

    /// Set the token delimiters.
    pub fn rules(mut self, rules: TokenRules) -> Self {
        self.rules = rules;
        self
    }

    /// Set the token resolver.
    pub fn resolver(
        mut self,
        resolver: impl Fn(&str, &E) -> String + Send + Sync + 'static,
    ) -> Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    pub(crate) fn render_message(&self, element: &E) -> Option<String> {
        let resolver = self
            .resolver
            .as_deref()
            .map(|r| r as &dyn Fn(&str, &E) -> String);
        render(self.message.as_deref(), element, &self.rules, resolver)
    }

    pub(crate) fn buttons(&self) -> Vec<AlertButton> {
        vec![self.confirm_button.clone(), self.cancel_button.clone()]
    }
}
