use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Semantic role of an alert button, hinting at its visual treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ButtonRole {
    /// Plain affirmative action (default)
    #[default]
    Action,
    /// Dismisses the dialog without confirming
    Cancel,
    /// Irreversible action, typically rendered in a warning style
    Destructive,
}

/// A labeled button in an alert dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertButton {
    /// Button label
    pub title: String,
    /// Semantic role
    #[serde(default)]
    pub role: ButtonRole,
}

impl AlertButton {
    /// A plain action button.
    pub fn action(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            role: ButtonRole::Action,
        }
    }

    /// A cancel button.
    pub fn cancel(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            role: ButtonRole::Cancel,
        }
    }

    /// A destructive action button.
    pub fn destructive(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            role: ButtonRole::Destructive,
        }
    }
}

/// Handle to the display surface a dialog should be presented on.
///
/// Supplied explicitly by the caller; the embedding application maps the
/// surface id to an actual window or view. Operators never look up an ambient
/// "top-most" surface themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogContext {
    /// Identifier the embedder resolves to a display surface
    pub surface_id: Uuid,

    /// Human-readable surface name (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DialogContext {
    /// Create a context with a fresh surface id.
    pub fn new() -> Self {
        Self {
            surface_id: Uuid::new_v4(),
            label: None,
        }
    }

    /// Create a context with a fresh surface id and a label.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            surface_id: Uuid::new_v4(),
            label: Some(label.into()),
        }
    }
}

impl Default for DialogContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of a single dialog presentation handed to a [`DialogPresenter`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogRequest {
    /// Fresh per presentation; the key for logs and cancellation records
    pub id: Uuid,

    /// Display surface the dialog belongs on
    pub context: DialogContext,

    /// Dialog title (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Dialog body, already rendered through the template engine (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Buttons in display order; selection indexes refer to this order
    pub buttons: Vec<AlertButton>,
}

impl DialogRequest {
    /// Create a request with a fresh id.
    pub fn new(
        context: DialogContext,
        title: Option<String>,
        message: Option<String>,
        buttons: Vec<AlertButton>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            context,
            title,
            message,
            buttons,
        }
    }
}

/// Outcome of a confirmation dialog paired with the element that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationResponse<E> {
    /// True when the confirm button (index 0) was selected
    pub confirmed: bool,
    /// The upstream element the dialog was shown for
    pub value: E,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_constructors() {
        assert_eq!(AlertButton::action("OK").role, ButtonRole::Action);
        assert_eq!(AlertButton::cancel("No").role, ButtonRole::Cancel);
        let delete = AlertButton::destructive("Delete");
        assert_eq!(delete.role, ButtonRole::Destructive);
        assert_eq!(delete.title, "Delete");
    }

    #[test]
    fn test_request_serialization() {
        let request = DialogRequest::new(
            DialogContext::labeled("settings-window"),
            Some("Deleting".to_string()),
            Some("Remove backup?".to_string()),
            vec![AlertButton::destructive("Delete"), AlertButton::cancel("Cancel")],
        );

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""title":"Deleting""#));
        assert!(json.contains(r#""role":"destructive""#));
        assert!(json.contains(r#""label":"settings-window""#));
    }

    #[test]
    fn test_requests_get_distinct_ids() {
        let context = DialogContext::new();
        let a = DialogRequest::new(context.clone(), None, None, vec![]);
        let b = DialogRequest::new(context, None, None, vec![]);
        assert_ne!(a.id, b.id);
    }
}
