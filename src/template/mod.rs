//! Token templating system.
//!
//! This module provides:
//! - Configurable token delimiters (`##name##` by default)
//! - A substitution engine that renders a template against a stream element
//!
//! # Example
//!
//! ```ignore
//! let rules = TokenRules::default();
//!
//! let rendered = render(
//!     Some("Delete ##name##?"),
//!     &item,
//!     &rules,
//!     Some(&|_token, item: &Item| item.name.clone()),
//! );
//!
//! assert_eq!(rendered.as_deref(), Some("Delete invoices.db?"));
//! ```

mod engine;
mod rules;

pub use engine::render;
pub use rules::TokenRules;
