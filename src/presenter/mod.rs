//! Projection of validation errors into a renderable panel.

use serde::Serialize;

use crate::validation::ValidationError;

/// Bullet marker prefixed to each rendered message.
pub const BULLET: &str = "\u{2022}";

/// Renderable error panel artifact.
///
/// `Hidden` means "no panel at all" rather than a visually empty
/// container, so hosts never render an empty error box. `Visible` carries
/// one item per message in list order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "panel", rename_all = "camelCase")]
pub enum ErrorPanel {
    Hidden,
    Visible { items: Vec<ErrorItem> },
}

/// One displayed message, addressable by its position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorItem {
    /// Position in the source list. Safe as identity because the list is
    /// regenerated wholesale on every validation pass.
    pub index: usize,
    pub text: String,
}

/// Project an error list into its panel artifact. Pure; order-preserving.
pub fn present(errors: &[ValidationError]) -> ErrorPanel {
    if errors.is_empty() {
        return ErrorPanel::Hidden;
    }
    let items = errors
        .iter()
        .enumerate()
        .map(|(index, error)| ErrorItem {
            index,
            text: error.to_string(),
        })
        .collect();
    ErrorPanel::Visible { items }
}

impl ErrorPanel {
    /// Bullet-prefixed display lines for a text host; empty for `Hidden`.
    pub fn lines(&self) -> Vec<String> {
        match self {
            ErrorPanel::Hidden => Vec::new(),
            ErrorPanel::Visible { items } => items
                .iter()
                .map(|item| format!("{BULLET} {}", item.text))
                .collect(),
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, ErrorPanel::Hidden)
    }
}
