use serde::{Deserialize, Serialize};

use crate::question::OptionId;

/// The value a respondent gives for one question.
///
/// This is the value stored in a session's answer map and in a
/// `Submission`. Absence of a map entry is the "unanswered" state; there is
/// no in-band sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    /// Options ticked on a multiple choice question (any subset).
    Selection(Vec<OptionId>),

    /// The option picked on a single answer question.
    Choice(OptionId),

    /// Free text entered on an open question.
    Text(String),

    /// A rating on the bounded scale.
    Rating(u8),
}

impl Answer {
    /// Try to get this value as the selected option ids.
    pub fn as_selection(&self) -> Option<&[OptionId]> {
        match self {
            Self::Selection(ids) => Some(ids),
            _ => None,
        }
    }

    /// Try to get this value as the picked option id.
    pub fn as_choice(&self) -> Option<OptionId> {
        match self {
            Self::Choice(id) => Some(*id),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Try to get this value as a rating.
    pub fn as_rating(&self) -> Option<u8> {
        match self {
            Self::Rating(value) => Some(*value),
            _ => None,
        }
    }

    /// Whether this answer includes the given option.
    ///
    /// True for a selection containing `id` and for a choice of exactly
    /// `id`; text and rating answers never select options.
    pub fn selects(&self, id: OptionId) -> bool {
        match self {
            Self::Selection(ids) => ids.contains(&id),
            Self::Choice(picked) => *picked == id,
            Self::Text(_) | Self::Rating(_) => false,
        }
    }

    /// Whether this answer carries no content.
    ///
    /// An empty selection or blank text counts as "not answered"; a choice
    /// or rating always carries a value.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Selection(ids) => ids.is_empty(),
            Self::Text(text) => text.trim().is_empty(),
            Self::Choice(_) | Self::Rating(_) => false,
        }
    }

    /// Canonicalize before storage: selections are sorted and deduped,
    /// text is trimmed.
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Self::Selection(mut ids) => {
                ids.sort_unstable();
                ids.dedup();
                Self::Selection(ids)
            }
            Self::Text(text) => Self::Text(text.trim().to_string()),
            other => other,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Selection(_) => "selection",
            Self::Choice(_) => "choice",
            Self::Text(_) => "text",
            Self::Rating(_) => "rating",
        }
    }
}

impl From<&str> for Answer {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Answer {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<OptionId>> for Answer {
    fn from(ids: Vec<OptionId>) -> Self {
        Self::Selection(ids)
    }
}
