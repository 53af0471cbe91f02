use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::styled::StyledText;

/// A context slot after the rich-text rewrite.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ContextValue {
    /// Untouched input value.
    Plain(Value),
    Styled(StyledText),
    /// A rewritten list field; items are `Styled` or `Plain`.
    List(Vec<ContextValue>),
}

impl ContextValue {
    pub fn as_styled(&self) -> Option<&StyledText> {
        match self {
            ContextValue::Styled(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ContextValue]> {
        match self {
            ContextValue::List(items) => Some(items),
            _ => None,
        }
    }
}

pub type Context = BTreeMap<String, ContextValue>;
