//! Post-processing of one-shot analysis replies
//!
//! The reply is cut into lines and split by position: the first half become
//! suggestions, the second half hints. The split carries no semantic
//! classification.

use serde::{Deserialize, Serialize};

pub const NO_SUGGESTIONS: &str = "No suggestions available";
pub const NO_HINTS: &str = "No hints available";

/// Analysis response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub suggestions: Vec<String>,
    pub hints: Vec<String>,
}

impl Analysis {
    /// Split a model reply into suggestions and hints.
    ///
    /// Blank lines are dropped and list markers (`-` and spaces at either
    /// end) are stripped. With `N` usable lines the first `N / 2` are
    /// suggestions and the rest hints; an empty half is replaced by a single
    /// placeholder entry.
    pub fn from_reply(reply: &str) -> Self {
        let mut lines = usable_lines(reply);
        let hints = lines.split_off(lines.len() / 2);
        let suggestions = lines;

        Self {
            suggestions: or_placeholder(suggestions, NO_SUGGESTIONS),
            hints: or_placeholder(hints, NO_HINTS),
        }
    }
}

fn usable_lines(reply: &str) -> Vec<String> {
    reply
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.trim_matches(|c| c == '-' || c == ' ').to_string())
        .collect()
}

fn or_placeholder(items: Vec<String>, placeholder: &str) -> Vec<String> {
    if items.is_empty() {
        vec![placeholder.to_string()]
    } else {
        items
    }
}
