use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityIndex;

/// How an availability entry is compared against an ingredient line.
///
/// `Substring` is plain containment on the lowercased line, so `egg` matches
/// "2 large eggs" and `ham` would also match "shampoo". `WholeWord` requires the
/// entry to be bounded by non-alphanumeric characters or the line edges.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPolicy {
    #[default]
    Substring,
    WholeWord,
}

impl MatchPolicy {
    pub fn is_line_available(self, line: &str, index: &AvailabilityIndex) -> bool {
        let lower_line = line.to_lowercase();
        index.iter().any(|entry| self.entry_matches(&lower_line, entry))
    }

    fn entry_matches(self, lower_line: &str, entry: &str) -> bool {
        match self {
            MatchPolicy::Substring => lower_line.contains(entry),
            MatchPolicy::WholeWord => contains_whole_word(lower_line, entry),
        }
    }
}

impl std::str::FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "substring" => Ok(MatchPolicy::Substring),
            "whole-word" | "whole_word" | "word" => Ok(MatchPolicy::WholeWord),
            other => Err(format!("unknown match policy '{}'", other)),
        }
    }
}

/// True when any available name occurs in `line`, ignoring case.
pub fn is_line_available(line: &str, index: &AvailabilityIndex) -> bool {
    MatchPolicy::Substring.is_line_available(line, index)
}

/// The longest availability entry that satisfies `line`, if any.
pub fn matching_entry<'a>(
    line: &str,
    index: &'a AvailabilityIndex,
    policy: MatchPolicy,
) -> Option<&'a str> {
    let lower_line = line.to_lowercase();
    index
        .iter()
        .filter(|entry| policy.entry_matches(&lower_line, entry))
        .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| b.cmp(a)))
}

fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let mut from = 0;
    // Restart one char past each rejected hit so overlapping occurrences are still tried.
    while let Some(offset) = haystack[from..].find(needle) {
        let start = from + offset;
        let end = start + needle.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
    }
    false
}
