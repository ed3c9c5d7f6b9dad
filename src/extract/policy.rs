//! Tag policies driving suppression and line-break decisions
//!
//! The traversal itself is fixed; everything tag-dependent lives here as
//! immutable configuration: which subtrees are dropped entirely, which
//! elements earn a single trailing newline, and which earn a blank line.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

// Default tag tables for the two shipped profiles
const SUPPRESSED_TAGS: &[&str] = &[
    "script", "style", "label", "textarea", "button", "option", "select", "input",
];
const SINGLE_NEWLINE_TAGS: &[&str] = &["li", "div", "ul"];
const DOUBLE_NEWLINE_TAGS: &[&str] = &["p", "h1", "h2", "h3", "h4", "section"];

/// Which child result decides whether a block earns its trailing newline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NewlineTrigger {
    /// Any child that produced visible text is enough
    #[default]
    AnyChild,
    /// Only the most recently visited child counts, and every text-node
    /// visit counts as produced even when it normalizes to nothing
    LastChild,
}

/// Immutable tag policy consulted throughout one traversal
///
/// A tag may appear in at most one of the three sets; [`ExtractPolicy::new`]
/// and [`TextExtractor::with_policy`](crate::TextExtractor::with_policy)
/// reject overlapping sets. Policies are plain data and deserialize from
/// TOML, so callers can ship their own rule sets without code changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractPolicy {
    /// Elements whose entire subtree contributes no text
    pub suppressed_tags: HashSet<String>,
    /// Elements followed by one line break when they produced text
    pub single_newline_tags: HashSet<String>,
    /// Elements followed by a blank line when they produced text
    pub double_newline_tags: HashSet<String>,
    /// Drop anchors that sit in a run of sibling anchors with no
    /// surrounding prose (navigational link lists)
    pub suppress_nav_anchors: bool,
    pub newline_trigger: NewlineTrigger,
}

impl Default for ExtractPolicy {
    fn default() -> Self {
        Self::readable()
    }
}

impl ExtractPolicy {
    /// Build a custom policy, rejecting tags listed in more than one set
    pub fn new(
        suppressed_tags: HashSet<String>,
        single_newline_tags: HashSet<String>,
        double_newline_tags: HashSet<String>,
    ) -> Result<Self, ExtractError> {
        let policy = Self {
            suppressed_tags,
            single_newline_tags,
            double_newline_tags,
            suppress_nav_anchors: false,
            newline_trigger: NewlineTrigger::default(),
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Display-oriented profile: blank lines between paragraph-level
    /// blocks, single newlines after list/division blocks, navigational
    /// anchor runs dropped
    pub fn readable() -> Self {
        Self {
            suppressed_tags: tag_set(SUPPRESSED_TAGS),
            single_newline_tags: tag_set(SINGLE_NEWLINE_TAGS),
            double_newline_tags: tag_set(DOUBLE_NEWLINE_TAGS),
            suppress_nav_anchors: true,
            newline_trigger: NewlineTrigger::default(),
        }
    }

    /// Indexing-oriented profile: every block ends with a single newline
    /// and anchor text always renders
    pub fn compact() -> Self {
        Self {
            suppressed_tags: tag_set(SUPPRESSED_TAGS),
            single_newline_tags: tag_set(SINGLE_NEWLINE_TAGS)
                .union(&tag_set(DOUBLE_NEWLINE_TAGS))
                .cloned()
                .collect(),
            double_newline_tags: HashSet::new(),
            suppress_nav_anchors: false,
            newline_trigger: NewlineTrigger::default(),
        }
    }

    /// Check that no tag appears in more than one set
    pub fn validate(&self) -> Result<(), ExtractError> {
        let conflict = self
            .suppressed_tags
            .intersection(&self.single_newline_tags)
            .chain(self.suppressed_tags.intersection(&self.double_newline_tags))
            .chain(
                self.single_newline_tags
                    .intersection(&self.double_newline_tags),
            )
            .next();
        match conflict {
            Some(tag) => Err(ExtractError::ConflictingPolicy { tag: tag.clone() }),
            None => Ok(()),
        }
    }

    pub(crate) fn is_suppressed(&self, tag: &str) -> bool {
        self.suppressed_tags.contains(tag)
    }

    pub(crate) fn wants_single_newline(&self, tag: &str) -> bool {
        self.single_newline_tags.contains(tag)
    }

    pub(crate) fn wants_double_newline(&self, tag: &str) -> bool {
        self.double_newline_tags.contains(tag)
    }
}

fn tag_set(tags: &[&str]) -> HashSet<String> {
    tags.iter().map(|tag| (*tag).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_profiles_are_internally_consistent() {
        assert!(ExtractPolicy::readable().validate().is_ok());
        assert!(ExtractPolicy::compact().validate().is_ok());
    }

    #[test]
    fn overlapping_sets_are_rejected() {
        let result = ExtractPolicy::new(
            tag_set(&["script", "div"]),
            tag_set(&["div", "li"]),
            tag_set(&["p"]),
        );
        match result {
            Err(ExtractError::ConflictingPolicy { tag }) => assert_eq!(tag, "div"),
            other => panic!("expected ConflictingPolicy, got {other:?}"),
        }
    }

    #[test]
    fn compact_profile_moves_paragraph_tags_to_single_newline() {
        let policy = ExtractPolicy::compact();
        for tag in ["p", "h1", "h2", "h3", "h4", "section", "div", "li", "ul"] {
            assert!(policy.wants_single_newline(tag), "{tag} should be single-newline");
            assert!(!policy.wants_double_newline(tag));
        }
    }

    #[test]
    fn policy_deserializes_from_toml() {
        let policy: ExtractPolicy = toml::from_str(
            r#"
            suppressed_tags = ["script", "style"]
            single_newline_tags = ["div"]
            double_newline_tags = ["p"]
            suppress_nav_anchors = false
            newline_trigger = "last-child"
            "#,
        )
        .unwrap();
        assert!(policy.is_suppressed("script"));
        assert!(policy.wants_single_newline("div"));
        assert!(policy.wants_double_newline("p"));
        assert!(!policy.suppress_nav_anchors);
        assert_eq!(policy.newline_trigger, NewlineTrigger::LastChild);
    }

    #[test]
    fn omitted_policy_fields_fall_back_to_readable_defaults() {
        let policy: ExtractPolicy = toml::from_str(r#"suppressed_tags = ["script"]"#).unwrap();
        assert!(policy.suppress_nav_anchors);
        assert_eq!(policy.newline_trigger, NewlineTrigger::AnyChild);
        assert!(policy.wants_double_newline("p"));
    }
}
