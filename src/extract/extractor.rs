//! The recursive text-extraction traversal
//!
//! Depth-first walk over a parsed HTML tree in document order. Each node
//! reports whether its subtree wrote visible text; block elements consult
//! that flag to decide whether they earn a trailing newline.

use ego_tree::NodeRef;
use scraper::{Html, Node};

use super::policy::{ExtractPolicy, NewlineTrigger};
use super::text::normalize_text;
use crate::error::ExtractError;
use crate::sink::TextSink;

/// Hard ceiling on recursion depth. Real documents stay well under this;
/// anything deeper is treated as malformed input and surfaced as an error
/// instead of risking a stack overflow.
const MAX_TREE_DEPTH: usize = 256;

/// Walks sibling nodes of a parsed HTML tree and streams their visible
/// text to a sink
///
/// The extractor holds only an immutable [`ExtractPolicy`], so one
/// instance can serve any number of sequential or concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct TextExtractor {
    policy: ExtractPolicy,
}

impl TextExtractor {
    /// Extractor with the default readable profile
    pub fn new() -> Self {
        Self {
            policy: ExtractPolicy::readable(),
        }
    }

    /// Extractor with a caller-supplied policy, rejecting inconsistent
    /// tag sets up front
    pub fn with_policy(policy: ExtractPolicy) -> Result<Self, ExtractError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &ExtractPolicy {
        &self.policy
    }

    /// Extract text from an ordered sequence of sibling nodes and write it
    /// to the sink in document order
    ///
    /// An empty sequence writes nothing. A sink failure aborts the
    /// traversal immediately; whatever prefix was already written stays
    /// written.
    pub fn extract_and_write<'a, I, S>(&self, nodes: I, sink: &mut S) -> Result<(), ExtractError>
    where
        I: IntoIterator<Item = NodeRef<'a, Node>>,
        S: TextSink + ?Sized,
    {
        for node in nodes {
            self.extract_node(node, sink, 0)?;
        }
        Ok(())
    }

    /// Convenience wrapper collecting the extraction into a `String`
    pub fn extract_to_string<'a, I>(&self, nodes: I) -> Result<String, ExtractError>
    where
        I: IntoIterator<Item = NodeRef<'a, Node>>,
    {
        let mut output = String::new();
        self.extract_and_write(nodes, &mut output)?;
        Ok(output)
    }

    /// Visit one node, returning whether its subtree wrote visible text
    fn extract_node<S: TextSink + ?Sized>(
        &self,
        node: NodeRef<'_, Node>,
        sink: &mut S,
        depth: usize,
    ) -> Result<bool, ExtractError> {
        if depth > MAX_TREE_DEPTH {
            return Err(ExtractError::TreeTooDeep {
                max: MAX_TREE_DEPTH,
            });
        }

        match node.value() {
            Node::Comment(_) | Node::Doctype(_) | Node::ProcessingInstruction(_) => Ok(false),
            Node::Text(text) => {
                let normalized = normalize_text(text);
                sink.write_text(&normalized)?;
                // LastChild counts every text visit as produced; AnyChild
                // only counts text that survived normalization.
                Ok(match self.policy.newline_trigger {
                    NewlineTrigger::AnyChild => !normalized.is_empty(),
                    NewlineTrigger::LastChild => true,
                })
            }
            Node::Element(element) => {
                let tag = element.name();

                if self.policy.is_suppressed(tag) {
                    return Ok(false);
                }

                // br is a void element: one line break, no children
                if tag == "br" {
                    sink.write_line_break()?;
                    return Ok(true);
                }

                if tag == "a" && self.policy.suppress_nav_anchors && is_nav_anchor_run(node) {
                    return Ok(false);
                }

                let produced = self.extract_children(node, sink, depth)?;
                if produced {
                    if self.policy.wants_single_newline(tag) {
                        sink.write_line_break()?;
                    } else if self.policy.wants_double_newline(tag) {
                        sink.write_line_break()?;
                        sink.write_line_break()?;
                    }
                }
                Ok(produced)
            }
            // Containers the parser may hand us directly
            Node::Document | Node::Fragment => self.extract_children(node, sink, depth),
        }
    }

    /// Visit children in order, folding their produced flags per the
    /// configured trigger
    fn extract_children<S: TextSink + ?Sized>(
        &self,
        node: NodeRef<'_, Node>,
        sink: &mut S,
        depth: usize,
    ) -> Result<bool, ExtractError> {
        let mut produced = false;
        for child in node.children() {
            let child_produced = self.extract_node(child, sink, depth + 1)?;
            produced = match self.policy.newline_trigger {
                NewlineTrigger::AnyChild => produced || child_produced,
                NewlineTrigger::LastChild => child_produced,
            };
        }
        Ok(produced)
    }
}

/// True when the anchor sits in a run of two or more sibling anchors with
/// no non-anchor sibling carrying visible text. Such runs are navigational
/// link lists and contribute nothing to the page's prose. A lone anchor is
/// never suppressed.
fn is_nav_anchor_run(node: NodeRef<'_, Node>) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };

    let mut anchor_count = 0;
    for sibling in parent.children() {
        match sibling.value() {
            Node::Element(element) if element.name() == "a" => anchor_count += 1,
            Node::Element(_) => {
                if has_visible_text(sibling) {
                    return false;
                }
            }
            Node::Text(text) => {
                if !text.trim().is_empty() {
                    return false;
                }
            }
            _ => {}
        }
    }
    anchor_count > 1
}

/// Does any descendant text node carry non-whitespace content?
fn has_visible_text(node: NodeRef<'_, Node>) -> bool {
    node.descendants()
        .any(|descendant| match descendant.value() {
            Node::Text(text) => !text.trim().is_empty(),
            _ => false,
        })
}

/// Parse an HTML document and extract the visible text of its body
///
/// The extraction core never parses markup itself; this wrapper wires the
/// parser in front of it for callers starting from raw HTML. Falls back to
/// the tree root when the document has no `body` element.
pub fn html_to_text(html: &str, policy: &ExtractPolicy) -> Result<String, ExtractError> {
    let document = Html::parse_document(html);
    let extractor = TextExtractor::with_policy(policy.clone())?;

    let root = document.tree.root();
    let body = root.descendants().find(|node| {
        node.value()
            .as_element()
            .is_some_and(|element| element.name() == "body")
    });

    match body {
        Some(body) => extractor.extract_to_string(body.children()),
        None => extractor.extract_to_string(root.children()),
    }
}
