use std::collections::HashSet;

use hext::{ExtractError, ExtractPolicy, NewlineTrigger, Profile, TextExtractor, html_to_text};

fn tags(names: &[&str]) -> HashSet<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

#[test]
fn profiles_resolve_to_their_policies() {
    assert_eq!(Profile::Readable.policy(), ExtractPolicy::readable());
    assert_eq!(Profile::Compact.policy(), ExtractPolicy::compact());
    assert_eq!(Profile::default(), Profile::Readable);
}

#[test]
fn with_policy_rejects_overlapping_tag_sets() {
    let mut policy = ExtractPolicy::readable();
    policy.suppressed_tags.insert("div".to_string());

    let result = TextExtractor::with_policy(policy);
    assert!(
        matches!(result, Err(ExtractError::ConflictingPolicy { ref tag }) if tag == "div"),
        "an overlapping policy must be rejected at construction"
    );
}

#[test]
fn custom_policy_drives_the_traversal() {
    let policy = ExtractPolicy::new(
        tags(&["script", "style"]),
        tags(&["blockquote"]),
        tags(&["article"]),
    )
    .expect("disjoint sets are a valid policy");

    let text = html_to_text(
        "<article><blockquote>quote</blockquote>prose</article>",
        &policy,
    )
    .unwrap();
    assert_eq!(text, "quote\nprose\n\n");
}

#[test]
fn custom_policy_can_unsuppress_form_controls() {
    let policy = ExtractPolicy::new(tags(&["script", "style"]), tags(&[]), tags(&["p"]))
        .expect("disjoint sets are a valid policy");

    let text = html_to_text("<button>Click me</button>", &policy).unwrap();
    assert_eq!(text, "Click me");
}

#[test]
fn last_child_trigger_is_reachable_from_configuration() {
    let policy = ExtractPolicy {
        newline_trigger: NewlineTrigger::LastChild,
        ..ExtractPolicy::readable()
    };

    // A suppressed trailing child wipes the produced flag under the
    // last-child fold, so the paragraph loses its blank line.
    let text = html_to_text("<p>text<script>x()</script></p>after", &policy).unwrap();
    assert_eq!(text, "textafter");
}

#[test]
fn policy_files_round_trip_through_toml() {
    let policy = ExtractPolicy::compact();
    let serialized = toml::to_string(&policy).expect("policies serialize");
    let restored: ExtractPolicy = toml::from_str(&serialized).expect("policies deserialize");
    assert_eq!(restored, policy);
}
