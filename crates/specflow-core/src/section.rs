//! Managed-section merging for shared documents such as `CLAUDE.md`.
//!
//! A generated section starts at a fixed marker line (e.g. `# Spec Workflow`)
//! and runs until the next top-level heading or the end of the document.
//! Everything outside that span belongs to the user and is carried over
//! unchanged; only the blank lines adjacent to the section are normalized.

/// Separator placed between foreign content and a freshly appended section.
pub const APPEND_DIVIDER: &str = "\n\n---\n\n";

/// Merge `section` into `existing`.
///
/// - `None` → `section` verbatim.
/// - No line equal to `marker` → `section` appended after a `---` divider
///   (no divider when `existing` is blank).
/// - Otherwise the first marker line and everything up to the next
///   top-level heading is replaced by `section`.
///
/// Running the merge again on its own output with the same `section`
/// returns the output unchanged.
pub fn merge(existing: Option<&str>, section: &str, marker: &str) -> String {
    let Some(existing) = existing else {
        return section.to_string();
    };

    let lines: Vec<&str> = existing.split('\n').collect();
    let marker = marker.trim();
    let Some(start) = lines.iter().position(|l| l.trim() == marker) else {
        return append(existing, section);
    };

    let end = old_section_end(&lines, start, section, marker);

    let before = lines[..start].join("\n");
    let before = before.trim_end();
    let after = lines[end..]
        .iter()
        .skip_while(|l| l.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let mut out = String::with_capacity(existing.len() + section.len());
    if !before.is_empty() {
        out.push_str(before);
        out.push_str("\n\n");
    }
    if after.is_empty() {
        out.push_str(section);
    } else {
        out.push_str(section.trim_end_matches('\n'));
        out.push_str("\n\n");
        out.push_str(&after);
    }
    out
}

fn append(existing: &str, section: &str) -> String {
    let body = existing.trim_end();
    if body.trim().is_empty() {
        return section.to_string();
    }
    format!("{body}{APPEND_DIVIDER}{section}")
}

/// Index of the first line after the old section that starts at `start`.
fn old_section_end(lines: &[&str], start: usize, section: &str, marker: &str) -> usize {
    // A span that already holds exactly `section` ends where `section` ends,
    // whatever headings or fences it contains.
    let section_lines: Vec<&str> = section.trim_end_matches('\n').split('\n').collect();
    if lines[start..].starts_with(&section_lines) {
        return start + section_lines.len();
    }
    scan_boundary(lines, start, marker)
}

/// First top-level heading after `start` that is not the marker itself.
fn scan_boundary(lines: &[&str], start: usize, marker: &str) -> usize {
    lines
        .iter()
        .enumerate()
        .skip(start + 1)
        .find(|(_, line)| is_top_level_heading(line) && line.trim() != marker)
        .map_or(lines.len(), |(i, _)| i)
}

fn is_top_level_heading(line: &str) -> bool {
    line.starts_with("# ") || line.trim_end() == "#"
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const M: &str = "# Spec Workflow";

    fn assert_idempotent(doc: Option<&str>, section: &str) {
        let once = merge(doc, section, M);
        let twice = merge(Some(&once), section, M);
        assert_eq!(once, twice, "merge not idempotent for {doc:?}");
    }

    #[test]
    fn absent_document_yields_section() {
        let s = "# Spec Workflow\nbody\n";
        assert_eq!(merge(None, s, M), s);
    }

    #[test]
    fn replaces_old_section_and_preserves_surroundings() {
        let d = "# Intro\ntext\n# Spec Workflow\nold\n# Footer\nfoo";
        let out = merge(Some(d), "# Spec Workflow\nnew", M);
        assert_eq!(out, "# Intro\ntext\n\n# Spec Workflow\nnew\n\n# Footer\nfoo");
        assert!(!out.contains("old"));
        let intro = out.find("# Intro\ntext").unwrap();
        let section = out.find("# Spec Workflow\nnew").unwrap();
        let footer = out.find("# Footer\nfoo").unwrap();
        assert!(intro < section && section < footer);
    }

    #[test]
    fn appends_to_foreign_document_with_divider() {
        let d = "# My Project\n\nThis is my existing project documentation.\n";
        let out = merge(Some(d), "# Spec Workflow\nbody\n", M);
        assert_eq!(
            out,
            "# My Project\n\nThis is my existing project documentation.\n\n---\n\n# Spec Workflow\nbody\n"
        );
    }

    #[test]
    fn blank_document_gets_section_without_divider() {
        assert_eq!(merge(Some(""), "# Spec Workflow\nx", M), "# Spec Workflow\nx");
        assert_eq!(merge(Some("  \n\n\t\n"), "# Spec Workflow\nx", M), "# Spec Workflow\nx");
    }

    #[test]
    fn marker_as_substring_is_not_a_match() {
        let d = "# Notes\nWe follow the # Spec Workflow loosely.";
        let out = merge(Some(d), "# Spec Workflow\nx", M);
        assert!(out.starts_with("# Notes\nWe follow the # Spec Workflow loosely.\n\n---\n\n"));
    }

    #[test]
    fn section_at_end_of_document() {
        let d = "# Intro\n\n\n# Spec Workflow\nold\nstill old\n";
        let out = merge(Some(d), "# Spec Workflow\nnew\n", M);
        assert_eq!(out, "# Intro\n\n# Spec Workflow\nnew\n");
    }

    #[test]
    fn section_at_start_of_document() {
        let d = "# Spec Workflow\nold\n\n\n# Footer\nfoo\n";
        let out = merge(Some(d), "# Spec Workflow\nnew\n", M);
        assert_eq!(out, "# Spec Workflow\nnew\n\n# Footer\nfoo\n");
    }

    #[test]
    fn subheadings_stay_inside_section() {
        let d = "# Spec Workflow\n## Phase 1\nold\n### Detail\nold\n# Footer\n";
        let out = merge(Some(d), "# Spec Workflow\nnew", M);
        assert_eq!(out, "# Spec Workflow\nnew\n\n# Footer\n");
    }

    #[test]
    fn first_marker_wins_and_repeated_marker_is_consumed() {
        let d = "# A\n# Spec Workflow\none\n# Spec Workflow\ntwo\n# B\nb";
        let out = merge(Some(d), "# Spec Workflow\nnew", M);
        assert_eq!(out, "# A\n\n# Spec Workflow\nnew\n\n# B\nb");
        assert_eq!(out.matches(M).count(), 1);
    }

    #[test]
    fn marker_inside_code_block_keeps_following_sections() {
        let d = "# Project\n```md\n# Spec Workflow\n```\nexample\n# Other\nkeep me\n";
        let out = merge(Some(d), "# Spec Workflow\nnew", M);
        assert_eq!(out, "# Project\n```md\n\n# Spec Workflow\nnew\n\n# Other\nkeep me\n");
    }

    #[test]
    fn unterminated_fence_does_not_swallow_footer() {
        let d = "# Spec Workflow\nold\n```\nunterminated\n# Footer\nuser text\n";
        let out = merge(Some(d), "# Spec Workflow\nnew", M);
        assert_eq!(out, "# Spec Workflow\nnew\n\n# Footer\nuser text\n");
    }

    #[test]
    fn section_with_open_fence_is_idempotent() {
        let s = "# Spec Workflow\n```\nx";
        let d = "a\n# Spec Workflow\nold\n# B\nb";
        let once = merge(Some(d), s, M);
        assert_eq!(once, "a\n\n# Spec Workflow\n```\nx\n\n# B\nb");
        assert_eq!(merge(Some(&once), s, M), once);
    }

    #[test]
    fn heading_inside_fence_still_ends_old_section() {
        let d = "# Spec Workflow\n```markdown\n# Requirements Document\n```\n# Footer\nf";
        let out = merge(Some(d), "# Spec Workflow\nnew", M);
        assert_eq!(out, "# Spec Workflow\nnew\n\n# Requirements Document\n```\n# Footer\nf");
    }

    #[test]
    fn marker_line_with_surrounding_whitespace_matches() {
        let d = "intro\n  # Spec Workflow  \nold\n# Next\n";
        let out = merge(Some(d), "# Spec Workflow\nnew", M);
        assert_eq!(out, "intro\n\n# Spec Workflow\nnew\n\n# Next\n");
    }

    #[test]
    fn merge_is_idempotent() {
        let s = "# Spec Workflow\n\n## Commands\n- /spec-create\n";
        for d in [
            None,
            Some(""),
            Some("   \n"),
            Some("# My Project\n\nDocs.\n"),
            Some("# My Project\n\nDocs."),
            Some("# Intro\ntext\n# Spec Workflow\nold\n# Footer\nfoo"),
            Some("# Spec Workflow\nold"),
            Some("\n\n# Spec Workflow\nold\n\n\n# Tail\n\n\nt\n\n"),
            Some("# A\n# Spec Workflow\n# Spec Workflow\n# B"),
        ] {
            assert_idempotent(d, s);
        }
    }

    #[test]
    fn section_with_own_top_level_heading_is_idempotent() {
        let s = "# Spec Workflow\nintro\n# Appendix\nmore\n";
        let d = "# Project\n\n# Spec Workflow\nold\n# Footer\nfoo\n";
        let once = merge(Some(d), s, M);
        assert_eq!(once, "# Project\n\n# Spec Workflow\nintro\n# Appendix\nmore\n\n# Footer\nfoo\n");
        assert_eq!(merge(Some(&once), s, M), once);
        assert_idempotent(None, s);
        assert_idempotent(Some("# Project\n"), s);
    }

    #[test]
    fn user_content_survives_repeated_merges() {
        let mut doc = String::from("# Project\n\nkeep me\n\n# Spec Workflow\nv1\n\n# Notes\nalso keep\n");
        for version in ["v2", "v3", "v4"] {
            doc = merge(Some(&doc), &format!("# Spec Workflow\n{version}"), M);
        }
        assert_eq!(doc, "# Project\n\nkeep me\n\n# Spec Workflow\nv4\n\n# Notes\nalso keep\n");
    }

    // -----------------------------------------------------------------------
    // Generated documents
    // -----------------------------------------------------------------------

    use proptest::prelude::*;

    fn doc_line() -> impl Strategy<Value = &'static str> {
        prop_oneof![
            Just("# H"),
            Just("## h"),
            Just(M),
            Just("```"),
            Just(""),
            Just("text"),
        ]
    }

    fn document() -> impl Strategy<Value = String> {
        (prop::collection::vec(doc_line(), 0..12), any::<bool>()).prop_map(|(lines, newline)| {
            let mut doc = lines.join("\n");
            if newline {
                doc.push('\n');
            }
            doc
        })
    }

    fn managed_section() -> impl Strategy<Value = String> {
        (prop::collection::vec(doc_line(), 0..6), any::<bool>()).prop_map(|(lines, newline)| {
            let mut section = M.to_string();
            for line in lines {
                section.push('\n');
                section.push_str(line);
            }
            if newline {
                section.push('\n');
            }
            section
        })
    }

    /// Non-blank lines outside the old section: everything before the first
    /// marker line and everything from the next `# ` heading onward.
    fn user_lines(doc: &str) -> Vec<&str> {
        let lines: Vec<&str> = doc.split('\n').collect();
        let kept: Vec<&str> = match lines.iter().position(|l| l.trim() == M) {
            None => lines,
            Some(start) => {
                let boundary = lines
                    .iter()
                    .enumerate()
                    .skip(start + 1)
                    .find(|(_, l)| l.starts_with("# ") && l.trim() != M)
                    .map_or(lines.len(), |(i, _)| i);
                lines[..start].iter().chain(&lines[boundary..]).copied().collect()
            }
        };
        kept.into_iter().filter(|l| !l.trim().is_empty()).collect()
    }

    fn is_subsequence(needle: &[&str], haystack: &[&str]) -> bool {
        let mut rest = haystack.iter();
        needle.iter().all(|n| rest.any(|h| h == n))
    }

    proptest! {
        #[test]
        fn prop_merge_is_idempotent(doc in document(), section in managed_section()) {
            let once = merge(Some(&doc), &section, M);
            let twice = merge(Some(&once), &section, M);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_merge_keeps_user_lines_in_order(doc in document(), section in managed_section()) {
            let out = merge(Some(&doc), &section, M);
            let out_lines: Vec<&str> = out.split('\n').collect();
            let expected = user_lines(&doc);
            prop_assert!(
                is_subsequence(&expected, &out_lines),
                "lost user content: {:?} not in {:?}",
                expected,
                out_lines
            );
        }

        #[test]
        fn prop_merge_output_contains_section(doc in document(), section in managed_section()) {
            let out = merge(Some(&doc), &section, M);
            prop_assert!(out.contains(section.trim_end_matches('\n')));
        }
    }
}
