//! Tests for markdown postprocessing modules.

use super::legacy_cleanup::legacy_cleanup;
use super::normalizer::{NORMALIZER_STEPS, normalize_markdown, step_names};

fn step(name: &str) -> &'static super::Substitution {
    NORMALIZER_STEPS
        .iter()
        .find(|step| step.name == name)
        .unwrap_or_else(|| panic!("no step named {name}"))
}

#[test]
fn test_collapses_excess_newlines() {
    assert_eq!(normalize_markdown("a\n\n\n\n\nb"), "a\n\nb");
}

#[test]
fn test_removes_empty_bold() {
    assert_eq!(normalize_markdown("Intro ****\n\n** **done"), "Intro \n\ndone");
}

#[test]
fn test_strips_score_and_checks() {
    let input = "Task\nScore: 65.5% (Checks completed: 100.0%)\nBody";
    assert_eq!(normalize_markdown(input), "Task\n \nBody");
}

#[test]
fn test_removes_bare_labels() {
    let input = "Repo:\n\n* GitHub repository: `alx`\nFile:\n\nnext";
    assert_eq!(
        normalize_markdown(input),
        "* GitHub repository: `alx`\nnext"
    );
}

#[test]
fn test_file_label_with_value() {
    let output = normalize_markdown("File: src/app.js\nmore content");
    assert_eq!(output, "**File:** `src/app.js`\nmore content");
}

#[test]
fn test_directory_label_with_value() {
    let output = normalize_markdown("* Directory: 0x00-hello_world\n* File: 0-hello.c");
    assert_eq!(
        output,
        "* **Directory:** `0x00-hello_world`\n* **File:** `0-hello.c`"
    );
}

#[test]
fn test_label_with_code_value_is_not_double_wrapped() {
    assert_eq!(
        normalize_markdown("Directory: `api`"),
        "**Directory:** `api`"
    );
}

#[test]
fn test_bare_label_removal_runs_before_reformatting() {
    let names = step_names();
    let position = |name: &str| {
        names
            .iter()
            .position(|n| *n == name)
            .unwrap_or_else(|| panic!("no step named {name}"))
    };
    assert!(position("bare_file_label") < position("file_label"));
    assert!(position("bare_repo_label") < position("directory_label"));

    // Reformatting first would swallow the next line as the file name
    let input = "File:\n\nnext line";
    let reordered = step("bare_file_label").apply(&step("file_label").apply(input));
    assert_eq!(reordered, "**File:** `next line`");
    assert_eq!(normalize_markdown(input), "next line");
}

#[test]
fn test_bolds_only_first_phrase() {
    let output = normalize_markdown("Read or watch:\n\nRead or watch: again\n\nMDN resources:");
    assert_eq!(
        output,
        "**Read or watch:**\n\nRead or watch: again\n\n**MDN resources:**"
    );
}

#[test]
fn test_already_bold_phrase_is_kept() {
    assert_eq!(
        normalize_markdown("**Read or watch:**\n\n* [Link](https://example.com)"),
        "**Read or watch:**\n\n* [Link](https://example.com)"
    );
}

#[test]
fn test_bold_before_bolded_phrase_stays_separate() {
    let once = normalize_markdown("**Note**\n\nRead or watch:\n\n* [C](https://example.com)");
    assert_eq!(
        once,
        "**Note**\n\n**Read or watch:**\n\n* [C](https://example.com)"
    );
    assert_eq!(normalize_markdown(&once), once);
}

#[test]
fn test_adjacent_bold_spans_are_not_joined() {
    assert_eq!(normalize_markdown("**a** **b**"), "**a** **b**");
    assert_eq!(
        normalize_markdown("**Note** Read or watch:"),
        "**Note** **Read or watch:**"
    );
    assert_eq!(normalize_markdown("**bold *and italic* text**"), "**bold *and italic* text**");
}

#[test]
fn test_leftovers_of_one_pass_are_cleaned() {
    // Score removal leaves an empty fence behind
    assert_eq!(normalize_markdown("```\n\nScore: 1.5%\n\n```"), "");
    // Removing the empty fence pulls two blank-line runs together
    let once = normalize_markdown("x\n\n```\n\n```\n\n```\n\ny");
    assert_eq!(once, "x\n```\ny");
    assert_eq!(normalize_markdown(&once), once);
}

#[test]
fn test_code_fence_spacing() {
    let input = "Run:\n\n```\nmake\n```\n\nDone\n\n```\n\n```";
    assert_eq!(normalize_markdown(input), "Run:\n```\nmake\n```\nDone");
}

#[test]
fn test_trims_both_ends() {
    assert_eq!(normalize_markdown("\n\n  ## Tasks  \n\n"), "## Tasks");
}

#[test]
fn test_normalize_is_idempotent_on_course_output() {
    let input = "## Resources\n\n\n\nRead or watch:\n\n* [C](https://example.com)\n\n## Requirements\n\n\
                 ** **\n\n## Tasks\n\n### 0. Hello\n\nScore: 100.0% (Checks completed: 100.0%)\n\n\
                 Repo:\n\n* GitHub repository: `alx`\n* Directory: 0x00\n* File: 0-main.c\n\n\
                 ```c\nint main(void);\n```\n\n\n\n### 1. World\n\n```\n\n```\n\nFile:\n\n";
    let once = normalize_markdown(input);
    let twice = normalize_markdown(&once);
    assert_eq!(once, twice);
    assert!(once.contains("**Directory:** `0x00`"));
    assert!(once.contains("**File:** `0-main.c`"));
}

#[test]
fn test_legacy_cleanup_patterns() {
    let input = "![Project badge](https://x/badge.png)\n# Title\n[Tips](/rltoken/abc) broken\n\
                 ```\n`ls -la`\n```\nSee [docs](/rltoken/xyz).\n";
    assert_eq!(
        legacy_cleanup(input),
        "# Title\n```\nls -la\n```\nSee [docs].\n"
    );
}

#[test]
fn test_legacy_cleanup_leaves_regular_markdown() {
    let input = "## Tasks\n\n### 0. Hello\n\n[Link](https://example.com)\n";
    assert_eq!(legacy_cleanup(input), input);
}

mod properties {
    use super::normalize_markdown;
    use proptest::prelude::*;

    fn markdown_line() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-z ]{0,12}",
            r"\*\*[a-z]{1,6}\*\*",
            Just("** **".to_string()),
            Just("```".to_string()),
            Just("File: main.c".to_string()),
            Just("File: `main.c`".to_string()),
            Just("File:".to_string()),
            Just("Directory: 0x01".to_string()),
            Just("Repo:".to_string()),
            Just("Read or watch:".to_string()),
            Just("MDN resources:".to_string()),
            Just("Score: 12.5%".to_string()),
            Just("(Checks completed: 100.0%)".to_string()),
            Just(String::new()),
        ]
    }

    fn document() -> impl Strategy<Value = String> {
        (
            prop::collection::vec(markdown_line(), 0..24),
            prop::collection::vec(1usize..6, 24),
        )
            .prop_map(|(lines, gaps)| {
                let mut input = String::new();
                for (line, gap) in lines.iter().zip(gaps.iter()) {
                    input.push_str(line);
                    input.push_str(&"\n".repeat(*gap));
                }
                input
            })
    }

    proptest! {
        #[test]
        fn never_leaves_three_newlines(input in document()) {
            let output = normalize_markdown(&input);
            prop_assert!(!output.contains("\n\n\n"), "output: {output:?}");
        }

        #[test]
        fn normalizing_twice_changes_nothing(input in document()) {
            let once = normalize_markdown(&input);
            prop_assert_eq!(normalize_markdown(&once), once);
        }

        #[test]
        fn blank_line_runs_collapse(prefix in "[a-z]{1,8}", suffix in "[a-z]{1,8}", run in 3usize..40) {
            let input = format!("{prefix}{}{suffix}", "\n".repeat(run));
            prop_assert_eq!(normalize_markdown(&input), format!("{prefix}\n\n{suffix}"));
        }
    }
}
