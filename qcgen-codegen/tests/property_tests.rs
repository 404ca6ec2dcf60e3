//! Property-based tests for the source builder.
//!
//! These tests use proptest to drive the builder with random nestings of
//! lines and blocks and verify:
//! 1. Balance: the indentation level is restored after any nesting, even when
//!    a block body fails partway through
//! 2. Dedent and reset behave the same at every depth
//! 3. Wrapped docstring text never exceeds its column budget

use proptest::prelude::*;
use qcgen_codegen::{Error, IndentManager, SourceBuilder, text};

#[derive(Debug, Clone)]
enum Op {
    Line(String),
    Blank,
    Block(String, usize, Vec<Op>),
    Fail,
}

fn line_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_ ]{0,20}").expect("valid regex")
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let leaf = prop_oneof![
        4 => line_strategy().prop_map(Op::Line),
        1 => Just(Op::Blank),
        1 => Just(Op::Fail),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        (
            line_strategy(),
            0..3usize,
            prop::collection::vec(inner, 0..6),
        )
            .prop_map(|(header, blanks, body)| Op::Block(header, blanks, body))
    })
}

fn apply(sb: &mut SourceBuilder, ops: &[Op]) -> Result<(), Error> {
    for op in ops {
        match op {
            Op::Line(line) => {
                sb.writeln(line);
            }
            Op::Blank => {
                sb.blank();
            }
            Op::Block(header, blanks, body) => {
                sb.with_block(header, *blanks, |b| apply(b, body))?;
            }
            Op::Fail => return Err(Error::DedentUnderflow),
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn indentation_is_balanced(
        start in 0..4usize,
        ops in prop::collection::vec(op_strategy(), 0..8),
    ) {
        let mut sb = SourceBuilder::default();
        for _ in 0..start {
            sb.push_indent();
        }

        let _ = apply(&mut sb, &ops);

        prop_assert_eq!(sb.depth(), start);
    }

    #[test]
    fn guard_balanced_across_nested_scopes(depth in 1..10usize) {
        fn nest(sb: &mut SourceBuilder, remaining: usize, seen: &mut Vec<usize>) {
            seen.push(sb.depth());
            if remaining > 0 {
                let mut scope = sb.indent();
                nest(&mut scope, remaining - 1, seen);
            }
        }

        let mut sb = SourceBuilder::default();
        let mut seen = Vec::new();
        nest(&mut sb, depth, &mut seen);

        prop_assert_eq!(seen, (0..=depth).collect::<Vec<_>>());
        prop_assert_eq!(sb.depth(), 0);
    }

    #[test]
    fn dedent_succeeds_exactly_depth_times(depth in 0..16usize) {
        let mut indent = IndentManager::default();
        for _ in 0..depth {
            indent.indent();
        }
        for expected in (0..depth).rev() {
            indent.dedent().unwrap();
            prop_assert_eq!(indent.level(), expected);
        }
        prop_assert_eq!(indent.dedent().unwrap_err(), Error::DedentUnderflow);
        prop_assert_eq!(indent.level(), 0);
    }

    #[test]
    fn reset_always_yields_zero(depth in 0..64usize) {
        let mut indent = IndentManager::new("\t");
        for _ in 0..depth {
            indent.indent();
        }
        indent.reset();
        prop_assert_eq!(indent.level(), 0);
        prop_assert_eq!(indent.render(), "");
    }

    #[test]
    fn empty_writeln_is_single_newline(depth in 0..16usize) {
        let mut sb = SourceBuilder::default();
        for _ in 0..depth {
            sb.push_indent();
        }
        sb.writeln("");
        prop_assert_eq!(sb.as_str(), "\n");
    }

    #[test]
    fn wrap_respects_width(
        words in prop::collection::vec("[a-zA-Z]{1,100}", 1..20),
        width in 1..120usize,
    ) {
        let line = words.join(" ");
        let segments = text::wrap(&line, width);

        for segment in &segments {
            prop_assert!(segment.chars().count() <= width, "{:?} > {}", segment, width);
        }
        let text: String = segments.concat().split_whitespace().collect();
        prop_assert_eq!(text, words.concat());
    }

    #[test]
    fn docstring_lines_fit_when_indent_leaves_room(
        words in prop::collection::vec("[a-z]{1,60}", 1..12),
        depth in 0..8usize,
        room in 1..40usize,
    ) {
        let width = depth * 4 + room;
        let mut sb = SourceBuilder::default();
        for _ in 0..depth {
            sb.push_indent();
        }
        sb.docstring_with(&words.join(" "), "'", width);

        for line in sb.as_str().lines() {
            prop_assert!(line.chars().count() <= width, "{:?} > {}", line, width);
        }
    }
}
