//! Namespace part sanitizer and validator.
//!
//! Allowed characters in a namespace part are ASCII letters, digits and
//! underscore.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{NamespaceError, Result};


static NOT_ALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-zA-Z0-9_]+").expect("static pattern")
});


/// Replace every run of not allowed characters with a single underscore.
/// If the last run reached the end of the part, the underscore it produced
/// is dropped (`test(test1)` → `test_test1`). A part made only of not
/// allowed characters sanitizes to `_`.
///
/// Leading runs are kept as an underscore (`[test2]` → `_test2`).
pub fn sanitize_namespace_part(part: &str) -> String {
    let trailing_run = NOT_ALLOWED
        .find_iter(part)
        .last()
        .is_some_and(|m| m.end() == part.len());
    let replaced = NOT_ALLOWED.replace_all(part, "_");
    if trailing_run && replaced.len() > 1 {
        replaced[..replaced.len() - 1].to_string()
    } else {
        replaced.into_owned()
    }
}


/// Succeeds only if `part` holds allowed characters exclusively.
pub fn validate_namespace_part(part: &str) -> Result<()> {
    match NOT_ALLOWED.find(part) {
        Some(m) => Err(NamespaceError::DisallowedCharacter {
            part: part.to_string(),
            ch: m.as_str().chars().next().unwrap_or_default(),
        }),
        None => Ok(()),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    const INCORRECT: [&str; 16] = [
        "test(test1)", "test[test2]", "test{test3}", "test 4", "test.5", "test,6", "test;7",
        "test!8", "test?9", "test|10", "test\\11", "test/12", "test^13", "test\"14",
        "test`15", "test'16",
    ];

    const CORRECTED: [&str; 16] = [
        "test_test1", "test_test2", "test_test3", "test_4", "test_5", "test_6", "test_7",
        "test_8", "test_9", "test_10", "test_11", "test_12", "test_13", "test_14",
        "test_15", "test_16",
    ];

    #[test]
    fn replaces_not_allowed_chars() {
        for (input, expected) in INCORRECT.iter().zip(CORRECTED.iter()) {
            let sanitized = sanitize_namespace_part(input);
            assert_eq!(&sanitized, expected, "input {:?}", input);
            assert!(validate_namespace_part(&sanitized).is_ok());
        }
    }

    #[test]
    fn validate_detects_not_allowed_chars() {
        let parts = [
            "test1)", "[test2]", "{test3}", "test 4", "test.5", "test,6", "test;7", "test!8",
            "test?9", "test|10", "test\\11", "test/12", "test^13", "test\"14", "test`15",
            "test'16",
        ];
        for part in parts {
            assert!(validate_namespace_part(part).is_err(), "part {:?}", part);
        }
    }

    #[test]
    fn validate_reports_first_offender() {
        match validate_namespace_part("ab.c d") {
            Err(NamespaceError::DisallowedCharacter { ch, .. }) => assert_eq!(ch, '.'),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn leading_run_becomes_underscore() {
        assert_eq!(sanitize_namespace_part("[test2]"), "_test2");
        assert_eq!(sanitize_namespace_part("..x"), "_x");
    }

    #[test]
    fn existing_trailing_underscore_is_kept() {
        assert_eq!(sanitize_namespace_part("test_"), "test_");
        assert_eq!(sanitize_namespace_part("uno[f]"), "uno_f");
    }

    #[test]
    fn all_disallowed_is_single_underscore() {
        assert_eq!(sanitize_namespace_part("(("), "_");
        assert_eq!(sanitize_namespace_part("."), "_");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let samples = INCORRECT
            .iter()
            .copied()
            .chain(["", "_", "a b c", "((x))", "x__y", "ünï", "*", "a/b/"]);
        for s in samples {
            let once = sanitize_namespace_part(s);
            assert_eq!(sanitize_namespace_part(&once), once, "input {:?}", s);
            assert!(validate_namespace_part(&once).is_ok(), "input {:?}", s);
        }
    }

    #[test]
    fn allowed_parts_untouched() {
        for part in ["Alpha", "second_f", "0", "nested_data_one"] {
            assert_eq!(sanitize_namespace_part(part), part);
            assert!(validate_namespace_part(part).is_ok());
        }
    }
}
