//! Property-based tests for option validation, path handling and
//! `.gitignore` patching.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use proptest::prelude::*;
    use tempfile::TempDir;

    use crate::defaults::REQUIRED_GITIGNORE_RULES;
    use crate::git::{ensure_gitignore_rules, GITIGNORE_FILE};
    use crate::manifest::rewrite_repository_url;
    use crate::options::CompilerVersion;
    use crate::path::{absolutize, display_relative};

    // ============================================================================
    // CompilerVersion property tests
    // ============================================================================

    proptest! {
        /// Property: any three dot-separated digit runs are accepted
        #[test]
        fn compiler_version_accepts_triplets(major in 0u32..1000, minor in 0u32..1000, patch in 0u32..1000) {
            let input = format!("{}.{}.{}", major, minor, patch);
            let version = CompilerVersion::parse(&input);
            prop_assert!(version.is_ok());
            prop_assert_eq!(version.unwrap().package_spec(), format!("roblox-ts@{}", input));
        }

        /// Property: anything with a non-digit, non-dot character is rejected
        #[test]
        fn compiler_version_rejects_letters(prefix in "[0-9.]{0,6}", bad in "[a-zA-Z_ -]", suffix in "[0-9.]{0,6}") {
            let input = format!("{}{}{}", prefix, bad, suffix);
            prop_assert!(CompilerVersion::parse(&input).is_err());
        }

        /// Property: two-component versions are never accepted
        #[test]
        fn compiler_version_rejects_pairs(major in 0u32..1000, minor in 0u32..1000) {
            let input = format!("{}.{}", major, minor);
            prop_assert!(CompilerVersion::parse(&input).is_err());
        }
    }

    // ============================================================================
    // absolutize / display_relative property tests
    // ============================================================================

    proptest! {
        /// Property: absolutized paths never contain `.` or `..` components
        #[test]
        fn absolutize_is_normalized(segments in prop::collection::vec(prop_oneof!["[a-z]{1,8}", Just(".".to_string()), Just("..".to_string())], 0..8)) {
            let relative: PathBuf = segments.iter().collect();
            let result = absolutize(Path::new("/work/base"), &relative);
            prop_assert!(result.is_absolute());
            for component in result.components() {
                let text = component.as_os_str().to_string_lossy();
                prop_assert!(text != "." && text != "..");
            }
        }

        /// Property: absolutize is idempotent
        #[test]
        fn absolutize_is_idempotent(segments in prop::collection::vec("[a-z]{1,8}|\\.\\.", 0..8)) {
            let relative: PathBuf = segments.iter().collect();
            let once = absolutize(Path::new("/work"), &relative);
            let twice = absolutize(Path::new("/elsewhere"), &once);
            prop_assert_eq!(once, twice);
        }

        /// Property: a child of base displays as its relative path
        #[test]
        fn display_relative_of_child(segments in prop::collection::vec("[a-z]{1,8}", 1..5)) {
            let base = Path::new("/work");
            let relative: PathBuf = segments.iter().collect();
            prop_assert_eq!(display_relative(base, &base.join(&relative)), segments.join("/"));
        }
    }

    // ============================================================================
    // .gitignore property tests
    // ============================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Property: after patching, every rule occurs exactly as often as before
        /// or once if it was missing, and a second pass changes nothing
        #[test]
        fn gitignore_patching_is_idempotent(lines in prop::collection::vec("[a-z/*.]{0,12}", 0..6)) {
            let temp = TempDir::new().unwrap();
            let path = temp.path().join(GITIGNORE_FILE);
            let original = lines.join("\n");
            fs::write(&path, &original).unwrap();

            ensure_gitignore_rules(temp.path()).unwrap();
            let first = fs::read_to_string(&path).unwrap();
            for rule in REQUIRED_GITIGNORE_RULES {
                prop_assert!(first.contains(rule));
            }
            prop_assert!(first.starts_with(&original));

            let added = ensure_gitignore_rules(temp.path()).unwrap();
            prop_assert!(added.is_empty());
            prop_assert_eq!(fs::read_to_string(&path).unwrap(), first);
        }
    }

    // ============================================================================
    // rewrite_repository_url property tests
    // ============================================================================

    proptest! {
        /// Property: URLs without a GitHub segment are left untouched
        #[test]
        fn non_github_urls_unchanged(host in "[a-z]{3,10}\\.org", path in "[a-z]{1,8}/[a-z]{1,8}") {
            let url = format!("https://{}/{}", host, path);
            prop_assert_eq!(rewrite_repository_url(&url, "project"), url);
        }

        /// Property: the rewritten URL always names the new project
        #[test]
        fn github_urls_point_at_project(owner in "[a-z]{1,8}", repo in "[a-z]{1,8}", name in "[a-z][a-z-]{0,10}") {
            let url = format!("git+https://github.com/{}/{}.git", owner, repo);
            let rewritten = rewrite_repository_url(&url, &name);
            let expected_suffix = format!("/{}.git", name);
            prop_assert!(rewritten.ends_with(&expected_suffix));
        }
    }
}
