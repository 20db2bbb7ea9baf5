//! Property-based tests for repository identity and source lines.
//!
//! These tests use proptest to generate owners, names and distros and check
//! that handles, source lines and removal plans behave for all of them.

#[cfg(test)]
mod proptest_tests {
    use std::path::PathBuf;

    use crate::config::AptConfig;
    use crate::plan::RemovalPlan;
    use crate::repository::{base_file_name, Repository};
    use crate::sources::parse_line;
    use proptest::prelude::*;

    /// Launchpad-style identifiers: no separators, no whitespace.
    fn ident() -> impl Strategy<Value = String> {
        "[a-z0-9][a-z0-9+.-]{0,15}"
    }

    proptest! {
        /// Property: formatting a parsed handle gives the handle back
        #[test]
        fn handle_round_trips(owner in ident(), name in ident()) {
            let handle = format!("ppa:{owner}/{name}");
            let repo = Repository::from_short_handle(&handle).unwrap();
            prop_assert_eq!(repo.short_handle(), handle);
        }

        /// Property: the base file name is always the repository name
        #[test]
        fn base_file_name_is_name(owner in ident(), name in ident()) {
            let handle = format!("ppa:{owner}/{name}");
            prop_assert_eq!(base_file_name(&handle), name.as_str());
        }

        /// Property: a handle with any other scheme is rejected
        #[test]
        fn other_schemes_rejected(scheme in "[a-z]{1,6}", owner in ident(), name in ident()) {
            prop_assume!(scheme != "ppa");
            let handle = format!("{scheme}:{owner}/{name}");
            prop_assert!(Repository::from_short_handle(&handle).is_err());
        }

        /// Property: a generated source line parses back into the same record
        #[test]
        fn source_line_parses_back(
            owner in ident(),
            name in ident(),
            distro in "[a-z]{3,10}",
            signed in any::<bool>(),
        ) {
            let repo = Repository {
                owner,
                name: name.clone(),
                distro,
                source_file: PathBuf::from(format!("/apt/sources.list.d/{name}.list")),
                keyring_file: if signed {
                    format!("/etc/apt/keyrings/{name}.gpg")
                } else {
                    String::new()
                },
                ..Repository::default()
            };

            let parsed = parse_line(&repo.source_line(), &repo.source_file);
            prop_assert_eq!(parsed, Some(repo));
        }

        /// Property: a keyring used by another repository is never deleted
        #[test]
        fn shared_keyring_never_deleted(others in 1usize..5) {
            let config = AptConfig::new("/apt");
            let keyring = "/etc/apt/keyrings/shared.gpg".to_string();
            let mut repos = vec![Repository {
                source_file: PathBuf::from("/apt/sources.list.d/tools.list"),
                keyring_file: keyring.clone(),
                ..Repository::from_short_handle("ppa:alice/tools").unwrap()
            }];
            for i in 0..others {
                repos.push(Repository {
                    source_file: PathBuf::from(format!("/apt/sources.list.d/other{i}.list")),
                    keyring_file: keyring.clone(),
                    ..Repository::from_short_handle(&format!("ppa:bob/other{i}")).unwrap()
                });
            }

            let plan = RemovalPlan::build("ppa:alice/tools", &repos, &config).unwrap();
            let resolved = PathBuf::from("/apt/keyrings/shared.gpg");
            prop_assert!(!plan.delete.contains(&resolved));
            prop_assert_eq!(plan.shared_keyrings, vec![resolved]);
        }
    }
}
