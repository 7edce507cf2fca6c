//! End-to-end resolution scenarios against the public surface.

use proptest::prelude::*;

use mutiny_options::fs::FakeFileSystem;
use mutiny_options::{
    BaselineProvider, MutationLevel, OptionsError, RawOptions, Reporter, resolve,
};

fn fs() -> FakeFileSystem {
    FakeFileSystem::new().with_dir(".")
}

#[test]
fn diff_without_target_is_a_missing_required_error() {
    let raw = RawOptions {
        diff: Some(true),
        git_diff_target: None,
        ..RawOptions::default()
    };
    let err = resolve(raw, &fs()).unwrap_err();
    assert_eq!(
        err,
        OptionsError::MissingRequired {
            field: "git-diff-target",
            context: "when the diff feature is enabled",
        }
    );
}

#[test]
fn disabled_diff_defaults_the_target_to_master() {
    let raw = RawOptions {
        diff: Some(false),
        git_diff_target: None,
        ..RawOptions::default()
    };
    let options = resolve(raw, &fs()).unwrap();
    assert!(!options.diff_enabled);
    assert_eq!(options.git_diff_target, "master");
}

#[test]
fn uppercase_mutation_level_resolves_to_the_aggressive_variant() {
    let raw = RawOptions {
        mutation_level: Some("AGGRESSIVE".into()),
        ..RawOptions::default()
    };
    let options = resolve(raw, &fs()).unwrap();
    assert_eq!(options.mutation_level, MutationLevel::Aggressive);
}

#[test]
fn bogus_mutation_level_names_the_raw_value() {
    let raw = RawOptions {
        mutation_level: Some("bogus".into()),
        ..RawOptions::default()
    };
    let err = resolve(raw, &fs()).unwrap_err();
    assert!(matches!(err, OptionsError::InvalidValue { field: "mutation-level", .. }));
    assert!(err.to_string().contains("'bogus'"));
}

#[test]
fn manifest_path_is_validated_through_the_injected_oracle() {
    let oracle = fs().with_file("/repo/Cargo.toml");

    let raw = RawOptions {
        manifest_path: Some("/repo/Cargo.toml".into()),
        ..RawOptions::default()
    };
    let options = resolve(raw, &oracle).unwrap();
    assert_eq!(
        options.manifest_path.as_deref(),
        Some(std::path::Path::new("/repo/Cargo.toml"))
    );

    let raw = RawOptions {
        manifest_path: Some("/repo/Missing.toml".into()),
        ..RawOptions::default()
    };
    let err = resolve(raw, &oracle).unwrap_err();
    assert!(err.to_string().contains("'/repo/Missing.toml'"));
}

#[test]
fn provider_defaults_to_dashboard_only_in_dashboard_mode() {
    // Dashboard reporter listed: provider follows it.
    let raw = RawOptions {
        reporters: Some(vec!["dashboard".into()]),
        dashboard_api_key: Some("key".into()),
        project_name: Some("org/repo".into()),
        ..RawOptions::default()
    };
    let options = resolve(raw, &fs()).unwrap();
    assert_eq!(options.baseline_provider, BaselineProvider::Dashboard);

    // Compare flag alone forces the dashboard reporter in, with the same result.
    let raw = RawOptions {
        compare_to_baseline: Some(true),
        dashboard_api_key: Some("key".into()),
        project_name: Some("org/repo".into()),
        project_version: Some("pr-7".into()),
        ..RawOptions::default()
    };
    let options = resolve(raw, &fs()).unwrap();
    assert!(options.reporters.contains(&Reporter::Dashboard));
    assert_eq!(options.baseline_provider, BaselineProvider::Dashboard);

    // No dashboard feature anywhere: disk.
    let options = resolve(RawOptions::default(), &fs()).unwrap();
    assert_eq!(options.baseline_provider, BaselineProvider::Disk);
}

#[test]
fn dashboard_mode_requires_api_key_and_project_name() {
    let raw = RawOptions {
        reporters: Some(vec!["dashboard".into()]),
        ..RawOptions::default()
    };
    let err = resolve(raw, &fs()).unwrap_err();
    assert_eq!(
        err,
        OptionsError::MissingRequired {
            field: "dashboard-api-key",
            context: "when dashboard mode is enabled",
        }
    );
}

#[test]
fn azure_provider_requires_url_and_sas_token() {
    let raw = RawOptions {
        baseline_provider: Some("azure-file-storage".into()),
        azure_storage_url: Some("https://share.example.net/baselines".into()),
        ..RawOptions::default()
    };
    let err = resolve(raw, &fs()).unwrap_err();
    assert!(matches!(err, OptionsError::MissingRequired { field: "azure-sas-token", .. }));

    let raw = RawOptions {
        baseline_provider: Some("azure-file-storage".into()),
        azure_storage_url: Some("https://share.example.net/baselines".into()),
        azure_sas_token: Some("sig=abc".into()),
        ..RawOptions::default()
    };
    let options = resolve(raw, &fs()).unwrap();
    assert_eq!(
        options.azure_storage_url.as_deref(),
        Some("https://share.example.net/baselines")
    );
}

#[test]
fn azure_settings_are_ignored_for_other_providers() {
    let raw = RawOptions {
        azure_storage_url: Some("https://share.example.net".into()),
        azure_sas_token: Some("sig=abc".into()),
        ..RawOptions::default()
    };
    let options = resolve(raw, &fs()).unwrap();
    assert_eq!(options.azure_storage_url, None);
    assert_eq!(options.azure_sas_token, None);
}

#[test]
fn threshold_ordering_is_checked_across_fields() {
    let raw = RawOptions {
        threshold_high: Some(40),
        threshold_low: Some(70),
        ..RawOptions::default()
    };
    let err = resolve(raw, &fs()).unwrap_err();
    assert!(matches!(err, OptionsError::InconsistentCombination { .. }));
}

#[test]
fn comparing_a_version_to_its_own_fallback_is_inconsistent() {
    let raw = RawOptions {
        compare_to_baseline: Some(true),
        dashboard_api_key: Some("key".into()),
        project_name: Some("org/repo".into()),
        project_version: Some("master".into()),
        ..RawOptions::default()
    };
    let err = resolve(raw, &fs()).unwrap_err();
    assert!(matches!(err, OptionsError::InconsistentCombination { .. }));
}

#[test]
fn raw_options_from_json_resolve_like_in_code_construction() {
    let json: RawOptions = serde_json::from_str(
        r#"{"mutation-level": "complete", "git-diff-target": "develop", "diff": true}"#,
    )
    .unwrap();
    let in_code = RawOptions {
        mutation_level: Some("complete".into()),
        git_diff_target: Some("develop".into()),
        diff: Some(true),
        ..RawOptions::default()
    };
    assert_eq!(json, in_code);

    let a = resolve(json, &fs()).unwrap();
    let b = resolve(in_code, &fs()).unwrap();
    assert_eq!(format!("{a:?}"), format!("{b:?}"));
}

fn full_raw_options() -> RawOptions {
    RawOptions {
        dev_mode: Some(true),
        log_level: Some("debug".into()),
        mutation_level: Some("complete".into()),
        threshold_high: Some(95),
        threshold_low: Some(70),
        threshold_break: Some(50),
        additional_timeout_ms: Some(9000),
        edition: Some("2021".into()),
        test_runner: Some("nextest".into()),
        concurrency: Some(1),
        test_packages: Some(vec!["core".into()]),
        compare_to_baseline: Some(true),
        reporters: Some(vec!["html".into(), "dashboard".into()]),
        baseline_provider: Some("azure-file-storage".into()),
        azure_storage_url: Some("https://share.example.net".into()),
        azure_sas_token: Some("sig=abc".into()),
        dashboard_api_key: Some("key".into()),
        project_name: Some("org/repo".into()),
        module_name: Some("core".into()),
        project_version: Some("pr-42".into()),
        diff: Some(true),
        git_diff_target: Some("main".into()),
        diff_ignore_patterns: Some(vec!["docs/**".into()]),
        mutate: Some(vec!["src/**/*.rs".into(), "!src/generated/*.rs".into()]),
        ignored_functions: Some(vec!["log*".into()]),
        excluded_operators: Some(vec!["string-literal".into()]),
        coverage_analysis: Some("all".into()),
        abort_test_on_fail: Some(false),
        disable_parallel_testing: Some(true),
        ..RawOptions::default()
    }
}

#[test]
fn resolution_is_deterministic_for_identical_raw_inputs() {
    let a = resolve(full_raw_options(), &fs()).unwrap();
    let b = resolve(full_raw_options(), &fs()).unwrap();
    assert_eq!(format!("{a:?}"), format!("{b:?}"));
}

const PROVIDER_KEYWORDS: &[(&str, BaselineProvider)] = &[
    ("disk", BaselineProvider::Disk),
    ("dashboard", BaselineProvider::Dashboard),
    ("azure-file-storage", BaselineProvider::AzureFileStorage),
];

const MUTATION_LEVEL_KEYWORDS: &[(&str, MutationLevel)] = &[
    ("basic", MutationLevel::Basic),
    ("standard", MutationLevel::Standard),
    ("aggressive", MutationLevel::Aggressive),
    ("complete", MutationLevel::Complete),
];

fn flip_case(token: &str, mask: u64) -> String {
    token
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if mask & (1 << (i % 64)) != 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn mutation_level_keywords_match_in_any_case(idx in 0usize..4, mask in any::<u64>()) {
        let (keyword, expected) = MUTATION_LEVEL_KEYWORDS[idx];
        let raw = RawOptions {
            mutation_level: Some(flip_case(keyword, mask)),
            ..RawOptions::default()
        };
        let options = resolve(raw, &fs()).unwrap();
        prop_assert_eq!(options.mutation_level, expected);
    }

    #[test]
    fn provider_keywords_match_in_any_case(idx in 0usize..3, mask in any::<u64>()) {
        let (keyword, expected) = PROVIDER_KEYWORDS[idx];
        let raw = RawOptions {
            baseline_provider: Some(flip_case(keyword, mask)),
            azure_storage_url: Some("https://share.example.net".into()),
            azure_sas_token: Some("sig=abc".into()),
            ..RawOptions::default()
        };
        let options = resolve(raw, &fs()).unwrap();
        prop_assert_eq!(options.baseline_provider, expected);
    }

    #[test]
    fn tokens_outside_the_provider_set_always_fail(token in "[a-z]{1,12}") {
        prop_assume!(PROVIDER_KEYWORDS.iter().all(|(kw, _)| *kw != token));
        let raw = RawOptions {
            baseline_provider: Some(token.clone()),
            ..RawOptions::default()
        };
        let err = resolve(raw, &fs()).unwrap_err();
        prop_assert!(
            matches!(err, OptionsError::InvalidValue { field: "baseline-provider", .. }),
            "expected InvalidValue for baseline-provider"
        );
        prop_assert!(err.to_string().contains(&token));
    }
}
