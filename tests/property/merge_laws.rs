//! Property-based tests for the override merge, defaulting and validation order

use proptest::prelude::*;
use sinkconf::admin::StaticCatalog;
use sinkconf::error::SinkError;
use sinkconf::sink::{
    apply_creation_defaults, apply_update_defaults, merge_overrides, validate_sink_config,
    LocalFileSystem, MembershipPolicy, SinkConfig, SinkOverrides, StandardInference,
};

fn merge(base: SinkConfig, overrides: &SinkOverrides) -> Result<SinkConfig, SinkError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let catalog = StaticCatalog::from_names(["kafka", "jdbc", "elastic_search"]);
    runtime.block_on(merge_overrides(
        base,
        overrides,
        &catalog,
        MembershipPolicy::Exact,
    ))
}

fn word() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,11}"
}

fn opt_word() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(word())
}

fn base_config() -> impl Strategy<Value = SinkConfig> {
    (
        "[a-z]{0,6}",
        "[a-z]{0,6}",
        "[a-z]{0,6}",
        0u32..16,
        "(file:///[a-z]{1,6}\\.nar)?",
        any::<bool>(),
    )
        .prop_map(
            |(tenant, namespace, name, parallelism, archive, retain_ordering)| SinkConfig {
                tenant,
                namespace,
                name,
                parallelism,
                archive,
                retain_ordering,
                ..Default::default()
            },
        )
}

fn overrides() -> impl Strategy<Value = SinkOverrides> {
    (
        opt_word(),
        opt_word(),
        opt_word(),
        opt_word(),
        proptest::option::of(0u32..32),
        proptest::option::of(1u64..100_000),
        proptest::option::of(Just(true)),
    )
        .prop_map(
            |(tenant, namespace, name, class_name, parallelism, timeout_ms, auto_ack)| {
                SinkOverrides {
                    tenant,
                    namespace,
                    name,
                    class_name,
                    parallelism,
                    timeout_ms,
                    auto_ack,
                    ..Default::default()
                }
            },
        )
}

/// Present overrides replace base values; absent ones leave them alone.
#[test]
fn test_present_override_wins_absent_keeps_base() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(base_config(), overrides()), |(base, overrides)| {
            let merged = merge(base.clone(), &overrides).unwrap();

            prop_assert_eq!(
                &merged.tenant,
                overrides.tenant.as_ref().unwrap_or(&base.tenant)
            );
            prop_assert_eq!(
                &merged.namespace,
                overrides.namespace.as_ref().unwrap_or(&base.namespace)
            );
            prop_assert_eq!(&merged.name, overrides.name.as_ref().unwrap_or(&base.name));
            prop_assert_eq!(
                &merged.class_name,
                overrides.class_name.as_ref().unwrap_or(&base.class_name)
            );
            prop_assert_eq!(&merged.archive, &base.archive);
            prop_assert_eq!(merged.retain_ordering, base.retain_ordering);
            prop_assert_eq!(merged.timeout_ms, overrides.timeout_ms);
            prop_assert_eq!(merged.auto_ack, overrides.auto_ack.unwrap_or(false));

            Ok(())
        })
        .unwrap();
}

/// A positive parallelism override lands; otherwise parallelism is reset to 1.
#[test]
fn test_merged_parallelism_at_least_one() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(base_config(), overrides()), |(base, overrides)| {
            let merged = merge(base, &overrides).unwrap();

            prop_assert!(merged.parallelism >= 1);
            match overrides.parallelism {
                Some(p) if p > 0 => prop_assert_eq!(merged.parallelism, p),
                _ => prop_assert_eq!(merged.parallelism, 1),
            }

            Ok(())
        })
        .unwrap();
}

/// Merging the same overrides twice gives the same result as merging once.
#[test]
fn test_merge_is_idempotent() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(base_config(), overrides()), |(base, overrides)| {
            let once = merge(base, &overrides).unwrap();
            let twice = merge(once.clone(), &overrides).unwrap();
            prop_assert_eq!(once, twice);
            Ok(())
        })
        .unwrap();
}

/// An archive together with a sink type is always rejected, whatever else is set.
#[test]
fn test_archive_and_sink_type_are_exclusive() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(base_config(), overrides(), word(), word()),
            |(base, overrides, archive, sink_type)| {
                let overrides = SinkOverrides {
                    archive: Some(archive),
                    sink_type: Some(sink_type),
                    ..overrides
                };
                prop_assert!(matches!(
                    merge(base, &overrides),
                    Err(SinkError::ConflictingPackaging)
                ));
                Ok(())
            },
        )
        .unwrap();
}

/// Creation defaulting leaves tenant and namespace either both given or both defaulted.
#[test]
fn test_creation_defaults_all_or_nothing() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&base_config(), |base| {
            let mut config = base.clone();
            apply_creation_defaults(&mut config);

            if base.tenant.is_empty() || base.namespace.is_empty() {
                prop_assert_eq!(config.tenant.as_str(), "public");
                prop_assert_eq!(config.namespace.as_str(), "default");
            } else {
                prop_assert_eq!(&config.tenant, &base.tenant);
                prop_assert_eq!(&config.namespace, &base.namespace);
            }
            Ok(())
        })
        .unwrap();
}

/// Update defaulting fills each of tenant and namespace on its own.
#[test]
fn test_update_defaults_independent() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&base_config(), |base| {
            let mut config = base.clone();
            apply_update_defaults(&mut config);

            if base.tenant.is_empty() {
                prop_assert_eq!(config.tenant.as_str(), "public");
            } else {
                prop_assert_eq!(&config.tenant, &base.tenant);
            }
            if base.namespace.is_empty() {
                prop_assert_eq!(config.namespace.as_str(), "default");
            } else {
                prop_assert_eq!(&config.namespace, &base.namespace);
            }
            Ok(())
        })
        .unwrap();
}

/// Validation reports a missing archive before a missing name.
#[test]
fn test_validation_checks_archive_before_name() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&base_config(), |base| {
            let mut config = base.clone();
            let result = validate_sink_config(&mut config, &StandardInference, &LocalFileSystem);

            if base.archive.is_empty() {
                prop_assert!(matches!(result, Err(SinkError::EmptyArchive)));
            } else if base.name.is_empty() {
                prop_assert!(matches!(result, Err(SinkError::EmptyName(_))));
            } else {
                prop_assert!(result.is_ok());
                prop_assert!(config.parallelism >= 1);
            }
            Ok(())
        })
        .unwrap();
}
