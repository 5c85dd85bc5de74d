use super::{check_direction, check_public_api_boundary, check_testing_api};
use crate::PolicyEngine;
use crate::classify::classify_import_path;
use crate::layers::{DependencyTable, Layer};
use crate::model::ViolationKind;
use crate::policy::{PatternSet, PolicyConfig};
use crate::test_support::{edge, fsd_policy};

fn kinds(policy: &PolicyConfig, source: &str, import: &str) -> Vec<ViolationKind> {
    PolicyEngine::new(policy)
        .evaluate_edge(&edge(source, import))
        .into_iter()
        .map(|v| v.kind)
        .collect()
}

#[test]
fn widgets_importing_pages_is_a_direction_violation() {
    let policy = PolicyConfig::default();
    assert_eq!(
        kinds(&policy, "src/widgets/sidebar/ui/Sidebar.tsx", "pages/header"),
        vec![ViolationKind::LayerDirection]
    );
}

#[test]
fn features_importing_entity_public_api_is_clean() {
    let policy = PolicyConfig::default();
    assert!(kinds(&policy, "src/features/comments/ui/List.tsx", "entities/article").is_empty());
}

#[test]
fn deep_entity_import_bypasses_public_api() {
    let policy = PolicyConfig::default();
    assert_eq!(
        kinds(
            &policy,
            "src/features/comments/ui/List.tsx",
            "entities/article/model/types"
        ),
        vec![ViolationKind::PublicApiBoundary]
    );
}

#[test]
fn testing_surface_is_open_to_test_files_only() {
    let policy = fsd_policy();
    let import = "@/entities/article/testing";

    assert!(kinds(&policy, "src/features/comments/ui/List.test.tsx", import).is_empty());
    assert!(kinds(&policy, "src/features/comments/ui/List.stories.tsx", import).is_empty());
    // Test files pass the testing gate but are still bound by direction.
    assert_eq!(
        kinds(&policy, "src/shared/config/storybook/StoreDecorator.tsx", import),
        vec![ViolationKind::LayerDirection]
    );
    assert_eq!(
        kinds(&policy, "src/features/comments/ui/List.tsx", import),
        vec![ViolationKind::TestingApiBoundary]
    );
}

#[test]
fn nested_testing_modules_share_the_testing_gate() {
    let policy = fsd_policy();
    let import = "@/entities/article/testing/mocks";
    assert!(kinds(&policy, "src/features/comments/ui/List.test.tsx", import).is_empty());
    assert_eq!(
        kinds(&policy, "src/features/comments/ui/List.tsx", import),
        vec![ViolationKind::TestingApiBoundary]
    );
}

#[test]
fn testing_must_be_the_third_segment() {
    let policy = fsd_policy();
    assert_eq!(
        kinds(
            &policy,
            "src/features/comments/ui/List.test.tsx",
            "@/entities/article/model/testing"
        ),
        vec![ViolationKind::PublicApiBoundary]
    );
}

#[test]
fn ignored_direction_still_gets_public_api_checked() {
    let policy = PolicyConfig::default()
        .with_ignore_import_patterns(["app/providers/**"])
        .expect("valid");

    // Ignored: shared -> app would be a direction violation, app is not public-API enforced.
    assert!(
        kinds(
            &policy,
            "src/shared/config/storybook/Decorator.tsx",
            "app/providers/StoreProvider"
        )
        .is_empty()
    );

    let policy = PolicyConfig::default()
        .with_ignore_import_patterns(["pages/**"])
        .expect("valid");
    assert_eq!(
        kinds(&policy, "src/widgets/header/ui/Header.tsx", "pages/home/ui/HomePage"),
        vec![ViolationKind::PublicApiBoundary]
    );
}

#[test]
fn ignore_patterns_do_not_touch_the_boundary_check() {
    let policy = PolicyConfig::default()
        .with_ignore_import_patterns(["entities/**"])
        .expect("valid");
    assert_eq!(
        kinds(&policy, "src/features/a/ui/A.tsx", "entities/user/model/selectors"),
        vec![ViolationKind::PublicApiBoundary]
    );
}

#[test]
fn direction_is_not_applicable_without_both_layers() {
    let table = DependencyTable::standard();
    let cfg = PolicyConfig::default();
    let ignore = PatternSet::default();

    let import = classify_import_path("pages/home", &cfg);
    assert_eq!(check_direction(table, None, &import, &ignore, "pages/home"), None);

    let package = classify_import_path("react-router", &cfg);
    assert_eq!(
        check_direction(table, Some(Layer::Shared), &package, &ignore, "react-router"),
        None
    );
}

#[test]
fn direction_ignore_is_a_logical_or() {
    let table = DependencyTable::standard();
    let cfg = PolicyConfig::default();
    let ignore = PatternSet::new(["nothing/**", "app/**", "also-nothing"]).expect("valid");
    let import = classify_import_path("app/store", &cfg);

    assert_eq!(
        check_direction(table, Some(Layer::Entities), &import, &ignore, "app/store"),
        None
    );
    assert_eq!(
        check_direction(
            table,
            Some(Layer::Entities),
            &import,
            &PatternSet::default(),
            "app/store"
        ),
        Some(ViolationKind::LayerDirection)
    );
}

#[test]
fn ignore_patterns_match_the_raw_specifier_with_alias() {
    let policy = fsd_policy();
    let decorator = "src/shared/config/storybook/StoreDecorator.tsx";
    assert!(kinds(&policy, decorator, "@/app/providers/StoreProvider").is_empty());
    assert_eq!(
        kinds(&policy, decorator, "@/app/providers/ThemeProvider"),
        vec![ViolationKind::LayerDirection]
    );
}

#[test]
fn entities_may_compose_other_entities() {
    let policy = PolicyConfig::default();
    assert!(kinds(&policy, "src/entities/comment/model/types.ts", "entities/user").is_empty());
    assert_eq!(
        kinds(&policy, "src/features/a/model/x.ts", "features/b"),
        vec![ViolationKind::LayerDirection]
    );
}

#[test]
fn app_and_shared_are_exempt_from_public_api_by_default() {
    let policy = PolicyConfig::default();
    assert!(kinds(&policy, "src/app/App.tsx", "shared/ui/Button/Button").is_empty());
    assert!(kinds(&policy, "src/shared/lib/x.ts", "shared/lib/hooks/useDebounce").is_empty());
}

#[test]
fn public_api_layers_are_configurable() {
    let policy = PolicyConfig::default()
        .with_public_api_layers(["shared"])
        .expect("valid");
    assert_eq!(
        kinds(&policy, "src/features/a/ui/A.tsx", "shared/ui/Button/Button"),
        vec![ViolationKind::PublicApiBoundary]
    );
    assert!(kinds(&policy, "src/features/a/ui/A.tsx", "entities/user/model/types").is_empty());
}

#[test]
fn disabling_the_testing_gate_restores_the_strict_boundary() {
    let policy = fsd_policy().with_testing_api(false);
    assert_eq!(
        kinds(&policy, "src/features/a/ui/A.test.tsx", "@/entities/user/testing"),
        vec![ViolationKind::PublicApiBoundary]
    );
}

#[test]
fn relative_and_package_imports_are_never_flagged() {
    let policy = fsd_policy();
    for import in ["./model/types", "../ui/Button", ".", "react", "@reduxjs/toolkit", "i18next"] {
        assert!(kinds(&policy, "src/shared/ui/Button/Button.tsx", import).is_empty(), "{import}");
    }
}

#[test]
fn files_outside_the_layer_tree_skip_direction_but_not_boundary() {
    let policy = fsd_policy();
    assert_eq!(
        kinds(&policy, "config/jest/setupTests.ts", "@/entities/user/model/slice"),
        vec![ViolationKind::PublicApiBoundary]
    );
    assert!(kinds(&policy, "config/jest/setupTests.ts", "@/app/store").is_empty());
}

#[test]
fn boundary_check_functions_directly() {
    let cfg = fsd_policy();
    let shallow = classify_import_path("@/widgets/header", &cfg);
    assert_eq!(check_public_api_boundary("src/pages/a.ts", &shallow, &cfg), None);

    let deep = classify_import_path("@/widgets/header/ui", &cfg);
    assert_eq!(
        check_public_api_boundary("src/pages/a.ts", &deep, &cfg),
        Some(ViolationKind::PublicApiBoundary)
    );

    let tests = PatternSet::new(["**/*.spec.ts"]).expect("valid");
    assert_eq!(check_testing_api("src/pages/a.spec.ts", &tests), None);
    assert_eq!(
        check_testing_api("src/pages/a.ts", &tests),
        Some(ViolationKind::TestingApiBoundary)
    );
    assert_eq!(
        check_testing_api("src/pages/a.spec.ts", &PatternSet::default()),
        Some(ViolationKind::TestingApiBoundary)
    );
}

#[test]
fn root_absolute_and_trailing_slash_imports() {
    let policy = PolicyConfig::default();
    assert!(kinds(&policy, "src/shared/lib/a.ts", "/app/store").is_empty());
    assert_eq!(
        kinds(&policy, "src/features/a/b.ts", "entities/article/"),
        vec![ViolationKind::PublicApiBoundary]
    );
}
