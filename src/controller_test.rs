use super::*;

#[test]
fn install_order_covers_every_feature_once() {
    let names = Feature::ALL.iter().map(|f| f.name()).collect::<Vec<_>>();
    assert_eq!(names, ["theme", "nav", "lightbox", "reveal", "scroll-top", "transition", "anchor"]);
}

#[test]
fn failure_in_one_feature_leaves_others_active() {
    let mut report = InstallReport::default();
    report.record(Feature::Theme, FeatureStatus::Active);
    report.record(Feature::Lightbox, FeatureStatus::Failed("dom operation `appendChild` failed".into()));
    report.record(Feature::ScrollTop, FeatureStatus::Active);

    assert_eq!(report.active(), vec![Feature::Theme, Feature::ScrollTop]);
    assert_eq!(report.failed(), 1);
    assert!(matches!(report.status(Feature::Lightbox), Some(FeatureStatus::Failed(_))));
}

#[test]
fn absent_hooks_are_not_failures() {
    let mut report = InstallReport::default();
    report.record(Feature::Nav, FeatureStatus::Absent);
    report.record(Feature::Reveal, FeatureStatus::Absent);

    assert_eq!(report.failed(), 0);
    assert!(report.active().is_empty());
    assert_eq!(report.status(Feature::Nav), Some(&FeatureStatus::Absent));
    assert_eq!(report.status(Feature::Anchor), None);
}

#[test]
fn summary_lists_active_features() {
    let mut report = InstallReport::default();
    report.record(Feature::Theme, FeatureStatus::Active);
    report.record(Feature::Nav, FeatureStatus::Absent);
    report.record(Feature::Anchor, FeatureStatus::Active);

    assert_eq!(report.summary(), "2 of 3 features active [theme, anchor], 0 failed");
}

#[test]
fn run_installs_in_declared_order() {
    let mut visited = Vec::new();
    let report = InstallReport::run(|feature| {
        visited.push(feature);
        match feature {
            Feature::Lightbox => FeatureStatus::Failed("dom operation `appendChild` failed".into()),
            Feature::Reveal => FeatureStatus::Absent,
            _ => FeatureStatus::Active,
        }
    });

    assert_eq!(visited, Feature::ALL);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.status(Feature::Reveal), Some(&FeatureStatus::Absent));
    assert_eq!(report.summary(), "5 of 7 features active [theme, nav, scroll-top, transition, anchor], 1 failed");
}
