//! Composition root for the page behaviors.
//!
//! ARCHITECTURE
//! ============
//! [`PageController`] installs every feature once, in a fixed order, and
//! owns the resulting bindings until the page unloads. Features never
//! reference each other; a feature whose hooks are missing is skipped and a
//! feature that fails to install is logged and skipped, leaving the rest
//! untouched.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    Theme,
    Nav,
    Lightbox,
    Reveal,
    ScrollTop,
    Transition,
    Anchor,
}

impl Feature {
    /// Every feature, in install order.
    pub const ALL: [Self; 7] = [
        Self::Theme,
        Self::Nav,
        Self::Lightbox,
        Self::Reveal,
        Self::ScrollTop,
        Self::Transition,
        Self::Anchor,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::Nav => "nav",
            Self::Lightbox => "lightbox",
            Self::Reveal => "reveal",
            Self::ScrollTop => "scroll-top",
            Self::Transition => "transition",
            Self::Anchor => "anchor",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeatureStatus {
    Active,
    /// Required hooks are not on this page.
    Absent,
    /// The browser rejected an installation step.
    Failed(String),
}

/// Outcome of installing each feature, in install order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstallReport {
    entries: Vec<(Feature, FeatureStatus)>,
}

impl InstallReport {
    /// Run `install` for every feature in [`Feature::ALL`] order.
    pub fn run(mut install: impl FnMut(Feature) -> FeatureStatus) -> Self {
        let mut report = Self::default();
        for feature in Feature::ALL {
            report.record(feature, install(feature));
        }
        report
    }

    pub fn record(&mut self, feature: Feature, status: FeatureStatus) {
        match &status {
            FeatureStatus::Active => log::debug!("{feature}: active"),
            FeatureStatus::Absent => log::debug!("{feature}: hooks absent; disabled"),
            FeatureStatus::Failed(e) => log::warn!("{feature}: disabled: {e}"),
        }
        self.entries.push((feature, status));
    }

    #[must_use]
    pub fn status(&self, feature: Feature) -> Option<&FeatureStatus> {
        self.entries.iter().find(|(f, _)| *f == feature).map(|(_, s)| s)
    }

    #[must_use]
    pub fn active(&self) -> Vec<Feature> {
        self.entries
            .iter()
            .filter(|(_, s)| *s == FeatureStatus::Active)
            .map(|(f, _)| *f)
            .collect()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, s)| matches!(s, FeatureStatus::Failed(_)))
            .count()
    }

    /// One-line summary for the startup log.
    #[must_use]
    pub fn summary(&self) -> String {
        let active = self.active().iter().map(|f| f.name()).collect::<Vec<_>>();
        format!(
            "{} of {} features active [{}], {} failed",
            active.len(),
            self.entries.len(),
            active.join(", "),
            self.failed()
        )
    }
}

#[cfg(feature = "hydrate")]
pub use binding::PageController;

#[cfg(feature = "hydrate")]
mod binding {
    use web_sys::{Document, Window};

    use super::{Feature, FeatureStatus, InstallReport};
    use crate::anchor::AnchorBinding;
    use crate::config::BehaviorConfig;
    use crate::error::BehaviorError;
    use crate::lightbox::LightboxBinding;
    use crate::nav::NavBinding;
    use crate::reveal::RevealBinding;
    use crate::scroll_top::ScrollTopBinding;
    use crate::theme::ThemeBinding;
    use crate::transition::TransitionBinding;

    /// Every installed feature binding, owned for the page's lifetime.
    // Bindings are held for their listeners, never read.
    #[allow(dead_code)]
    pub struct PageController {
        theme: Option<ThemeBinding>,
        nav: Option<NavBinding>,
        lightbox: Option<LightboxBinding>,
        reveal: Option<RevealBinding>,
        scroll_top: Option<ScrollTopBinding>,
        transition: Option<TransitionBinding>,
        anchor: Option<AnchorBinding>,
        report: InstallReport,
    }

    impl PageController {
        /// Install every feature against `document`, in [`Feature::ALL`] order.
        pub fn install(window: &Window, document: &Document, config: &BehaviorConfig) -> Self {
            let mut controller = Self {
                theme: None,
                nav: None,
                lightbox: None,
                reveal: None,
                scroll_top: None,
                transition: None,
                anchor: None,
                report: InstallReport::default(),
            };
            let report = InstallReport::run(|feature| controller.install_one(feature, window, document, config));
            controller.report = report;
            controller
        }

        fn install_one(
            &mut self,
            feature: Feature,
            window: &Window,
            document: &Document,
            config: &BehaviorConfig,
        ) -> FeatureStatus {
            match feature {
                Feature::Theme => settle(&mut self.theme, ThemeBinding::install(window, document, config).map(Some)),
                Feature::Nav => settle(&mut self.nav, NavBinding::install(document, config)),
                Feature::Lightbox => settle(&mut self.lightbox, LightboxBinding::install(document, config).map(Some)),
                Feature::Reveal => settle(&mut self.reveal, RevealBinding::install(document, config)),
                Feature::ScrollTop => settle(&mut self.scroll_top, ScrollTopBinding::install(window, document, config)),
                Feature::Transition => {
                    settle(&mut self.transition, TransitionBinding::install(window, document, config).map(Some))
                }
                Feature::Anchor => settle(&mut self.anchor, AnchorBinding::install(window, document)),
            }
        }

        #[must_use]
        pub fn report(&self) -> &InstallReport {
            &self.report
        }
    }

    fn settle<T>(slot: &mut Option<T>, result: Result<Option<T>, BehaviorError>) -> FeatureStatus {
        match result {
            Ok(Some(binding)) => {
                *slot = Some(binding);
                FeatureStatus::Active
            }
            Ok(None) => FeatureStatus::Absent,
            Err(e) => FeatureStatus::Failed(e.to_string()),
        }
    }
}
