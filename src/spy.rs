mod carousel;
mod menu;

pub use carousel::{Carousel, AUTO_ADVANCE_MS};
pub use menu::MenuState;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpyError {
    #[error("Intersection observation is not supported")]
    Unsupported,
    #[error("No section with id {0}")]
    MissingTarget(String),
}

/// The environment the tracker observes: the browser on the client, a
/// recording fake in tests.
pub trait Viewport {
    fn observe(&mut self, id: &str) -> Result<(), SpyError>;
    fn unobserve(&mut self, id: &str);
    /// Smooth-scroll so the top of the section aligns with the viewport.
    fn scroll_into_view(&mut self, id: &str) -> Result<(), SpyError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpyConfig {
    pub thresholds: Vec<f64>,
    pub root_margin: String,
    pub top_threshold: f64,
    pub scrolled_threshold: f64,
}

impl Default for SpyConfig {
    fn default() -> Self {
        Self {
            thresholds: vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0],
            root_margin: "-20% 0px -20% 0px".to_string(),
            top_threshold: 100.0,
            scrolled_threshold: 50.0,
        }
    }
}

/// Last observed intersection ratio per section, in registration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatioTable {
    entries: Vec<(String, f64)>,
}

impl RatioTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == id)
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.entries
            .iter()
            .find_map(|(k, r)| if k == id { Some(*r) } else { None })
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Adds an id at the end with ratio 0. Returns false if already present.
    fn insert(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.entries.push((id.to_string(), 0.0));
        true
    }

    fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| k != id);
        before != self.entries.len()
    }

    /// Overwrites the ratio of a known id, clamped to [0, 1].
    fn set(&mut self, id: &str, ratio: f64) -> bool {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        match self.entries.iter_mut().find(|(k, _)| k == id) {
            Some((_, r)) => {
                *r = ratio;
                true
            }
            None => false,
        }
    }
}

impl<S: AsRef<str>> FromIterator<(S, f64)> for RatioTable {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (id, ratio) in iter {
            table.insert(id.as_ref());
            table.set(id.as_ref(), ratio);
        }
        table
    }
}

/// Picks the id with the strictly greatest ratio. Ties go to the earliest
/// registered id; nothing is active when the best ratio is zero.
pub fn compute_active(table: &RatioTable) -> Option<&str> {
    let mut best: Option<(&str, f64)> = None;
    for (id, ratio) in &table.entries {
        match best {
            Some((_, b)) if *ratio > b => best = Some((id.as_str(), *ratio)),
            None => best = Some((id.as_str(), *ratio)),
            _ => {}
        }
    }
    best.filter(|(_, r)| *r > 0.0).map(|(id, _)| id)
}

pub struct ScrollSpy {
    config: SpyConfig,
    table: RatioTable,
    scroll_top: f64,
    running: bool,
    supported: bool,
}

impl ScrollSpy {
    pub fn new(config: SpyConfig) -> Self {
        Self {
            config,
            table: RatioTable::new(),
            scroll_top: 0.0,
            running: false,
            supported: true,
        }
    }

    pub fn config(&self) -> &SpyConfig {
        &self.config
    }

    pub fn table(&self) -> &RatioTable {
        &self.table
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn register(&mut self, host: &mut impl Viewport, id: &str) {
        if !self.table.insert(id) {
            return;
        }
        if self.running && self.supported {
            self.observe(host, id);
        }
    }

    pub fn unregister(&mut self, host: &mut impl Viewport, id: &str) {
        if self.table.remove(id) && self.running && self.supported {
            host.unobserve(id);
        }
    }

    pub fn start(&mut self, host: &mut impl Viewport) {
        if self.running {
            return;
        }
        self.running = true;
        self.supported = true;
        let ids = self.table.ids().map(str::to_string).collect::<Vec<_>>();
        for id in ids {
            if !self.observe(host, &id) {
                break;
            }
        }
    }

    pub fn stop(&mut self, host: &mut impl Viewport) {
        if !self.running {
            return;
        }
        if self.supported {
            for id in self.table.ids() {
                host.unobserve(id);
            }
        }
        self.running = false;
    }

    fn observe(&mut self, host: &mut impl Viewport, id: &str) -> bool {
        match host.observe(id) {
            Ok(()) => true,
            Err(SpyError::Unsupported) => {
                log::info!("intersection observation unavailable; section highlighting disabled");
                self.supported = false;
                false
            }
            Err(e) => {
                log::debug!("not observing section: {e}");
                true
            }
        }
    }

    /// Applies one batch of samples, then recomputes the active id.
    pub fn observe_batch<I, S>(&mut self, samples: I) -> Option<&str>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        if self.running {
            for (id, ratio) in samples {
                self.table.set(id.as_ref(), ratio);
            }
        }
        self.active()
    }

    pub fn on_scroll(&mut self, scroll_top: f64) {
        if self.running {
            self.scroll_top = scroll_top;
        }
    }

    pub fn active(&self) -> Option<&str> {
        if self.scroll_top < self.config.top_threshold {
            return None;
        }
        compute_active(&self.table)
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll_top > self.config.scrolled_threshold
    }

    pub fn activate(&self, host: &mut impl Viewport, id: &str) -> bool {
        match host.scroll_into_view(id) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("ignoring navigation: {e}");
                false
            }
        }
    }
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(SpyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTIONS: [&str; 4] = ["projects", "experience", "skills", "certifications"];

    #[derive(Default)]
    struct FakeViewport {
        unsupported: bool,
        regions: Vec<String>,
        observed: Vec<String>,
        scrolled_to: Vec<String>,
    }

    impl FakeViewport {
        fn with_regions(ids: &[&str]) -> Self {
            Self {
                regions: ids.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            }
        }
    }

    impl Viewport for FakeViewport {
        fn observe(&mut self, id: &str) -> Result<(), SpyError> {
            if self.unsupported {
                return Err(SpyError::Unsupported);
            }
            self.observed.push(id.to_string());
            Ok(())
        }

        fn unobserve(&mut self, id: &str) {
            self.observed.retain(|s| s != id);
        }

        fn scroll_into_view(&mut self, id: &str) -> Result<(), SpyError> {
            if !self.regions.iter().any(|s| s == id) {
                return Err(SpyError::MissingTarget(id.to_string()));
            }
            self.scrolled_to.push(id.to_string());
            Ok(())
        }
    }

    fn running_spy(host: &mut FakeViewport) -> ScrollSpy {
        let mut spy = ScrollSpy::default();
        for id in SECTIONS {
            spy.register(host, id);
        }
        spy.start(host);
        spy.on_scroll(800.0);
        spy
    }

    #[test]
    fn test_compute_active_picks_max() {
        let table = RatioTable::from_iter([
            ("projects", 0.4),
            ("experience", 0.9),
            ("skills", 0.0),
            ("certifications", 0.2),
        ]);
        assert_eq!(compute_active(&table), Some("experience"));
        // pure: same answer twice
        assert_eq!(compute_active(&table), compute_active(&table));
    }

    #[test]
    fn test_compute_active_tie_goes_to_first_registered() {
        let table = RatioTable::from_iter([("a", 0.1), ("b", 0.6), ("c", 0.6), ("d", 0.6)]);
        assert_eq!(compute_active(&table), Some("b"));

        let permuted = RatioTable::from_iter([("a", 0.1), ("b", 0.6), ("d", 0.6), ("c", 0.6)]);
        assert_eq!(compute_active(&permuted), Some("b"));
    }

    #[test]
    fn test_compute_active_none_when_nothing_visible() {
        assert_eq!(compute_active(&RatioTable::new()), None);
        let zeros = RatioTable::from_iter(SECTIONS.iter().map(|s| (*s, 0.0)));
        assert_eq!(compute_active(&zeros), None);
    }

    #[test]
    fn test_ratios_are_clamped() {
        let table = RatioTable::from_iter([("a", -0.5), ("b", 3.0), ("c", f64::NAN)]);
        assert_eq!(table.get("a"), Some(0.0));
        assert_eq!(table.get("b"), Some(1.0));
        assert_eq!(table.get("c"), Some(0.0));
    }

    #[test]
    fn test_batch_scenario() {
        let mut host = FakeViewport::with_regions(&SECTIONS);
        let mut spy = running_spy(&mut host);
        assert_eq!(host.observed.len(), 4);

        let active = spy.observe_batch([
            ("projects", 0.4),
            ("experience", 0.9),
            ("skills", 0.0),
            ("certifications", 0.2),
        ]);
        assert_eq!(active, Some("experience"));

        // earlier ratios persist until overwritten
        let active = spy.observe_batch([("experience", 0.1)]);
        assert_eq!(active, Some("projects"));
        assert_eq!(spy.table().get("certifications"), Some(0.2));
    }

    #[test]
    fn test_all_zero_means_no_highlight() {
        let mut host = FakeViewport::with_regions(&SECTIONS);
        let mut spy = running_spy(&mut host);
        let active = spy.observe_batch(SECTIONS.iter().map(|s| (*s, 0.0)));
        assert_eq!(active, None);
    }

    #[test]
    fn test_scroll_top_forces_none() {
        let mut host = FakeViewport::with_regions(&SECTIONS);
        let mut spy = running_spy(&mut host);
        spy.observe_batch([("projects", 0.5)]);
        assert_eq!(spy.active(), Some("projects"));

        spy.on_scroll(10.0);
        assert_eq!(spy.active(), None);
        assert!(!spy.is_scrolled());

        spy.on_scroll(100.0);
        assert_eq!(spy.active(), Some("projects"));
        assert!(spy.is_scrolled());
    }

    #[test]
    fn test_is_scrolled_threshold() {
        let mut host = FakeViewport::default();
        let mut spy = ScrollSpy::default();
        spy.start(&mut host);
        spy.on_scroll(50.0);
        assert!(!spy.is_scrolled());
        spy.on_scroll(51.0);
        assert!(spy.is_scrolled());
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut host = FakeViewport::with_regions(&SECTIONS);
        let mut spy = running_spy(&mut host);
        let active = spy.observe_batch([("hero", 1.0)]);
        assert_eq!(active, None);
        assert!(!spy.table().contains("hero"));
    }

    #[test]
    fn test_register_and_unregister() {
        let mut host = FakeViewport::default();
        let mut spy = ScrollSpy::default();
        spy.register(&mut host, "skills");
        spy.register(&mut host, "skills");
        assert_eq!(spy.table().len(), 1);
        assert!(host.observed.is_empty());

        spy.start(&mut host);
        spy.register(&mut host, "projects");
        assert_eq!(host.observed, vec!["skills", "projects"]);

        spy.on_scroll(500.0);
        spy.observe_batch([("skills", 0.8)]);
        assert_eq!(spy.active(), Some("skills"));

        spy.unregister(&mut host, "skills");
        assert!(!spy.table().contains("skills"));
        assert_eq!(host.observed, vec!["projects"]);
        assert_eq!(spy.active(), None);
    }

    #[test]
    fn test_stop_releases_and_ignores_late_samples() {
        let mut host = FakeViewport::with_regions(&SECTIONS);
        let mut spy = running_spy(&mut host);
        spy.stop(&mut host);
        assert!(host.observed.is_empty());
        assert!(!spy.is_running());

        let active = spy.observe_batch([("skills", 1.0)]);
        assert_eq!(active, None);
        assert_eq!(spy.table().get("skills"), Some(0.0));
    }

    #[test]
    fn test_stop_ignores_late_scroll() {
        let mut host = FakeViewport::with_regions(&SECTIONS);
        let mut spy = running_spy(&mut host);
        spy.observe_batch([("projects", 0.5)]);
        spy.stop(&mut host);

        spy.on_scroll(10.0);
        assert_eq!(spy.active(), Some("projects"));
        assert!(spy.is_scrolled());
    }

    #[test]
    fn test_unsupported_host_degrades() {
        let mut host = FakeViewport {
            unsupported: true,
            ..FakeViewport::with_regions(&SECTIONS)
        };
        let mut spy = ScrollSpy::default();
        for id in SECTIONS {
            spy.register(&mut host, id);
        }
        spy.start(&mut host);
        spy.on_scroll(10.0);
        assert!(!spy.is_scrolled());
        spy.on_scroll(400.0);
        assert!(spy.is_scrolled());
        assert!(host.observed.is_empty());
        assert_eq!(spy.active(), None);
        spy.stop(&mut host);
    }

    #[test]
    fn test_activate() {
        let mut host = FakeViewport::with_regions(&SECTIONS);
        let spy = running_spy(&mut host);

        assert!(spy.activate(&mut host, "skills"));
        assert_eq!(host.scrolled_to, vec!["skills"]);

        assert!(!spy.activate(&mut host, "does-not-exist"));
        assert_eq!(host.scrolled_to.len(), 1);
    }

    #[test]
    fn test_config_from_json() {
        let config: SpyConfig = serde_json::from_str(r#"{"top_threshold": 150.0}"#).unwrap();
        assert_eq!(config.top_threshold, 150.0);
        assert_eq!(config.scrolled_threshold, 50.0);
        assert_eq!(config.thresholds.len(), 6);
        assert_eq!(config.root_margin, "-20% 0px -20% 0px");
    }

    #[test]
    fn test_tunable_top_threshold() {
        let mut host = FakeViewport::with_regions(&SECTIONS);
        let mut spy = ScrollSpy::new(SpyConfig {
            top_threshold: 0.0,
            ..SpyConfig::default()
        });
        spy.register(&mut host, "projects");
        spy.start(&mut host);
        assert_eq!(spy.observe_batch([("projects", 0.3)]), Some("projects"));
    }
}
