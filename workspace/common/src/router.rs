//! Fragment-driven page switching.
//!
//! Every page exists for the whole session; navigation only moves the
//! `active` flag and marks a page `initialized` the first time it is shown.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    Predict,
    SubmitData,
    About,
    Contact,
}

impl PageId {
    pub const ALL: [PageId; 5] = [
        PageId::Home,
        PageId::Predict,
        PageId::SubmitData,
        PageId::About,
        PageId::Contact,
    ];

    /// Fragment name without the leading `#`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Predict => "predict",
            PageId::SubmitData => "submit-data",
            PageId::About => "about",
            PageId::Contact => "contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::Predict => "Predict Price",
            PageId::SubmitData => "Submit Data",
            PageId::About => "About",
            PageId::Contact => "Contact",
        }
    }

    /// Resolves a URL fragment, accepting `#predict`, `#/predict` and `predict`.
    /// Empty and unknown fragments resolve to [`PageId::Home`].
    pub fn resolve(fragment: &str) -> PageId {
        let name = fragment.trim_start_matches('#').trim_start_matches('/');
        if name.is_empty() {
            return PageId::Home;
        }
        name.parse().unwrap_or_else(|_| {
            debug!(fragment, "unknown page, falling back to home");
            PageId::Home
        })
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| format!("unknown page: {s}"))
    }
}

/// A page section and its visibility/initialization flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub id: PageId,
    pub active: bool,
    pub initialized: bool,
}

/// What triggered a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationSource {
    /// First render after load.
    Initial,
    /// A nav link or button was clicked.
    Link,
    /// The fragment changed underneath us (typed URL, back/forward).
    Fragment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

/// Side effects the view layer has to carry out for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub page: PageId,
    pub previous: Option<PageId>,
    /// Only link clicks add a history entry.
    pub push_history: bool,
    pub scroll: ScrollBehavior,
    /// True exactly once per page; the caller runs the page initializer.
    pub first_visit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRouter {
    pages: Vec<Page>,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRouter {
    /// All pages created, none shown yet.
    pub fn new() -> Self {
        Self {
            pages: PageId::ALL
                .into_iter()
                .map(|id| Page {
                    id,
                    active: false,
                    initialized: false,
                })
                .collect(),
        }
    }

    /// Navigates to the page named by `fragment`, falling back to home.
    pub fn navigate(&mut self, fragment: &str, source: NavigationSource) -> Navigation {
        self.navigate_to(PageId::resolve(fragment), source)
    }

    pub fn navigate_to(&mut self, target: PageId, source: NavigationSource) -> Navigation {
        let previous = self.active();
        let mut first_visit = false;

        for page in &mut self.pages {
            page.active = page.id == target;
            if page.active && !page.initialized {
                page.initialized = true;
                first_visit = true;
            }
        }

        debug!(from = ?previous, to = %target, ?source, first_visit, "navigate");

        Navigation {
            page: target,
            previous,
            push_history: source == NavigationSource::Link,
            scroll: match source {
                NavigationSource::Initial => ScrollBehavior::Instant,
                NavigationSource::Link | NavigationSource::Fragment => ScrollBehavior::Smooth,
            },
            first_visit,
        }
    }

    pub fn active(&self) -> Option<PageId> {
        self.pages.iter().find(|page| page.active).map(|page| page.id)
    }

    pub fn is_active(&self, id: PageId) -> bool {
        self.page(id).active
    }

    pub fn is_initialized(&self, id: PageId) -> bool {
        self.page(id).initialized
    }

    pub fn page(&self, id: PageId) -> &Page {
        // `new` creates one entry per id
        &self.pages[PageId::ALL.iter().position(|p| *p == id).unwrap_or(0)]
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(router: &ViewRouter) -> usize {
        router.pages().iter().filter(|p| p.active).count()
    }

    #[test]
    fn fragments_resolve_in_both_forms() {
        assert_eq!(PageId::resolve("#predict"), PageId::Predict);
        assert_eq!(PageId::resolve("#/submit-data"), PageId::SubmitData);
        assert_eq!(PageId::resolve("contact"), PageId::Contact);
        assert_eq!(PageId::resolve(""), PageId::Home);
        assert_eq!(PageId::resolve("#"), PageId::Home);
        assert_eq!(PageId::resolve("#/"), PageId::Home);
    }

    #[test]
    fn unknown_page_falls_back_to_home() {
        let mut router = ViewRouter::new();
        router.navigate("predict", NavigationSource::Initial);
        let nav = router.navigate("#pricing", NavigationSource::Fragment);
        assert_eq!(nav.page, PageId::Home);
        assert_eq!(router.active(), Some(PageId::Home));
        assert_eq!(active_count(&router), 1);
    }

    #[test]
    fn exactly_one_page_active_after_each_navigation() {
        let mut router = ViewRouter::new();
        assert_eq!(active_count(&router), 0);
        for fragment in ["", "#about", "#/predict", "#submit-data", "#nope", "#contact"] {
            let nav = router.navigate(fragment, NavigationSource::Fragment);
            assert_eq!(active_count(&router), 1);
            assert!(router.is_active(nav.page));
        }
    }

    #[test]
    fn initializer_runs_once_per_page() {
        let mut router = ViewRouter::new();
        assert!(router.navigate("#predict", NavigationSource::Initial).first_visit);
        assert!(router.navigate("#home", NavigationSource::Link).first_visit);
        assert!(!router.navigate("#predict", NavigationSource::Link).first_visit);
        assert!(!router.navigate("#/predict", NavigationSource::Fragment).first_visit);
        assert!(router.is_initialized(PageId::Predict));
        assert!(!router.is_initialized(PageId::SubmitData));
    }

    #[test]
    fn only_link_clicks_push_history() {
        let mut router = ViewRouter::new();
        let initial = router.navigate("", NavigationSource::Initial);
        assert!(!initial.push_history);
        assert_eq!(initial.scroll, ScrollBehavior::Instant);
        assert_eq!(initial.previous, None);

        let click = router.navigate_to(PageId::Predict, NavigationSource::Link);
        assert!(click.push_history);
        assert_eq!(click.scroll, ScrollBehavior::Smooth);
        assert_eq!(click.previous, Some(PageId::Home));

        let back = router.navigate("#home", NavigationSource::Fragment);
        assert!(!back.push_history);
    }

    #[test]
    fn page_ids_round_trip_through_fragments() {
        for page in PageId::ALL {
            assert_eq!(PageId::resolve(&format!("#{page}")), page);
        }
    }
}
