//! Gallery state: filter and sort selection, the derived visible list, and
//! the fullscreen viewer position.
//!
//! Everything in here is pure with respect to the UI: the Slint adapter layer
//! projects this state into models and properties but is never consulted.

use crate::catalog::{ImageRecord, Season};
use log::debug;
use rand::RngCore;
use rand::seq::SliceRandom;
use std::path::PathBuf;

/// Which subset of the catalog is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Season(Season),
}

impl Filter {
    /// Parses the tag carried by a filter control.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "all" => Some(Filter::All),
            "spring" => Some(Filter::Season(Season::Spring)),
            "summer" => Some(Filter::Season(Season::Summer)),
            "autumn" => Some(Filter::Season(Season::Autumn)),
            "winter" => Some(Filter::Season(Season::Winter)),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Season(Season::Spring) => "spring",
            Filter::Season(Season::Summer) => "summer",
            Filter::Season(Season::Autumn) => "autumn",
            Filter::Season(Season::Winter) => "winter",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Season(season) => season.label(),
        }
    }
}

/// Ordering of the visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sort {
    Order,
    Random,
}

impl Sort {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "order" => Some(Sort::Order),
            "random" => Some(Sort::Random),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Sort::Order => "order",
            Sort::Random => "random",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sort::Order => "Order",
            Sort::Random => "Random",
        }
    }
}

/// What a gallery card displays. Pure projection of an [`ImageRecord`],
/// so the grid contents can be asserted without a rendering backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardViewModel {
    pub index: u32,
    /// `#`-prefixed zero-padded id, e.g. `#007`.
    pub id_label: String,
    pub season_label: &'static str,
    pub src: PathBuf,
    pub alt: String,
}

impl CardViewModel {
    pub fn from_record(record: &ImageRecord) -> Self {
        Self {
            index: record.index,
            id_label: format!("#{}", record.id),
            season_label: record.season.label(),
            src: record.src.clone(),
            alt: record.alt.clone(),
        }
    }
}

/// Combined id and season label shown under the fullscreen image,
/// e.g. `#043 • Summer`.
pub fn viewer_label(record: &ImageRecord) -> String {
    format!("#{} • {}", record.id, record.season.label())
}

/// Gallery and fullscreen-viewer state.
///
/// `visible` is always a full recomputation from `items`; it is never
/// patched incrementally. The viewer index is an index into `visible` and
/// survives a close, so reopening resumes at the last position. It is
/// clamped before every use because a filter or sort change can shrink the
/// list underneath it.
pub struct GalleryState {
    items: Vec<ImageRecord>,
    filter: Filter,
    sort: Sort,
    visible: Vec<ImageRecord>,
    viewer_index: usize,
    viewer_open: bool,
}

impl GalleryState {
    pub fn new(items: Vec<ImageRecord>) -> Self {
        Self {
            items,
            filter: Filter::All,
            sort: Sort::Order,
            visible: Vec::new(),
            viewer_index: 0,
            viewer_open: false,
        }
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn sort(&self) -> Sort {
        self.sort
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn set_sort(&mut self, sort: Sort) {
        self.sort = sort;
    }

    /// Recomputes the visible list from the full catalog.
    ///
    /// Filtering keeps the records whose season matches the current filter
    /// (all of them for [`Filter::All`]); ordering is either ascending
    /// print number or a fresh uniform shuffle. A random sort reshuffles on
    /// every call, so consecutive renders may disagree.
    pub fn apply_filter_sort(&mut self, rng: &mut dyn RngCore) -> &[ImageRecord] {
        let mut list: Vec<ImageRecord> = match self.filter {
            Filter::All => self.items.clone(),
            Filter::Season(season) => self
                .items
                .iter()
                .filter(|record| record.season == season)
                .cloned()
                .collect(),
        };

        match self.sort {
            Sort::Order => list.sort_by_key(|record| record.index),
            Sort::Random => list.shuffle(rng),
        }

        debug!(
            "visible list recomputed: filter={} sort={} count={}",
            self.filter.tag(),
            self.sort.tag(),
            list.len()
        );

        self.visible = list;
        &self.visible
    }

    pub fn visible(&self) -> &[ImageRecord] {
        &self.visible
    }

    /// Card projections of the visible list, in display order.
    pub fn visible_cards(&self) -> Vec<CardViewModel> {
        self.visible.iter().map(CardViewModel::from_record).collect()
    }

    /// Status line of the form `Filter: <Label> • Sort: <Label> • <n> items`.
    pub fn status_line(&self) -> String {
        format!(
            "Filter: {} • Sort: {} • {} items",
            self.filter.label(),
            self.sort.label(),
            self.visible.len()
        )
    }

    /// Opens the viewer at a position within the visible list.
    pub fn open_viewer(&mut self, visible_index: usize) {
        self.viewer_index = visible_index;
        self.viewer_open = true;
    }

    /// Closes the viewer. The index is kept so a later open can resume.
    pub fn close_viewer(&mut self) {
        self.viewer_open = false;
    }

    pub fn viewer_open(&self) -> bool {
        self.viewer_open
    }

    pub fn viewer_index(&self) -> usize {
        self.viewer_index
    }

    /// The record the viewer should display, after clamping the index into
    /// the current visible list. `None` when the list is empty.
    pub fn viewer_record(&mut self) -> Option<&ImageRecord> {
        if self.visible.is_empty() {
            return None;
        }
        self.viewer_index = self.viewer_index.min(self.visible.len() - 1);
        Some(&self.visible[self.viewer_index])
    }

    /// Records adjacent to the current viewer position, for prefetch.
    pub fn viewer_neighbors(&self) -> (Option<&ImageRecord>, Option<&ImageRecord>) {
        if self.visible.is_empty() {
            return (None, None);
        }
        let index = self.viewer_index.min(self.visible.len() - 1);
        let prev = index.checked_sub(1).map(|i| &self.visible[i]);
        let next = self.visible.get(index + 1);
        (prev, next)
    }

    /// Advances the viewer by one, clamped to the end of the list.
    pub fn viewer_next(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.viewer_index = (self.viewer_index + 1).min(self.visible.len() - 1);
    }

    /// Steps the viewer back by one, clamped to the start of the list.
    pub fn viewer_prev(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.viewer_index = self.viewer_index.saturating_sub(1).min(self.visible.len() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_catalog;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::path::Path;

    fn fresh_state() -> GalleryState {
        GalleryState::new(build_catalog(Path::new("img/edo")))
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x9e3779b97f4a7c15)
    }

    #[test]
    fn all_order_yields_full_ascending_catalog() {
        let mut state = fresh_state();
        let visible = state.apply_filter_sort(&mut rng());
        assert_eq!(visible.len(), 119);
        for (pos, record) in visible.iter().enumerate() {
            assert_eq!(record.index, pos as u32 + 1);
        }
    }

    #[test]
    fn summer_filter_keeps_exactly_the_summer_range() {
        let mut state = fresh_state();
        state.set_filter(Filter::Season(Season::Summer));
        let visible = state.apply_filter_sort(&mut rng());
        assert_eq!(visible.len(), 30);
        assert!(visible.iter().all(|r| (43..=72).contains(&r.index)));
        let indices: Vec<u32> = visible.iter().map(|r| r.index).collect();
        assert_eq!(indices, (43..=72).collect::<Vec<u32>>());
    }

    #[test]
    fn random_sort_is_a_permutation_of_the_filtered_set() {
        let mut state = fresh_state();
        state.set_sort(Sort::Random);
        let mut source = rng();
        let shuffled: Vec<u32> = state
            .apply_filter_sort(&mut source)
            .iter()
            .map(|r| r.index)
            .collect();

        let mut sorted = shuffled.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=119).collect::<Vec<u32>>());
        // A 119-element shuffle landing back on the identity would mean a
        // broken shuffle, not bad luck.
        assert_ne!(shuffled, sorted);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut a = fresh_state();
        let mut b = fresh_state();
        a.set_sort(Sort::Random);
        b.set_sort(Sort::Random);
        let first: Vec<u32> = a.apply_filter_sort(&mut rng()).iter().map(|r| r.index).collect();
        let second: Vec<u32> = b.apply_filter_sort(&mut rng()).iter().map(|r| r.index).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn winter_order_status_line() {
        let mut state = fresh_state();
        state.set_filter(Filter::Season(Season::Winter));
        state.apply_filter_sort(&mut rng());
        assert_eq!(state.status_line(), "Filter: Winter • Sort: Order • 21 items");
        assert_eq!(state.visible().len(), 21);
    }

    #[test]
    fn viewer_does_not_wrap_at_either_end() {
        let mut state = fresh_state();
        state.apply_filter_sort(&mut rng());

        state.open_viewer(0);
        state.viewer_prev();
        assert_eq!(state.viewer_index(), 0);

        state.open_viewer(118);
        state.viewer_next();
        assert_eq!(state.viewer_index(), 118);
    }

    #[test]
    fn viewer_index_is_clamped_after_the_list_shrinks() {
        // Prints 097-101 straddle the autumn/winter boundary: two autumn,
        // three winter. Viewer sits at position 4 of the 5-item list; the
        // autumn filter shrinks it to 2 and the next record lookup must
        // clamp to the last valid slot instead of indexing out of bounds.
        let catalog = build_catalog(Path::new("img/edo"));
        let mut state = GalleryState::new(catalog[96..101].to_vec());
        state.apply_filter_sort(&mut rng());
        assert_eq!(state.visible().len(), 5);
        state.open_viewer(4);
        assert_eq!(state.viewer_record().map(|r| r.index), Some(101));

        state.set_filter(Filter::Season(Season::Autumn));
        state.apply_filter_sort(&mut rng());
        assert_eq!(state.visible().len(), 2);
        assert_eq!(state.viewer_record().map(|r| r.index), Some(98));
        assert_eq!(state.viewer_index(), 1);
    }

    #[test]
    fn viewer_record_is_none_on_empty_list() {
        let mut state = GalleryState::new(Vec::new());
        state.apply_filter_sort(&mut rng());
        assert!(state.viewer_record().is_none());
        state.viewer_next();
        state.viewer_prev();
        assert_eq!(state.viewer_index(), 0);
    }

    #[test]
    fn close_keeps_the_viewer_index() {
        let mut state = fresh_state();
        state.apply_filter_sort(&mut rng());
        state.open_viewer(7);
        state.close_viewer();
        assert!(!state.viewer_open());
        assert_eq!(state.viewer_index(), 7);
    }

    #[test]
    fn neighbors_at_the_edges() {
        let mut state = fresh_state();
        state.apply_filter_sort(&mut rng());

        state.open_viewer(0);
        let (prev, next) = state.viewer_neighbors();
        assert!(prev.is_none());
        assert_eq!(next.map(|r| r.index), Some(2));

        state.open_viewer(118);
        let (prev, next) = state.viewer_neighbors();
        assert_eq!(prev.map(|r| r.index), Some(118));
        assert!(next.is_none());
    }

    #[test]
    fn card_view_model_projection() {
        let mut state = fresh_state();
        state.apply_filter_sort(&mut rng());
        let cards = state.visible_cards();
        assert_eq!(cards.len(), 119);
        assert_eq!(cards[6].id_label, "#007");
        assert_eq!(cards[6].season_label, "Spring");
        assert_eq!(cards[42].season_label, "Summer");
    }

    #[test]
    fn viewer_label_combines_id_and_season() {
        let catalog = build_catalog(Path::new("img/edo"));
        assert_eq!(viewer_label(&catalog[42]), "#043 • Summer");
    }
}
