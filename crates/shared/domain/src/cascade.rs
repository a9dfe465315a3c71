//! Cascading location selection state.
//!
//! A selection at tier `T` is only meaningful in the context of its ancestor
//! chain, so changing any tier clears every descendant's selection and option
//! list before any new fetch resolves. The reducer here is pure state; the
//! async driver that issues the fetches lives in the client crate.

use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::location::{LocationNode, Tier, ALL_TIERS};

/// Lifecycle of a tier's option list.
///
/// `Loaded` with an empty list means the chosen parent has no children,
/// which is a different situation than `Idle` (nothing fetched yet) or
/// `Failed` (the fetch errored). All three leave descendants locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// A fetch the driver must issue after a selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    /// Tier whose option list must be (re)fetched
    pub tier: Tier,
    /// Selected parent value to filter by
    pub parent_id: Uuid,
}

/// Per-tier selection and option state.
#[derive(Debug, Clone, Default)]
pub struct TierState {
    pub selection: Option<Uuid>,
    pub options: Vec<LocationNode>,
    pub fetch: FetchStatus,
}

impl TierState {
    fn reset(&mut self) {
        self.selection = None;
        self.options.clear();
        self.fetch = FetchStatus::Idle;
    }
}

/// Selection state across all six tiers.
#[derive(Debug, Clone, Default)]
pub struct CascadeState {
    tiers: [TierState; 6],
}

impl CascadeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tier(&self, tier: Tier) -> &TierState {
        &self.tiers[tier.index()]
    }

    pub fn selection(&self, tier: Tier) -> Option<Uuid> {
        self.tiers[tier.index()].selection
    }

    pub fn options(&self, tier: Tier) -> &[LocationNode] {
        &self.tiers[tier.index()].options
    }

    pub fn fetch_status(&self, tier: Tier) -> FetchStatus {
        self.tiers[tier.index()].fetch
    }

    /// A tier accepts input when it is the root or its parent is selected.
    pub fn is_enabled(&self, tier: Tier) -> bool {
        match tier.parent() {
            None => true,
            Some(parent) => self.selection(parent).is_some(),
        }
    }

    /// Every tier from the root through `leaf` holds a selection.
    ///
    /// Gates terminal actions: registration submission requires the chain
    /// through School, admin school creation through District.
    pub fn is_complete_through(&self, leaf: Tier) -> bool {
        ALL_TIERS[..=leaf.index()]
            .iter()
            .all(|t| self.selection(*t).is_some())
    }

    /// Whether `id` is one of the currently loaded options for `tier`.
    pub fn contains_option(&self, tier: Tier, id: Uuid) -> bool {
        self.options(tier).iter().any(|node| node.id == id)
    }

    /// Apply a selection change at `tier`.
    ///
    /// Clears every descendant tier, then reports the fetch the driver must
    /// issue for the child tier's options. Clearing a selection (`None`)
    /// issues no fetch and leaves all descendants empty.
    pub fn select(&mut self, tier: Tier, value: Option<Uuid>) -> Option<FetchRequest> {
        self.tiers[tier.index()].selection = value;

        for descendant in &ALL_TIERS[tier.index() + 1..] {
            self.tiers[descendant.index()].reset();
        }

        match (value, tier.child()) {
            (Some(parent_id), Some(child)) => Some(FetchRequest {
                tier: child,
                parent_id,
            }),
            _ => None,
        }
    }

    /// Like [`select`](Self::select), but requires the tier to be unlocked
    /// and the value to come from the loaded option list.
    pub fn select_checked(
        &mut self,
        tier: Tier,
        value: Uuid,
    ) -> DomainResult<Option<FetchRequest>> {
        if !self.is_enabled(tier) {
            return Err(DomainError::validation(format!(
                "Cannot select a {} before its parent tier",
                tier
            )));
        }
        if self.fetch_status(tier) != FetchStatus::Loaded {
            return Err(DomainError::validation(format!(
                "Options for {} are not loaded",
                tier
            )));
        }
        if !self.contains_option(tier, value) {
            return Err(DomainError::validation(format!(
                "Value {} is not among the loaded {} options",
                value, tier
            )));
        }
        Ok(self.select(tier, Some(value)))
    }

    /// Mark a tier's option fetch as in flight.
    pub fn fetch_started(&mut self, tier: Tier) {
        let state = &mut self.tiers[tier.index()];
        state.fetch = FetchStatus::Loading;
        state.options.clear();
    }

    /// Store a tier's fetched option list.
    pub fn options_loaded(&mut self, tier: Tier, options: Vec<LocationNode>) {
        let state = &mut self.tiers[tier.index()];
        state.options = options;
        state.fetch = FetchStatus::Loaded;
    }

    /// Record a failed option fetch; the list stays empty.
    pub fn fetch_failed(&mut self, tier: Tier) {
        let state = &mut self.tiers[tier.index()];
        state.options.clear();
        state.fetch = FetchStatus::Failed;
    }

    /// Clear the whole cascade.
    pub fn reset(&mut self) {
        for state in &mut self.tiers {
            state.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str) -> LocationNode {
        LocationNode {
            id: Uuid::new_v4(),
            name_fa: name.to_string(),
            code: "01".to_string(),
            parent_id: None,
        }
    }

    fn cascade_with_chain() -> (CascadeState, Uuid, Uuid) {
        let mut state = CascadeState::new();
        let tehran = node("تهران");
        let isfahan = node("اصفهان");
        state.options_loaded(Tier::State, vec![tehran.clone(), isfahan.clone()]);

        let fetch = state.select(Tier::State, Some(tehran.id)).unwrap();
        assert_eq!(fetch.tier, Tier::City);

        let tehran_city = node("شهر تهران");
        state.options_loaded(Tier::City, vec![tehran_city.clone()]);
        state.select(Tier::City, Some(tehran_city.id));

        (state, isfahan.id, tehran_city.id)
    }

    #[test]
    fn selecting_a_tier_clears_all_descendants() {
        let mut state = CascadeState::new();
        for tier in ALL_TIERS {
            state.options_loaded(*tier, vec![node("x")]);
            let id = state.options(*tier)[0].id;
            state.select(*tier, Some(id));
        }
        assert!(state.is_complete_through(Tier::School));

        state.select(Tier::County, Some(Uuid::new_v4()));

        for tier in &ALL_TIERS[Tier::Region.index()..] {
            assert_eq!(state.selection(*tier), None);
            assert!(state.options(*tier).is_empty());
            assert_eq!(state.fetch_status(*tier), FetchStatus::Idle);
        }
        // Ancestors are untouched
        assert!(state.selection(Tier::City).is_some());
    }

    #[test]
    fn changing_the_state_drops_the_stale_city() {
        let (mut state, isfahan, tehran_city) = cascade_with_chain();
        assert_eq!(state.selection(Tier::City), Some(tehran_city));

        let fetch = state.select(Tier::State, Some(isfahan)).unwrap();
        assert_eq!(fetch.tier, Tier::City);
        assert_eq!(fetch.parent_id, isfahan);

        assert_eq!(state.selection(Tier::City), None);
        assert!(state.options(Tier::City).is_empty());
        assert!(!state.contains_option(Tier::City, tehran_city));
    }

    #[test]
    fn clearing_a_selection_issues_no_fetch() {
        let (mut state, _, _) = cascade_with_chain();
        assert_eq!(state.select(Tier::State, None), None);
        assert_eq!(state.selection(Tier::City), None);
        assert!(!state.is_enabled(Tier::City));
    }

    #[test]
    fn school_is_enabled_only_with_a_district_selected() {
        let mut state = CascadeState::new();
        assert!(!state.is_enabled(Tier::School));

        for tier in &ALL_TIERS[..Tier::School.index()] {
            state.options_loaded(*tier, vec![node("x")]);
            let id = state.options(*tier)[0].id;
            state.select(*tier, Some(id));
        }
        assert!(state.is_enabled(Tier::School));
        assert!(!state.is_complete_through(Tier::School));
        assert!(state.is_complete_through(Tier::District));
    }

    #[test]
    fn leaf_selection_issues_no_fetch() {
        let mut state = CascadeState::new();
        assert_eq!(state.select(Tier::School, Some(Uuid::new_v4())), None);
    }

    #[test]
    fn empty_loaded_list_is_distinct_from_idle_and_failed() {
        let mut state = CascadeState::new();
        assert_eq!(state.fetch_status(Tier::City), FetchStatus::Idle);

        state.fetch_started(Tier::City);
        assert_eq!(state.fetch_status(Tier::City), FetchStatus::Loading);

        state.options_loaded(Tier::City, vec![]);
        assert_eq!(state.fetch_status(Tier::City), FetchStatus::Loaded);
        assert!(state.options(Tier::City).is_empty());

        state.fetch_failed(Tier::City);
        assert_eq!(state.fetch_status(Tier::City), FetchStatus::Failed);
        assert!(state.options(Tier::City).is_empty());
    }

    #[test]
    fn checked_select_rejects_values_outside_the_option_list() {
        let (mut state, _, _) = cascade_with_chain();
        let stranger = Uuid::new_v4();
        assert!(state.select_checked(Tier::City, stranger).is_err());
    }

    #[test]
    fn checked_select_rejects_locked_tiers() {
        let mut state = CascadeState::new();
        assert!(state.select_checked(Tier::City, Uuid::new_v4()).is_err());
    }
}
