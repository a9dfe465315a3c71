//! Async driver for the cascading location selection.
//!
//! Applies the pure reducer from the domain crate, then issues the child
//! option fetch it reports. Descendant state is cleared before the fetch is
//! awaited, so a stale leaf can never survive an ancestor change. A failed
//! fetch leaves the affected option list empty and is surfaced to the
//! caller; there are no retries.

use std::sync::Arc;

use uuid::Uuid;

use common::AppResult;
use domain::{CascadeState, LocationNode, Tier};

use crate::locations::LocationSource;

/// Coordinator binding the cascade state to a location source.
pub struct CascadeResolver {
    source: Arc<dyn LocationSource>,
    state: CascadeState,
}

impl CascadeResolver {
    pub fn new(source: Arc<dyn LocationSource>) -> Self {
        Self {
            source,
            state: CascadeState::new(),
        }
    }

    /// Read-only view of the cascade state.
    pub fn state(&self) -> &CascadeState {
        &self.state
    }

    /// Fetch the root tier's option list (the entry point of every flow).
    pub async fn load_states(&mut self) -> AppResult<()> {
        self.fetch_options(Tier::State, None).await
    }

    /// Apply a selection change and fetch the child tier's options.
    ///
    /// A `Some` value must come from the tier's loaded option list; `None`
    /// clears the field and issues no fetch.
    pub async fn select(&mut self, tier: Tier, value: Option<Uuid>) -> AppResult<()> {
        let request = match value {
            Some(id) => self.state.select_checked(tier, id)?,
            None => self.state.select(tier, None),
        };

        if let Some(request) = request {
            self.fetch_options(request.tier, Some(request.parent_id))
                .await?;
        }

        Ok(())
    }

    /// Convenience accessor for the selected value at a tier.
    pub fn selection(&self, tier: Tier) -> Option<Uuid> {
        self.state.selection(tier)
    }

    /// Loaded options for a tier.
    pub fn options(&self, tier: Tier) -> &[LocationNode] {
        self.state.options(tier)
    }

    /// Whether a terminal action requiring the chain through `leaf` may run.
    pub fn is_complete_through(&self, leaf: Tier) -> bool {
        self.state.is_complete_through(leaf)
    }

    async fn fetch_options(&mut self, tier: Tier, parent_id: Option<Uuid>) -> AppResult<()> {
        self.state.fetch_started(tier);

        match self.source.children(tier, parent_id).await {
            Ok(options) => {
                if options.is_empty() {
                    tracing::debug!("No {} exist for the selected parent", tier);
                }
                self.state.options_loaded(tier, options);
                Ok(())
            }
            Err(e) => {
                self.state.fetch_failed(tier);
                tracing::warn!("Fetching {} options failed: {}", tier, e);
                Err(e)
            }
        }
    }
}
