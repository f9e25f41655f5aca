mod generate;
mod regenerate;

use nutriplan_shared::{Gateway, GenerationSettings, SingleFlight};
use std::{ops::Deref, sync::Arc};

pub use generate::*;
pub use regenerate::*;

/// Gateway-backed plan operations.
///
/// Holds the per-day single-flight guard; clones share it.
pub struct Planner<G: Gateway> {
    gateway: Arc<G>,
    settings: GenerationSettings,
    regenerating: SingleFlight<usize>,
}

impl<G: Gateway> Clone for Planner<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            settings: self.settings.clone(),
            regenerating: self.regenerating.clone(),
        }
    }
}

impl<G: Gateway> Deref for Planner<G> {
    type Target = GenerationSettings;

    fn deref(&self) -> &Self::Target {
        &self.settings
    }
}

impl<G: Gateway> Planner<G> {
    pub fn new(gateway: Arc<G>, settings: GenerationSettings) -> Self {
        Self {
            gateway,
            settings,
            regenerating: SingleFlight::new(),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Whether a regeneration of `day_index` is outstanding.
    pub fn is_regenerating(&self, day_index: usize) -> bool {
        self.regenerating.is_in_flight(&day_index)
    }
}
