//! Crowd energy accumulator.

use serde::{Deserialize, Serialize};

use crate::constants::crowd;
use crate::models::PlayEvent;
use crate::sink::PresentationSink;

/// Energy level of one stand of supporters.
///
/// Energy is unclamped: a crowd can be driven arbitrarily flat or
/// arbitrarily loud. Two independent update paths exist - explicit
/// cheer/boo and play-impact adjustment - and callers may combine them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Crowd {
    energy: i32,
    affiliation: String,
}

impl Crowd {
    pub fn new(affiliation: impl Into<String>) -> Self {
        Self { energy: crowd::BASE_ENERGY, affiliation: affiliation.into() }
    }

    pub fn cheer(&mut self, sink: &mut dyn PresentationSink) {
        self.energy += crowd::CHEER_DELTA;
        sink.present("Crowd cheers loudly!");
    }

    pub fn boo(&mut self, sink: &mut dyn PresentationSink) {
        self.energy -= crowd::CHEER_DELTA;
        sink.present("Crowd boos in disappointment!");
    }

    /// Fold a play's momentum impact straight into crowd energy.
    pub fn adjust_energy_based_on_play(&mut self, event: &PlayEvent) {
        self.energy += event.momentum_impact();
    }

    pub fn energy(&self) -> i32 {
        self.energy
    }

    pub fn affiliation(&self) -> &str {
        &self.affiliation
    }
}
