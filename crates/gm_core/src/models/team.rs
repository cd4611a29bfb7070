//! Team and player roster types.
//!
//! Teams own their players by value in roster order. The momentum reaction
//! hooks on both types are presentation-only: they describe the reaction to
//! the sink without touching morale state.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::player as player_constants;
use crate::engine::momentum::MomentumStatus;
use crate::sink::PresentationSink;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub name: String,
    pub coach: String,
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(name: impl Into<String>, coach: impl Into<String>) -> Self {
        Self { name: name.into(), coach: coach.into(), players: Vec::new() }
    }

    /// Append a player to the roster. Order-preserving; duplicate names are
    /// not checked.
    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn roster(&self) -> &[Player] {
        &self.players
    }

    /// Morale reaction hook. Presentation-only: player morale fields are
    /// not mutated here.
    pub fn update_team_morale(&self, status: MomentumStatus, sink: &mut dyn PresentationSink) {
        sink.present(&format!("{} morale adjusts based on: {status}", self.name));
    }

    pub fn execute_strategy(&self, sink: &mut dyn PresentationSink) {
        sink.present(&format!("{} executes {}'s strategy!", self.name, self.coach));
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub name: String,
    pub position: Position,
    /// Unclamped; starts at 100.
    pub morale: i32,
    /// Unclamped below; each play costs a fixed amount.
    pub stamina: f32,
}

impl Player {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
            morale: player_constants::BASE_MORALE,
            stamina: player_constants::BASE_STAMINA,
        }
    }

    /// Burn stamina on a play attempt. No floor.
    pub fn perform_play(&mut self, play_type: &str, sink: &mut dyn PresentationSink) {
        self.stamina -= player_constants::PLAY_STAMINA_COST;
        sink.present(&format!("{} performs play: {play_type}", self.name));
    }

    /// Presentation hook; no state mutation.
    pub fn react_to_momentum_change(
        &self,
        status: MomentumStatus,
        sink: &mut dyn PresentationSink,
    ) {
        sink.present(&format!("{} reacts to {status}", self.name));
    }
}

/// Gridiron positions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    QB,
    RB,
    FB,
    WR,
    TE,
    OL,
    DL,
    LB,
    CB,
    S,
    K,
    P,
}

impl Position {
    /// Full position name for presentation lines.
    pub fn label(&self) -> &'static str {
        match self {
            Position::QB => "Quarterback",
            Position::RB => "Running Back",
            Position::FB => "Fullback",
            Position::WR => "Wide Receiver",
            Position::TE => "Tight End",
            Position::OL => "Offensive Lineman",
            Position::DL => "Defensive Lineman",
            Position::LB => "Linebacker",
            Position::CB => "Cornerback",
            Position::S => "Safety",
            Position::K => "Kicker",
            Position::P => "Punter",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
