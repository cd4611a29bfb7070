//! JSON boundary for running scripted momentum scenarios.
//!
//! Mirrors the reference driving loop: a fixed number of plays, each
//! randomly attributed to the home or away side, feeding the authoritative
//! meter and the downstream reactions. Fully deterministic: the same
//! request produces the same response, byte for byte.

use serde::{Deserialize, Serialize};

use crate::constants::clock;
use crate::engine::{GameMatch, MomentumStatus, OutcomeProvider, SeededOutcomeProvider};
use crate::error::{Result, ScenarioError};
use crate::models::{PlayEvent, Player, Position, Team};
use crate::reactions::{Crowd, HypeAction, UIController};
use crate::sink::{NullSink, PresentationSink};

/// Plays run when the request leaves the count unspecified.
pub const DEFAULT_PLAYS: u32 = 4;

/// Play label used by the scripted driver.
const SCRIPTED_PLAY: &str = "Touchdown Attempt";

#[derive(Debug, Deserialize)]
pub struct ScenarioRequest {
    pub schema_version: u8,
    pub seed: u64,
    #[serde(default = "default_plays")]
    pub plays: u32,
    pub home_team: TeamData,
    pub away_team: TeamData,
}

fn default_plays() -> u32 {
    DEFAULT_PLAYS
}

#[derive(Debug, Deserialize)]
pub struct TeamData {
    pub name: String,
    pub coach: String,
    pub players: Vec<PlayerData>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerData {
    pub name: String,
    pub position: Position,
}

/// Scenario knobs shared by the JSON boundary and the CLI driver.
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    pub seed: u64,
    pub plays: u32,
    /// Optional hype action the driver may fire once, inside its timing
    /// window, after a successful home play.
    pub hype: Option<HypeAction>,
}

impl ScenarioConfig {
    pub fn new(seed: u64) -> Self {
        Self { seed, plays: DEFAULT_PLAYS, hype: None }
    }
}

#[derive(Debug, Serialize)]
pub struct ScenarioResponse {
    pub schema_version: u8,
    pub final_momentum: i32,
    pub final_status: MomentumStatus,
    pub score: i32,
    pub quarter: u32,
    pub time_remaining: f32,
    pub crowd_energy: i32,
    pub hype_bonus_applied: bool,
    pub plays: Vec<PlayRecord>,
}

#[derive(Debug, Serialize)]
pub struct PlayRecord {
    pub play: u32,
    pub home_play: bool,
    pub impact: i32,
    pub momentum: i32,
    pub status: MomentumStatus,
}

/// Run a scenario described as JSON and return the response as JSON.
pub fn run_scenario_json(request_json: &str) -> Result<String> {
    let request: ScenarioRequest = serde_json::from_str(request_json)?;
    if request.schema_version != crate::SCHEMA_VERSION {
        return Err(ScenarioError::Validation(format!(
            "unsupported schema_version: {}",
            request.schema_version
        )));
    }

    let home = build_team(&request.home_team);
    let away = build_team(&request.away_team);
    let config = ScenarioConfig {
        seed: request.seed,
        plays: request.plays,
        hype: None,
    };

    let response = run_scenario(&config, &home, &away, &mut NullSink);
    Ok(serde_json::to_string(&response)?)
}

fn build_team(data: &TeamData) -> Team {
    let mut team = Team::new(&data.name, &data.coach);
    for p in &data.players {
        team.add_player(Player::new(&p.name, p.position));
    }
    team
}

/// The reference driving loop.
///
/// Each play is randomly attributed to the home or away side, resolved, and
/// its impact fed into the match's meter with team attribution: home plays
/// credit the meter, away plays debit it. The home crowd, both teams'
/// morale hooks, and the UI react to the resulting status.
pub fn run_scenario(
    config: &ScenarioConfig,
    home: &Team,
    away: &Team,
    sink: &mut dyn PresentationSink,
) -> ScenarioResponse {
    let mut provider = SeededOutcomeProvider::from_seed(config.seed);
    let mut game = GameMatch::new(home, away);
    let mut home_crowd = Crowd::new(home.name.clone());
    let mut ui = UIController::new();

    let mut records = Vec::with_capacity(config.plays as usize);
    let mut last_status = game.momentum_status();
    let mut hype_bonus_applied = false;

    home.execute_strategy(sink);
    away.execute_strategy(sink);

    for play_no in 1..=config.plays {
        sink.present(&format!("--- Play {play_no} ---"));

        let home_play = provider.next_outcome();
        sink.present(if home_play { "[Home Team Play]" } else { "[Away Team Play]" });

        let mut event = PlayEvent::new(SCRIPTED_PLAY);
        event.resolve(&mut provider);
        let impact = event.momentum_impact();

        if event.is_resolved() {
            game.update_score(event.points_earned());
        } else {
            sink.present(&format!("{SCRIPTED_PLAY} failed!"));
        }

        if home_play {
            game.momentum_mut().increase_momentum(impact);
            if impact > 0 {
                home_crowd.cheer(sink);
            } else {
                home_crowd.boo(sink);
            }
        } else {
            game.momentum_mut().decrease_momentum(impact);
            if impact > 0 {
                home_crowd.boo(sink);
            } else {
                home_crowd.cheer(sink);
            }
        }

        if let Some(hype) = &config.hype {
            let elapsed = (play_no - 1) as f32 * clock::PLAY_DURATION_SECS;
            if !hype_bonus_applied && home_play && impact > 0 && hype.is_within_window(elapsed) {
                if hype.execute_action(&mut provider, sink) {
                    hype.apply_momentum_bonus(game.momentum_mut(), sink);
                    hype_bonus_applied = true;
                }
            }
        }

        game.advance_time(clock::PLAY_DURATION_SECS);

        let status = game.momentum_status();
        sink.present(&format!("Momentum Status: {status}"));
        ui.update_ui(game.momentum().value(), sink);
        ui.show_quick_time_event(quick_time_action(home_play, impact), sink);

        if status != last_status {
            game.home_team().update_team_morale(status, sink);
            game.away_team().update_team_morale(status, sink);
            for player in game.home_team().roster() {
                player.react_to_momentum_change(status, sink);
            }
            for player in game.away_team().roster() {
                player.react_to_momentum_change(status, sink);
            }
            last_status = status;
        }

        records.push(PlayRecord {
            play: play_no,
            home_play,
            impact,
            momentum: game.momentum().value(),
            status,
        });
    }

    ScenarioResponse {
        schema_version: crate::SCHEMA_VERSION,
        final_momentum: game.momentum().value(),
        final_status: game.momentum_status(),
        score: game.score(),
        quarter: game.quarter(),
        time_remaining: game.time_remaining(),
        crowd_energy: home_crowd.energy(),
        hype_bonus_applied,
        plays: records,
    }
}

/// Prompt shown after a play, from the home crowd's point of view.
fn quick_time_action(home_play: bool, impact: i32) -> &'static str {
    let home_favored = (home_play && impact > 0) || (!home_play && impact <= 0);
    if home_favored {
        "Celebration"
    } else {
        "Frustration Gesture"
    }
}
