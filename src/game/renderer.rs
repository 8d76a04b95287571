use std::time::Duration;

use crate::board::side::Side;
use crate::game::display::GameDisplay;
use crate::game::engine::Engine;

pub trait GameRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine);
    fn frame_delay(&self) -> Option<Duration>;
}

fn stats_display(engine: &Engine) -> String {
    let stats = engine.get_search_stats();
    format!(
        "* Score: {}\n* Positions searched: {} (depth: {}, cache hits: {})\n* Evaluations: {}, cutoffs: {}\n* Turn took: {}",
        stats.last_score.map_or("-".to_string(), |s| s.to_string()),
        stats.positions_searched,
        stats.depth,
        stats.tt_hits,
        stats.evaluations,
        stats.cutoffs,
        stats
            .last_search_duration
            .map_or("-".to_string(), |d| format!("{:?}", d))
    )
}

pub struct StatsRenderer {
    pub delay_between_turns: Option<Duration>,
}

impl GameRenderer for StatsRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine) {
        ui.render_game_state(
            engine.board(),
            engine.side_to_move(),
            engine.last_turn(),
            Some(&stats_display(engine)),
        );
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_turns
    }
}

pub struct ConditionalStatsRenderer {
    pub human_side: Side,
}

impl GameRenderer for ConditionalStatsRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine) {
        ui.render_game_state(
            engine.board(),
            engine.side_to_move(),
            engine.last_turn(),
            Some(&stats_display(engine)),
        );
        if engine.side_to_move() == self.human_side && engine.check_game_over().is_none() {
            let remaining = engine.moves_remaining();
            println!(
                "Enter your move ({} left this turn, e.g. a3a4, or `quit`):",
                remaining
            );
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}
