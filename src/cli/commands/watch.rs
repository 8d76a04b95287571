//! Watch command - watch the computer play against itself.

use std::time::Duration;

use flanker::board::side::Side;
use flanker::board::{Board, STARTING_POSITION_NOTATION};
use flanker::game::input_source::EngineInput;
use flanker::game::renderer::StatsRenderer;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(long = "position", default_value = STARTING_POSITION_NOTATION)]
    pub starting_position: Board,
    #[structopt(long = "move-limit", default_value = "50")]
    pub move_limit: u32,
    #[structopt(
        long = "delay-ms",
        default_value = "500",
        help = "Delay between turns in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        // Both sides are played by the engine.
        let config = create_config(
            self.depth,
            self.move_limit,
            Side::Triangle,
            self.starting_position,
        );
        run_game_loop(
            EngineInput,
            StatsRenderer {
                delay_between_turns: Some(Duration::from_millis(self.delay_ms)),
            },
            config,
        );
    }
}
