//! Play command - play a game against the computer.

use flanker::board::side::Side;
use flanker::board::{Board, STARTING_POSITION_NOTATION};
use flanker::game::input_source::ConditionalInput;
use flanker::game::renderer::ConditionalStatsRenderer;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "6")]
    pub depth: u8,
    #[structopt(short = "s", long = "side", default_value = "circle")]
    pub side: Side,
    #[structopt(long = "position", default_value = STARTING_POSITION_NOTATION)]
    pub starting_position: Board,
    #[structopt(long = "move-limit", default_value = "50")]
    pub move_limit: u32,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config(
            self.depth,
            self.move_limit,
            self.side.opposite(),
            self.starting_position,
        );
        run_game_loop(
            ConditionalInput {
                human_side: self.side,
            },
            ConditionalStatsRenderer {
                human_side: self.side,
            },
            config,
        );
    }
}
