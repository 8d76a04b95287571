//! Calculate best turn command - determine the best turn from a position.

use flanker::board::ending::game_ending;
use flanker::board::side::Side;
use flanker::board::Board;
use flanker::game::engine::{Engine, EngineConfig};
use flanker::turn_selector::format_turn;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestTurnArgs {
    #[structopt(short, long, default_value = "6")]
    pub depth: u8,
    #[structopt(short = "s", long = "side", default_value = "triangle")]
    pub side: Side,
    #[structopt(long = "position")]
    pub starting_position: Board,
    #[structopt(long = "move-limit", default_value = "50")]
    pub move_limit: u32,
}

impl Command for CalculateBestTurnArgs {
    fn execute(self) {
        if let Some(ending) = game_ending(&self.starting_position, self.move_limit) {
            eprintln!("The given position is already decided: {}", ending);
            return;
        }

        let config = EngineConfig {
            search_depth: self.depth,
            move_limit: self.move_limit,
            computer_side: self.side,
            starting_position: self.starting_position,
        };
        let mut engine = Engine::with_config(config);
        engine.set_side_to_move(self.side);

        match engine.compute_computer_turn() {
            Ok(turn) => println!("{}", format_turn(&turn)),
            Err(err) => eprintln!("Failed to calculate best turn: {}", err),
        }
    }
}
