//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_turn::CalculateBestTurnArgs, play::PlayArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "flanker",
    about = "A 7x7 flanking-capture board game engine implemented in Rust ▲●"
)]
pub enum Flanker {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which picks its turns with alpha-beta search at the given `--depth` (default: 6). You play circle unless you choose otherwise with `--side` (triangle, circle or random). Triangle always moves first. The initial position can be given with `--position` (default: starting position)."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself at the given `--depth` (default: 3), pausing `--delay-ms` between turns. The initial position can be given with `--position` (default: starting position)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "calculate-best-turn",
        about = "Print the best turn for `--side` (default: triangle) from a position given with `--position` (required), e.g. `A.....H/......./A.....H/......./H.....A/......./H.....A 0`. The search depth is set with `--depth` (default: 6)."
    )]
    CalculateBestTurn(CalculateBestTurnArgs),
}

impl crate::cli::commands::Command for Flanker {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Watch(cmd),
            CalculateBestTurn(cmd),
        }
    }
}
