//! Shared utilities for CLI commands.

use flanker::board::side::Side;
use flanker::board::Board;
use flanker::game::engine::EngineConfig;
use flanker::game::input_source::InputSource;
use flanker::game::r#loop::GameLoop;
use flanker::game::renderer::GameRenderer;

pub(crate) fn run_game_loop<I, R>(input_source: I, renderer: R, config: EngineConfig)
where
    I: InputSource,
    R: GameRenderer,
{
    let mut game = GameLoop::new(input_source, renderer, config);
    game.run();
}

pub(crate) fn create_config(
    depth: u8,
    move_limit: u32,
    computer_side: Side,
    starting_position: Board,
) -> EngineConfig {
    EngineConfig {
        search_depth: depth,
        move_limit,
        computer_side,
        starting_position,
    }
}
