use log::{info, warn};

use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, EngineConfig, TurnProgress};
use crate::input_handler::{InputError, MoveInput};

use super::input_source::InputSource;
use super::renderer::GameRenderer;

pub struct GameLoop<I: InputSource, R: GameRenderer> {
    engine: Engine,
    ui: GameDisplay,
    input_source: I,
    renderer: R,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    pub fn new(input_source: I, renderer: R, config: EngineConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
            ui: GameDisplay::new(),
            input_source,
            renderer,
        }
    }

    pub fn run(&mut self) {
        loop {
            if let Some(ending) = self.engine.check_game_over() {
                self.renderer.render(&mut self.ui, &self.engine);
                println!("Game over: {}", ending);
                break;
            }

            if let Some(side) = self.engine.pass_if_blocked() {
                println!("{} cannot move and passes", side);
                continue;
            }

            self.renderer.render(&mut self.ui, &self.engine);

            let side_to_move = self.engine.side_to_move();
            match self.input_source.get_move(side_to_move) {
                Ok(Some(MoveInput::UseEngine)) => {
                    if let Err(error) = self.engine.make_computer_turn() {
                        warn!("computer turn failed: {}", error);
                        println!("error: {}", error);
                        break;
                    }
                    if let Some(delay) = self.renderer.frame_delay() {
                        std::thread::sleep(delay);
                    }
                }
                Ok(Some(MoveInput::Coordinate(game_move))) => {
                    match self.engine.apply_human_move(game_move) {
                        Ok(TurnProgress::GameOver(ending)) => info!("game over: {}", ending),
                        Ok(_) => {}
                        Err(error) => println!("error: {}", error),
                    }
                }
                Ok(None) => println!("Invalid input"),
                Err(InputError::UserExit) => {
                    println!("Goodbye!");
                    break;
                }
                Err(error) => {
                    println!("error: {}", error);
                    break;
                }
            }
        }
    }
}
