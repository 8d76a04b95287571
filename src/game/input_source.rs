use crate::board::side::Side;
use crate::input_handler::{parse_move_input, InputError, MoveInput};

pub trait InputSource {
    fn get_move(&self, side_to_move: Side) -> Result<Option<MoveInput>, InputError>;
}

fn read_human_move() -> Result<Option<MoveInput>, InputError> {
    match parse_move_input() {
        Ok(move_input) => Ok(Some(move_input)),
        Err(InputError::UserExit) => Err(InputError::UserExit),
        Err(_) => Ok(None), // Other errors treated as invalid input
    }
}

pub struct EngineInput;

impl InputSource for EngineInput {
    fn get_move(&self, _side_to_move: Side) -> Result<Option<MoveInput>, InputError> {
        Ok(Some(MoveInput::UseEngine))
    }
}

pub struct ConditionalInput {
    pub human_side: Side,
}

impl InputSource for ConditionalInput {
    fn get_move(&self, side_to_move: Side) -> Result<Option<MoveInput>, InputError> {
        if side_to_move == self.human_side {
            read_human_move()
        } else {
            Ok(Some(MoveInput::UseEngine))
        }
    }
}
