use std::fmt::Write;

use termion::{clear, cursor};

use crate::board::coord::Coord;
use crate::board::side::Side;
use crate::board::{Board, BOARD_SIZE};
use crate::moves::Turn;
use crate::turn_selector::format_turn;

pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        // Writing to a String cannot fail
        let _ = write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All);
    }

    /// Lays out the board, whose turn it is, the previous turn and optional stats.
    pub fn compose(
        &mut self,
        board: &Board,
        side_to_move: Side,
        last_turn: Option<(Side, &Turn)>,
        stats: Option<&str>,
    ) {
        self.clear();

        let files: String = (0..BOARD_SIZE as u8)
            .map(|col| format!("   {}", (b'a' + col) as char))
            .collect();
        let border = |left: &str, mid: &str, right: &str| {
            format!("  {}{}{}\n", left, vec!["───"; BOARD_SIZE].join(mid), right)
        };

        self.buffer.push_str(&format!(" {}\n", files));
        self.buffer.push_str(&border("┌", "┬", "┐"));
        for row in 0..BOARD_SIZE {
            let rank = BOARD_SIZE - row;
            self.buffer.push_str(&format!("{} │", rank));
            for col in 0..BOARD_SIZE {
                let cell = match board.get(Coord::new(row as u8, col as u8)) {
                    Some(side) => side.to_unicode_char(),
                    None => '·',
                };
                self.buffer.push_str(&format!(" {} │", cell));
            }
            self.buffer.push_str(&format!(" {}\n", rank));

            if row + 1 < BOARD_SIZE {
                self.buffer.push_str(&border("├", "┼", "┤"));
            } else {
                self.buffer.push_str(&border("└", "┴", "┘"));
            }
        }
        self.buffer.push_str(&format!(" {}\n\n", files));

        self.buffer.push_str(&format!(
            "Turn: {} {} (moves played: {})\n",
            side_to_move.to_unicode_char(),
            side_to_move,
            board.move_count()
        ));
        self.buffer.push_str(&format!(
            "Pieces: {} {}  {} {}\n",
            Side::Triangle.to_unicode_char(),
            board.count(Side::Triangle),
            Side::Circle.to_unicode_char(),
            board.count(Side::Circle)
        ));

        if let Some((side, turn)) = last_turn {
            self.buffer
                .push_str(&format!("Last turn: {} {}\n", side, format_turn(turn)));
        }

        if let Some(stats) = stats {
            self.buffer.push_str(&format!("\n{}\n", stats));
        }
    }

    pub fn render_game_state(
        &mut self,
        board: &Board,
        side_to_move: Side,
        last_turn: Option<(Side, &Turn)>,
        stats: Option<&str>,
    ) {
        self.compose(board, side_to_move, last_turn, stats);
        // Print the complete frame
        print!("{}", self.buffer);
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}
