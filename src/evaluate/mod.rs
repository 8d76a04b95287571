use crate::board::captures::runs;
use crate::board::side::Side;
use crate::board::Board;
use crate::moves::legal_moves;

use self::weights::*;

mod weights;

/// Returns the score of the board from the perspective of `perspective`. Higher is better
/// for that side.
///
/// final = 200 * material + 10 * sandwich reward - 20 * sandwich penalty + threats
pub fn score(board: &Board, perspective: Side) -> i32 {
    let (reward, penalty) = sandwich_scores(board, perspective);

    MATERIAL_WEIGHT * material_score(board, perspective)
        + SANDWICH_REWARD_WEIGHT * reward
        - SANDWICH_PENALTY_WEIGHT * penalty
        + threat_score(board, perspective)
}

pub fn material_score(board: &Board, perspective: Side) -> i32 {
    let own = board.count(perspective) as i32;
    let opponent = board.count(perspective.opposite()) as i32;
    PIECE_VALUE * (own - opponent)
}

/// Plays every legal move of `perspective` on a copy of the board and sums what each one
/// would capture (rewarded) or lose to a self-capture (penalized).
pub fn threat_score(board: &Board, perspective: Side) -> i32 {
    let opponent = perspective.opposite();
    let own_before = board.count(perspective) as i32;
    let opponent_before = board.count(opponent) as i32;

    legal_moves(board, perspective)
        .into_iter()
        .map(|game_move| {
            let mut after = *board;
            after.apply_move_unchecked(game_move);

            let captured = opponent_before - after.count(opponent) as i32;
            let lost = own_before - after.count(perspective) as i32;
            THREAT_CAPTURE_VALUE * captured - THREAT_SELF_CAPTURE_VALUE * lost
        })
        .sum()
}

/// Returns `(reward, penalty)`: opposing runs held between two of our pieces, and our own
/// runs held between two opposing pieces. Runs touching the edge are not counted.
pub fn sandwich_scores(board: &Board, perspective: Side) -> (i32, i32) {
    let opponent = perspective.opposite();
    let mut reward = 0;
    let mut penalty = 0;

    for run in runs(board) {
        let value = SANDWICH_CELL_VALUE * run.len() as i32;
        if run.side == perspective && run.is_sandwiched_by(opponent) {
            penalty += value;
        } else if run.side == opponent && run.is_sandwiched_by(perspective) {
            reward += value;
        }
    }

    (reward, penalty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flank_position;

    #[test]
    fn test_starting_position_is_balanced() {
        let board = Board::starting_position();
        assert_eq!(score(&board, Side::Triangle), 0);
        assert_eq!(score(&board, Side::Circle), 0);
    }

    #[test]
    fn test_material_dominates() {
        let board = flank_position! {
            .......
            .A.A.A.
            .......
            .......
            .......
            ...H...
            .......
        };
        assert_eq!(material_score(&board, Side::Triangle), 300);
        assert_eq!(score(&board, Side::Triangle), 60_000);
        assert_eq!(score(&board, Side::Circle), -60_000);
    }

    #[test]
    fn test_threats_count_capturing_moves() {
        let board = flank_position! {
            .......
            .......
            ...A...
            .AH....
            .......
            .......
            .......
        };
        // d5d4 closes b4 and d4 around c4
        assert_eq!(threat_score(&board, Side::Triangle), 5);
        assert_eq!(score(&board, Side::Triangle), 30_005);

        assert_eq!(threat_score(&board, Side::Circle), 0);
        assert_eq!(score(&board, Side::Circle), -30_000);
    }

    #[test]
    fn test_threats_penalize_self_capture() {
        let board = flank_position! {
            .......
            .......
            ...A...
            ..H.H..
            .......
            .......
            H......
        };
        // d5d4 walks into the gap and is captured; no other move changes material
        assert_eq!(threat_score(&board, Side::Triangle), -1);
    }

    #[test]
    fn test_sandwich_reward_and_penalty() {
        let board = flank_position! {
            .......
            .......
            .......
            .AHA...
            .......
            .......
            .......
        };
        assert_eq!(sandwich_scores(&board, Side::Triangle), (80, 0));
        assert_eq!(sandwich_scores(&board, Side::Circle), (0, 80));

        assert_eq!(score(&board, Side::Triangle), 30_000 + 800);
        assert_eq!(score(&board, Side::Circle), -30_000 - 1_600);
    }

    #[test]
    fn test_sandwich_scales_with_run_length() {
        let board = flank_position! {
            .......
            .......
            .......
            AHHHA..
            .......
            .......
            .......
        };
        assert_eq!(sandwich_scores(&board, Side::Triangle), (240, 0));
    }

    #[test]
    fn test_edge_does_not_sandwich() {
        let board = flank_position! {
            .......
            .......
            .......
            HHA....
            .......
            .......
            .......
        };
        assert_eq!(sandwich_scores(&board, Side::Triangle), (0, 0));
    }

    #[test]
    fn test_score_is_pure() {
        let board = Board::starting_position();
        let copy = board;
        score(&board, Side::Triangle);
        assert_eq!(board, copy);
    }
}
