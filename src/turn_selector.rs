//! Picks the acting side's whole turn: enumerates the one- or two-move sequences it may
//! play, scores each with the alpha-beta search and keeps the best.

use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;
use smallvec::smallvec;

use crate::alpha_beta_searcher::{alpha_beta_minimax, SearchContext, SearchError};
use crate::board::ending::{game_ending, required_moves};
use crate::board::side::Side;
use crate::board::Board;
use crate::moves::{legal_moves, Turn};

/// Every turn `side` may play from `board`.
///
/// With two moves required, these are the ordered pairs of moves from different pieces
/// where the second move is still legal once the first has been applied. A first move
/// that ends the game stands alone. If no pair works, each single move is a candidate.
pub fn candidate_turns(board: &Board, side: Side, move_limit: u32) -> Vec<Turn> {
    let moves = legal_moves(board, side);
    if required_moves(board, side) < 2 {
        return moves.into_iter().map(|m| smallvec![m]).collect();
    }

    let mut turns = Vec::new();
    for &first in &moves {
        let mut after_first = *board;
        after_first.apply_move_unchecked(first);

        if game_ending(&after_first, move_limit).is_some() {
            turns.push(smallvec![first]);
            continue;
        }

        for &second in &moves {
            if second == first || second.from == first.from {
                continue;
            }
            if after_first.validate_move(side, second).is_ok() {
                turns.push(smallvec![first, second]);
            }
        }
    }

    if turns.is_empty() {
        debug!("no legal move pairs for {}, falling back to single moves", side);
        return moves.into_iter().map(|m| smallvec![m]).collect();
    }

    turns
}

fn apply_turn(board: &Board, turn: &Turn) -> Board {
    let mut next = *board;
    for &game_move in turn {
        next.apply_move_unchecked(game_move);
    }
    next
}

/// Scores one candidate turn from the point of view of `side`, with the opponent to move.
fn score_turn(context: &SearchContext, board: &Board, side: Side, turn: &Turn) -> i32 {
    let after_turn = apply_turn(board, turn);
    alpha_beta_minimax(
        context,
        &after_turn,
        side,
        context.search_depth() - 1,
        i32::MIN,
        i32::MAX,
        false,
    )
}

/// Selects the turn `side` should play.
///
/// Candidates are searched concurrently on the rayon pool when the context is parallel.
/// The highest score wins; among equal scores the earliest candidate is kept.
pub fn select_turn(
    context: &mut SearchContext,
    board: &Board,
    side: Side,
) -> Result<Turn, SearchError> {
    if context.search_depth() < 1 {
        return Err(SearchError::DepthTooLow);
    }

    context.reset_stats();
    let start = Instant::now();

    let candidates = candidate_turns(board, side, context.move_limit());
    if candidates.is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }
    debug!(
        "searching {} candidate turns for {} at depth {}",
        candidates.len(),
        side,
        context.search_depth()
    );

    let scores: Vec<i32> = {
        let shared: &SearchContext = context;
        if shared.is_parallel() {
            candidates
                .par_iter()
                .map(|turn| score_turn(shared, board, side, turn))
                .collect()
        } else {
            candidates
                .iter()
                .map(|turn| score_turn(shared, board, side, turn))
                .collect()
        }
    };

    let seed = fastrand::usize(..candidates.len());
    let mut best_turn = &candidates[seed];
    let mut best_score = i32::MIN;
    for (turn, &score) in candidates.iter().zip(&scores) {
        if score > best_score {
            best_score = score;
            best_turn = turn;
        }
    }

    let duration = start.elapsed();
    context.record_result(best_score, duration);
    info!(
        "{} plays {} (score {}, {} positions, {:?})",
        side,
        format_turn(best_turn),
        best_score,
        context.searched_position_count(),
        duration
    );

    Ok(best_turn.clone())
}

pub fn format_turn(turn: &Turn) -> String {
    turn.iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::captures::captured_cells;
    use crate::board::coord::coords::*;
    use crate::flank_move;
    use crate::flank_position;

    fn assert_turn_is_legal(board: &Board, side: Side, turn: &Turn) {
        let mut board = *board;
        for &game_move in turn {
            board
                .apply_move(side, game_move)
                .unwrap_or_else(|e| panic!("{} is illegal: {}", game_move, e));
        }
    }

    #[test]
    fn test_starting_position_turn_has_two_moves() {
        let board = Board::starting_position();
        let mut context = SearchContext::with_config(2, 50, true);

        let turn = select_turn(&mut context, &board, Side::Triangle).unwrap();

        assert_eq!(turn.len(), 2);
        assert_ne!(turn[0].from, turn[1].from);
        assert_turn_is_legal(&board, Side::Triangle, &turn);
        assert!(context.last_score().is_some());
        assert!(context.last_search_duration().is_some());
    }

    #[test]
    fn test_single_piece_moves_once() {
        let board = flank_position! {
            . . . . . . .
            . . . . . . .
            . . . A . . .
            . . . . . . .
            . . . . . . .
            . H . . . H .
            . . . . . . .
        };
        let candidates = candidate_turns(&board, Side::Triangle, 50);
        assert_eq!(candidates.len(), 4);
        assert!(candidates.iter().all(|turn| turn.len() == 1));

        let mut context = SearchContext::with_config(2, 50, false);
        let turn = select_turn(&mut context, &board, Side::Triangle).unwrap();
        assert_eq!(turn.len(), 1);
        assert_turn_is_legal(&board, Side::Triangle, &turn);
    }

    #[test]
    fn test_pairs_use_distinct_pieces() {
        let board = Board::starting_position();
        let candidates = candidate_turns(&board, Side::Circle, 50);

        // No opening move captures, so every pair of different pieces heading for
        // different cells is a candidate.
        let moves = legal_moves(&board, Side::Circle);
        let expected = moves
            .iter()
            .flat_map(|a| moves.iter().map(move |b| (a, b)))
            .filter(|(a, b)| a.from != b.from && a.to != b.to)
            .count();
        assert_eq!(candidates.len(), expected);
        for turn in &candidates {
            assert_eq!(turn.len(), 2);
            assert_ne!(turn[0].from, turn[1].from);
        }
    }

    #[test]
    fn test_second_move_must_stay_legal() {
        // Both triangles want d4; the second one cannot follow the first.
        let board = flank_position! {
            . . . . . . .
            . . . . . . .
            . . . A . . .
            . . . . . . .
            . . . A . . .
            . . . . . . .
            H . . . . . H
        };
        let candidates = candidate_turns(&board, Side::Triangle, 50);
        let blocked: Turn = smallvec![flank_move!(D5, D4), flank_move!(D3, D4)];
        assert!(!candidates.contains(&blocked));
        let allowed: Turn = smallvec![flank_move!(D5, D4), flank_move!(D3, C3)];
        assert!(candidates.contains(&allowed));
    }

    #[test]
    fn test_falls_back_to_single_moves_when_no_pair_fits() {
        // Both triangles can only reach b7. Deliberately unresolved: a7 and c7 already
        // sit between the edge and a circle.
        let board = flank_position! {
            A . A H . . .
            H . H . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
        };
        let candidates = candidate_turns(&board, Side::Triangle, 50);
        let expected: Vec<Turn> = vec![
            smallvec![flank_move!(A7, B7)],
            smallvec![flank_move!(C7, B7)],
        ];
        assert_eq!(candidates, expected);
    }

    #[test]
    fn test_no_available_moves() {
        // Deliberately unresolved: capture resolution would remove a7.
        let board = flank_position! {
            A H . . . . .
            H . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
        };
        let mut context = SearchContext::new(2);
        assert_eq!(
            select_turn(&mut context, &board, Side::Triangle),
            Err(SearchError::NoAvailableMoves)
        );
    }

    #[test]
    fn test_depth_too_low() {
        let mut context = SearchContext::new(0);
        assert_eq!(
            select_turn(&mut context, &Board::starting_position(), Side::Triangle),
            Err(SearchError::DepthTooLow)
        );
    }

    #[test]
    fn test_prefers_capturing_turn() {
        // b2 to b3 sandwiches b4 between two triangles on the b file.
        let board = flank_position! {
            . . . . . . H
            . . . . . . .
            . A . . . . .
            . H . . . . .
            . . . . . . .
            . A . . . . .
            . . . . . . A
        };
        assert!(captured_cells(&board).is_empty());

        let mut context = SearchContext::with_config(1, 50, true);
        let turn = select_turn(&mut context, &board, Side::Triangle).unwrap();

        assert_turn_is_legal(&board, Side::Triangle, &turn);
        assert!(turn.contains(&flank_move!(B2, B3)));
        let after = apply_turn(&board, &turn);
        assert_eq!(after.count(Side::Circle), 1);
        assert_eq!(after.count(Side::Triangle), 3);
    }

    #[test]
    fn test_parallel_and_sequential_pick_the_same_turn() {
        let board = flank_position! {
            . . . . . . .
            . . H . . . .
            . A . A . . .
            . . . H . . .
            . . A . . H .
            . . . . . . .
            . . . . . . .
        };
        let mut parallel = SearchContext::with_config(3, 50, true);
        let mut sequential = SearchContext::with_config(3, 50, true);
        sequential.set_parallel(false);
        assert!(parallel.is_parallel());
        assert!(!sequential.is_parallel());

        let a = select_turn(&mut parallel, &board, Side::Circle).unwrap();
        let b = select_turn(&mut sequential, &board, Side::Circle).unwrap();

        assert_eq!(a, b);
        assert_eq!(parallel.last_score(), sequential.last_score());
    }
}
