//! Perft: exhaustive leaf counting over the legal move tree.
//!
//! `perft` is the fast path (bulk-counts the last ply). `perft_with_counts`
//! classifies every leaf move, `perft_divide` splits the count by root move,
//! and `perft_multi_threaded` fans the root out over scoped threads.

use std::thread;

use crate::errors::PerftError;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::game_state::chess_rules::castling_path_for;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::attackers_to_square;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError, MoveGenerator};
use crate::moves::move_descriptions::{Move, MoveKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub discovery_checks: u64,
    pub double_checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    pub fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.discovery_checks += rhs.discovery_checks;
        self.double_checks += rhs.double_checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf count of one root move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivideEntry {
    pub mv: Move,
    pub nodes: u64,
}

/// Count leaf nodes `depth` plies below `game_state`. The state is restored
/// before returning, including on error.
pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u32,
) -> MoveGenResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = generator.generate_legal_moves(game_state)?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for mv in moves {
        let undo = make_move(game_state, mv);
        let subtree = perft(generator, game_state, depth - 1);
        unmake_move(game_state, mv, undo);
        nodes += subtree?;
    }

    Ok(nodes)
}

pub fn perft_with_counts<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u32,
) -> MoveGenResult<PerftCounts> {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }

    perft_counts_recurse(generator, game_state, depth, &mut counts)?;
    Ok(counts)
}

fn perft_counts_recurse<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u32,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    let moves = generator.generate_legal_moves(game_state)?;
    for mv in moves {
        let undo = make_move(game_state, mv);
        let result = if depth == 1 {
            classify_leaf(generator, game_state, mv, counts)
        } else {
            perft_counts_recurse(generator, game_state, depth - 1, counts)
        };
        unmake_move(game_state, mv, undo);
        result?;
    }
    Ok(())
}

/// Tally one leaf. `game_state` is the position right after `mv`.
fn classify_leaf<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    mv: Move,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    counts.nodes += 1;

    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.kind() == MoveKind::EnPassant {
        counts.en_passant += 1;
    }
    if mv.is_castle() {
        counts.castles += 1;
    }
    if mv.promotion_piece().is_some() {
        counts.promotions += 1;
    }

    let defender = game_state.side_to_move();
    let Some(king_sq) = game_state.king_square(defender) else {
        return Ok(());
    };
    let checkers = attackers_to_square(game_state, king_sq, defender.opposite());
    if checkers == 0 {
        return Ok(());
    }

    counts.checks += 1;
    if checkers.count_ones() >= 2 {
        counts.double_checks += 1;
    } else if checkers & moved_pieces_mask(mv) == 0 {
        counts.discovery_checks += 1;
    }

    if generator.generate_legal_moves(game_state)?.is_empty() {
        counts.checkmates += 1;
    }

    Ok(())
}

/// Squares the moving side's pieces landed on, the castling rook included.
fn moved_pieces_mask(mv: Move) -> u64 {
    let rook = if mv.is_castle() {
        castling_path_for(mv.from(), mv.to()).map_or(0, |path| square_bit(path.rook_to))
    } else {
        0
    };
    square_bit(mv.to()) | rook
}

/// Per-root-move leaf counts, in generation order. Empty at depth 0.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u32,
) -> MoveGenResult<Vec<DivideEntry>> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    let moves = generator.generate_legal_moves(game_state)?;
    let mut entries = Vec::with_capacity(moves.len());
    for mv in moves {
        let undo = make_move(game_state, mv);
        let nodes = perft(generator, game_state, depth - 1);
        unmake_move(game_state, mv, undo);
        entries.push(DivideEntry { mv, nodes: nodes? });
    }

    Ok(entries)
}

/// Same count as `perft`, with each root move's subtree searched on its own
/// thread against a private copy of the position.
pub fn perft_multi_threaded<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u32,
) -> MoveGenResult<u64> {
    let mut root = game_state.clone();
    if depth <= 1 {
        return perft(generator, &mut root, depth);
    }

    let root_moves = generator.generate_legal_moves(&mut root)?;

    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .into_iter()
            .map(|mv| {
                let mut local = root.clone();
                scope.spawn(move || {
                    make_move(&mut local, mv);
                    perft(generator, &mut local, depth - 1)
                })
            })
            .collect();

        // Join every worker before looking at any result.
        let results: Vec<MoveGenResult<u64>> = handles
            .into_iter()
            .map(|handle| {
                handle.join().unwrap_or_else(|_| {
                    Err(MoveGenerationError::InvalidState(
                        "perft worker thread panicked".to_owned(),
                    ))
                })
            })
            .collect();

        results.into_iter().sum()
    })
}

/// Count leaf nodes `depth` plies below the position in `notation`.
///
/// An empty (or blank) `notation` means the standard starting position.
/// Depth 0 counts the root itself, so the result is 1.
pub fn run_perft(notation: &str, depth: i64) -> Result<u64, PerftError> {
    let depth = u32::try_from(depth).map_err(|_| PerftError::InvalidDepth(depth))?;
    let game_state = GameState::from_fen(notation)?;
    Ok(perft_multi_threaded(&LegalMoveGenerator, &game_state, depth)?)
}
