use crate::game_state::chess_types::*;

/// Everything `make_move` destroys that `unmake_move` needs back.
///
/// Owned by the caller for exactly one ply and consumed by `unmake_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    /// Captured piece and the square it stood on (differs from the
    /// destination for en passant).
    pub captured: Option<(PieceKind, Square)>,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,

    pub prev_zobrist_key: u64,
}
