//! Move value type.
//!
//! A `Move` records everything the make/unmake engine needs without looking
//! at the board again: squares, moving piece, captured piece, promotion
//! piece, and the special-move tag. Moves are immutable once generated.

use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    DoublePawnPush,
    EnPassant,
    CastleKingside,
    CastleQueenside,
    Promotion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    moved_piece: PieceKind,
    captured_piece: Option<PieceKind>,
    promotion_piece: Option<PieceKind>,
    kind: MoveKind,
}

impl Move {
    /// Plain move or capture by any piece.
    #[inline]
    pub const fn normal(
        from: Square,
        to: Square,
        moved_piece: PieceKind,
        captured_piece: Option<PieceKind>,
    ) -> Self {
        Self {
            from,
            to,
            moved_piece,
            captured_piece,
            promotion_piece: None,
            kind: MoveKind::Normal,
        }
    }

    #[inline]
    pub const fn double_pawn_push(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            moved_piece: PieceKind::Pawn,
            captured_piece: None,
            promotion_piece: None,
            kind: MoveKind::DoublePawnPush,
        }
    }

    #[inline]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            moved_piece: PieceKind::Pawn,
            captured_piece: Some(PieceKind::Pawn),
            promotion_piece: None,
            kind: MoveKind::EnPassant,
        }
    }

    #[inline]
    pub const fn castle(from: Square, to: Square, kingside: bool) -> Self {
        Self {
            from,
            to,
            moved_piece: PieceKind::King,
            captured_piece: None,
            promotion_piece: None,
            kind: if kingside {
                MoveKind::CastleKingside
            } else {
                MoveKind::CastleQueenside
            },
        }
    }

    #[inline]
    pub const fn promotion(
        from: Square,
        to: Square,
        captured_piece: Option<PieceKind>,
        promotion_piece: PieceKind,
    ) -> Self {
        Self {
            from,
            to,
            moved_piece: PieceKind::Pawn,
            captured_piece,
            promotion_piece: Some(promotion_piece),
            kind: MoveKind::Promotion,
        }
    }

    #[inline]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[inline]
    pub const fn moved_piece(&self) -> PieceKind {
        self.moved_piece
    }

    #[inline]
    pub const fn captured_piece(&self) -> Option<PieceKind> {
        self.captured_piece
    }

    #[inline]
    pub const fn promotion_piece(&self) -> Option<PieceKind> {
        self.promotion_piece
    }

    #[inline]
    pub const fn kind(&self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::CastleKingside | MoveKind::CastleQueenside)
    }

    /// Square the captured piece stands on: the destination, except for en
    /// passant where it is beside the origin on the destination file.
    #[inline]
    pub const fn capture_square(&self) -> Square {
        match self.kind {
            MoveKind::EnPassant => (self.from & !7) | (self.to & 7),
            _ => self.to,
        }
    }
}

/// Long algebraic form, e.g. `e2e4`, `e7e8q`, `e1g1`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(self.from))?;
        f.write_str(&square_to_algebraic(self.to))?;
        if let Some(piece) = self.promotion_piece {
            write!(f, "{}", piece.letter())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn en_passant_captures_beside_origin() {
        // e5xd6 e.p. removes the pawn on d5.
        let mv = Move::en_passant(36, 43);
        assert_eq!(mv.capture_square(), 35);
        // d4xe3 e.p. removes the pawn on e4.
        let mv = Move::en_passant(27, 20);
        assert_eq!(mv.capture_square(), 28);
    }

    #[test]
    fn promotion_reports_new_piece_and_text() {
        let mv = Move::promotion(52, 61, Some(PieceKind::Bishop), PieceKind::Knight);
        assert!(mv.is_capture());
        assert_eq!(mv.promotion_piece(), Some(PieceKind::Knight));
        assert_eq!(mv.moved_piece(), PieceKind::Pawn);
        assert_eq!(mv.to_string(), "e7f8n");
    }

    #[test]
    fn castle_is_rendered_as_king_move() {
        let mv = Move::castle(4, 6, true);
        assert!(mv.is_castle());
        assert_eq!(mv.kind(), MoveKind::CastleKingside);
        assert_eq!(mv.to_string(), "e1g1");
    }
}
