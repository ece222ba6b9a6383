//! Core incremental board state representation.
//!
//! `GameState` stores piece bitboards, occupancy caches, a mailbox mirror for
//! constant-time square lookups, turn/rights flags, clocks, and the Zobrist
//! key. Outside the crate it is read-only: positions are created by the FEN
//! parser and changed only through `make_move` / `unmake_move`.

use std::fmt;

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::game_state::zobrist::{
    castling_key, en_passant_key, piece_square_key, side_to_move_key,
};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::{parse_fen, ParseError};
use crate::utils::render_game_state::render_game_state;

/// Incremental game state optimized for fast move making/unmaking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // [color][piece_kind]
    pub(crate) pieces: [[u64; 6]; 2],

    pub(crate) occupancy_by_color: [u64; 2],
    pub(crate) occupancy_all: u64,

    pub(crate) mailbox: [Option<Piece>; 64],

    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,

    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,

    pub(crate) zobrist_key: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,
            mailbox: [None; 64],

            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,

            zobrist_key: 0,
        }
    }
}

impl GameState {
    #[inline]
    pub(crate) fn new_empty() -> Self {
        Self::default()
    }

    /// Standard initial position.
    pub fn new_game() -> Self {
        let mut game_state = Self::new_empty();
        for (square, piece) in starting_layout() {
            game_state.put_piece(piece.0, piece.1, square);
        }
        game_state.castling_rights = CASTLE_ALL;
        game_state.refresh_zobrist_key();
        game_state
    }

    /// Parse a FEN record. An empty string maps to the initial position.
    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    // --- Read-only queries ---

    #[inline]
    pub fn pieces(&self, color: Color, piece: PieceKind) -> u64 {
        self.pieces[color.index()][piece.index()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> u64 {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn occupancy_all(&self) -> u64 {
        self.occupancy_all
    }

    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.mailbox[square as usize]
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn zobrist_key(&self) -> u64 {
        self.zobrist_key
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let kings = self.pieces(color, PieceKind::King);
        if kings == 0 {
            None
        } else {
            Some(kings.trailing_zeros() as Square)
        }
    }

    // --- Crate-internal mutation primitives (used by the parser and make/unmake) ---

    #[inline]
    pub(crate) fn put_piece(&mut self, color: Color, piece: PieceKind, square: Square) {
        debug_assert!(self.mailbox[square as usize].is_none(), "square {square} already occupied");
        let bit = square_bit(square);
        self.pieces[color.index()][piece.index()] |= bit;
        self.occupancy_by_color[color.index()] |= bit;
        self.occupancy_all |= bit;
        self.mailbox[square as usize] = Some((color, piece));
        self.zobrist_key ^= piece_square_key(color, piece, square);
    }

    #[inline]
    pub(crate) fn remove_piece(&mut self, color: Color, piece: PieceKind, square: Square) {
        debug_assert_eq!(
            self.mailbox[square as usize],
            Some((color, piece)),
            "mailbox and bitboards disagree on square {square}"
        );
        let bit = square_bit(square);
        self.pieces[color.index()][piece.index()] &= !bit;
        self.occupancy_by_color[color.index()] &= !bit;
        self.occupancy_all &= !bit;
        self.mailbox[square as usize] = None;
        self.zobrist_key ^= piece_square_key(color, piece, square);
    }

    #[inline]
    pub(crate) fn relocate_piece(&mut self, color: Color, piece: PieceKind, from: Square, to: Square) {
        self.remove_piece(color, piece, from);
        self.put_piece(color, piece, to);
    }

    #[inline]
    pub(crate) fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.zobrist_key ^= castling_key(self.castling_rights) ^ castling_key(rights);
        self.castling_rights = rights;
    }

    #[inline]
    pub(crate) fn set_en_passant_square(&mut self, square: Option<Square>) {
        self.zobrist_key ^= en_passant_key(self.en_passant_square) ^ en_passant_key(square);
        self.en_passant_square = square;
    }

    #[inline]
    pub(crate) fn flip_side_to_move(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
        self.zobrist_key ^= side_to_move_key();
    }

    pub(crate) fn refresh_zobrist_key(&mut self) {
        self.zobrist_key = crate::game_state::zobrist::compute_zobrist_key(self);
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", render_game_state(self))?;
        write!(f, "{}", self.get_fen())
    }
}

fn starting_layout() -> impl Iterator<Item = (Square, Piece)> {
    const BACK_RANK: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    (0..8u8).flat_map(|file| {
        let back = BACK_RANK[file as usize];
        [
            (file, (Color::Light, back)),
            (8 + file, (Color::Light, PieceKind::Pawn)),
            (48 + file, (Color::Dark, PieceKind::Pawn)),
            (56 + file, (Color::Dark, back)),
        ]
    })
}
