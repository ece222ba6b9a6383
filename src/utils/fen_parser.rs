//! FEN-to-GameState parser.
//!
//! Builds a fully-populated state from a Forsyth-Edwards Notation record:
//! piece bitboards, mailbox, rights, clocks, occupancies, and Zobrist key.
//! An empty (or whitespace-only) record is shorthand for the initial
//! position. Parsing is pure; on failure no partial state escapes.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_square;

/// The FEN field a parse failure was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenField {
    FieldCount,
    PiecePlacement,
    SideToMove,
    Castling,
    EnPassant,
    HalfmoveClock,
    FullmoveNumber,
}

impl fmt::Display for FenField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FenField::FieldCount => "field count",
            FenField::PiecePlacement => "piece placement",
            FenField::SideToMove => "side to move",
            FenField::Castling => "castling rights",
            FenField::EnPassant => "en-passant target",
            FenField::HalfmoveClock => "halfmove clock",
            FenField::FullmoveNumber => "fullmove number",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub field: FenField,
    pub detail: String,
}

impl ParseError {
    fn new(field: FenField, detail: impl Into<String>) -> Self {
        Self {
            field,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid FEN {}: {}", self.field, self.detail)
    }
}

impl Error for ParseError {}

pub fn parse_fen(fen: &str) -> Result<GameState, ParseError> {
    if fen.trim().is_empty() {
        return Ok(GameState::new_game());
    }

    let fields: Vec<&str> = fen.split_whitespace().collect();
    let &[board_part, side_part, castling_part, en_passant_part, halfmove_part, fullmove_part] =
        fields.as_slice()
    else {
        return Err(ParseError::new(
            FenField::FieldCount,
            format!("expected 6 space-separated fields, found {}", fields.len()),
        ));
    };

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part, &game_state)?;
    game_state.halfmove_clock = halfmove_part.parse::<u16>().map_err(|_| {
        ParseError::new(FenField::HalfmoveClock, format!("not a counter: {halfmove_part}"))
    })?;
    game_state.fullmove_number = fullmove_part.parse::<u16>().map_err(|_| {
        ParseError::new(FenField::FullmoveNumber, format!("not a counter: {fullmove_part}"))
    })?;

    game_state.refresh_zobrist_key();

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), ParseError> {
    let placement_error = |detail: String| ParseError::new(FenField::PiecePlacement, detail);

    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(placement_error(format!("expected 8 ranks, found {}", ranks.len())));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(placement_error(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(placement_error(format!("rank {} has more than 8 files", board_rank + 1)));
                }
                continue;
            }

            let (color, piece) = piece_from_fen_char(ch)
                .ok_or_else(|| placement_error(format!("invalid piece character '{ch}'")))?;

            if file >= 8 {
                return Err(placement_error(format!("rank {} has more than 8 files", board_rank + 1)));
            }
            if piece == PieceKind::Pawn && (board_rank == 0 || board_rank == 7) {
                return Err(placement_error(format!("pawn on back rank {}", board_rank + 1)));
            }
            if piece == PieceKind::King && game_state.pieces(color, PieceKind::King) != 0 {
                return Err(placement_error(format!("more than one {color:?} king")));
            }

            game_state.put_piece(color, piece, board_rank * 8 + file);
            file += 1;
        }

        if file != 8 {
            return Err(placement_error(format!("rank {} does not sum to 8 files", board_rank + 1)));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ParseError> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ParseError::new(FenField::SideToMove, format!("expected 'w' or 'b', found '{side_part}'"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ParseError> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        let flag = match ch {
            'K' => CASTLE_LIGHT_KINGSIDE,
            'Q' => CASTLE_LIGHT_QUEENSIDE,
            'k' => CASTLE_DARK_KINGSIDE,
            'q' => CASTLE_DARK_QUEENSIDE,
            _ => return Err(ParseError::new(FenField::Castling, format!("invalid character '{ch}'"))),
        };
        if rights & flag != 0 {
            return Err(ParseError::new(FenField::Castling, format!("repeated character '{ch}'")));
        }
        rights |= flag;
    }

    Ok(rights)
}

/// The target must sit directly behind an enemy pawn that could just have
/// double-pushed: target and the pawn's origin empty, the pawn in front.
fn parse_en_passant_square(
    en_passant_part: &str,
    game_state: &GameState,
) -> Result<Option<Square>, ParseError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|detail| ParseError::new(FenField::EnPassant, detail))?;

    let side_to_move = game_state.side_to_move;
    let expected_rank = match side_to_move {
        Color::Light => 5,
        Color::Dark => 2,
    };
    if rank_of(square) != expected_rank {
        return Err(ParseError::new(
            FenField::EnPassant,
            format!("{en_passant_part} is not a target square for {side_to_move:?} to move"),
        ));
    }

    let (pushed_to, pushed_from) = match side_to_move {
        Color::Light => (square - 8, square + 8),
        Color::Dark => (square + 8, square - 8),
    };

    let pushed_pawn = (side_to_move.opposite(), PieceKind::Pawn);
    if game_state.piece_on(square).is_some()
        || game_state.piece_on(pushed_from).is_some()
        || game_state.piece_on(pushed_to) != Some(pushed_pawn)
    {
        return Err(ParseError::new(
            FenField::EnPassant,
            format!("{en_passant_part} is not behind a pawn that just double-pushed"),
        ));
    }

    Ok(Some(square))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else {
        Color::Dark
    };

    PieceKind::from_letter(ch.to_ascii_lowercase()).map(|piece| (color, piece))
}
