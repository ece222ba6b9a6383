//! Errors surfaced by the public perft entry point.
//!
//! Two user-facing kinds are reported before any search starts: a malformed
//! FEN record (`Parse`) and a depth that is negative or too large
//! (`InvalidDepth`). `Internal` wraps a move-generation invariant violation,
//! which a valid position never produces.

use std::error::Error;
use std::fmt;

use crate::move_generation::move_generator::MoveGenerationError;
use crate::utils::fen_parser::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PerftError {
    /// The position record could not be parsed.
    Parse(ParseError),
    /// Depth was negative or does not fit the search's depth type.
    InvalidDepth(i64),
    /// Search reached an impossible state.
    Internal(MoveGenerationError),
}

impl fmt::Display for PerftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerftError::Parse(err) => write!(f, "{err}"),
            PerftError::InvalidDepth(depth) => {
                write!(f, "invalid perft depth {depth}: expected a non-negative integer")
            }
            PerftError::Internal(err) => write!(f, "internal move generation error: {err}"),
        }
    }
}

impl Error for PerftError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PerftError::Parse(err) => Some(err),
            PerftError::InvalidDepth(_) => None,
            PerftError::Internal(err) => Some(err),
        }
    }
}

impl From<ParseError> for PerftError {
    fn from(err: ParseError) -> Self {
        PerftError::Parse(err)
    }
}

impl From<MoveGenerationError> for PerftError {
    fn from(err: MoveGenerationError) -> Self {
        PerftError::Internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::{parse_fen, FenField};

    #[test]
    fn parse_errors_keep_their_field_and_source() {
        let parse_error = parse_fen("8/8/8/8/8/8/8/8 w").expect_err("two fields must fail");
        assert_eq!(parse_error.field, FenField::FieldCount);

        let err = PerftError::from(parse_error.clone());
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), parse_error.to_string());
    }

    #[test]
    fn invalid_depth_has_no_source() {
        let err = PerftError::InvalidDepth(-3);
        assert!(err.source().is_none());
        assert!(err.to_string().contains("-3"));
    }
}
