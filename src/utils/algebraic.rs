//! Square coordinate conversions (`e4` <-> 28).

use crate::game_state::chess_types::{file_of, rank_of, Square};

/// Convert a coordinate such as `"e4"` to a square index.
pub fn algebraic_to_square(text: &str) -> Result<Square, String> {
    let &[file, rank] = text.as_bytes() else {
        return Err(format!("Invalid algebraic square: {text}"));
    };

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", char::from(file)));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", char::from(rank)));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Convert a square index (`0..=63`) to its coordinate, e.g. `"e4"`.
pub fn square_to_algebraic(square: Square) -> String {
    debug_assert!(square < 64, "square index out of bounds: {square}");
    let mut out = String::with_capacity(2);
    out.push(char::from(b'a' + file_of(square)));
    out.push(char::from(b'1' + rank_of(square)));
    out
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};

    #[test]
    fn corner_squares_convert_both_ways() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 0);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), 63);
        assert_eq!(square_to_algebraic(0), "a1");
        assert_eq!(square_to_algebraic(28), "e4");
    }

    #[test]
    fn malformed_coordinates_are_rejected() {
        assert!(algebraic_to_square("i1").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("e").is_err());
        assert!(algebraic_to_square("e44").is_err());
    }
}
