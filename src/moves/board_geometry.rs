//! Board geometry shared by the attack tables.
//!
//! Everything here works in (file, rank) coordinates so that steps which
//! would wrap around a board edge are rejected instead of silently landing
//! on the next rank.

pub type Step = (i32, i32);

pub const ROOK_DIRECTIONS: [Step; 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const BISHOP_DIRECTIONS: [Step; 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

pub const KNIGHT_OFFSETS: [Step; 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KING_OFFSETS: [Step; 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[inline]
pub const fn on_board(file: i32, rank: i32) -> bool {
    file >= 0 && file < 8 && rank >= 0 && rank < 8
}

#[inline]
pub const fn bit_at(file: i32, rank: i32) -> u64 {
    1u64 << (rank * 8 + file)
}

/// Attack table for a piece that jumps by fixed offsets.
pub const fn leaper_table(offsets: &[Step]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;

        let mut i = 0;
        while i < offsets.len() {
            let (df, dr) = offsets[i];
            if on_board(file + df, rank + dr) {
                attacks |= bit_at(file + df, rank + dr);
            }
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

/// Slider attacks found by walking each ray until the first blocker
/// (inclusive). Reference implementation for building the magic tables.
pub fn ray_attacks(square: u8, occupancy: u64, directions: &[Step]) -> u64 {
    let mut attacks = 0u64;

    for &(df, dr) in directions {
        let mut file = (square % 8) as i32 + df;
        let mut rank = (square / 8) as i32 + dr;

        while on_board(file, rank) {
            let bit = bit_at(file, rank);
            attacks |= bit;
            if occupancy & bit != 0 {
                break;
            }
            file += df;
            rank += dr;
        }
    }

    attacks
}

/// Squares whose occupancy can change a slider's attack set: every ray
/// square except the last one before the board edge.
pub fn relevant_occupancy(square: u8, directions: &[Step]) -> u64 {
    let mut mask = 0u64;

    for &(df, dr) in directions {
        let mut file = (square % 8) as i32 + df;
        let mut rank = (square / 8) as i32 + dr;

        while on_board(file + df, rank + dr) {
            mask |= bit_at(file, rank);
            file += df;
            rank += dr;
        }
    }

    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relevant_rook_mask_excludes_edges() {
        let a1 = relevant_occupancy(0, &ROOK_DIRECTIONS);
        assert_eq!(a1.count_ones(), 12);
        assert_eq!(a1 & bit_at(0, 7), 0);
        assert_eq!(a1 & bit_at(7, 0), 0);

        let d4 = relevant_occupancy(27, &ROOK_DIRECTIONS);
        assert_eq!(d4.count_ones(), 10);
    }

    #[test]
    fn relevant_bishop_mask_from_corner_and_center() {
        assert_eq!(relevant_occupancy(0, &BISHOP_DIRECTIONS).count_ones(), 6);
        assert_eq!(relevant_occupancy(27, &BISHOP_DIRECTIONS).count_ones(), 9);
    }

    #[test]
    fn rays_stop_on_first_blocker() {
        let blocker_on_a4 = 1u64 << 24;
        let attacks = ray_attacks(0, blocker_on_a4, &ROOK_DIRECTIONS);
        assert_ne!(attacks & (1u64 << 24), 0);
        assert_eq!(attacks & (1u64 << 32), 0);
        assert_eq!(attacks.count_ones(), 10);
    }
}
