//! Rook attacks through the shared magic tables.

use crate::moves::magic_tables::rook_lookup;

#[inline]
pub fn rook_attacks(square: u8, occupancy: u64) -> u64 {
    rook_lookup(square, occupancy)
}
