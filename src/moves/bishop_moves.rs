//! Bishop attacks through the shared magic tables.

use crate::moves::magic_tables::bishop_lookup;

#[inline]
pub fn bishop_attacks(square: u8, occupancy: u64) -> u64 {
    bishop_lookup(square, occupancy)
}
