//! Magic-indexed attack tables for sliding pieces.
//!
//! For every square, the relevant blocker mask is multiplied by a magic
//! number so that each blocker subset hashes to a slot holding its exact
//! attack set. Magics are searched at first use with a fixed-seed generator,
//! so the tables are deterministic. They are built exactly once and shared
//! read-only across threads afterwards.

use std::sync::OnceLock;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::moves::board_geometry::{
    ray_attacks, relevant_occupancy, Step, BISHOP_DIRECTIONS, ROOK_DIRECTIONS,
};

const MAGIC_SEED: u64 = 0x5EED_B15B_0A0F;

#[derive(Debug, Clone, Copy, Default)]
struct MagicEntry {
    mask: u64,
    magic: u64,
    shift: u32,
    offset: usize,
}

impl MagicEntry {
    #[inline]
    fn index(&self, occupancy: u64) -> usize {
        self.offset + ((occupancy & self.mask).wrapping_mul(self.magic) >> self.shift) as usize
    }
}

struct SliderTables {
    rook: [MagicEntry; 64],
    bishop: [MagicEntry; 64],
    attacks: Vec<u64>,
}

static TABLES: OnceLock<SliderTables> = OnceLock::new();

#[inline]
fn tables() -> &'static SliderTables {
    TABLES.get_or_init(build_tables)
}

/// Force table construction, e.g. before timing a benchmark.
pub fn init_slider_tables() {
    tables();
}

#[inline]
pub fn rook_lookup(square: u8, occupancy: u64) -> u64 {
    let tables = tables();
    tables.attacks[tables.rook[square as usize].index(occupancy)]
}

#[inline]
pub fn bishop_lookup(square: u8, occupancy: u64) -> u64 {
    let tables = tables();
    tables.attacks[tables.bishop[square as usize].index(occupancy)]
}

fn build_tables() -> SliderTables {
    let mut rng = StdRng::seed_from_u64(MAGIC_SEED);
    let mut attacks = Vec::new();

    let rook = build_entries(&ROOK_DIRECTIONS, &mut attacks, &mut rng);
    let bishop = build_entries(&BISHOP_DIRECTIONS, &mut attacks, &mut rng);

    SliderTables {
        rook,
        bishop,
        attacks,
    }
}

fn build_entries(directions: &[Step], attacks: &mut Vec<u64>, rng: &mut StdRng) -> [MagicEntry; 64] {
    let mut entries = [MagicEntry::default(); 64];

    for (square, entry) in (0..64u8).zip(entries.iter_mut()) {
        let mask = relevant_occupancy(square, directions);
        let shift = 64 - mask.count_ones();

        let occupancies = blocker_subsets(mask);
        let references: Vec<u64> = occupancies
            .iter()
            .map(|&occupancy| ray_attacks(square, occupancy, directions))
            .collect();

        let (magic, table) = find_magic(mask, shift, &occupancies, &references, rng);

        *entry = MagicEntry {
            mask,
            magic,
            shift,
            offset: attacks.len(),
        };
        attacks.extend_from_slice(&table);
    }

    entries
}

/// Every subset of `mask` (Carry-Rippler enumeration), starting with the empty set.
fn blocker_subsets(mask: u64) -> Vec<u64> {
    let mut subsets = Vec::with_capacity(1 << mask.count_ones());
    let mut subset = 0u64;
    loop {
        subsets.push(subset);
        subset = subset.wrapping_sub(mask) & mask;
        if subset == 0 {
            break;
        }
    }
    subsets
}

fn find_magic(
    mask: u64,
    shift: u32,
    occupancies: &[u64],
    references: &[u64],
    rng: &mut StdRng,
) -> (u64, Vec<u64>) {
    let size = 1usize << (64 - shift);
    let mut table = vec![0u64; size];
    // Slot ownership per attempt, so the table is not cleared between attempts.
    let mut epoch = vec![0u32; size];
    let mut attempt = 0u32;

    loop {
        // Sparse candidates hash far better.
        let magic = rng.random::<u64>() & rng.random::<u64>() & rng.random::<u64>();
        if (mask.wrapping_mul(magic) >> 56).count_ones() < 6 {
            continue;
        }

        attempt += 1;
        let mut collided = false;

        for (&occupancy, &reference) in occupancies.iter().zip(references) {
            let index = (occupancy.wrapping_mul(magic) >> shift) as usize;
            if epoch[index] != attempt {
                epoch[index] = attempt;
                table[index] = reference;
            } else if table[index] != reference {
                collided = true;
                break;
            }
        }

        if !collided {
            return (magic, table);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subsets_cover_every_combination() {
        let mask = (1u64 << 3) | (1u64 << 17) | (1u64 << 40);
        let subsets = blocker_subsets(mask);
        assert_eq!(subsets.len(), 8);
        assert!(subsets.iter().all(|subset| subset & !mask == 0));
        assert_eq!(subsets[0], 0);
    }

    #[test]
    fn lookups_match_ray_walks_for_every_blocker_subset() {
        for square in 0..64u8 {
            for (directions, lookup) in [
                (&ROOK_DIRECTIONS, rook_lookup as fn(u8, u64) -> u64),
                (&BISHOP_DIRECTIONS, bishop_lookup as fn(u8, u64) -> u64),
            ] {
                let mask = relevant_occupancy(square, directions);
                for occupancy in blocker_subsets(mask) {
                    assert_eq!(
                        lookup(square, occupancy),
                        ray_attacks(square, occupancy, directions),
                        "square {square} occupancy {occupancy:#x}"
                    );
                }
            }
        }
    }

    #[test]
    fn irrelevant_occupancy_is_ignored() {
        let edges = 0xFF00_0000_0000_00FFu64 | 0x8181_8181_8181_8181u64;
        assert_eq!(rook_lookup(27, edges), ray_attacks(27, edges, &ROOK_DIRECTIONS));
        assert_eq!(bishop_lookup(27, edges), ray_attacks(27, edges, &BISHOP_DIRECTIONS));
    }
}
