#![warn(clippy::all, clippy::pedantic)]

// Game board dimensions
pub const BOARD_WIDTH: usize = 8;
pub const BOARD_HEIGHT: usize = 8;

// Number of distinct gem colors in the palette
pub const COLOR_COUNT: usize = 5;

// Shortest sequence of equal gems that forms a run
pub const MIN_RUN_LENGTH: usize = 3;

// Run scoring
pub const POINTS_RUN: u32 = 30; // Base points for the first three gems of a run
pub const POINTS_EXTRA_GEM: u32 = 10; // Points for every gem beyond the third

// Bonus tuning
pub const POINTS_BOMB: u32 = 50; // Awarded each time a bomb goes off
pub const BOMB_BLAST_COUNT: usize = 4; // Random cells destroyed by a single bomb
pub const BONUS_DROP_PERCENT: u8 = 10; // Chance (out of 100) of a new bonus after each run

// Pacing between visible cascade steps, in milliseconds
pub const SWAP_REVERT_MS: u64 = 500;
pub const RUN_CLEARED_MS: u64 = 500;
pub const BONUS_TRIGGERED_MS: u64 = 1000;

/// Points for clearing a run of `length` gems, bonuses excluded.
#[must_use]
pub fn run_points(length: usize) -> u32 {
    let extra = length.saturating_sub(MIN_RUN_LENGTH);
    let extra = u32::try_from(extra).unwrap_or(u32::MAX);
    POINTS_RUN.saturating_add(POINTS_EXTRA_GEM.saturating_mul(extra))
}
