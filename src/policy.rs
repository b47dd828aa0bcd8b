//! Threshold and quorum math shared by every voting mode.
//!
//! Ratios are expressed in parts of `RATIO_BASE` (1_000_000 = 100%). All products
//! are taken in `u128`, so no combination of `u64` tallies and ratios can overflow.

use crate::types::Tally;

pub const RATIO_BASE: u64 = 1_000_000;

/// Shortest allowed voting window: one hour.
pub const MIN_DURATION_LOWER_BOUND: u64 = 60 * 60;

/// Longest allowed voting window: 365 days.
pub const MIN_DURATION_UPPER_BOUND: u64 = 365 * 24 * 60 * 60;

/// `ceil(value * ratio / RATIO_BASE)`.
pub fn apply_ratio_ceiled(value: u64, ratio: u32) -> u64 {
    let product = value as u128 * ratio as u128;
    let base = RATIO_BASE as u128;
    ((product + base - 1) / base) as u64
}

pub fn is_valid_support_threshold(ratio: u32) -> bool {
    (ratio as u64) < RATIO_BASE
}

pub fn is_valid_min_participation(ratio: u32) -> bool {
    (ratio as u64) <= RATIO_BASE
}

pub fn is_valid_min_duration(min_duration: u64) -> bool {
    (MIN_DURATION_LOWER_BOUND..=MIN_DURATION_UPPER_BOUND).contains(&min_duration)
}

/// `yes / (yes + no) > threshold`, rearranged to avoid division.
pub fn support_threshold_reached(tally: &Tally, support_threshold: u32) -> bool {
    exceeds_threshold(tally.yes, tally.no, support_threshold)
}

/// Same comparison, with every member who has not voted yet counted as a `no`.
/// Once this holds no later vote can bring support back down to the threshold.
pub fn support_threshold_reached_early(
    tally: &Tally,
    total_voting_power: u64,
    support_threshold: u32,
) -> bool {
    let worst_case_no = total_voting_power
        .saturating_sub(tally.yes)
        .saturating_sub(tally.abstain);
    exceeds_threshold(tally.yes, worst_case_no, support_threshold)
}

pub fn min_participation_reached(tally: &Tally, min_voting_power: u64) -> bool {
    tally.total() >= min_voting_power
}

fn exceeds_threshold(yes: u64, no: u64, support_threshold: u32) -> bool {
    let threshold = support_threshold as u128;
    (RATIO_BASE as u128 - threshold) * yes as u128 > threshold * no as u128
}
