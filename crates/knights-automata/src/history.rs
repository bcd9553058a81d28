//! Bounded, time-indexed output history.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of past outputs each link retains, and the window the pattern
/// detector searches for periods.
pub const PATTERN_LOOKBACK: usize = 20;

/// Fixed-capacity ring of binary outputs keyed by time step.
///
/// Slot `t % PATTERN_LOOKBACK` holds the output for time `t`. Writing time
/// `t` evicts time `t - PATTERN_LOOKBACK` once the ring is full, so at most
/// [`PATTERN_LOOKBACK`] entries are ever retained.
///
/// The history is never empty: it is created with the output for time 0.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OutputHistory {
    bits: [u8; PATTERN_LOOKBACK],
    /// Time of the newest entry.
    time: u64,
    /// Number of retained entries (1..=PATTERN_LOOKBACK).
    len: usize,
}

impl OutputHistory {
    /// Creates a history holding a single output at time 0.
    pub fn new(seed: u8) -> Self {
        let mut bits = [0; PATTERN_LOOKBACK];
        bits[0] = seed & 1;
        Self { bits, time: 0, len: 1 }
    }

    /// Appends the output for the next time step.
    pub fn push(&mut self, bit: u8) {
        self.time += 1;
        self.bits[Self::slot(self.time)] = bit & 1;
        self.len = (self.len + 1).min(PATTERN_LOOKBACK);
    }

    /// Overwrites the newest output in place.
    pub fn set_latest(&mut self, bit: u8) {
        self.bits[Self::slot(self.time)] = bit & 1;
    }

    /// Returns the time of the newest entry.
    pub fn time(&self) -> u64 {
        self.time
    }

    /// Returns the time of the oldest retained entry.
    pub fn oldest_time(&self) -> u64 {
        self.time + 1 - self.len as u64
    }

    /// Returns how many entries are retained.
    pub fn retained(&self) -> usize {
        self.len
    }

    /// Returns the newest output.
    pub fn latest(&self) -> u8 {
        self.bits[Self::slot(self.time)]
    }

    /// Returns the output at `time`, or `None` if it is in the future or has
    /// been evicted.
    pub fn get(&self, time: u64) -> Option<u8> {
        if time > self.time || time < self.oldest_time() {
            return None;
        }
        Some(self.bits[Self::slot(time)])
    }

    /// Iterates retained outputs from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (self.oldest_time()..=self.time).map(|t| self.bits[Self::slot(t)])
    }

    fn slot(time: u64) -> usize {
        (time % PATTERN_LOOKBACK as u64) as usize
    }
}
