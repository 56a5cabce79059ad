//! Cycle detection for repeatedly applied transforms.
//!
//! Simulations that apply the same step a huge number of times usually fall
//! into a loop after a short lead-in. Recording every state seen lets the
//! remaining iterations be skipped with modular arithmetic.

use std::collections::HashMap;
use std::hash::Hash;

/// Where a sequence starts repeating.
///
/// State `offset + k` equals state `offset + k + period` for every `k >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cycle {
    pub offset: usize,
    pub period: usize,
}

impl Cycle {
    /// Index into the first `offset + period` states that holds the state
    /// reached after `n` steps.
    pub fn fold(self, n: usize) -> usize {
        if n < self.offset {
            n
        } else {
            self.offset + (n - self.offset) % self.period
        }
    }
}

/// Records states in order and spots the first repeat.
///
/// Lookups are keyed by the full state. Equality decides a match, so two
/// distinct states never alias.
#[derive(Debug, Clone)]
pub struct CycleDetector<S> {
    seen: HashMap<S, usize>,
    history: Vec<S>,
}

impl<S> Default for CycleDetector<S> {
    fn default() -> Self {
        Self {
            seen: HashMap::new(),
            history: Vec::new(),
        }
    }
}

impl<S: Clone + Eq + Hash> CycleDetector<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the next state. Returns the cycle if `state` was seen before,
    /// in which case it is not recorded again.
    pub fn observe(&mut self, state: S) -> Option<Cycle> {
        let index = self.history.len();
        if let Some(&first) = self.seen.get(&state) {
            return Some(Cycle {
                offset: first,
                period: index - first,
            });
        }
        self.seen.insert(state.clone(), index);
        self.history.push(state);
        None
    }

    /// States recorded so far; index `i` is the state after `i` steps.
    pub fn history(&self) -> &[S] {
        &self.history
    }

    /// State after `n` steps once `cycle` is known.
    pub fn state_at(&self, cycle: Cycle, n: usize) -> Option<&S> {
        self.history.get(cycle.fold(n))
    }
}

/// Apply `step` from `initial` at most `limit` times, stopping at the first
/// repeated state.
///
/// A sequence with offset `O` and period `P` is reported whenever
/// `limit >= O + P`.
pub fn detect_cycle<S, F>(initial: S, mut step: F, limit: usize) -> Option<Cycle>
where
    S: Clone + Eq + Hash,
    F: FnMut(&S) -> S,
{
    let mut detector = CycleDetector::new();
    detector.observe(initial.clone());
    let mut state = initial;
    for _ in 0..limit {
        state = step(&state);
        if let Some(cycle) = detector.observe(state.clone()) {
            log::debug!("detect_cycle: offset {} period {}", cycle.offset, cycle.period);
            return Some(cycle);
        }
    }
    log::debug!("detect_cycle: no repeat within {limit} steps");
    None
}

/// The state after applying `step` `total` times to `initial`.
///
/// Runs the transform directly until either `total` steps are done or a
/// repeat shows up, then jumps ahead by whole periods.
pub fn state_after<S, F>(initial: S, total: usize, mut step: F) -> S
where
    S: Clone + Eq + Hash,
    F: FnMut(&S) -> S,
{
    let mut detector = CycleDetector::new();
    let mut state = initial;
    for n in 0..total {
        let next = step(&state);
        if let Some(cycle) = detector.observe(state) {
            log::debug!(
                "state_after: cycle at step {n}, offset {} period {}",
                cycle.offset,
                cycle.period
            );
            if let Some(s) = detector.state_at(cycle, total) {
                return s.clone();
            }
        }
        state = next;
    }
    state
}
