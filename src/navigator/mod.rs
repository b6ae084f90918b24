//! Replay navigation state machine
//!
//! [`Navigator`] owns the [`PathSet`] and the only mutable state of a session:
//! which path is active and how many of its points have been revealed.
//!
//! # Invariants
//!
//! After every operation:
//! - the active path has at least two points
//! - `0 <= progress <= active_len - 1`
//!
//! # Boundary policy
//!
//! Navigation clamps. [`Navigator::select_next`] past the last selectable path
//! (and [`Navigator::select_previous`] before the first) returns an
//! [`ExhaustedError`] and leaves the state exactly as it was, so the caller can
//! report it and carry on.

use crate::paths::{Path, PathSet};
use std::fmt;

/// Scan direction for path selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "after"),
            Direction::Backward => write!(f, "before"),
        }
    }
}

/// No selectable path exists in the requested direction
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no path with at least two points {direction} index {from}")]
pub struct ExhaustedError {
    pub direction: Direction,
    pub from: usize,
}

/// Position of the replay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorState {
    pub active_index: usize,
    pub progress: usize,
}

/// Owns the path set and drives the replay
#[derive(Debug)]
pub struct Navigator {
    paths: PathSet,
    state: NavigatorState,
}

impl Navigator {
    /// Start at the first selectable path with nothing revealed.
    ///
    /// Fails when no path has at least two points.
    pub fn new(paths: PathSet) -> Result<Self, ExhaustedError> {
        let mut navigator = Navigator {
            paths,
            state: NavigatorState {
                active_index: 0,
                progress: 0,
            },
        };

        let first = navigator.scan(0, Direction::Forward)?;
        navigator.state.active_index = first;
        Ok(navigator)
    }

    pub fn state(&self) -> NavigatorState {
        self.state
    }

    pub fn paths(&self) -> &PathSet {
        &self.paths
    }

    pub fn active_path(&self) -> &Path {
        // `new` and the select operations only ever store in-range indices
        &self.paths[self.state.active_index]
    }

    /// Reveal one more point, holding at the last one.
    pub fn advance_tick(&mut self) {
        let last = self.active_path().len() - 1;
        if self.state.progress < last {
            self.state.progress += 1;
            tracing::trace!(progress = self.state.progress, "tick");
        }
    }

    /// Move to the next path with at least two points.
    pub fn select_next(&mut self) -> Result<(), ExhaustedError> {
        let exhausted = ExhaustedError {
            direction: Direction::Forward,
            from: self.state.active_index,
        };
        let start = self.state.active_index.checked_add(1).ok_or(exhausted)?;
        let index = self
            .scan(start, Direction::Forward)
            .map_err(|_| exhausted)?;
        self.select(index);
        Ok(())
    }

    /// Move to the previous path with at least two points.
    pub fn select_previous(&mut self) -> Result<(), ExhaustedError> {
        let exhausted = ExhaustedError {
            direction: Direction::Backward,
            from: self.state.active_index,
        };
        let start = self.state.active_index.checked_sub(1).ok_or(exhausted)?;
        let index = self
            .scan(start, Direction::Backward)
            .map_err(|_| exhausted)?;
        self.select(index);
        Ok(())
    }

    /// Restart the active path's replay from its first point.
    pub fn reset_progress(&mut self) {
        self.state.progress = 0;
    }

    fn select(&mut self, index: usize) {
        self.state = NavigatorState {
            active_index: index,
            progress: 0,
        };
        tracing::debug!(
            index,
            len = self.active_path().len(),
            "selected path"
        );
    }

    /// Find the first selectable index at or beyond `start` in `direction`.
    /// The scan visits each index at most once.
    fn scan(&self, start: usize, direction: Direction) -> Result<usize, ExhaustedError> {
        let exhausted = ExhaustedError {
            direction,
            from: start,
        };
        let len = self.paths.len();
        if start >= len {
            return Err(exhausted);
        }

        let selectable = |i: &usize| self.paths.get(*i).is_some_and(Path::is_selectable);
        let found = match direction {
            Direction::Forward => (start..len).find(selectable),
            Direction::Backward => (0..=start).rev().find(selectable),
        };
        found.ok_or(exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::{parse_paths, PathPoint};

    fn set_of(lens: &[usize]) -> PathSet {
        PathSet::new(
            lens.iter()
                .map(|&n| {
                    Path::new((0..n).map(|i| PathPoint::new(i as f64, 0.0, false)).collect())
                        .unwrap()
                })
                .collect(),
        )
    }

    #[test]
    fn test_initial_state() {
        let nav = Navigator::new(set_of(&[3, 2])).unwrap();
        assert_eq!(
            nav.state(),
            NavigatorState {
                active_index: 0,
                progress: 0
            }
        );
    }

    #[test]
    fn test_no_selectable_path() {
        assert!(Navigator::new(set_of(&[1, 1])).is_err());
        assert!(Navigator::new(PathSet::default()).is_err());
    }

    #[test]
    fn test_advance_reaches_end_and_holds() {
        let mut nav = Navigator::new(set_of(&[5])).unwrap();
        for _ in 0..4 {
            nav.advance_tick();
        }
        assert_eq!(nav.state().progress, 4);

        nav.advance_tick();
        nav.advance_tick();
        assert_eq!(nav.state().progress, 4);
    }

    #[test]
    fn test_next_then_previous_round_trip() {
        let mut nav = Navigator::new(set_of(&[4, 3, 2])).unwrap();
        nav.advance_tick();
        nav.advance_tick();

        nav.select_next().unwrap();
        assert_eq!(nav.state().active_index, 1);
        assert_eq!(nav.state().progress, 0);

        nav.advance_tick();
        nav.select_previous().unwrap();
        assert_eq!(
            nav.state(),
            NavigatorState {
                active_index: 0,
                progress: 0
            }
        );
    }

    #[test]
    fn test_next_skips_short_paths_and_clamps() {
        // sorted: [3, 2, 1, 1]
        let mut nav = Navigator::new(set_of(&[1, 3, 1, 2])).unwrap();
        nav.select_next().unwrap();
        assert_eq!(nav.state().active_index, 1);

        nav.advance_tick();
        let err = nav.select_next().unwrap_err();
        assert_eq!(
            err,
            ExhaustedError {
                direction: Direction::Forward,
                from: 1
            }
        );
        // clamped: nothing moved, progress kept
        assert_eq!(
            nav.state(),
            NavigatorState {
                active_index: 1,
                progress: 1
            }
        );
    }

    #[test]
    fn test_previous_at_first_path_clamps() {
        let mut nav = Navigator::new(set_of(&[3, 2])).unwrap();
        for _ in 0..10 {
            let err = nav.select_previous().unwrap_err();
            assert_eq!(err.direction, Direction::Backward);
            assert_eq!(nav.state().active_index, 0);
        }
        nav.select_next().unwrap();
        assert_eq!(nav.state().active_index, 1);
    }

    #[test]
    fn test_repeated_navigation_stays_in_bounds() {
        let mut nav = Navigator::new(set_of(&[2, 5, 1, 3, 1, 2])).unwrap();
        let selectable = nav.paths().selectable_count();

        let mut moves = 0;
        while nav.select_next().is_ok() {
            moves += 1;
            assert!(nav.active_path().is_selectable());
        }
        assert_eq!(moves, selectable - 1);

        while nav.select_previous().is_ok() {
            assert!(nav.active_path().is_selectable());
        }
        assert_eq!(nav.state().active_index, 0);
    }

    #[test]
    fn test_reset_keeps_active_index() {
        let mut nav = Navigator::new(set_of(&[4, 4])).unwrap();
        nav.select_next().unwrap();
        nav.advance_tick();
        nav.advance_tick();
        nav.reset_progress();
        assert_eq!(
            nav.state(),
            NavigatorState {
                active_index: 1,
                progress: 0
            }
        );
    }

    #[test]
    fn test_parsed_file_starts_on_longest_path() {
        let set = parse_paths("0.1,0.1\n0.5,0.5!\n0.9,0.9\n\n0.0,0.0\n1.0,1.0").unwrap();
        let nav = Navigator::new(set).unwrap();
        assert_eq!(nav.active_path().len(), 3);
        assert_eq!(nav.state().progress, 0);
    }
}
