//! Core types for the waste-collection grid.
//!
//! Defines grid positions, the discrete action set, obstacles and the
//! axis layout used throughout the environment.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::EnvError;

/// Number of axes in the encoded positions.
///
/// Movement always happens on the two ground-plane axes `x` and `z`. With
/// [`AxisCount::Three`] a vertical `y` axis is added and held at the ground
/// plane (`y = 0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AxisCount {
    Two,
    #[default]
    Three,
}

impl AxisCount {
    /// Length of an encoded position vector.
    pub fn dims(&self) -> usize {
        match self {
            AxisCount::Two => 2,
            AxisCount::Three => 3,
        }
    }
}

/// A cell on the ground plane of the grid.
///
/// Coordinates are signed so that the hidden-waste sentinel
/// ([`GridPosition::HIDDEN`]) can be represented; every placed entity lies in
/// `[0, grid_size - 1]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridPosition {
    pub x: i32,
    pub z: i32,
}

impl GridPosition {
    /// Out-of-grid marker reported for the waste while it is being carried.
    pub const HIDDEN: GridPosition = GridPosition { x: -1, z: -1 };

    /// Creates a new position.
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Grid origin (0, 0).
    pub fn origin() -> Self {
        Self { x: 0, z: 0 }
    }

    /// Returns true if this is the hidden sentinel.
    pub fn is_hidden(&self) -> bool {
        *self == Self::HIDDEN
    }

    /// Manhattan distance over the two ground-plane axes.
    pub fn manhattan(&self, other: &GridPosition) -> i32 {
        (self.x - other.x).abs() + (self.z - other.z).abs()
    }

    /// Returns true if both coordinates lie in `[0, grid_size - 1]`.
    pub fn in_bounds(&self, grid_size: i32) -> bool {
        (0..grid_size).contains(&self.x) && (0..grid_size).contains(&self.z)
    }

    /// Returns the position shifted by `(dx, dz)` and clamped to the grid.
    pub fn offset_clamped(&self, dx: i32, dz: i32, grid_size: i32) -> Self {
        let max = grid_size - 1;
        Self {
            x: (self.x + dx).clamp(0, max),
            z: (self.z + dz).clamp(0, max),
        }
    }

    /// Encodes the position as an axis vector: `[x, z]` or `[x, 0, z]`.
    ///
    /// The hidden sentinel encodes as all `-1`.
    pub fn to_vec(&self, axes: AxisCount) -> Vec<i32> {
        match axes {
            AxisCount::Two => vec![self.x, self.z],
            AxisCount::Three if self.is_hidden() => vec![-1, -1, -1],
            AxisCount::Three => vec![self.x, 0, self.z],
        }
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Discrete agent action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    /// +z
    MoveForward,
    /// -z
    MoveBackward,
    /// +x
    MoveRight,
    /// -x
    MoveLeft,
    /// Pick up the waste or drop it into the bin.
    Interact,
}

impl Action {
    /// Number of discrete actions.
    pub const COUNT: usize = 5;

    /// Returns all actions in index order.
    pub fn all() -> [Action; Self::COUNT] {
        [
            Action::MoveForward,
            Action::MoveBackward,
            Action::MoveRight,
            Action::MoveLeft,
            Action::Interact,
        ]
    }

    /// Returns the discrete index of this action (0..=4).
    pub fn index(&self) -> usize {
        match self {
            Action::MoveForward => 0,
            Action::MoveBackward => 1,
            Action::MoveRight => 2,
            Action::MoveLeft => 3,
            Action::Interact => 4,
        }
    }

    /// Ground-plane delta `(dx, dz)` for movement actions, `None` for `Interact`.
    pub fn delta(&self) -> Option<(i32, i32)> {
        match self {
            Action::MoveForward => Some((0, 1)),
            Action::MoveBackward => Some((0, -1)),
            Action::MoveRight => Some((1, 0)),
            Action::MoveLeft => Some((-1, 0)),
            Action::Interact => None,
        }
    }

    /// Returns true for the four movement actions.
    pub fn is_move(&self) -> bool {
        self.delta().is_some()
    }
}

impl TryFrom<usize> for Action {
    type Error = EnvError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Action::all()
            .get(value)
            .copied()
            .ok_or(EnvError::InvalidAction(value))
    }
}

impl From<Action> for usize {
    fn from(action: Action) -> Self {
        action.index()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::MoveForward => write!(f, "forward"),
            Action::MoveBackward => write!(f, "backward"),
            Action::MoveRight => write!(f, "right"),
            Action::MoveLeft => write!(f, "left"),
            Action::Interact => write!(f, "interact"),
        }
    }
}

/// A static obstacle ("house") occupying one grid cell.
///
/// `size` only matters to renderers; collision is cell-exact.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Obstacle {
    pub position: GridPosition,
    pub size: f64,
}

impl Obstacle {
    /// Creates a new obstacle.
    pub fn new(position: GridPosition, size: f64) -> Self {
        Self { position, size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_ignores_vertical_axis() {
        let a = GridPosition::new(0, 0);
        let b = GridPosition::new(3, 4);
        assert_eq!(a.manhattan(&b), 7);
        assert_eq!(b.manhattan(&a), 7);
    }

    #[test]
    fn offset_clamps_to_grid() {
        let p = GridPosition::new(0, 4);
        assert_eq!(p.offset_clamped(-1, 0, 5), GridPosition::new(0, 4));
        assert_eq!(p.offset_clamped(0, 1, 5), GridPosition::new(0, 4));
        assert_eq!(p.offset_clamped(1, -1, 5), GridPosition::new(1, 3));
    }

    #[test]
    fn in_bounds_rejects_sentinel() {
        assert!(GridPosition::new(4, 0).in_bounds(5));
        assert!(!GridPosition::new(5, 0).in_bounds(5));
        assert!(!GridPosition::HIDDEN.in_bounds(5));
    }

    #[test]
    fn encodes_ground_plane() {
        let p = GridPosition::new(2, 3);
        assert_eq!(p.to_vec(AxisCount::Three), vec![2, 0, 3]);
        assert_eq!(p.to_vec(AxisCount::Two), vec![2, 3]);
        assert_eq!(GridPosition::HIDDEN.to_vec(AxisCount::Three), vec![-1, -1, -1]);
    }

    #[test]
    fn action_index_round_trip() {
        for action in Action::all() {
            assert_eq!(Action::try_from(action.index()), Ok(action));
        }
    }

    #[test]
    fn action_out_of_range_rejected() {
        assert_eq!(Action::try_from(5), Err(EnvError::InvalidAction(5)));
    }

    #[test]
    fn only_interact_has_no_delta() {
        let moves: Vec<_> = Action::all().into_iter().filter(Action::is_move).collect();
        assert_eq!(moves.len(), 4);
        assert_eq!(Action::Interact.delta(), None);
    }
}
