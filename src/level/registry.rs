//! Level domain: ordered anchor registry with per-anchor detectability.

use bevy::prelude::*;

/// A fixed pivot the player can grab and orbit.
#[derive(Debug, Clone, PartialEq)]
pub struct GrabAnchor {
    pub index: usize,
    pub pivot: Vec3,
    pub active: bool,
}

/// Errors raised when building a registry from an anchor list.
#[derive(Debug, Clone, PartialEq)]
pub enum AnchorConfigError {
    Empty,
    MalformedPivot { index: usize },
}

impl std::fmt::Display for AnchorConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnchorConfigError::Empty => write!(f, "anchor list is empty"),
            AnchorConfigError::MalformedPivot { index } => {
                write!(f, "anchor {} has a non-finite pivot", index)
            }
        }
    }
}

impl std::error::Error for AnchorConfigError {}

/// Owns the grab anchors in mandatory traversal order.
/// The last anchor is the goal.
#[derive(Resource, Debug, Clone)]
pub struct AnchorRegistry {
    anchors: Vec<GrabAnchor>,
}

impl AnchorRegistry {
    /// Assigns index `i` to the i-th pivot. Fails on an empty or malformed list.
    pub fn new(pivots: impl IntoIterator<Item = Vec3>) -> Result<Self, AnchorConfigError> {
        let anchors = pivots
            .into_iter()
            .enumerate()
            .map(|(index, pivot)| {
                if !pivot.is_finite() {
                    return Err(AnchorConfigError::MalformedPivot { index });
                }
                Ok(GrabAnchor {
                    index,
                    pivot,
                    active: true,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if anchors.is_empty() {
            return Err(AnchorConfigError::Empty);
        }

        Ok(Self { anchors })
    }

    pub fn count(&self) -> usize {
        self.anchors.len()
    }

    pub fn at(&self, index: usize) -> Option<&GrabAnchor> {
        self.anchors.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GrabAnchor> {
        self.anchors.iter()
    }

    pub fn goal_index(&self) -> usize {
        self.anchors.len() - 1
    }

    pub fn is_goal(&self, index: usize) -> bool {
        index == self.goal_index()
    }

    /// Pivot of the first anchor. Always present.
    pub fn home_pivot(&self) -> Vec3 {
        self.anchors[0].pivot
    }

    /// Disables detection of anchor `index` until the next `reset_all`
    /// and returns its pivot.
    pub fn grab(&mut self, index: usize) -> Option<Vec3> {
        let anchor = self.anchors.get_mut(index)?;
        anchor.active = false;
        Some(anchor.pivot)
    }

    pub fn reset_all(&mut self) {
        for anchor in &mut self.anchors {
            anchor.active = true;
        }
    }
}
