//! Support conditions at frame nodes

use serde::{Deserialize, Serialize};

/// Restraint pattern at a node over the planar DOFs (dx, dy, rz)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportKind {
    /// All three DOFs restrained
    Fixed,
    /// Translations restrained, rotation free
    Pinned,
    /// Vertical translation restrained only
    Roller,
    /// Horizontal translation restrained only
    RollerH,
    /// No restraint
    #[default]
    Free,
}

impl SupportKind {
    /// Restraint mask over (dx, dy, rz)
    pub fn dof_mask(self) -> [bool; 3] {
        match self {
            SupportKind::Fixed => [true, true, true],
            SupportKind::Pinned => [true, true, false],
            SupportKind::Roller => [false, true, false],
            SupportKind::RollerH => [true, false, false],
            SupportKind::Free => [false, false, false],
        }
    }

    /// Check if any DOF is restrained
    pub fn is_restrained(self) -> bool {
        self.dof_mask().iter().any(|&r| r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_restrains_all_dofs() {
        assert_eq!(SupportKind::Fixed.dof_mask(), [true, true, true]);
        assert!(SupportKind::Fixed.is_restrained());
    }

    #[test]
    fn pinned_leaves_rotation_free() {
        assert_eq!(SupportKind::Pinned.dof_mask(), [true, true, false]);
    }

    #[test]
    fn free_restrains_nothing() {
        assert!(!SupportKind::Free.is_restrained());
    }
}
