//! Column glyphs used to draw tree branches.

use std::fmt::{self, Display};

/// One drawing column of a report line.
///
/// The payload is the display width of the parent label of the node that
/// owns the column; wider labels stretch the column so that children line
/// up under the `parent ↜ id` text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LvlChar {
    /// Below the last child of a node.
    Space(u32),
    /// Below a child that has later siblings.
    SolidBar(u32),
    /// Connector of the last child.
    SolidAngle(u32),
    /// Connector of the last child when it is not stored.
    SolidDashAngle(u32),
    /// Connector of a child with later siblings.
    SolidCross(u32),
    /// Connector of a non-stored child with later siblings.
    SolidDashCross(u32),
    /// Hidden children, or the lead-in of a subtree.
    DashBar(u32),
    /// Placeholder replaced by a line suffix.
    Empty,
}

impl LvlChar {
    /// Padding for a column whose parent label is `len` columns wide.
    pub(crate) fn real_len(delta: i32, len: u32) -> usize {
        if delta.unsigned_abs() >= len {
            return 0;
        }
        len.checked_add_signed(delta).map_or(0, |padded| padded as usize)
    }
}

impl Display for LvlChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            LvlChar::Space(parent_len) => {
                write!(f, "    {}", " ".repeat(LvlChar::real_len(-1, parent_len)))
            }
            LvlChar::SolidBar(parent_len) => {
                write!(f, " │  {}", " ".repeat(LvlChar::real_len(-1, parent_len)))
            }
            LvlChar::SolidAngle(parent_len) => {
                write!(f, " └──{}", "─".repeat(LvlChar::real_len(-1, parent_len)))
            }
            LvlChar::SolidDashAngle(parent_len) => {
                write!(f, " └╌╌╌╌╌╌{}", "╌".repeat(LvlChar::real_len(3, parent_len)))
            }
            LvlChar::SolidCross(parent_len) => {
                write!(f, " ├──{}", "─".repeat(LvlChar::real_len(-1, parent_len)))
            }
            LvlChar::SolidDashCross(parent_len) => {
                write!(f, " ├╌╌╌╌╌╌{}", "╌".repeat(LvlChar::real_len(3, parent_len)))
            }
            LvlChar::DashBar(parent_len) => {
                write!(f, " ╎  {}", " ".repeat(LvlChar::real_len(-1, parent_len)))
            }
            LvlChar::Empty => Ok(()),
        }
    }
}
