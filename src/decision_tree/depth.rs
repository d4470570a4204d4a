use serde::{Serialize, Deserialize};
use std::{fmt, cmp, ops};


/// Struct `Depth` defines the remaining depth budget of a tree.
/// This is just a wrapper for `Option<usize>`; `None` is unbounded.
///
/// A node grown with budget `0` still splits once,
/// but its children are leaves.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Depth(Option<usize>);


impl Depth {
    /// A budget that never runs out.
    pub const UNBOUNDED: Self = Self(None);


    /// Returns `true` if the children of the current node
    /// must be leaves.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.0 == Some(0)
    }
}


impl Default for Depth {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}


impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(depth) => write!(f, "{depth}"),
            None => write!(f, "unbounded"),
        }
    }
}


impl From<usize> for Depth {
    fn from(depth: usize) -> Self {
        Self(Some(depth))
    }
}


impl From<Option<usize>> for Depth {
    fn from(depth: Option<usize>) -> Self {
        Self(depth)
    }
}


impl ops::Sub<usize> for Depth {
    type Output = Self;
    /// The subtraction saturates at `0`
    /// and leaves an unbounded depth unbounded.
    #[inline]
    fn sub(self, other: usize) -> Self::Output {
        Self(self.0.map(|depth| depth.saturating_sub(other)))
    }
}


impl cmp::PartialEq<usize> for Depth {
    #[inline]
    fn eq(&self, rhs: &usize) -> bool {
        self.0 == Some(*rhs)
    }
}
