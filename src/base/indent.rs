//! Indentation tracking for emitted C++ text.

use std::fmt;

/// Default C++ indentation step, in spaces.
pub const DEFAULT_INDENT_SIZE: usize = 4;

/// The current indentation of emitted code.
///
/// Indentation grows and shrinks in fixed steps. Decrementing below zero
/// saturates instead of panicking.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Indent {
    /// Number of spaces per level
    step: usize,
    /// Current depth in levels
    depth: usize,
}

impl Indent {
    /// Create a zero indentation with the given step size.
    #[inline]
    pub const fn new(step: usize) -> Self {
        Self { step, depth: 0 }
    }

    /// Indentation one level deeper.
    #[inline]
    pub const fn increment(self) -> Self {
        Self {
            step: self.step,
            depth: self.depth + 1,
        }
    }

    /// Indentation one level shallower.
    #[inline]
    pub const fn decrement(self) -> Self {
        Self {
            step: self.step,
            depth: self.depth.saturating_sub(1),
        }
    }

    /// Total width in spaces.
    #[inline]
    pub const fn width(self) -> usize {
        self.step * self.depth
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT_SIZE)
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:width$}", "", width = self.width())
    }
}
