//! Lock state definitions.

use std::fmt;
use std::num::NonZeroUsize;

/// State of a [`FileLock`](super::FileLock) instance.
///
/// Counts that must be at least one are `NonZeroUsize`, so an empty shared or
/// exclusive state cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockState {
    /// No handle is open and no lock is held.
    #[default]
    Unlocked,

    /// A shared OS lock is held; `count` acquisitions are outstanding.
    Shared { count: NonZeroUsize },

    /// An exclusive OS lock is held.
    ///
    /// `pending_shared` counts shared acquisitions that are still outstanding
    /// (taken before an upgrade or while exclusive). When the last exclusive
    /// acquisition is released with `pending_shared > 0`, the lock is
    /// downgraded to shared instead of being released.
    Exclusive {
        count: NonZeroUsize,
        pending_shared: usize,
    },
}

impl LockState {
    /// Whether any lock is held.
    pub fn is_locked(&self) -> bool {
        !matches!(self, LockState::Unlocked)
    }

    pub fn is_shared(&self) -> bool {
        matches!(self, LockState::Shared { .. })
    }

    pub fn is_exclusive(&self) -> bool {
        matches!(self, LockState::Exclusive { .. })
    }

    /// Outstanding shared acquisitions, including those pending a downgrade.
    pub fn shared_count(&self) -> usize {
        match self {
            LockState::Unlocked => 0,
            LockState::Shared { count } => count.get(),
            LockState::Exclusive { pending_shared, .. } => *pending_shared,
        }
    }

    /// Outstanding exclusive acquisitions.
    pub fn exclusive_count(&self) -> usize {
        match self {
            LockState::Exclusive { count, .. } => count.get(),
            _ => 0,
        }
    }
}

impl fmt::Display for LockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockState::Unlocked => write!(f, "unlocked"),
            LockState::Shared { count } => write!(f, "shared (x{})", count),
            LockState::Exclusive {
                count,
                pending_shared: 0,
            } => write!(f, "exclusive (x{})", count),
            LockState::Exclusive {
                count,
                pending_shared,
            } => write!(
                f,
                "exclusive (x{}, {} shared pending)",
                count, pending_shared
            ),
        }
    }
}
