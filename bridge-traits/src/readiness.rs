//! Ready/not-ready signalling for collaborators that load data lazily.

use serde::{Deserialize, Serialize};

/// The state of a value a collaborator may still be fetching.
///
/// `Pending` is not an error: the caller is expected to use a fallback for
/// the current pass and re-invoke once the collaborator settles. There is
/// no blocking or awaiting behind this type; implementations return a
/// snapshot of whatever they have right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Readiness<T> {
    Ready(T),
    Pending,
}

impl<T> Readiness<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Readiness::Ready(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Readiness::Pending)
    }

    /// The value, if ready.
    pub fn ready(self) -> Option<T> {
        match self {
            Readiness::Ready(value) => Some(value),
            Readiness::Pending => None,
        }
    }

    /// The value, or the given fallback while pending.
    pub fn ready_or(self, fallback: T) -> T {
        match self {
            Readiness::Ready(value) => value,
            Readiness::Pending => fallback,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Readiness<U> {
        match self {
            Readiness::Ready(value) => Readiness::Ready(f(value)),
            Readiness::Pending => Readiness::Pending,
        }
    }

    pub fn as_ref(&self) -> Readiness<&T> {
        match self {
            Readiness::Ready(value) => Readiness::Ready(value),
            Readiness::Pending => Readiness::Pending,
        }
    }
}

impl<T> From<Option<T>> for Readiness<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Readiness::Ready(value),
            None => Readiness::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_exposes_value() {
        let readiness = Readiness::Ready(7);
        assert!(readiness.is_ready());
        assert_eq!(readiness.ready(), Some(7));
    }

    #[test]
    fn pending_yields_fallback() {
        let readiness: Readiness<i32> = Readiness::Pending;
        assert!(readiness.is_pending());
        assert_eq!(readiness.ready_or(42), 42);
    }

    #[test]
    fn map_preserves_pending() {
        let readiness: Readiness<i32> = Readiness::Pending;
        assert!(readiness.map(|v| v * 2).is_pending());
        assert_eq!(Readiness::Ready(3).map(|v| v * 2), Readiness::Ready(6));
    }
}
