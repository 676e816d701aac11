/// Pixels processed between two cancellation checks within a row.
pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "operation cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Cooperative stop signal for a render in flight.
///
/// Generators poll it when a row starts and again every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within that row. It is never polled
/// inside the escape loop of a single pixel, so a pixel always finishes once
/// started. Any `Fn() -> bool` closure is a token, which lets callers wrap an
/// `AtomicBool` or a deadline without a new type.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Polls `cancel` only when `pixel_in_row` sits on a check boundary; pixel 0
/// is the row start.
#[inline]
pub(crate) fn check_cancelled<C: CancelToken + ?Sized>(cancel: &C, pixel_in_row: usize) -> Result<(), Cancelled> {
    if pixel_in_row % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
        return Err(Cancelled);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[test]
    fn never_cancel_always_returns_false() {
        let token = NeverCancel;

        assert!(!token.is_cancelled());
        assert_eq!(check_cancelled(&token, 0), Ok(()));
    }

    #[test]
    fn closure_token_reflects_atomic_state() {
        let flag = AtomicBool::new(false);
        let token = || flag.load(Ordering::Relaxed);

        assert!(!token.is_cancelled());

        flag.store(true, Ordering::Relaxed);
        assert!(token.is_cancelled());
    }

    #[test]
    fn polls_once_per_interval() {
        let polls = AtomicUsize::new(0);
        let token = || {
            polls.fetch_add(1, Ordering::Relaxed);
            false
        };

        for pixel in 0..CANCEL_CHECK_INTERVAL_PIXELS * 3 {
            check_cancelled(&token, pixel).unwrap();
        }

        assert_eq!(polls.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn checks_only_on_interval_boundaries() {
        let token = || true;

        assert_eq!(check_cancelled(&token, 0), Err(Cancelled));
        assert_eq!(check_cancelled(&token, 1), Ok(()));
        assert_eq!(check_cancelled(&token, CANCEL_CHECK_INTERVAL_PIXELS), Err(Cancelled));
    }
}
