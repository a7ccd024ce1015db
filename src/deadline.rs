//! Deadlines
//!
//! Races a fallible future against a deadline future. Whichever side loses
//! is dropped; the caller decides how to cancel work already started.

use std::future::Future;

use futures::future::{select, Either};

/// Resolve `work`, or return `on_timeout()` if `deadline` finishes first
pub async fn race_deadline<T, E, W, D>(work: W, deadline: D, on_timeout: impl FnOnce() -> E) -> Result<T, E>
where
    W: Future<Output = Result<T, E>>,
    D: Future<Output = ()>,
{
    futures::pin_mut!(work);
    futures::pin_mut!(deadline);

    match select(work, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(on_timeout()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{pending, ready};
    use std::cell::Cell;

    #[test]
    fn test_work_finishing_first_wins() {
        let result: Result<u32, &str> = block_on(race_deadline(ready(Ok(7)), pending(), || "late"));
        assert_eq!(result, Ok(7));
    }

    #[test]
    fn test_work_errors_pass_through() {
        let result: Result<u32, &str> = block_on(race_deadline(ready(Err("refused")), pending(), || "late"));
        assert_eq!(result, Err("refused"));
    }

    #[test]
    fn test_deadline_runs_timeout_hook() {
        let cancelled = Cell::new(false);
        let result: Result<u32, &str> = block_on(race_deadline(pending(), ready(()), || {
            cancelled.set(true);
            "late"
        }));
        assert_eq!(result, Err("late"));
        assert!(cancelled.get());
    }

    #[test]
    fn test_timeout_hook_untouched_when_work_wins() {
        let cancelled = Cell::new(false);
        let _: Result<u32, &str> = block_on(race_deadline(ready(Ok(1)), ready(()), || {
            cancelled.set(true);
            "late"
        }));
        assert!(!cancelled.get());
    }
}
