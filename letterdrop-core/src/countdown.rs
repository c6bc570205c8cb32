//! Payment expiry countdown.
//!
//! A countdown is a spawned tick loop that recomputes the time left once per
//! second and publishes it on a `watch` channel. It stops by itself once the
//! deadline passes, and is aborted when its [`CountdownHandle`] is cancelled
//! or dropped, so at most one loop runs per handle.

use std::time::Duration;

use time::OffsetDateTime;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval};
use tracing::debug;

pub const TICK: Duration = Duration::from_secs(1);
pub const EXPIRED_LABEL: &str = "Expired";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Running(Duration),
    /// Terminal.
    Expired,
}

impl CountdownState {
    /// `M:SS` while running, `Expired` afterwards.
    pub fn label(&self) -> String {
        match self {
            CountdownState::Running(left) => render_remaining(*left),
            CountdownState::Expired => EXPIRED_LABEL.to_owned(),
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, CountdownState::Expired)
    }
}

/// Render whole minutes and zero-padded seconds, e.g. `29:07` or `0:05`.
pub fn render_remaining(left: Duration) -> String {
    let secs = left.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Owner of a running countdown.
#[derive(Debug)]
pub struct CountdownHandle {
    state_rx: watch::Receiver<CountdownState>,
    task: JoinHandle<()>,
}

impl CountdownHandle {
    /// Start counting down `remaining` from now.
    ///
    /// The first tick fires immediately. Must be called within a tokio
    /// runtime.
    pub fn start(remaining: Duration) -> Self {
        let deadline = Instant::now() + remaining;
        let initial = if remaining.is_zero() {
            CountdownState::Expired
        } else {
            CountdownState::Running(remaining)
        };
        let (state_tx, state_rx) = watch::channel(initial);

        let task = tokio::spawn(async move {
            let mut ticker = interval(TICK);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let left = deadline.saturating_duration_since(Instant::now());
                if left.is_zero() {
                    let _ = state_tx.send(CountdownState::Expired);
                    debug!("Countdown expired");
                    break;
                }
                if state_tx.send(CountdownState::Running(left)).is_err() {
                    break;
                }
            }
        });

        Self { state_rx, task }
    }

    /// Start counting down to a wall-clock instant. A target in the past
    /// expires on the first tick.
    pub fn until(target: OffsetDateTime) -> Self {
        let remaining = (target - OffsetDateTime::now_utc())
            .try_into()
            .unwrap_or(Duration::ZERO);
        Self::start(remaining)
    }

    /// Latest published state.
    pub fn state(&self) -> CountdownState {
        *self.state_rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<CountdownState> {
        self.state_rx.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the tick loop.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn collect_labels(handle: &CountdownHandle) -> Vec<String> {
        let mut rx = handle.subscribe();
        let mut labels = Vec::new();
        while rx.changed().await.is_ok() {
            let state = *rx.borrow_and_update();
            labels.push(state.label());
            if state.is_expired() {
                break;
            }
        }
        labels
    }

    #[test]
    fn test_render_remaining() {
        assert_eq!(render_remaining(Duration::from_secs(5)), "0:05");
        assert_eq!(render_remaining(Duration::from_millis(4_999)), "0:04");
        assert_eq!(render_remaining(Duration::from_secs(30 * 60)), "30:00");
        assert_eq!(render_remaining(Duration::from_secs(61)), "1:01");
    }

    #[tokio::test(start_paused = true)]
    async fn test_counts_down_to_expired() {
        let handle = CountdownHandle::start(Duration::from_secs(5));

        let labels = collect_labels(&handle).await;

        assert_eq!(labels, ["0:05", "0:04", "0:03", "0:02", "0:01", "Expired"]);
        assert_eq!(handle.state(), CountdownState::Expired);
    }

    #[tokio::test(start_paused = true)]
    async fn test_loop_stops_after_expiry() {
        let handle = CountdownHandle::start(Duration::from_secs(2));
        collect_labels(&handle).await;

        tokio::time::sleep(Duration::from_secs(3)).await;

        assert!(handle.is_finished());
        assert_eq!(handle.state(), CountdownState::Expired);
    }

    #[tokio::test(start_paused = true)]
    async fn test_past_target_expires_immediately() {
        let handle =
            CountdownHandle::until(OffsetDateTime::now_utc() - time::Duration::seconds(10));
        assert_eq!(handle.state(), CountdownState::Expired);

        let labels = collect_labels(&handle).await;
        assert_eq!(labels, ["Expired"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_aborts_the_loop() {
        let handle = CountdownHandle::start(Duration::from_secs(60));
        let mut rx = handle.subscribe();
        rx.changed().await.unwrap();

        handle.cancel();

        // The sender lives in the aborted task, so the channel closes.
        assert!(rx.changed().await.is_err());
        assert_eq!(*rx.borrow(), CountdownState::Running(Duration::from_secs(60)));
    }
}
