//! Fixed-cadence loop used by `watch` to keep the elapsed time and earnings current.

use crate::errors::AppResult;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

/// What the tick callback wants to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFlow {
    Continue,
    Stop,
}

/// Stops a running [`Ticker`] from any thread.
#[derive(Debug, Clone)]
pub struct StopHandle {
    tx: Sender<()>,
}

impl StopHandle {
    pub fn stop(&self) {
        // receiver gone means the loop already ended
        let _ = self.tx.send(());
    }
}

pub struct Ticker {
    interval: Duration,
    max_ticks: Option<usize>,
    tx: Sender<()>,
    rx: Receiver<()>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            interval,
            max_ticks: None,
            tx,
            rx,
        }
    }

    /// Stop by itself after `n` ticks.
    pub fn with_max_ticks(mut self, n: usize) -> Self {
        self.max_ticks = Some(n);
        self
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            tx: self.tx.clone(),
        }
    }

    /// Run `on_tick` now and then once per interval until it returns
    /// [`TickFlow::Stop`], errors, hits the tick limit or is stopped.
    ///
    /// Returns the number of ticks executed.
    pub fn run<F>(&self, mut on_tick: F) -> AppResult<usize>
    where
        F: FnMut(usize) -> AppResult<TickFlow>,
    {
        let mut ticks = 0;

        loop {
            if self.rx.try_recv().is_ok() {
                break;
            }

            ticks += 1;
            if on_tick(ticks)? == TickFlow::Stop {
                break;
            }

            if self.max_ticks.is_some_and(|max| ticks >= max) {
                break;
            }

            match self.rx.recv_timeout(self.interval) {
                Ok(()) => break,
                Err(RecvTimeoutError::Timeout) => continue,
                // self.tx keeps the channel alive; treat as stop anyway
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        Ok(ticks)
    }
}
