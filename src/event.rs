use std::future::Future;
use std::io;
use std::pin::Pin;
use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::future::Fuse;
use futures::{FutureExt, Stream, StreamExt};
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tracing::warn;

#[derive(Clone, Debug)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    Resize,
    /// Out-of-band cancellation (SIGINT / console Ctrl+C).
    Interrupt,
}

type InterruptSignal = Fuse<Pin<Box<dyn Future<Output = io::Result<()>>>>>;

/// Single-threaded event source: every call to `next` races terminal input,
/// the countdown tick and the interrupt signal.
pub struct EventHandler<S = EventStream> {
    reader: S,
    ticks: Interval,
    // Kept across calls so a signal between two polls is not dropped.
    interrupt: InterruptSignal,
}

impl EventHandler {
    pub fn new(tick: Duration) -> Self {
        Self::with_input(EventStream::new(), tick)
    }
}

impl<S> EventHandler<S>
where
    S: Stream<Item = io::Result<CrosstermEvent>> + Unpin,
{
    /// Event source over any terminal input stream; the first tick fires one
    /// full period after construction.
    pub fn with_input(reader: S, tick: Duration) -> Self {
        let mut ticks = interval_at(Instant::now() + tick, tick);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let signal: Pin<Box<dyn Future<Output = io::Result<()>>>> =
            Box::pin(tokio::signal::ctrl_c());
        Self {
            reader,
            ticks,
            interrupt: signal.fuse(),
        }
    }

    /// Realigns the schedule so the next tick lands one full period from now.
    pub fn restart_ticks(&mut self) {
        self.ticks.reset();
    }

    /// `None` once the terminal input stream has closed or failed.
    pub async fn next(&mut self) -> Option<Event> {
        loop {
            tokio::select! {
                maybe_event = self.reader.next() => {
                    match maybe_event {
                        Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                            return Some(Event::Key(key));
                        }
                        Some(Ok(CrosstermEvent::Resize(_, _))) => return Some(Event::Resize),
                        Some(Ok(_)) => continue,
                        Some(Err(err)) => {
                            warn!(error = %err, "terminal input failed");
                            return None;
                        }
                        None => return None,
                    }
                }
                _ = self.ticks.tick() => return Some(Event::Tick),
                result = &mut self.interrupt => match result {
                    Ok(()) => return Some(Event::Interrupt),
                    Err(err) => warn!(error = %err, "interrupt handler unavailable"),
                },
            }
        }
    }
}
