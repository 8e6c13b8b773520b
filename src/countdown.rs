/// Tick-driven wait between two captures.
///
/// Each tick consumes one increment. Restarting bumps `epoch`, which the
/// run loop watches to realign its tick timer with the new wait.
#[derive(Debug, Clone)]
pub struct Countdown {
    total: u32,
    remaining: u32,
    epoch: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStep {
    Pending(u32),
    Elapsed,
}

impl Countdown {
    pub fn new(total: u32) -> Self {
        Countdown {
            total: total.max(1),
            remaining: total.max(1),
            epoch: 0,
        }
    }

    pub fn restart(&mut self) {
        self.remaining = self.total;
        self.epoch += 1;
    }

    pub fn tick(&mut self) -> CountdownStep {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            CountdownStep::Elapsed
        } else {
            CountdownStep::Pending(self.remaining)
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}
