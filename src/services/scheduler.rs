use chrono::{DateTime, Local, Timelike};
use std::future::Future;
use std::time::Duration;
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};
use tracing::{debug, info};

pub const HOUR: Duration = Duration::from_secs(60 * 60);

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    /// Waiting `first_delay` for the next hour boundary, then firing every
    /// `period`.
    Armed { first_delay: Duration, period: Duration },
}

/// Time left until the next wall-clock hour boundary.
pub fn delay_until_next_hour<T: Timelike>(now: &T) -> Duration {
    let into_hour = Duration::from_secs(u64::from(now.minute()) * 60 + u64::from(now.second()))
        + Duration::from_millis(u64::from(now.nanosecond() / 1_000_000));

    // A leap second can push past the hour
    HOUR.saturating_sub(into_hour)
}

pub struct Scheduler<C: Clock> {
    clock: C,
    state: SchedulerState,
}

impl<C: Clock> Scheduler<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            state: SchedulerState::Idle,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Idle -> Armed. Returns the delay before the first aligned run.
    pub fn arm(&mut self) -> Duration {
        let first_delay = delay_until_next_hour(&self.clock.now());
        self.state = SchedulerState::Armed {
            first_delay,
            period: HOUR,
        };
        first_delay
    }

    /// Runs `task` now, then at the top of every hour. Runs never overlap:
    /// a tick that comes due while a run is still going waits for it.
    pub async fn run<F, Fut>(mut self, mut task: F)
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ()>,
    {
        task().await;

        let first_delay = self.arm();
        debug!("Scheduler {:?}", self.state());
        info!(
            "Next run in {}m{:02}s, then every hour",
            first_delay.as_secs() / 60,
            first_delay.as_secs() % 60
        );
        sleep(first_delay).await;

        let mut ticker = interval_at(Instant::now(), HOUR);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            task().await;
        }
    }
}
