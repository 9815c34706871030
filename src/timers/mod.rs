//! Wall clock timing of solver phases.
//!
//! Timers are keyed by static names and nest in the order they are
//! started.  The [`timeit!`] and [`notimeit!`] macros wrap a block of
//! statements so that timing never interferes with early returns computed
//! inside the block: compute a `Result` under the timer and propagate it
//! afterwards.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

#[derive(Debug, Default, Clone)]
struct Timer {
    start: Option<Instant>,
    elapsed: Duration,
}

impl Timer {
    fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    fn stop(&mut self) {
        if let Some(instant) = self.start.take() {
            self.elapsed += instant.elapsed();
        }
    }

    fn suspend(&mut self) {
        if let Some(instant) = self.start {
            self.elapsed += instant.elapsed();
        }
    }

    fn resume(&mut self) {
        if self.start.is_some() {
            self.start = Some(Instant::now());
        }
    }

    fn elapsed(&self) -> Duration {
        match self.start {
            Some(instant) => self.elapsed + instant.elapsed(),
            None => self.elapsed,
        }
    }
}

/// Collection of named timers with a stack of the currently running ones.
#[derive(Default, Debug, Clone)]
pub struct Timers {
    stack: Vec<&'static str>,
    timers: BTreeMap<&'static str, Timer>,
}

impl Timers {
    /// Clear all timers
    pub fn reset(&mut self) {
        self.stack.clear();
        self.timers.clear();
    }

    /// Start the timer `key` nested inside whatever timer is current
    pub fn start_as_current(&mut self, key: &'static str) {
        self.timers.entry(key).or_default().start();
        self.stack.push(key);
    }

    /// Stop the most recently started timer
    pub fn stop_current(&mut self) {
        if let Some(key) = self.stack.pop() {
            if let Some(t) = self.timers.get_mut(key) {
                t.stop();
            }
        }
    }

    /// Suspend every running timer.   Used for notimeit!
    pub fn suspend(&mut self) {
        self.timers.values_mut().for_each(Timer::suspend);
    }

    /// Resume every suspended timer.   Used for notimeit!
    pub fn resume(&mut self) {
        self.timers.values_mut().for_each(Timer::resume);
    }

    /// Time accumulated under `key`
    pub fn elapsed(&self, key: &str) -> Duration {
        self.timers.get(key).map_or(Duration::ZERO, Timer::elapsed)
    }

    /// Sum of the outermost timers
    pub fn total_time(&self) -> Duration {
        // only roots contribute, otherwise nested time counts twice
        self.roots().map(|k| self.elapsed(k)).sum()
    }

    fn roots(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.timers.keys().copied().filter(|k| k.split('/').count() == 1)
    }

    /// Write one line per timer to `out`
    pub fn print(&self, out: &mut impl std::io::Write) -> std::io::Result<()> {
        for (key, t) in self.timers.iter() {
            writeln!(out, "{:<20} : {:?}", key, t.elapsed)?;
        }
        Ok(())
    }
}

macro_rules! timeit {
    ($timer:ident => $key:literal; $($tt:tt)+) => {
        $timer.start_as_current($key);
        $(
            $tt
        )+
        $timer.stop_current();
    }
}
pub(crate) use timeit;

macro_rules! notimeit {
    ($timer:ident; $($tt:tt)+) => {
        $timer.suspend();
        $(
            $tt
        )+
        $timer.resume();
    }
}
pub(crate) use notimeit;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_timers() {
        let mut timers = Timers::default();
        timers.start_as_current("solve");
        timers.start_as_current("solve/relaxation");
        std::thread::sleep(Duration::from_millis(2));
        timers.stop_current();
        timers.stop_current();

        assert!(timers.elapsed("solve/relaxation") > Duration::ZERO);
        assert!(timers.elapsed("solve") >= timers.elapsed("solve/relaxation"));
        assert_eq!(timers.total_time(), timers.elapsed("solve"));
        assert_eq!(timers.elapsed("missing"), Duration::ZERO);

        timers.reset();
        assert_eq!(timers.total_time(), Duration::ZERO);
    }

    #[test]
    fn test_macros() {
        let mut timers = Timers::default();
        let mut x = 0;
        timeit! {timers => "outer"; {
            x += 1;
            notimeit! {timers; {
                x += 1;
            }}
        }}
        assert_eq!(x, 2);
        assert!(timers.stack.is_empty());
    }
}
