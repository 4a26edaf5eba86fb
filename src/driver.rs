//! Loop building blocks shared by both front ends: input, then simulation,
//! then render, once per tick.

use std::thread::sleep;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::game::{GameState, StepOutcome};
use crate::input::TickInput;
use crate::render::{self, Canvas};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    Over,
}

impl Phase {
    pub fn of(state: &GameState) -> Phase {
        if state.is_over() { Phase::Over } else { Phase::Running }
    }
}

/// Lets the simulation run on every `every`-th call only. The first step
/// happens on call number `every`, which doubles as a start-up grace period.
#[derive(Copy, Clone, Debug)]
pub struct Cadence {
    every: u32,
    count: u32,
}

impl Cadence {
    pub fn new(every: u32) -> Self {
        Cadence { every: every.max(1), count: 0 }
    }

    pub fn tick(&mut self) -> bool {
        self.count += 1;
        if self.count < self.every {
            return false;
        }

        self.count = 0;
        true
    }
}

/// Fixed-rate ticker. Deadlines are kept on a grid so sleeping does not
/// accumulate drift; if the loop falls behind by a whole period the missed
/// ticks are dropped instead of being fired back to back.
#[derive(Copy, Clone, Debug)]
pub struct Interval {
    period: Duration,
    next: Instant,
}

impl Interval {
    pub fn new(period: Duration, now: Instant) -> Self {
        Interval { period, next: now + period }
    }

    /// How long to sleep from `now` until the next tick, and advance past it.
    pub fn until_next(&mut self, now: Instant) -> Duration {
        let wait = self.next.saturating_duration_since(now);

        self.next += self.period;
        if self.next <= now {
            self.next = now + self.period;
        }

        wait
    }

    pub fn wait(&mut self) {
        let wait = self.until_next(Instant::now());
        if !wait.is_zero() {
            sleep(wait);
        }
    }
}

/// Runs one tick: apply input, maybe step, redraw.
#[derive(Copy, Clone, Debug)]
pub struct Driver {
    cadence: Cadence,
}

impl Driver {
    /// Steps on every call.
    pub fn every_tick() -> Self {
        Driver { cadence: Cadence::new(1) }
    }

    /// Steps on every `frames`-th call while the game is running.
    pub fn every(frames: u32) -> Self {
        Driver { cadence: Cadence::new(frames) }
    }

    pub fn frame<C, R>(&mut self, state: &mut GameState, input: &TickInput, rng: &mut R, canvas: &mut C) -> StepOutcome
    where
        C: Canvas + ?Sized,
        R: Rng + ?Sized,
    {
        let was_over = state.is_over();
        input.apply(state, rng);

        // The cadence only counts frames spent playing.
        let outcome = if !was_over && !state.is_over() && self.cadence.tick() {
            state.step(rng)
        } else {
            StepOutcome::Idle
        };

        render::draw(state, canvas);
        outcome
    }
}
