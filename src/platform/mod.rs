//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (queued by host event handlers, drained once per tick)
//! - Frame timing (blocking sleep on native, accumulator under requestAnimationFrame)
//! - The per-frame poll → update → draw → present sequence

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::consts::MAX_SUBSTEPS;
use crate::renderer::{Canvas, draw_scene};
use crate::sim::{Control, GameState, InputEvent, TickReport, frame};

/// Source of logical input events
pub trait InputSource {
    /// Next pending event, or `None` once this tick's events are drained
    fn next_event(&mut self) -> Option<InputEvent>;
}

/// Frame pacing
pub trait FrameClock {
    /// Block until the next frame boundary
    fn wait_next_frame(&mut self);
}

/// FIFO of events pushed by host event handlers
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl InputSource for InputQueue {
    fn next_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }
}

/// Native frame clock: sleeps off whatever is left of the frame budget
#[derive(Debug)]
pub struct SleepClock {
    frame: Duration,
    next_deadline: Instant,
}

impl SleepClock {
    pub fn new(target_fps: u32) -> Self {
        let frame = Duration::from_secs_f64(1.0 / target_fps.max(1) as f64);
        Self {
            frame,
            next_deadline: Instant::now() + frame,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }
}

impl FrameClock for SleepClock {
    fn wait_next_frame(&mut self) {
        let now = Instant::now();
        if let Some(remaining) = self.next_deadline.checked_duration_since(now) {
            std::thread::sleep(remaining);
            self.next_deadline += self.frame;
        } else {
            // Running behind: don't try to catch up on missed frames
            self.next_deadline = now + self.frame;
        }
    }
}

/// Fixed-timestep accumulator for hosts that call back at their own rate
/// (requestAnimationFrame). Converts elapsed wall time into whole ticks.
#[derive(Debug, Clone)]
pub struct FrameAccumulator {
    dt: f32,
    accumulator: f32,
    last_time_ms: Option<f64>,
}

impl FrameAccumulator {
    pub fn new(target_fps: u32) -> Self {
        Self {
            dt: 1.0 / target_fps.max(1) as f32,
            accumulator: 0.0,
            last_time_ms: None,
        }
    }

    /// Number of ticks due at host timestamp `time_ms`, at most `MAX_SUBSTEPS`
    pub fn ticks_due(&mut self, time_ms: f64) -> u32 {
        let elapsed = match self.last_time_ms {
            Some(last) => ((time_ms - last) / 1000.0) as f32,
            None => self.dt,
        };
        self.last_time_ms = Some(time_ms);

        // Long stalls (background tab) shouldn't fast-forward the game
        self.accumulator += elapsed.clamp(0.0, 0.1);

        let mut ticks = 0;
        while self.accumulator >= self.dt && ticks < MAX_SUBSTEPS {
            self.accumulator -= self.dt;
            ticks += 1;
        }
        if ticks == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.dt);
        }
        ticks
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_time_ms = None;
    }
}

/// Drain all pending input into the state machine, then run one tick.
/// Returns `Control::Quit` as soon as a quit event is seen.
pub fn update<I: InputSource + ?Sized>(
    state: &mut GameState,
    input: &mut I,
) -> (Control, TickReport) {
    frame(state, std::iter::from_fn(|| input.next_event()))
}

/// One complete frame: input, simulation, draw, present
pub fn run_frame<I, C>(state: &mut GameState, input: &mut I, canvas: &mut C) -> Control
where
    I: InputSource + ?Sized,
    C: Canvas + ?Sized,
{
    let (control, _) = update(state, input);
    if control == Control::Quit {
        return Control::Quit;
    }
    draw_scene(state, canvas);
    canvas.present();
    Control::Continue
}

/// Run frames until a quit event arrives. Returns the number of frames run.
pub fn run<I, C, K>(state: &mut GameState, input: &mut I, canvas: &mut C, clock: &mut K) -> u64
where
    I: InputSource + ?Sized,
    C: Canvas + ?Sized,
    K: FrameClock + ?Sized,
{
    let mut frames = 0;
    while run_frame(state, input, canvas) == Control::Continue {
        frames += 1;
        clock.wait_next_frame();
    }
    log::info!("Game loop exited after {} frames", frames);
    frames
}
