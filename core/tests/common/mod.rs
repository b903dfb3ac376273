#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use zproc_core::constants::status_codes::{Z_OK, Z_STREAM_ERROR};
use zproc_core::native::{Direction, NativeEngine, Window};

/// 0x00..=0x0f repeated.
pub fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 16) as u8).collect()
}

/// Deterministic pseudo-random bytes (LCG), mostly incompressible.
pub fn noise(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 33) as u8
        })
        .collect()
}

/// Text-like bytes with some repetition.
pub fn prose(len: usize) -> Vec<u8> {
    const WORDS: &[&str] = &["chunk ", "stream ", "window ", "deflate ", "inflate ", "buffer ", "reset "];
    let mut out = Vec::with_capacity(len);
    let mut i = 0usize;
    while out.len() < len {
        out.extend_from_slice(WORDS[(i * 7 + i / 3) % WORDS.len()].as_bytes());
        i += 1;
    }
    out.truncate(len);
    out
}

/// One scripted engine step.
pub struct Step {
    pub consume: usize,
    pub emit: Vec<u8>,
    pub code: i32,
}

impl Step {
    pub fn new(consume: usize, emit: &[u8], code: i32) -> Self {
        Self { consume, emit: emit.to_vec(), code }
    }
}

/// Native call counters shared with a `ScriptedEngine` after it moves into a processor.
#[derive(Clone, Default)]
pub struct Calls {
    steps: Rc<Cell<usize>>,
    resets: Rc<Cell<usize>>,
    windows: Rc<RefCell<Vec<(usize, usize)>>>,
}

impl Calls {
    /// `(avail_in, avail_out)` of every window handed to `step`.
    pub fn windows(&self) -> Vec<(usize, usize)> {
        self.windows.borrow().clone()
    }

    pub fn steps(&self) -> usize {
        self.steps.get()
    }

    pub fn resets(&self) -> usize {
        self.resets.get()
    }
}

/// Engine that replays a fixed list of steps; an exhausted script reports `Z_STREAM_ERROR`.
pub struct ScriptedEngine {
    direction: Direction,
    script: VecDeque<Step>,
    reset_code: i32,
    calls: Calls,
}

impl ScriptedEngine {
    pub fn new(direction: Direction, script: Vec<Step>) -> (Self, Calls) {
        let calls = Calls::default();
        let engine = Self {
            direction,
            script: script.into(),
            reset_code: Z_OK,
            calls: calls.clone(),
        };
        (engine, calls)
    }

    pub fn with_reset_code(mut self, code: i32) -> Self {
        self.reset_code = code;
        self
    }
}

impl NativeEngine for ScriptedEngine {
    fn direction(&self) -> Direction {
        self.direction
    }

    fn step(&mut self, window: &mut Window<'_>) -> i32 {
        self.calls.steps.set(self.calls.steps.get() + 1);
        self.calls.windows.borrow_mut().push((window.avail_in(), window.avail_out()));
        match self.script.pop_front() {
            Some(step) => {
                window.advance_input(step.consume);
                window.fill(|out| {
                    let n = step.emit.len().min(out.len());
                    out[..n].copy_from_slice(&step.emit[..n]);
                    (n, ())
                });
                step.code
            }
            None => Z_STREAM_ERROR,
        }
    }

    fn reset(&mut self) -> i32 {
        self.calls.resets.set(self.calls.resets.get() + 1);
        self.reset_code
    }
}
