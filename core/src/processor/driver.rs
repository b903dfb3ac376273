//! processor/driver.rs
//! Chunk orchestration over one owned native stream.
//!
//! A `process` call repeatedly:
//! 1. asks the continuation predicate whether another step is needed,
//! 2. grows the output so at least `min_writable` bytes are free,
//! 3. installs the remaining input and the free output (never more than the
//!    remaining output budget) as the step window,
//! 4. runs one engine step and advances both cursors by the reported diffs.
//!
//! When the predicate says stop, the engine is reset so the next chunk starts a
//! fresh stream on the same allocation.

use tracing::{debug, trace};

use crate::buffer::{grow, grow_within};
use crate::config::ProcessorConfig;
use crate::constants::status_codes;
use crate::native::{Direction, FlateEngine, NativeEngine, Window};
use crate::processor::error::{classify, Phase, ProcessFailure, ProcessorError};
use crate::processor::status::StatusCode;
use crate::telemetry::ProcessorCounters;

/// State handed to the continuation predicate before every iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// The engine reported stream-complete during this call.
    pub completed: bool,
    /// Input bytes consumed so far in this call.
    pub consumed: usize,
    /// Output bytes produced so far in this call.
    pub produced: usize,
    /// Input bytes not yet consumed.
    pub readable: usize,
}

/// Owns one native engine and drives it chunk by chunk.
///
/// Calls must be sequential; the processor holds no locks. Independent
/// processors share nothing and may run on different threads.
pub struct Processor<E: NativeEngine = FlateEngine> {
    engine: Option<E>,
    direction: Direction,
    config: ProcessorConfig,
    completed: bool,
    readable: usize,
    counters: ProcessorCounters,
}

fn failed(
    counters: &mut ProcessorCounters,
    completed: &mut bool,
    consumed: usize,
    error: ProcessorError,
) -> Result<usize, ProcessFailure> {
    counters.failures += 1;
    *completed = false;
    Err(ProcessFailure::new(consumed, error))
}

impl Processor<FlateEngine> {
    pub fn new(direction: Direction, config: ProcessorConfig) -> Result<Self, ProcessorError> {
        match direction {
            Direction::Compress   => Self::compressor(config),
            Direction::Decompress => Self::decompressor(config),
        }
    }

    pub fn compressor(config: ProcessorConfig) -> Result<Self, ProcessorError> {
        config.validate()?;
        let engine = FlateEngine::compressor(config.level, config.zlib_header);
        Self::with_engine(engine, config)
    }

    pub fn decompressor(config: ProcessorConfig) -> Result<Self, ProcessorError> {
        config.validate()?;
        let engine = FlateEngine::decompressor(config.zlib_header);
        Self::with_engine(engine, config)
    }
}

impl<E: NativeEngine> Processor<E> {
    /// Take ownership of an already allocated engine.
    pub fn with_engine(engine: E, config: ProcessorConfig) -> Result<Self, ProcessorError> {
        config.validate()?;
        Ok(Self {
            direction: engine.direction(),
            engine: Some(engine),
            config,
            completed: false,
            readable: 0,
            counters: ProcessorCounters::default(),
        })
    }

    /// Build the window for the next step: all of `input`, and the spare capacity
    /// of `output` capped at `max_out` bytes when given.
    pub fn prepare<'a>(input: &'a [u8], output: &'a mut Vec<u8>, max_out: Option<usize>) -> Window<'a> {
        match max_out {
            Some(max_out) => Window::bounded(input, output, max_out),
            None => Window::new(input, output),
        }
    }

    /// Run engine steps over `input` while `should_continue` holds, then reset the engine.
    ///
    /// `output` is cleared first and afterwards holds exactly the bytes produced by
    /// this call; its capacity is reused and grown as needed.
    ///
    /// Returns the number of input bytes consumed. On failure the partial consumed
    /// count is carried in [`ProcessFailure`] and `output` keeps the bytes produced
    /// before the failing step. Failed calls do not reset the engine; see [`Processor::reset`].
    pub fn process<F>(
        &mut self,
        input: &[u8],
        output: &mut Vec<u8>,
        mut should_continue: F,
    ) -> Result<usize, ProcessFailure>
    where
        F: FnMut(&Progress) -> bool,
    {
        output.clear();
        let Self { engine, config, completed, readable, counters, .. } = self;
        let engine = match engine.as_mut() {
            Some(engine) => engine,
            None => return Err(ProcessFailure::new(0, ProcessorError::Closed)),
        };
        counters.chunks += 1;

        let mut read = 0usize;
        let mut write = 0usize;
        *readable = input.len();

        loop {
            let progress = Progress {
                completed: *completed,
                consumed: read,
                produced: write,
                readable: input.len() - read,
            };
            if !should_continue(&progress) {
                break;
            }

            let grew = match config.max_output {
                None => grow(output, config.min_writable),
                Some(limit) => match grow_within(output, config.min_writable, limit) {
                    Some(grew) => grew,
                    None => {
                        debug!(limit, consumed = read, "output budget exhausted");
                        return failed(counters, completed, read, ProcessorError::OutputBudgetExceeded { limit });
                    }
                },
            };
            if grew {
                counters.grows += 1;
            }

            let remaining = &input[read..];
            *readable = remaining.len();
            let headroom = config.max_output.map(|limit| limit - write);
            let mut window = Self::prepare(remaining, output, headroom);
            let (avail_in, avail_out) = (window.avail_in(), window.avail_out());

            let raw = engine.step(&mut window);
            let consumed = avail_in - window.avail_in();
            let produced = avail_out.saturating_sub(window.avail_out());

            match StatusCode::from_raw(raw) {
                StatusCode::StreamComplete => {
                    *completed = true;
                    counters.stream_ends += 1;
                }
                StatusCode::Progress => {}
                StatusCode::Failure(code) => {
                    output.truncate(write);
                    debug!(code, consumed = read, produced = write, "native step failed");
                    return failed(counters, completed, read, classify(Phase::Processing, code));
                }
            }

            read += consumed;
            write += produced;
            output.truncate(write);
            counters.add_step(consumed, produced);
            trace!(consumed, produced, read, write, status = raw, "engine step");
        }

        *completed = false;
        let raw = engine.reset();
        if raw != status_codes::Z_OK {
            debug!(code = raw, "native reset failed");
            counters.failures += 1;
            return Err(ProcessFailure::new(read, classify(Phase::Reset, raw)));
        }

        Ok(read)
    }

    /// Process one chunk as a complete stream: step until the engine reports stream-complete.
    ///
    /// This is the continuation policy both directions use by default.
    pub fn process_chunk(&mut self, input: &[u8], output: &mut Vec<u8>) -> Result<usize, ProcessFailure> {
        self.process(input, output, |p| !p.completed)
    }

    /// Reset the engine explicitly, e.g. after a failed `process` call.
    pub fn reset(&mut self) -> Result<(), ProcessorError> {
        let engine = self.engine.as_mut().ok_or(ProcessorError::Closed)?;
        self.completed = false;
        match engine.reset() {
            status_codes::Z_OK => Ok(()),
            code => Err(classify(Phase::Reset, code)),
        }
    }

    /// Free the native engine. Later calls report [`ProcessorError::Closed`].
    pub fn close(&mut self) -> Result<(), ProcessorError> {
        match self.engine.take() {
            Some(engine) => {
                debug!(direction = %self.direction, chunks = self.counters.chunks, "closing processor");
                drop(engine);
                Ok(())
            }
            None => Err(ProcessorError::Closed),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.engine.is_none()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    pub fn counters(&self) -> &ProcessorCounters {
        &self.counters
    }

    /// Stream-complete flag; only ever `true` while a `process` call is running.
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Remaining input at the last installed window.
    pub fn last_readable(&self) -> usize {
        self.readable
    }
}
