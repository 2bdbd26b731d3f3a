use std::io::{self, Write};

use log::warn;
use oscstep_core::Observer;

use crate::traits::{CanStopEarly, HasState, HasTime};

/// Writes one line per event: `At t = <time>, y = [<y0>, <y1>, ...]`.
///
/// Values use Rust's shortest round-trip formatting unless a fixed number of
/// decimal places is set with [`precision`](LinePrinter::precision).
///
/// If a write fails, the printer keeps the error, asks the driver to stop
/// early, and ignores any further events. [`finish`](LinePrinter::finish)
/// returns the first error.
///
/// # Example
///
/// ```ignore
/// let printer = LinePrinter::<_, 2>::new(std::io::stdout().lock());
/// let solution = driver::solve(create, &schedule, tolerances, state, printer)?;
/// ```
#[derive(Debug)]
pub struct LinePrinter<W, const N: usize> {
    writer: W,
    precision: Option<usize>,
    lines: usize,
    error: Option<io::Error>,
}

impl<W: Write, const N: usize> LinePrinter<W, N> {
    /// Creates a printer that writes to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            precision: None,
            lines: 0,
            error: None,
        }
    }

    /// Formats every value with a fixed number of decimal places.
    #[must_use]
    pub fn precision(mut self, digits: usize) -> Self {
        self.precision = Some(digits);
        self
    }

    /// Returns the number of lines written so far.
    #[must_use]
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Flushes and returns the writer.
    ///
    /// # Errors
    ///
    /// Returns the first write error seen while observing, or the flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_line(&mut self, time: f64, state: &[f64; N]) -> io::Result<()> {
        let w = &mut self.writer;
        match self.precision {
            Some(p) => {
                write!(w, "At t = {time:.p$}, y = [")?;
                for (i, value) in state.iter().enumerate() {
                    let sep = if i == 0 { "" } else { ", " };
                    write!(w, "{sep}{value:.p$}")?;
                }
            }
            None => {
                write!(w, "At t = {time}, y = [")?;
                for (i, value) in state.iter().enumerate() {
                    let sep = if i == 0 { "" } else { ", " };
                    write!(w, "{sep}{value}")?;
                }
            }
        }
        writeln!(w, "]")
    }
}

impl<W, E, A, const N: usize> Observer<E, A> for LinePrinter<W, N>
where
    W: Write,
    E: HasTime + HasState<N>,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.error.is_some() {
            return Some(A::stop_early());
        }

        match self.write_line(event.time(), event.state()) {
            Ok(()) => {
                self.lines += 1;
                None
            }
            Err(err) => {
                warn!("stopping: failed to write output line: {err}");
                self.error = Some(err);
                Some(A::stop_early())
            }
        }
    }
}
