//! Console loading spinner shown while the provider call is in flight.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

const FRAMES: [char; 4] = ['/', '-', '\\', '|'];
const TICK: Duration = Duration::from_millis(100);

/// Background spinner thread. The only thing shared with the caller is the
/// stop flag; the thread is always joined on `stop` or drop.
pub struct Spinner {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    /// Start a spinner on stderr.
    pub fn start(message: impl Into<String>) -> Self {
        Self::start_with_writer(message, io::stderr())
    }

    /// Start a spinner drawing to an arbitrary writer.
    pub fn start_with_writer<W>(message: impl Into<String>, mut writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        let message = message.into();
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);

        let handle = thread::spawn(move || {
            let mut frame = 0usize;
            while !flag.load(Ordering::Acquire) {
                // Drawing is best effort; a closed terminal must not kill the run.
                let _ = write!(writer, "\r{} {}", message, FRAMES[frame % FRAMES.len()]);
                let _ = writer.flush();
                thread::sleep(TICK);
                frame = frame.wrapping_add(1);
            }
            let blank = " ".repeat(message.chars().count() + 2);
            let _ = write!(writer, "\r{}\r", blank);
            let _ = writer.flush();
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Stop the animation, clear the line and wait for the thread to exit.
    pub fn stop(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("Spinner thread panicked");
            }
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.finish();
    }
}
