//! Audio playback on the default output device.
//!
//! One `Playback` owns one output stream and one sink; starting a new clip
//! means dropping the old handle and creating a fresh one.

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, Sink};
use std::io::Cursor;
use tracing::debug;

pub struct Playback {
    _stream: OutputStream,
    sink: Sink,
}

impl Playback {
    /// Decode `bytes` and start playing immediately.
    pub fn start(bytes: Vec<u8>) -> Result<Self> {
        let (_stream, handle) = OutputStream::try_default().context("Opening audio output")?;
        let sink = Sink::try_new(&handle).context("Creating audio sink")?;
        let source = Decoder::new(Cursor::new(bytes)).context("Decoding audio data")?;
        sink.append(source);
        sink.play();
        Ok(Self { _stream, sink })
    }

    pub fn pause(&self) {
        debug!("Pausing playback");
        self.sink.pause();
    }

    /// True once every queued source has been consumed.
    pub fn is_finished(&self) -> bool {
        self.sink.empty()
    }

    pub fn stop(self) {
        self.sink.stop();
        // stream dropped automatically
    }
}
