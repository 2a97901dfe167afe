//! The alert sound: what it is, how it is decoded, and how it is played.
//!
//! [`TimerScreen`](crate::screen::TimerScreen) only sees the [`AlertPlayer`] trait, so tests
//! can swap the rodio-backed player for a recording fake.

use std::io::{Cursor, Read, Seek};
use std::time::Duration;

use rodio::buffer::SamplesBuffer;
use rodio::decoder::DecoderError;
use rodio::{Decoder, OutputStream, OutputStreamHandle, PlayError, Sink, Source, StreamError};
use thiserror::Error;
use tracing::{debug, warn};

use crate::sfx::sink_gain;

/// The bundled alert clip.
pub const BUNDLED_ALERT: &[u8] = include_bytes!("../assets/alert.wav");

#[derive(Debug, Error)]
pub enum AlertError {
    #[error("failed to decode alert sound: {0}")]
    Decode(#[from] DecoderError),
    #[error("alert sound contains no samples")]
    EmptyClip,
    #[error("failed to open audio output: {0}")]
    Stream(#[from] StreamError),
    #[error("failed to create audio player: {0}")]
    Play(#[from] PlayError),
}

/// One-shot sound playback as seen by the timer.
pub trait AlertPlayer {
    fn is_playing(&self) -> bool;

    /// Starts (or resumes) playback.
    fn play(&mut self);

    /// Makes the next `play` start from the beginning of the clip.
    fn rewind(&mut self);

    fn volume(&self) -> f64;

    /// Stores `volume` as given; implementations clamp only what they hand to the device.
    fn set_volume(&mut self, volume: f64);
}

/// Fully decoded PCM, kept in memory so every alert can start from sample zero.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertClip {
    channels: u16,
    sample_rate: u32,
    samples: Vec<f32>,
}

impl AlertClip {
    pub fn bundled() -> Result<Self, AlertError> {
        Self::decode(Cursor::new(BUNDLED_ALERT))
    }

    pub fn decode<R>(reader: R) -> Result<Self, AlertError>
    where
        R: Read + Seek + Send + Sync + 'static,
    {
        let decoder = Decoder::new(reader)?;
        let channels = decoder.channels();
        let sample_rate = decoder.sample_rate();
        let samples: Vec<f32> = decoder.convert_samples().collect();
        if samples.is_empty() || channels == 0 {
            return Err(AlertError::EmptyClip);
        }
        Ok(Self {
            channels,
            sample_rate,
            samples,
        })
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn duration(&self) -> Duration {
        let frames = self.samples.len() as f64 / f64::from(self.channels);
        Duration::from_secs_f64(frames / f64::from(self.sample_rate.max(1)))
    }

    fn source(&self) -> SamplesBuffer<f32> {
        SamplesBuffer::new(self.channels, self.sample_rate, self.samples.clone())
    }
}

/// [`AlertPlayer`] on the default audio output device.
pub struct RodioAlertPlayer {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Sink,
    clip: AlertClip,
    volume: f64,
}

impl RodioAlertPlayer {
    pub fn new(clip: AlertClip, volume: f64) -> Result<Self, AlertError> {
        let (stream, handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&handle)?;
        sink.set_volume(sink_gain(volume));
        debug!(
            channels = clip.channels(),
            sample_rate = clip.sample_rate(),
            duration_ms = clip.duration().as_millis() as u64,
            "alert player ready"
        );
        Ok(Self {
            _stream: stream,
            handle,
            sink,
            clip,
            volume,
        })
    }
}

impl AlertPlayer for RodioAlertPlayer {
    fn is_playing(&self) -> bool {
        !self.sink.empty() && !self.sink.is_paused()
    }

    fn play(&mut self) {
        if self.sink.empty() {
            self.sink.append(self.clip.source());
        }
        self.sink.play();
    }

    fn rewind(&mut self) {
        if self.sink.empty() {
            // Nothing queued: the next `play` appends the clip from the top anyway.
            return;
        }
        // A stopped sink can't be restarted, so the replacement is opened before the old one
        // stops. On failure the current sink stays in place and keeps playing.
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                sink.set_volume(sink_gain(self.volume));
                self.sink.stop();
                self.sink = sink;
            }
            Err(err) => warn!("failed to open a fresh alert sink: {err}"),
        }
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
        self.sink.set_volume(sink_gain(volume));
    }
}
