//! Audio playback — cpal output stream fed through a lock-free sample queue.
//!
//! The note is rendered up front on the main thread and pushed into a
//! heap-allocated SPSC ring; the audio callback drains it through the
//! master limiter and emits silence once the queue runs dry.

pub mod limiter;
pub mod stereo;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use ringbuf::{
    traits::{Consumer, Observer, Producer, Split},
    HeapRb,
};

pub use limiter::Limiter;
pub use stereo::{duplicate, interleave, StereoFrame};

/// Audio playback errors.
#[derive(Debug)]
pub enum AudioError {
    /// No audio output device found.
    NoOutputDevice,
    /// Failed to build the audio stream.
    StreamBuild(String),
    /// Failed to start the audio stream.
    StreamPlay(String),
    /// The sample queue cannot hold the remaining samples.
    QueueFull,
}

impl std::fmt::Display for AudioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AudioError::NoOutputDevice => write!(f, "no audio output device found"),
            AudioError::StreamBuild(e) => write!(f, "stream build error: {e}"),
            AudioError::StreamPlay(e) => write!(f, "stream play error: {e}"),
            AudioError::QueueFull => write!(f, "sample queue is full"),
        }
    }
}

impl std::error::Error for AudioError {}

/// Owns the cpal output stream and the producer half of the sample queue.
pub struct Player {
    _stream: cpal::Stream,
    producer: ringbuf::HeapProd<f32>,
    sample_rate: u32,
    channels: u16,
}

impl Player {
    /// Open the default output device at the given configuration.
    ///
    /// `queue_samples` sizes the ring; it must cover the interleaved length
    /// of everything queued before the callback starts draining.
    pub fn new(sample_rate: u32, channels: u16, queue_samples: usize) -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::NoOutputDevice)?;

        let rb = HeapRb::<f32>::new(queue_samples.max(1));
        let (producer, mut consumer) = rb.split();
        let limiter = Limiter::default();

        let config = cpal::StreamConfig {
            channels,
            sample_rate: cpal::SampleRate(sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        let err_fn = |err: cpal::StreamError| {
            eprintln!("audio stream error: {err}");
        };

        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    let filled = consumer.pop_slice(data);
                    data[filled..].fill(0.0);
                    limiter.apply(data);
                },
                err_fn,
                None,
            )
            .map_err(|e| AudioError::StreamBuild(e.to_string()))?;

        stream
            .play()
            .map_err(|e| AudioError::StreamPlay(e.to_string()))?;

        Ok(Self {
            _stream: stream,
            producer,
            sample_rate,
            channels,
        })
    }

    /// Push interleaved samples onto the queue.
    pub fn queue(&mut self, samples: &[f32]) -> Result<(), AudioError> {
        let pushed = self.producer.push_slice(samples);
        if pushed < samples.len() {
            return Err(AudioError::QueueFull);
        }
        Ok(())
    }

    /// Interleaved samples still waiting in the queue.
    pub fn pending(&self) -> usize {
        self.producer.occupied_len()
    }

    /// The stream's sample rate.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// The stream's channel count.
    pub fn channels(&self) -> u16 {
        self.channels
    }
}
