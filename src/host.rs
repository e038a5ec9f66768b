//! Audio host session backed by cpal.
//!
//! Lifecycle, in order: [`Session::open`] → [`Session::register_output`] →
//! [`Session::activate`] (registers the callback and starts the stream) →
//! [`ActiveSession::close`]. A failed open never reaches callback
//! registration, and everything that can fail happens here rather than on
//! the audio thread.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{
    BufferSize, FromSample, Sample, SampleFormat, SizedSample, StreamConfig, SupportedBufferSize,
};

use crate::callback::{BufferCallback, ProcessStatus};
use crate::error::{Error, Result};

/// Scratch frames allocated when the host picks its own buffer size.
const DEFAULT_SCRATCH_FRAMES: usize = 4096;

/// An open connection to the default output device, not yet running.
pub struct Session {
    name: String,
    device: cpal::Device,
    config: cpal::SupportedStreamConfig,
}

/// The single mono output channel, fanned out to every device channel.
#[derive(Debug, Clone)]
pub struct OutputPort {
    config: StreamConfig,
    sample_format: SampleFormat,
    scratch_frames: usize,
}

/// A running stream. Dropping it also stops the callback.
pub struct ActiveSession {
    name: String,
    stream: cpal::Stream,
    sample_rate: f64,
}

impl Session {
    /// Connect to the default host and its default output device.
    pub fn open(name: &str) -> Result<Self> {
        let host = cpal::default_host();
        log::info!("cpal host: {}", host.id().name());

        let device = host
            .default_output_device()
            .ok_or_else(|| Error::HostUnavailable("no output device".to_string()))?;
        match device.name() {
            Ok(device_name) => log::info!("cpal device: {}", device_name),
            Err(_) => log::info!("cpal device: (no name)"),
        }

        let config = device
            .default_output_config()
            .map_err(|e| Error::HostUnavailable(e.to_string()))?;
        log::debug!("default output config: {:?}", config);

        Ok(Self {
            name: name.to_string(),
            device,
            config,
        })
    }

    /// Sample rate the device will run at, in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.config.sample_rate().0 as f64
    }

    /// Describe the output channel, optionally requesting a buffer size in
    /// frames. The request is clamped to what the device supports.
    pub fn register_output(&self, buffer_frames: Option<u32>) -> OutputPort {
        let buffer_size = choose_buffer_size(buffer_frames, self.config.buffer_size());
        let scratch_frames = match buffer_size {
            BufferSize::Fixed(frames) if frames > 0 => frames as usize,
            _ => DEFAULT_SCRATCH_FRAMES,
        };
        let config = StreamConfig {
            channels: self.config.channels(),
            sample_rate: self.config.sample_rate(),
            buffer_size,
        };
        log::info!("sample rate: {}", config.sample_rate.0);
        log::info!("num channels: {}", config.channels);
        log::info!("buffer size: {:?}", config.buffer_size);

        OutputPort {
            config,
            sample_format: self.config.sample_format(),
            scratch_frames,
        }
    }

    /// Register `callback` on `port` and start the stream.
    pub fn activate<C>(self, port: OutputPort, callback: C) -> Result<ActiveSession>
    where
        C: BufferCallback + Send + 'static,
    {
        let sample_rate = port.config.sample_rate.0 as f64;
        let renderer = Renderer::new(
            callback,
            sample_rate,
            port.config.channels as usize,
            port.scratch_frames,
        );

        let stream = match port.sample_format {
            SampleFormat::F32 => build_stream::<f32, C>(&self.device, &port.config, renderer)?,
            SampleFormat::I16 => build_stream::<i16, C>(&self.device, &port.config, renderer)?,
            SampleFormat::U16 => build_stream::<u16, C>(&self.device, &port.config, renderer)?,
            sample_format => {
                return Err(Error::UnsupportedSampleFormat(sample_format.to_string()));
            }
        };

        stream
            .play()
            .map_err(|e| Error::Activation(e.to_string()))?;
        log::debug!("{}: audio stream started", self.name);

        Ok(ActiveSession {
            name: self.name,
            stream,
            sample_rate,
        })
    }
}

impl ActiveSession {
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Stop the stream. No callback runs after this returns.
    pub fn close(self) {
        if let Err(e) = self.stream.pause() {
            log::warn!("{}: failed to pause stream: {}", self.name, e);
        }
        drop(self.stream);
        log::debug!("{}: audio stream closed", self.name);
    }
}

fn build_stream<T, C>(
    device: &cpal::Device,
    config: &StreamConfig,
    mut renderer: Renderer<C>,
) -> Result<cpal::Stream>
where
    T: SizedSample + FromSample<f64>,
    C: BufferCallback + Send + 'static,
{
    device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| renderer.render(data),
            |err| log::error!("audio stream error: {}", err),
            None,
        )
        .map_err(|e| Error::Activation(e.to_string()))
}

fn choose_buffer_size(requested: Option<u32>, supported: &SupportedBufferSize) -> BufferSize {
    match (requested, supported) {
        (Some(frames), SupportedBufferSize::Range { min, max }) if min <= max => {
            BufferSize::Fixed(frames.clamp(*min, *max))
        }
        _ => BufferSize::Default,
    }
}

/// Drives a [`BufferCallback`] from interleaved device buffers.
///
/// The mono scratch buffer is allocated up front; a device buffer longer
/// than the scratch is rendered in several calls, which the callback's
/// phase continuity makes seamless.
struct Renderer<C> {
    callback: C,
    sample_rate: f64,
    channels: usize,
    scratch: Vec<f64>,
    finished: bool,
}

impl<C: BufferCallback> Renderer<C> {
    fn new(callback: C, sample_rate: f64, channels: usize, scratch_frames: usize) -> Self {
        Self {
            callback,
            sample_rate,
            channels: channels.max(1),
            scratch: vec![0.0; scratch_frames.max(1)],
            finished: false,
        }
    }

    fn render<T>(&mut self, data: &mut [T])
    where
        T: Sample + FromSample<f64>,
    {
        for block in data.chunks_mut(self.scratch.len() * self.channels) {
            if self.finished {
                block.fill(T::EQUILIBRIUM);
                continue;
            }

            let mono = &mut self.scratch[..block.len() / self.channels];
            if self.callback.on_buffer(self.sample_rate, mono) == ProcessStatus::Quit {
                self.finished = true;
            }

            // copy the same value to all channels
            for (frame, &sample) in block.chunks_mut(self.channels).zip(mono.iter()) {
                frame.fill(T::from_sample(sample));
            }
        }
    }
}
