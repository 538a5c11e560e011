// audio_player.rs

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, Stream};
use std::sync::{Arc, Mutex};

use crate::music_theory::music_theory::{frequency_of, Triad};
use crate::tone::tone::{Tone, Waveform, TONE_SECONDS};

pub struct AudioPlayer {
    stream: Stream,
    active_tones: Arc<Mutex<Vec<Tone>>>,
    pub sample_rate: f32,
    volume: Arc<Mutex<f32>>,
}

impl AudioPlayer {
    pub fn new(initial_volume: f32) -> Result<Self, String> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or("no output device available")?;
        let config = device.default_output_config().map_err(|e| e.to_string())?;
        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;

        let active_tones = Arc::new(Mutex::new(Vec::new()));
        let active_tones_clone = Arc::clone(&active_tones);

        let volume = Arc::new(Mutex::new(initial_volume));
        let volume_clone = Arc::clone(&volume);

        let stream = match config.sample_format() {
            SampleFormat::F32 => device
                .build_output_stream(
                    &config.into(),
                    move |data: &mut [f32], _| {
                        AudioPlayer::write_data(data, channels, &active_tones_clone, &volume_clone);
                    },
                    |err| eprintln!("audio stream error: {}", err),
                    None,
                )
                .map_err(|e| e.to_string())?,
            format => return Err(format!("unsupported sample format: {:?}", format)),
        };

        Ok(Self {
            stream,
            active_tones,
            sample_rate,
            volume,
        })
    }

    /// Mixes every sounding tone into the output buffer, dropping tones that
    /// have run out of samples.
    fn write_data(
        output: &mut [f32],
        channels: usize,
        active_tones: &Arc<Mutex<Vec<Tone>>>,
        volume: &Arc<Mutex<f32>>,
    ) {
        let mut active_tones = active_tones.lock().unwrap();
        let volume = *volume.lock().unwrap();

        for frame in output.chunks_mut(channels) {
            let mut value = 0.0;

            active_tones.retain_mut(|tone| match tone.next_sample() {
                Some(sample) => {
                    value += sample;
                    true
                }
                None => false,
            });

            value *= volume;

            // Prevent clipping
            value = value.clamp(-1.0, 1.0);

            for sample in frame.iter_mut() {
                *sample = value;
            }
        }
    }

    /// Schedules all three triad notes under one lock so they start on the
    /// same output callback. The stream is resumed first since the platform
    /// may hand it over suspended until user interaction.
    pub fn play_triad(&self, triad: &Triad, waveform: Waveform) -> Result<(), String> {
        self.stream.play().map_err(|e| e.to_string())?;

        let tones = tones_for(triad, self.sample_rate, waveform);
        let mut active_tones = self.active_tones.lock().unwrap();
        active_tones.extend(tones);
        Ok(())
    }

    pub fn set_volume(&self, new_volume: f32) {
        *self.volume.lock().unwrap() = new_volume;
    }
}

/// One tone per triad note, each with the fixed chord duration.
pub fn tones_for(triad: &Triad, sample_rate: f32, waveform: Waveform) -> Vec<Tone> {
    triad
        .notes
        .iter()
        .map(|&note| Tone::new(frequency_of(note), TONE_SECONDS, sample_rate, waveform))
        .collect()
}
