use anyhow::{Result, anyhow};
use macroquad::audio::{PlaySoundParams, Sound, load_sound_from_bytes, play_sound};

use crate::game::TickResult;

const SAMPLE_RATE: u32 = 44_100;

/// Short rising chirp played when food is eaten
const EAT_TONES: &[(f32, f32)] = &[(660.0, 0.05), (990.0, 0.07)];
/// Falling jingle played on game over
const GAME_OVER_TONES: &[(f32, f32)] = &[
    (392.0, 0.15),
    (330.0, 0.15),
    (262.0, 0.15),
    (196.0, 0.35),
];

/// Build a PCM16 mono WAV that plays `tones` back to back.
/// Each tone is (frequency in Hz, duration in seconds).
pub fn wav_from_tones(tones: &[(f32, f32)], volume: f32) -> Vec<u8> {
    let num_samples: u32 = tones
        .iter()
        .map(|&(_, seconds)| (seconds * SAMPLE_RATE as f32) as u32)
        .sum();

    let block_align: u16 = 2; // mono 16-bit
    let byte_rate: u32 = SAMPLE_RATE * block_align as u32;
    let data_size: u32 = num_samples * 2;
    let chunk_size: u32 = 36 + data_size;
    let mut data: Vec<u8> = Vec::with_capacity(data_size as usize + 44);

    // RIFF header
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&chunk_size.to_le_bytes());
    data.extend_from_slice(b"WAVE");
    // fmt chunk
    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes()); // PCM chunk size
    data.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    data.extend_from_slice(&1u16.to_le_bytes()); // channels
    data.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    data.extend_from_slice(&byte_rate.to_le_bytes());
    data.extend_from_slice(&block_align.to_le_bytes());
    data.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    // data chunk
    data.extend_from_slice(b"data");
    data.extend_from_slice(&data_size.to_le_bytes());

    let amplitude = volume.clamp(0.0, 1.0) * 0.7;
    for &(frequency_hz, seconds) in tones {
        let samples = (seconds * SAMPLE_RATE as f32) as u32;
        for n in 0..samples {
            let t = n as f32 / SAMPLE_RATE as f32;
            // Linear fade-out so consecutive notes do not click
            let envelope = 1.0 - n as f32 / samples as f32;
            let wave = (std::f32::consts::TAU * frequency_hz * t).sin();
            let sample = (amplitude * envelope * wave * i16::MAX as f32) as i16;
            data.extend_from_slice(&sample.to_le_bytes());
        }
    }
    data
}

/// Sounds for the two gameplay events that make noise
pub struct SoundCues {
    eat: Sound,
    game_over: Sound,
    volume: f32,
}

impl SoundCues {
    pub async fn load(volume: f32) -> Result<Self> {
        let eat = load_sound_from_bytes(&wav_from_tones(EAT_TONES, 0.6))
            .await
            .map_err(|error| anyhow!("failed to load eat sound: {error:?}"))?;
        let game_over = load_sound_from_bytes(&wav_from_tones(GAME_OVER_TONES, 0.7))
            .await
            .map_err(|error| anyhow!("failed to load game over sound: {error:?}"))?;
        Ok(Self {
            eat,
            game_over,
            volume: volume.clamp(0.0, 1.0),
        })
    }

    pub fn play(&self, result: TickResult) {
        let (sound, gain) = match result {
            TickResult::Continue => return,
            TickResult::FoodEaten { .. } => (&self.eat, 0.35),
            TickResult::GameOver { .. } => (&self.game_over, 0.6),
        };
        play_sound(
            sound,
            PlaySoundParams {
                looped: false,
                volume: gain * self.volume,
            },
        );
    }
}
