//! Client and Stream, SpeechConfig, request builders.

pub mod client;
pub mod stream;

use crate::{constants, voice::VoiceSettings};
use serde::Serialize;

/// Synthesis Config
#[derive(Debug, Clone)]
pub struct SpeechConfig {
    /// ElevenLabs voice id, not the display name.
    pub voice_id: String,
    /// should be one of the output formats below.
    ///
    /// + mp3_22050_32
    /// + mp3_44100_32
    /// + mp3_44100_64
    /// + mp3_44100_96
    /// + mp3_44100_128
    /// + mp3_44100_192
    /// + pcm_8000
    /// + pcm_16000
    /// + pcm_22050
    /// + pcm_24000
    /// + pcm_44100
    /// + ulaw_8000
    /// + alaw_8000
    /// + opus_48000_32
    /// + opus_48000_64
    /// + opus_48000_96
    /// + opus_48000_128
    /// + opus_48000_192
    pub output_format: String,
    pub model_id: String,
    /// Per-request override of the voice settings. Omitted from the request
    /// body when `None`, so the service falls back to the voice defaults.
    pub voice_settings: Option<VoiceSettings>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            voice_id: constants::DEFAULT_VOICE_ID.to_string(),
            output_format: constants::DEFAULT_OUTPUT_FORMAT.to_string(),
            model_id: constants::DEFAULT_MODEL_ID.to_string(),
            voice_settings: None,
        }
    }
}

impl From<&crate::voice::Voice> for SpeechConfig {
    fn from(voice: &crate::voice::Voice) -> Self {
        Self {
            voice_id: voice.voice_id.clone(),
            output_format: constants::DEFAULT_OUTPUT_FORMAT.to_string(),
            model_id: constants::DEFAULT_MODEL_ID.to_string(),
            voice_settings: voice.settings.clone(),
        }
    }
}

#[derive(Serialize)]
struct SynthesisBody<'a> {
    text: &'a str,
    model_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    voice_settings: Option<&'a VoiceSettings>,
}

fn build_synthesis_url(base_url: &str, config: &SpeechConfig) -> String {
    format!(
        "{}/text-to-speech/{}?output_format={}",
        base_url, config.voice_id, config.output_format
    )
}

fn build_synthesis_body<'a>(text: &'a str, config: &'a SpeechConfig) -> SynthesisBody<'a> {
    SynthesisBody {
        text,
        model_id: &config.model_id,
        voice_settings: config.voice_settings.as_ref(),
    }
}
