//! Voice Type and Get function
//!
//! Use [get_voices_list] function to get all available voices.
//! Use [get_voices_list_async] function to get all available voices asynchronously.

use crate::{
    constants,
    error::{Error, Result},
};
use std::collections::HashMap;

/// Per-voice synthesis settings
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_speaker_boost: Option<bool>,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
            style: None,
            use_speaker_boost: None,
        }
    }
}

/// Voice get from the ElevenLabs voices API.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Voice {
    pub voice_id: String,
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub preview_url: Option<String>,
    pub labels: Option<HashMap<String, String>>,
    pub settings: Option<VoiceSettings>,
}

impl From<String> for Voice {
    fn from(voice_id: String) -> Self {
        Self {
            voice_id,
            name: String::new(),
            category: None,
            description: None,
            preview_url: None,
            labels: None,
            settings: None,
        }
    }
}

impl From<&str> for Voice {
    fn from(voice_id: &str) -> Self {
        voice_id.to_string().into()
    }
}

#[derive(serde::Deserialize)]
struct VoicesResponse {
    voices: Vec<Voice>,
}

/// Get all available voices
#[cfg(feature = "blocking")]
pub fn get_voices_list(api_key: &str) -> Result<Vec<Voice>> {
    let response = reqwest::blocking::Client::new()
        .get(format!("{}/voices", constants::API_BASE_URL))
        .header(constants::API_KEY_HEADER, api_key)
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::ApiError {
            status: status.as_u16(),
            message: response.text().unwrap_or_default(),
        });
    }

    Ok(response.json::<VoicesResponse>()?.voices)
}

/// Get all available voices asynchronously
pub async fn get_voices_list_async(api_key: &str) -> Result<Vec<Voice>> {
    let response = reqwest::Client::new()
        .get(format!("{}/voices", constants::API_BASE_URL))
        .header(constants::API_KEY_HEADER, api_key)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::ApiError {
            status: status.as_u16(),
            message: response.text().await.unwrap_or_default(),
        });
    }

    Ok(response.json::<VoicesResponse>().await?.voices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voices_response_decodes_vendor_shape() {
        let json = r#"{
            "voices": [
                {
                    "voice_id": "21m00Tcm4TlvDq8ikWAM",
                    "name": "Rachel",
                    "category": "premade",
                    "labels": {"accent": "american", "gender": "female"},
                    "preview_url": "https://storage.googleapis.com/eleven-public-prod/premade/voices/21m00Tcm4TlvDq8ikWAM/df6788f9-5c96-470d-8312-aab3b3d8f50a.mp3",
                    "settings": {"stability": 0.75, "similarity_boost": 0.75}
                },
                {
                    "voice_id": "2EiwWnXFnvU5JabPnv8n",
                    "name": "Clyde"
                }
            ]
        }"#;

        let voices = serde_json::from_str::<VoicesResponse>(json).unwrap().voices;
        assert_eq!(voices.len(), 2);
        assert_eq!(voices[0].voice_id, "21m00Tcm4TlvDq8ikWAM");
        assert_eq!(voices[0].name, "Rachel");
        assert_eq!(
            voices[0].labels.as_ref().unwrap()["accent"],
            "american"
        );
        assert_eq!(voices[0].settings.as_ref().unwrap().stability, 0.75);
        assert!(voices[1].settings.is_none());
    }

    #[test]
    fn voice_settings_roundtrip_skips_absent_fields() {
        let json = serde_json::to_value(VoiceSettings::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"stability": 0.5, "similarity_boost": 0.75})
        );
    }
}
