//! TTS Client module

#[cfg(feature = "blocking")]
use super::stream::AudioStream;
use {
    super::{SpeechConfig, build_synthesis_body, build_synthesis_url, stream::AudioStreamAsync},
    crate::{
        constants,
        error::{Error, Result},
    },
};

/// Sync Client
#[cfg(feature = "blocking")]
pub struct ElevenLabsTTSClient {
    api_key: String,
    base_url: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "blocking")]
impl ElevenLabsTTSClient {
    /// Replace the API endpoint, e.g. to point at a mock server in tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Synthesize text to speech with a [SpeechConfig] synchronously
    pub fn synthesize(&self, text: &str, config: &SpeechConfig) -> Result<SynthesizedAudio> {
        let mut stream = self.synthesize_stream(text, config)?;

        let mut audio_bytes = Vec::new();
        while let Some(chunk) = stream.read()? {
            audio_bytes.extend_from_slice(&chunk);
        }

        Ok(SynthesizedAudio {
            audio_format: config.output_format.clone(),
            audio_bytes,
        })
    }

    /// Synthesize text to speech with a [SpeechConfig] synchronously, returning
    /// the response as a lazy [AudioStream] of audio chunks. Reading the stream
    /// to the end exhausts it; it is not restartable.
    pub fn synthesize_stream(&self, text: &str, config: &SpeechConfig) -> Result<AudioStream> {
        let response = self
            .client
            .post(build_synthesis_url(&self.base_url, config))
            .header(constants::API_KEY_HEADER, &self.api_key)
            .json(&build_synthesis_body(text, config))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ApiError {
                status: status.as_u16(),
                message: response.text().unwrap_or_default(),
            });
        }

        Ok(AudioStream::new(response))
    }
}

/// Async Client
pub struct ElevenLabsTTSClientAsync {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl ElevenLabsTTSClientAsync {
    /// Replace the API endpoint, e.g. to point at a mock server in tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Synthesize text to speech with a [SpeechConfig] asynchronously
    pub async fn synthesize(&self, text: &str, config: &SpeechConfig) -> Result<SynthesizedAudio> {
        let mut stream = self.synthesize_stream(text, config).await?;

        let mut audio_bytes = Vec::new();
        while let Some(chunk) = stream.read().await? {
            audio_bytes.extend_from_slice(&chunk);
        }

        Ok(SynthesizedAudio {
            audio_format: config.output_format.clone(),
            audio_bytes,
        })
    }

    /// Synthesize text to speech with a [SpeechConfig] asynchronously, returning
    /// the response as a lazy [AudioStreamAsync] of audio chunks. Reading the
    /// stream to the end exhausts it; it is not restartable.
    pub async fn synthesize_stream(
        &self,
        text: &str,
        config: &SpeechConfig,
    ) -> Result<AudioStreamAsync> {
        let response = self
            .client
            .post(build_synthesis_url(&self.base_url, config))
            .header(constants::API_KEY_HEADER, &self.api_key)
            .json(&build_synthesis_body(text, config))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ApiError {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        Ok(AudioStreamAsync::new(response))
    }
}

/// Synthesized Audio
#[derive(Debug)]
pub struct SynthesizedAudio {
    pub audio_format: String,
    pub audio_bytes: Vec<u8>,
}

/// Create Sync TTS [Client](ElevenLabsTTSClient)
#[cfg(feature = "blocking")]
pub fn connect(api_key: impl Into<String>) -> Result<ElevenLabsTTSClient> {
    Ok(ElevenLabsTTSClient {
        api_key: api_key.into(),
        base_url: constants::API_BASE_URL.to_string(),
        client: reqwest::blocking::Client::builder().build()?,
    })
}

/// Create Sync TTS [Client](ElevenLabsTTSClient) with the api key taken from the
/// `ELEVENLABS_API_KEY` environment variable. Fails with
/// [MissingApiKey](Error::MissingApiKey) before any request is made when the
/// variable is absent or empty.
#[cfg(feature = "blocking")]
pub fn connect_from_env() -> Result<ElevenLabsTTSClient> {
    connect(api_key_from_env()?)
}

/// Create Async TTS [Client](ElevenLabsTTSClientAsync)
pub fn connect_async(api_key: impl Into<String>) -> Result<ElevenLabsTTSClientAsync> {
    Ok(ElevenLabsTTSClientAsync {
        api_key: api_key.into(),
        base_url: constants::API_BASE_URL.to_string(),
        client: reqwest::Client::builder().build()?,
    })
}

/// Create Async TTS [Client](ElevenLabsTTSClientAsync) with the api key taken
/// from the `ELEVENLABS_API_KEY` environment variable. Fails with
/// [MissingApiKey](Error::MissingApiKey) before any request is made when the
/// variable is absent or empty.
pub fn connect_async_from_env() -> Result<ElevenLabsTTSClientAsync> {
    connect_async(api_key_from_env()?)
}

fn api_key_from_env() -> Result<String> {
    api_key_from(std::env::var(constants::API_KEY_ENV_VAR).ok())
}

fn api_key_from(value: Option<String>) -> Result<String> {
    match value {
        Some(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(Error::MissingApiKey(constants::API_KEY_ENV_VAR)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_api_key_is_a_configuration_error() {
        assert!(matches!(
            api_key_from(None),
            Err(Error::MissingApiKey("ELEVENLABS_API_KEY"))
        ));
    }

    #[test]
    fn empty_api_key_is_a_configuration_error() {
        assert!(matches!(
            api_key_from(Some("   ".to_string())),
            Err(Error::MissingApiKey(_))
        ));
    }

    #[test]
    fn present_api_key_is_accepted() {
        assert_eq!(api_key_from(Some("sk-test".to_string())).unwrap(), "sk-test");
    }
}
