//! This library is a wrapper of the **ElevenLabs** text-to-speech API.
//! You can use it to synthesize text to speech with many voices ElevenLabs provided.
//!
//! # Features
//! + `blocking`: enable the sync client [ElevenLabsTTSClient](tts::client::ElevenLabsTTSClient)
//!   and the sync [get_voices_list](voice::get_voices_list) function.
//!
//! # How to use
//! 1. You need an ElevenLabs API key. Pass it to [connect](tts::client::connect) or
//!    [connect_async](tts::client::connect_async) directly, or set the `ELEVENLABS_API_KEY`
//!    environment variable and use [connect_from_env](tts::client::connect_from_env) or
//!    [connect_async_from_env](tts::client::connect_async_from_env). The `_from_env`
//!    constructors fail with a configuration error before any request is made when the
//!    variable is absent or empty.
//!
//! 2. You need a [SpeechConfig](tts::SpeechConfig) to configure the voice of text to speech.
//!    [SpeechConfig::default](tts::SpeechConfig) selects the `Rachel` voice and the
//!    `eleven_monolingual_v1` model. You can convert [Voice](voice::Voice) to
//!    [SpeechConfig](tts::SpeechConfig) simply. Use
//!    [get_voices_list_async](voice::get_voices_list_async) to get all available voices.
//!    [Voice](voice::Voice) implemented [serde::Serialize] and [serde::Deserialize].
//!    For example:
//!     ```rust,no_run
//!     use elevenlabs_tts::{tts::SpeechConfig, voice::get_voices_list_async};
//!
//!     #[tokio::main]
//!     async fn main() {
//!         let api_key = std::env::var("ELEVENLABS_API_KEY").unwrap();
//!         let voices = get_voices_list_async(&api_key).await.unwrap();
//!         let speech_config = SpeechConfig::from(&voices[0]);
//!     }
//!     ```
//!     You can also create [SpeechConfig](tts::SpeechConfig) by yourself. Make sure you know
//!     the right **voice id** and **output format**.
//!
//! 3. Synthesize text to speech.
//!     ### Client
//!     Call client function [synthesize](tts::client::ElevenLabsTTSClientAsync::synthesize)
//!     to synthesize text to speech. This function returns type
//!     [SynthesizedAudio](tts::client::SynthesizedAudio), you can get
//!     [audio_bytes](tts::client::SynthesizedAudio::audio_bytes) from it.
//!     ```rust,no_run
//!     use elevenlabs_tts::tts::{SpeechConfig, client::connect_async_from_env};
//!
//!     #[tokio::main]
//!     async fn main() {
//!         let tts = connect_async_from_env().unwrap();
//!         let audio = tts
//!             .synthesize("Hello, World!", &SpeechConfig::default())
//!             .await
//!             .unwrap();
//!         std::fs::write("hello.mp3", audio.audio_bytes).unwrap();
//!     }
//!     ```
//!     ### Stream
//!     Call client function
//!     [synthesize_stream](tts::client::ElevenLabsTTSClientAsync::synthesize_stream) to get
//!     the response as a lazy sequence of audio chunks instead. Call
//!     [read](tts::stream::AudioStreamAsync::read) until it returns `None`, or hand the
//!     stream to [save_stream_to_file](tts::stream::save_stream_to_file) to write every
//!     chunk to disk in receipt order. The stream is consumed once and is not restartable.
//!     ```rust,no_run
//!     use elevenlabs_tts::tts::{
//!         SpeechConfig,
//!         client::connect_async_from_env,
//!         stream::save_stream_to_file,
//!     };
//!
//!     #[tokio::main]
//!     async fn main() {
//!         let tts = connect_async_from_env().unwrap();
//!         let audio = tts
//!             .synthesize_stream("Hello, World!", &SpeechConfig::default())
//!             .await
//!             .unwrap();
//!         let written = save_stream_to_file(audio, "hello.mp3").await.unwrap();
//!         println!("wrote {} bytes", written);
//!     }
//!     ```

mod constants;

pub mod error;
pub mod tts;
pub mod voice;
