use elevenlabs_tts::{
    error::Result,
    tts::{SpeechConfig, client::connect_async_from_env, stream::save_stream_to_file},
};
use std::process::ExitCode;

const TEXT_TO_SPEAK: &str = "Hello, this is a test!";
const OUTPUT_PATH: &str = "test_audio.mp3";

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    match run().await {
        Ok(_) => {
            println!("Successfully saved audio to {OUTPUT_PATH}");
            println!("You can now play the '{OUTPUT_PATH}' file to hear the result.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("An error occurred: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<u64> {
    let tts = connect_async_from_env()?;
    let config = SpeechConfig::default();

    println!("Generating audio from ElevenLabs...");
    let audio = tts.synthesize_stream(TEXT_TO_SPEAK, &config).await?;
    save_stream_to_file(audio, OUTPUT_PATH).await
}
