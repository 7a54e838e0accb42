use elevenlabs_tts::{
    tts::{SpeechConfig, client::connect_async},
    voice::get_voices_list_async,
};
use std::time::Instant;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let api_key = std::env::var("ELEVENLABS_API_KEY").unwrap();

    println!("get voices list...");
    let voices = get_voices_list_async(&api_key).await.unwrap();
    for voice in &voices {
        if voice.name.contains("Rachel") {
            println!("choose '{}' to synthesize...", voice.name);
            let config = SpeechConfig::from(voice);
            let tts = connect_async(&api_key).unwrap();
            let start = Instant::now();
            let audio = tts.synthesize("Hello, World!", &config).await.unwrap();
            println!("{} bytes of {}", audio.audio_bytes.len(), audio.audio_format);
            println!("{:?}", Instant::now() - start);
            break;
        }
    }
}
