use elevenlabs_tts::{
    tts::{SpeechConfig, client::connect},
    voice::get_voices_list,
};
use std::time::Instant;

fn main() {
    dotenvy::dotenv().ok();
    let api_key = std::env::var("ELEVENLABS_API_KEY").unwrap();

    println!("get voices list...");
    let voices = get_voices_list(&api_key).unwrap();
    for voice in &voices {
        if voice.name.contains("Rachel") {
            println!("choose '{}' to synthesize...", voice.name);
            let config = SpeechConfig::from(voice);
            let tts = connect(&api_key).unwrap();
            let start = Instant::now();
            let audio = tts.synthesize("Hello, World!", &config).unwrap();
            println!("{} bytes of {}", audio.audio_bytes.len(), audio.audio_format);
            println!("{:?}", Instant::now() - start);
            break;
        }
    }
}
