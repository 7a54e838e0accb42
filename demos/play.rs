use elevenlabs_tts::tts::{SpeechConfig, client::connect_from_env};
use std::time::Instant;

fn main() {
    dotenvy::dotenv().ok();

    let tts = connect_from_env().unwrap();
    let config = SpeechConfig::default();
    let start = Instant::now();
    let audio = tts.synthesize("Hello, World!", &config).unwrap();
    println!("{} bytes", audio.audio_bytes.len());
    println!("{:?}", Instant::now() - start);

    println!("play audio...");
    let stream_handle = rodio::OutputStreamBuilder::open_default_stream().unwrap();
    let sink = rodio::play(
        stream_handle.mixer(),
        std::io::Cursor::new(audio.audio_bytes),
    )
    .unwrap();
    sink.sleep_until_end();
    println!("play audio done.");
}
