use elevenlabs_tts::tts::{SpeechConfig, client::connect_async_from_env};
use std::{io::Write, time::Instant};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let tts = connect_async_from_env().unwrap();
    let config = SpeechConfig::default();
    let start = Instant::now();
    let mut audio = tts
        .synthesize_stream("Hello, World!", &config)
        .await
        .unwrap();

    let mut file = std::fs::File::create("synthesize_stream_async.mp3").unwrap();
    while let Some(chunk) = audio.read().await.unwrap() {
        println!("read {} bytes", chunk.len());
        file.write_all(&chunk).unwrap();
    }
    println!("{:?}", Instant::now() - start);
}
