use elevenlabs_tts::voice::get_voices_list_async;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let api_key = std::env::var("ELEVENLABS_API_KEY").unwrap();

    let voices = get_voices_list_async(&api_key).await.unwrap();
    for voice in &voices {
        println!("{} {}", voice.voice_id, voice.name);
    }
}
