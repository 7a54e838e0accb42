use elevenlabs_tts::voice::get_voices_list;

fn main() {
    dotenvy::dotenv().ok();
    let api_key = std::env::var("ELEVENLABS_API_KEY").unwrap();

    let voices = get_voices_list(&api_key).unwrap();
    for voice in &voices {
        println!("{} {}", voice.voice_id, voice.name);
    }
}
