pub const API_BASE_URL: &str = "https://api.elevenlabs.io/v1";

pub const API_KEY_ENV_VAR: &str = "ELEVENLABS_API_KEY";
pub const API_KEY_HEADER: &str = "xi-api-key";

/// "Rachel"
pub const DEFAULT_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";
pub const DEFAULT_MODEL_ID: &str = "eleven_monolingual_v1";
pub const DEFAULT_OUTPUT_FORMAT: &str = "mp3_44100_128";
