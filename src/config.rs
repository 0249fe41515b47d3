use dotenvy::dotenv;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,
    /// External endpoint every submission is forwarded to.
    pub webhook_url: String,
    pub draft_store_path: String,

    // Rate limiting
    pub rate_submit_per_min: u32,
    pub rate_draft_per_min: u32,

    pub api_prefix: String,
    /// Embed identifier used when the page is not given ?frameId=...
    pub default_frame_id: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").expect("SERVER_ADDR must be set"),
            webhook_url: env::var("WEBHOOK_URL").expect("WEBHOOK_URL must be set"),
            draft_store_path: env::var("DRAFT_STORE_PATH")
                .unwrap_or_else(|_| "data/drafts.json".to_string()),

            rate_submit_per_min: env::var("RATE_SUBMIT_PER_MIN")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap(),
            rate_draft_per_min: env::var("RATE_DRAFT_PER_MIN")
                .unwrap_or_else(|_| "240".to_string())
                .parse()
                .unwrap(),

            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api/v1".to_string()),
            default_frame_id: env::var("DEFAULT_FRAME_ID")
                .unwrap_or_else(|_| "timeoff".to_string()),
        }
    }
}
