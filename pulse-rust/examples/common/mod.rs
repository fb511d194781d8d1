use pulse_sidebar::{AiGateway, ArticleRef, GoogleGatewayOptions};
use std::{env, error::Error};
use tracing_subscriber::EnvFilter;

const FIXTURE: &str = include_str!("../../fixtures/half-price-books.json");

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// The article from `ARTICLE_PATH`, or the bundled Half Price Books story.
pub fn load_article() -> Result<ArticleRef, Box<dyn Error + Send + Sync>> {
    let article = match env::var("ARTICLE_PATH") {
        Ok(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        Err(_) => serde_json::from_str(FIXTURE)?,
    };
    Ok(article)
}

pub fn google_gateway() -> Result<AiGateway, Box<dyn Error + Send + Sync>> {
    let api_key = env::var("GOOGLE_API_KEY").map_err(|_| "GOOGLE_API_KEY is not set")?;

    let mut options = GoogleGatewayOptions::new(api_key);
    options.base_url = env::var("GOOGLE_BASE_URL").ok();
    if let Ok(model_id) = env::var("PULSE_SEARCH_MODEL") {
        options.search_model_id = model_id;
    }
    if let Ok(model_id) = env::var("PULSE_MAPS_MODEL") {
        options.maps_model_id = model_id;
    }
    if let Ok(model_id) = env::var("PULSE_SENTIMENT_MODEL") {
        options.sentiment_model_id = model_id;
    }

    Ok(AiGateway::google(options))
}
