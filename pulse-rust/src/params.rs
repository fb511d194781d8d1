use crate::AiGateway;
use pulse_sdk::LanguageModel;
use std::sync::Arc;

pub const DEFAULT_SEARCH_MODEL_ID: &str = "gemini-3-pro-preview";
pub const DEFAULT_MAPS_MODEL_ID: &str = "gemini-2.5-flash";
pub const DEFAULT_SENTIMENT_MODEL_ID: &str = "gemini-2.5-flash";
pub const DEFAULT_REFERENCE_DATE: &str = "December 1, 2025";
pub const DEFAULT_VENUE_KIND: &str = "used bookstores";
pub const DEFAULT_SENTIMENT_CHAR_LIMIT: usize = 2000;
pub const DEFAULT_SENTIMENT_MAX_WORDS: u32 = 100;

/// Parameters required to create a new gateway.
/// # Default Values
/// - `search_model`, `maps_model`, `sentiment_model`: the model given to `new`
/// - `reference_date`: `"December 1, 2025"`
/// - `venue_kind`: `"used bookstores"`
/// - `sentiment_char_limit`: 2000
/// - `sentiment_max_words`: 100
pub struct GatewayParams {
    /// Model used for the web-search-grounded latest news query.
    pub search_model: Arc<dyn LanguageModel>,
    /// Model used for the maps-grounded alternatives query.
    pub maps_model: Arc<dyn LanguageModel>,
    /// Model used for sentiment analysis. Never asked for grounding.
    pub sentiment_model: Arc<dyn LanguageModel>,
    /// Developments are requested "since" this date.
    pub reference_date: String,
    /// What to look for near the article's location, in plural form.
    pub venue_kind: String,
    /// Article text beyond this many characters is not sent.
    pub sentiment_char_limit: usize,
    /// Word bound stated in the sentiment prompt.
    pub sentiment_max_words: u32,
}

impl GatewayParams {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self {
            search_model: model.clone(),
            maps_model: model.clone(),
            sentiment_model: model,
            reference_date: DEFAULT_REFERENCE_DATE.to_string(),
            venue_kind: DEFAULT_VENUE_KIND.to_string(),
            sentiment_char_limit: DEFAULT_SENTIMENT_CHAR_LIMIT,
            sentiment_max_words: DEFAULT_SENTIMENT_MAX_WORDS,
        }
    }

    #[must_use]
    pub fn search_model(mut self, model: Arc<dyn LanguageModel>) -> Self {
        self.search_model = model;
        self
    }

    #[must_use]
    pub fn maps_model(mut self, model: Arc<dyn LanguageModel>) -> Self {
        self.maps_model = model;
        self
    }

    #[must_use]
    pub fn sentiment_model(mut self, model: Arc<dyn LanguageModel>) -> Self {
        self.sentiment_model = model;
        self
    }

    /// Set the date the latest news query asks for developments since.
    #[must_use]
    pub fn reference_date(mut self, reference_date: impl Into<String>) -> Self {
        self.reference_date = reference_date.into();
        self
    }

    /// Set the kind of venue the alternatives query looks for, e.g.
    /// `"used bookstores"` or `"independent cafes"`.
    #[must_use]
    pub fn venue_kind(mut self, venue_kind: impl Into<String>) -> Self {
        self.venue_kind = venue_kind.into();
        self
    }

    #[must_use]
    pub fn sentiment_char_limit(mut self, limit: usize) -> Self {
        self.sentiment_char_limit = limit;
        self
    }

    #[must_use]
    pub fn sentiment_max_words(mut self, max_words: u32) -> Self {
        self.sentiment_max_words = max_words;
        self
    }

    #[must_use]
    pub fn build(self) -> AiGateway {
        AiGateway::new(self)
    }
}

/// Options for a gateway backed by Google Gemini models.
#[derive(Clone)]
pub struct GoogleGatewayOptions {
    pub api_key: String,
    /// Overrides the Gemini REST endpoint, e.g. to point at a proxy.
    pub base_url: Option<String>,
    pub search_model_id: String,
    pub maps_model_id: String,
    pub sentiment_model_id: String,
}

impl GoogleGatewayOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            search_model_id: DEFAULT_SEARCH_MODEL_ID.to_string(),
            maps_model_id: DEFAULT_MAPS_MODEL_ID.to_string(),
            sentiment_model_id: DEFAULT_SENTIMENT_MODEL_ID.to_string(),
        }
    }
}
