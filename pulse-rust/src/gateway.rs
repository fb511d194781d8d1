use crate::{
    opentelemetry::trace_gateway_call, prompts, AiRequestKind, AiResult, ArticleRef,
    GatewayError, GatewayParams, GoogleGatewayOptions,
};
use pulse_sdk::{
    google::{GoogleModel, GoogleModelOptions},
    GroundingOption, LanguageModel, LanguageModelInput, LatLng,
};
use std::sync::Arc;
use tracing::error;

/// Façade over a generative model for the three sidebar tools.
///
/// The plain operations never fail: provider errors are logged and replaced
/// with a per-operation failure text, and an empty answer is replaced with a
/// per-operation empty text (see [`AiRequestKind::failure_text`] and
/// [`AiRequestKind::empty_text`]). The `try_*` variants surface
/// [`GatewayError`] instead.
pub struct AiGateway {
    search_model: Arc<dyn LanguageModel>,
    maps_model: Arc<dyn LanguageModel>,
    sentiment_model: Arc<dyn LanguageModel>,
    reference_date: String,
    venue_kind: String,
    sentiment_char_limit: usize,
    sentiment_max_words: u32,
}

impl AiGateway {
    #[must_use]
    pub fn new(params: GatewayParams) -> Self {
        Self {
            search_model: params.search_model,
            maps_model: params.maps_model,
            sentiment_model: params.sentiment_model,
            reference_date: params.reference_date,
            venue_kind: params.venue_kind,
            sentiment_char_limit: params.sentiment_char_limit,
            sentiment_max_words: params.sentiment_max_words,
        }
    }

    /// Gateway backed by Gemini, one model per tool.
    #[must_use]
    pub fn google(options: GoogleGatewayOptions) -> Self {
        let model_options = GoogleModelOptions {
            api_key: options.api_key,
            base_url: options.base_url,
            ..Default::default()
        };
        let model = |model_id: String| -> Arc<dyn LanguageModel> {
            Arc::new(GoogleModel::new(model_id, model_options.clone()))
        };

        let search_model = model(options.search_model_id);
        GatewayParams::new(search_model)
            .maps_model(model(options.maps_model_id))
            .sentiment_model(model(options.sentiment_model_id))
            .build()
    }

    pub fn builder(model: Arc<dyn LanguageModel>) -> GatewayParams {
        GatewayParams::new(model)
    }

    /// Latest news and community reaction on `topic`, grounded on web search.
    pub async fn fetch_latest_news(&self, topic: &str) -> AiResult {
        absorb(
            AiRequestKind::LatestNews,
            self.try_fetch_latest_news(topic).await,
        )
    }

    /// Three comparable open venues near the given point, grounded on maps.
    /// Coordinates are passed through unvalidated.
    pub async fn find_alternatives(&self, location_name: &str, lat: f64, lng: f64) -> AiResult {
        absorb(
            AiRequestKind::Alternatives,
            self.try_find_alternatives(location_name, lat, lng).await,
        )
    }

    /// Short tone and impact assessment of the article body.
    pub async fn analyze_sentiment(&self, article_text: &str) -> String {
        absorb(
            AiRequestKind::Sentiment,
            self.try_analyze_sentiment(article_text)
                .await
                .map(AiResult::text_only),
        )
        .text
    }

    pub async fn try_fetch_latest_news(&self, topic: &str) -> Result<AiResult, GatewayError> {
        let input = LanguageModelInput {
            grounding: Some(GroundingOption::WebSearch),
            ..LanguageModelInput::prompt(prompts::latest_news(topic, &self.reference_date))
        };
        execute(AiRequestKind::LatestNews, self.search_model.as_ref(), input).await
    }

    pub async fn try_find_alternatives(
        &self,
        location_name: &str,
        lat: f64,
        lng: f64,
    ) -> Result<AiResult, GatewayError> {
        let input = LanguageModelInput {
            grounding: Some(GroundingOption::Maps {
                lat_lng: Some(LatLng {
                    latitude: lat,
                    longitude: lng,
                }),
            }),
            ..LanguageModelInput::prompt(prompts::alternatives(location_name, &self.venue_kind))
        };
        execute(AiRequestKind::Alternatives, self.maps_model.as_ref(), input).await
    }

    pub async fn try_analyze_sentiment(&self, article_text: &str) -> Result<String, GatewayError> {
        let excerpt = prompts::truncate_chars(article_text, self.sentiment_char_limit);
        let input = LanguageModelInput::prompt(prompts::sentiment(
            excerpt,
            self.sentiment_max_words,
        ));
        let mut result = execute(
            AiRequestKind::Sentiment,
            self.sentiment_model.as_ref(),
            input,
        )
        .await?;
        // Sentiment is never grounded; drop anything a provider attaches anyway.
        result.sources.clear();
        Ok(result.text)
    }

    /// Run the tool `kind` against `article`, building arguments the way the
    /// sidebar buttons do.
    pub async fn run(&self, kind: AiRequestKind, article: &ArticleRef) -> AiResult {
        match kind {
            AiRequestKind::LatestNews => self.fetch_latest_news(&article.topic()).await,
            AiRequestKind::Alternatives => {
                self.find_alternatives(
                    &article.location.name,
                    article.location.lat,
                    article.location.lng,
                )
                .await
            }
            AiRequestKind::Sentiment => {
                AiResult::text_only(self.analyze_sentiment(&article.body_text()).await)
            }
        }
    }
}

async fn execute(
    kind: AiRequestKind,
    model: &dyn LanguageModel,
    input: LanguageModelInput,
) -> Result<AiResult, GatewayError> {
    trace_gateway_call(kind, &model.model_id(), async move {
        let response = model
            .generate(input)
            .await
            .map_err(|source| GatewayError::ProviderCallFailed {
                operation: kind,
                source,
            })?;

        let (text, used_fallback) = match response.text() {
            Some(text) => (text, false),
            None => (kind.empty_text().to_string(), true),
        };
        Ok((AiResult::new(text, response.sources), used_fallback))
    })
    .await
}

fn absorb(kind: AiRequestKind, result: Result<AiResult, GatewayError>) -> AiResult {
    result.unwrap_or_else(|error| {
        let GatewayError::ProviderCallFailed { source, .. } = &error;
        error!(operation = kind.operation_name(), error = %source, "gateway call failed");
        AiResult::text_only(kind.failure_text())
    })
}
