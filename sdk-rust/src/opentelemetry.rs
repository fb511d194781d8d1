use crate::{GroundingOption, LanguageModelInput, LanguageModelResult, ModelResponse, ModelUsage};
use opentelemetry::trace::Status;
use std::time::Instant;
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub struct LmSpan {
    span: Span,
    usage: Option<ModelUsage>,
    sources: Option<usize>,
    start_time: Instant,
    max_tokens: Option<u32>,
    temperature: Option<f64>,
}

impl LmSpan {
    pub fn new(provider: &str, model_id: &str, input: &LanguageModelInput) -> Self {
        let span = info_span!("pulse_sdk.generate");
        span.set_attribute("gen_ai.operation.name", "generate_content");
        span.set_attribute("gen_ai.provider.name", provider.to_string());
        span.set_attribute("gen_ai.request.model", model_id.to_string());
        if let Some(grounding) = &input.grounding {
            span.set_attribute("pulse_sdk.grounding", grounding_name(grounding));
        }

        Self {
            span,
            usage: None,
            sources: None,
            start_time: Instant::now(),
            max_tokens: input.max_tokens,
            temperature: input.temperature,
        }
    }

    fn span(&self) -> Span {
        self.span.clone()
    }

    pub async fn instrument_future<F>(&self, future: F) -> F::Output
    where
        F: std::future::Future,
    {
        future.instrument(self.span()).await
    }

    pub fn on_response(&mut self, response: &ModelResponse) {
        if let Some(usage) = &response.usage {
            self.usage = Some(usage.clone());
        }
        self.sources = Some(response.sources.len());
    }

    pub fn on_error(&mut self, error: &(dyn std::error::Error + 'static)) {
        self.span.set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
    }

    pub fn on_end(&mut self) {
        if let Some(usage) = &self.usage {
            self.span.set_attribute("gen_ai.usage.input_tokens", i64::from(usage.input_tokens));
            self.span.set_attribute("gen_ai.usage.output_tokens", i64::from(usage.output_tokens));
        }

        if let Some(sources) = self.sources {
            self.span.set_attribute(
                "pulse_sdk.sources.count",
                i64::try_from(sources).unwrap_or(i64::MAX),
            );
        }

        if let Some(max_tokens) = self.max_tokens {
            self.span.set_attribute("gen_ai.request.max_tokens", i64::from(max_tokens));
        }
        if let Some(temperature) = self.temperature {
            self.span.set_attribute("gen_ai.request.temperature", temperature);
        }

        self.span.set_attribute("pulse_sdk.duration", self.elapsed_seconds());
    }

    fn elapsed_seconds(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }
}

fn grounding_name(grounding: &GroundingOption) -> &'static str {
    match grounding {
        GroundingOption::WebSearch => "web_search",
        GroundingOption::Maps { .. } => "maps",
    }
}

pub async fn trace_generate<F, Fut>(
    provider: &str,
    model_id: &str,
    input: LanguageModelInput,
    f: F,
) -> LanguageModelResult<ModelResponse>
where
    F: FnOnce(LanguageModelInput) -> Fut,
    Fut: std::future::Future<Output = LanguageModelResult<ModelResponse>>,
{
    let mut span = LmSpan::new(provider, model_id, &input);
    let result = span.instrument_future(f(input)).await;

    match &result {
        Ok(response) => span.on_response(response),
        Err(error) => span.on_error(error),
    }

    span.on_end();
    result
}
