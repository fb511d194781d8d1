use crate::{AiRequestKind, AiResult, GatewayError};
use opentelemetry::trace::Status;
use std::{error::Error, future::Future};
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub struct GatewaySpan {
    span: Span,
    sources: Option<usize>,
    fallback: bool,
}

impl GatewaySpan {
    pub fn new(kind: AiRequestKind, model_id: &str) -> Self {
        let span = info_span!("pulse_sidebar.gateway");
        span.set_attribute("gen_ai.operation.name", "generate_content");
        span.set_attribute("gen_ai.request.model", model_id.to_string());
        span.set_attribute("pulse.operation", kind.operation_name());

        Self {
            span,
            sources: None,
            fallback: false,
        }
    }

    pub fn span(&self) -> Span {
        self.span.clone()
    }

    pub fn on_result(&mut self, result: &AiResult, used_fallback: bool) {
        self.sources = Some(result.sources.len());
        self.fallback = used_fallback;
    }

    pub fn on_error(&mut self, error: &(dyn Error + 'static)) {
        self.span.set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
        self.fallback = true;
    }

    pub fn on_end(&mut self) {
        if let Some(sources) = self.sources {
            self.span.set_attribute(
                "pulse.sources.count",
                i64::try_from(sources).unwrap_or(i64::MAX),
            );
        }
        self.span.set_attribute("pulse.fallback", self.fallback);
    }
}

/// Run one gateway operation inside its span. The future yields the result
/// and whether the operation substituted its empty-answer text.
pub async fn trace_gateway_call<Fut>(
    kind: AiRequestKind,
    model_id: &str,
    future: Fut,
) -> Result<AiResult, GatewayError>
where
    Fut: Future<Output = Result<(AiResult, bool), GatewayError>>,
{
    let mut span = GatewaySpan::new(kind, model_id);
    let result = future.instrument(span.span()).await;

    let result = match result {
        Ok((ai_result, used_fallback)) => {
            span.on_result(&ai_result, used_fallback);
            Ok(ai_result)
        }
        Err(error) => {
            span.on_error(&error);
            Err(error)
        }
    };

    span.on_end();
    result
}
