mod common;

use axum::http::StatusCode;
use pulse_sdk::{
    pulse_sdk_test::MockLanguageModel, GroundingOption, LanguageModelError, LatLng,
    ModelResponse, Part,
};
use pulse_sidebar::{
    AiGateway, AiRequestKind, AiResult, GatewayError, GoogleGatewayOptions, GroundingSource,
};
use serde_json::json;
use std::sync::Arc;

fn mock_gateway() -> (Arc<MockLanguageModel>, AiGateway) {
    let model = Arc::new(MockLanguageModel::new());
    let gateway = AiGateway::builder(model.clone()).build();
    (model, gateway)
}

fn text_response(text: &str) -> ModelResponse {
    ModelResponse {
        content: vec![Part::text(text)],
        ..Default::default()
    }
}

fn provider_error() -> LanguageModelError {
    LanguageModelError::Invariant("mock", "simulated provider failure".to_string())
}

#[tokio::test]
async fn fetch_latest_news_returns_text_and_web_sources() {
    let (model, gateway) = mock_gateway();
    model.enqueue_generate(ModelResponse {
        content: vec![Part::text("Store open until Jan 15")],
        sources: vec![GroundingSource::web("https://x", "Berkeleyside")],
        ..Default::default()
    });

    let result = gateway.fetch_latest_news("Half Price Books Berkeley").await;

    assert_eq!(
        result,
        AiResult::new(
            "Store open until Jan 15",
            vec![GroundingSource::web("https://x", "Berkeleyside")],
        )
    );
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "text": "Store open until Jan 15",
            "sources": [{ "web": { "uri": "https://x", "title": "Berkeleyside" } }]
        })
    );

    let inputs = model.tracked_generate_inputs();
    assert_eq!(inputs.len(), 1);
    assert_eq!(inputs[0].grounding, Some(GroundingOption::WebSearch));
    let prompt = inputs[0].user_text();
    assert!(prompt.contains("regarding: Half Price Books Berkeley."));
    assert!(prompt.contains("since December 1, 2025."));
}

#[tokio::test]
async fn successful_answers_without_citations_have_empty_sources() {
    let (model, gateway) = mock_gateway();
    model
        .enqueue_generate(text_response("News"))
        .enqueue_generate(text_response("Alternatives"))
        .enqueue_generate(text_response("Measured, sad"));

    assert_eq!(
        gateway.fetch_latest_news("topic").await,
        AiResult::new("News", vec![])
    );
    assert_eq!(
        gateway.find_alternatives("place", 1.0, 2.0).await,
        AiResult::new("Alternatives", vec![])
    );
    assert_eq!(gateway.analyze_sentiment("body").await, "Measured, sad");
}

#[tokio::test]
async fn empty_answers_use_operation_fallback_text() {
    let (model, gateway) = mock_gateway();
    model
        .enqueue_generate(ModelResponse::default())
        .enqueue_generate(text_response(""))
        .enqueue_generate(ModelResponse::default());

    assert_eq!(
        gateway.fetch_latest_news("topic").await,
        AiResult::text_only("No updates found.")
    );
    assert_eq!(
        gateway.find_alternatives("place", 1.0, 2.0).await,
        AiResult::text_only("No alternatives found.")
    );
    assert_eq!(
        gateway.analyze_sentiment("body").await,
        "Could not analyze sentiment."
    );
}

#[tokio::test]
async fn empty_answer_keeps_provider_sources() {
    let (model, gateway) = mock_gateway();
    model.enqueue_generate(ModelResponse {
        sources: vec![GroundingSource::map("https://maps/1", "Moe's Books", None)],
        ..Default::default()
    });

    let result = gateway.find_alternatives("place", 1.0, 2.0).await;
    assert_eq!(result.text, "No alternatives found.");
    assert_eq!(result.sources.len(), 1);
}

#[tokio::test]
async fn provider_failures_use_distinct_failure_text() {
    let (model, gateway) = mock_gateway();
    model
        .enqueue_generate(provider_error())
        .enqueue_generate(provider_error())
        .enqueue_generate(provider_error());

    let news = gateway.fetch_latest_news("topic").await;
    let alternatives = gateway.find_alternatives("place", 1.0, 2.0).await;
    let sentiment = gateway.analyze_sentiment("body").await;

    assert_eq!(
        news,
        AiResult::text_only("Failed to fetch updates. Please try again later.")
    );
    assert_eq!(
        alternatives,
        AiResult::text_only("Failed to find alternatives.")
    );
    assert_eq!(sentiment, "Error analyzing sentiment.");
}

#[tokio::test]
async fn try_variants_surface_provider_call_failed() {
    let (model, gateway) = mock_gateway();
    model
        .enqueue_generate(provider_error())
        .enqueue_generate(provider_error());

    let err = gateway
        .try_find_alternatives("place", 1.0, 2.0)
        .await
        .expect_err("provider failed");
    assert_eq!(err.operation(), AiRequestKind::Alternatives);
    assert_eq!(err.to_string(), "Provider call failed for ALTERNATIVES");
    assert_eq!(
        std::error::Error::source(&err).map(ToString::to_string),
        Some("Invariant from mock: simulated provider failure".to_string())
    );
    assert!(matches!(
        err,
        GatewayError::ProviderCallFailed {
            source: LanguageModelError::Invariant("mock", _),
            ..
        }
    ));

    let err = gateway
        .try_analyze_sentiment("body")
        .await
        .expect_err("provider failed");
    assert_eq!(err.operation(), AiRequestKind::Sentiment);
}

#[tokio::test]
async fn find_alternatives_requests_maps_grounding_at_coordinates() {
    let (model, gateway) = mock_gateway();
    model.enqueue_generate(text_response("Moe's Books, Pegasus, Shakespeare & Co."));

    gateway
        .find_alternatives("Half Price Books Berkeley", 37.86988, -122.26804)
        .await;

    let inputs = model.tracked_generate_inputs();
    assert_eq!(
        inputs[0].grounding,
        Some(GroundingOption::Maps {
            lat_lng: Some(LatLng {
                latitude: 37.86988,
                longitude: -122.26804,
            }),
        })
    );
    assert!(inputs[0]
        .user_text()
        .starts_with("I am at Half Price Books Berkeley. Find me 3 other high-rated used bookstores"));
}

#[tokio::test]
async fn analyze_sentiment_sends_at_most_the_first_2000_characters() {
    let (model, gateway) = mock_gateway();
    model.enqueue_generate(text_response("Somber"));

    let body = format!("{}TAIL", "é".repeat(2000));
    gateway.analyze_sentiment(&body).await;

    let inputs = model.tracked_generate_inputs();
    assert_eq!(inputs[0].grounding, None);
    let prompt = inputs[0].user_text();
    assert!(!prompt.contains("TAIL"));
    let (_, excerpt) = prompt.split_once("Article: ").expect("article marker");
    assert_eq!(excerpt.chars().count(), 2000);
    assert!(prompt.contains("max 100 words"));
}

#[tokio::test]
async fn analyze_sentiment_sends_short_bodies_whole() {
    let (model, gateway) = mock_gateway();
    model.enqueue_generate(text_response("Upbeat"));

    gateway.analyze_sentiment("A short body.").await;

    let prompt = model.tracked_generate_inputs()[0].user_text();
    assert!(prompt.ends_with("Article: A short body."));
}

#[tokio::test]
async fn each_tool_uses_its_configured_model() {
    let search = Arc::new(MockLanguageModel::new());
    let maps = Arc::new(MockLanguageModel::new());
    let sentiment = Arc::new(MockLanguageModel::new());
    search.enqueue_generate(text_response("search"));
    maps.enqueue_generate(text_response("maps"));
    sentiment.enqueue_generate(text_response("sentiment"));

    let gateway = AiGateway::builder(search.clone())
        .maps_model(maps.clone())
        .sentiment_model(sentiment.clone())
        .reference_date("January 1, 2026")
        .venue_kind("independent cafes")
        .build();

    assert_eq!(gateway.fetch_latest_news("t").await.text, "search");
    assert_eq!(gateway.find_alternatives("p", 0.0, 0.0).await.text, "maps");
    assert_eq!(gateway.analyze_sentiment("b").await, "sentiment");

    assert!(search.tracked_generate_inputs()[0]
        .user_text()
        .contains("since January 1, 2026."));
    assert!(maps.tracked_generate_inputs()[0]
        .user_text()
        .contains("3 other high-rated independent cafes nearby"));
    assert_eq!(sentiment.tracked_generate_inputs().len(), 1);
}

#[tokio::test]
async fn run_builds_arguments_from_the_article() {
    let (model, gateway) = mock_gateway();
    model
        .enqueue_generate(text_response("news"))
        .enqueue_generate(text_response("alternatives"))
        .enqueue_generate(ModelResponse {
            content: vec![Part::text("tone")],
            sources: vec![GroundingSource::web("https://x", "ignored")],
            ..Default::default()
        });
    let article = common::article();

    gateway.run(AiRequestKind::LatestNews, &article).await;
    gateway.run(AiRequestKind::Alternatives, &article).await;
    let sentiment = gateway.run(AiRequestKind::Sentiment, &article).await;

    let inputs = model.tracked_generate_inputs();
    assert!(inputs[0].user_text().contains(&format!(
        "regarding: {} {}.",
        article.title, article.location.name
    )));
    assert!(inputs[1]
        .user_text()
        .starts_with("I am at Half Price Books Berkeley."));
    assert!(inputs[2].user_text().ends_with(&article.body_text()));
    assert_eq!(sentiment, AiResult::text_only("tone"));
}

#[tokio::test]
async fn google_gateway_normalizes_mixed_citations() {
    let (base_url, bodies) = common::spawn_gemini_stub(
        StatusCode::OK,
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Three picks nearby." }] },
                "groundingMetadata": {
                    "groundingChunks": [
                        { "web": { "uri": "https://berkeleyside.org/hpb", "title": "Berkeleyside" } },
                        { "retrievedContext": { "uri": "gs://bucket/x" } },
                        {
                            "maps": {
                                "uri": "https://maps.google.com/?cid=1",
                                "title": "Moe's Books",
                                "placeAnswerSources": [{
                                    "reviewSnippets": [
                                        { "content": "Four floors of used books." },
                                        { "content": "Not surfaced." }
                                    ]
                                }]
                            }
                        },
                        { "maps": { "uri": "https://maps.google.com/?cid=2", "title": "Pegasus Books" } }
                    ]
                }
            }]
        }),
    )
    .await;

    let gateway = AiGateway::google(GoogleGatewayOptions {
        base_url: Some(base_url),
        ..GoogleGatewayOptions::new("test-key")
    });

    let result = gateway
        .find_alternatives("Half Price Books Berkeley", 37.86988, -122.26804)
        .await;

    assert_eq!(
        result,
        AiResult::new(
            "Three picks nearby.",
            vec![
                GroundingSource::web("https://berkeleyside.org/hpb", "Berkeleyside"),
                GroundingSource::map(
                    "https://maps.google.com/?cid=1",
                    "Moe's Books",
                    Some("Four floors of used books.".to_string()),
                ),
                GroundingSource::map("https://maps.google.com/?cid=2", "Pegasus Books", None),
            ],
        )
    );

    let bodies = bodies.lock().unwrap().clone();
    assert_eq!(bodies[0]["model"], json!("gemini-2.5-flash"));
    assert_eq!(bodies[0]["tools"], json!([{ "googleMaps": {} }]));
}

#[tokio::test]
async fn google_gateway_absorbs_transport_errors() {
    let gateway = AiGateway::google(GoogleGatewayOptions {
        base_url: Some(common::unreachable_base_url().await),
        ..GoogleGatewayOptions::new("test-key")
    });

    let result = gateway
        .find_alternatives("Half Price Books Berkeley", 37.86988, -122.26804)
        .await;

    assert_eq!(
        result,
        AiResult {
            text: "Failed to find alternatives.".to_string(),
            sources: vec![],
        }
    );
    assert_eq!(
        gateway.analyze_sentiment("body").await,
        "Error analyzing sentiment."
    );
}

#[tokio::test]
async fn google_gateway_absorbs_status_errors() {
    let (base_url, _bodies) = common::spawn_gemini_stub(
        StatusCode::UNAUTHORIZED,
        json!({ "error": { "code": 401, "message": "API key not valid" } }),
    )
    .await;

    let gateway = AiGateway::google(GoogleGatewayOptions {
        base_url: Some(base_url),
        ..GoogleGatewayOptions::new("bad-key")
    });

    assert_eq!(
        gateway.fetch_latest_news("topic").await,
        AiResult::text_only("Failed to fetch updates. Please try again later.")
    );
}

#[tokio::test]
async fn provider_errors_never_carry_the_api_key() {
    let gateway = AiGateway::google(GoogleGatewayOptions {
        base_url: Some(common::unreachable_base_url().await),
        ..GoogleGatewayOptions::new("SECRET-KEY-123")
    });

    let err = gateway
        .try_find_alternatives("Half Price Books Berkeley", 37.86988, -122.26804)
        .await
        .expect_err("nothing listening");

    let mut messages = vec![err.to_string()];
    let mut source = std::error::Error::source(&err);
    while let Some(error) = source {
        messages.push(error.to_string());
        source = error.source();
    }
    for message in messages {
        assert!(!message.contains("SECRET-KEY-123"), "{message}");
    }
}
