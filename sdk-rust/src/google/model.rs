use super::api::{
    Content, GenerateContentConfig, GenerateContentParameters, GenerateContentResponse,
    GenerateContentResponseUsageMetadata, GoogleLatLng, GoogleMaps, GoogleSearch,
    GroundingChunk, Part as GooglePart, PlaceAnswerSourcesField, RetrievalConfig, Tool,
    ToolConfig,
};
use crate::{
    client_utils, GroundingOption, GroundingSource, LanguageModel, LanguageModelError,
    LanguageModelInput, LanguageModelResult, Message, ModelResponse, ModelUsage, Part,
    ReasoningPart,
};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client,
};
use std::collections::HashMap;

const PROVIDER: &str = "google";
const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GoogleModel {
    model_id: String,
    api_key: String,
    base_url: String,
    client: Client,
    headers: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct GoogleModelOptions {
    pub api_key: String,
    pub base_url: Option<String>,
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

impl GoogleModel {
    #[must_use]
    pub fn new(model_id: impl Into<String>, options: GoogleModelOptions) -> Self {
        let GoogleModelOptions {
            api_key,
            base_url,
            headers,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| "https://generativelanguage.googleapis.com/v1beta".to_string())
            .trim_end_matches('/')
            .to_string();
        let client = client.unwrap_or_else(Client::new);
        let headers = headers.unwrap_or_default();

        Self {
            model_id: model_id.into(),
            api_key,
            base_url,
            client,
            headers,
        }
    }

    fn request_headers(&self) -> LanguageModelResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        // Not in the URL: transport errors print it.
        let mut api_key = HeaderValue::from_str(&self.api_key).map_err(|_| {
            LanguageModelError::InvalidInput("Google API key is not a valid header value".into())
        })?;
        api_key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, api_key);

        for (key, value) in &self.headers {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|error| {
                LanguageModelError::InvalidInput(format!(
                    "Invalid Google header name '{key}': {error}"
                ))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|error| {
                LanguageModelError::InvalidInput(format!(
                    "Invalid Google header value for '{key}': {error}"
                ))
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

#[async_trait::async_trait]
impl LanguageModel for GoogleModel {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    fn model_id(&self) -> String {
        self.model_id.clone()
    }

    async fn generate(&self, input: LanguageModelInput) -> LanguageModelResult<ModelResponse> {
        crate::opentelemetry::trace_generate(
            self.provider(),
            &self.model_id(),
            input,
            |input| async move {
                let params = convert_to_generate_content_parameters(input, &self.model_id);

                let url = format!("{}/models/{}:generateContent", self.base_url, self.model_id);

                let headers = self.request_headers()?;
                let response: GenerateContentResponse =
                    client_utils::send_json(&self.client, &url, &params, headers).await?;

                Ok(map_google_response(response))
            },
        )
        .await
    }
}

fn convert_to_generate_content_parameters(
    input: LanguageModelInput,
    model_id: &str,
) -> GenerateContentParameters {
    let mut params = GenerateContentParameters {
        contents: convert_to_google_contents(input.messages),
        model: model_id.to_string(),
        ..Default::default()
    };

    if let Some(system_prompt) = input.system_prompt {
        params.system_instruction = Some(Content {
            role: Some("system".to_string()),
            parts: Some(vec![GooglePart {
                text: Some(system_prompt),
                ..Default::default()
            }]),
        });
    }

    if input.temperature.is_some() || input.max_tokens.is_some() {
        params.generation_config = Some(GenerateContentConfig {
            temperature: input.temperature,
            max_output_tokens: input.max_tokens,
        });
    }

    if let Some(grounding) = input.grounding {
        let (tool, tool_config) = convert_to_google_grounding(grounding);
        params.tools = Some(vec![tool]);
        params.tool_config = tool_config;
    }

    params.extra = input.extra;

    params
}

fn convert_to_google_contents(messages: Vec<Message>) -> Vec<Content> {
    messages
        .into_iter()
        .map(|message| {
            let (role, parts) = match message {
                Message::User(user_message) => ("user", user_message.content),
                Message::Assistant(assistant_message) => ("model", assistant_message.content),
            };
            Content {
                role: Some(role.to_string()),
                parts: Some(parts.into_iter().map(convert_to_google_part).collect()),
            }
        })
        .collect()
}

fn convert_to_google_part(part: Part) -> GooglePart {
    match part {
        Part::Text(text_part) => GooglePart {
            text: Some(text_part.text),
            ..Default::default()
        },
        Part::Reasoning(reasoning_part) => GooglePart {
            text: Some(reasoning_part.text),
            thought: Some(true),
            thought_signature: reasoning_part.signature,
        },
    }
}

fn convert_to_google_grounding(grounding: GroundingOption) -> (Tool, Option<ToolConfig>) {
    match grounding {
        GroundingOption::WebSearch => (
            Tool {
                google_search: Some(GoogleSearch {}),
                ..Default::default()
            },
            None,
        ),
        GroundingOption::Maps { lat_lng } => (
            Tool {
                google_maps: Some(GoogleMaps::default()),
                ..Default::default()
            },
            lat_lng.map(|lat_lng| ToolConfig {
                retrieval_config: Some(RetrievalConfig {
                    lat_lng: Some(GoogleLatLng {
                        latitude: lat_lng.latitude,
                        longitude: lat_lng.longitude,
                    }),
                    language_code: None,
                }),
            }),
        ),
    }
}

/// A response without candidates is an empty answer, not a failure.
fn map_google_response(response: GenerateContentResponse) -> ModelResponse {
    let usage = response
        .usage_metadata
        .as_ref()
        .map(map_google_usage_metadata);

    let Some(candidate) = response.candidates.and_then(|c| c.into_iter().next()) else {
        return ModelResponse {
            usage,
            ..Default::default()
        };
    };

    let content = map_google_content(candidate.content.and_then(|c| c.parts).unwrap_or_default());
    let sources = map_google_grounding_chunks(
        candidate
            .grounding_metadata
            .and_then(|m| m.grounding_chunks)
            .unwrap_or_default(),
    );

    ModelResponse {
        content,
        sources,
        usage,
    }
}

fn map_google_content(parts: Vec<GooglePart>) -> Vec<Part> {
    parts
        .into_iter()
        .filter_map(|part| {
            let text = part.text?;
            if part.thought.unwrap_or(false) {
                let mut reasoning_part = ReasoningPart::new(text);
                if let Some(signature) = part.thought_signature {
                    reasoning_part = reasoning_part.with_signature(signature);
                }
                Some(reasoning_part.into())
            } else {
                Some(Part::text(text))
            }
        })
        .collect()
}

/// Parse provider grounding chunks into [`GroundingSource`]s.
///
/// Order is preserved. A chunk with a `web` record wins over its `maps`
/// record; chunks without a usable record of either shape, or whose record
/// has no URI, are dropped. For maps records only the first review snippet of
/// the first place answer source is kept.
pub(crate) fn map_google_grounding_chunks(chunks: Vec<GroundingChunk>) -> Vec<GroundingSource> {
    chunks
        .into_iter()
        .filter_map(map_google_grounding_chunk)
        .collect()
}

fn map_google_grounding_chunk(chunk: GroundingChunk) -> Option<GroundingSource> {
    if let Some(web) = chunk.web {
        if let Some(uri) = web.uri {
            return Some(GroundingSource::web(uri, web.title.unwrap_or_default()));
        }
    }

    let maps = chunk.maps?;
    let uri = maps.uri?;
    let review_snippet = match maps.place_answer_sources {
        Some(PlaceAnswerSourcesField::Many(sources)) => sources.into_iter().next(),
        Some(PlaceAnswerSourcesField::One(source)) => Some(source),
        None => None,
    }
    .and_then(|source| source.review_snippets)
    .and_then(|snippets| snippets.into_iter().next())
    .and_then(|snippet| snippet.content);

    Some(GroundingSource::map(
        uri,
        maps.title.unwrap_or_default(),
        review_snippet,
    ))
}

fn map_google_usage_metadata(usage: &GenerateContentResponseUsageMetadata) -> ModelUsage {
    ModelUsage {
        input_tokens: usage.prompt_token_count.unwrap_or(0),
        output_tokens: usage.candidates_token_count.unwrap_or(0)
            + usage.thoughts_token_count.unwrap_or(0),
    }
}
