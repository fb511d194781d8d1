use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A part of the message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Part {
    Text(TextPart),
    Reasoning(ReasoningPart),
}

/// A message in an LLM conversation history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Message {
    User(UserMessage),
    Assistant(AssistantMessage),
}

/// A part of the message that contains text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextPart {
    pub text: String,
}

// A part of the message that represents the model reasoning.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ReasoningPart {
    /// The reasoning text content.
    pub text: String,
    /// The reasoning internal signature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

/// Represents a message sent by the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserMessage {
    pub content: Vec<Part>,
}

/// Represents a message generated by the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssistantMessage {
    pub content: Vec<Part>,
}

/// A geographic point used to bias location-aware grounding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatLng {
    /// Degrees, expected in `[-90, 90]`. Not validated.
    pub latitude: f64,
    /// Degrees, expected in `[-180, 180]`. Not validated.
    pub longitude: f64,
}

/// Real-world grounding the provider should attach to its answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum GroundingOption {
    /// Ground the answer on web search results.
    WebSearch,
    /// Ground the answer on map places, optionally biased to a location.
    Maps {
        #[serde(skip_serializing_if = "Option::is_none")]
        lat_lng: Option<LatLng>,
    },
}

/// A citation attached to a grounded answer.
///
/// Provider citation records come in loosely shaped objects; adapters parse
/// them into one of these variants and drop anything they cannot recognize.
/// Serialized externally tagged, e.g. `{"web":{"uri":"..","title":".."}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum GroundingSource {
    #[serde(rename = "web")]
    Web(WebSource),
    #[serde(rename = "maps")]
    Map(MapSource),
}

/// A web page the answer was grounded on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebSource {
    pub uri: String,
    pub title: String,
}

/// A map place the answer was grounded on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapSource {
    pub uri: String,
    pub title: String,
    /// Text of the first review snippet of the first place answer, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_snippet: Option<String>,
}

/// Represents the token usage of the model.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ModelUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Represents the response generated by the model.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ModelResponse {
    pub content: Vec<Part>,
    /// Citations in the order the provider ranked them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<GroundingSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<ModelUsage>,
}

/// Defines the input parameters for the language model completion.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LanguageModelInput {
    /// A system prompt is a way of providing context and instructions to the
    /// model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    /// A list of messages comprising the conversation so far.
    pub messages: Vec<Message>,
    /// Grounding to request alongside the completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grounding: Option<GroundingOption>,
    /// The maximum number of tokens that can be generated in the chat
    /// completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Amount of randomness injected into the response. Ranges from 0.0 to 1.0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Extra options that the model may support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<LanguageModelInputExtra>,
}

pub type LanguageModelInputExtra = Value;
