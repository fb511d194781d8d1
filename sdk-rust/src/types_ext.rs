use crate::{
    AssistantMessage, GroundingSource, LanguageModelInput, MapSource, Message, ModelResponse,
    Part, ReasoningPart, TextPart, UserMessage, WebSource,
};

impl TextPart {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<&str> for TextPart {
    fn from(value: &str) -> Self {
        Self {
            text: value.to_string(),
        }
    }
}

impl From<String> for TextPart {
    fn from(value: String) -> Self {
        Self { text: value }
    }
}

impl From<TextPart> for Part {
    fn from(value: TextPart) -> Self {
        Self::Text(value)
    }
}

impl ReasoningPart {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            signature: None,
        }
    }

    #[must_use]
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }
}

impl From<ReasoningPart> for Part {
    fn from(value: ReasoningPart) -> Self {
        Self::Reasoning(value)
    }
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(TextPart::new(text))
    }
}

impl UserMessage {
    pub fn new<I, P>(parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Part>,
    {
        Self {
            content: parts.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<UserMessage> for Message {
    fn from(value: UserMessage) -> Self {
        Self::User(value)
    }
}

impl AssistantMessage {
    pub fn new<I, P>(parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Part>,
    {
        Self {
            content: parts.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<AssistantMessage> for Message {
    fn from(value: AssistantMessage) -> Self {
        Self::Assistant(value)
    }
}

impl Message {
    pub fn user<I, P>(parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Part>,
    {
        Self::User(UserMessage::new(parts))
    }

    pub fn assistant<I, P>(parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Part>,
    {
        Self::Assistant(AssistantMessage::new(parts))
    }

    pub fn content(&self) -> &[Part] {
        match self {
            Self::User(message) => &message.content,
            Self::Assistant(message) => &message.content,
        }
    }
}

impl LanguageModelInput {
    /// Build an input holding a single user prompt.
    pub fn prompt(text: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::user([Part::text(text)])],
            ..Default::default()
        }
    }

    /// Concatenated text of every user message, in order.
    pub fn user_text(&self) -> String {
        self.messages
            .iter()
            .filter(|message| matches!(message, Message::User(_)))
            .flat_map(Message::content)
            .filter_map(|part| match part {
                Part::Text(text_part) => Some(text_part.text.as_str()),
                Part::Reasoning(_) => None,
            })
            .collect()
    }
}

impl ModelResponse {
    /// The answer text: all non-reasoning text parts joined together.
    /// Returns `None` when the model produced no text at all.
    pub fn text(&self) -> Option<String> {
        let text: String = self
            .content
            .iter()
            .filter_map(|part| match part {
                Part::Text(text_part) => Some(text_part.text.as_str()),
                Part::Reasoning(_) => None,
            })
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl GroundingSource {
    pub fn web(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self::Web(WebSource {
            uri: uri.into(),
            title: title.into(),
        })
    }

    pub fn map(
        uri: impl Into<String>,
        title: impl Into<String>,
        review_snippet: Option<String>,
    ) -> Self {
        Self::Map(MapSource {
            uri: uri.into(),
            title: title.into(),
            review_snippet,
        })
    }
}
