use serde::{Deserialize, Serialize};

/// The article the sidebar is attached to. Built once from static data and
/// never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRef {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub date: String,
    pub category: String,
    /// Body paragraphs, in reading order.
    pub content: Vec<String>,
    pub image_url: String,
    pub location: ArticleLocation,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleLocation {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
}

impl ArticleRef {
    /// Topic for the latest-news search: `"<title> <location name>"`.
    pub fn topic(&self) -> String {
        format!("{} {}", self.title, self.location.name)
    }

    /// The body as one string, paragraphs joined by a single space.
    pub fn body_text(&self) -> String {
        self.content.join(" ")
    }
}
