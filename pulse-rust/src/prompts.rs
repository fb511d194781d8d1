//! Prompt text for the three sidebar tools.

pub fn latest_news(topic: &str, reference_date: &str) -> String {
    format!(
        "Find the very latest news, community reactions, and updates regarding: {topic}. \
         Summarize the current status and any new developments since {reference_date}."
    )
}

pub fn alternatives(location_name: &str, venue_kind: &str) -> String {
    format!(
        "I am at {location_name}. Find me 3 other high-rated {venue_kind} nearby that are \
         currently open. Provide a brief reason to visit each."
    )
}

pub fn sentiment(article_excerpt: &str, max_words: u32) -> String {
    format!(
        "Analyze the tone and likely community impact of this article text. Be concise (max \
         {max_words} words). \n\nArticle: {article_excerpt}"
    )
}

/// The first `limit` characters of `text`. Never splits a character.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
