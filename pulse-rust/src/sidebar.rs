use crate::{AiGateway, AiRequestKind, AiResult, ArticleRef};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

pub const IDLE_HINT: &str = "Select a tool to enhance this story with real-time data.";
pub const LOADING_CAPTION: &str = "Consulting Gemini Models...";
pub const DISCLAIMER: &str = "AI-generated content may be inaccurate. Verify important details.";

/// What the sidebar body is showing.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SidebarPhase {
    Idle,
    Loading,
    Ready,
    /// Rendered like `Ready`; the result text is the tool's failure text.
    ErrorDisplayed,
}

/// Sidebar state. A loading sidebar never holds a result.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SidebarState {
    active_kind: Option<AiRequestKind>,
    is_loading: bool,
    result: Option<AiResult>,
}

impl SidebarState {
    pub fn active_kind(&self) -> Option<AiRequestKind> {
        self.active_kind
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn result(&self) -> Option<&AiResult> {
        self.result.as_ref()
    }

    pub fn phase(&self) -> SidebarPhase {
        match (self.active_kind, self.is_loading, &self.result) {
            (None, _, _) => SidebarPhase::Idle,
            (Some(_), true, _) | (Some(_), false, None) => SidebarPhase::Loading,
            (Some(kind), false, Some(result)) => {
                if result.text == kind.failure_text() {
                    SidebarPhase::ErrorDisplayed
                } else {
                    SidebarPhase::Ready
                }
            }
        }
    }

    /// Placeholder text for the sidebar body, if the phase has one.
    pub fn caption(&self) -> Option<&'static str> {
        match self.phase() {
            SidebarPhase::Idle => Some(IDLE_HINT),
            SidebarPhase::Loading => Some(LOADING_CAPTION),
            SidebarPhase::Ready | SidebarPhase::ErrorDisplayed => None,
        }
    }

    /// Footer shown once a tool has been picked and is not loading.
    pub fn disclaimer(&self) -> Option<&'static str> {
        (self.active_kind.is_some() && !self.is_loading).then_some(DISCLAIMER)
    }

    fn begin(&mut self, kind: AiRequestKind) {
        self.active_kind = Some(kind);
        self.result = None;
        self.is_loading = true;
    }

    fn finish(&mut self, result: AiResult) {
        self.is_loading = false;
        self.result = Some(result);
    }
}

/// Identifies one selection. Only the most recently issued ticket may
/// complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    id: u64,
    kind: AiRequestKind,
}

impl RequestTicket {
    pub fn kind(&self) -> AiRequestKind {
        self.kind
    }
}

#[derive(Default)]
struct ControllerInner {
    state: SidebarState,
    latest_ticket: u64,
}

/// Drives the sidebar for one article.
///
/// Selecting a tool while another call is outstanding does not cancel that
/// call; its result is discarded when it arrives.
pub struct SidebarController {
    gateway: Arc<AiGateway>,
    article: ArticleRef,
    inner: Mutex<ControllerInner>,
}

impl SidebarController {
    pub fn new(gateway: Arc<AiGateway>, article: ArticleRef) -> Self {
        Self {
            gateway,
            article,
            inner: Mutex::new(ControllerInner::default()),
        }
    }

    pub fn article(&self) -> &ArticleRef {
        &self.article
    }

    pub fn state(&self) -> SidebarState {
        self.lock().state.clone()
    }

    /// Enter `Loading` for `kind`, superseding any outstanding selection.
    pub fn select(&self, kind: AiRequestKind) -> RequestTicket {
        let mut inner = self.lock();
        inner.latest_ticket += 1;
        inner.state.begin(kind);
        RequestTicket {
            id: inner.latest_ticket,
            kind,
        }
    }

    /// Store `result` for `ticket`. Returns `false`, leaving state untouched,
    /// when a newer selection has been made since the ticket was issued.
    pub fn complete(&self, ticket: RequestTicket, result: AiResult) -> bool {
        let mut inner = self.lock();
        if ticket.id != inner.latest_ticket {
            debug!(
                operation = ticket.kind.operation_name(),
                ticket = ticket.id,
                latest = inner.latest_ticket,
                "discarding superseded sidebar result"
            );
            return false;
        }
        inner.state.finish(result);
        true
    }

    /// Select `kind`, run it through the gateway and store the result.
    /// Returns the state after completion, which may belong to a newer
    /// selection.
    pub async fn dispatch(&self, kind: AiRequestKind) -> SidebarState {
        let ticket = self.select(kind);
        let result = self.gateway.run(kind, &self.article).await;
        self.complete(ticket, result);
        self.state()
    }

    // State is updated in single assignments, so a poisoned lock still guards
    // a consistent value.
    fn lock(&self) -> MutexGuard<'_, ControllerInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_sdk::GroundingSource;

    #[test]
    fn default_state_is_idle_with_hint() {
        let state = SidebarState::default();
        assert_eq!(state.phase(), SidebarPhase::Idle);
        assert_eq!(state.caption(), Some(IDLE_HINT));
        assert_eq!(state.disclaimer(), None);
        assert!(state.result().is_none());
    }

    #[test]
    fn begin_clears_previous_result_and_loads() {
        let mut state = SidebarState::default();
        state.begin(AiRequestKind::LatestNews);
        state.finish(AiResult::new(
            "Store open until Jan 15",
            vec![GroundingSource::web("https://x", "Berkeleyside")],
        ));
        assert_eq!(state.phase(), SidebarPhase::Ready);
        assert_eq!(state.disclaimer(), Some(DISCLAIMER));

        state.begin(AiRequestKind::Sentiment);
        assert_eq!(state.phase(), SidebarPhase::Loading);
        assert_eq!(state.active_kind(), Some(AiRequestKind::Sentiment));
        assert!(state.is_loading());
        assert!(state.result().is_none());
        assert_eq!(state.caption(), Some(LOADING_CAPTION));
        assert_eq!(state.disclaimer(), None);
    }

    #[test]
    fn failure_text_shows_as_error_displayed() {
        let mut state = SidebarState::default();
        state.begin(AiRequestKind::Alternatives);
        state.finish(AiResult::text_only(
            AiRequestKind::Alternatives.failure_text(),
        ));
        assert_eq!(state.phase(), SidebarPhase::ErrorDisplayed);
        assert_eq!(state.caption(), None);
        assert_eq!(state.disclaimer(), Some(DISCLAIMER));
    }

    #[test]
    fn empty_text_is_ready_not_error() {
        let mut state = SidebarState::default();
        state.begin(AiRequestKind::LatestNews);
        state.finish(AiResult::text_only(AiRequestKind::LatestNews.empty_text()));
        assert_eq!(state.phase(), SidebarPhase::Ready);
    }

    #[test]
    fn state_serializes_camel_case() {
        let mut state = SidebarState::default();
        state.begin(AiRequestKind::LatestNews);
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            serde_json::json!({
                "activeKind": "LATEST_NEWS",
                "isLoading": true,
                "result": null
            })
        );
    }
}
