use super::request::RecommendationRequest;
use super::response::{Recommendation, CONNECTION_ERROR_PAYLOAD};

/// Where the mixologist form is.
///
/// `Error` carries the parsed connection-error payload and renders exactly like
/// `Success`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RecommendationPhase {
    #[default]
    Idle,
    Loading,
    Success(Recommendation),
    Error(Recommendation),
}

impl RecommendationPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, RecommendationPhase::Loading)
    }

    /// Recipe card to show, for both outcomes
    pub fn result(&self) -> Option<&Recommendation> {
        match self {
            RecommendationPhase::Success(r) | RecommendationPhase::Error(r) => Some(r),
            _ => None,
        }
    }
}

/// One accepted submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub seq: u64,
    pub query: String,
}

#[derive(Debug, Clone, Default)]
pub struct RecommendationFlow {
    phase: RecommendationPhase,
    next_seq: u64,
    last_resolved: Option<u64>,
}

impl RecommendationFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &RecommendationPhase {
        &self.phase
    }

    /// Submission that wrote the current result
    pub fn last_resolved(&self) -> Option<u64> {
        self.last_resolved
    }

    pub fn can_submit(&self, request: &RecommendationRequest) -> bool {
        !self.phase.is_loading() && !request.is_empty()
    }

    /// Idle/Success/Error -> Loading. Returns `None` for an empty request or
    /// while a request is already in flight.
    pub fn submit(&mut self, request: &RecommendationRequest) -> Option<Submission> {
        if !self.can_submit(request) {
            return None;
        }
        self.next_seq += 1;
        self.phase = RecommendationPhase::Loading;
        Some(Submission {
            seq: self.next_seq,
            query: request.combined_query(),
        })
    }

    /// Applies a collaborator answer. No cancellation: the last answer to
    /// arrive wins, whatever its sequence number.
    pub fn resolve(&mut self, seq: u64, raw: &str) {
        self.phase = RecommendationPhase::Success(Recommendation::parse(raw));
        self.last_resolved = Some(seq);
    }

    /// Collaborator call failed; the fixed fallback payload is parsed instead
    pub fn fail(&mut self, seq: u64) {
        self.phase = RecommendationPhase::Error(Recommendation::parse(CONNECTION_ERROR_PAYLOAD));
        self.last_resolved = Some(seq);
    }

    /// Clears the result. Selected chips live in the request and are untouched.
    pub fn reset(&mut self) {
        if !self.phase.is_loading() {
            self.phase = RecommendationPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::VibeTag;

    #[test]
    fn test_empty_submit_stays_idle() {
        let mut flow = RecommendationFlow::new();
        assert_eq!(flow.submit(&RecommendationRequest::default()), None);
        assert_eq!(flow.phase(), &RecommendationPhase::Idle);
    }

    #[test]
    fn test_fruity_submit_builds_query() {
        let mut flow = RecommendationFlow::new();
        let request = RecommendationRequest::new("", [VibeTag::Fruity]);
        let submission = flow.submit(&request).unwrap();
        assert_eq!(submission.query, "Fruity");
        assert_eq!(submission.seq, 1);
        assert!(flow.phase().is_loading());
    }

    #[test]
    fn test_submit_blocked_while_loading() {
        let mut flow = RecommendationFlow::new();
        let request = RecommendationRequest::new("minty", []);
        assert!(flow.submit(&request).is_some());
        assert!(flow.submit(&request).is_none());
    }

    #[test]
    fn test_resolve_then_reset_keeps_request() {
        let mut flow = RecommendationFlow::new();
        let request = RecommendationRequest::new("", [VibeTag::Icy, VibeTag::Dark]);
        let submission = flow.submit(&request).unwrap();
        flow.resolve(submission.seq, "Frost | Mint | Cold. | Tea");
        assert_eq!(flow.phase().result().unwrap().name, "Frost");

        flow.reset();
        assert_eq!(flow.phase(), &RecommendationPhase::Idle);
        assert_eq!(request.vibes.len(), 2);
    }

    #[test]
    fn test_failure_renders_connection_error() {
        let mut flow = RecommendationFlow::new();
        let submission = flow.submit(&RecommendationRequest::new("x", [])).unwrap();
        flow.fail(submission.seq);
        let card = flow.phase().result().unwrap();
        assert_eq!(card.name, "Connection Error");
        assert_eq!(card.ingredients, "Please ask staff");
        assert!(matches!(flow.phase(), RecommendationPhase::Error(_)));
    }

    #[test]
    fn test_last_answer_wins() {
        let mut flow = RecommendationFlow::new();
        let request = RecommendationRequest::new("x", []);
        let first = flow.submit(&request).unwrap();
        flow.resolve(first.seq, "First");
        let second = flow.submit(&request).unwrap();

        flow.resolve(second.seq, "Second");
        flow.resolve(first.seq, "Late First");
        assert_eq!(flow.phase().result().unwrap().name, "Late First");
        assert_eq!(flow.last_resolved(), Some(first.seq));
    }

    #[test]
    fn test_reset_ignored_while_loading() {
        let mut flow = RecommendationFlow::new();
        flow.submit(&RecommendationRequest::new("x", [])).unwrap();
        flow.reset();
        assert!(flow.phase().is_loading());
    }
}
