//! Virtual mixologist: vibe chips + free text in, pipe-delimited recipe out.

pub mod flow;
pub mod request;
pub mod response;

pub use flow::{RecommendationFlow, RecommendationPhase, Submission};
pub use request::{build_prompt, RecommendationRequest};
pub use response::{new_recipe_id, Recommendation};
