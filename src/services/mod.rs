pub mod listing;
pub mod providers;
pub mod renderer;
pub mod sentiment;

pub use listing::format_listing;
pub use providers::{HttpRecommendationSource, RecommendationSource};
pub use renderer::render_results;
pub use sentiment::SentimentLabel;
