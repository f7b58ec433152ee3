pub mod filter;
pub mod phone;

pub use filter::{
    FilterCriteria, UsageCategory, DEFAULT_MAX_BUDGET, DEFAULT_MIN_BUDGET, NO_OS_PREFERENCE,
};
pub use phone::{PhoneResult, RecommendationResponse, UNKNOWN_NAME};
