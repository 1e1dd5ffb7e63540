use thiserror::Error;

/// Boundary failures raised while turning page attributes and configuration
/// into typed records. Controllers map each of these to a degraded behavior
/// instead of letting them reach the page.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LandingError {
    #[error("counter target {0:?} is not a finite number")]
    NonNumericTarget(String),
    #[error("unknown parcel category {0:?}")]
    UnknownCategory(String),
    #[error("unknown parcel id {0:?}")]
    UnknownParcel(String),
    #[error("headline set is empty")]
    EmptyHeadlines,
    #[error("invalid page configuration: {0}")]
    Config(String),
}
