//! gramdrill-report — renderers for graded quiz reports.

pub mod html;
pub mod markdown;
