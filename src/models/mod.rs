mod build;

pub use build::BuildSummary;
