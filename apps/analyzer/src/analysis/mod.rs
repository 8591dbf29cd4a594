// Résumé / job-description analysis: skill extraction, matching, gap analysis,
// summary text and the end-to-end pipeline that ties them to the external seams.

pub mod gaps;
pub mod matching;
pub mod pipeline;
pub mod skills;
pub mod summary;

pub use pipeline::{run_analysis, AnalysisInput, AnalysisReport};
