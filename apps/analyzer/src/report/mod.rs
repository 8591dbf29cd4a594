// Report Composer artifacts: the proportion chart and the downloadable PDF.
// Both are written per request under fresh UUID names; nothing is cached.

pub mod chart;
pub mod document;
