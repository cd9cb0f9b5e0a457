// Pipelines — fetch every issue, then turn the text into a frequency report.

pub mod fetch;
pub mod frequency;
