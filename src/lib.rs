// wordfreq: word frequency statistics across an issue tracker
//
// This is the library root. Each module corresponds to one stage of the
// fetch → count → present pipeline.

pub mod config;
pub mod frequency;
pub mod output;
pub mod pipeline;
pub mod tracker;

#[cfg(feature = "web")]
pub mod web;
