// Word frequency — tokenization, insertion-ordered counting, and stable ranking.

pub mod counter;
pub mod table;
pub mod tokenize;

pub use counter::{compute_frequency, FrequencyCounter};
pub use table::{FrequencyTable, WordCount};
