mod lines;

pub use lines::{LineCounter, count_lines};
