//! Words over the group generators and their certified matrix evaluation.

mod matrix;
mod parse;

pub use matrix::{construct_g, construct_t, construct_word, SL2Jet};
pub use parse::{g_length, parse_word, parse_word_pair};
