//! Wire formats for upstream APIs

pub mod openai;
