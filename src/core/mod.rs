pub mod lines;
pub mod numbers;
pub mod substring;
