pub mod cli;
pub mod message;
pub mod package;
pub mod training;
pub mod types;
pub mod utils;
