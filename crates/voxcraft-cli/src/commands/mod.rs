//! CLI command implementations

pub mod export;
pub mod inspect;
pub mod json_output;
pub mod requantize;
pub mod resolve;
pub mod voices;
