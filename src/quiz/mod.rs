//! Main module for quizgen library functionality

pub mod bank;
pub mod emitting;
pub mod escaping;
pub mod extracting;
pub mod labels;
pub mod loader;
pub mod pipeline;
pub mod record;
pub mod segmenting;
pub mod testing;
