pub mod builder;
pub mod core;
pub mod engine;
pub mod output;
pub mod speaker_assign;

pub use builder::DubbingEngineBuilder;
pub use self::core::DubbingEngine;
pub use output::DubbingOutput;
