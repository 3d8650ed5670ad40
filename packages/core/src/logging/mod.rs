// Logging
//
// Logger abstraction used by the resolvers.

pub mod console_logger;
pub mod logger;

pub use console_logger::ConsoleLogger;
pub use logger::{LogLevel, Logger, NullLogger};

#[cfg(test)]
mod test;
