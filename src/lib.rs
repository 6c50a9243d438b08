// Greeter native library
// C ABI, JNI binding and Rust API over one greeting formatter

pub mod boundary;
pub mod cli;
pub mod config;
pub mod ffi;
pub mod greeting;
pub mod harness;
pub mod jni_bridge;
pub mod logging;
pub mod memory;

pub use boundary::{marshal_greeting, BoundaryError, HostStrings, NullNamePolicy};
pub use cli::Cli;
pub use config::GreeterConfig;
pub use greeting::{format_greeting, Greeter, GreeterError, Greeting, Salutation};
pub use logging::LogLevel;
