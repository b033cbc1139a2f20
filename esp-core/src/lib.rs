//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert den Join-Zustandsautomaten, die HTTP-Formatierung,
//! das Display-Rendering und die LED-Abstraktion.

#![no_std]

pub mod display;
pub mod http;
pub mod join;
pub mod traits;

// Re-exports für einfachen Zugriff
pub use join::{JoinEvent, JoinPolicy, JoinState, classify_connect_failure};
pub use traits::{LedError, StatusLed};
