pub mod config;
pub mod credentials;
pub mod document;
pub mod render;

mod macros;

// Re-exports for the status-line macros.
#[doc(hidden)]
pub mod __private {
    pub use colored::Colorize;
}
