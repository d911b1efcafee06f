//! Status-line macros shared by all crates in the workspace.
//!
//! These print directly to stderr so they stay visible even when stdout
//! is piped into another program.

/// Prints a green `[+]` status line.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {{
        use $crate::__private::Colorize as _;
        eprintln!("{} {}", "[+]".green().bold(), format!($($arg)*));
    }};
}

/// Prints a yellow `[*]` warning line.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        use $crate::__private::Colorize as _;
        eprintln!("{} {}", "[*]".yellow().bold(), format!($($arg)*));
    }};
}

/// Prints a red `[-]` failure line.
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {{
        use $crate::__private::Colorize as _;
        eprintln!("{} {}", "[-]".red().bold(), format!($($arg)*));
    }};
}
