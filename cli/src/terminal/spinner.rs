use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// An indeterminate spinner with a status message.
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap()
        .tick_strings(TICK_STRINGS);
    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// A counter bar for multi-file uploads. The length is set once the
/// directory walk knows how many files there are.
pub fn upload_bar() -> ProgressBar {
    let pb = ProgressBar::no_length();
    let style = ProgressStyle::with_template("{spinner:.blue} [{pos}/{len}] {msg}")
        .unwrap()
        .tick_strings(TICK_STRINGS);
    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
