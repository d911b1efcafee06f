use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
                    ___  | |  _ __
                   / _ \ | | | '_ \
                  |  __/ | | | | | |
                   \___| |_| |_| |_|
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_green()));
    print::centerln(&format!("{}", "your notebook, from the shell".bright_black()));
}
