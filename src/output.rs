use owo_colors::OwoColorize;

/// Small wrapper around stdout printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when output is a TTY.
///
/// Everything goes to stdout so these lines interleave with the log stream.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        println!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        println!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        println!("{} {}", "error:".red().bold(), msg);
    } else {
        println!("error: {}", msg);
    }
}

/// Print a plain user-facing line (no prefix).
pub fn print_user(msg: &str) {
    println!("{}", msg);
}
