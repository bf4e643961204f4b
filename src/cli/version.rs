//! Version command.

/// Read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prints the version string and exits successfully.
pub fn handle_version_command() -> ! {
    println!("formwiz {}", VERSION);
    std::process::exit(0)
}
