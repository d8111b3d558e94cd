//! Native.WinDivert packager - NuGet packaging for the WinDivert driver.
//!
//! This binary downloads the WinDivert release, extracts it and writes a
//! `.nupkg` with the x64 native binaries to the publish directory.

use native_windivert_packager::cli;
use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            for suggestion in e.recovery_suggestions() {
                eprintln!("  hint: {}", suggestion);
            }
            1
        }
    };

    process::exit(exit_code);
}
