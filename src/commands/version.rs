//! Version command implementation

use crate::bundle::{COMMON_SCRIPTS, DAEMON_SCRIPT, extension_resource};
use crate::descriptor::ApplicationKind;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("daemon-gen {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Minimum Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());
    println!();
    println!("Bundled resources:");
    println!("  {COMMON_SCRIPTS}");
    println!("  {DAEMON_SCRIPT}");
    for kind in ApplicationKind::ALL {
        println!("  {}", extension_resource(&kind.lowercase()));
    }

    Ok(())
}

fn rustc_version() -> &'static str {
    // Minimum supported version declared in Cargo.toml
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
