//! Version command implementation

use anyhow::Result;

use crate::cli::Output;

/// Execute the version command
pub async fn execute(output: &Output) -> Result<()> {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");
    let description = env!("CARGO_PKG_DESCRIPTION");

    output.status_indicator("VERSION", &format!("{name} v{version}"), true);
    output.key_value("Description:", description);
    output.key_value(
        "Profile:",
        if cfg!(debug_assertions) { "debug" } else { "release" },
    );
    Ok(())
}
