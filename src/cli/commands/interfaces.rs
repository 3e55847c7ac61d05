//! CLI command for `netform interfaces`

use anyhow::Result;

use crate::cli::output::is_json;
use crate::infra::interfaces::list_interfaces;

/// List interface names, one per line or as a JSON array
pub fn execute() -> Result<()> {
    let interfaces = list_interfaces()?;

    if is_json() {
        println!("{}", serde_json::to_string(&interfaces)?);
    } else {
        for name in &interfaces {
            println!("{name}");
        }
    }

    Ok(())
}
