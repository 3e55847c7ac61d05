//! CLI command for `netform show`

use anyhow::Result;

use crate::cli::output::is_json;
use crate::core::writer::ConfigWriter;

/// Print the netplan file exactly as stored
pub fn execute(writer: &ConfigWriter) -> Result<()> {
    let content = writer.read_current()?;

    if is_json() {
        let value = serde_json::json!({
            "path": writer.path().display().to_string(),
            "content": content,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{content}");
    }

    Ok(())
}
