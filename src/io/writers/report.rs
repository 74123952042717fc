use std::path::Path;

use tracing::info;

use crate::api::RunReport;
use crate::error::Result;
use crate::io::FileSystem;

/// Render the run report as pretty-printed JSON.
pub fn render_run_report(report: &RunReport) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

/// Write the run report as a JSON file at `path`
pub fn write_run_report(fs: &dyn FileSystem, report: &RunReport, path: &Path) -> Result<()> {
    let json = render_run_report(report)?;
    fs.write_string(path, &json)?;
    info!("Created run report: {:?}", path);
    Ok(())
}
