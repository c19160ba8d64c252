use std::io::BufRead;
use std::path::Path;

use anyhow::Context;
use nemaki_core::property::Properties;

/// Parse repeated `--set key=value` flags.
pub fn properties(assignments: &[String]) -> anyhow::Result<Properties> {
    nemaki_client::parse_assignments(assignments.iter().map(String::as_str))
        .map_err(|reason| anyhow::anyhow!("invalid --set: {reason}"))
}

/// Password from the flag, `NEMAKI_PASSWORD`, or the first line of stdin.
pub fn password(flag: Option<&str>) -> anyhow::Result<String> {
    if let Some(password) = flag {
        return Ok(password.to_string());
    }
    if let Ok(password) = std::env::var("NEMAKI_PASSWORD") {
        return Ok(password);
    }
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        anyhow::bail!("no password given (use --password, NEMAKI_PASSWORD or stdin)");
    }
    Ok(password)
}

/// MIME type for an upload, from the file extension.
pub fn mime_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("txt" | "log") => "text/plain",
        Some("md") => "text/markdown",
        Some("csv") => "text/csv",
        Some("html" | "htm") => "text/html",
        Some("json") => "application/json",
        Some("xml") => "application/xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("zip") => "application/zip",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Some("pptx") => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        _ => "application/octet-stream",
    }
}
