//! Color catalog files.
//!
//! One header line, then one record per line:
//!
//! ```text
//! id,name,"r,g,b[ hex]",hex,plate,tile,round1x1,round2x2
//! 1,White,"242,243,242 #F2F3F2",F2F3F2,+,+,+,+
//! ```
//!
//! A shape flag means available only when it is `+`. Records that do not
//! fit the layout are skipped.

use std::path::Path;
use std::sync::OnceLock;

use mosaic_quant::{Availability, ColorCatalog, Swatch};
use regex::Regex;

use crate::error::AppError;

const RECORD_PATTERN: &str = r#"^([^,]*),([^,]*),\s*"\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)[^"]*"\s*,[^,]*,\s*([^,\s])\s*,\s*([^,\s])\s*,\s*([^,\s])\s*,\s*([^,\s])\s*(?:,.*)?$"#;

fn record_pattern() -> Result<&'static Regex, AppError> {
    static RECORD: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    RECORD
        .get_or_init(|| Regex::new(RECORD_PATTERN))
        .as_ref()
        .map_err(|e| AppError::Pattern(e.clone()))
}

/// Parse one record; `None` if it does not fit the layout.
fn parse_record(pattern: &Regex, line: &str) -> Option<Swatch> {
    let caps = pattern.captures(line.trim_end())?;

    let channel = |i: usize| caps[i].parse::<u8>().ok();
    let rgb = [channel(3)?, channel(4)?, channel(5)?];

    let flag = |i: usize| caps[i].chars().next().unwrap_or(' ');
    let availability = Availability::from_flags([flag(6), flag(7), flag(8), flag(9)]);

    Some(Swatch::new(
        caps[1].trim(),
        caps[2].trim(),
        rgb,
        availability,
    ))
}

/// Parse a whole catalog file's contents
pub fn parse_catalog(content: &str) -> Result<ColorCatalog, AppError> {
    let pattern = record_pattern()?;
    let mut swatches = Vec::new();
    let mut skipped = 0usize;

    for (lineno, line) in content.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        match parse_record(pattern, line) {
            Some(swatch) => swatches.push(swatch),
            None => {
                skipped += 1;
                tracing::debug!(line = lineno + 1, record = %line, "Skipping malformed catalog record");
            }
        }
    }

    tracing::info!(
        colors = swatches.len(),
        skipped,
        "Parsed color catalog"
    );
    Ok(ColorCatalog::new(swatches)?)
}

/// Read and parse a catalog file
pub fn load_catalog(path: &Path) -> Result<ColorCatalog, AppError> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&content)
}
