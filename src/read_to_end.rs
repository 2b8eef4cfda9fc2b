use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::compute::process_chunk;
use crate::pass::Pass;

/// The file name the logs have always been dropped under.
pub const DEFAULT_INPUT: &str = "abc.txt";

/// Read all of `path` into memory and run it through the extractor in one go.
/// The returned buffer is exactly what should end up on stdout.
pub fn run(path: &Path, pass: Pass) -> anyhow::Result<String> {
    let begin = std::time::Instant::now();

    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    // bad bytes only spoil the line they sit on, so decode lossily
    let input = String::from_utf8_lossy(&bytes);

    let mut out = String::with_capacity(input.len() / 4);
    let rows = process_chunk(&input, pass, &mut out);

    info!(
        path = %path.display(),
        pass = pass.label(),
        lines = input.split('\n').count(),
        rows,
        elapsed_ms = begin.elapsed().as_millis() as u64,
        "extraction finished"
    );
    Ok(out)
}
