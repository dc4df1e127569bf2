//! Reading raw interval pairs from literals, files or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use coalesce_core::Interval;

/// Collect `(start, end)` pairs for a command.
///
/// Literals win when present; otherwise JSON is read from `input`, where `-`
/// means stdin.
pub fn load_pairs(literals: &[String], input: Option<&Path>) -> anyhow::Result<Vec<(i64, i64)>> {
    if !literals.is_empty() {
        return parse_literals(literals);
    }

    let Some(path) = input else {
        anyhow::bail!("no intervals given: pass literals or --input FILE (`-` for stdin)");
    };
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("cannot read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?
    };
    parse_json(&text)
}

/// Parse interval literals, naming the offending argument on failure.
pub fn parse_literals(literals: &[String]) -> anyhow::Result<Vec<(i64, i64)>> {
    literals
        .iter()
        .enumerate()
        .map(|(index, literal)| {
            literal
                .parse::<Interval>()
                .map(Into::into)
                .with_context(|| format!("argument {index} ({literal:?})"))
        })
        .collect()
}

/// Parse a JSON array of two-element integer arrays. Bounds are not checked
/// here so the merge can report the offending index.
pub fn parse_json(text: &str) -> anyhow::Result<Vec<(i64, i64)>> {
    let pairs: Vec<(i64, i64)> =
        serde_json::from_str(text).context("expected a JSON array of [start, end] pairs")?;
    tracing::debug!(count = pairs.len(), "read interval pairs");
    Ok(pairs)
}
