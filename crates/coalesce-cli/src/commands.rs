use anyhow::Context;
use coalesce_core::{is_merged, merge, merge_pairs, validate_pairs, Interval};
use colored::Colorize;

use crate::check::{format_pairs, run_cases};
use crate::cli::*;
use crate::config::{CliConfig, OutputFormat};
use crate::input::load_pairs;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let mut config = CliConfig::discover(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if !config.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Command::Merge(args) => cmd_merge(args, &config),
        Command::Verify(args) => cmd_verify(args, &config),
        Command::Check(_) => cmd_check(),
        Command::Config(_) => cmd_config(&config),
    }
}

fn cmd_merge(args: IntervalArgs, config: &CliConfig) -> anyhow::Result<()> {
    let pairs = load_pairs(&args.intervals, args.input.as_deref())?;
    let count = pairs.len();
    let merged = merge_pairs(pairs).context("cannot merge input")?;

    print!("{}", render_intervals(&merged, config.format)?);
    if config.format == OutputFormat::Text && config.summary {
        println!(
            "{} {} intervals merged into {}",
            "✓".green().bold(),
            count.to_string().bold(),
            merged.len().to_string().bold()
        );
    }
    Ok(())
}

fn cmd_verify(args: IntervalArgs, config: &CliConfig) -> anyhow::Result<()> {
    let pairs = load_pairs(&args.intervals, args.input.as_deref())?;
    let intervals = validate_pairs(pairs).context("cannot verify input")?;

    if is_merged(&intervals) {
        match config.format {
            OutputFormat::Text => println!(
                "{} {} intervals already merged",
                "✓".green().bold(),
                intervals.len()
            ),
            OutputFormat::Json => println!("{}", verify_json(&intervals, None)),
        }
        return Ok(());
    }

    let merged = merge(&intervals);
    let merged_count = merged.len();
    match config.format {
        OutputFormat::Text => {
            println!("{} intervals are not merged; merged form:", "✗".red().bold());
            print!("{}", render_intervals(&merged, config.format)?);
        }
        OutputFormat::Json => println!("{}", verify_json(&intervals, Some(merged.as_slice()))),
    }
    anyhow::bail!(
        "{} intervals collapse to {} when merged",
        intervals.len(),
        merged_count
    )
}

fn cmd_check() -> anyhow::Result<()> {
    let outcomes = run_cases()?;
    let mut failed = 0usize;

    for (i, outcome) in outcomes.iter().enumerate() {
        if outcome.passed() {
            println!("Case {}: {}", i + 1, "✓".green());
        } else {
            failed += 1;
            println!("Case {}: {}", i + 1, "✗".red());
            println!("  Input:    {}", format_pairs(outcome.case.input));
            println!("  Expected: {}", format_pairs(outcome.case.expected));
            println!("  Got:      {}", format_pairs(&outcome.actual));
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} reference cases failed", outcomes.len());
    }
    println!("\n{} All {} cases passed.", "✓".green().bold(), outcomes.len());
    Ok(())
}

fn cmd_config(config: &CliConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Render merged intervals: one `[start, end]` per line, or a JSON array.
pub fn render_intervals(intervals: &[Interval], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(intervals.iter().map(|i| format!("{i}\n")).collect()),
        OutputFormat::Json => {
            let json = serde_json::to_string(intervals).context("cannot encode intervals")?;
            Ok(format!("{json}\n"))
        }
    }
}

/// JSON verdict for `verify`; `expected` carries the merged form when the
/// input was not already merged.
pub fn verify_json(intervals: &[Interval], expected: Option<&[Interval]>) -> serde_json::Value {
    match expected {
        None => serde_json::json!({ "merged": true, "count": intervals.len() }),
        Some(merged) => serde_json::json!({
            "merged": false,
            "count": intervals.len(),
            "expected": merged,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: i64, end: i64) -> Interval {
        Interval::new(start, end).unwrap()
    }

    #[test]
    fn render_text_one_per_line() {
        let out = render_intervals(&[iv(1, 6), iv(8, 10)], OutputFormat::Text).unwrap();
        assert_eq!(out, "[1, 6]\n[8, 10]\n");
    }

    #[test]
    fn render_json_array_of_pairs() {
        let out = render_intervals(&[iv(1, 6), iv(8, 10)], OutputFormat::Json).unwrap();
        assert_eq!(out, "[[1,6],[8,10]]\n");
    }

    #[test]
    fn render_empty() {
        assert_eq!(render_intervals(&[], OutputFormat::Text).unwrap(), "");
        assert_eq!(render_intervals(&[], OutputFormat::Json).unwrap(), "[]\n");
    }

    #[test]
    fn verify_fails_on_unmerged_literals() {
        let args = IntervalArgs {
            intervals: vec!["1,4".into(), "4,5".into()],
            input: None,
        };
        let err = cmd_verify(args, &CliConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "2 intervals collapse to 1 when merged");
    }

    #[test]
    fn verify_accepts_merged_literals() {
        let args = IntervalArgs {
            intervals: vec!["1,3".into(), "4,5".into()],
            input: None,
        };
        assert!(cmd_verify(args, &CliConfig::default()).is_ok());
    }

    #[test]
    fn verify_json_lists_merged_form() {
        let input = [iv(1, 4), iv(4, 5), iv(8, 9)];
        let merged = merge(&input);
        let value = verify_json(&input, Some(merged.as_slice()));
        assert_eq!(
            value.to_string(),
            r#"{"count":3,"expected":[[1,5],[8,9]],"merged":false}"#
        );
    }

    #[test]
    fn verify_json_for_merged_input() {
        let value = verify_json(&[iv(1, 3), iv(4, 5)], None);
        assert_eq!(value, serde_json::json!({ "merged": true, "count": 2 }));
    }

    #[test]
    fn verify_json_format_still_fails_unmerged() {
        let args = IntervalArgs {
            intervals: vec!["2,6".into(), "1,3".into()],
            input: None,
        };
        let config = CliConfig {
            format: OutputFormat::Json,
            ..CliConfig::default()
        };
        assert!(cmd_verify(args, &config).is_err());
    }

    #[test]
    fn merge_rejects_inverted_json_entry() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"[[1,3],[9,2]]").unwrap();
        let args = IntervalArgs {
            intervals: vec![],
            input: Some(file.path().to_path_buf()),
        };
        let err = cmd_merge(args, &CliConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "cannot merge input");
        assert!(format!("{err:#}").contains("index 1"));
    }

    #[test]
    fn check_passes() {
        assert!(cmd_check().is_ok());
    }
}
