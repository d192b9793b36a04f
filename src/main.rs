// 📊 vax-trend CLI - dataset in, daily trend chart out

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;

use vax_trend::{build_report, load_csv, parse_mdy, render_bar_chart, Jurisdiction, TrendQuery};

const DEFAULT_OUTPUT: &str = "plot.png";

struct RunConfig {
    csv_path: PathBuf,
    query: TrendQuery,
    output: PathBuf,
    print_daily: bool,
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let run = parse_args(&args)?;

    println!("📂 Loading dataset from {}...", run.csv_path.display());
    let rows = load_csv(&run.csv_path)?;
    println!("✓ Loaded {} rows", rows.len());

    let report = build_report(&rows, &run.query)?;

    if run.print_daily {
        println!("\nThe vaccinations administered by day are:");
        for (label, value) in report.series.points() {
            println!("  {}: {}", label, value);
        }
    }

    let scope = match &run.query.jurisdiction {
        Jurisdiction::All => "ALL jurisdictions".to_string(),
        Jurisdiction::Code(code) => format!("the jurisdiction of {}", code.to_uppercase()),
    };
    println!(
        "\nTotal vaccinations for the date range for {}: {}",
        scope, report.total
    );

    println!("\n🖼  Rendering chart to {}...", run.output.display());
    render_bar_chart(
        &report.series,
        &run.output,
        &format!("Daily vaccinations for {}", scope),
    )?;
    println!("✓ Chart written");

    Ok(())
}

/// Positional arguments: `<csv> <jurisdiction> <start|all> [end]`.
/// Flags: `--out <png>` to pick the output path, `--daily` to print the
/// per-day breakdown. An end date is required unless the start is "all".
fn parse_args(args: &[String]) -> Result<RunConfig> {
    let mut positional: Vec<&String> = Vec::new();
    let mut output = PathBuf::from(DEFAULT_OUTPUT);
    let mut print_daily = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--out" => {
                i += 1;
                let value = args.get(i).context("--out requires a file path")?;
                output = PathBuf::from(value);
            }
            "--daily" => print_daily = true,
            _ => positional.push(&args[i]),
        }
        i += 1;
    }

    if positional.len() < 3 {
        bail!("usage: vax-trend <csv> <jurisdiction> <start|all> [end] [--out <png>] [--daily]");
    }

    let csv_path = PathBuf::from(positional[0]);
    let jurisdiction = Jurisdiction::parse(positional[1]);

    let (start, end) = if positional[2].eq_ignore_ascii_case("all") {
        (None, None)
    } else {
        let start = parse_mdy(positional[2])?;
        let end_text = positional
            .get(3)
            .context("an end date is required unless the start is 'all'")?;
        let end = parse_mdy(end_text)?;
        (Some(start), Some(end))
    };

    Ok(RunConfig {
        csv_path,
        query: TrendQuery::new(jurisdiction, start, end),
        output,
        print_daily,
    })
}
