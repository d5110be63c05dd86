use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use pkgtrend::storage::{self, InputFormat};
use pkgtrend::{ChartConfig, ChartData, HistoricalDataset, Palette, RngDraws, chart_data};
use pkgtrend::{collect_labels, stats};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pkgtrend",
    version,
    about = "Turn package download history into line-chart data"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a chart document (labels, colored datasets, display options).
    Chart(ChartArgs),
    /// Print the sorted x-axis labels, one per line.
    Labels(InputArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum InFormat {
    Json,
    Csv,
}

impl From<InFormat> for InputFormat {
    fn from(f: InFormat) -> Self {
        match f {
            InFormat::Json => InputFormat::Json,
            InFormat::Csv => InputFormat::Csv,
        }
    }
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Download history: nested JSON object or CSV with package,version,week,count.
    #[arg(short, long)]
    input: PathBuf,
    /// Input format. If omitted, inferred from the --input extension.
    #[arg(long, value_enum)]
    format: Option<InFormat>,
}

#[derive(Args, Debug)]
struct ChartArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Write the chart document here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
    /// JSON file with display options (missing fields keep defaults).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Base colors separated by comma or semicolon (e.g., #4472C4,#ED7D31).
    #[arg(long)]
    palette: Option<String>,
    /// Seed for the multi-package shade jitter (reproducible output).
    #[arg(long)]
    seed: Option<u64>,
    /// Locale for tooltip totals (en, de, fr, ...). Overrides the config file.
    #[arg(long)]
    locale: Option<String>,
    /// Print per-series statistics.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 2 decimals, then trim trailing zeros and trailing dot.
            let s = format!("{:.2}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn load(args: &InputArgs) -> Result<HistoricalDataset> {
    storage::load_dataset(&args.input, args.format.map(InputFormat::from))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Chart(args) => cmd_chart(args),
        Command::Labels(args) => cmd_labels(args),
    }
}

fn cmd_labels(args: InputArgs) -> Result<()> {
    let dataset = load(&args)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for label in collect_labels(&dataset) {
        writeln!(out, "{label}")?;
    }
    Ok(())
}

fn cmd_chart(args: ChartArgs) -> Result<()> {
    let dataset = load(&args.input)?;

    let mut config = match args.config.as_ref() {
        Some(path) => storage::load_config(path)?,
        None => ChartConfig::default(),
    };
    if let Some(locale) = args.locale {
        config.locale = locale;
    }
    let palette = match args.palette.as_deref() {
        Some(list) => Palette::parse_list(list)?,
        None => Palette::default(),
    };

    let chart = match args.seed {
        Some(seed) => chart_data(&dataset, &palette, RngDraws::seeded(seed)),
        None => chart_data(&dataset, &palette, RngDraws::thread()),
    };
    let doc = chart.document(&config);

    match args.out.as_ref() {
        Some(path) => {
            storage::save_chart_json(&doc, path)?;
            eprintln!(
                "Wrote {} series over {} labels to {}",
                doc.dataset_count(),
                chart.labels.len(),
                path.display()
            );
        }
        None => println!("{}", serde_json::to_string_pretty(&doc)?),
    }

    if args.stats {
        // keep stdout clean for the document when it is printed there
        if args.out.is_some() {
            print_stats(&chart, &config, &mut std::io::stdout().lock())?;
        } else {
            print_stats(&chart, &config, &mut std::io::stderr().lock())?;
        }
    }

    Ok(())
}

fn print_stats(chart: &ChartData, config: &ChartConfig, out: &mut dyn Write) -> Result<()> {
    let summaries = stats::series_summary(&chart.datasets);
    for (s, series) in summaries.iter().zip(&chart.datasets) {
        writeln!(
            out,
            "{}  color={}  points={}  total={}  min={} max={} mean={} median={}",
            s.label,
            series.color,
            s.count,
            s.total,
            s.min.map_or_else(|| "NA".to_string(), |v| v.to_string()),
            s.max.map_or_else(|| "NA".to_string(), |v| v.to_string()),
            fmt_opt(s.mean),
            fmt_opt(s.median)
        )?;
    }
    for label in &chart.labels {
        if let Some(footer) = config.footer_text(&hovered_at(chart, label)) {
            writeln!(out, "{label}  {footer}")?;
        }
    }
    Ok(())
}

/// Counts of every series at one x-axis label, as a tooltip would see them.
fn hovered_at(chart: &ChartData, label: &str) -> Vec<u64> {
    chart
        .datasets
        .iter()
        .filter_map(|s| s.points.iter().find(|p| p.x == label).map(|p| p.y))
        .collect()
}
