// weekly-planner-pdf: Generate printable weekly planners

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use weekly_planner_pdf::{
    default_file_name, generate_ops, generate_pdf, plan, HourFormat, Language, PaperSize,
    PlanSummary, PlannerConfig, PlannerError, TimeInterval,
};

// ============================================================================
// Data Structures
// ============================================================================

/// CLI Arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate printable weekly planners")]
struct Args {
    /// Planner configuration file (JSON); flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Year (defaults to the current year)
    #[arg(short, long)]
    year: Option<i32>,

    /// First month of the planner (1-12)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    start_month: Option<u32>,

    /// Last month of the planner (1-12)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    end_month: Option<u32>,

    /// Paper size
    #[arg(short, long, value_enum, ignore_case = true)]
    paper: Option<PaperSize>,

    /// Language of day names, month names and page titles
    #[arg(short, long, value_enum)]
    language: Option<Language>,

    /// First day shown each week (0=Sunday .. 6=Saturday)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=6))]
    week_start: Option<u32>,

    /// Last day shown each week (0=Sunday .. 6=Saturday); may wrap past Saturday
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=6))]
    week_end: Option<u32>,

    /// First hour of the time grid (0-23)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=23))]
    start_hour: Option<u32>,

    /// Last hour of the time grid (0-23)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=23))]
    end_hour: Option<u32>,

    /// Hour format of the time labels
    #[arg(long, value_enum)]
    hour_format: Option<HourFormat>,

    /// Minutes per time slot
    #[arg(short, long, value_enum)]
    interval: Option<TimeInterval>,

    /// Draw only light horizontal rules in the time grid
    #[arg(long)]
    no_grid: bool,

    /// Omit the week title above the time grid
    #[arg(long)]
    no_header: bool,

    /// Output filename (defaults to weekly-planner-{year}-{paper}.pdf)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "pdf")]
    format: OutputFormat,

    /// Print the page plan without writing a file
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging (otherwise RUST_LOG applies, default warn)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// PDF document
    Pdf,
    /// JSON list of drawing operations
    Ops,
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PlannerError> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = build_config(&args)?;

    let summary = plan(&config);
    if summary.is_empty() {
        return Err(PlannerError::EmptyPlanner);
    }

    if args.dry_run {
        print_plan(&config, &summary);
        return Ok(());
    }

    // Determine output filename
    let output_file = args.output.clone().unwrap_or_else(|| {
        let name = PathBuf::from(default_file_name(&config));
        match args.format {
            OutputFormat::Pdf => name,
            OutputFormat::Ops => name.with_extension("json"),
        }
    });

    println!("Generating {} pages...", summary.pages);
    let summary = match args.format {
        OutputFormat::Pdf => generate_pdf(&config, &output_file)?,
        OutputFormat::Ops => generate_ops(&config, &output_file)?,
    };

    println!("✓ Generated: {}", output_file.display());
    print_plan(&config, &summary);

    Ok(())
}

// ============================================================================
// Helper Functions
// ============================================================================

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Start from the config file (or defaults), apply flags, then validate.
fn build_config(args: &Args) -> Result<PlannerConfig, PlannerError> {
    let mut config = match &args.config {
        Some(path) => PlannerConfig::from_json_file(path)?,
        None => PlannerConfig::default(),
    };

    if let Some(year) = args.year {
        config.year = year;
    }
    if let Some(month) = args.start_month {
        config.start_month = month;
    }
    if let Some(month) = args.end_month {
        config.end_month = month;
    }
    if let Some(paper) = args.paper {
        config.paper_size = paper;
    }
    if let Some(language) = args.language {
        config.language = language;
    }
    if let Some(day) = args.week_start {
        config.week_start_day = day;
    }
    if let Some(day) = args.week_end {
        config.week_end_day = day;
    }
    if let Some(hour) = args.start_hour {
        config.start_hour = hour;
    }
    if let Some(hour) = args.end_hour {
        config.end_hour = hour;
    }
    if let Some(format) = args.hour_format {
        config.hour_format = format;
    }
    if let Some(interval) = args.interval {
        config.time_intervals = interval;
    }
    if args.no_grid {
        config.show_grid = false;
    }
    if args.no_header {
        config.show_header = false;
    }

    config.validate()?;
    Ok(config)
}

fn format_date_display(date: &NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

fn print_plan(config: &PlannerConfig, summary: &PlanSummary) {
    let t = config.language.translations();
    println!("  Weeks: {}", summary.weeks);
    println!("  Pages: {}", summary.pages);
    if let (Some(first), Some(last)) = (summary.first_week, summary.last_week) {
        println!("  First week: {}", format_date_display(&first));
        println!("  Last week: {}", format_date_display(&last));
    }
    println!(
        "  Days: {} - {} ({} per week)",
        t.day(config.week_start_day),
        t.day(config.week_end_day),
        config.day_count()
    );
    println!(
        "  Hours: {}:00-{}:00, {} min slots",
        config.start_hour,
        config.end_hour,
        config.time_intervals.minutes()
    );
}
