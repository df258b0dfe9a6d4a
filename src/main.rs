use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::Parser;
use colored::*;
use eyre::{Context, Result, bail};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;

use cli::Cli;
use cli::commands::Commands;
use cramr::config::Config;
use cramr::domain::{BlockMode, StudyBlock};
use cramr::export::export_to_ics;
use cramr::planner::{PlanRequest, StudyPlanner};
use cramr::storage::{load_schedule, save_schedule};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cramr")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("cramr.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Generate {
            chapters,
            chapters_file,
            date,
            time,
            block_minutes,
            daily_limit,
            break_minutes,
            ramp_factor,
            day_start_hour,
            seed,
        } => handle_generate_command(
            chapters,
            chapters_file.as_deref(),
            date,
            time.as_deref(),
            GenerateOverrides {
                block_minutes: *block_minutes,
                daily_limit: *daily_limit,
                break_minutes: *break_minutes,
                ramp_factor: *ramp_factor,
                day_start_hour: *day_start_hour,
                seed: *seed,
            },
            config,
        ),
        Commands::List { mode, pending } => handle_list_command(mode.as_deref(), *pending, config),
        Commands::Done { chapter } => handle_done_command(chapter, config),
        Commands::Clear => handle_clear_command(config),
        Commands::Remove { chapter, at } => handle_remove_command(chapter, at, config),
        Commands::Export { output } => handle_export_command(output.as_deref(), config),
    }
}

/// Per-run tuning flags; config fills in anything not given.
struct GenerateOverrides {
    block_minutes: Option<u32>,
    daily_limit: Option<u32>,
    break_minutes: Option<u32>,
    ramp_factor: Option<f64>,
    day_start_hour: Option<u32>,
    seed: Option<u64>,
}

fn handle_generate_command(
    chapters: &[String],
    chapters_file: Option<&std::path::Path>,
    date: &str,
    time: Option<&str>,
    overrides: GenerateOverrides,
    config: &Config,
) -> Result<()> {
    let chapters = collect_chapters(chapters, chapters_file)?;
    let exam_datetime = parse_exam_datetime(date, time, config)?;
    info!(
        "Generating schedule: {} chapters, exam at {}",
        chapters.len(),
        exam_datetime
    );

    let request = PlanRequest {
        chapters,
        block_minutes: overrides.block_minutes.unwrap_or(config.planner.block_minutes),
        exam_datetime,
        daily_limit: overrides.daily_limit.unwrap_or(config.planner.daily_limit),
        break_minutes: overrides.break_minutes.unwrap_or(config.planner.break_minutes),
        ramp_factor: overrides.ramp_factor.unwrap_or(config.planner.ramp_factor),
        day_start_hour: overrides.day_start_hour.unwrap_or(config.planner.day_start_hour),
        seed: overrides.seed,
    };

    let mut planner = StudyPlanner::new(request).context("Could not create planner")?;
    planner.generate().context("Could not generate schedule")?;
    let blocks = planner.into_blocks();

    save_schedule(&blocks, &config.storage.schedule_file).context(format!(
        "Failed to save schedule to {}",
        config.storage.schedule_file.display()
    ))?;

    println!(
        "{} {} blocks saved to {}",
        "Generated:".green(),
        blocks.len(),
        config.storage.schedule_file.display()
    );
    print_blocks(&blocks);
    Ok(())
}

fn collect_chapters(
    chapters: &[String],
    chapters_file: Option<&std::path::Path>,
) -> Result<Vec<String>> {
    let mut titles: Vec<String> = chapters.to_vec();
    if let Some(path) = chapters_file {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read chapters file {}", path.display()))?;
        titles.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from),
        );
    }
    if titles.is_empty() {
        bail!("No chapters given; pass titles as arguments or via --chapters-file");
    }
    Ok(titles)
}

fn parse_exam_datetime(date: &str, time: Option<&str>, config: &Config) -> Result<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .context("Exam date must be YYYY-MM-DD")?;
    let time_str = time.unwrap_or(&config.exam.default_time);
    let time = NaiveTime::parse_from_str(time_str, "%H:%M")
        .context("Exam time must be HH:MM (24h)")?;
    Ok(date.and_time(time))
}

fn handle_list_command(mode: Option<&str>, pending: bool, config: &Config) -> Result<()> {
    let blocks = load_schedule(&config.storage.schedule_file)?;
    if blocks.is_empty() {
        println!("{}", "No schedule saved yet".yellow());
        return Ok(());
    }

    let mode_filter = match mode {
        Some(m) if m.eq_ignore_ascii_case("study") => Some(BlockMode::Study),
        Some(m) if m.eq_ignore_ascii_case("revision") => Some(BlockMode::Revision),
        Some(other) => bail!("Unknown mode filter: {} (expected study or revision)", other),
        None => None,
    };

    let filtered: Vec<&StudyBlock> = blocks
        .iter()
        .filter(|b| mode_filter.is_none_or(|m| b.mode == m))
        .filter(|b| !pending || !b.completed)
        .collect();

    println!("{} {} of {} blocks", "Schedule:".cyan(), filtered.len(), blocks.len());
    for block in filtered {
        print_block(block);
    }
    Ok(())
}

fn handle_done_command(chapter: &str, config: &Config) -> Result<()> {
    let mut blocks = load_schedule(&config.storage.schedule_file)?;

    // First pending match; completed blocks stay untouched
    match blocks
        .iter_mut()
        .find(|b| b.chapter == chapter && !b.completed)
    {
        Some(block) => {
            block.completed = true;
            let start = block.start_time;
            save_schedule(&blocks, &config.storage.schedule_file)?;
            println!("{} {} at {}", "Completed:".green(), chapter, start.format("%Y-%m-%d %H:%M"));
        }
        None => {
            println!("{} no pending block for {}", "Skipped:".yellow(), chapter);
        }
    }
    Ok(())
}

fn handle_clear_command(config: &Config) -> Result<()> {
    let mut blocks = load_schedule(&config.storage.schedule_file)?;
    for block in &mut blocks {
        block.completed = false;
    }
    save_schedule(&blocks, &config.storage.schedule_file)?;
    println!("{} cleared completion flags on {} blocks", "Cleared:".green(), blocks.len());
    Ok(())
}

fn handle_remove_command(chapter: &str, at: &str, config: &Config) -> Result<()> {
    let start = NaiveDateTime::parse_from_str(at, "%Y-%m-%dT%H:%M")
        .context("Start time must be YYYY-MM-DDTHH:MM")?;

    let mut blocks = load_schedule(&config.storage.schedule_file)?;
    let before = blocks.len();
    blocks.retain(|b| !(b.chapter == chapter && b.start_time == start));

    if blocks.len() == before {
        println!("{} no block for {} at {}", "Skipped:".yellow(), chapter, at);
        return Ok(());
    }

    save_schedule(&blocks, &config.storage.schedule_file)?;
    println!("{} {} at {}", "Removed:".red(), chapter, at);
    Ok(())
}

fn handle_export_command(output: Option<&std::path::Path>, config: &Config) -> Result<()> {
    let blocks = load_schedule(&config.storage.schedule_file)?;
    if blocks.is_empty() {
        bail!("No schedule to export; run generate first");
    }

    let path = output.unwrap_or(&config.storage.export_file);
    export_to_ics(&blocks, path)?;
    println!("{} {} events to {}", "Exported:".green(), blocks.len(), path.display());
    Ok(())
}

fn print_blocks(blocks: &[StudyBlock]) {
    for block in blocks {
        print_block(block);
    }
}

fn print_block(block: &StudyBlock) {
    let mode = match block.mode {
        BlockMode::Study => "Study".cyan(),
        BlockMode::Revision => "Revision".magenta(),
    };
    let done = if block.completed { "x".green() } else { " ".normal() };
    println!(
        "  [{}] {} - {}  {:8}  {}",
        done,
        block.start_time.format("%Y-%m-%d %H:%M"),
        block.end_time.format("%H:%M"),
        mode,
        block.chapter
    );
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
