//! CLI entry point for the user card renderer.
//!
//! Provides subcommands for rendering user cards into a host page, grading
//! individual marks, and exporting a per-course grade report.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use user_cards::{
    config::RenderConfig,
    gradation::Gradation,
    output::{append_records, grade_records, print_json, print_pretty},
    render::render_into,
    sink::{HostPage, WriterSink},
    user::load_users,
};

#[derive(Parser)]
#[command(name = "user_cards")]
#[command(about = "Render user records into HTML cards", long_about = None)]
struct Cli {
    /// JSON file with render settings (image root, container id)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render users into the container element of a host page
    Render {
        /// JSON array of user records
        #[arg(short, long)]
        users: PathBuf,

        /// JSON gradation table, e.g. {"60": "C", "80": "B", "100": "A"}
        #[arg(short, long)]
        gradation: Option<PathBuf>,

        /// Host page to inject the cards into
        #[arg(short, long)]
        page: Option<PathBuf>,

        /// Where to write the result (defaults to the page itself, or stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the grade for one or more marks
    Classify {
        #[arg(value_name = "MARK", required = true)]
        marks: Vec<String>,

        #[arg(short, long)]
        gradation: Option<PathBuf>,
    },
    /// Append one CSV row per displayed course score
    Report {
        #[arg(short, long)]
        users: PathBuf,

        #[arg(short, long)]
        gradation: Option<PathBuf>,

        /// CSV file to append rows to
        #[arg(short, long, default_value = "grades.csv")]
        output: String,

        /// Also log the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/user_cards.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("user_cards.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::from_env(),
    };

    match cli.command {
        Commands::Render {
            users,
            gradation,
            page,
            output,
        } => {
            let gradation = resolve_gradation(gradation)?;
            render(&users, &gradation, &config, page, output)?;
        }
        Commands::Classify { marks, gradation } => {
            let gradation = resolve_gradation(gradation)?;
            for raw in &marks {
                let mark = raw.trim().parse::<f64>().ok();
                let grade = gradation.score_class(mark);
                if grade.is_empty() {
                    warn!(mark = %raw, "Mark is ungraded");
                }
                info!(mark = %raw, grade, "Classified");
                println!("{raw}\t{grade}");
            }
        }
        Commands::Report {
            users,
            gradation,
            output,
            json,
        } => {
            let gradation = resolve_gradation(gradation)?;
            let users = load_users(&users)?;
            let records = grade_records(&users, &gradation);

            print_pretty(&records);
            if json {
                print_json(&records)?;
            }
            append_records(&output, &records)?;

            info!(rows = records.len(), output = %output, "Grade report written");
        }
    }

    Ok(())
}

/// Gradation from `--gradation`, else `USER_CARDS_GRADATION`, else the
/// built-in table.
fn resolve_gradation(arg: Option<PathBuf>) -> Result<Gradation> {
    let path = arg.or_else(|| std::env::var_os("USER_CARDS_GRADATION").map(PathBuf::from));
    match path {
        Some(path) => {
            let gradation = Gradation::load(&path)?;
            info!(path = %path.display(), rules = gradation.len(), "Gradation loaded");
            Ok(gradation)
        }
        None => {
            info!("No gradation table configured, using default");
            Ok(Gradation::default())
        }
    }
}

/// Renders the user cards and writes them to the host page or an output
/// stream.
#[tracing::instrument(skip(gradation, config), fields(users = %users.display()))]
fn render(
    users: &Path,
    gradation: &Gradation,
    config: &RenderConfig,
    page: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let users = load_users(users)?;
    info!(count = users.len(), "Users loaded");

    let stats = match (page, output) {
        (Some(page), output) => {
            let mut host = HostPage::load(&page)?;
            let stats = render_into(&mut host, &users, gradation, config)?;
            let target = output.unwrap_or(page);
            host.save(&target)?;
            info!(page = %target.display(), "Host page updated");
            stats
        }
        (None, Some(output)) => {
            let mut sink = WriterSink::new(BufWriter::new(File::create(&output)?));
            render_into(&mut sink, &users, gradation, config)?
        }
        (None, None) => {
            let mut sink = WriterSink::new(std::io::stdout().lock());
            render_into(&mut sink, &users, gradation, config)?
        }
    };

    if stats.ungraded_scores > 0 {
        warn!(ungraded = stats.ungraded_scores, "Some scores could not be graded");
    }
    info!(
        cards = stats.cards,
        students = stats.students,
        admins = stats.admins,
        lectors = stats.lectors,
        unknown_roles = stats.unknown_roles,
        courses = stats.courses,
        graded_pct = stats.graded_pct(),
        "Render complete"
    );

    Ok(())
}
