//! CLI tool to browse lessons and render test steps as tables or scripts.
//!
//! Usage:
//!   step-script list
//!   step-script actions
//!   step-script show --lesson "API Testing" --tab script
//!   step-script custom --step "Click|CSS|.btn" --step "Wait|CSS|.done|500"
//!
//! Rendered text goes to stdout unless `-o` is given; diagnostics go to stderr.

use clap::{Args, Parser, Subcommand};
use qa_steps_rs::{
    Action, LessonCatalog, LocatorKind, Rendering, Result, Step, Tab, build_from_specs,
    locator_kinds, render_action, write_text,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Browse curated QA lessons and generate automation scripts from test steps.
#[derive(Parser)]
#[command(name = "step-script", version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog lessons
    List,
    /// List registered actions and their locator kinds
    Actions,
    /// Render a catalog lesson
    Show(ShowArgs),
    /// Build a custom sequence from step specs and render it
    Custom(CustomArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct ShowArgs {
    /// Lesson position (0-based) or title
    #[arg(short, long, env = "STEP_SCRIPT_LESSON", default_value = "0")]
    lesson: String,

    /// learn (table) or script
    #[arg(short, long, default_value = "learn")]
    tab: Tab,

    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Args)]
struct CustomArgs {
    /// action|locatorKind|locator[|testData[|expectedResult[|description]]]
    #[arg(short, long = "step", required = true)]
    steps: Vec<String>,

    /// practice (table) or script
    #[arg(short, long, default_value = "practice")]
    tab: Tab,

    #[command(flatten)]
    render: RenderArgs,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("step-script: {e}");
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    let catalog = LessonCatalog::builtin();
    match command {
        Commands::List => {
            let text = catalog
                .iter()
                .map(|(index, lesson)| {
                    format!(
                        "{:>2}  {:<16} {} steps",
                        index.get(),
                        lesson.title(),
                        lesson.steps().len()
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            emit(&text, None)
        }
        Commands::Actions => emit(&actions_text(), None),
        Commands::Show(args) => {
            let index = catalog.find(&args.lesson)?;
            let lesson = catalog.lesson(index);
            let rendering = Rendering::for_tab(args.tab, Tab::Learn)?;
            debug!(lesson = lesson.title(), tab = %args.tab, "rendering lesson");
            let text = if args.render.json {
                serde_json::to_string_pretty(lesson)?
            } else {
                rendering.render(lesson.steps())
            };
            emit(&text, args.render.output.as_ref())
        }
        Commands::Custom(args) => {
            let rendering = Rendering::for_tab(args.tab, Tab::Practice)?;
            let steps = build_from_specs(&args.steps);
            debug!(steps = steps.len(), tab = %args.tab, "rendering custom sequence");
            let text = if args.render.json {
                serde_json::to_string_pretty(&steps)?
            } else {
                rendering.render(&steps)
            };
            emit(&text, args.render.output.as_ref())
        }
    }
}

fn actions_text() -> String {
    Action::REGISTERED
        .iter()
        .map(|action| {
            let sample = Step::new(
                "",
                "",
                action.clone(),
                LocatorKind::Custom(String::new()),
                "<locator>",
                "<testData>",
                "<expectedResult>",
            );
            let kinds = locator_kinds(action)
                .iter()
                .map(|k| k.label())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{:<12} {:<44} [{kinds}]", action.label(), render_action(&sample))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn emit(text: &str, output: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = output {
        write_text(path, text)?;
        eprintln!("Wrote {}", path.display());
        return Ok(());
    }
    let mut stdout = io::stdout();
    stdout.write_all(text.as_bytes())?;
    if !text.is_empty() && !text.ends_with('\n') {
        writeln!(stdout)?;
    }
    Ok(())
}
