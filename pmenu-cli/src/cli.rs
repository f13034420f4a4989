use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use crossterm::style::Stylize;
use pmenu_core::{candidates_from_args, MenuConfig};

use crate::{logging, output};

const EXIT_NO_SELECTION: u8 = 1;
const EXIT_USAGE: u8 = 2;

#[derive(Parser)]
#[command(
    version,
    about = "Sleek dmenu alternative for the terminal",
    long_about = "Sleek dmenu alternative for the terminal

Examples:
  pmenu \"line1\\nline2\\nline3\"      (one argument, split on line breaks)
  pmenu line1 line2 line3          (one line per argument)
  pmenu -q foo \"$(ls)\"             (start with a search query)
  pmenu -- -v --help               (lines that look like options go after --)
"
)]
struct Cli {
    /// lines to choose from
    #[arg(allow_hyphen_values = true)]
    lines: Vec<String>,

    /// initial search query
    #[arg(short, long)]
    query: Option<String>,

    /// where to write the selection (defaults to the temp dir)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(output::default_output_path)
    }
}

fn usage(output_path: &std::path::Path) -> String {
    let path = format!("\"{}\"", output_path.display());
    format!(
        "\nUsage:\n  {}  {}{}{}{}{}\n         {}\n         {}\n\n\
         Bindings:\n  {}Highlight previous option.\n  {}Highlight next option.\n  \
         {}Select highlighted option, will be written to {}.\n  \
         {}Quit menu and exit with code 1.\n",
        "pmenu".cyan(),
        "\"line1".yellow(),
        "\\n".cyan(),
        "line2".yellow(),
        "\\n".cyan(),
        "line3...\"".yellow(),
        "\"line1\" \"line2\" \"line3\" ...".yellow(),
        "-- \"-line1\" \"--line2\" ...".yellow(),
        "up     ".cyan(),
        "down   ".cyan(),
        "enter  ".cyan(),
        path.yellow(),
        "esc    ".cyan(),
    )
}

pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.as_deref())?;

    let output_path = cli.output_path();
    let lines = match candidates_from_args(&cli.lines) {
        Ok(lines) => lines,
        Err(err) => {
            tracing::debug!("{err}");
            println!("{}", usage(&output_path));
            return Ok(ExitCode::from(EXIT_USAGE));
        }
    };

    let config = MenuConfig::default().with_initial_query(cli.query.as_deref().unwrap_or(""));
    match pmenu_tui::pmenu_with_config(&lines, &config)? {
        Some(selection) => {
            output::write_selection(&output_path, &selection)?;
            tracing::debug!(path = %output_path.display(), "selection written");
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::from(EXIT_NO_SELECTION)),
    }
}
