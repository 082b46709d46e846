//! ohara CLI - inspect file-backed sessions and scrape table rows.

use clap::{Parser, Subcommand};
use ohara::cli;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "ohara")]
#[command(author, version, about = "Inspect ohara sessions and table markup", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a session's page history as JSON.
    History {
        /// Session ID.
        session_id: String,
    },

    /// Render breadcrumbs for a request URL. Drops history after the current page.
    Breadcrumbs {
        /// Session ID.
        session_id: String,

        /// Absolute request URL.
        url: String,

        /// Current page id. Defaults to the one derived from the URL path.
        #[arg(short, long)]
        page: Option<String>,
    },

    /// Clear a session's page history.
    Clear {
        /// Session ID.
        session_id: String,

        /// Remove every key of the session, not only the history.
        #[arg(long)]
        all: bool,
    },

    /// List stored sessions.
    Sessions,

    /// Scrape editable cell values from row and header markup.
    Scrape {
        /// File with the row's `<td>` markup.
        #[arg(long)]
        data: PathBuf,

        /// File with the table's `<th>` markup.
        #[arg(long)]
        headers: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::History { session_id } => cli::history::run(&session_id),
        Commands::Breadcrumbs {
            session_id,
            url,
            page,
        } => cli::history::run_breadcrumbs(&session_id, &url, page.as_deref()),
        Commands::Clear { session_id, all } => cli::clear::run(&session_id, all),
        Commands::Sessions => cli::sessions::run(),
        Commands::Scrape { data, headers } => cli::scrape::run(&data, &headers),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("ohara: error: {e}");
            ExitCode::FAILURE
        }
    }
}
