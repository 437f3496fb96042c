use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date when built from a checkout.
/// Format: "0.3.2" without git, "0.3.2@abc1234 2024-01-15" otherwise
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "jobdeck", bin_name = "jobdeck", version = get_version())]
#[command(about = "Track job applications and career documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Track a new job
    #[command(alias = "a")]
    Add {
        /// Job title
        title: Option<String>,

        /// Company name
        company: Option<String>,

        #[command(flatten)]
        fields: JobFields,

        /// Initial status (defaults to new-leads)
        #[arg(long)]
        status: Option<String>,

        /// Provenance tag (defaults to the configured default-source)
        #[arg(long)]
        from: Option<String>,
    },

    /// List tracked jobs
    #[command(alias = "ls")]
    List {
        /// Only these statuses (repeatable)
        #[arg(short = 's', long = "status")]
        statuses: Vec<String>,

        /// Only jobs from this source
        #[arg(long)]
        source: Option<String>,

        /// Search title, company, location and notes
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Sort by: added, score, company, title
        #[arg(long)]
        sort: Option<String>,

        /// Page number (1-based)
        #[arg(short, long)]
        page: Option<usize>,

        /// Show every match on one page
        #[arg(long)]
        all: bool,
    },

    /// Show the Kanban board
    #[command(alias = "b")]
    Board,

    /// Move a job to another column
    #[command(alias = "mv")]
    Move {
        /// Job id or unique id prefix
        id: String,

        /// Target status (e.g. applied, interviewing)
        status: String,
    },

    /// Edit fields of a tracked job
    Update {
        /// Job id or unique id prefix
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New company
        #[arg(long)]
        company: Option<String>,

        #[command(flatten)]
        fields: JobFields,
    },

    /// Delete one or more jobs
    #[command(alias = "delete")]
    Rm {
        /// Job ids or unique id prefixes
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Show pipeline statistics
    Stats,

    /// Import jobs from a JSON array file
    Import {
        /// Path to the JSON file
        file: PathBuf,

        /// Provenance tag for imported jobs
        #[arg(long, default_value = "import")]
        from: String,
    },

    /// Manage career documents
    #[command(alias = "docs")]
    Doc {
        #[command(subcommand)]
        action: DocCommands,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., page-size)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Optional job fields shared by `add` and `update`.
#[derive(Args, Debug, Default)]
pub struct JobFields {
    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub salary: Option<String>,

    /// Job board or site the listing came from
    #[arg(long)]
    pub source: Option<String>,

    #[arg(long)]
    pub url: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Why the job fits
    #[arg(long)]
    pub why_match: Option<String>,

    /// Match score, 0-100
    #[arg(long)]
    pub score: Option<u8>,

    /// Posting date as shown on the listing
    #[arg(long)]
    pub posted: Option<String>,

    /// Application date (YYYY-MM-DD, or "none" to clear on update)
    #[arg(long)]
    pub applied_on: Option<String>,

    /// Interview date (YYYY-MM-DD, or "none" to clear on update)
    #[arg(long)]
    pub interview_on: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum DocCommands {
    /// Create a document, or update one when --id is given
    Save {
        /// Existing document id or unique prefix
        #[arg(long)]
        id: Option<String>,

        #[arg(long)]
        title: Option<String>,

        /// resume, tailored-resume, cover-letter, application-tailor
        #[arg(short = 't', long = "type")]
        doc_type: Option<String>,

        /// Document body
        #[arg(long, conflicts_with = "file")]
        content: Option<String>,

        /// Read the document body from a file
        #[arg(long)]
        file: Option<PathBuf>,

        #[arg(long)]
        job_title: Option<String>,

        #[arg(long)]
        company: Option<String>,

        /// draft or completed
        #[arg(long)]
        status: Option<String>,

        /// ATS score, 0-100
        #[arg(long)]
        ats_score: Option<u8>,
    },

    /// List documents, most recently updated first
    #[command(alias = "ls")]
    List {
        #[arg(short = 't', long = "type")]
        doc_type: Option<String>,

        #[arg(short = 'q', long)]
        search: Option<String>,
    },

    /// Print a document
    Show {
        /// Document id or unique prefix
        id: String,
    },

    /// Delete one or more documents
    Rm {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Write a document's content to a .txt file
    Export {
        /// Document id or unique prefix
        id: String,

        /// Target directory (defaults to export-dir, then the current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}
