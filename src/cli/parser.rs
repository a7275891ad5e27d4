use crate::export::PreviewMode;
use crate::ingest::InputFormat;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for webreg2ics
/// Convert a WebReg schedule export into an iCalendar file
#[derive(Parser)]
#[command(
    name = "webreg2ics",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert a WebReg course schedule (extracted table or OCR text) into an .ics calendar and a JSON preview",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Input document and how to read it.
#[derive(Args, Clone, Debug)]
pub struct SourceArgs {
    /// Schedule file: CSV table, OCR text, or JSON rows
    pub input: String,

    /// Input format (default: inferred from the file extension)
    #[arg(long = "from", value_enum)]
    pub from: Option<InputFormat>,
}

/// One-off overrides of the configured term.
#[derive(Args, Clone, Debug, Default)]
pub struct TermArgs {
    /// First day of the term (YYYY-MM-DD, a Monday)
    #[arg(long = "term-start", value_name = "DATE")]
    pub term_start: Option<NaiveDate>,

    /// Last instructional day (YYYY-MM-DD)
    #[arg(long = "term-end", value_name = "DATE")]
    pub term_end: Option<NaiveDate>,

    /// Holiday with no classes (YYYY-MM-DD); repeat for several. Replaces the configured list.
    #[arg(long = "holiday", value_name = "DATE")]
    pub holidays: Vec<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Convert a schedule into an .ics file (and optional JSON preview)
    Convert {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        term: TermArgs,

        /// Output calendar file
        #[arg(long, short = 'o', value_name = "FILE", default_value = "schedule.ics")]
        out: String,

        /// Also write the preview events as JSON
        #[arg(long, value_name = "FILE")]
        json: Option<String>,

        /// Also write {ok, filename, ics, events} as JSON
        #[arg(long, value_name = "FILE")]
        bundle: Option<String>,

        /// Preview shape for --json / --bundle
        #[arg(long, value_enum, default_value = "recurring")]
        mode: PreviewMode,

        /// Overwrite output files without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the preview events as JSON on stdout
    Preview {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        term: TermArgs,

        #[arg(long, value_enum, default_value = "recurring")]
        mode: PreviewMode,
    },

    /// List the calendar events a schedule produces, and the rows skipped
    List {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        term: TermArgs,

        /// Also print every concrete meeting date
        #[arg(long)]
        dates: bool,
    },

    /// Show the rows read from the input, after OCR cleanup
    Rows {
        #[command(flatten)]
        source: SourceArgs,
    },
}
