use clap::Parser;

/// Command-line options for the board editor.
#[derive(Clone, Debug, Parser)]
pub struct EditorOptions {
    #[arg(short = 'L', long)]
    pub log_level: Option<String>,

    /// Width of a freshly created board.
    #[arg(long, default_value_t = 8)]
    pub width: usize,

    /// Height of a freshly created board.
    #[arg(long, default_value_t = 8)]
    pub height: usize,

    /// Board file to save to and load from.
    #[arg(short, long)]
    pub filename: Option<String>,

    /// Load the board file at startup.
    #[arg(short, long, default_value_t = false)]
    pub load: bool,

    /// How many plies ahead engine moves look.
    #[arg(short = 's', long, default_value_t = 0)]
    pub future_sight: usize,
}
