use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dailynote")]
#[command(about = "Append timestamped memos to today's daily note", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// JSON-RPC request passed by the launcher (plugin mode)
    #[arg(value_name = "REQUEST")]
    pub request: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Append a memo to today's daily note
    Append {
        /// Memo text (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        content: Vec<String>,
    },

    /// Open today's daily note with the default application
    Open,

    /// Print today's daily note path and the template path
    Path,

    /// Show config status and location, or create default config if missing
    InitConfig,
}

pub fn parse() -> Cli {
    Cli::parse()
}
