use clap::{ArgAction, Parser};
use tracing::Level;

use crate::session::{DEFAULT_HOST, DEFAULT_USER};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct ShellCli {
    /// The user name shown in the prompt
    #[arg(short, long, default_value = DEFAULT_USER)]
    pub user: String,

    /// The host name shown in the prompt
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Run the given command line and exit; may be repeated
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub commands: Vec<String>,

    /// Do not print the welcome banner
    #[arg(long)]
    pub no_banner: bool,

    /// Log more; repeat for debug output
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl ShellCli {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}
