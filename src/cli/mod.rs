use clap::{Args as ClapArgs, Parser, Subcommand};

pub mod inspect;

pub use inspect::{handle_meetings_command, handle_status_command, handle_transcript_command};

#[derive(Parser, Debug)]
#[command(name = "safescribe-kiosk")]
#[command(about = "Touchscreen front-end for the SafeScribe meeting recorder", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend API root, overrides `api.base_url` from the config file
    #[arg(long, global = true, env = "SAFESCRIBE_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the interactive kiosk in this terminal (default)
    Run,
    /// Show device settings, WiFi and recorder state
    Status,
    /// List recorded meetings or show one of them
    Meetings(MeetingsCliArgs),
    /// Print the live transcript of the current recording
    Transcript,
    /// Print version information
    Version,
}

#[derive(ClapArgs, Debug)]
pub struct MeetingsCliArgs {
    /// ID of a meeting to show in full
    #[arg(long)]
    pub id: Option<String>,
}
