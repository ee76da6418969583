use std::path::PathBuf;

use clap::Parser;

use crate::logging::LogDestination;

#[derive(Parser, Debug)]
#[command(
    name = "keyword_app",
    version,
    about = "Find keywords for a topic and subscribe to updates about it"
)]
pub(crate) struct CliArgs {
    /// RON settings file. Defaults to ./keyword_app.ron when present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Backend base URL, overriding the settings file.
    #[arg(long, value_name = "URL", env = "KEYWORD_APP_BASE_URL")]
    pub base_url: Option<String>,

    /// Where log output goes. Terminal output shares the screen with the UI.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    /// Print the effective settings as RON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}
