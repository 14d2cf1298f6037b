use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "invite")]
#[command(about = "Invite code client: request, redeem and check access")]
#[command(version)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL
    #[arg(
        long,
        global = true,
        env = "INVITE_SERVER_URL",
        default_value = "http://127.0.0.1:8000"
    )]
    pub(crate) server: String,

    /// Bearer token issued by the auth provider
    #[arg(long, global = true, env = "INVITE_TOKEN", hide_env_values = true)]
    pub(crate) token: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
