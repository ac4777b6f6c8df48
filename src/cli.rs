//! Command-line interface definition.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "planam", version, about = "Event planning backend with an AI planner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,

    /// Chat with the planner through a running relay; `/plan` shows the plan, `/save` stores the chat
    Chat {
        /// Base URL of the server hosting the relay
        #[arg(long, env = "PLANAM_RELAY_URL", default_value = "http://localhost:8080")]
        relay_url: String,

        /// Bearer token sent to the relay
        #[arg(long, env = "PLANAM_TOKEN")]
        token: String,
    },
}
