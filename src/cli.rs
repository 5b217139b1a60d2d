use clap::{Parser, Subcommand};
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(name = "mimeparser")]
#[command(about = "Media type parsing and content negotiation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the negotiation HTTP API
    Server(ServerArgs),
    /// Pick the best available media type for an Accept header
    Negotiate(NegotiateArgs),
    /// Print the parsed form of a media type as JSON
    Parse(ParseArgs),
}

#[derive(clap::Args, Debug)]
pub struct ServerArgs {
    /// Address to bind the HTTP server to (defaults to server.bind_addr)
    #[arg(long)]
    pub address: Option<SocketAddr>,
}

#[derive(clap::Args, Debug)]
pub struct NegotiateArgs {
    /// Accept header value (defaults to negotiation.default_accept)
    #[arg(long, short)]
    pub accept: Option<String>,

    /// Print every candidate with its score instead of only the winner
    #[arg(long)]
    pub ranking: bool,

    /// Media types the producer can emit, in preference order (defaults to negotiation.available)
    pub available: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct ParseArgs {
    /// Media type or media range, e.g. "application/xhtml+xml;q=0.5"
    pub media_type: String,
}
