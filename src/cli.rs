use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "mapchat")]
#[command(about = "Chat assistant that finds and maps places", long_about = None)]
pub struct Args {
    #[arg(short = 'm', long = "model", help = "Chat model to use")]
    pub model: Option<String>,

    #[arg(
        long = "api-endpoint",
        help = "Custom API base URL (e.g., http://localhost:11434/v1)"
    )]
    pub api_endpoint: Option<String>,

    #[arg(
        long = "max-tool-rounds",
        help = "Maximum tool-call rounds per turn before giving up"
    )]
    pub max_tool_rounds: Option<usize>,

    #[arg(
        short = 'l',
        long = "language",
        help = "Language code for search results (e.g., en, pt-PT)"
    )]
    pub language: Option<String>,

    #[arg(short = 'v', long = "verbose", help = "Print diagnostic output")]
    pub verbose: bool,

    #[arg(help = "One-shot question; leave empty for an interactive session")]
    pub query: Vec<String>,
}
