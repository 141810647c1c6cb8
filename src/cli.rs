use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ytxd",
    about = "YouTube transcript server for AI summarization clients",
    version,
)]
pub struct Cli {
    /// Address to bind (overrides config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides config file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Default caption language, repeatable in priority order
    #[arg(short, long = "lang")]
    pub langs: Vec<String>,

    /// Echo startup details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
