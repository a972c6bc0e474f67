use clap::Parser;
use std::net::SocketAddr;
use term_abbrev::{init_tracing, web};

#[derive(Parser, Debug)]
#[command(author, version, about = "Serve the term abbreviation form over HTTP", long_about = None)]
struct Args {
    /// Socket address to bind, e.g. 127.0.0.1:8501
    #[arg(short, long, default_value = web::DEFAULT_LISTEN)]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("term_abbrev=info,info");
    let args = Args::parse();

    web::serve(args.listen).await?;
    Ok(())
}
