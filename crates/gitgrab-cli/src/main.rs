mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Parse CLI and dispatch. Exiting here also abandons any clone thread
    // still running past its deadline.
    let code = match Cli::run_from_args().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("git-grab error: {:#}", err);
            1
        }
    };
    std::process::exit(code);
}
