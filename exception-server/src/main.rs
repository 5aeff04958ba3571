//! Exception server
//!
//! ```sh
//! exception-server init            # Generate default config.toml
//! exception-server serve           # Start the server
//! exception-server scenarios       # List served paths
//! ```

use clap::Parser;
use exception_server::cmd::{self, Cli, Commands};

#[tokio::main]
#[allow(clippy::print_stderr)]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { output, force } => cmd::init::run(&output, force),
        Commands::Serve { config } => cmd::serve::run(config.as_deref()).await,
        Commands::Scenarios => {
            cmd::scenarios::run();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
