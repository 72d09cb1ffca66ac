//! Entry point: wires the prompt loop to stdin/stdout and the fixed
//! `./img` directory. No flags, no arguments; the readiness question is
//! the only way out.

use anyhow::Result;
use imgmark_cli::flow::Session;
use imgmark_cli::init_tracing;
use imgmark_cli::prompt::Prompter;
use imgmark_processing::ImageStore;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let store = ImageStore::new("./img");
    let prompter = Prompter::new(std::io::stdin().lock(), std::io::stdout());
    let mut session = Session::new(prompter, store);
    session.run().await
}
