//! Twenty-One against the dealer on the terminal.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use parlor_games::{GameRng, Session, StdioTerminal, TwentyOne, TwentyOneConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let game = TwentyOne::new(TwentyOneConfig::default());
    let mut session = Session::new(game, GameRng::from_entropy());
    session.run(&mut StdioTerminal::new())?;

    Ok(())
}
