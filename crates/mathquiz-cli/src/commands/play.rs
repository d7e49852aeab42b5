//! The `mathquiz play` command.

use std::io::{self, IsTerminal};

use anyhow::Result;

use mathquiz_core::config::load_config_from;
use mathquiz_core::console::Console;
use mathquiz_core::model::SymbolStyle;
use mathquiz_core::random::{RandomSource, SeededRandom, SystemRandom};
use mathquiz_core::session::{Session, SessionOptions};

use crate::PlayArgs;

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut config = load_config_from(args.config.as_deref())?;

    // Flags override the file.
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(n) = args.questions {
        config.preset.questions = Some(usize::try_from(n)?);
    }
    if let Some(level) = args.level {
        config.preset.level = Some(level);
    }
    if let Some(operation) = args.operation {
        config.preset.operation = Some(operation);
    }
    if args.unicode {
        config.symbols = SymbolStyle::Unicode;
    }
    config.review |= args.review;

    // Escape codes only make sense on a real terminal.
    let terminal = io::stdout().is_terminal();
    config.color = config.color && !args.no_color && terminal;
    config.clear_screen = config.clear_screen && !args.no_clear && terminal;

    let rng: Box<dyn RandomSource> = match config.seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded questions");
            Box::new(SeededRandom::new(seed))
        }
        None => Box::new(SystemRandom::new()),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock()).with_color(config.color);

    let mut session = Session::new(console, rng, SessionOptions::from(&config));
    let summaries = session.run()?;
    tracing::debug!(rounds = summaries.len(), "session ended");

    Ok(())
}
