use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use connect_four_tui::ai::Difficulty;
use connect_four_tui::config::AppConfig;
use connect_four_tui::ui::App;

/// Play Connect Four against a minimax AI.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax AI")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override AI difficulty: easy, medium, or hard
    #[arg(long)]
    difficulty: Option<String>,

    /// Override the pause before the AI's reply, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Let the AI make the opening move
    #[arg(long)]
    ai_first: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(difficulty) = &cli.difficulty {
        config.game.difficulty = match difficulty.to_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            other => bail!("unknown difficulty '{}' (expected 'easy', 'medium', or 'hard')", other),
        };
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.game.ai_delay_ms = delay_ms;
    }
    if cli.ai_first {
        config.game.human_first = false;
    }
    config.validate()?;

    run(&config).context("running the game session")?;
    Ok(())
}

fn run(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config.game);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
