//! # CLI Layer
//!
//! The terminal client for wordly. This is the **only** place that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Parses arguments
//! - Installs the log subscriber
//! - Turns speech cues into audio
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the data dir, builds the API and the speech scheduler
//! - `handle_*()`: Per-command handlers that call the API and print results
//! - `flashcard_loop()` / `spelling_loop()`: Line-driven practice sessions,
//!   generic over input and output so they can be driven from tests

use super::render::{print_messages, render_hint, render_score, render_words, TerminalPresenter};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wordly::api::{ConfigAction, WordlyApi};
use wordly::commands::export::DEFAULT_EXPORT_FILENAME;
use wordly::config::WordlyConfig;
use wordly::error::{Result, WordlyError};
use wordly::present::Presenter;
use wordly::session::flashcard::FlashcardSession;
use wordly::session::spelling::{QuizState, SpellingQuiz};
use wordly::speech::{CommandSpeaker, SpeechScheduler};
use wordly::store::fs::FileStore;
use wordly::store::DataStore;

/// Overrides the platform data directory.
const HOME_ENV: &str = "WORDLY_HOME";

struct AppContext {
    api: WordlyApi<FileStore>,
    speech: SpeechScheduler,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { filter }) => handle_list(&ctx, filter),
        Some(Commands::Show { name }) => handle_show(&ctx, &name),
        Some(Commands::Save { name, words }) => handle_save(&mut ctx, &name, &words),
        Some(Commands::Delete { name }) => handle_delete(&mut ctx, &name),
        Some(Commands::Flash { name, shuffle }) => handle_flash(&ctx, &name, shuffle),
        Some(Commands::Spell { name }) => handle_spell(&mut ctx, &name),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Export { path, stdout }) => handle_export(&ctx, path, stdout),
        Some(Commands::Import { path }) => handle_import(&mut ctx, &path),
        Some(Commands::ImportCsv { path }) => handle_import_csv(&mut ctx, &path),
        Some(Commands::Fetch { url }) => handle_fetch(&mut ctx, &url),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

fn init_logging(verbose: bool) {
    let directive = if verbose { "wordly=debug" } else { "wordly=warn" };
    let filter = EnvFilter::from_default_env();
    let filter = match directive.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "wordly", "wordly")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| WordlyError::Config("Could not determine data directory".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dir = data_dir()?;
    tracing::debug!(data_dir = %dir.display(), "using data directory");

    let config = WordlyConfig::load(&dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "unreadable config, using defaults");
        WordlyConfig::default()
    });
    let speech = if cli.mute || !config.speech_enabled() {
        SpeechScheduler::muted()
    } else {
        SpeechScheduler::new(Box::new(CommandSpeaker::from_config(&config)))
    };

    Ok(AppContext {
        api: WordlyApi::new(FileStore::new(&dir), dir),
        speech,
    })
}

fn handle_list(ctx: &AppContext, filter: Option<String>) -> Result<()> {
    let listing = ctx.api.week_listing(filter.as_deref())?;
    println!("{}", TerminalPresenter.render_weeks(&listing));
    Ok(())
}

fn handle_show(ctx: &AppContext, name: &str) -> Result<()> {
    let result = ctx.api.get_week(name)?;
    for week in &result.listed_weeks {
        println!("{}", render_words(&week.name, &week.words));
    }
    Ok(())
}

fn handle_save(ctx: &mut AppContext, name: &str, words: &[String]) -> Result<()> {
    let mut raw = words.join("\n");
    if words.is_empty() && !io::stdin().is_terminal() {
        io::stdin().read_to_string(&mut raw)?;
    }
    let result = ctx.api.save_week(name, &raw)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.delete_week(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_flash(ctx: &AppContext, name: &str, shuffle: bool) -> Result<()> {
    let mut session = ctx.api.start_flashcards(name, shuffle)?;
    let stdin = io::stdin();
    flashcard_loop(
        &mut session,
        &mut TerminalPresenter,
        &ctx.speech,
        stdin.lock(),
        io::stdout(),
    )
}

fn handle_spell(ctx: &mut AppContext, name: &str) -> Result<()> {
    let stdin = io::stdin();
    spelling_loop(
        &mut ctx.api,
        name,
        &mut TerminalPresenter,
        &ctx.speech,
        stdin.lock(),
        io::stdout(),
    )
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    let score = result.stats.as_ref().and_then(|s| s.last_score.as_ref());
    println!("{}", render_score(score));
    Ok(())
}

fn handle_export(ctx: &AppContext, path: Option<String>, stdout: bool) -> Result<()> {
    if stdout {
        let result = ctx.api.export_weeks()?;
        println!("{}", result.exported.unwrap_or_default());
        return Ok(());
    }
    let path = path.unwrap_or_else(|| DEFAULT_EXPORT_FILENAME.to_string());
    let result = ctx.api.export_to_file(Path::new(&path))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: &str) -> Result<()> {
    let result = ctx.api.import_json_file(Path::new(path))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import_csv(ctx: &mut AppContext, path: &str) -> Result<()> {
    let result = ctx.api.import_csv_file(Path::new(path))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_fetch(ctx: &mut AppContext, url: &str) -> Result<()> {
    let result = ctx.api.fetch_csv(url)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for (key, value) in config.entries() {
                println!("{} = {}", key, value);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Drives a flashcard deck from line commands until `q` or end of input.
pub(super) fn flashcard_loop<P, R, W>(
    session: &mut FlashcardSession,
    presenter: &mut P,
    speech: &SpeechScheduler,
    input: R,
    mut out: W,
) -> Result<()>
where
    P: Presenter,
    R: BufRead,
    W: Write,
{
    writeln!(
        out,
        "Enter/f flip, n next, p previous, s shuffle, r say it, q quit"
    )?;
    writeln!(out, "{}", presenter.render_flashcard(&session.view()))?;
    if session.is_empty() {
        return Ok(());
    }

    for line in input.lines() {
        match line?.trim() {
            "" | "f" => session.flip(),
            "n" => session.next(),
            "p" => session.prev(),
            "s" => session.shuffle(),
            "r" => {
                speech.schedule(session.speak_current().into_iter().collect());
                continue;
            }
            "q" => break,
            other => {
                writeln!(out, "Unknown key: {}", other)?;
                continue;
            }
        }
        writeln!(out, "{}", presenter.render_flashcard(&session.view()))?;
    }
    speech.cancel_pending();
    Ok(())
}

/// Runs one spelling quiz from line input until it finishes, `:quit` or end of input.
pub(super) fn spelling_loop<S, P, R, W>(
    api: &mut WordlyApi<S>,
    name: &str,
    presenter: &mut P,
    speech: &SpeechScheduler,
    input: R,
    mut out: W,
) -> Result<()>
where
    S: DataStore,
    P: Presenter,
    R: BufRead,
    W: Write,
{
    let (mut quiz, opening): (SpellingQuiz, _) = api.start_spelling(name)?;
    let mut pending = speech.schedule(opening.cues);
    writeln!(out, "{}", presenter.render_spelling(&quiz.view()))?;
    if quiz.state() != QuizState::Active {
        return Ok(());
    }

    for line in input.lines() {
        let line = line?;
        let step = match line.trim() {
            ":quit" | ":q" => break,
            ":hint" | ":h" => {
                if let Some(masked) = quiz.hint() {
                    writeln!(out, "{}", render_hint(&masked))?;
                }
                continue;
            }
            ":say" | ":s" => {
                pending = speech.schedule(quiz.repeat_prompt().into_iter().collect());
                continue;
            }
            ":skip" => api.skip_spelling(&mut quiz)?,
            "" => continue,
            answer => api.submit_spelling(&mut quiz, answer)?,
        };
        pending = speech.schedule(step.cues);
        writeln!(out, "{}", presenter.render_spelling(&quiz.view()))?;
        if quiz.state() == QuizState::Finished {
            speech.finish(pending);
            return Ok(());
        }
    }

    speech.cancel_pending();
    Ok(())
}
