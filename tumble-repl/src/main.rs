mod cli;
mod command;
mod config;
mod helper;
mod history;
mod pool;
mod render;
mod session;

use cli::Parser;
use colored::Colorize;
use command::Command;
use config::Config;
use helper::ReplHelper;
use render::Renderer;
use rustyline::error::ReadlineError;
use rustyline::hint::HistoryHinter;
use rustyline::CompletionType;
use rustyline::EditMode;
use rustyline::Editor;
use session::Reply;
use session::Session;
use std::path::Path;
use tracing::debug;
use tracing::warn;
use tracing::Level;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true)
        .with_max_level(if args.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    let config_path = Config::resolve_path(args.config);
    let config = Config::load(&config_path)?;
    let history_file = config.history_file.clone();
    let mut session = Session::new(config, config_path);
    let renderer = Renderer::new(args.json);

    let editor_config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();
    let helper = ReplHelper {
        hinter: HistoryHinter {},
        colored: String::new(),
        words: session.words(),
    };
    let mut rline = Editor::with_config(editor_config)?;
    rline.set_helper(Some(helper));
    if rline.load_history(&history_file).is_err() {
        warn!("No previous history in `{}`", history_file);
    }
    let mut count = 1u64;
    loop {
        let prompt = format!("tumble: {}> ", count);
        if let Some(helper) = rline.helper_mut() {
            helper.colored = prompt.bold().green().to_string();
            helper.words = session.words();
        }
        match rline.readline(&prompt) {
            Ok(line) => {
                rline.add_history_entry(line.as_str())?;
                if line.trim().is_empty() {
                    continue;
                }
                let reply = session.run(Command::parse(&line));
                renderer.print(&reply);
                if let Reply::Quit = reply {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("{}", "tumble: signal: CTRL-C".bold().yellow());
                break;
            }
            Err(ReadlineError::Eof) => {
                eprintln!("{}", "tumble: signal: CTRL-D".bold().yellow());
                break;
            }
            Err(error) => {
                eprintln!("{}", format!("tumble: error: `{:?}`", error).bold().red());
                break;
            }
        }
        count += 1;
    }
    debug!("Saving line history to `{}`", history_file);
    if let Err(error) = config::create_parent(Path::new(&history_file))
        .and_then(|()| Ok(rline.append_history(&history_file)?))
    {
        warn!("Unable to save history to `{}`: {:#}", history_file, error);
    }
    Ok(())
}
