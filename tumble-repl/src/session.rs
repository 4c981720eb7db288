use crate::command::Command;
use crate::command::HELP;
use crate::command::WORDS;
use crate::config::Config;
use crate::history::RollLog;
use crate::pool::PoolBuilder;
use chrono::Local;
use itertools::Itertools;
use std::path::PathBuf;
use tracing::debug;
use tumble_lib::parse;
use tumble_lib::roll;
use tumble_lib::solver::Solver;

/// What a command gives back to the prompt
#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Rolled(roll::Result),
    Text(String),
    Error(String),
    Quit,
}

/// Everything a prompt remembers between two commands
pub(crate) struct Session {
    config: Config,
    config_path: PathBuf,
    pool: PoolBuilder,
    log: RollLog,
    last: Option<Solver>,
}

impl Session {
    pub(crate) fn new(config: Config, config_path: PathBuf) -> Self {
        let log = RollLog::new(config.log_limit);
        Self {
            config,
            config_path,
            pool: PoolBuilder::new(),
            log,
            last: None,
        }
    }

    /// Command words and `$preset` names
    pub(crate) fn words(&self) -> Vec<String> {
        WORDS
            .iter()
            .map(|word| word.to_string())
            .chain(self.config.presets.keys().map(|name| format!("${name}")))
            .collect()
    }

    pub(crate) fn run(&mut self, command: Command) -> Reply {
        debug!("Running `{:?}`", command);
        match command {
            Command::Roll(notation) => self.roll(Solver::new(&notation)),
            Command::Reroll => match self.last.clone() {
                Some(solver) => self.roll(solver),
                None => Reply::Error("no previous rolls".to_owned()),
            },
            Command::Preset(name) => match self.config.presets.get(&name).cloned() {
                Some(notation) => self.roll(Solver::new(&notation)),
                None => Reply::Error(format!("preset `${name}` not found")),
            },
            Command::SetPreset(name, notation) => {
                let expr = parse(&notation);
                if name.is_empty() || (expr.is_empty() && expr.modifier == 0) {
                    return Reply::Error(format!("nothing to roll in `{notation}`"));
                }
                let reply = format!("**info** *preset* `${name}` *set to* `{expr}`");
                self.config.presets.insert(name, notation);
                Reply::Text(reply)
            }
            Command::DeletePreset(name) => match self.config.presets.remove(&name) {
                Some(_) => Reply::Text(format!("**info** *preset* `${name}` *deleted*")),
                None => Reply::Error("preset to delete not found".to_owned()),
            },
            Command::ListPresets => {
                if self.config.presets.is_empty() {
                    Reply::Text("**presets** *empty*".to_owned())
                } else {
                    Reply::Text(format!(
                        "**presets**\n{}",
                        self.config
                            .presets
                            .iter()
                            .map(|(name, notation)| format!("***${name}*** = `{notation}`"))
                            .format("\n")
                    ))
                }
            }
            Command::Save => match self.config.save(&self.config_path) {
                Ok(()) => Reply::Text(format!(
                    "**info** *config saved to* `{}`",
                    self.config_path.display()
                )),
                Err(error) => Reply::Error(format!("{error:#}")),
            },
            Command::ShowPool => self.show_pool(),
            Command::SetPool(group) => {
                self.pool.set(group);
                self.show_pool()
            }
            Command::PoolModifier(modifier) => {
                self.pool.set_modifier(modifier);
                self.show_pool()
            }
            Command::ClearPool => {
                self.pool.clear();
                self.show_pool()
            }
            Command::RollPool => {
                if self.pool.is_valid() {
                    let notation = self.pool.notation();
                    self.roll(Solver::new(&notation))
                } else {
                    Reply::Error("the pool holds no dice".to_owned())
                }
            }
            Command::Stats(notation) => {
                let expr = parse(&notation);
                if expr.is_empty() && expr.modifier == 0 {
                    return Reply::Error(format!("nothing to roll in `{notation}`"));
                }
                Reply::Text(format!(
                    "`{}` *min* **{}** *max* **{}** *average* **{:.1}**",
                    expr,
                    expr.min(),
                    expr.max(),
                    expr.average()
                ))
            }
            Command::Log => {
                if self.log.is_empty() {
                    Reply::Text("**log** *empty*".to_owned())
                } else {
                    Reply::Text(format!(
                        "**log** *last {}*\n{}",
                        self.log.len(),
                        self.log
                            .iter()
                            .map(|result| format!(
                                "*{}* {}",
                                result.timestamp().with_timezone(&Local).format("%H:%M:%S"),
                                result
                            ))
                            .format("\n")
                    ))
                }
            }
            Command::Help => Reply::Text(HELP.to_owned()),
            Command::Quit => Reply::Quit,
            Command::Invalid(usage) => Reply::Error(usage.to_owned()),
        }
    }

    fn roll(&mut self, solver: Solver) -> Reply {
        match solver.solve() {
            Ok(result) => {
                self.log.push(result.clone());
                self.last = Some(solver);
                Reply::Rolled(result)
            }
            Err(error) => Reply::Error(error.to_string()),
        }
    }

    fn show_pool(&self) -> Reply {
        let notation = self.pool.notation();
        Reply::Text(match (notation.is_empty(), self.pool.is_valid()) {
            (true, _) => "*pool* *empty*".to_owned(),
            (false, true) => format!("*pool* `{notation}`"),
            (false, false) => format!("*pool* `{notation}` *holds no dice*"),
        })
    }
}
