use tumble_lib::dice::Group;
use tumble_lib::parse;

const PRESET_SIGIL: char = '$';

/// Command words offered for completion
pub(crate) const WORDS: [&str; 10] = [
    "reroll", "preset", "presets", "save", "pool", "stats", "log", "help", "quit", "exit",
];

pub(crate) const HELP: &str = "**commands**
`3d6 + 1d20 - 2` *roll a notation*
`rr` *reroll the last notation*
`$name` *roll a preset*
`preset <name> <notation>` *define a preset*, `preset rm <name>` *delete it*
`presets` *list presets*, `save` *write them to the configuration*
`pool` *show the pool*, `pool 2d6` *set a die count*, `pool +3` *set the modifier*
`pool roll` *roll the pool*, `pool clear` *empty it*
`stats <notation>` *min, max and average*
`log` *past rolls*
`quit` *leave*";

/// Something typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Roll(String),
    Reroll,
    Preset(String),
    SetPreset(String, String),
    DeletePreset(String),
    ListPresets,
    Save,
    ShowPool,
    SetPool(Group),
    PoolModifier(i64),
    ClearPool,
    RollPool,
    Stats(String),
    Log,
    Help,
    Quit,
    Invalid(&'static str),
}

/// Strip the sigil and normalize a preset name
pub(crate) fn preset_name(name: &str) -> String {
    name.trim_matches(|c: char| c == PRESET_SIGIL || c.is_whitespace())
        .to_lowercase()
}

impl Command {
    pub(crate) fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        match word.to_lowercase().as_str() {
            "rr" | "reroll" => Command::Reroll,
            "preset" => Self::parse_preset(rest),
            "presets" => Command::ListPresets,
            "save" => Command::Save,
            "pool" => Self::parse_pool(rest),
            "stats" if rest.is_empty() => Command::Invalid("usage: stats <notation>"),
            "stats" => Command::Stats(rest.to_owned()),
            "log" => Command::Log,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            w if w.starts_with(PRESET_SIGIL) && rest.is_empty() => {
                Command::Preset(preset_name(w))
            }
            _ => Command::Roll(line.to_owned()),
        }
    }

    fn parse_preset(rest: &str) -> Self {
        match rest.split_once(char::is_whitespace) {
            Some(("rm", name)) => Command::DeletePreset(preset_name(name)),
            Some((name, notation)) => {
                Command::SetPreset(preset_name(name), notation.trim().to_owned())
            }
            None => Command::Invalid("usage: preset <name> <notation> | preset rm <name>"),
        }
    }

    fn parse_pool(rest: &str) -> Self {
        match rest {
            "" => Command::ShowPool,
            "clear" => Command::ClearPool,
            "roll" => Command::RollPool,
            arg => {
                let expr = parse(arg);
                match expr.groups.as_slice() {
                    [group] if expr.modifier == 0 => Command::SetPool(*group),
                    [] if arg.starts_with(['+', '-']) => Command::PoolModifier(expr.modifier),
                    _ => Command::Invalid("usage: pool <count>d<sides> | pool +N | pool -N"),
                }
            }
        }
    }
}
