use crate::session::Reply;
use colored::Colorize;
use termimad::crossterm::style::Color;
use termimad::MadSkin;
use tumble_lib::dice::Critic;
use tumble_lib::roll;

const TWEMOJI_MIN: &str = "🥶";
const TWEMOJI_MAX: &str = "🤩";

/// Print replies as markdown, or rolls as JSON
pub(crate) struct Renderer {
    skin: MadSkin,
    json: bool,
}

impl Renderer {
    pub(crate) fn new(json: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_fg(Color::Magenta);
        Self { skin, json }
    }

    pub(crate) fn print(&self, reply: &Reply) {
        match reply {
            Reply::Rolled(result) if self.json => match serde_json::to_string(result) {
                Ok(json) => println!("{json}"),
                Err(error) => eprintln!("{}", format!("error: {error}").bold().red()),
            },
            Reply::Rolled(result) => {
                println!("{}", self.skin.inline(&result.to_string()));
                if let Some(line) = critic_line(result) {
                    println!("{line}");
                }
            }
            Reply::Text(text) => print!("{}", self.skin.term_text(text)),
            Reply::Error(error) => eprintln!("{}", format!("error: {error}").bold().red()),
            Reply::Quit => (),
        }
    }
}

/// Natural maximum and minimum tags, maximum first
pub(crate) fn critic_line(result: &roll::Result) -> Option<String> {
    let critics = result.critics();
    let mut tags = Vec::new();
    if critics.contains(&Critic::Max) {
        tags.push(format!("{} {}", TWEMOJI_MAX, "natural max".green().bold()));
    }
    if critics.contains(&Critic::Min) {
        tags.push(format!("{} {}", TWEMOJI_MIN, "natural min".red().bold()));
    }
    (!tags.is_empty()).then(|| tags.join("  "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tumble_lib::roll::Source;
    use tumble_lib::solver::evaluate_with_source;

    struct Fixed(u64);

    impl Source for Fixed {
        fn throw(&mut self, sides: u64) -> u64 {
            self.0.min(sides)
        }
    }

    #[test]
    fn critic_line_test() {
        let result = evaluate_with_source("1d20", &mut Fixed(20)).unwrap();
        let line = critic_line(&result).unwrap();
        assert!(line.contains("natural max"));
        assert!(!line.contains("natural min"));

        let result = evaluate_with_source("1d20", &mut Fixed(1)).unwrap();
        let line = critic_line(&result).unwrap();
        assert!(line.contains("natural min"));

        // only the d6 shows its maximum
        let result = evaluate_with_source("1d20+1d6", &mut Fixed(6)).unwrap();
        let line = critic_line(&result).unwrap();
        assert!(line.contains("natural max"));

        let result = evaluate_with_source("1d20", &mut Fixed(7)).unwrap();
        assert_eq!(None, critic_line(&result));

        let result = evaluate_with_source("+3", &mut Fixed(7)).unwrap();
        assert_eq!(None, critic_line(&result));
    }
}
