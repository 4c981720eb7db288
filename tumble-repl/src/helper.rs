use colored::Colorize;
use rustyline::completion::Completer;
use rustyline::completion::Pair;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::hint::HistoryHinter;
use rustyline::Context;
use rustyline::Result;
use rustyline_derive::Helper;
use rustyline_derive::Validator;
use std::borrow::Cow;
use std::borrow::Cow::Borrowed;
use std::borrow::Cow::Owned;

#[derive(Helper, Validator)]
pub(crate) struct ReplHelper {
    pub(crate) hinter: HistoryHinter,
    pub(crate) colored: String,
    /// Command words and preset names to complete
    pub(crate) words: Vec<String>,
}

impl ReplHelper {
    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let start = line[..pos].rfind(' ').map_or(0, |index| index + 1);
        let typed = &line[start..pos];
        let candidates = self
            .words
            .iter()
            .filter(|word| !typed.is_empty() && word.starts_with(typed))
            .map(|word| Pair {
                display: word.clone(),
                replacement: word.clone(),
            })
            .collect();
        (start, candidates)
    }
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Self::Candidate>)> {
        Ok(self.candidates(line, pos))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<Self::Hint> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for ReplHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Borrowed(&self.colored)
        } else {
            Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.dimmed().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper() -> ReplHelper {
        ReplHelper {
            hinter: HistoryHinter {},
            colored: String::new(),
            words: vec![
                "pool".to_owned(),
                "preset".to_owned(),
                "presets".to_owned(),
                "$fireball".to_owned(),
            ],
        }
    }

    #[test]
    fn complete_word_test() {
        let (start, pairs) = helper().candidates("pr", 2);
        assert_eq!(0, start);
        let words: Vec<_> = pairs.into_iter().map(|p| p.replacement).collect();
        assert_eq!(vec!["preset".to_owned(), "presets".to_owned()], words);
    }

    #[test]
    fn complete_after_space_test() {
        let (start, pairs) = helper().candidates("2d6 $fi", 7);
        assert_eq!(4, start);
        assert_eq!(1, pairs.len());
        assert_eq!("$fireball", pairs[0].replacement);
    }

    #[test]
    fn lines_end_on_enter_test() {
        use rustyline::validate::Validator as _;
        assert!(!helper().validate_while_typing());
    }

    #[test]
    fn nothing_typed_test() {
        let (_, pairs) = helper().candidates("", 0);
        assert!(pairs.is_empty());
    }
}
