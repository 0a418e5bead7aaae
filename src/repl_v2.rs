use std::borrow::Cow;

use miette::{IntoDiagnostic, Report, Result};
use tracing::info;

use clap_repl::reedline::{
    Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, Reedline, Signal,
};

use crate::fs::Filesystem;
use crate::repl::render;
use crate::session::{Outcome, Session};

static DEFAULT_PROMPT_INDICATOR: &str = " ";
static DEFAULT_MULTILINE_INDICATOR: &str = "::: ";

/// Static prompt text, rebuilt from the session before every line so it
/// follows `cd`.
#[derive(Debug, Clone)]
pub struct ShellPrompt {
    left: String,
}

impl ShellPrompt {
    pub fn new(left: impl Into<String>) -> Self {
        Self { left: left.into() }
    }
}

impl Prompt for ShellPrompt {
    fn render_prompt_left(&self) -> Cow<str> {
        Cow::Borrowed(&self.left)
    }

    fn render_prompt_right(&self) -> Cow<str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<str> {
        DEFAULT_PROMPT_INDICATOR.into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<str> {
        Cow::Borrowed(DEFAULT_MULTILINE_INDICATOR)
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse-search: {}) ",
            prefix, history_search.term
        ))
    }
}

/// Interactive front end with line editing and in-memory history.
pub struct ReplV2 {}

impl ReplV2 {
    pub fn run<F: Filesystem>(session: &mut Session<F>) -> Result<()> {
        let mut line_editor = Reedline::create();

        loop {
            let prompt = ShellPrompt::new(session.prompt());

            let line = match line_editor.read_line(&prompt).into_diagnostic()? {
                Signal::Success(line) => line,
                Signal::CtrlD => break,
                // Ctrl-C drops the current line
                _ => continue,
            };

            match session.submit(&line) {
                Ok(Outcome::Clear) => line_editor.clear_screen().into_diagnostic()?,
                Ok(Outcome::Error(text)) => eprintln!("{text}"),
                Ok(outcome) => {
                    if let Some(text) = render(&outcome) {
                        println!("{text}");
                    }
                }
                Err(err) => eprintln!("{:?}", Report::new(err)),
            }
        }

        info!("session closed after {} commands", session.history().len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_rendering() {
        let prompt = ShellPrompt::new("me@host:~$");

        assert_eq!(prompt.render_prompt_left(), "me@host:~$");
        assert_eq!(prompt.render_prompt_right(), "");
        assert_eq!(prompt.render_prompt_multiline_indicator(), "::: ");
    }
}
