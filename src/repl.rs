use std::borrow::Cow;

use miette::{IntoDiagnostic, Report, Result};
use tracing::info;

use crate::fs::Filesystem;
use crate::markup::to_plain_text;
use crate::session::{Outcome, Session};

/// Text a terminal prints for an outcome, if any.
///
/// Markup is flattened to plain text. Viewers and galleries have no terminal
/// rendition, so those outcomes become a notice instead.
pub fn render(outcome: &Outcome) -> Option<Cow<'_, str>> {
    match outcome {
        Outcome::Output(text) | Outcome::Error(text) => Some(Cow::Borrowed(text)),
        Outcome::Markup(text) => Some(Cow::Owned(to_plain_text(text))),
        Outcome::OpenDocument(name) => Some(Cow::Owned(format!(
            "Opening {name} in the document viewer..."
        ))),
        Outcome::OpenGallery(name) => Some(Cow::Owned(format!("Opening the {name}..."))),
        Outcome::ChangedDirectory(_) | Outcome::Clear | Outcome::Empty => None,
    }
}

/// Runs a session over a plain reader and writer, one command per line,
/// until the input runs dry.
#[derive(Debug)]
pub struct Repl<I, O, F>
where
    I: std::io::BufRead,
    O: std::io::Write,
    F: Filesystem,
{
    input_stream: I,
    output_stream: O,
    session: Session<F>,
}

impl<I, O, F> Repl<I, O, F>
where
    I: std::io::BufRead,
    O: std::io::Write,
    F: Filesystem,
{
    pub fn new(input_stream: I, output_stream: O, session: Session<F>) -> Self {
        Self {
            input_stream,
            output_stream,
            session,
        }
    }

    pub fn session(&self) -> &Session<F> {
        &self.session
    }

    pub fn into_output(self) -> O {
        self.output_stream
    }

    pub fn run(&mut self) -> Result<()> {
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            if self
                .input_stream
                .read_until(b'\n', &mut buffer)
                .into_diagnostic()?
                == 0
            {
                break;
            }

            // Invalid UTF-8 is replaced rather than ending the run
            let line = String::from_utf8_lossy(&buffer);
            self.execute_line(&line)?;
        }

        info!("input exhausted after {} commands", self.session.history().len());
        Ok(())
    }

    /// Run one line and write whatever it produced.
    pub fn execute_line(&mut self, line: &str) -> Result<()> {
        match self.session.submit(line) {
            Ok(outcome) => {
                if let Some(text) = render(&outcome) {
                    writeln!(self.output_stream, "{text}").into_diagnostic()?;
                }
            }
            Err(err) => {
                writeln!(self.output_stream, "{:?}", Report::new(err)).into_diagnostic()?;
            }
        }

        self.output_stream.flush().into_diagnostic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::VirtualFs;
    use anyhow::Result;
    use std::io::Cursor;

    fn run_script(script: &str) -> Result<(String, String)> {
        let session = Session::new(VirtualFs::portfolio()?);
        let mut repl = Repl::new(Cursor::new(script.to_owned()), Vec::new(), session);

        repl.run().map_err(|e| anyhow::anyhow!("{e:?}"))?;

        let cwd = repl.session().cwd().to_owned();
        Ok((String::from_utf8(repl.into_output())?, cwd))
    }

    #[test]
    fn test_script_runs_every_line() -> Result<()> {
        // Arrange
        let script = "cd projects\npwd\nls ghost\n\n./mystery\nopen ../resume.pdf\n";

        // Act
        let (output, cwd) = run_script(script)?;

        // Assert
        assert_eq!(
            output,
            "/projects\n\
             ls: cannot access 'ghost': No such file or directory\n\
             Opening the gallery...\n\
             Opening ../resume.pdf in the document viewer...\n"
        );
        assert_eq!(cwd, "/projects");

        Ok(())
    }

    #[test]
    fn test_last_line_without_newline() -> Result<()> {
        let (output, _) = run_script("pwd")?;

        assert_eq!(output, "/\n");

        Ok(())
    }

    #[test]
    fn test_parse_error_does_not_stop_the_script() -> Result<()> {
        let (output, _) = run_script("cat \"about-me.txt\npwd\n")?;

        assert!(output.ends_with("/\n"));
        assert!(output.len() > "/\n".len());

        Ok(())
    }

    #[test]
    fn test_invalid_utf8_line_does_not_stop_the_script() -> Result<()> {
        // Arrange
        let session = Session::new(VirtualFs::portfolio()?);
        let script = b"cat \xff\xfe\ncd projects\npwd\n".to_vec();
        let mut repl = Repl::new(Cursor::new(script), Vec::new(), session);

        // Act
        repl.run().map_err(|e| anyhow::anyhow!("{e:?}"))?;

        // Assert
        assert_eq!(repl.session().cwd(), "/projects");
        let output = String::from_utf8(repl.into_output())?;
        assert!(output.starts_with("cat: \u{FFFD}\u{FFFD}: No such file or directory\n"));
        assert!(output.ends_with("/projects\n"));

        Ok(())
    }

    #[test]
    fn test_markup_is_printed_as_plain_text() -> Result<()> {
        let (output, _) = run_script("cat about-me.txt\ncd experience\ncat FirstByte.txt\n")?;

        assert!(output.contains("[image: Nick's Headshot]"));
        assert!(output.contains("[image: FirstByte Logo]"));
        assert!(!output.contains("<img"));
        assert!(!output.contains("</a>"));

        Ok(())
    }

    #[test]
    fn test_render() {
        assert_eq!(render(&Outcome::Empty), None);
        assert_eq!(render(&Outcome::Clear), None);
        assert_eq!(render(&Outcome::ChangedDirectory("/".into())), None);
        assert_eq!(
            render(&Outcome::Error("boom".into())).as_deref(),
            Some("boom")
        );
        assert_eq!(
            render(&Outcome::Markup("<b>hi</b>".into())).as_deref(),
            Some("hi")
        );
    }
}
