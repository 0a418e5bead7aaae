use tracing::debug;

use crate::command::Command;
use crate::directive::Directive;
use crate::error::InputError;
use crate::fs::Filesystem;
use crate::interpreter::{Interpreter, ReplyKind};
use crate::parser::parse_line;
use crate::path::{self, ROOT};

pub const DEFAULT_USER: &str = "chnnick";
pub const DEFAULT_HOST: &str = "portfolio";

/// What a front end should do with one submitted line.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// Print as regular output
    Output(String),
    /// File content with embedded markup, to be converted before printing
    Markup(String),
    /// Print as an error
    Error(String),
    /// The working directory moved; nothing to print
    ChangedDirectory(String),
    /// Wipe the screen
    Clear,
    /// Show a document viewer for the named file
    OpenDocument(String),
    /// Show the named gallery
    OpenGallery(String),
    /// Blank input
    Empty,
}

/// Everything a terminal keeps between commands: the filesystem, the current
/// path and the lines typed so far. The interpreter itself stays stateless.
#[derive(Debug)]
pub struct Session<F: Filesystem> {
    fs: F,
    interpreter: Interpreter,
    cwd: String,
    history: Vec<String>,
    user: String,
    host: String,
}

impl<F: Filesystem> Session<F> {
    pub fn new(fs: F) -> Self {
        Self::with_interpreter(fs, Interpreter::default())
    }

    pub fn with_interpreter(fs: F, interpreter: Interpreter) -> Self {
        Self {
            fs,
            interpreter,
            cwd: ROOT.to_owned(),
            history: Vec::new(),
            user: DEFAULT_USER.to_owned(),
            host: DEFAULT_HOST.to_owned(),
        }
    }

    /// Set the user and host shown in the prompt.
    pub fn with_identity(mut self, user: impl Into<String>, host: impl Into<String>) -> Self {
        self.user = user.into();
        self.host = host.into();
        self
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// `user@host:~$`
    pub fn prompt(&self) -> String {
        format!("{}@{}:{}$", self.user, self.host, path::display(&self.cwd))
    }

    /// Parse and run one line of input, updating the current path on a
    /// successful `cd`.
    pub fn submit(&mut self, line: &str) -> Result<Outcome, InputError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(Outcome::Empty);
        }
        self.history.push(trimmed.to_owned());

        let Some(input) = parse_line(trimmed)? else {
            return Ok(Outcome::Empty);
        };

        let command = Command::parse(&input.command);
        if command == Command::Clear {
            return Ok(Outcome::Clear);
        }

        let reply = self
            .interpreter
            .reply(&input.command, input.args.as_slice(), &self.cwd, &self.fs);

        let outcome = match reply.kind {
            ReplyKind::Failure => Outcome::Error(reply.text),
            ReplyKind::Content { markup: true } => Outcome::Markup(reply.text),
            ReplyKind::Content { markup: false } => Outcome::Output(reply.text),
            ReplyKind::Message => {
                match Directive::parse(&reply.text).filter(|_| command.emits_directives()) {
                    Some(Directive::ChangedTo(path)) => {
                        debug!("submit: cwd {} -> {}", self.cwd, path);
                        self.cwd = path.clone();
                        Outcome::ChangedDirectory(path)
                    }
                    Some(Directive::OpenPdf(name)) => Outcome::OpenDocument(name),
                    Some(Directive::OpenGallery(name)) => Outcome::OpenGallery(name),
                    None => Outcome::Output(reply.text),
                }
            }
        };

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::DREAM_STORE;
    use crate::fs::{Node, VirtualFs};
    use anyhow::Result;

    fn session() -> Result<Session<VirtualFs>> {
        Ok(Session::new(VirtualFs::portfolio()?))
    }

    #[test]
    fn test_starts_at_root() -> Result<()> {
        let session = session()?;

        assert_eq!(session.cwd(), "/");
        assert_eq!(session.prompt(), "chnnick@portfolio:~$");
        assert!(session.history().is_empty());

        Ok(())
    }

    #[test]
    fn test_projects_walkthrough() -> Result<()> {
        // Arrange
        let mut session = session()?;

        // Act
        let cd = session.submit("cd projects")?;
        let prompt = session.prompt();
        let listing = session.submit("ls")?;
        let content = session.submit("cat dream-store.txt")?;
        let back = session.submit("cd ..")?;

        // Assert
        assert_eq!(cd, Outcome::ChangedDirectory("/projects".into()));
        assert_eq!(prompt, "chnnick@portfolio:/projects$");
        let Outcome::Output(listing) = listing else {
            panic!("expected a listing, got {listing:?}");
        };
        assert!(listing.contains("(try: `cat mini-shell.txt`)"));
        assert_eq!(content, Outcome::Output(DREAM_STORE.into()));
        assert_eq!(back, Outcome::ChangedDirectory("/".into()));
        assert_eq!(session.cwd(), "/");
        assert_eq!(
            session.history(),
            ["cd projects", "ls", "cat dream-store.txt", "cd .."]
        );

        Ok(())
    }

    #[test]
    fn test_failed_cd_keeps_cwd() -> Result<()> {
        let mut session = session()?;
        session.submit("cd experience")?;

        let missing = session.submit("cd nonexistent")?;
        let file = session.submit("cd FirstByte.txt")?;

        assert_eq!(
            missing,
            Outcome::Error("cd: nonexistent: No such file or directory".into())
        );
        assert_eq!(file, Outcome::Error("cd: FirstByte.txt: Not a directory".into()));
        assert_eq!(session.cwd(), "/experience");

        Ok(())
    }

    #[test]
    fn test_directives() -> Result<()> {
        let mut session = session()?;

        assert_eq!(
            session.submit("open resume.pdf")?,
            Outcome::OpenDocument("resume.pdf".into())
        );
        assert_eq!(
            session.submit("./mystery")?,
            Outcome::OpenGallery("gallery".into())
        );

        Ok(())
    }

    #[test]
    fn test_clear_and_blank_lines() -> Result<()> {
        let mut session = session()?;

        assert_eq!(session.submit("clear")?, Outcome::Clear);
        assert_eq!(session.submit("CLEAR")?, Outcome::Clear);
        assert_eq!(session.submit("   ")?, Outcome::Empty);
        assert_eq!(session.history(), ["clear", "CLEAR"]);

        Ok(())
    }

    #[test]
    fn test_errors_are_classified() -> Result<()> {
        let mut session = session()?;

        let unknown = session.submit("unknown_command")?;
        let open = session.submit("open notreal.txt")?;
        let cat = session.submit("cat projects")?;

        assert!(matches!(unknown, Outcome::Error(m) if m.starts_with("bash: unknown_command: command not found")));
        assert_eq!(
            open,
            Outcome::Error("open: notreal.txt: No such file or directory".into())
        );
        assert!(matches!(cat, Outcome::Error(_)));
        assert!(matches!(session.submit("pwd")?, Outcome::Output(p) if p == "/"));

        Ok(())
    }

    #[test]
    fn test_markup_files_are_flagged() -> Result<()> {
        let mut session = session()?;

        let about = session.submit("cat about-me.txt")?;
        let project = session.submit("cat projects/mini-shell.txt")?;

        assert!(matches!(about, Outcome::Markup(text) if text.contains("<img")));
        assert!(matches!(project, Outcome::Output(_)));

        Ok(())
    }

    #[test]
    fn test_file_text_is_not_classified_as_error() -> Result<()> {
        // Arrange
        let text = "Troubleshooting: `No such file or directory` or `Permission denied`";
        let root = Node::directory(ROOT, [Node::file("faq.txt", text), Node::executable("run", text)])?;
        let mut session = Session::new(VirtualFs::new(root)?);

        // Act
        let cat = session.submit("cat faq.txt")?;
        let open = session.submit("open faq.txt")?;
        let run = session.submit("./run")?;

        // Assert
        for outcome in [cat, open, run] {
            assert_eq!(outcome, Outcome::Output(text.into()));
        }

        Ok(())
    }

    #[test]
    fn test_unterminated_quote_is_reported() -> Result<()> {
        let mut session = session()?;

        let result = session.submit("cat \"about-me.txt");

        assert!(result.is_err());
        assert_eq!(session.cwd(), "/");
        assert_eq!(session.history(), ["cat \"about-me.txt"]);

        Ok(())
    }

    #[test]
    fn test_quoted_arguments_reach_the_interpreter() -> Result<()> {
        let mut session = session()?.with_identity("guest", "localhost");

        let outcome = session.submit("cd 'projects'")?;

        assert_eq!(outcome, Outcome::ChangedDirectory("/projects".into()));
        assert_eq!(session.prompt(), "guest@localhost:/projects$");

        Ok(())
    }
}
