use tracing::debug;

use crate::actions::ActionRegistry;
use crate::command::{Command, EXEC_PREFIX};
use crate::content::HELP_TEXT;
use crate::directive::Directive;
use crate::fs::{Filesystem, Node, NodeKind};
use crate::path::{self, ROOT};

pub const EMPTY_DIRECTORY: &str = "Directory is empty";
const LIST_HINT: &str = "💡 Click on any command above or type it manually!";
const UNKNOWN_HINT: &str = "Try (or click)`help`to learn how to navigate my site!";

/// Where the text of a [`Reply`] came from.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ReplyKind {
    /// Written by the interpreter: listings, help and directives
    Message,
    /// The command could not be carried out
    Failure,
    /// Read verbatim out of a file
    Content { markup: bool },
}

/// The display string of a command together with its [`ReplyKind`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Reply {
    pub kind: ReplyKind,
    pub text: String,
}

impl Reply {
    fn message(text: impl Into<String>) -> Self {
        Self {
            kind: ReplyKind::Message,
            text: text.into(),
        }
    }

    fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: ReplyKind::Failure,
            text: text.into(),
        }
    }

    fn content(node: &Node, text: &str) -> Self {
        Self {
            kind: ReplyKind::Content {
                markup: node.is_markup(),
            },
            text: text.to_owned(),
        }
    }
}

impl From<Directive> for Reply {
    fn from(directive: Directive) -> Self {
        Self::message(directive.to_string())
    }
}

/// Maps a command and its arguments to the text a terminal should show.
///
/// Holds no session state: the caller threads the current path in on every
/// call and reads path changes back out of the `Changed to:` directive. Every
/// outcome, failures included, comes back as a display string.
#[derive(Debug, Clone)]
pub struct Interpreter {
    actions: ActionRegistry,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(ActionRegistry::builtin())
    }
}

impl Interpreter {
    pub fn new(actions: ActionRegistry) -> Self {
        Self { actions }
    }

    pub fn execute<F, S>(&self, command: &str, args: &[S], cwd: &str, fs: &F) -> String
    where
        F: Filesystem + ?Sized,
        S: AsRef<str>,
    {
        self.reply(command, args, cwd, fs).text
    }

    /// Same as [`Interpreter::execute`], keeping track of whether the text is
    /// a failure, a message of its own or the content of a file.
    pub fn reply<F, S>(&self, command: &str, args: &[S], cwd: &str, fs: &F) -> Reply
    where
        F: Filesystem + ?Sized,
        S: AsRef<str>,
    {
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        let command = Command::parse(command);
        debug!("execute: command={:?}, args={:?}, cwd={}", command, args, cwd);

        match command {
            Command::Help => Reply::message(HELP_TEXT),
            Command::List => list(&args, cwd, fs),
            Command::ChangeDir => change_dir(&args, cwd, fs),
            Command::PrintWorkingDir => print_working_dir(cwd),
            Command::Cat => cat(&args, cwd, fs),
            Command::Open => open(&args, cwd, fs),
            // The front end clears its own screen
            Command::Clear => Reply::message(""),
            Command::Execute(name) => self.run(&name, cwd, fs),
            Command::Unknown(token) => {
                Reply::failure(format!("bash: {token}: command not found\n\n{UNKNOWN_HINT}"))
            }
        }
    }

    /// `./name`: the action registry wins, the filesystem is the fallback.
    fn run<F>(&self, name: &str, cwd: &str, fs: &F) -> Reply
    where
        F: Filesystem + ?Sized,
    {
        if name.is_empty() {
            return Reply::failure(format!(
                "{EXEC_PREFIX}: missing file operand\nTry `{EXEC_PREFIX}<filename>` or `ls` to see available files"
            ));
        }

        if let Some(action) = self.actions.lookup(name) {
            debug!("run: name={} matched action {:?}", name, action);
            return action.directive().into();
        }

        run_from_filesystem(name, cwd, fs)
    }
}

/// Run a command with the built-in action registry.
pub fn execute<F, S>(command: &str, args: &[S], cwd: &str, fs: &F) -> String
where
    F: Filesystem + ?Sized,
    S: AsRef<str>,
{
    Interpreter::default().execute(command, args, cwd, fs)
}

fn list<F: Filesystem + ?Sized>(args: &[&str], cwd: &str, fs: &F) -> Reply {
    let arg = args.first().copied();
    let target = match arg {
        Some(arg) => fs.normalize_path(cwd, arg),
        None => cwd.to_owned(),
    };

    let Some(node) = fs.resolve(&target) else {
        return Reply::failure(format!(
            "ls: cannot access '{}': No such file or directory",
            arg.unwrap_or(cwd)
        ));
    };

    // Listing a file echoes the name back rather than its content
    if node.kind() != NodeKind::Directory {
        return Reply::message(arg.unwrap_or(node.name()));
    }

    let entries: Vec<String> = node.children().map(describe).collect();
    if entries.is_empty() {
        return Reply::message(EMPTY_DIRECTORY);
    }

    Reply::message(format!(
        "Contents of {}:\n\n{}\n\n{LIST_HINT}",
        path::display(&target),
        entries.join("\n")
    ))
}

fn describe(node: &Node) -> String {
    let name = node.name();
    match node.kind() {
        NodeKind::Directory => format!("📁 {name}/  (try: `cd {name}`)"),
        NodeKind::File => format!("📄 {name}  (try: `cat {name}`)"),
        NodeKind::Executable => format!("⚙️ {name}*  (try: `{EXEC_PREFIX}{name}`)"),
        NodeKind::OpaqueDocument => format!("📄 {name}  (try: `open {name}`)"),
    }
}

fn change_dir<F: Filesystem + ?Sized>(args: &[&str], cwd: &str, fs: &F) -> Reply {
    let Some(arg) = args.first() else {
        return Directive::ChangedTo(ROOT.to_owned()).into();
    };

    let target = fs.normalize_path(cwd, arg);
    match fs.kind_of(&target) {
        None => Reply::failure(format!("cd: {arg}: No such file or directory")),
        Some(NodeKind::Directory) => Directive::ChangedTo(target).into(),
        Some(_) => Reply::failure(format!("cd: {arg}: Not a directory")),
    }
}

fn print_working_dir(cwd: &str) -> Reply {
    if cwd.is_empty() {
        Reply::message(ROOT)
    } else {
        Reply::message(cwd)
    }
}

fn cat<F: Filesystem + ?Sized>(args: &[&str], cwd: &str, fs: &F) -> Reply {
    match locate_leaf("cat", args, cwd, fs) {
        Ok((arg, node)) => read(node, "cat", arg),
        Err(reply) => reply,
    }
}

fn open<F: Filesystem + ?Sized>(args: &[&str], cwd: &str, fs: &F) -> Reply {
    match locate_leaf("open", args, cwd, fs) {
        Ok((arg, _)) if arg.to_lowercase().ends_with(".pdf") => {
            Directive::OpenPdf(arg.to_owned()).into()
        }
        Ok((arg, node)) => read(node, "open", arg),
        Err(reply) => reply,
    }
}

/// Validation shared by commands that take one non-directory operand.
fn locate_leaf<'a, 'f, F>(
    command: &str,
    args: &[&'a str],
    cwd: &str,
    fs: &'f F,
) -> Result<(&'a str, &'f Node), Reply>
where
    F: Filesystem + ?Sized,
{
    let Some(&arg) = args.first() else {
        return Err(Reply::failure(format!(
            "{command}: missing file operand\nTry `{command} <filename>` or `ls` to see available files"
        )));
    };

    match fs.resolve_from(cwd, arg) {
        None => Err(Reply::failure(format!(
            "{command}: {arg}: No such file or directory"
        ))),
        Some(node) if node.kind() == NodeKind::Directory => Err(Reply::failure(format!(
            "{command}: {arg}: Is a directory\nTry `ls {arg}` instead"
        ))),
        Some(node) => Ok((arg, node)),
    }
}

fn read(node: &Node, command: &str, arg: &str) -> Reply {
    match node.content() {
        Some(content) => Reply::content(node, content),
        None => Reply::failure(format!("{command}: {arg}: Permission denied")),
    }
}

fn run_from_filesystem<F: Filesystem + ?Sized>(name: &str, cwd: &str, fs: &F) -> Reply {
    match fs.resolve_from(cwd, name) {
        None => Reply::failure(format!("{EXEC_PREFIX}{name}: No such file or directory")),
        Some(node) if node.kind() == NodeKind::Directory => {
            Reply::failure(format!("{EXEC_PREFIX}{name}: Is a directory"))
        }
        Some(node) => match node.content() {
            Some(content) => Reply::content(node, content),
            None => Reply::failure(format!("{EXEC_PREFIX}{name}: Permission denied")),
        },
    }
}
