/// Prefix that turns a token into an executable invocation.
pub const EXEC_PREFIX: &str = "./";

/// Every command the interpreter understands, resolved from the first token
/// of an input line.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    /// Show the help text
    Help,
    /// List directory contents, annotating each entry with how to use it
    List,
    /// Change the working directory
    ChangeDir,
    /// Print the working directory
    PrintWorkingDir,
    /// Print the content of a file
    Cat,
    /// Open a file, handing documents off to a viewer
    Open,
    /// Clear the screen. Handled by the caller
    Clear,
    /// Run `./name`
    Execute(String),
    /// Anything else
    Unknown(String),
}

impl Command {
    /// Match a command token. Names are case-insensitive, executable targets
    /// keep their case.
    pub fn parse(token: &str) -> Self {
        if let Some(name) = token.strip_prefix(EXEC_PREFIX) {
            return Self::Execute(name.to_owned());
        }

        match token.to_lowercase().as_str() {
            "help" => Self::Help,
            "ls" => Self::List,
            "cd" => Self::ChangeDir,
            "pwd" => Self::PrintWorkingDir,
            "cat" => Self::Cat,
            "open" => Self::Open,
            "clear" => Self::Clear,
            _ => Self::Unknown(token.to_owned()),
        }
    }

    /// Whether a sentinel in this command's response should be acted on.
    pub fn emits_directives(&self) -> bool {
        matches!(self, Self::ChangeDir | Self::Open | Self::Execute(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_builtins() {
        // Arrange
        let inputs = ["help", "ls", "LS", "cd", "Pwd", "cat", "OPEN", "clear"];
        let outputs = [
            Command::Help,
            Command::List,
            Command::List,
            Command::ChangeDir,
            Command::PrintWorkingDir,
            Command::Cat,
            Command::Open,
            Command::Clear,
        ];

        for (input, output) in inputs.iter().zip(outputs.iter()) {
            // Act
            let result = Command::parse(input);

            // Assert
            assert_eq!(result, *output);
        }
    }

    #[test]
    fn test_parse_executable_and_unknown() {
        assert_eq!(Command::parse("./mystery"), Command::Execute("mystery".into()));
        assert_eq!(Command::parse("./Mystery"), Command::Execute("Mystery".into()));
        assert_eq!(Command::parse("./"), Command::Execute(String::new()));
        assert_eq!(
            Command::parse("unknown_command"),
            Command::Unknown("unknown_command".into())
        );
    }
}
