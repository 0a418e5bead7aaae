use std::fmt;

const CHANGED_TO: &str = "Changed to: ";
const OPEN_PDF: &str = "OPEN_PDF:";
const OPEN_GALLERY: &str = "OPEN_GALLERY:";

/// Out-of-band instruction embedded in an otherwise plain response.
///
/// The interpreter only ever speaks in strings; these are the handful of
/// prefixes a front end has to recognise to do something other than print.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Directive {
    /// A `cd` succeeded and the caller should move to the given path
    ChangedTo(String),
    /// Show the named document in a viewer
    OpenPdf(String),
    /// Show the named interactive gallery
    OpenGallery(String),
}

impl Directive {
    pub fn parse(response: &str) -> Option<Self> {
        if let Some(path) = response.strip_prefix(CHANGED_TO) {
            Some(Self::ChangedTo(path.to_owned()))
        } else if let Some(name) = response.strip_prefix(OPEN_PDF) {
            Some(Self::OpenPdf(name.to_owned()))
        } else {
            response
                .strip_prefix(OPEN_GALLERY)
                .map(|name| Self::OpenGallery(name.to_owned()))
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChangedTo(path) => write!(f, "{CHANGED_TO}{path}"),
            Self::OpenPdf(name) => write!(f, "{OPEN_PDF}{name}"),
            Self::OpenGallery(name) => write!(f, "{OPEN_GALLERY}{name}"),
        }
    }
}
