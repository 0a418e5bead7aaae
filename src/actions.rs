use indexmap::IndexMap;

use crate::directive::Directive;

/// A named behaviour that `./name` triggers instead of reading a file.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Action {
    /// Open the named gallery
    Gallery(String),
}

impl Action {
    pub fn directive(&self) -> Directive {
        match self {
            Self::Gallery(name) => Directive::OpenGallery(name.clone()),
        }
    }
}

/// Fixed table of special actions, consulted before the filesystem.
#[derive(Debug, Clone, Default)]
pub struct ActionRegistry {
    actions: IndexMap<String, Action>,
}

impl ActionRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The registry the portfolio ships with.
    pub fn builtin() -> Self {
        Self::empty().with("mystery", Action::Gallery("gallery".into()))
    }

    pub fn with(mut self, name: impl Into<String>, action: Action) -> Self {
        self.actions.insert(name.into(), action);
        self
    }

    pub fn lookup(&self, name: &str) -> Option<&Action> {
        self.actions.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry() {
        let registry = ActionRegistry::builtin();

        assert_eq!(
            registry.lookup("mystery").map(Action::directive),
            Some(Directive::OpenGallery("gallery".into()))
        );
        assert_eq!(registry.lookup("resume.pdf"), None);
        assert_eq!(registry.lookup("Mystery"), None);
    }

    #[test]
    fn test_custom_registry() {
        let registry = ActionRegistry::empty().with("photos", Action::Gallery("trips".into()));

        assert_eq!(
            registry.lookup("photos").map(|a| a.directive().to_string()),
            Some("OPEN_GALLERY:trips".to_owned())
        );
        assert!(registry.lookup("mystery").is_none());
    }
}
