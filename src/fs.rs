use indexmap::IndexMap;
use tracing::debug;

use crate::error::FsError;
use crate::path::{self, ROOT};

/// The four kinds of entry the virtual filesystem knows about.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum NodeKind {
    Directory,
    File,
    /// Not printable inline, opened in a viewer instead (e.g. a PDF)
    OpaqueDocument,
    /// Invoked with `./name`
    Executable,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Body {
    Directory(IndexMap<String, Node>),
    File(Option<String>),
    OpaqueDocument(Option<String>),
    Executable(Option<String>),
}

/// A single entry of the tree.
///
/// Directories own their children keyed by name, in insertion order, so a
/// listing always comes back in the order the tree was built.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Node {
    name: String,
    markup: bool,
    body: Body,
}

impl Node {
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::leaf(name, Body::File(Some(content.into())))
    }

    /// A file whose content embeds markup (images, links) for the front end.
    pub fn markup_file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            markup: true,
            ..Self::file(name, content)
        }
    }

    pub fn document(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::leaf(name, Body::OpaqueDocument(Some(content.into())))
    }

    pub fn executable(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::leaf(name, Body::Executable(Some(content.into())))
    }

    /// Build a leaf from an explicit body, content included or not.
    pub fn leaf(name: impl Into<String>, body: Body) -> Self {
        Self {
            name: name.into(),
            markup: false,
            body,
        }
    }

    /// Build a directory, rejecting invalid or repeated child names.
    pub fn directory<I>(name: impl Into<String>, children: I) -> Result<Self, FsError>
    where
        I: IntoIterator<Item = Node>,
    {
        let name = name.into();
        let mut entries = IndexMap::new();

        for child in children {
            validate_name(&child.name)?;
            if entries.contains_key(&child.name) {
                return Err(FsError::DuplicateEntry {
                    directory: name,
                    name: child.name,
                });
            }
            entries.insert(child.name.clone(), child);
        }

        Ok(Self {
            name,
            markup: false,
            body: Body::Directory(entries),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_markup(&self) -> bool {
        self.markup
    }

    pub fn kind(&self) -> NodeKind {
        match self.body {
            Body::Directory(_) => NodeKind::Directory,
            Body::File(_) => NodeKind::File,
            Body::OpaqueDocument(_) => NodeKind::OpaqueDocument,
            Body::Executable(_) => NodeKind::Executable,
        }
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        match &self.body {
            Body::Directory(children) => children.get(name),
            _ => None,
        }
    }

    pub fn children(&self) -> impl Iterator<Item = &Node> {
        let children = match &self.body {
            Body::Directory(children) => Some(children.values()),
            _ => None,
        };
        children.into_iter().flatten()
    }

    /// Text payload of a leaf; `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match &self.body {
            Body::Directory(_) => None,
            Body::File(content) | Body::OpaqueDocument(content) | Body::Executable(content) => {
                content.as_deref()
            }
        }
    }
}

fn validate_name(name: &str) -> Result<(), FsError> {
    if name.is_empty() || name == "." || name == ".." || name.contains('/') {
        return Err(FsError::InvalidName(name.to_owned()));
    }
    Ok(())
}

/// Read-only view over a tree of [`Node`]s.
///
/// Absence and kind mismatches are reported through `None`, `false` or an
/// empty listing, never through an error.
pub trait Filesystem {
    /// The `/` directory.
    fn root(&self) -> &Node;

    /// Walk `path` from the root. Relative paths are taken relative to `/`.
    fn resolve(&self, path: &str) -> Option<&Node> {
        debug!("resolve: path={}", path);
        let normalized = path::normalize(ROOT, path);

        let mut node = self.root();
        for segment in path::segments(&normalized) {
            node = node.child(segment)?;
        }

        Some(node)
    }

    /// Walk `target` starting at `current`.
    fn resolve_from(&self, current: &str, target: &str) -> Option<&Node> {
        self.resolve(&self.normalize_path(current, target))
    }

    fn normalize_path(&self, current: &str, target: &str) -> String {
        path::normalize(current, target)
    }

    /// Names of the entries of a directory, in insertion order.
    fn list_children(&self, path: &str) -> Vec<&str> {
        self.resolve(path)
            .map(|node| node.children().map(Node::name).collect())
            .unwrap_or_default()
    }

    fn read_content(&self, path: &str) -> Option<&str> {
        self.resolve(path).and_then(Node::content)
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_some()
    }

    fn is_directory(&self, path: &str) -> bool {
        self.kind_of(path) == Some(NodeKind::Directory)
    }

    fn is_file(&self, path: &str) -> bool {
        self.kind_of(path) == Some(NodeKind::File)
    }

    fn is_opaque_document(&self, path: &str) -> bool {
        self.kind_of(path) == Some(NodeKind::OpaqueDocument)
    }

    fn is_executable(&self, path: &str) -> bool {
        self.kind_of(path) == Some(NodeKind::Executable)
    }

    fn kind_of(&self, path: &str) -> Option<NodeKind> {
        self.resolve(path).map(Node::kind)
    }
}

/// The in-memory filesystem, built once and never mutated.
#[derive(Debug, Clone)]
pub struct VirtualFs {
    root: Node,
}

impl VirtualFs {
    pub fn new(root: Node) -> Result<Self, FsError> {
        if root.name != ROOT || root.kind() != NodeKind::Directory {
            return Err(FsError::InvalidRoot(root.name));
        }
        Ok(Self { root })
    }

    /// The filesystem seeded with the compiled-in portfolio.
    pub fn portfolio() -> Result<Self, FsError> {
        Self::new(crate::content::tree()?)
    }
}

impl Filesystem for VirtualFs {
    fn root(&self) -> &Node {
        &self.root
    }
}
