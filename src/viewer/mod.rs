mod render;
mod server;

use std::collections::BTreeMap;
use std::net::SocketAddr;

pub use server::{serve, ViewerHandle};

/// Rendered in place of a missing doc string.
pub const NO_DOC_PLACEHOLDER: &str = "No documentation available.";

/// Port the viewer binds by default; see [`default_addr`].
pub const DEFAULT_PORT: u16 = 5000;

/// All interfaces on the default port.
pub fn default_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))
}

/// What the viewer knows about one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrDoc {
    pub type_label: String,
    pub doc: Option<String>,
}

/// Caller-built catalog of attribute name → type label + documentation.
///
/// The viewer performs no introspection of its own; whoever owns the object
/// enumerates its attributes with whatever reflection facility it has and
/// hands the result over as plain data. Names render in sorted order.
#[derive(Debug, Clone, Default)]
pub struct HelpInfo {
    entries: BTreeMap<String, AttrDoc>,
}

impl HelpInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, type_label: &str, doc: Option<&str>) {
        self.entries.insert(
            name.to_string(),
            AttrDoc {
                type_label: type_label.to_string(),
                doc: doc.map(str::to_string),
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&AttrDoc> {
        self.entries.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
