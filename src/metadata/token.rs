use std::fmt;
use std::hash::{Hash, Hasher};

use crate::metadata::model::MetadataKind;

/// An identity for a node in an [`crate::metadata::model::EdmModel`].
///
/// Node ids consist of a 32-bit value where:
/// - The high byte (bits 24-31) holds the [`MetadataKind`] tag of the node
/// - The low 24 bits (bits 0-23) hold the 1-based row of the node in the model arena
///
/// The value `0` is the null id and never refers to a node.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The null id
    pub const NULL: NodeId = NodeId(0);

    /// Largest row that fits into the low 24 bits
    pub const MAX_ROW: u32 = 0x00FF_FFFF;

    /// Creates a new id from a kind and a 1-based arena row
    #[must_use]
    pub fn new(kind: MetadataKind, row: u32) -> Self {
        NodeId((u32::from(kind.tag()) << 24) | (row & Self::MAX_ROW))
    }

    /// Returns the raw id value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Extracts the kind tag from the id (high byte)
    #[must_use]
    pub fn tag(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Returns the kind encoded in this id, `None` for the null id or an unknown tag
    #[must_use]
    pub fn kind(&self) -> Option<MetadataKind> {
        MetadataKind::from_tag(self.tag())
    }

    /// Extracts the 1-based arena row from the id (low 24 bits)
    #[must_use]
    pub fn row(&self) -> u32 {
        self.0 & Self::MAX_ROW
    }

    /// Returns true if this is the null id (value 0)
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for NodeId {
    fn from(value: u32) -> Self {
        NodeId(value)
    }
}

impl From<NodeId> for u32 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Some(kind) => write!(f, "NodeId(0x{:08x}, {}, row: {})", self.0, kind, self.row()),
            None => write!(
                f,
                "NodeId(0x{:08x}, tag: 0x{:02x}, row: {})",
                self.0,
                self.tag(),
                self.row()
            ),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

impl Hash for NodeId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
