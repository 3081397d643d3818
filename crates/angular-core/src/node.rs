// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Node types: a static descriptor paired with its compute function.

use angular_registry_api::NodeDef;
use thiserror::Error;

use crate::data::{AttrValue, DataBlock};
use crate::math::OpError;

/// Name of the single output plug every angle node exposes.
pub const OUTPUT: &str = "output";

/// Errors surfaced by node compute functions.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ComputeError {
    /// The host asked for a plug this node does not compute.
    #[error("{node} does not compute plug `{plug}`")]
    UnknownPlug {
        /// Node type name.
        node: &'static str,
        /// Requested plug.
        plug: String,
    },
    /// A required attribute is absent from the data block.
    #[error("missing attribute: {0}")]
    MissingAttr(String),
    /// An attribute holds a value of the wrong kind.
    #[error("attribute `{attr}` expected {expected}, found {found}")]
    TypeMismatch {
        /// Attribute name.
        attr: String,
        /// Kind the compute function reads.
        expected: &'static str,
        /// Kind actually stored.
        found: &'static str,
    },
    /// The operator rejected its inputs.
    #[error(transparent)]
    Op(#[from] OpError),
}

/// Function pointer that computes `plug` from the node's attribute values.
///
/// Parameters:
/// - `&str`: requested plug (long or short name)
/// - `&DataBlock`: the node's current input values
pub type ComputeFn = fn(&str, &DataBlock) -> Result<AttrValue, ComputeError>;

/// A node type registered with the host.
#[derive(Clone, Copy)]
pub struct NodeType {
    /// Static descriptor (name, id, attributes, affects edges).
    pub def: &'static NodeDef,
    /// Evaluation callback.
    pub compute: ComputeFn,
}

impl NodeType {
    /// Host-visible type name.
    pub fn name(&self) -> &'static str {
        self.def.name
    }

    /// Stable host type id.
    pub fn type_id(&self) -> u32 {
        self.def.type_id
    }

    /// Evaluates `plug` against `data`.
    ///
    /// # Errors
    /// Propagates the compute function's [`ComputeError`].
    pub fn compute(&self, plug: &str, data: &DataBlock) -> Result<AttrValue, ComputeError> {
        (self.compute)(plug, data)
    }
}

impl core::fmt::Debug for NodeType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeType")
            .field("name", &self.def.name)
            .field("type_id", &format_args!("{:#010x}", self.def.type_id))
            .finish_non_exhaustive()
    }
}

/// Rejects any plug other than the node's `output` (long or short name).
pub(crate) fn ensure_output(def: &NodeDef, plug: &str) -> Result<(), ComputeError> {
    match def.attr(plug) {
        Some(attr) if attr.name == OUTPUT => Ok(()),
        _ => Err(ComputeError::UnknownPlug {
            node: def.name,
            plug: plug.to_owned(),
        }),
    }
}
