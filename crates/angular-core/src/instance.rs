// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! A single node instance with dirty tracking.
//!
//! Setting an input dirties only the outputs its affects edges name, and only
//! when the stored value actually changes bit for bit (`-0.0` over `0.0`
//! counts as a change). Evaluating a clean output returns
//! the cached value without calling the compute function again.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::trace;

use crate::data::{expected_kind, AttrValue, DataBlock};
use crate::math::Angle;
use crate::node::{ComputeError, NodeType};

/// Errors raised when writing an input attribute.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The node has no attribute with this name.
    #[error("{node} has no attribute `{attr}`")]
    UnknownAttr {
        /// Node type name.
        node: &'static str,
        /// Requested attribute.
        attr: String,
    },
    /// The attribute is computed and cannot be written.
    #[error("attribute `{0}` is an output")]
    NotAnInput(&'static str),
    /// The value does not fit the attribute's kind (or enum fields).
    #[error("attribute `{attr}` expects {expected}, got {found}")]
    Rejected {
        /// Attribute name.
        attr: &'static str,
        /// Kind the attribute stores.
        expected: &'static str,
        /// Offending value, formatted.
        found: String,
    },
}

/// One live node: its type, its inputs and its cached outputs.
#[derive(Debug, Clone)]
pub struct NodeInstance {
    node: NodeType,
    data: DataBlock,
    /// `None` marks a dirty output.
    outputs: BTreeMap<&'static str, Option<AttrValue>>,
    computes: u64,
}

impl NodeInstance {
    /// Instance with every input at its default and every output dirty.
    pub fn new(node: NodeType) -> Self {
        let data = DataBlock::for_node(node.def);
        let outputs = node.def.outputs().map(|attr| (attr.name, None)).collect();
        Self {
            node,
            data,
            outputs,
            computes: 0,
        }
    }

    /// The node type.
    pub fn node(&self) -> &NodeType {
        &self.node
    }

    /// Current input values.
    pub fn data(&self) -> &DataBlock {
        &self.data
    }

    /// Number of times the compute function has run.
    pub fn compute_count(&self) -> u64 {
        self.computes
    }

    /// Whether `plug` (an output) needs recomputing. Unknown plugs are dirty.
    pub fn is_dirty(&self, plug: &str) -> bool {
        self.node
            .def
            .attr(plug)
            .and_then(|attr| self.outputs.get(attr.name))
            .is_none_or(Option::is_none)
    }

    /// Writes an input attribute (long or short name).
    ///
    /// # Errors
    /// Returns [`InputError`] if the attribute does not exist, is an output, or
    /// cannot hold `value`.
    pub fn set_input(&mut self, name: &str, value: AttrValue) -> Result<(), InputError> {
        let def = self.node.def;
        let attr = def.attr(name).ok_or_else(|| InputError::UnknownAttr {
            node: def.name,
            attr: name.to_owned(),
        })?;
        if !attr.is_input() {
            return Err(InputError::NotAnInput(attr.name));
        }
        if !value.fits(attr) {
            return Err(InputError::Rejected {
                attr: attr.name,
                expected: expected_kind(attr),
                found: format!("{value:?}"),
            });
        }
        if self
            .data
            .get(attr.name)
            .is_some_and(|current| current.is_identical(&value))
        {
            return Ok(());
        }
        self.data.set(attr.name, value);
        for output in def.affected_by(attr.name) {
            if let Some(slot) = self.outputs.get_mut(output) {
                *slot = None;
            }
        }
        trace!(node = def.name, attr = attr.name, "input changed");
        Ok(())
    }

    /// Writes an angle input given in degrees.
    ///
    /// # Errors
    /// See [`NodeInstance::set_input`].
    pub fn set_degrees(&mut self, name: &str, degrees: f64) -> Result<(), InputError> {
        self.set_input(name, AttrValue::Angle(Angle::from_degrees(degrees)))
    }

    /// Returns the value of `plug`, recomputing it first if it is dirty.
    /// Input plugs return their stored value.
    ///
    /// # Errors
    /// Returns [`ComputeError::UnknownPlug`] for names the node does not have,
    /// and propagates compute failures (the output stays dirty).
    pub fn evaluate(&mut self, plug: &str) -> Result<AttrValue, ComputeError> {
        let def = self.node.def;
        let Some(attr) = def.attr(plug) else {
            return Err(ComputeError::UnknownPlug {
                node: def.name,
                plug: plug.to_owned(),
            });
        };
        if attr.is_input() {
            return self
                .data
                .get(attr.name)
                .cloned()
                .ok_or_else(|| ComputeError::MissingAttr(attr.name.to_owned()));
        }
        if let Some(Some(cached)) = self.outputs.get(attr.name) {
            return Ok(cached.clone());
        }
        let value = self.node.compute(attr.name, &self.data)?;
        self.computes += 1;
        trace!(node = def.name, plug = attr.name, ?value, "recomputed");
        self.outputs.insert(attr.name, Some(value.clone()));
        Ok(value)
    }

    /// Evaluates the `output` plug as degrees.
    ///
    /// # Errors
    /// Propagates [`NodeInstance::evaluate`] failures.
    pub fn output_degrees(&mut self) -> Result<f64, ComputeError> {
        match self.evaluate(crate::node::OUTPUT)? {
            AttrValue::Angle(a) => Ok(a.degrees()),
            other => Err(ComputeError::TypeMismatch {
                attr: crate::node::OUTPUT.to_owned(),
                expected: "angle",
                found: other.kind_name(),
            }),
        }
    }
}
