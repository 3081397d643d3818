// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Node type registry and the static provider handed to hosts.

use std::collections::BTreeMap;

use angular_registry_api::{NodeDef, RegistryInfo, RegistryProvider};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::node::NodeType;
use crate::nodes::{plugin_nodes, NODE_DEFS};

/// Vendor string reported at plugin load.
pub const PLUGIN_VENDOR: &str = "angular";

/// Plugin version reported at plugin load.
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Host API version the plugin requires.
pub const REQUIRED_API_VERSION: &str = "Any";

/// Errors raised while registering or deregistering node types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Attempted to register a node type with a duplicate name.
    #[error("duplicate node name: {0}")]
    DuplicateName(&'static str),
    /// Attempted to register a node type with a duplicate id.
    #[error("duplicate node id: {0:#010x}")]
    DuplicateId(u32),
    /// Attempted to deregister an id that was never registered.
    #[error("node id not registered: {0:#010x}")]
    UnknownId(u32),
}

/// Registered node types, keyed by type id.
#[derive(Debug, Default)]
pub struct NodeRegistry {
    by_id: BTreeMap<u32, NodeType>,
    by_name: BTreeMap<&'static str, u32>,
}

impl NodeRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every angle node, registered in host order.
    ///
    /// # Errors
    /// Only fails if the built-in node table itself contains duplicates.
    pub fn with_plugin() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.initialize_plugin()?;
        Ok(registry)
    }

    /// Registers a node type.
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateName`] if a node with the same name
    /// is registered, or [`RegistryError::DuplicateId`] if the id is taken.
    #[instrument(level = "debug", skip(self, node), fields(name = node.name(), id = node.type_id()))]
    pub fn register(&mut self, node: NodeType) -> Result<(), RegistryError> {
        if self.by_name.contains_key(node.name()) {
            return Err(RegistryError::DuplicateName(node.name()));
        }
        if self.by_id.contains_key(&node.type_id()) {
            return Err(RegistryError::DuplicateId(node.type_id()));
        }
        self.by_name.insert(node.name(), node.type_id());
        self.by_id.insert(node.type_id(), node);
        debug!("registered node type");
        Ok(())
    }

    /// Removes a node type by id and returns it.
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownId`] if nothing is registered under `type_id`.
    #[instrument(level = "debug", skip(self))]
    pub fn deregister(&mut self, type_id: u32) -> Result<NodeType, RegistryError> {
        let node = self
            .by_id
            .remove(&type_id)
            .ok_or(RegistryError::UnknownId(type_id))?;
        self.by_name.remove(node.name());
        debug!(name = node.name(), "deregistered node type");
        Ok(node)
    }

    /// Registers every angle node in host order.
    ///
    /// # Errors
    /// Stops at the first registration error, leaving earlier nodes registered.
    pub fn initialize_plugin(&mut self) -> Result<(), RegistryError> {
        for node in plugin_nodes() {
            self.register(node)?;
        }
        Ok(())
    }

    /// Deregisters every angle node in host order.
    ///
    /// # Errors
    /// Stops at the first node that is not registered.
    pub fn uninitialize_plugin(&mut self) -> Result<(), RegistryError> {
        for node in plugin_nodes() {
            self.deregister(node.type_id())?;
        }
        Ok(())
    }

    /// Looks a node type up by id.
    pub fn by_id(&self, type_id: u32) -> Option<&NodeType> {
        self.by_id.get(&type_id)
    }

    /// Looks a node type up by name.
    pub fn by_name(&self, name: &str) -> Option<&NodeType> {
        self.by_name.get(name).and_then(|id| self.by_id.get(id))
    }

    /// Looks a node type up by name, or by id written as decimal or `0x` hex.
    pub fn lookup(&self, key: &str) -> Option<&NodeType> {
        self.by_name(key).or_else(|| {
            let id = key
                .strip_prefix("0x")
                .map_or_else(|| key.parse().ok(), |hex| u32::from_str_radix(hex, 16).ok())?;
            self.by_id(id)
        })
    }

    /// Registered node types sorted by id.
    pub fn iter(&self) -> impl Iterator<Item = &NodeType> {
        self.by_id.values()
    }

    /// Number of registered node types.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Static provider over the built-in node descriptors.
#[derive(Debug, Clone, Copy, Default)]
pub struct AngularRegistry;

impl RegistryProvider for AngularRegistry {
    fn info(&self) -> RegistryInfo {
        RegistryInfo {
            vendor: PLUGIN_VENDOR,
            version: PLUGIN_VERSION,
            required_api_version: REQUIRED_API_VERSION,
        }
    }

    fn node_by_id(&self, type_id: u32) -> Option<&'static NodeDef> {
        NODE_DEFS.iter().copied().find(|d| d.type_id == type_id)
    }

    fn node_by_name(&self, name: &str) -> Option<&'static NodeDef> {
        NODE_DEFS.iter().copied().find(|d| d.name == name)
    }

    fn all_nodes(&self) -> &'static [&'static NodeDef] {
        &NODE_DEFS
    }
}
