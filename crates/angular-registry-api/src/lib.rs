// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Minimal, generic descriptor interface for angular operator nodes.
//!
//! A graph host links against this crate to discover which node types exist,
//! which attributes they expose and which inputs dirty which outputs. The
//! descriptors are plain `'static` data; evaluation lives in `angular-core`.
#![cfg_attr(not(feature = "std"), no_std)]

/// Registry identity reported to the host at plugin load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryInfo {
    /// Plugin vendor string.
    pub vendor: &'static str,
    /// Plugin version (semver).
    pub version: &'static str,
    /// Minimum host API version the plugin requires ("Any" when unconstrained).
    pub required_api_version: &'static str,
}

/// Value kind stored by an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    /// Angle in the host's internal unit; node math sees degrees.
    Angle,
    /// Plain double-precision number.
    Double,
    /// Enumerated selector backed by a host `short`.
    Enum(&'static [EnumField]),
}

impl AttrKind {
    /// Short human-readable kind name for listings.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Angle => "angle",
            Self::Double => "double",
            Self::Enum(_) => "enum",
        }
    }
}

/// One labelled value of an enum attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumField {
    /// Label shown in the host UI.
    pub label: &'static str,
    /// Selector stored in the attribute.
    pub value: i16,
}

/// Whether an attribute is written by the user or produced by compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrRole {
    /// Keyable, storable, writable input.
    Input,
    /// Computed, non-storable output.
    Output,
}

/// Default value of an attribute, in the units node math uses (degrees for angles).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttrDefault {
    /// Number default (angle in degrees or plain double).
    Number(f64),
    /// Enum selector default.
    Selector(i16),
    /// Array attributes start empty.
    Empty,
}

/// Attribute descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttrDef {
    /// Long attribute name (e.g. `"input1"`).
    pub name: &'static str,
    /// Short attribute name (e.g. `"i1"`).
    pub short_name: &'static str,
    /// Stored value kind.
    pub kind: AttrKind,
    /// Input or output.
    pub role: AttrRole,
    /// Whether the attribute is a multi/array plug.
    pub array: bool,
    /// Value used when the attribute was never set.
    pub default: AttrDefault,
}

impl AttrDef {
    /// Returns `true` for input attributes.
    pub fn is_input(&self) -> bool {
        self.role == AttrRole::Input
    }

    /// Returns the enum fields for enum attributes, empty otherwise.
    pub fn enum_fields(&self) -> &'static [EnumField] {
        match self.kind {
            AttrKind::Enum(fields) => fields,
            AttrKind::Angle | AttrKind::Double => &[],
        }
    }
}

/// Declared dependency edge: changing `input` dirties `output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affects {
    /// Input attribute long name.
    pub input: &'static str,
    /// Output attribute long name.
    pub output: &'static str,
}

/// Descriptor for a single node type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeDef {
    /// Host-visible node type name.
    pub name: &'static str,
    /// Stable host type identifier.
    pub type_id: u32,
    /// Attribute descriptors in registration order.
    pub attrs: &'static [AttrDef],
    /// Input→output dependency edges.
    pub affects: &'static [Affects],
}

impl NodeDef {
    /// Look up an attribute by long or short name.
    pub fn attr(&self, name: &str) -> Option<&'static AttrDef> {
        let attrs: &'static [AttrDef] = self.attrs;
        attrs
            .iter()
            .find(|a| a.name == name || a.short_name == name)
    }

    /// Input attributes in registration order.
    pub fn inputs(&self) -> impl Iterator<Item = &'static AttrDef> {
        let attrs: &'static [AttrDef] = self.attrs;
        attrs.iter().filter(|a| a.is_input())
    }

    /// Output attributes in registration order.
    pub fn outputs(&self) -> impl Iterator<Item = &'static AttrDef> {
        let attrs: &'static [AttrDef] = self.attrs;
        attrs.iter().filter(|a| !a.is_input())
    }

    /// Outputs dirtied by a change to `input`.
    pub fn affected_by<'a>(&self, input: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        let affects: &'static [Affects] = self.affects;
        affects
            .iter()
            .filter(move |edge| edge.input == input)
            .map(|edge| edge.output)
    }
}

/// Application-supplied registry provider.
///
/// Implemented by the crate that owns the compute functions. The host uses it
/// to enumerate node types at plugin load and to validate type ids.
pub trait RegistryProvider: Sync {
    /// Return registry metadata (vendor, version, API requirement).
    fn info(&self) -> RegistryInfo;

    /// Look up a node type by its stable id.
    fn node_by_id(&self, type_id: u32) -> Option<&'static NodeDef>;

    /// Look up a node type by name.
    fn node_by_name(&self, name: &str) -> Option<&'static NodeDef>;

    /// Return all node types (sorted by `type_id` for deterministic iteration).
    fn all_nodes(&self) -> &'static [&'static NodeDef];
}
