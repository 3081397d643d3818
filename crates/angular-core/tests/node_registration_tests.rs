// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

use angular_core::nodes::{binary, clamp, plugin_nodes, soft_clamp};
use angular_core::registry_api::{AttrKind, RegistryProvider};
use angular_core::{AngularRegistry, NodeRegistry, NodeType, RegistryError};

#[test]
fn plugin_registers_six_nodes() {
    let registry = NodeRegistry::with_plugin().unwrap();
    assert_eq!(registry.len(), 6);
    let ids: Vec<u32> = registry.iter().map(NodeType::type_id).collect();
    assert_eq!(
        ids,
        [0x0012_6b12, 0x0012_6b13, 0x0012_6b14, 0x0012_6b15, 0x0012_6b16, 0x0012_6b17]
    );
}

#[test]
fn duplicate_name_is_rejected() {
    let mut registry = NodeRegistry::new();
    registry.register(clamp::node_type()).unwrap();
    let err = registry.register(clamp::node_type()).unwrap_err();
    assert_eq!(err, RegistryError::DuplicateName("clampAngle"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn duplicate_id_is_rejected() {
    static IMPOSTOR: angular_core::registry_api::NodeDef = angular_core::registry_api::NodeDef {
        name: "impostor",
        type_id: binary::NODE_ID,
        attrs: &[],
        affects: &[],
    };

    let mut registry = NodeRegistry::new();
    registry.register(binary::node_type()).unwrap();
    let impostor = NodeType {
        def: &IMPOSTOR,
        ..binary::node_type()
    };
    assert_eq!(
        registry.register(impostor),
        Err(RegistryError::DuplicateId(binary::NODE_ID))
    );
    assert!(registry.by_name("impostor").is_none());
}

#[test]
fn uninitialize_removes_everything() {
    let mut registry = NodeRegistry::with_plugin().unwrap();
    registry.uninitialize_plugin().unwrap();
    assert!(registry.is_empty());
    assert!(registry.by_name("angleUnaryOp").is_none());

    assert_eq!(
        registry.deregister(soft_clamp::NODE_ID).unwrap_err(),
        RegistryError::UnknownId(soft_clamp::NODE_ID)
    );
    assert!(registry.uninitialize_plugin().is_err());
}

#[test]
fn reinitialize_after_uninitialize() {
    let mut registry = NodeRegistry::with_plugin().unwrap();
    registry.uninitialize_plugin().unwrap();
    registry.initialize_plugin().unwrap();
    assert_eq!(registry.len(), plugin_nodes().len());
    assert!(registry.initialize_plugin().is_err());
}

#[test]
fn deregister_returns_the_node() {
    let mut registry = NodeRegistry::with_plugin().unwrap();
    let node = registry.deregister(clamp::NODE_ID).unwrap();
    assert_eq!(node.name(), "clampAngle");
    assert!(registry.lookup("clampAngle").is_none());
    assert_eq!(registry.len(), 5);
}

#[test]
fn provider_describes_attributes() {
    let provider = AngularRegistry;
    let def = provider.node_by_name("softClampAngle").unwrap();
    assert_eq!(def.type_id, 0x0012_6b17);

    let names: Vec<_> = def.inputs().map(|a| a.name).collect();
    assert_eq!(names, ["input", "min", "minSoft", "max", "maxSoft"]);
    assert_eq!(def.attr("mxs").map(|a| a.kind), Some(AttrKind::Double));

    let multi = provider.node_by_id(0x0012_6b13).unwrap();
    assert_eq!(multi.name, "angleMultiOp");
    assert!(multi.attr("input").is_some_and(|a| a.array));

    assert!(provider.node_by_id(0x0012_6b18).is_none());
    assert!(provider.node_by_name("angleModuloOp").is_none());
}

#[test]
fn clamp_defaults_span_a_right_angle() {
    let def = AngularRegistry.node_by_name("clampAngle").unwrap();
    let max = def.attr("max").unwrap();
    assert_eq!(
        max.default,
        angular_core::registry_api::AttrDefault::Number(90.0)
    );
}
