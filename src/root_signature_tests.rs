use super::*;
use crate::root_parameter::{ParameterKind, RootConstants, RootDescriptor};

#[test]
fn test_default_signature_exports_one_unbound_table() {
    let signature = RootSignature::default();
    let desc = signature.get();

    assert_eq!(desc.parameters().len(), 1);
    assert_eq!(desc.table_ranges(0).map(<[_]>::len), Some(0));
    assert_eq!(
        desc.flags(),
        D3D12_ROOT_SIGNATURE_FLAG_ALLOW_INPUT_ASSEMBLER_INPUT_LAYOUT
    );
}

#[test]
fn test_parameter_count_follows_additions() {
    let mut signature = RootSignature::default();
    for _ in 0..4 {
        signature.parameters_mut().add_new();
    }

    let desc = signature.get();
    assert_eq!(desc.parameters().len(), 5);
    assert_eq!(desc.desc().NumParameters, 5);
    assert_eq!(desc.desc().pParameters, desc.parameters().as_ptr());
}

#[test]
fn test_export_keeps_slot_order() {
    let mut signature = RootSignature::default();
    let constants_slot = signature.parameters_mut().add_new();
    let cbv_slot = signature.parameters_mut().add_new();
    signature
        .parameters_mut()
        .get_mut(constants_slot)
        .unwrap()
        .set_kind(ParameterKind::Constants);
    signature
        .parameters_mut()
        .get_mut(cbv_slot)
        .unwrap()
        .set_kind(ParameterKind::Cbv);

    let types: Vec<D3D12_ROOT_PARAMETER_TYPE> = signature
        .get()
        .parameters()
        .iter()
        .map(|parameter| parameter.ParameterType)
        .collect();
    assert_eq!(
        types,
        [
            D3D12_ROOT_PARAMETER_TYPE_DESCRIPTOR_TABLE,
            D3D12_ROOT_PARAMETER_TYPE_32BIT_CONSTANTS,
            D3D12_ROOT_PARAMETER_TYPE_CBV,
        ]
    );
}

#[test]
fn test_reselected_table_is_resolved_on_export() {
    let mut signature = RootSignature::default();
    signature.select_table(0, 0).unwrap();
    assert_eq!(signature.get().table_ranges(0).unwrap().len(), 1);

    let second = signature.tables_mut().add_new();
    let table = signature.tables_mut().get_mut(second).unwrap();
    table.add_range();
    table.add_range();
    table
        .update_range(2, |range| range.set_descriptor_count(9))
        .unwrap();
    signature.select_table(0, second).unwrap();

    let desc = signature.get();
    let ranges = desc.table_ranges(0).unwrap();
    assert_eq!(ranges.len(), 3);
    assert_eq!(ranges[2].NumDescriptors, 9);
    assert_eq!(
        ranges.as_ptr(),
        signature.tables().get(second).unwrap().get().pDescriptorRanges
    );
}

#[test]
fn test_export_sees_ranges_added_after_binding() {
    let mut signature = RootSignature::default();
    signature.select_table(0, 0).unwrap();
    for _ in 0..16 {
        signature.tables_mut().get_mut(0).unwrap().add_range();
    }

    let desc = signature.get();
    assert_eq!(desc.table_ranges(0).unwrap().len(), 17);
}

#[test]
fn test_select_table_checks_indices() {
    let mut signature = RootSignature::default();
    assert!(signature.select_table(0, 1).is_err());
    assert!(signature.select_table(3, 0).is_err());

    signature
        .parameters_mut()
        .get_mut(0)
        .unwrap()
        .set_kind(ParameterKind::Srv);
    assert!(signature.select_table(0, 0).is_err());
}

#[test]
fn test_non_table_parameters_have_no_ranges() {
    let mut signature = RootSignature::default();
    let parameter = signature.parameters_mut().get_mut(0).unwrap();
    parameter.set_kind(ParameterKind::Uav);
    parameter
        .set_descriptor(RootDescriptor {
            shader_register: 5,
            register_space: 1,
        })
        .unwrap();

    let desc = signature.get();
    assert!(desc.table_ranges(0).is_none());
    let descriptor = unsafe { desc.parameters()[0].Anonymous.Descriptor };
    assert_eq!(descriptor.ShaderRegister, 5);
    assert_eq!(descriptor.RegisterSpace, 1);
}

#[test]
fn test_dword_cost() {
    let mut signature = RootSignature::default();
    let constants_slot = signature.parameters_mut().add_new();
    let srv_slot = signature.parameters_mut().add_new();

    let constants = signature.parameters_mut().get_mut(constants_slot).unwrap();
    constants.set_kind(ParameterKind::Constants);
    constants
        .set_constants(RootConstants {
            shader_register: 0,
            register_space: 0,
            count: 8,
        })
        .unwrap();
    signature
        .parameters_mut()
        .get_mut(srv_slot)
        .unwrap()
        .set_kind(ParameterKind::Srv);

    assert_eq!(signature.dword_cost(), 1 + 8 + 2);
}

#[test]
fn test_flags_toggle() {
    let mut signature = RootSignature::default();
    let flag = D3D12_ROOT_SIGNATURE_FLAG_ALLOW_INPUT_ASSEMBLER_INPUT_LAYOUT;
    assert!(signature.has_flag(flag));

    signature.set_flag(flag, false);
    assert!(!signature.has_flag(flag));
    assert_eq!(signature.flags(), D3D12_ROOT_SIGNATURE_FLAG_NONE);

    signature.set_flag(flag, true);
    assert!(signature.has_flag(flag));
}

#[test]
fn test_finalize_twice_is_a_no_op() {
    let mut signature = RootSignature::default();
    signature.finalize();
    signature.finalize();

    assert!(signature.parameters().is_empty());
    assert!(signature.tables().is_empty());
    assert!(signature.get().parameters().is_empty());
}
