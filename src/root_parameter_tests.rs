use super::*;
use crate::root_table::RootTable;

#[test]
fn test_new_parameter_is_unbound_table() {
    let parameter = RootParameter::new();
    assert_eq!(parameter.visibility(), ShaderVisibility::All);
    assert_eq!(parameter.kind(), ParameterKind::DescriptorTable);
    assert_eq!(parameter.table(), None);
}

#[test]
fn test_switch_to_constants_starts_with_one_value() {
    let mut parameter = RootParameter::new();
    parameter.set_kind(ParameterKind::Constants);
    assert_eq!(
        parameter.payload(),
        &RootParameterPayload::Constants(RootConstants {
            shader_register: 0,
            register_space: 0,
            count: 1,
        })
    );
}

#[test]
fn test_table_to_cbv_and_back_resets_selection() {
    let mut parameter = RootParameter::new();
    parameter.select_table(Some(2)).unwrap();

    parameter.set_kind(ParameterKind::Cbv);
    assert_eq!(
        parameter.payload(),
        &RootParameterPayload::Cbv(RootDescriptor::default())
    );

    parameter.set_kind(ParameterKind::DescriptorTable);
    assert_eq!(
        parameter.payload(),
        &RootParameterPayload::DescriptorTable { table: None }
    );
}

#[test]
fn test_constants_to_srv_clears_registers() {
    let mut parameter = RootParameter::new();
    parameter.set_kind(ParameterKind::Constants);
    parameter
        .set_constants(RootConstants {
            shader_register: 4,
            register_space: 1,
            count: 16,
        })
        .unwrap();

    parameter.set_kind(ParameterKind::Srv);
    assert_eq!(
        parameter.payload(),
        &RootParameterPayload::Srv(RootDescriptor::default())
    );
}

#[test]
fn test_switch_between_root_descriptors_keeps_registers() {
    let mut parameter = RootParameter::new();
    parameter.set_kind(ParameterKind::Cbv);
    let descriptor = RootDescriptor {
        shader_register: 3,
        register_space: 2,
    };
    parameter.set_descriptor(descriptor).unwrap();

    parameter.set_kind(ParameterKind::Uav);
    assert_eq!(parameter.payload(), &RootParameterPayload::Uav(descriptor));
}

#[test]
fn test_setting_same_kind_keeps_payload() {
    let mut parameter = RootParameter::new();
    parameter.select_table(Some(0)).unwrap();
    parameter.set_kind(ParameterKind::DescriptorTable);
    assert_eq!(parameter.table(), Some(0));
}

#[test]
fn test_payload_setters_check_kind() {
    let mut parameter = RootParameter::new();
    assert!(parameter.set_constants(RootConstants::default()).is_err());
    assert!(parameter.set_descriptor(RootDescriptor::default()).is_err());

    parameter.set_kind(ParameterKind::Cbv);
    assert!(parameter.select_table(Some(0)).is_err());
}

#[test]
fn test_constants_are_clamped() {
    let mut parameter = RootParameter::new();
    parameter.set_kind(ParameterKind::Constants);
    parameter
        .set_constants(RootConstants {
            shader_register: 0,
            register_space: 0,
            count: 500,
        })
        .unwrap();
    assert_eq!(parameter.dword_cost(), 64);
}

#[test]
fn test_get_resolves_selected_table() {
    let mut tables = RootTableList::new(crate::root_table::DEFAULT_TABLE_NAME);
    tables.add(RootTable::new("Second"));
    tables.get_mut(1).unwrap().add_range();

    let mut parameter = RootParameter::new();
    parameter.set_visibility(ShaderVisibility::Pixel);
    parameter.select_table(Some(1)).unwrap();

    let d3d12_parameter = parameter.get(&tables);
    assert_eq!(
        d3d12_parameter.ParameterType,
        D3D12_ROOT_PARAMETER_TYPE_DESCRIPTOR_TABLE
    );
    assert_eq!(d3d12_parameter.ShaderVisibility, D3D12_SHADER_VISIBILITY_PIXEL);
    let descriptor_table = unsafe { d3d12_parameter.Anonymous.DescriptorTable };
    assert_eq!(descriptor_table.NumDescriptorRanges, 2);
    assert_eq!(
        descriptor_table.pDescriptorRanges,
        tables.get(1).unwrap().get().pDescriptorRanges
    );
}

#[test]
fn test_get_with_unresolved_table_is_empty() {
    let tables = RootTableList::new(crate::root_table::DEFAULT_TABLE_NAME);
    let mut parameter = RootParameter::new();
    parameter.select_table(Some(7)).unwrap();

    let descriptor_table = unsafe { parameter.get(&tables).Anonymous.DescriptorTable };
    assert_eq!(descriptor_table.NumDescriptorRanges, 0);
    assert!(descriptor_table.pDescriptorRanges.is_null());
}

#[test]
fn test_get_writes_constants() {
    let tables = RootTableList::new(crate::root_table::DEFAULT_TABLE_NAME);
    let mut parameter = RootParameter::new();
    parameter.set_kind(ParameterKind::Constants);
    parameter
        .set_constants(RootConstants {
            shader_register: 1,
            register_space: 2,
            count: 4,
        })
        .unwrap();

    let d3d12_parameter = parameter.get(&tables);
    assert_eq!(
        d3d12_parameter.ParameterType,
        D3D12_ROOT_PARAMETER_TYPE_32BIT_CONSTANTS
    );
    let constants = unsafe { d3d12_parameter.Anonymous.Constants };
    assert_eq!(constants.ShaderRegister, 1);
    assert_eq!(constants.RegisterSpace, 2);
    assert_eq!(constants.Num32BitValues, 4);
}

#[test]
fn test_repeated_setters_keep_parameter() {
    let mut parameter = RootParameter::new();
    parameter.set_visibility(ShaderVisibility::Pixel);
    parameter.select_table(Some(1)).unwrap();
    let edited = parameter;

    parameter.set_visibility(ShaderVisibility::Pixel);
    parameter.select_table(Some(1)).unwrap();
    parameter.set_kind(ParameterKind::DescriptorTable);
    assert_eq!(parameter, edited);

    parameter.set_kind(ParameterKind::Uav);
    let descriptor = RootDescriptor {
        shader_register: 3,
        register_space: 1,
    };
    parameter.set_descriptor(descriptor).unwrap();
    parameter.set_descriptor(descriptor).unwrap();
    assert_eq!(parameter.payload(), &RootParameterPayload::Uav(descriptor));
}
