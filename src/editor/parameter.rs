use crate::descriptor_range::{REGISTER_BOUNDS, REGISTER_SPACE_BOUNDS, format_register_space};
use crate::root_parameter::{
    CONSTANT_COUNT_BOUNDS, ParameterKind, RootDescriptor, RootParameter, RootParameterPayload,
    ShaderVisibility,
};
use crate::root_table_list::RootTableList;

use super::drag_u32;

const FIELD_WIDTH: f32 = 64.0;

/// Draws the grid row of the parameter bound to `slot`: slot, visibility, kind and payload
pub(super) fn parameter_row(
    ui: &mut egui::Ui,
    slot: usize,
    parameter: &mut RootParameter,
    tables: &RootTableList,
) {
    ui.label(slot.to_string());

    let mut visibility = parameter.visibility();
    egui::ComboBox::from_id_salt(("Visibility", slot))
        .width(FIELD_WIDTH * 1.5)
        .selected_text(visibility.label())
        .show_ui(ui, |ui| {
            for option in ShaderVisibility::ALL {
                ui.selectable_value(&mut visibility, option, option.label());
            }
        });
    parameter.set_visibility(visibility);

    let mut kind = parameter.kind();
    egui::ComboBox::from_id_salt(("Kind", slot))
        .width(FIELD_WIDTH * 2.0)
        .selected_text(kind.label())
        .show_ui(ui, |ui| {
            for option in ParameterKind::ALL {
                ui.selectable_value(&mut kind, option, option.label());
            }
        });
    parameter.set_kind(kind);

    ui.horizontal(|ui| {
        let payload = *parameter.payload();
        let result = match payload {
            RootParameterPayload::DescriptorTable { table } => {
                table_selection(ui, slot, parameter, table, tables)
            }
            RootParameterPayload::Constants(mut constants) => {
                let mut changed = drag_u32(
                    ui,
                    &mut constants.shader_register,
                    REGISTER_BOUNDS,
                    FIELD_WIDTH,
                    |n| format!("b{}", n),
                );
                changed |= drag_u32(
                    ui,
                    &mut constants.register_space,
                    REGISTER_SPACE_BOUNDS,
                    FIELD_WIDTH,
                    format_register_space,
                );
                changed |= drag_u32(
                    ui,
                    &mut constants.count,
                    CONSTANT_COUNT_BOUNDS,
                    FIELD_WIDTH,
                    |n| n.to_string(),
                );
                if changed {
                    parameter.set_constants(constants)
                } else {
                    Ok(())
                }
            }
            RootParameterPayload::Cbv(descriptor)
            | RootParameterPayload::Srv(descriptor)
            | RootParameterPayload::Uav(descriptor) => {
                root_descriptor(ui, parameter, descriptor)
            }
        };

        if let Err(error) = result {
            log::error!("Failed to edit root parameter {}: {}", slot, error);
        }
    });
}

fn table_selection(
    ui: &mut egui::Ui,
    slot: usize,
    parameter: &mut RootParameter,
    selected: Option<usize>,
    tables: &RootTableList,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut selection = selected;
    let preview = selection
        .and_then(|index| tables.get(index))
        .map_or("", |table| table.name());

    egui::ComboBox::from_id_salt(("Descriptor Table", slot))
        .width(FIELD_WIDTH * 2.0)
        .selected_text(preview)
        .show_ui(ui, |ui| {
            for (index, table) in tables.iter().enumerate() {
                ui.selectable_value(&mut selection, Some(index), table.name());
            }
        });

    if selection != selected {
        parameter.select_table(selection)?;
    }

    Ok(())
}

fn root_descriptor(
    ui: &mut egui::Ui,
    parameter: &mut RootParameter,
    mut descriptor: RootDescriptor,
) -> Result<(), Box<dyn std::error::Error>> {
    let prefix = parameter.kind().register_prefix().unwrap_or_default();

    let mut changed = drag_u32(
        ui,
        &mut descriptor.shader_register,
        REGISTER_BOUNDS,
        FIELD_WIDTH,
        |n| format!("{}{}", prefix, n),
    );
    changed |= drag_u32(
        ui,
        &mut descriptor.register_space,
        REGISTER_SPACE_BOUNDS,
        FIELD_WIDTH,
        format_register_space,
    );

    if changed {
        parameter.set_descriptor(descriptor)?;
    }

    Ok(())
}
