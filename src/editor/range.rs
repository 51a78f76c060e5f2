use crate::descriptor_range::{
    DESCRIPTOR_COUNT_BOUNDS, DescriptorRange, OFFSET_BOUNDS, REGISTER_BOUNDS,
    REGISTER_SPACE_BOUNDS, RangeType, format_register, format_register_space,
};

use super::{DRAG_SPEED, drag_u32, parse_formatted_number};

/// Draws one range as a row of five fields with the given column widths.
/// The offset of the first range of a table is computed by Direct3D, so it is shown but cannot be edited.
pub(super) fn range_row(
    ui: &mut egui::Ui,
    range: &mut DescriptorRange,
    is_first: bool,
    widths: &[f32; 5],
) {
    ui.horizontal(|ui| {
        let mut range_type = range.range_type();
        egui::ComboBox::from_id_salt("Type")
            .width(widths[0])
            .selected_text(range_type.map_or("", RangeType::label))
            .show_ui(ui, |ui| {
                for option in RangeType::ALL {
                    ui.selectable_value(&mut range_type, Some(option), option.label());
                }
            });
        if let Some(selected) = range_type {
            if range.range_type() != Some(selected) {
                range.set_range_type(selected);
            }
        }

        let mut count = range.descriptor_count();
        if drag_u32(ui, &mut count, DESCRIPTOR_COUNT_BOUNDS, widths[1], |n| {
            n.to_string()
        }) {
            range.set_descriptor_count(count);
        }

        let mut register = range.base_shader_register();
        if drag_u32(ui, &mut register, REGISTER_BOUNDS, widths[2], |n| {
            format_register(range_type, n)
        }) {
            range.set_base_shader_register(register);
        }

        let mut space = range.register_space();
        if drag_u32(ui, &mut space, REGISTER_SPACE_BOUNDS, widths[3], format_register_space) {
            range.set_register_space(space);
        }

        let mut offset = range.offset();
        let offset_changed = ui
            .add_enabled_ui(!is_first, |ui| {
                ui.add_sized(
                    [widths[4], ui.spacing().interact_size.y],
                    egui::DragValue::new(&mut offset)
                        .speed(DRAG_SPEED)
                        .range(OFFSET_BOUNDS)
                        .custom_parser(parse_formatted_number),
                )
                .changed()
            })
            .inner;
        if offset_changed && !is_first {
            range.set_offset(offset);
        }
    });
}
