use crate::root_parameter_list::RootParameterList;
use crate::root_table_list::RootTableList;

use super::parameter::parameter_row;

const COLUMN_NAMES: [&str; 4] = ["#", "Visibility", "Type", "Value"];

pub(super) fn update(ui: &mut egui::Ui, parameters: &mut RootParameterList, tables: &RootTableList) {
    egui::menu::bar(ui, |ui| {
        if ui.button("New Parameter").clicked() {
            parameters.add_new();
        }
    });

    egui::ScrollArea::vertical()
        .id_salt("Root Parameter List")
        .show(ui, |ui| {
            egui::Grid::new("Root Parameters")
                .num_columns(COLUMN_NAMES.len())
                .striped(true)
                .show(ui, |ui| {
                    for name in COLUMN_NAMES {
                        ui.strong(name);
                    }
                    ui.end_row();

                    for (slot, parameter) in parameters.iter_mut().enumerate() {
                        parameter_row(ui, slot, parameter, tables);
                        ui.end_row();
                    }
                });
        });
}
