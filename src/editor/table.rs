use egui::collapsing_header::CollapsingState;

use crate::root_table::{RenameBuffer, RenameFocus, RootTable};

use super::range::range_row;

pub(super) const COLUMN_COUNT: usize = 5;

const COLUMN_NAMES: [&str; COLUMN_COUNT] =
    ["Type", "Size", "Base Register", "Register Space", "Offset"];

const COLUMN_TOOLTIPS: [&str; COLUMN_COUNT] = [
    "Descriptor type of the range",
    "Number of descriptors in the range",
    "First shader register the range binds to",
    "Register space of the range",
    "Offset in descriptors from the table start, -1 appends to the previous range",
];

/// Column widths shared by the table list header and the range rows of every table
#[derive(Debug, Clone, PartialEq)]
pub(super) struct TableColumns {
    proportional_widths: [f32; COLUMN_COUNT],
}

impl Default for TableColumns {
    fn default() -> Self {
        TableColumns {
            proportional_widths: [1.0, 1.0, 1.25, 1.25, 1.0],
        }
    }
}

impl TableColumns {
    pub fn widths(&self, ui: &egui::Ui) -> [f32; COLUMN_COUNT] {
        let spacing = ui.spacing().item_spacing.x * (COLUMN_COUNT - 1) as f32;
        let available = (ui.available_width() - spacing).max(0.0);
        let total: f32 = self.proportional_widths.iter().sum();
        self.proportional_widths
            .map(|proportion| available * proportion / total)
    }

    pub fn header(&self, ui: &mut egui::Ui) {
        let widths = self.widths(ui);
        ui.horizontal(|ui| {
            for ((name, tooltip), width) in COLUMN_NAMES.iter().zip(COLUMN_TOOLTIPS).zip(widths) {
                ui.add_sized(
                    [width, ui.spacing().interact_size.y],
                    egui::Label::new(egui::RichText::new(*name).strong()),
                )
                .on_hover_text(tooltip);
            }
        });
    }
}

/// Presentation state of one table: only the pending rename text
pub(super) struct TableEditor {
    rename: RenameBuffer,
}

impl TableEditor {
    pub fn new(table: &RootTable) -> Self {
        TableEditor {
            rename: RenameBuffer::new(table),
        }
    }

    pub fn update(
        &mut self,
        ui: &mut egui::Ui,
        index: usize,
        table: &mut RootTable,
        columns: &TableColumns,
    ) {
        let id = ui.make_persistent_id(("Root Table", index));

        CollapsingState::load_with_default_open(ui.ctx(), id, true)
            .show_header(ui, |ui| {
                let rename_width = ui.available_width() * 0.5;
                let response = ui.add(
                    egui::TextEdit::singleline(self.rename.text_mut()).desired_width(rename_width),
                );
                let focus = if response.lost_focus() {
                    RenameFocus::LostFocus
                } else if response.has_focus() {
                    RenameFocus::Editing
                } else {
                    RenameFocus::Idle
                };
                self.rename.sync(table, focus);

                if ui.button("New Range").clicked() {
                    table.add_range();
                }
            })
            .body(|ui| {
                let widths = columns.widths(ui);
                for range_index in 0..table.range_count() {
                    ui.push_id(range_index, |ui| {
                        let result = table.update_range(range_index, |range| {
                            range_row(ui, range, range_index == 0, &widths)
                        });
                        if let Err(error) = result {
                            log::error!("{}", error);
                        }
                    });
                }
            });
    }
}
