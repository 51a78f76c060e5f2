use crate::root_table_list::RootTableList;

use super::table::{TableColumns, TableEditor};

#[derive(Default)]
pub(super) struct TableListEditor {
    columns: TableColumns,
    tables: Vec<TableEditor>,
}

impl TableListEditor {
    pub fn update(&mut self, ui: &mut egui::Ui, tables: &mut RootTableList) {
        egui::menu::bar(ui, |ui| {
            if ui.button("New Table").clicked() {
                tables.add_new();
            }
        });

        self.sync(tables);

        self.columns.header(ui);
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("Root Descriptor Tables")
            .show(ui, |ui| {
                for (index, (editor, table)) in
                    self.tables.iter_mut().zip(tables.iter_mut()).enumerate()
                {
                    ui.add_space(4.0);
                    editor.update(ui, index, table, &self.columns);
                }
            });
    }

    /// Tables are only ever appended, so editors are matched to tables by index
    fn sync(&mut self, tables: &RootTableList) {
        self.tables.truncate(tables.len());
        let known = self.tables.len();
        self.tables
            .extend(tables.iter().skip(known).map(TableEditor::new));
    }

    #[cfg(test)]
    pub fn editor_count(&self) -> usize {
        self.tables.len()
    }
}
