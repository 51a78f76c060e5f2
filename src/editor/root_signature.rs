use windows::Win32::Graphics::Direct3D12::D3D12_ROOT_SIGNATURE_FLAG_ALLOW_INPUT_ASSEMBLER_INPUT_LAYOUT;

use crate::config::EditorConfig;
use crate::root_signature::{MAX_ROOT_SIGNATURE_DWORDS, RootSignature, RootSignatureDesc};

use super::parameter_list;
use super::table_list::TableListEditor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Parameters,
    Tables,
}

/// Root signature being edited, together with the state of its tabbed view
pub struct RootSignatureEditor {
    signature: RootSignature,
    tab: Tab,
    table_list: TableListEditor,
}

impl RootSignatureEditor {
    pub fn new(config: &EditorConfig) -> Self {
        RootSignatureEditor {
            signature: RootSignature::from_config(config),
            tab: Tab::default(),
            table_list: TableListEditor::default(),
        }
    }

    pub fn signature(&self) -> &RootSignature {
        &self.signature
    }

    pub fn signature_mut(&mut self) -> &mut RootSignature {
        &mut self.signature
    }

    /// The current root signature with every table reference resolved
    pub fn get(&self) -> RootSignatureDesc<'_> {
        self.signature.get()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn update(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.tab, Tab::Parameters, "Root Parameters");
            ui.selectable_value(&mut self.tab, Tab::Tables, "Root Descriptor Tables");
        });

        ui.horizontal(|ui| {
            let cost = self.signature.dword_cost();
            let text = format!("{} / {} DWORDs", cost, MAX_ROOT_SIGNATURE_DWORDS);
            if cost > MAX_ROOT_SIGNATURE_DWORDS {
                let color = ui.visuals().error_fg_color;
                ui.colored_label(color, text);
            } else {
                ui.label(text);
            }

            let flag = D3D12_ROOT_SIGNATURE_FLAG_ALLOW_INPUT_ASSEMBLER_INPUT_LAYOUT;
            let mut allow_input_layout = self.signature.has_flag(flag);
            if ui
                .checkbox(&mut allow_input_layout, "Allow input assembler input layout")
                .changed()
            {
                self.signature.set_flag(flag, allow_input_layout);
            }
        });

        ui.separator();

        match self.tab {
            Tab::Parameters => {
                let (parameters, tables) = self.signature.split_mut();
                parameter_list::update(ui, parameters, tables);
            }
            Tab::Tables => self.table_list.update(ui, self.signature.tables_mut()),
        }
    }

    #[cfg(test)]
    pub(super) fn table_editor_count(&self) -> usize {
        self.table_list.editor_count()
    }

    pub fn finalize(&mut self) {
        self.signature.finalize();
    }
}
