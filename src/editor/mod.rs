mod parameter;
mod parameter_list;
mod range;
mod root_signature;
mod table;
mod table_list;

use std::ops::RangeInclusive;

pub use root_signature::{RootSignatureEditor, Tab};

use crate::App;
use crate::config::EditorConfig;

/// Drag speed of every numeric field, in units per pixel
const DRAG_SPEED: f64 = 0.0625;

/// The "DX12" editor panel. The host calls `record_ui` once per frame between
/// `initialize` and `finalize`.
pub struct DirectX12Editor {
    config: EditorConfig,
    root_signature: Option<RootSignatureEditor>,
}

impl DirectX12Editor {
    pub fn new(config: EditorConfig) -> Self {
        DirectX12Editor {
            config,
            root_signature: None,
        }
    }

    /// Creates the editor state. Does nothing if it already exists.
    pub fn initialize(&mut self) {
        if self.root_signature.is_some() {
            return;
        }
        self.root_signature = Some(RootSignatureEditor::new(&self.config));
        log::info!("DX12 editor initialized");
    }

    /// Releases the editor state. Does nothing if it was already released.
    pub fn finalize(&mut self) {
        if let Some(mut root_signature) = self.root_signature.take() {
            root_signature.finalize();
            log::info!("DX12 editor finalized");
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.root_signature.is_some()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn root_signature(&self) -> Option<&RootSignatureEditor> {
        self.root_signature.as_ref()
    }

    pub fn root_signature_mut(&mut self) -> Option<&mut RootSignatureEditor> {
        self.root_signature.as_mut()
    }

    pub fn update(&mut self, ctx: &egui::Context) {
        let Some(root_signature) = self.root_signature.as_mut() else {
            return;
        };

        let width = ctx.screen_rect().width() * self.config.panel_width_fraction;
        egui::SidePanel::right("DX12")
            .resizable(false)
            .exact_width(width)
            .show(ctx, |ui| {
                ui.heading("Root Signature");
                ui.separator();
                root_signature.update(ui);
            });
    }
}

impl App for DirectX12Editor {
    fn record_ui(&mut self, ctx: &egui::Context) {
        self.update(ctx);
    }
}

impl Drop for DirectX12Editor {
    fn drop(&mut self) {
        self.finalize();
    }
}

/// Bounded `u32` field drawn with `format`, which also accepts the formatted text back,
/// e.g. `t4` for a register. Returns true if the value changed.
fn drag_u32(
    ui: &mut egui::Ui,
    value: &mut u32,
    bounds: RangeInclusive<u32>,
    width: f32,
    format: impl Fn(u32) -> String,
) -> bool {
    let drag_value = egui::DragValue::new(value)
        .speed(DRAG_SPEED)
        .range(bounds)
        .custom_formatter(move |number, _| format(number as u32))
        .custom_parser(parse_formatted_number);

    ui.add_sized([width, ui.spacing().interact_size.y], drag_value)
        .changed()
}

/// Strips a register style prefix like `t`, `b` or `space` before parsing
fn parse_formatted_number(text: &str) -> Option<f64> {
    text.trim()
        .trim_start_matches(|c: char| c.is_ascii_alphabetic())
        .parse::<f64>()
        .ok()
}

#[cfg(test)]
#[path = "editor_tests.rs"]
mod tests;
