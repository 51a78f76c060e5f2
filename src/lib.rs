pub mod config;
pub mod descriptor_range;
pub mod editor;
pub mod logger;
pub mod root_parameter;
pub mod root_parameter_list;
pub mod root_signature;
pub mod root_table;
pub mod root_table_list;

pub use config::{EditorConfig, LogConfig};
pub use editor::{DirectX12Editor, RootSignatureEditor};
pub use root_signature::{RootSignature, RootSignatureDesc};

/// Anything that records its UI once per frame.
/// The host owns the egui context and the render loop and calls `record_ui` for every frame.
pub trait App {
    fn record_ui(&mut self, ctx: &egui::Context);
}
