use std::path::PathBuf;

use windows::Win32::Graphics::Direct3D12::*;

use crate::root_table::DEFAULT_TABLE_NAME;

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory the log files are written to, created on demand
    pub directory: PathBuf,
    /// Appended to the timestamp in the log file name
    pub title: String,
    /// Overridden by `RUST_LOG` if it is set
    pub level: log::LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            directory: PathBuf::from("Logs"),
            title: "Default".to_owned(),
            level: if cfg!(debug_assertions) {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Width of the editor panel relative to the viewport. The panel is anchored to the right edge.
    pub panel_width_fraction: f32,
    /// Name given to newly created descriptor tables
    pub default_table_name: String,
    /// Flags of a freshly created root signature
    pub root_signature_flags: D3D12_ROOT_SIGNATURE_FLAGS,
    pub log: LogConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            panel_width_fraction: 0.3125,
            default_table_name: DEFAULT_TABLE_NAME.to_owned(),
            root_signature_flags: D3D12_ROOT_SIGNATURE_FLAG_ALLOW_INPUT_ASSEMBLER_INPUT_LAYOUT,
            log: LogConfig::default(),
        }
    }
}
