use windows::Win32::Graphics::Direct3D12::*;

use crate::descriptor_range::{DescriptorRange, OFFSET_APPEND};

pub const DEFAULT_TABLE_NAME: &str = "Table";

/// A named descriptor table. It always holds at least one range.
#[derive(Debug, Clone, PartialEq)]
pub struct RootTable {
    name: String,
    ranges: Vec<DescriptorRange>,
}

impl RootTable {
    pub fn new(name: &str) -> Self {
        let name = if name.is_empty() {
            DEFAULT_TABLE_NAME
        } else {
            name
        };

        RootTable {
            name: name.to_owned(),
            ranges: vec![DescriptorRange::new()],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Empty names are rejected, in which case `false` is returned and the old name stays
    pub fn rename(&mut self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        if self.name != name {
            log::debug!("Renamed table \"{}\" to \"{}\"", self.name, name);
            self.name = name.to_owned();
        }
        true
    }

    /// Appends a range with one descriptor right after the previous range and returns its index
    pub fn add_range(&mut self) -> usize {
        self.ranges.push(DescriptorRange::new());
        log::debug!(
            "Added range {} to table \"{}\"",
            self.ranges.len() - 1,
            self.name
        );
        self.ranges.len() - 1
    }

    pub fn ranges(&self) -> &[DescriptorRange] {
        &self.ranges
    }

    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    /// Edits the range at `index` in place.
    /// The first range's offset is always computed by Direct3D, so any offset written to it is discarded.
    pub fn update_range<R>(
        &mut self,
        index: usize,
        edit: impl FnOnce(&mut DescriptorRange) -> R,
    ) -> Result<R, Box<dyn std::error::Error>> {
        let range_count = self.ranges.len();
        let range = self.ranges.get_mut(index).ok_or_else(|| {
            format!(
                "Table \"{}\" has no range {} (range count {})",
                self.name, index, range_count
            )
        })?;

        let result = edit(range);
        if index == 0 {
            range.set_offset(OFFSET_APPEND);
        }

        Ok(result)
    }

    /// The table as Direct3D 12 sees it. The returned struct points into this table's range storage,
    /// so it is only valid until the next mutation of this table.
    pub fn get(&self) -> D3D12_ROOT_DESCRIPTOR_TABLE {
        D3D12_ROOT_DESCRIPTOR_TABLE {
            NumDescriptorRanges: self.ranges.len() as u32,
            pDescriptorRanges: self.ranges.as_ptr() as *const D3D12_DESCRIPTOR_RANGE,
        }
    }
}

impl Default for RootTable {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_NAME)
    }
}

/// Focus state of a rename field in the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameFocus {
    Editing,
    LostFocus,
    Idle,
}

/// Text buffer behind a table's rename field.
/// Edits only reach the table on the frame the field loses focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameBuffer {
    text: String,
}

impl RenameBuffer {
    pub fn new(table: &RootTable) -> Self {
        RenameBuffer {
            text: table.name().to_owned(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Runs once per frame after the rename field was drawn.
    /// While idle the buffer follows the table's name. Returns true if the table's name changed.
    pub fn sync(&mut self, table: &mut RootTable, focus: RenameFocus) -> bool {
        match focus {
            RenameFocus::Editing => false,
            RenameFocus::LostFocus if self.text != table.name() => {
                if table.rename(&self.text) {
                    true
                } else {
                    self.text = table.name().to_owned();
                    false
                }
            }
            RenameFocus::LostFocus | RenameFocus::Idle => {
                if self.text != table.name() {
                    self.text = table.name().to_owned();
                }
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "root_table_tests.rs"]
mod tests;
