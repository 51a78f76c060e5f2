use std::marker::PhantomData;

use windows::Win32::Graphics::Direct3D12::*;

use crate::config::EditorConfig;
use crate::root_parameter_list::RootParameterList;
use crate::root_table::DEFAULT_TABLE_NAME;
use crate::root_table_list::RootTableList;

/// Root parameters share 64 DWORDs.
/// Tables cost 1 DWORD, root constants 1 DWORD per value and root descriptors 2 DWORDs.
pub const MAX_ROOT_SIGNATURE_DWORDS: u32 = 64;

#[derive(Debug, Clone, PartialEq)]
pub struct RootSignature {
    parameters: RootParameterList,
    tables: RootTableList,
    flags: D3D12_ROOT_SIGNATURE_FLAGS,
}

impl RootSignature {
    /// One unbound descriptor table parameter and one default table
    pub fn new(default_table_name: &str, flags: D3D12_ROOT_SIGNATURE_FLAGS) -> Self {
        RootSignature {
            parameters: RootParameterList::new(),
            tables: RootTableList::new(default_table_name),
            flags,
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(&config.default_table_name, config.root_signature_flags)
    }

    pub fn parameters(&self) -> &RootParameterList {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut RootParameterList {
        &mut self.parameters
    }

    pub fn tables(&self) -> &RootTableList {
        &self.tables
    }

    pub fn tables_mut(&mut self) -> &mut RootTableList {
        &mut self.tables
    }

    /// Parameters can be edited while the table list is read, e.g. to show table names
    pub fn split_mut(&mut self) -> (&mut RootParameterList, &RootTableList) {
        (&mut self.parameters, &self.tables)
    }

    pub fn flags(&self) -> D3D12_ROOT_SIGNATURE_FLAGS {
        self.flags
    }

    pub fn set_flags(&mut self, flags: D3D12_ROOT_SIGNATURE_FLAGS) {
        self.flags = flags;
    }

    pub fn has_flag(&self, flag: D3D12_ROOT_SIGNATURE_FLAGS) -> bool {
        (self.flags.0 & flag.0) == flag.0
    }

    pub fn set_flag(&mut self, flag: D3D12_ROOT_SIGNATURE_FLAGS, enabled: bool) {
        self.flags = if enabled {
            D3D12_ROOT_SIGNATURE_FLAGS(self.flags.0 | flag.0)
        } else {
            D3D12_ROOT_SIGNATURE_FLAGS(self.flags.0 & !flag.0)
        };
    }

    /// Binds the descriptor table parameter in `slot` to the table at index `table`
    pub fn select_table(
        &mut self,
        slot: usize,
        table: usize,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if self.tables.get(table).is_none() {
            return Err(format!(
                "There is no table {} to bind, the root signature has {} tables",
                table,
                self.tables.len()
            )
            .into());
        }

        let parameter = self
            .parameters
            .get_mut(slot)
            .ok_or_else(|| format!("There is no root parameter in slot {}", slot))?;
        parameter.select_table(Some(table))?;
        log::debug!("Bound root parameter {} to table {}", slot, table);

        Ok(())
    }

    pub fn dword_cost(&self) -> u32 {
        self.parameters.iter().map(|parameter| parameter.dword_cost()).sum()
    }

    /// Resolves the current parameter list into its Direct3D 12 form.
    /// Table references are looked up on every call, so the result always reflects the current tables.
    pub fn get(&self) -> RootSignatureDesc<'_> {
        let dword_cost = self.dword_cost();
        if dword_cost > MAX_ROOT_SIGNATURE_DWORDS {
            log::warn!(
                "Root signature uses {} DWORDs, the limit is {}",
                dword_cost,
                MAX_ROOT_SIGNATURE_DWORDS
            );
        }

        RootSignatureDesc {
            parameters: self
                .parameters
                .iter()
                .map(|parameter| parameter.get(&self.tables))
                .collect(),
            flags: self.flags,
            signature: PhantomData,
        }
    }

    /// Drops all parameters and tables. Calling this again does nothing.
    pub fn finalize(&mut self) {
        self.parameters.finalize();
        self.tables.finalize();
    }
}

impl Default for RootSignature {
    fn default() -> Self {
        Self::new(
            DEFAULT_TABLE_NAME,
            D3D12_ROOT_SIGNATURE_FLAG_ALLOW_INPUT_ASSEMBLER_INPUT_LAYOUT,
        )
    }
}

/// The exported root signature. The descriptor table parameters point into the tables of the
/// `RootSignature` this was created from, which stays borrowed for as long as this exists.
pub struct RootSignatureDesc<'a> {
    parameters: Vec<D3D12_ROOT_PARAMETER>,
    flags: D3D12_ROOT_SIGNATURE_FLAGS,
    signature: PhantomData<&'a RootSignature>,
}

impl<'a> RootSignatureDesc<'a> {
    pub fn parameters(&self) -> &[D3D12_ROOT_PARAMETER] {
        &self.parameters
    }

    pub fn flags(&self) -> D3D12_ROOT_SIGNATURE_FLAGS {
        self.flags
    }

    /// The ranges the descriptor table parameter in `slot` points to.
    /// Returns `None` for other parameter kinds.
    pub fn table_ranges(&self, slot: usize) -> Option<&'a [D3D12_DESCRIPTOR_RANGE]> {
        let parameter = self.parameters.get(slot)?;
        if parameter.ParameterType != D3D12_ROOT_PARAMETER_TYPE_DESCRIPTOR_TABLE {
            return None;
        }

        let table = unsafe { parameter.Anonymous.DescriptorTable };
        if table.pDescriptorRanges.is_null() {
            return Some(&[]);
        }

        // The ranges are owned by the borrowed RootSignature and outlive 'a
        Some(unsafe {
            std::slice::from_raw_parts(
                table.pDescriptorRanges,
                table.NumDescriptorRanges as usize,
            )
        })
    }

    /// The description handed to `D3D12SerializeRootSignature`. It points into `self`.
    pub fn desc(&self) -> D3D12_ROOT_SIGNATURE_DESC {
        D3D12_ROOT_SIGNATURE_DESC {
            NumParameters: self.parameters.len() as u32,
            pParameters: self.parameters.as_ptr(),
            NumStaticSamplers: 0,
            pStaticSamplers: std::ptr::null(),
            Flags: self.flags,
        }
    }
}

#[cfg(windows)]
impl RootSignatureDesc<'_> {
    /// Serializes the root signature with version 1 of the root signature format
    pub fn serialize(&self) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        use windows::Win32::Graphics::Direct3D::ID3DBlob;

        let mut root_blob_option: Option<ID3DBlob> = None;
        let mut error_blob_option: Option<ID3DBlob> = None;

        let result = unsafe {
            D3D12SerializeRootSignature(
                &self.desc(),
                D3D_ROOT_SIGNATURE_VERSION_1,
                &mut root_blob_option,
                Some(&mut error_blob_option as *mut _),
            )
        };

        if let Err(error) = result {
            let message = match &error_blob_option {
                Some(error_blob) => String::from_utf8_lossy(blob_bytes(error_blob))
                    .trim_end_matches('\0')
                    .to_owned(),
                None => error.to_string(),
            };
            return Err(format!("Failed to serialize root signature: {}", message).into());
        }

        let root_blob = root_blob_option.ok_or("Failed to serialize root signature")?;

        Ok(blob_bytes(&root_blob).to_vec())
    }

    pub fn create(
        &self,
        device: &ID3D12Device,
    ) -> Result<ID3D12RootSignature, Box<dyn std::error::Error>> {
        let blob_data = self.serialize()?;
        let root_signature = unsafe { device.CreateRootSignature(0, &blob_data) }?;
        log::info!(
            "Created root signature with {} parameters",
            self.parameters.len()
        );

        Ok(root_signature)
    }
}

#[cfg(windows)]
fn blob_bytes(blob: &windows::Win32::Graphics::Direct3D::ID3DBlob) -> &[u8] {
    unsafe {
        std::slice::from_raw_parts(
            blob.GetBufferPointer() as *const u8,
            blob.GetBufferSize(),
        )
    }
}

#[cfg(test)]
#[path = "root_signature_tests.rs"]
mod tests;
