use std::ops::RangeInclusive;

use windows::Win32::Graphics::Direct3D12::*;

use crate::descriptor_range::{REGISTER_BOUNDS, REGISTER_SPACE_BOUNDS, clamp};
use crate::root_table_list::RootTableList;

/// The root signature limit is 64 DWORDs, so a single parameter can never hold more constants
pub const CONSTANT_COUNT_BOUNDS: RangeInclusive<u32> = 1..=64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShaderVisibility {
    #[default]
    All,
    Vertex,
    Hull,
    Domain,
    Geometry,
    Pixel,
    Amplification,
    Mesh,
}

impl ShaderVisibility {
    pub const ALL: [ShaderVisibility; 8] = [
        ShaderVisibility::All,
        ShaderVisibility::Vertex,
        ShaderVisibility::Hull,
        ShaderVisibility::Domain,
        ShaderVisibility::Geometry,
        ShaderVisibility::Pixel,
        ShaderVisibility::Amplification,
        ShaderVisibility::Mesh,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShaderVisibility::All => "All",
            ShaderVisibility::Vertex => "Vertex",
            ShaderVisibility::Hull => "Hull",
            ShaderVisibility::Domain => "Domain",
            ShaderVisibility::Geometry => "Geometry",
            ShaderVisibility::Pixel => "Pixel",
            ShaderVisibility::Amplification => "Amplification",
            ShaderVisibility::Mesh => "Mesh",
        }
    }

    pub fn to_d3d12(self) -> D3D12_SHADER_VISIBILITY {
        match self {
            ShaderVisibility::All => D3D12_SHADER_VISIBILITY_ALL,
            ShaderVisibility::Vertex => D3D12_SHADER_VISIBILITY_VERTEX,
            ShaderVisibility::Hull => D3D12_SHADER_VISIBILITY_HULL,
            ShaderVisibility::Domain => D3D12_SHADER_VISIBILITY_DOMAIN,
            ShaderVisibility::Geometry => D3D12_SHADER_VISIBILITY_GEOMETRY,
            ShaderVisibility::Pixel => D3D12_SHADER_VISIBILITY_PIXEL,
            ShaderVisibility::Amplification => D3D12_SHADER_VISIBILITY_AMPLIFICATION,
            ShaderVisibility::Mesh => D3D12_SHADER_VISIBILITY_MESH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    DescriptorTable,
    Constants,
    Cbv,
    Srv,
    Uav,
}

impl ParameterKind {
    pub const ALL: [ParameterKind; 5] = [
        ParameterKind::DescriptorTable,
        ParameterKind::Constants,
        ParameterKind::Cbv,
        ParameterKind::Srv,
        ParameterKind::Uav,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ParameterKind::DescriptorTable => "DescriptorTable",
            ParameterKind::Constants => "32BitConstants",
            ParameterKind::Cbv => "CBV",
            ParameterKind::Srv => "SRV",
            ParameterKind::Uav => "UAV",
        }
    }

    pub fn to_d3d12(self) -> D3D12_ROOT_PARAMETER_TYPE {
        match self {
            ParameterKind::DescriptorTable => D3D12_ROOT_PARAMETER_TYPE_DESCRIPTOR_TABLE,
            ParameterKind::Constants => D3D12_ROOT_PARAMETER_TYPE_32BIT_CONSTANTS,
            ParameterKind::Cbv => D3D12_ROOT_PARAMETER_TYPE_CBV,
            ParameterKind::Srv => D3D12_ROOT_PARAMETER_TYPE_SRV,
            ParameterKind::Uav => D3D12_ROOT_PARAMETER_TYPE_UAV,
        }
    }

    /// HLSL register prefix of the register a parameter of this kind binds to
    pub fn register_prefix(self) -> Option<&'static str> {
        match self {
            ParameterKind::DescriptorTable => None,
            ParameterKind::Constants | ParameterKind::Cbv => Some("b"),
            ParameterKind::Srv => Some("t"),
            ParameterKind::Uav => Some("u"),
        }
    }

    /// Size of a parameter of this kind inside the root signature
    pub fn dword_cost(self, constant_count: u32) -> u32 {
        match self {
            ParameterKind::DescriptorTable => 1,
            ParameterKind::Constants => constant_count,
            ParameterKind::Cbv | ParameterKind::Srv | ParameterKind::Uav => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootConstants {
    pub shader_register: u32,
    pub register_space: u32,
    pub count: u32,
}

impl Default for RootConstants {
    fn default() -> Self {
        RootConstants {
            shader_register: 0,
            register_space: 0,
            count: 1,
        }
    }
}

impl RootConstants {
    pub fn clamped(self) -> Self {
        RootConstants {
            shader_register: clamp(self.shader_register, &REGISTER_BOUNDS),
            register_space: clamp(self.register_space, &REGISTER_SPACE_BOUNDS),
            count: clamp(self.count, &CONSTANT_COUNT_BOUNDS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RootDescriptor {
    pub shader_register: u32,
    pub register_space: u32,
}

impl RootDescriptor {
    pub fn clamped(self) -> Self {
        RootDescriptor {
            shader_register: clamp(self.shader_register, &REGISTER_BOUNDS),
            register_space: clamp(self.register_space, &REGISTER_SPACE_BOUNDS),
        }
    }
}

/// The kind dependent part of a root parameter.
/// `DescriptorTable` refers to a table by its index in the signature's table list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootParameterPayload {
    DescriptorTable { table: Option<usize> },
    Constants(RootConstants),
    Cbv(RootDescriptor),
    Srv(RootDescriptor),
    Uav(RootDescriptor),
}

impl RootParameterPayload {
    pub fn kind(&self) -> ParameterKind {
        match self {
            RootParameterPayload::DescriptorTable { .. } => ParameterKind::DescriptorTable,
            RootParameterPayload::Constants(_) => ParameterKind::Constants,
            RootParameterPayload::Cbv(_) => ParameterKind::Cbv,
            RootParameterPayload::Srv(_) => ParameterKind::Srv,
            RootParameterPayload::Uav(_) => ParameterKind::Uav,
        }
    }

    fn descriptor(&self) -> Option<RootDescriptor> {
        match *self {
            RootParameterPayload::Cbv(descriptor)
            | RootParameterPayload::Srv(descriptor)
            | RootParameterPayload::Uav(descriptor) => Some(descriptor),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootParameter {
    visibility: ShaderVisibility,
    payload: RootParameterPayload,
}

impl RootParameter {
    /// A descriptor table parameter visible to all stages, with no table selected yet
    pub fn new() -> Self {
        RootParameter {
            visibility: ShaderVisibility::All,
            payload: RootParameterPayload::DescriptorTable { table: None },
        }
    }

    pub fn visibility(&self) -> ShaderVisibility {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: ShaderVisibility) {
        if self.visibility != visibility {
            log::debug!(
                "Root parameter visibility changed from {} to {}",
                self.visibility.label(),
                visibility.label()
            );
            self.visibility = visibility;
        }
    }

    pub fn kind(&self) -> ParameterKind {
        self.payload.kind()
    }

    pub fn payload(&self) -> &RootParameterPayload {
        &self.payload
    }

    /// Changes the parameter kind and resets the payload to fit it.
    /// Switching between CBV, SRV and UAV keeps the register and space,
    /// every other switch starts from that kind's defaults.
    pub fn set_kind(&mut self, kind: ParameterKind) {
        if kind == self.kind() {
            return;
        }

        log::debug!(
            "Root parameter changed from {} to {}",
            self.kind().label(),
            kind.label()
        );
        let descriptor = self.payload.descriptor().unwrap_or_default();
        self.payload = match kind {
            ParameterKind::DescriptorTable => RootParameterPayload::DescriptorTable { table: None },
            ParameterKind::Constants => RootParameterPayload::Constants(RootConstants::default()),
            ParameterKind::Cbv => RootParameterPayload::Cbv(descriptor),
            ParameterKind::Srv => RootParameterPayload::Srv(descriptor),
            ParameterKind::Uav => RootParameterPayload::Uav(descriptor),
        };
    }

    pub fn table(&self) -> Option<usize> {
        match self.payload {
            RootParameterPayload::DescriptorTable { table } => table,
            _ => None,
        }
    }

    /// Points a descriptor table parameter at a table. Only the index is stored.
    pub fn select_table(&mut self, table: Option<usize>) -> Result<(), Box<dyn std::error::Error>> {
        match &mut self.payload {
            RootParameterPayload::DescriptorTable { table: selected } => {
                if *selected != table {
                    log::debug!("Root parameter table changed from {:?} to {:?}", selected, table);
                    *selected = table;
                }
                Ok(())
            }
            payload => Err(format!(
                "Cannot select a table for a {} parameter",
                payload.kind().label()
            )
            .into()),
        }
    }

    pub fn set_constants(
        &mut self,
        constants: RootConstants,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &mut self.payload {
            RootParameterPayload::Constants(current) => {
                let constants = constants.clamped();
                if *current != constants {
                    log::debug!("Root constants changed from {:?} to {:?}", current, constants);
                    *current = constants;
                }
                Ok(())
            }
            payload => Err(format!(
                "Cannot set constants on a {} parameter",
                payload.kind().label()
            )
            .into()),
        }
    }

    pub fn set_descriptor(
        &mut self,
        descriptor: RootDescriptor,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &mut self.payload {
            RootParameterPayload::Cbv(current)
            | RootParameterPayload::Srv(current)
            | RootParameterPayload::Uav(current) => {
                let descriptor = descriptor.clamped();
                if *current != descriptor {
                    log::debug!("Root descriptor changed from {:?} to {:?}", current, descriptor);
                    *current = descriptor;
                }
                Ok(())
            }
            payload => Err(format!(
                "Cannot set a root descriptor on a {} parameter",
                payload.kind().label()
            )
            .into()),
        }
    }

    pub fn dword_cost(&self) -> u32 {
        let constant_count = match self.payload {
            RootParameterPayload::Constants(constants) => constants.count,
            _ => 0,
        };
        self.kind().dword_cost(constant_count)
    }

    /// The parameter as Direct3D 12 sees it.
    /// Descriptor tables are looked up in `tables` on every call, the result points into that table's
    /// range storage and is only valid until the table is mutated. A selection that does not resolve
    /// produces an empty table.
    pub fn get(&self, tables: &RootTableList) -> D3D12_ROOT_PARAMETER {
        let anonymous = match self.payload {
            RootParameterPayload::DescriptorTable { table } => {
                let descriptor_table = match table.map(|index| (index, tables.get(index))) {
                    Some((_, Some(table))) => table.get(),
                    Some((index, None)) => {
                        log::warn!(
                            "Root parameter refers to table {}, but there are only {} tables",
                            index,
                            tables.len()
                        );
                        D3D12_ROOT_DESCRIPTOR_TABLE::default()
                    }
                    None => D3D12_ROOT_DESCRIPTOR_TABLE::default(),
                };
                D3D12_ROOT_PARAMETER_0 {
                    DescriptorTable: descriptor_table,
                }
            }
            RootParameterPayload::Constants(constants) => D3D12_ROOT_PARAMETER_0 {
                Constants: D3D12_ROOT_CONSTANTS {
                    ShaderRegister: constants.shader_register,
                    RegisterSpace: constants.register_space,
                    Num32BitValues: constants.count,
                },
            },
            RootParameterPayload::Cbv(descriptor)
            | RootParameterPayload::Srv(descriptor)
            | RootParameterPayload::Uav(descriptor) => D3D12_ROOT_PARAMETER_0 {
                Descriptor: D3D12_ROOT_DESCRIPTOR {
                    ShaderRegister: descriptor.shader_register,
                    RegisterSpace: descriptor.register_space,
                },
            },
        };

        D3D12_ROOT_PARAMETER {
            ParameterType: self.kind().to_d3d12(),
            Anonymous: anonymous,
            ShaderVisibility: self.visibility.to_d3d12(),
        }
    }
}

impl Default for RootParameter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "root_parameter_tests.rs"]
mod tests;
