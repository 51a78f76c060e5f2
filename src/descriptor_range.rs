use std::ops::RangeInclusive;

use windows::Win32::Graphics::Direct3D12::*;

pub const DESCRIPTOR_COUNT_BOUNDS: RangeInclusive<u32> = 1..=65535;
pub const REGISTER_BOUNDS: RangeInclusive<u32> = 0..=65535;
pub const REGISTER_SPACE_BOUNDS: RangeInclusive<u32> = 0..=65535;
/// -1 stands for `D3D12_DESCRIPTOR_RANGE_OFFSET_APPEND`
pub const OFFSET_BOUNDS: RangeInclusive<i32> = -1..=65535;

/// Offset value shown to the user for `D3D12_DESCRIPTOR_RANGE_OFFSET_APPEND`
pub const OFFSET_APPEND: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeType {
    Srv,
    Uav,
    Cbv,
}

impl RangeType {
    pub const ALL: [RangeType; 3] = [RangeType::Srv, RangeType::Uav, RangeType::Cbv];

    pub fn label(self) -> &'static str {
        match self {
            RangeType::Srv => "SRV",
            RangeType::Uav => "UAV",
            RangeType::Cbv => "CBV",
        }
    }

    pub fn to_d3d12(self) -> D3D12_DESCRIPTOR_RANGE_TYPE {
        match self {
            RangeType::Srv => D3D12_DESCRIPTOR_RANGE_TYPE_SRV,
            RangeType::Uav => D3D12_DESCRIPTOR_RANGE_TYPE_UAV,
            RangeType::Cbv => D3D12_DESCRIPTOR_RANGE_TYPE_CBV,
        }
    }

    /// Samplers have no counterpart here, they cannot share a table with the other types
    pub fn from_d3d12(range_type: D3D12_DESCRIPTOR_RANGE_TYPE) -> Option<Self> {
        match range_type {
            D3D12_DESCRIPTOR_RANGE_TYPE_SRV => Some(RangeType::Srv),
            D3D12_DESCRIPTOR_RANGE_TYPE_UAV => Some(RangeType::Uav),
            D3D12_DESCRIPTOR_RANGE_TYPE_CBV => Some(RangeType::Cbv),
            _ => None,
        }
    }

    /// HLSL register prefix, `t` for SRVs, `u` for UAVs and `b` for CBVs
    pub fn register_prefix(self) -> &'static str {
        match self {
            RangeType::Srv => "t",
            RangeType::Uav => "u",
            RangeType::Cbv => "b",
        }
    }
}

/// Formats a base register the way HLSL spells it, e.g. `t3` for an SRV range
pub fn format_register(range_type: Option<RangeType>, register: u32) -> String {
    match range_type {
        Some(range_type) => format!("{}{}", range_type.register_prefix(), register),
        None => register.to_string(),
    }
}

pub fn format_register_space(space: u32) -> String {
    format!("space{}", space)
}

/// A single `D3D12_DESCRIPTOR_RANGE`. It is layout compatible with the Direct3D 12 struct,
/// so a slice of ranges can be handed to the root signature serializer as is.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct DescriptorRange(D3D12_DESCRIPTOR_RANGE);

impl DescriptorRange {
    /// One SRV at `t0, space0`, appended after the previous range
    pub fn new() -> Self {
        DescriptorRange(D3D12_DESCRIPTOR_RANGE {
            RangeType: D3D12_DESCRIPTOR_RANGE_TYPE_SRV,
            NumDescriptors: 1,
            BaseShaderRegister: 0,
            RegisterSpace: 0,
            OffsetInDescriptorsFromTableStart: D3D12_DESCRIPTOR_RANGE_OFFSET_APPEND,
        })
    }

    pub fn range_type(&self) -> Option<RangeType> {
        RangeType::from_d3d12(self.0.RangeType)
    }

    pub fn set_range_type(&mut self, range_type: RangeType) {
        if self.range_type() != Some(range_type) {
            log::debug!("Range type set to {}", range_type.label());
            self.0.RangeType = range_type.to_d3d12();
        }
    }

    pub fn descriptor_count(&self) -> u32 {
        self.0.NumDescriptors
    }

    pub fn set_descriptor_count(&mut self, count: u32) {
        let count = clamp(count, &DESCRIPTOR_COUNT_BOUNDS);
        if self.0.NumDescriptors != count {
            log::debug!("Range descriptor count set to {}", count);
            self.0.NumDescriptors = count;
        }
    }

    pub fn base_shader_register(&self) -> u32 {
        self.0.BaseShaderRegister
    }

    pub fn set_base_shader_register(&mut self, register: u32) {
        let register = clamp(register, &REGISTER_BOUNDS);
        if self.0.BaseShaderRegister != register {
            log::debug!("Range base register set to {}", self.formatted_register(register));
            self.0.BaseShaderRegister = register;
        }
    }

    pub fn register_space(&self) -> u32 {
        self.0.RegisterSpace
    }

    pub fn set_register_space(&mut self, space: u32) {
        let space = clamp(space, &REGISTER_SPACE_BOUNDS);
        if self.0.RegisterSpace != space {
            log::debug!("Range register space set to {}", format_register_space(space));
            self.0.RegisterSpace = space;
        }
    }

    /// The offset from the table start, or `OFFSET_APPEND` if the range directly follows the previous one
    pub fn offset(&self) -> i32 {
        match self.0.OffsetInDescriptorsFromTableStart {
            D3D12_DESCRIPTOR_RANGE_OFFSET_APPEND => OFFSET_APPEND,
            offset => offset as i32,
        }
    }

    pub fn set_offset(&mut self, offset: i32) {
        let offset = clamp(offset, &OFFSET_BOUNDS);
        if self.offset() == offset {
            return;
        }
        log::debug!("Range offset set to {}", offset);
        self.0.OffsetInDescriptorsFromTableStart = if offset == OFFSET_APPEND {
            D3D12_DESCRIPTOR_RANGE_OFFSET_APPEND
        } else {
            offset as u32
        };
    }

    pub fn formatted_base_register(&self) -> String {
        self.formatted_register(self.base_shader_register())
    }

    fn formatted_register(&self, register: u32) -> String {
        format_register(self.range_type(), register)
    }

    pub fn as_d3d12(&self) -> &D3D12_DESCRIPTOR_RANGE {
        &self.0
    }
}

impl Default for DescriptorRange {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for DescriptorRange {
    fn eq(&self, other: &Self) -> bool {
        self.0.RangeType == other.0.RangeType
            && self.0.NumDescriptors == other.0.NumDescriptors
            && self.0.BaseShaderRegister == other.0.BaseShaderRegister
            && self.0.RegisterSpace == other.0.RegisterSpace
            && self.0.OffsetInDescriptorsFromTableStart
                == other.0.OffsetInDescriptorsFromTableStart
    }
}

impl std::fmt::Debug for DescriptorRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescriptorRange")
            .field("range_type", &self.range_type())
            .field("descriptor_count", &self.descriptor_count())
            .field("base_shader_register", &self.base_shader_register())
            .field("register_space", &self.register_space())
            .field("offset", &self.offset())
            .finish()
    }
}

pub(crate) fn clamp<T: PartialOrd + Copy>(value: T, bounds: &RangeInclusive<T>) -> T {
    if value < *bounds.start() {
        *bounds.start()
    } else if value > *bounds.end() {
        *bounds.end()
    } else {
        value
    }
}

#[cfg(test)]
#[path = "descriptor_range_tests.rs"]
mod tests;
