pub struct D3D12_DESCRIPTOR_RANGE {
    pub RangeType: D3D12_DESCRIPTOR_RANGE_TYPE,
    pub NumDescriptors: UINT,
    pub BaseShaderRegister: UINT,
    pub RegisterSpace: UINT,
    pub OffsetInDescriptorsFromTableStart: UINT,
}
