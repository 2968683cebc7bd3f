#[derive(Copy, Clone, Debug)]
#[repr(i32)]
pub enum DescriptorRangeType {
    Srv = D3D12_DESCRIPTOR_RANGE_TYPE_D3D12_DESCRIPTOR_RANGE_TYPE_SRV,
    Uav = D3D12_DESCRIPTOR_RANGE_TYPE_D3D12_DESCRIPTOR_RANGE_TYPE_UAV,
}

bitflags! {
    pub struct ResourceFlags: i32 {
        const None = D3D12_RESOURCE_FLAGS_D3D12_RESOURCE_FLAG_NONE;
        const AllowRenderTarget = D3D12_RESOURCE_FLAGS_D3D12_RESOURCE_FLAG_ALLOW_RENDER_TARGET;
    }
}
