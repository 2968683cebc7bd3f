pub type D3D12_RESOURCE_FLAGS = ::std::os::raw::c_int;
pub const D3D12_RESOURCE_FLAGS_D3D12_RESOURCE_FLAG_NONE:
    D3D12_RESOURCE_FLAGS = 0;
pub const D3D12_RESOURCE_FLAGS_D3D12_RESOURCE_FLAG_ALLOW_RENDER_TARGET:
    D3D12_RESOURCE_FLAGS = 1;
pub const D3D12_RESOURCE_FLAGS_D3D12_RESOURCE_FLAG_ALLOW_DEPTH_STENCIL:
    D3D12_RESOURCE_FLAGS = 2;
pub const D3D12_RESOURCE_FLAGS_D3D12_RESOURCE_FLAG_ALLOW_UNORDERED_ACCESS:
    D3D12_RESOURCE_FLAGS = 4;
