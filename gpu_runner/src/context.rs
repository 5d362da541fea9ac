use crate::error::{Result, VecAddError, api_err};
use opencl3::command_queue::CommandQueue;
use opencl3::context::Context;
use opencl3::device::{CL_DEVICE_TYPE_ALL, Device};
use opencl3::platform::get_platforms;

// Fields drop in declaration order: queue first, then context, then device.
pub struct GpuContext {
    pub queue: CommandQueue,
    pub context: Context,
    pub device: Device,
}

impl GpuContext {
    pub fn new() -> Result<Self> {
        let platforms = get_platforms().map_err(api_err("clGetPlatformIDs"))?;
        let platform = platforms.first().ok_or(VecAddError::NoPlatform)?;
        let platform_name = platform.name().map_err(api_err("clGetPlatformInfo"))?;
        println!("Detected OpenCL platform: {platform_name}");

        let device_ids = platform
            .get_devices(CL_DEVICE_TYPE_ALL)
            .map_err(api_err("clGetDeviceIDs"))?;
        let device_id = *device_ids.first().ok_or(VecAddError::NoDevice)?;
        let device = Device::new(device_id);
        let device_name = device.name().map_err(api_err("clGetDeviceInfo"))?;
        println!("Detected OpenCL device: {device_name}");

        let context = Context::from_device(&device).map_err(api_err("clCreateContext"))?;
        #[allow(deprecated)]
        let queue = unsafe { CommandQueue::create(&context, device.id(), 0) }
            .map_err(api_err("clCreateCommandQueue"))?;

        Ok(Self {
            queue,
            context,
            device,
        })
    }
}
