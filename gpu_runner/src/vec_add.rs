use crate::context::GpuContext;
use crate::error::{Result, VecAddError, api_err};
use logic::{LOCAL_WORK_SIZE, round_up_global};
use opencl3::kernel::{ExecuteKernel, Kernel};
use opencl3::memory::{Buffer, CL_MEM_READ_WRITE};
use opencl3::types::{CL_BLOCKING, cl_int};
use std::ptr;

pub const KERNEL_NAME: &str = "vec_add";

fn create_buffer(gpu: &GpuContext, n: usize) -> Result<Buffer<f32>> {
    unsafe {
        Buffer::<f32>::create(&gpu.context, CL_MEM_READ_WRITE, n, ptr::null_mut()).map_err(
            |status| VecAddError::Allocation {
                bytes: n * size_of::<f32>(),
                status,
            },
        )
    }
}

pub fn launch(gpu: &GpuContext, kernel: &Kernel, a: &[f32], b: &[f32]) -> Result<Vec<f32>> {
    let n = a.len();
    let mut a_dev = create_buffer(gpu, n)?;
    let mut b_dev = create_buffer(gpu, n)?;
    let c_dev = create_buffer(gpu, n)?;

    unsafe {
        gpu.queue
            .enqueue_write_buffer(&mut a_dev, CL_BLOCKING, 0, a, &[])
            .map_err(api_err("clEnqueueWriteBuffer"))?;
        gpu.queue
            .enqueue_write_buffer(&mut b_dev, CL_BLOCKING, 0, b, &[])
            .map_err(api_err("clEnqueueWriteBuffer"))?;
    }

    // The global size must be a whole number of work-groups; the kernel
    // masks off the tail work items past n.
    let count = n as cl_int;
    let global = round_up_global(n, LOCAL_WORK_SIZE);
    println!("Launching {KERNEL_NAME} over {global} work items ({LOCAL_WORK_SIZE} per group)");

    // In-order queue, so the blocking read below is the only synchronization
    // point the launch needs.
    unsafe {
        ExecuteKernel::new(kernel)
            .set_arg(&a_dev)
            .set_arg(&b_dev)
            .set_arg(&c_dev)
            .set_arg(&count)
            .set_global_work_size(global)
            .set_local_work_size(LOCAL_WORK_SIZE)
            .enqueue_nd_range(&gpu.queue)
            .map_err(api_err("clEnqueueNDRangeKernel"))?;
    }

    let mut c = vec![0.0f32; n];
    unsafe {
        gpu.queue
            .enqueue_read_buffer(&c_dev, CL_BLOCKING, 0, &mut c, &[])
            .map_err(api_err("clEnqueueReadBuffer"))?;
    }

    Ok(c)
}
