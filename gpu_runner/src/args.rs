use crate::error::{Result, VecAddError};
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_KERNEL_PATH: &str = "kernel.cl.sfb";

#[derive(Parser)]
#[command(name = "gpu_runner")]
#[command(about = "Adds two random vectors on an OpenCL device and validates the result on the host")]
pub struct Args {
    /// Number of elements in each input vector
    #[arg(long, default_value_t = 1024)]
    pub n: u32,

    /// Path to the precompiled kernel binary
    #[arg(long, default_value = DEFAULT_KERNEL_PATH)]
    pub kernel: PathBuf,

    /// Seed for the input vectors (drawn from the OS when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(VecAddError::InvalidArgument(
                "element count must be at least 1".into(),
            ));
        }
        if self.n > i32::MAX as u32 {
            return Err(VecAddError::InvalidArgument(format!(
                "element count {} exceeds the kernel's 32-bit index range",
                self.n
            )));
        }
        Ok(())
    }
}
