use crate::context::GpuContext;
use crate::error::{Result, VecAddError, api_err};
use opencl3::error_codes::CL_BUILD_PROGRAM_FAILURE;
use opencl3::program::Program;
use std::fs;
use std::path::Path;

pub fn load_binary(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| VecAddError::KernelImage {
        path: path.to_path_buf(),
        source,
    })
}

pub fn build_from_binary(gpu: &GpuContext, path: &Path) -> Result<Program> {
    let binary = load_binary(path)?;
    let devices = [gpu.device.id()];
    let mut program =
        unsafe { Program::create_from_binary(&gpu.context, &devices, &[binary.as_slice()]) }
            .map_err(api_err("clCreateProgramWithBinary"))?;
    if let Err(status) = program.build(&devices, "") {
        if status.0 == CL_BUILD_PROGRAM_FAILURE {
            let log = program
                .get_build_log(gpu.device.id())
                .unwrap_or_else(|_| String::from("<build log unavailable>"));
            return Err(VecAddError::BuildFailure { log });
        }
        return Err(VecAddError::Api {
            call: "clBuildProgram",
            status,
        });
    }
    Ok(program)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_report_a_missing_kernel_binary() {
        let path = Path::new("definitely/not/here/kernel.cl.sfb");
        let err = load_binary(path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to open"));
    }

    #[test]
    fn should_read_binary_bytes_back() {
        let path = std::env::temp_dir().join(format!("vec_add_{}.sfb", std::process::id()));
        fs::write(&path, b"not a real kernel").unwrap();
        let bytes = load_binary(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(bytes, b"not a real kernel".to_vec());
    }
}
