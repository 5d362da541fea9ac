mod args;
mod context;
mod error;
mod program;
mod vec_add;

use args::Args;
use backtrace::Backtrace;
use clap::Parser;
use context::GpuContext;
use error::{Result, api_err};
use logic::{MISMATCH_REPORT_CAP, Validation, check_vec_add, random_vec};
use opencl3::kernel::Kernel;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;

fn print_report(report: &Validation) {
    for m in &report.mismatches {
        println!(
            "C[{}] : correct_value = {:.6}, your_value = {:.6}",
            m.index, m.expected, m.actual
        );
    }
    if report.truncated() {
        println!("Too many errors, only the first {MISMATCH_REPORT_CAP} values are printed.");
    }
    if report.is_valid() {
        println!("Result: VALID");
    } else {
        println!("Result: INVALID");
    }
}

fn run(args: &Args) -> Result<()> {
    let gpu = GpuContext::new()?;

    // Load the pre-compiled kernel binary and bind its entry point
    println!("Loading kernel binary from {}", args.kernel.display());
    let program = program::build_from_binary(&gpu, &args.kernel)?;
    let kernel = Kernel::create(&program, vec_add::KERNEL_NAME).map_err(api_err("clCreateKernel"))?;

    let n = args.n as usize;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let a = random_vec(&mut rng, n);
    let b = random_vec(&mut rng, n);

    let started_at = Instant::now();
    let c = vec_add::launch(&gpu, &kernel, &a, &b)?;
    println!(
        "Device round trip took {:.3} ms",
        started_at.elapsed().as_secs_f64() * 1000.0
    );

    // Recompute on the host and compare
    println!("Validating...");
    let report = check_vec_add(&a, &b, &c);
    print_report(&report);

    Ok(())
}

fn main() {
    // Set up panic hook for better error reporting
    std::panic::set_hook(Box::new(|panic_info| {
        let backtrace = Backtrace::new();
        eprintln!("Thread panicked: {}", panic_info);
        eprintln!("Backtrace:\n{:?}", backtrace);
    }));

    let args = Args::parse();

    if let Err(err) = args.validate().and_then(|()| run(&args)) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
