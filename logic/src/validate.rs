use crate::vector::vec_add_reference;

/// Tolerance applied to both the absolute and the relative error
pub const EPS: f32 = 1e-3;

pub const MISMATCH_REPORT_CAP: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    pub index: usize,
    pub expected: f32,
    pub actual: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    pub mismatches: Vec<Mismatch>,
    /// Counts every mismatching element, not just the recorded ones
    pub total: usize,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.total == 0
    }

    pub fn truncated(&self) -> bool {
        self.total > self.mismatches.len()
    }
}

// A NaN result fails both arms of the comparison.
fn element_ok(expected: f32, actual: f32) -> bool {
    let abs = (actual - expected).abs();
    abs <= EPS || (expected != 0.0 && abs / expected.abs() <= EPS)
}

/// Recompute `a + b` on the host and compare `c` against it elementwise
pub fn check_vec_add(a: &[f32], b: &[f32], c: &[f32]) -> Validation {
    let expected = vec_add_reference(a, b);
    let mut mismatches = Vec::new();
    let mut total = 0;
    for (i, (&want, &got)) in expected.iter().zip(c.iter()).enumerate() {
        if element_ok(want, got) {
            continue;
        }
        total += 1;
        if mismatches.len() < MISMATCH_REPORT_CAP {
            mismatches.push(Mismatch {
                index: i,
                expected: want,
                actual: got,
            });
        }
    }
    Validation { mismatches, total }
}
