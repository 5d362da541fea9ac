use rand::Rng;

pub fn random_vec<R: Rng>(rng: &mut R, n: usize) -> Vec<f32> {
    (0..n).map(|_| rng.gen_range(-0.5f32..0.5f32)).collect()
}

/// Host-side reference for the device kernel
pub fn vec_add_reference(a: &[f32], b: &[f32]) -> Vec<f32> {
    a.iter().zip(b.iter()).map(|(x, y)| x + y).collect()
}
