#![allow(unused)]
use rand::Rng;

pub(crate) fn generate_random_vector(dim: usize) -> Vec<f32> {
    (0..dim).map(|_| rand::thread_rng().gen()).collect()
}

pub(crate) fn muladd_cpu(a: &[f32], b: &[f32], out: &mut [f32]) {
    for ((o, x), y) in out.iter_mut().zip(a).zip(b) {
        *o = (x + y) + 0.5;
    }
}

pub(crate) fn reduce_min_cpu(a: &[f32]) -> f32 {
    a.iter().fold(f32::INFINITY, |m, &x| if x < m { x } else { m })
}
