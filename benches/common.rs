// to be included by benches
use bigint::limb::Limb;
use bigint::BigInt;

/// Deterministic numbers with the given limb count
pub fn random_bigints(seed: u64, limbs: usize, count: usize) -> Vec<BigInt> {
    let mut rng = oorandom::Rand32::new(seed);
    (0..count)
        .map(|_| {
            let digits: Vec<Limb> = (0..limbs).map(|_| rng.rand_u32() | 1).collect();
            BigInt::from_limbs(&digits)
        })
        .collect()
}

/// Iterate over vector in random order
pub struct RandomIterator<'a, T> {
    v: &'a Vec<T>,
    rng: oorandom::Rand32,
}

impl<'a, T> RandomIterator<'a, T> {
    pub fn new(v: &'a Vec<T>) -> Self {
        let seed = v.as_ptr() as u64;
        Self {
            v: v,
            rng: oorandom::Rand32::new(seed),
        }
    }

    pub fn next(&mut self) -> &'a T {
        let idx = self.rng.rand_u32() as usize % self.v.len();
        &self.v[idx]
    }
}
