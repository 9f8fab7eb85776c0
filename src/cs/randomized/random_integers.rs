use std::io::Write;

use rand::Rng;

use crate::error::Result;

/// Largest absolute value produced by the generator.
pub const MAGNITUDE: i64 = 100;

/// Returns `amount` integers drawn uniformly from `[-MAGNITUDE, MAGNITUDE]`.
///
/// # Examples
///
/// ```
/// use maxsub::cs::randomized::random_integers;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// let values = random_integers(&mut rng, 5);
/// assert_eq!(values.len(), 5);
/// assert!(values.iter().all(|v| v.abs() <= 100));
/// ```
pub fn random_integers<R: Rng + ?Sized>(rng: &mut R, amount: usize) -> Vec<i64> {
    (0..amount)
        .map(|_| rng.gen_range(-MAGNITUDE..=MAGNITUDE))
        .collect()
}

/// Writes `amount` random integers to `out`, one per line.
pub fn write_random_integers<W, R>(out: &mut W, rng: &mut R, amount: usize) -> Result<()>
where
    W: Write + ?Sized,
    R: Rng + ?Sized,
{
    for _ in 0..amount {
        writeln!(out, "{}", rng.gen_range(-MAGNITUDE..=MAGNITUDE))?;
    }
    out.flush()?;
    Ok(())
}
