//! Integration with `rand` (v0.8) crate.

use super::{EntropySource, V4Generator};
use rand::RngCore;

/// An adapter that implements [`EntropySource`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> EntropySource for Adapter<T> {
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }
}

impl<T: RngCore> V4Generator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use uniqueid::V4Generator;
    ///
    /// let mut g = V4Generator::with_rand08(StdRng::seed_from_u64(42));
    /// println!("{:?}", g.generate());
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::Adapter;
    use crate::{uuid4_with, EntropySource};
    use rand::{rngs::mock::StepRng, RngCore};

    /// Forwards draws to wrapped RngCore
    #[test]
    fn forwards_draws_to_wrapped_rng_core() {
        let mut a = Adapter(StepRng::new(10, 5));
        assert_eq!(a.next_u64(), 10);
        assert_eq!(a.next_u64(), 15);
        assert_eq!(a.0.next_u64(), 20);
    }

    /// Takes lo before hi from wrapped RngCore
    #[test]
    fn takes_lo_before_hi_from_wrapped_rng_core() {
        let e = uuid4_with(&mut Adapter(StepRng::new(0, 1)));
        assert_eq!(
            e.as_bytes(),
            &[0, 0, 0, 0, 0, 0, 0x40, 0, 0x81, 0, 0, 0, 0, 0, 0, 0]
        );
    }
}
