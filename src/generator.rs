//! Entropy sources and the UUIDv4 generator type.

use crate::{uuid4_with, Uuid};

pub mod with_rand08;


/// A trait that defines the minimum random number generator interface for UUIDv4 generation.
///
/// Each call advances the internal state of the source. There is no other contract; the source
/// decides how (or whether) it reports failures, typically by panicking.
pub trait EntropySource {
    /// Returns the next random `u64`.
    fn next_u64(&mut self) -> u64;
}

impl<T: EntropySource + ?Sized> EntropySource for &mut T {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

/// The default entropy source that draws from the operating system's random number facility
/// through [`rand::rngs::OsRng`].
///
/// This type is zero-sized and holds no state, so every caller can cheaply create its own
/// instance.
///
/// # Panics
///
/// [`EntropySource::next_u64`] panics if the operating system cannot supply random bytes.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemEntropy(rand::rngs::OsRng);

#[cfg(feature = "std")]
impl EntropySource for SystemEntropy {
    fn next_u64(&mut self) -> u64 {
        rand::RngCore::next_u64(&mut self.0)
    }
}

/// Represents a UUIDv4 generator that owns an entropy source.
///
/// The generator holds no state other than the source, so it is only a convenience for callers
/// that keep a source around; [`uuid4_with`] is the equivalent free function.
///
/// # Examples
///
/// ```rust
/// use uniqueid::V4Generator;
///
/// let mut g = V4Generator::with_rand08(rand::thread_rng());
/// assert_eq!(g.generate().version(), Some(4));
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V4Generator<R> {
    rng: R,
}

impl<R: EntropySource> V4Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUIDv4 object, drawing two `u64` values from the entropy source.
    pub fn generate(&mut self) -> Uuid {
        uuid4_with(&mut self.rng)
    }

    /// Consumes the generator and returns the entropy source.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv4 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use uniqueid::V4Generator;
///
/// V4Generator::with_rand08(rand::thread_rng())
///     .enumerate()
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {:?}", i, e));
/// ```
impl<R: EntropySource> Iterator for V4Generator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: EntropySource> core::iter::FusedIterator for V4Generator<R> {}
