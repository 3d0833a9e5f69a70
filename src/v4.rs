//! UUIDv4-related functionality

use crate::{EntropySource, Uuid};

/// Generates a UUIDv4 object using the operating system's random number facility.
///
/// Each call creates its own [`SystemEntropy`](crate::SystemEntropy) instance, so concurrent
/// callers share no state.
///
/// # Panics
///
/// Panics if the operating system cannot supply random bytes.
///
/// # Examples
///
/// ```rust
/// use uniqueid::uuid4;
///
/// let uuid = uuid4();
/// println!("{:?}", uuid.as_bytes()); // e.g. [44, 164, 178, 206, 108, 19, 64, 212, ...]
/// ```
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn uuid4() -> Uuid {
    uuid4_with(&mut crate::SystemEntropy::default())
}

/// Generates a UUIDv4 object with random bits from the given entropy source.
///
/// Exactly two `u64` values are drawn, `lo` first and then `hi`. The 16-byte buffer is
/// `lo.to_le_bytes()` followed by `hi.to_le_bytes()`, after which the high nibble of octet 6 is
/// set at `0100` and the two high bits of octet 8 are set at `10`.
///
/// # Examples
///
/// ```rust
/// use uniqueid::uuid4_with;
///
/// let mut rng = rand::rngs::mock::StepRng::new(u64::MAX, 0);
/// let uuid = uuid4_with(&mut uniqueid::generator::with_rand08::Adapter(&mut rng));
/// assert_eq!(u128::from(uuid), 0xffffffff_ffff_4fff_bfff_ffffffffffff);
/// ```
pub fn uuid4_with<R: EntropySource + ?Sized>(rng: &mut R) -> Uuid {
    let lo = rng.next_u64();
    let hi = rng.next_u64();

    let mut bytes = [0u8; 16];
    bytes[..8].copy_from_slice(&lo.to_le_bytes());
    bytes[8..].copy_from_slice(&hi.to_le_bytes());

    // octet 6 = time_hi_and_version (high octet); high 4 bits = version number
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    // octet 8 = clock_seq_hi_and_reserved; high 2 bits = variant (10 = standard)
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    Uuid::from_bytes(bytes)
}
