//! An implementation of UUID version 4 as defined by RFC 4122
//!
//! ```rust
//! use uniqueid::uuid4;
//!
//! let uuid = uuid4();
//! assert_eq!(uuid.version(), Some(4));
//! println!("{:?}", uuid.as_bytes()); // as 16-byte array
//! ```
//!
//! See [RFC 4122, Section 4.4](https://datatracker.ietf.org/doc/html/rfc4122#section-4.4).
//!
//! # Field and bit layout
//!
//! A UUIDv4 consists of 122 random bits and six fixed bits:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |             rand              |  ver  |         rand          |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                          rand                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where the 4-bit `ver` field is set at `0100` and the 2-bit `var` field is set at `10`.
//!
//! The random bits come from two 64-bit draws `lo` and `hi` of an [`EntropySource`], laid out as
//! `lo.to_le_bytes()` followed by `hi.to_le_bytes()` regardless of the host byte order, so a
//! deterministic source produces the same identifier on every platform.
//!
//! # Custom entropy sources
//!
//! ```rust
//! use uniqueid::{uuid4_with, EntropySource};
//!
//! struct Zeros;
//!
//! impl EntropySource for Zeros {
//!     fn next_u64(&mut self) -> u64 {
//!         0
//!     }
//! }
//!
//! let uuid = uuid4_with(&mut Zeros);
//! assert_eq!(
//!     uuid.as_bytes(),
//!     &[0, 0, 0, 0, 0, 0, 0x40, 0, 0x80, 0, 0, 0, 0, 0, 0, 0]
//! );
//! ```
//!
//! # Crate features
//!
//! - `std` (default): enables [`uuid4()`] and [`SystemEntropy`] backed by the operating system's
//!   random number facility. Without it the crate is `no_std`.
//! - `serde`: serializes [`Uuid`] as a 16-byte sequence.
//! - `uuid`: converts between [`Uuid`] and `uuid::Uuid`, whose text formatting and parsing can be
//!   used for the canonical string representation.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{Uuid, Variant};

pub mod generator;
#[doc(inline)]
pub use generator::{EntropySource, V4Generator};
#[cfg(feature = "std")]
#[doc(inline)]
pub use generator::SystemEntropy;

mod v4;
pub use v4::uuid4_with;
#[cfg(feature = "std")]
pub use v4::uuid4;
