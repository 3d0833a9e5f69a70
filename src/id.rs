/// Represents a Universally Unique IDentifier.
///
/// The value is a plain 16-byte array in RFC 4122 network byte order: octet 0 is the most
/// significant byte of the `time_low` field and octet 15 is the least significant byte of the
/// `node` field. Any 16-byte pattern is a valid `Uuid`; the version and variant fields are stamped
/// by generators and only interpreted by [`Uuid::version`] and [`Uuid::variant`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates a UUID from a 16-byte array without any validation.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Consumes the UUID and returns the underlying byte array.
    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Reports the variant field value of the UUID or, if appropriate, "NIL" or "MAX".
    ///
    /// For convenience, this method reports [`Variant::VarNil`] or [`Variant::VarMax`] if `self`
    /// represents the Nil or Max UUID, although the Nil and Max UUIDs are technically subsumed
    /// under the variants `0b0` and `0b111`, respectively.
    pub fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0x0..=0x7 if *self == Self::NIL => Variant::VarNil,
            0x0..=0x7 => Variant::Var0,
            0x8..=0xb => Variant::Var10,
            0xc..=0xd => Variant::Var110,
            _ if *self == Self::MAX => Variant::VarMax,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the version field value of the UUID or `None` if `self` does not have the variant
    /// field value of `0b10`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniqueid::Uuid;
    ///
    /// let x = Uuid::from(0x2ca4b2ce_6c13_40d4_bccf_37d222820f6fu128);
    /// assert_eq!(x.version(), Some(4));
    /// assert_eq!(Uuid::NIL.version(), None);
    /// ```
    pub fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }
}

/// The reserved bits of the variant field of a UUID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// The variant field of `0b0`, reserved for NCS backward compatibility.
    Var0,

    /// The variant field of `0b10`, used by RFC 4122 UUIDs including version 4.
    Var10,

    /// The variant field of `0b110`, reserved for Microsoft backward compatibility.
    Var110,

    /// The variant field of `0b111`, reserved for future definition.
    VarReserved,

    /// The Nil UUID.
    VarNil,

    /// The Max UUID.
    VarMax,
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::Uuid;
    use core::fmt;
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_bytes(self.as_bytes())
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_bytes(VisitorImpl)
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a 16-byte UUID representation")
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(|_| E::invalid_length(value.len(), &self))
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut dst = [0u8; 16];
            for (i, e) in dst.iter_mut().enumerate() {
                *e = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(i, &self))?;
            }
            if seq.next_element::<u8>()?.is_some() {
                return Err(de::Error::invalid_length(17, &self));
            }
            Ok(Self::Value::from(dst))
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{Uuid, Variant};

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [(u128, Variant, Option<u8>)] {
        &[
            (0x0000_0000_0000_0000_0000_0000_0000_0000, Variant::VarNil, None),
            (0xffff_ffff_ffff_ffff_ffff_ffff_ffff_ffff, Variant::VarMax, None),
            (0x2ca4_b2ce_6c13_40d4_bccf_37d2_2282_0f6f, Variant::Var10, Some(4)),
            (0x0000_0000_0000_4000_8000_0000_0000_0000, Variant::Var10, Some(4)),
            (0x0180_9424_3e59_7c05_9219_566f_82ff_f672, Variant::Var10, Some(7)),
            (0x0000_0000_0000_4000_7fff_0000_0000_0000, Variant::Var0, None),
            (0x0000_0000_0000_4000_c000_0000_0000_0000, Variant::Var110, None),
            (0xffff_ffff_ffff_4fff_ffff_ffff_ffff_ffff, Variant::VarReserved, None),
        ]
    }

    /// Reports variant and version of prepared cases
    #[test]
    fn reports_variant_and_version_of_prepared_cases() {
        for &(value, variant, version) in prepare_cases() {
            let e = Uuid::from(value);
            assert_eq!(e.variant(), variant, "{:032x}", value);
            assert_eq!(e.version(), version, "{:032x}", value);
        }
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(Uuid::NIL.as_bytes(), &[0x00; 16]);
        assert_eq!(Uuid::MAX.as_bytes(), &[0xff; 16]);
        assert_eq!(Uuid::default(), Uuid::NIL);
    }

    /// Stores bytes in network byte order
    #[test]
    fn stores_bytes_in_network_byte_order() {
        let e = Uuid::from(0x0011_2233_4455_6677_8899_aabb_ccdd_eeffu128);
        assert_eq!(
            e.as_bytes(),
            &[
                0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd,
                0xee, 0xff,
            ]
        );
        assert!(Uuid::NIL < e && e < Uuid::MAX);
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for &(value, _, _) in prepare_cases() {
            let e = Uuid::from(value);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from_bytes(e.into_bytes()), e);
            assert_eq!(u128::from(e), value);
            assert_eq!(AsRef::<[u8]>::as_ref(&e), &e.as_bytes()[..]);

            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_bytes(), e.as_bytes());
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_u128(), value);
        }
    }

    /// Agrees with uuid crate on version field
    #[cfg(feature = "uuid")]
    #[test]
    fn agrees_with_uuid_crate_on_version_field() {
        for &(value, variant, version) in prepare_cases() {
            if variant == Variant::Var10 {
                let e = uuid::Uuid::from(Uuid::from(value));
                assert_eq!(Some(e.get_version_num() as u8), version);
            }
        }
    }
}
