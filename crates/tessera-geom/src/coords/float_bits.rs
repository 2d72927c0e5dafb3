/// Bit pattern used for equality and hashing of an `f32` field.
///
/// Both zeros map to `+0.0` and every NaN maps to the quiet NaN, so two
/// values compare equal exactly when their canonical bits match.
#[inline]
pub(crate) fn canonical_bits(v: f32) -> u32 {
    if v.is_nan() {
        f32::NAN.to_bits()
    } else if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}

/// Implements `PartialEq`, `Eq` and `Hash` for a struct of `f32` fields
/// using `canonical_bits`. Fields are compared and hashed in the listed order.
macro_rules! impl_float_eq_hash {
    ($ty:ident { $($field:ident),+ }) => {
        impl PartialEq for $ty {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                $(
                    $crate::coords::float_bits::canonical_bits(self.$field)
                        == $crate::coords::float_bits::canonical_bits(other.$field)
                )&&+
            }
        }

        impl Eq for $ty {}

        impl core::hash::Hash for $ty {
            #[inline]
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                $(
                    core::hash::Hash::hash(
                        &$crate::coords::float_bits::canonical_bits(self.$field),
                        state,
                    );
                )+
            }
        }
    };
}
