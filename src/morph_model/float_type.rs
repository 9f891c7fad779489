/// floating point type of every point component
///
/// f32 by default, enable feature `double` for f64
#[cfg(not(feature = "double"))]
pub type FloatType = f32;
#[cfg(feature = "double")]
pub type FloatType = f64;

/// float-cmp margin matching [`FloatType`]
#[cfg(not(feature = "double"))]
pub type FloatMargin = float_cmp::F32Margin;
#[cfg(feature = "double")]
pub type FloatMargin = float_cmp::F64Margin;

/// scalar accepted by point scaling and division
///
/// every primitive number converts with an `as` cast: integers and wider
/// floats round to the nearest representable FloatType
pub trait Factor: Copy {
    fn to_float(self) -> FloatType;
}

macro_rules! impl_factor {
    ( $( $t:ty ),* ) => {
        $(
            impl Factor for $t {
                #[inline]
                fn to_float(self) -> FloatType {
                    self as FloatType
                }
            }
        )*
    };
}

impl_factor!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

#[cfg(test)]
mod test_float_type {
    use super::*;

    #[test]
    fn test_factor_conversion() {
        assert_eq!(3_u8.to_float(), 3.0);
        assert_eq!((-7_i64).to_float(), -7.0);
        assert_eq!(0.5_f64.to_float(), 0.5);
        assert_eq!(usize::MIN.to_float(), 0.0);
    }
}
