//! Matrix element type constraints
//!
//! Only integer element types are supported. Every arithmetic operation is
//! checked so that combining matrices never wraps silently.

use core::fmt::{Debug, Display};
use core::str::FromStr;

/// Element width tag, selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
}

impl Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DataType::I32 => write!(f, "i32"),
            DataType::I64 => write!(f, "i64"),
        }
    }
}

/// Trait for types that can be stored as matrix elements
///
/// Elements must be:
/// - Copy: stored inline in the entry map
/// - Ord: comparable for deterministic output
/// - FromStr + Display: read from and written to the coordinate-list format
pub trait MatrixElement: Copy + Ord + Debug + Display + FromStr + Sized {
    /// The additive identity; never stored as an entry
    const ZERO: Self;

    /// Accumulator wide enough to hold any product of two elements exactly
    type Wide: Copy + Debug;

    /// Get the DataType tag for this element type
    fn data_type() -> DataType;

    /// Check for the additive identity
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_neg(self) -> Option<Self>;

    /// Exact product in the wide type
    fn wide_mul(self, rhs: Self) -> Self::Wide;

    fn wide_add(lhs: Self::Wide, rhs: Self::Wide) -> Option<Self::Wide>;

    /// Narrow an accumulated value back, `None` when it does not fit
    fn from_wide(wide: Self::Wide) -> Option<Self>;
}

macro_rules! impl_matrix_element {
    ($ty:ty, $wide:ty, $tag:expr) => {
        impl MatrixElement for $ty {
            const ZERO: Self = 0;

            type Wide = $wide;

            fn data_type() -> DataType {
                $tag
            }

            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_add(self, rhs)
            }

            fn checked_sub(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_sub(self, rhs)
            }

            fn checked_neg(self) -> Option<Self> {
                <$ty>::checked_neg(self)
            }

            fn wide_mul(self, rhs: Self) -> $wide {
                <$wide>::from(self) * <$wide>::from(rhs)
            }

            fn wide_add(lhs: $wide, rhs: $wide) -> Option<$wide> {
                lhs.checked_add(rhs)
            }

            fn from_wide(wide: $wide) -> Option<Self> {
                <$ty>::try_from(wide).ok()
            }
        }
    };
}

impl_matrix_element!(i32, i64, DataType::I32);
impl_matrix_element!(i64, i128, DataType::I64);
