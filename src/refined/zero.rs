//! The [`Zero`] trait: the additive origin of a numeric type.
//!
//! Refinement predicates are all phrased as comparisons against zero,
//! so any type that can name its zero and be ordered can be refined.

/// A trait for types that have a zero value.
///
/// This trait anchors the refinement predicates: a value is positive
/// when it is strictly greater than `ZERO`, non-negative when it is
/// greater than or equal to `ZERO`, and non-positive when it is less
/// than or equal to `ZERO`.
///
/// # Implementing Zero
///
/// For custom types, implement `Zero` by providing the zero value:
///
/// ```rust
/// use monars::refined::Zero;
///
/// #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
/// struct Celsius(f64);
///
/// impl Zero for Celsius {
///     const ZERO: Self = Celsius(0.0);
/// }
///
/// assert_eq!(Celsius::ZERO.0, 0.0);
/// ```
pub trait Zero {
    /// The zero value of this type.
    const ZERO: Self;
}

// Implement Zero for signed integer types
impl Zero for i8 {
    const ZERO: Self = 0;
}

impl Zero for i16 {
    const ZERO: Self = 0;
}

impl Zero for i32 {
    const ZERO: Self = 0;
}

impl Zero for i64 {
    const ZERO: Self = 0;
}

impl Zero for i128 {
    const ZERO: Self = 0;
}

impl Zero for isize {
    const ZERO: Self = 0;
}

// Implement Zero for unsigned integer types
impl Zero for u8 {
    const ZERO: Self = 0;
}

impl Zero for u16 {
    const ZERO: Self = 0;
}

impl Zero for u32 {
    const ZERO: Self = 0;
}

impl Zero for u64 {
    const ZERO: Self = 0;
}

impl Zero for u128 {
    const ZERO: Self = 0;
}

impl Zero for usize {
    const ZERO: Self = 0;
}

// Implement Zero for floating point types
impl Zero for f32 {
    const ZERO: Self = 0.0;
}

impl Zero for f64 {
    const ZERO: Self = 0.0;
}
