//! Integer helpers used when sizing dispatches and root constants

use num_traits::PrimInt;

/// Ceiling division. A zero dividend yields zero.
///
/// # Panics
/// Panics if `divisor` is zero.
pub fn divide_and_round_up<T: PrimInt>(dividend: T, divisor: T) -> T {
    if dividend.is_zero() {
        T::zero()
    } else {
        (dividend - T::one()) / divisor + T::one()
    }
}

/// Base-2 logarithm rounded up, `0` for `0`
pub fn log2_ceil(value: u64) -> u8 {
    if value == 0 {
        return 0;
    }
    let msb = 63 - value.leading_zeros();
    if value.is_power_of_two() {
        msb as u8
    } else {
        (msb + 1) as u8
    }
}

/// Rounds up to the next power of two, `0` stays `0`.
///
/// Values above `1 << 63` have no representable power of two and saturate to `u64::MAX`.
pub fn align_power_of_two(value: u64) -> u64 {
    if value == 0 {
        return 0;
    }
    1u64.checked_shl(log2_ceil(value) as u32).unwrap_or(u64::MAX)
}

/// Number of 32-bit words needed to hold a `T`
pub const fn size_of_in_u32<T>() -> usize {
    let size = std::mem::size_of::<T>();
    if size == 0 {
        0
    } else {
        (size - 1) / std::mem::size_of::<u32>() + 1
    }
}
