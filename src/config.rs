//! Build-mode configuration.
//!
//! Value-uninitialized vectors and matrices (see [`crate::math::Vector::uninit`])
//! are filled with a per-type poison pattern when [`POISON_UNINIT`] is set, so
//! that reading a component before writing it shows up as NaN or an obviously
//! bogus integer such as `0x1BADCAFE`. Otherwise they are zero-filled.
//!
//! Poisoning is always on in debug builds and can be forced on in release
//! builds with the `poison-uninit` cargo feature.

/// Whether value-uninitialized storage is filled with poison values.
pub const POISON_UNINIT: bool = cfg!(any(debug_assertions, feature = "poison-uninit"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_builds_poison() {
        if cfg!(debug_assertions) {
            assert!(POISON_UNINIT);
        }
    }
}
