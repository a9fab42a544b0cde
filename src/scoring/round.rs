//! CVSS v3.1 `Roundup`.

/// Round up to one decimal place, as defined by CVSS v3.1 Appendix A.
///
/// The value is scaled by 100 000 and truncated toward zero first, so that
/// floating-point noise such as `4.000000000000001` rounds to `4.0` rather
/// than `4.1`. Zero maps to zero.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn round_up_1dp(value: f64) -> f64 {
    if value == 0.0 {
        return 0.0;
    }

    let scaled = (value * 100_000.0) as i64;
    if scaled % 10_000 == 0 {
        scaled as f64 / 100_000.0
    } else {
        ((scaled as f64 / 10_000.0).floor() + 1.0) / 10.0
    }
}
