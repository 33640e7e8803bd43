//! Text rendering for the four printable types, independent of any sink.

/// Fractional digits written for every float. Pinned here instead of
/// inheriting whatever default the platform formatter has.
pub const FLOAT_PRECISION: usize = 6;

pub fn int_text(x: i32) -> String {
    format!("{}\n", x)
}

/// Fixed notation with `FLOAT_PRECISION` digits. NaN and the infinities are
/// spelled the way C's `%f` spells them (`nan`, `-nan`, `inf`, `-inf`).
pub fn float_text(x: f64) -> String {
    if x.is_nan() {
        let sign = if x.is_sign_negative() { "-" } else { "" };
        format!("{}nan\n", sign)
    } else if x.is_infinite() {
        let sign = if x.is_sign_negative() { "-" } else { "" };
        format!("{}inf\n", sign)
    } else {
        format!("{:.*}\n", FLOAT_PRECISION, x)
    }
}

/// Only strictly positive flags are true; `-1` prints `false`.
pub fn bool_text(flag: i32) -> &'static str {
    if flag > 0 {
        "true\n"
    } else {
        "false\n"
    }
}

/// The low byte of the code unit, unescaped. Out-of-range values are
/// truncated rather than rejected.
pub fn char_byte(code_unit: i32) -> u8 {
    code_unit as u8
}
