/// Number of decimal digits needed to render `v` (at least 1).
pub(crate) fn decimal_len(mut v: usize) -> usize {
    let mut len = 1;
    while v >= 10 {
        v /= 10;
        len += 1;
    }
    len
}

/// Appends the decimal form of `v` without sign or leading zeros.
/// Caller reserves `decimal_len(v)` bytes beforehand.
pub(crate) fn push_decimal(out: &mut Vec<u8>, v: usize) {
    let start = out.len();
    let mut v = v;
    loop {
        out.push(b'0' + (v % 10) as u8);
        v /= 10;
        if v == 0 {
            break;
        }
    }
    out[start..].reverse();
}
