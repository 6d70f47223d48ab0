/// Round `value` to `decimals` places, with ties going away from zero.
///
/// This is the spreadsheet convention (`ROUND` in Excel): `1.5 -> 2` and
/// `-1.5 -> -2`. Every point and handicap figure in the workspace goes
/// through here so the formats agree on their totals.
pub fn round_half_away(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if scaled >= 0.0 {
        (scaled + 0.5).floor() / factor
    } else {
        (scaled - 0.5).ceil() / factor
    }
}
