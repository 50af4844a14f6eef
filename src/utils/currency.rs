//! Currency formatting utilities for coin and satoshi values
//!
//! Amounts are kept as integer satoshis everywhere and only turned into
//! whole-coin decimals at display time, using integer arithmetic so no value
//! ever picks up float rounding noise.

use crate::types::SATS_PER_COIN;

/// Format satoshis as a whole-coin decimal with the shortest exact fraction
///
/// At least one fractional digit is always printed. Amounts below 0.0001 coin
/// switch to scientific notation, matching how the legacy report printed float
/// amounts.
///
/// # Examples
/// ```
/// use super_staker_checkup::utils::currency::format_coin_amount;
///
/// assert_eq!(format_coin_amount(2_570_436_070_569), "25704.36070569");
/// assert_eq!(format_coin_amount(60_000_000_000), "600.0");
/// assert_eq!(format_coin_amount(12_679_160), "0.1267916");
/// assert_eq!(format_coin_amount(0), "0.0");
/// assert_eq!(format_coin_amount(-5), "-5e-08");
/// ```
pub fn format_coin_amount(sats: i64) -> String {
    let sign = if sats < 0 { "-" } else { "" };
    let magnitude = sats.unsigned_abs();
    let per_coin = SATS_PER_COIN.unsigned_abs();

    if magnitude != 0 && magnitude < per_coin / 10_000 {
        return format!("{}{}", sign, format_scientific(magnitude));
    }

    let whole = magnitude / per_coin;
    let fraction = magnitude % per_coin;

    if fraction == 0 {
        return format!("{}{}.0", sign, whole);
    }

    let digits = format!("{:08}", fraction);
    format!("{}{}.{}", sign, whole, digits.trim_end_matches('0'))
}

/// `magnitude` satoshis (below 10_000) as `d.ddde-0N` coins
fn format_scientific(magnitude: u64) -> String {
    let digits = magnitude.to_string();
    let exponent = 8 - (digits.len() as i32 - 1);
    let significant = digits.trim_end_matches('0');

    let (lead, rest) = significant.split_at(1);
    if rest.is_empty() {
        format!("{}e-{:02}", lead, exponent)
    } else {
        format!("{}.{}e-{:02}", lead, rest, exponent)
    }
}

/// Format a satoshi amount as dual coin + sats display
///
/// # Examples
/// ```
/// use super_staker_checkup::utils::currency::format_sats_as_coin;
///
/// assert_eq!(
///     format_sats_as_coin(10_179_000_000),
///     "101.79000000 QTUM (10179000000 sats)"
/// );
/// ```
pub fn format_sats_as_coin(sats: i64) -> String {
    let sign = if sats < 0 { "-" } else { "" };
    let magnitude = sats.unsigned_abs();
    let per_coin = SATS_PER_COIN.unsigned_abs();

    format!(
        "{}{}.{:08} QTUM ({} sats)",
        sign,
        magnitude / per_coin,
        magnitude % per_coin,
        sats
    )
}
