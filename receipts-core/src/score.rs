//! Scoring engine: point contributions from each receipt attribute.
//!
//! Every rule is an independent non-negative contribution; the score is
//! their sum, with no cap. Amount arithmetic goes through `rust_decimal`,
//! which is exact for the two-fractional-digit amounts receipts carry.

use chrono::{Datelike, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{ReceiptError, ReceiptResult};
use crate::types::{Item, Receipt};

/// Total points awarded to a receipt.
///
/// Pure and deterministic. The only failure is a total that does not parse
/// as a decimal amount.
pub fn score(receipt: &Receipt) -> ReceiptResult<u64> {
    let mut points = retailer_points(&receipt.retailer);
    points += total_points(&receipt.total)?;
    points += item_count_points(&receipt.items);
    points += receipt.items.iter().map(description_points).sum::<u64>();
    points += day_points(receipt);
    points += time_points(receipt);
    Ok(points)
}

/// +1 per alphanumeric character of the trimmed retailer name, any script.
fn retailer_points(retailer: &str) -> u64 {
    retailer
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .count() as u64
}

/// +25 when the total is an exact multiple of 0.25, +50 when it has zero
/// cents (`total * 100 mod 100 == 0`).
fn total_points(total: &str) -> ReceiptResult<u64> {
    let total =
        Decimal::from_str(total).map_err(|_| ReceiptError::InvalidTotal(total.to_string()))?;

    let mut points = 0;
    if (total % Decimal::new(25, 2)).is_zero() {
        points += 25;
    }
    if ((total * Decimal::ONE_HUNDRED) % Decimal::ONE_HUNDRED).is_zero() {
        points += 50;
    }
    Ok(points)
}

/// +5 per pair of items.
fn item_count_points(items: &[Item]) -> u64 {
    (items.len() as u64 / 2) * 5
}

/// +ceil(price * 0.2) when the trimmed description's character count is a
/// positive multiple of 3. A price that does not parse contributes nothing;
/// the validation boundary rejects such input before scoring.
fn description_points(item: &Item) -> u64 {
    let len = item.short_description.trim().chars().count();
    if len == 0 || len % 3 != 0 {
        return 0;
    }

    let Ok(price) = Decimal::from_str(&item.price) else {
        return 0;
    };

    (price * Decimal::new(2, 1))
        .ceil()
        .to_u64()
        .unwrap_or(0)
}

/// +6 when the day of the month is odd.
fn day_points(receipt: &Receipt) -> u64 {
    if receipt.purchase_date.day() % 2 == 1 {
        6
    } else {
        0
    }
}

/// +10 when the purchase hour falls in 14..=16.
///
/// The window is checked on the hour field only, so 16:59 still qualifies.
/// This hour-only boundary is the contract; do not tighten it.
fn time_points(receipt: &Receipt) -> u64 {
    let hour = receipt.purchase_time.hour();
    if (14..=16).contains(&hour) {
        10
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn receipt(
        retailer: &str,
        date: (i32, u32, u32),
        time: (u32, u32),
        items: &[(&str, &str)],
        total: &str,
    ) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            purchase_time: NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap(),
            items: items
                .iter()
                .map(|(d, p)| Item {
                    short_description: d.to_string(),
                    price: p.to_string(),
                })
                .collect(),
            total: total.to_string(),
        }
    }

    #[test]
    fn retailer_name_counts_alphanumerics_only() {
        assert_eq!(retailer_points("Target"), 6);
        assert_eq!(retailer_points("M&M Corner Market"), 14);
        assert_eq!(retailer_points("  Target  "), 6);
    }

    #[test]
    fn total_rules() {
        // Not a multiple of 0.25 and has cents.
        assert_eq!(total_points("35.35").unwrap(), 0);
        // Multiple of 0.25 and zero cents.
        assert_eq!(total_points("9.00").unwrap(), 75);
        // Multiple of 0.25 with cents.
        assert_eq!(total_points("2.50").unwrap(), 25);
    }

    #[test]
    fn unparsable_total_is_an_error() {
        assert_eq!(
            total_points("not-a-number"),
            Err(ReceiptError::InvalidTotal("not-a-number".to_string()))
        );
    }

    #[test]
    fn item_pairs_score_five_each() {
        let items: Vec<Item> = (0..5)
            .map(|_| Item {
                short_description: "x".to_string(),
                price: "1.00".to_string(),
            })
            .collect();
        assert_eq!(item_count_points(&items), 10);
        assert_eq!(item_count_points(&items[..4]), 10);
        assert_eq!(item_count_points(&items[..1]), 0);
        assert_eq!(item_count_points(&[]), 0);
    }

    #[test]
    fn description_length_rule() {
        // Trimmed length 18, multiple of 3: ceil(12.25 * 0.2) = 3.
        let pizza = Item {
            short_description: "Emils Cheese Pizza".to_string(),
            price: "12.25".to_string(),
        };
        assert_eq!(description_points(&pizza), 3);

        // Trimmed to length 24, multiple of 3: ceil(12.00 * 0.2) = 3.
        let klarbrunn = Item {
            short_description: "   Klarbrunn 12-PK 12 FL OZ  ".to_string(),
            price: "12.00".to_string(),
        };
        assert_eq!(description_points(&klarbrunn), 3);

        // Length 17, not a multiple of 3.
        let dew = Item {
            short_description: "Mountain Dew 12PK".to_string(),
            price: "6.49".to_string(),
        };
        assert_eq!(description_points(&dew), 0);

        // Empty description never scores.
        let empty = Item {
            short_description: "   ".to_string(),
            price: "6.49".to_string(),
        };
        assert_eq!(description_points(&empty), 0);
    }

    #[test]
    fn odd_day_scores_six() {
        let odd = receipt("T", (2022, 1, 1), (13, 1), &[("x", "1.00")], "1.00");
        let even = receipt("T", (2022, 3, 20), (13, 1), &[("x", "1.00")], "1.00");
        assert_eq!(day_points(&odd), 6);
        assert_eq!(day_points(&even), 0);
    }

    #[test]
    fn afternoon_window_is_hour_granular() {
        let cases = [
            ((13, 59), 0),
            ((14, 0), 10),
            ((14, 33), 10),
            ((16, 59), 10),
            ((17, 0), 0),
        ];
        for ((h, m), want) in cases {
            let r = receipt("T", (2022, 1, 1), (h, m), &[("x", "1.00")], "1.00");
            assert_eq!(time_points(&r), want, "at {h:02}:{m:02}");
        }
    }

    #[test]
    fn target_receipt_scores_28() {
        let r = receipt(
            "Target",
            (2022, 1, 1),
            (13, 1),
            &[
                ("Mountain Dew 12PK", "6.49"),
                ("Emils Cheese Pizza", "12.25"),
                ("Knorr Creamy Chicken", "1.26"),
                ("Doritos Nacho Cheese", "3.35"),
                ("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            "35.35",
        );
        assert_eq!(score(&r).unwrap(), 28);
    }

    #[test]
    fn corner_market_receipt_scores_109() {
        let r = receipt(
            "M&M Corner Market",
            (2022, 3, 20),
            (14, 33),
            &[
                ("Gatorade", "2.25"),
                ("Gatorade", "2.25"),
                ("Gatorade", "2.25"),
                ("Gatorade", "2.25"),
            ],
            "9.00",
        );
        assert_eq!(score(&r).unwrap(), 109);
    }

    #[test]
    fn score_is_deterministic() {
        let r = receipt(
            "Target",
            (2022, 1, 1),
            (13, 1),
            &[("Gatorade", "2.25")],
            "2.25",
        );
        let first = score(&r).unwrap();
        for _ in 0..10 {
            assert_eq!(score(&r).unwrap(), first);
        }
    }

    #[test]
    fn empty_items_still_scores() {
        let r = receipt("Target", (2022, 1, 1), (13, 1), &[], "9.00");
        // 6 retailer + 75 total + 6 odd day, no item contributions.
        assert_eq!(score(&r).unwrap(), 87);
    }
}
