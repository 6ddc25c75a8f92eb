//! Canonical receipt encoding for content-based deduplication.
//!
//! The digest must not be sensitive to incidental serialization differences
//! upstream, so instead of hashing a general-purpose serializer's output we
//! encode the parsed fields explicitly: fixed field order, item order
//! preserved, every field length-prefixed so no value can forge a field
//! boundary. A domain tag separates this hash from any other SHA-256 use.

use crate::types::{Receipt, ReceiptDigest, DATE_FORMAT, TIME_FORMAT};

/// Domain separation tag prepended to every canonical encoding.
pub const RECEIPT_DOMAIN_TAG: &[u8] = b"receipts:Receipt:v1\0";

/// Encode a receipt as deterministic bytes.
///
/// Field order: retailer, date, time, item count, then each item's
/// description and price, then total. Identical parsed field values always
/// canonicalize identically.
pub fn canonical_bytes(receipt: &Receipt) -> Vec<u8> {
    let mut buf = Vec::new();

    push_field(&mut buf, receipt.retailer.as_bytes());
    push_field(
        &mut buf,
        receipt
            .purchase_date
            .format(DATE_FORMAT)
            .to_string()
            .as_bytes(),
    );
    push_field(
        &mut buf,
        receipt
            .purchase_time
            .format(TIME_FORMAT)
            .to_string()
            .as_bytes(),
    );

    buf.extend_from_slice(&(receipt.items.len() as u32).to_be_bytes());
    for item in &receipt.items {
        push_field(&mut buf, item.short_description.as_bytes());
        push_field(&mut buf, item.price.as_bytes());
    }

    push_field(&mut buf, receipt.total.as_bytes());

    buf
}

/// Content digest of a receipt: SHA-256 over the tagged canonical encoding.
pub fn receipt_digest(receipt: &Receipt) -> ReceiptDigest {
    let mut tagged = RECEIPT_DOMAIN_TAG.to_vec();
    tagged.extend_from_slice(&canonical_bytes(receipt));
    ReceiptDigest::sha256(&tagged)
}

fn push_field(buf: &mut Vec<u8>, field: &[u8]) {
    buf.extend_from_slice(&(field.len() as u32).to_be_bytes());
    buf.extend_from_slice(field);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Item, Receipt};
    use chrono::{NaiveDate, NaiveTime};

    fn receipt(retailer: &str, items: &[(&str, &str)], total: &str) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            purchase_time: NaiveTime::from_hms_opt(13, 1, 0).unwrap(),
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
    fn digest_is_deterministic() {
        let a = receipt("Target", &[("Gatorade", "2.25")], "2.25");
        let b = receipt("Target", &[("Gatorade", "2.25")], "2.25");
        assert_eq!(receipt_digest(&a), receipt_digest(&b));
    }

    #[test]
    fn digest_changes_with_any_field() {
        let base = receipt("Target", &[("Gatorade", "2.25")], "2.25");

        let mut other = base.clone();
        other.retailer = "Walmart".to_string();
        assert_ne!(receipt_digest(&base), receipt_digest(&other));

        let mut other = base.clone();
        other.total = "2.50".to_string();
        assert_ne!(receipt_digest(&base), receipt_digest(&other));
    }

    #[test]
    fn item_order_is_significant() {
        let ab = receipt("Target", &[("A", "1.00"), ("B", "2.00")], "3.00");
        let ba = receipt("Target", &[("B", "2.00"), ("A", "1.00")], "3.00");
        assert_ne!(receipt_digest(&ab), receipt_digest(&ba));
    }

    #[test]
    fn field_boundaries_cannot_be_forged() {
        // Shifting a character across an adjacent field boundary must not
        // produce the same encoding.
        let a = receipt("Target", &[("ab", "c")], "1.00");
        let b = receipt("Target", &[("a", "bc")], "1.00");
        assert_ne!(canonical_bytes(&a), canonical_bytes(&b));
        assert_ne!(receipt_digest(&a), receipt_digest(&b));
    }
}
