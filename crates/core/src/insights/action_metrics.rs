//! Action-record normalization.
//!
//! The upstream action taxonomy is open ended: the same conversion event
//! can appear under several provider-specific labels depending on campaign
//! objective and locale. These helpers collapse that taxonomy into fixed
//! numeric metrics. All of them are total functions - absent records,
//! missing labels and malformed numeric strings read as zero.

use adlens_reporting::ActionRecord;

/// Derived ratios shared by every tier.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ratios {
    pub roas: f64,
    pub cost_per_purchase: f64,
}

/// The numeric value of the first record whose type equals `label`,
/// or `0.0` when the records are absent, empty or without a match.
pub fn lookup(records: Option<&[ActionRecord]>, label: &str) -> f64 {
    records
        .unwrap_or_default()
        .iter()
        .find(|record| record.action_type == label)
        .map(ActionRecord::numeric_value)
        .unwrap_or(0.0)
}

/// Tries each candidate label in priority order and returns the first
/// match's value, or `0.0` when none matches.
pub fn lookup_any(records: Option<&[ActionRecord]>, labels: &[&str]) -> f64 {
    let records = records.unwrap_or_default();
    labels
        .iter()
        .find_map(|label| {
            records
                .iter()
                .find(|record| record.action_type == *label)
                .map(ActionRecord::numeric_value)
        })
        .unwrap_or(0.0)
}

/// Zero-guarded ratio derivation.
///
/// This is the only place ROAS and cost-per-purchase are computed; the
/// account tier, every campaign row and the drill-down summary all go
/// through it so the formulas cannot diverge between views.
pub fn derive_ratios(spend: f64, purchases: f64, purchase_value: f64) -> Ratios {
    Ratios {
        roas: if spend > 0.0 {
            purchase_value / spend
        } else {
            0.0
        },
        cost_per_purchase: if purchases > 0.0 {
            spend / purchases
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(action_type: &str, value: &str) -> ActionRecord {
        ActionRecord {
            action_type: action_type.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn lookup_absent_records_is_zero() {
        assert_eq!(lookup(None, "purchase"), 0.0);
    }

    #[test]
    fn lookup_empty_records_is_zero() {
        assert_eq!(lookup(Some(&[]), "purchase"), 0.0);
    }

    #[test]
    fn lookup_finds_matching_record() {
        let records = [record("purchase", "12.5")];
        assert_eq!(lookup(Some(&records), "purchase"), 12.5);
    }

    #[test]
    fn lookup_missing_label_is_zero() {
        let records = [record("purchase", "12.5"), record("add_to_cart", "3")];
        assert_eq!(lookup(Some(&records), "leads"), 0.0);
    }

    #[test]
    fn lookup_takes_first_match() {
        let records = [record("purchase", "2"), record("purchase", "9")];
        assert_eq!(lookup(Some(&records), "purchase"), 2.0);
    }

    #[test]
    fn lookup_malformed_value_is_zero() {
        let records = [record("purchase", "not-a-number")];
        assert_eq!(lookup(Some(&records), "purchase"), 0.0);
    }

    #[test]
    fn lookup_any_respects_priority_order() {
        let records = [
            record("offsite_conversion.fb_pixel_purchase", "7"),
            record("purchase", "3"),
        ];
        assert_eq!(
            lookup_any(
                Some(&records),
                &["purchase", "offsite_conversion.fb_pixel_purchase"]
            ),
            3.0
        );
    }

    #[test]
    fn lookup_any_falls_through_to_later_candidates() {
        let records = [record("onsite_conversion.messaging_conversation_started_7d", "4")];
        assert_eq!(
            lookup_any(
                Some(&records),
                &["lead", "onsite_conversion.messaging_conversation_started_7d"]
            ),
            4.0
        );
    }

    #[test]
    fn lookup_any_no_match_is_zero() {
        let records = [record("purchase", "3")];
        assert_eq!(lookup_any(Some(&records), &["lead", "on_facebook_lead"]), 0.0);
    }

    #[test]
    fn ratios_zero_spend_are_zero() {
        let ratios = derive_ratios(0.0, 10.0, 9999.0);
        assert_eq!(ratios.roas, 0.0);
        assert_eq!(ratios.cost_per_purchase, 0.0);
    }

    #[test]
    fn ratios_zero_purchases_zero_cost_per_purchase() {
        let ratios = derive_ratios(100.0, 0.0, 0.0);
        assert_eq!(ratios.roas, 0.0);
        assert_eq!(ratios.cost_per_purchase, 0.0);
    }

    #[test]
    fn ratios_exact_formulas() {
        let ratios = derive_ratios(200.0, 8.0, 500.0);
        assert!((ratios.roas - 2.5).abs() < f64::EPSILON);
        assert!((ratios.cost_per_purchase - 25.0).abs() < f64::EPSILON);
    }
}
