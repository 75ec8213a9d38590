//! Rule-based clothing recommendation.
//!
//! A base tier is picked from the preference-adjusted day high, then
//! independent modifiers (rain, wind, layering) are appended in a fixed
//! order. Both steps are driven by the tables below.

use crate::types::{DailyStats, Icon, Modifier, Preference, Recommendation};

struct ClothingTier {
    /// Inclusive upper bound on the effective high, °C
    max_high: f64,
    clothing: &'static str,
    icon: Icon,
}

/// Ordered coldest first; the first tier whose bound is not exceeded wins.
static CLOTHING_TIERS: [ClothingTier; 4] = [
    ClothingTier {
        max_high: 10.0,
        clothing: "Heavy coat / warm layers",
        icon: Icon::Coat,
    },
    ClothingTier {
        max_high: 17.0,
        clothing: "Jacket / sweater",
        icon: Icon::Coat,
    },
    ClothingTier {
        max_high: 23.0,
        clothing: "Light jacket or long sleeve",
        icon: Icon::Scarf,
    },
    ClothingTier {
        max_high: f64::INFINITY,
        clothing: "Light clothes (T-shirt)",
        icon: Icon::TShirt,
    },
];

/// Inputs a modifier rule may look at
struct Conditions<'a> {
    stats: &'a DailyStats,
    effective_high: f64,
    effective_low: f64,
}

struct ModifierRule {
    text: &'static str,
    icon: Icon,
    applies: fn(&Conditions<'_>) -> bool,
}

pub const RAIN_THRESHOLD_PERCENT: f64 = 50.0;
pub const WIND_THRESHOLD: f64 = 15.0;
pub const LAYERING_SWING: f64 = 4.0;

/// Evaluated in display order: rain, wind, layering.
static MODIFIER_RULES: [ModifierRule; 3] = [
    ModifierRule {
        text: "Bring umbrella or rain jacket",
        icon: Icon::Umbrella,
        applies: |c: &Conditions<'_>| c.stats.max_precipitation >= RAIN_THRESHOLD_PERCENT,
    },
    ModifierRule {
        text: "Windproof layer recommended",
        icon: Icon::Wind,
        applies: |c: &Conditions<'_>| c.stats.max_wind >= WIND_THRESHOLD,
    },
    ModifierRule {
        text: "Layer up — mornings/evenings will be cooler",
        icon: Icon::Scarf,
        applies: |c: &Conditions<'_>| c.effective_low + LAYERING_SWING <= c.effective_high,
    },
];

const CALM_DAY_REASON: &str = "No strong rain or wind expected.";

/// Map daily stats and a preference to a recommendation.
///
/// The preference only shifts the temperatures used for tier and layering
/// decisions; the reasoning always quotes the raw high and low.
pub fn recommend(stats: &DailyStats, pref: Preference) -> Recommendation {
    let offset = pref.offset();
    let conditions = Conditions {
        stats,
        effective_high: stats.high + offset,
        effective_low: stats.low + offset,
    };

    let tier = select_tier(conditions.effective_high);

    let modifiers: Vec<Modifier> = MODIFIER_RULES
        .iter()
        .filter(|rule| (rule.applies)(&conditions))
        .map(|rule| Modifier {
            text: rule.text.to_string(),
            icon: rule.icon,
        })
        .collect();

    let label = if modifiers.is_empty() {
        tier.clothing.to_string()
    } else {
        let glyphs: String = modifiers.iter().map(|m| m.icon.glyph()).collect();
        format!("{} + {}", tier.clothing, glyphs)
    };

    let detail = if modifiers.is_empty() {
        CALM_DAY_REASON.to_string()
    } else {
        modifiers
            .iter()
            .map(|m| m.text.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    };

    let reasoning = format!(
        "Day high {}°C, low {}°C. {}",
        round_half_up(stats.high),
        round_half_up(stats.low),
        detail
    );

    tracing::debug!(
        "Recommendation for {} preference: {} ({} modifiers)",
        pref,
        tier.clothing,
        modifiers.len()
    );

    Recommendation {
        icon: tier.icon,
        label,
        reasoning,
        clothing: tier.clothing.to_string(),
        modifiers,
    }
}

fn select_tier(effective_high: f64) -> &'static ClothingTier {
    CLOTHING_TIERS
        .iter()
        .find(|tier| effective_high <= tier.max_high)
        // NaN compares false everywhere; treat it as the warmest tier
        .unwrap_or(&CLOTHING_TIERS[CLOTHING_TIERS.len() - 1])
}

/// Round to the nearest whole degree, halves towards positive infinity.
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    // the fractional part is exact; adding 0.5 first is not
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(high: f64, low: f64, max_precipitation: f64, max_wind: f64) -> DailyStats {
        DailyStats {
            high,
            low,
            max_precipitation,
            max_wind,
        }
    }

    fn modifier_icons(rec: &Recommendation) -> Vec<Icon> {
        rec.modifiers.iter().map(|m| m.icon).collect()
    }

    #[test]
    fn test_cold_rainy_windy() {
        let rec = recommend(&stats(8.0, 2.0, 80.0, 18.0), Preference::Normal);
        assert_eq!(rec.clothing, "Heavy coat / warm layers");
        assert_eq!(rec.icon, Icon::Coat);
        assert_eq!(
            modifier_icons(&rec),
            vec![Icon::Umbrella, Icon::Wind, Icon::Scarf]
        );
        assert_eq!(rec.label, "Heavy coat / warm layers + ☔💨🧣");
        assert_eq!(
            rec.reasoning,
            "Day high 8°C, low 2°C. Bring umbrella or rain jacket; Windproof layer recommended; \
             Layer up — mornings/evenings will be cooler"
        );
    }

    #[test]
    fn test_warm_dry_still_gets_layering() {
        // swing of 8°C crosses the layering threshold even without rain or wind
        let rec = recommend(&stats(26.0, 18.0, 5.0, 3.0), Preference::Normal);
        assert_eq!(rec.clothing, "Light clothes (T-shirt)");
        assert_eq!(rec.icon, Icon::TShirt);
        assert_eq!(modifier_icons(&rec), vec![Icon::Scarf]);
        assert_eq!(rec.label, "Light clothes (T-shirt) + 🧣");
    }

    #[test]
    fn test_cold_preference_does_not_always_reach_heaviest_tier() {
        let rec = recommend(&stats(16.0, 8.0, 10.0, 4.0), Preference::Cold);
        assert_eq!(rec.clothing, "Jacket / sweater");
        assert_eq!(rec.icon, Icon::Coat);
    }

    #[test]
    fn test_hot_preference_upper_edge_is_inclusive() {
        let rec = recommend(&stats(20.0, 12.0, 10.0, 4.0), Preference::Hot);
        assert_eq!(rec.clothing, "Light jacket or long sleeve");
        assert_eq!(rec.icon, Icon::Scarf);
    }

    #[test]
    fn test_tier_boundaries_belong_to_colder_band() {
        let cases = [
            (10.0, "Heavy coat / warm layers"),
            (10.5, "Jacket / sweater"),
            (17.0, "Jacket / sweater"),
            (17.01, "Light jacket or long sleeve"),
            (23.0, "Light jacket or long sleeve"),
            (23.5, "Light clothes (T-shirt)"),
            (-20.0, "Heavy coat / warm layers"),
            (40.0, "Light clothes (T-shirt)"),
        ];
        for (high, expected) in cases {
            let rec = recommend(&stats(high, high, 0.0, 0.0), Preference::Normal);
            assert_eq!(rec.clothing, expected, "high = {}", high);
        }
    }

    #[test]
    fn test_calm_day_fallback_reason() {
        let rec = recommend(&stats(15.0, 13.0, 10.0, 5.0), Preference::Normal);
        assert!(rec.modifiers.is_empty());
        assert_eq!(rec.label, "Jacket / sweater");
        assert_eq!(
            rec.reasoning,
            "Day high 15°C, low 13°C. No strong rain or wind expected."
        );
    }

    #[test]
    fn test_reasoning_uses_raw_rounded_temperatures() {
        let rec = recommend(&stats(20.5, 17.4, 0.0, 0.0), Preference::Cold);
        assert!(rec.reasoning.starts_with("Day high 21°C, low 17°C."));
    }

    #[test]
    fn test_modifier_thresholds_are_inclusive() {
        let rec = recommend(&stats(15.0, 15.0, 50.0, 15.0), Preference::Normal);
        assert_eq!(modifier_icons(&rec), vec![Icon::Umbrella, Icon::Wind]);

        let rec = recommend(&stats(15.0, 15.0, 49.9, 14.9), Preference::Normal);
        assert!(rec.modifiers.is_empty());
    }

    #[test]
    fn test_layering_swing_boundary() {
        let rec = recommend(&stats(20.0, 16.0, 0.0, 0.0), Preference::Normal);
        assert_eq!(modifier_icons(&rec), vec![Icon::Scarf]);

        let rec = recommend(&stats(20.0, 16.5, 0.0, 0.0), Preference::Normal);
        assert!(rec.modifiers.is_empty());
    }

    #[test]
    fn test_wind_modifier_added_exactly_once() {
        let calm = recommend(&stats(12.0, 11.0, 0.0, 10.0), Preference::Normal);
        let windy = recommend(&stats(12.0, 11.0, 0.0, 30.0), Preference::Normal);

        let count = |rec: &Recommendation| {
            rec.modifiers.iter().filter(|m| m.icon == Icon::Wind).count()
        };
        assert_eq!(count(&calm), 0);
        assert_eq!(count(&windy), 1);
        assert_eq!(windy.modifiers.len(), calm.modifiers.len() + 1);
        assert_eq!(windy.clothing, calm.clothing);
    }

    #[test]
    fn test_cold_preference_never_lighter_than_normal() {
        let tier_rank = |clothing: &str| {
            CLOTHING_TIERS
                .iter()
                .position(|t| t.clothing == clothing)
                .unwrap_or(usize::MAX)
        };

        let mut high = -15.0;
        while high <= 40.0 {
            let s = stats(high, high - 5.0, 0.0, 0.0);
            let cold = recommend(&s, Preference::Cold);
            let normal = recommend(&s, Preference::Normal);
            let hot = recommend(&s, Preference::Hot);
            assert!(tier_rank(&cold.clothing) <= tier_rank(&normal.clothing));
            assert!(tier_rank(&normal.clothing) <= tier_rank(&hot.clothing));
            high += 0.5;
        }
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
        assert_eq!(round_half_up(0.0), 0);
        assert_eq!(round_half_up(-0.5), 0);
    }

    #[test]
    fn test_round_just_below_half() {
        assert_eq!(round_half_up(0.499_999_999_999_999_94), 0);
        assert_eq!(round_half_up(-0.500_000_000_000_000_1), -1);
        assert_eq!(round_half_up(4_503_599_627_370_497.0), 4_503_599_627_370_497);
    }
}
