//! Priority suggestion from report text.

use civicwatch_common::Priority;

/// Keywords that push a report toward High priority.
const HIGH_URGENCY_TERMS: &[&str] = &[
    "emergency", "urgent", "dangerous", "hazard", "accident", "injury",
    "severe", "critical", "immediate", "life-threatening", "major",
];

/// Keywords that push a report toward Low priority.
const LOW_URGENCY_TERMS: &[&str] = &[
    "minor", "small", "cosmetic", "aesthetic", "non-urgent", "eventually",
];

/// Suggest a priority tier from a report's title and description.
///
/// Distinct keyword presence is counted per set (occurrences don't stack),
/// then rules apply in order:
/// - 2+ high-urgency terms → High
/// - else 2+ low-urgency terms → Low
/// - else more high than low → High
/// - else more low than high → Low
/// - else → Medium
///
/// The first two rules outrank the comparison: a report with two high terms
/// stays High even when low terms outnumber them. Keywords are matched as
/// substrings, so "non-urgent" also registers its embedded "urgent".
///
/// The suggestion is advisory only; it never overrides the submitter's
/// explicit selection.
pub fn suggest_priority(title: &str, description: &str) -> Priority {
    let text = format!("{title} {description}").to_lowercase();

    let high_count = HIGH_URGENCY_TERMS
        .iter()
        .filter(|term| text.contains(*term))
        .count();
    let low_count = LOW_URGENCY_TERMS
        .iter()
        .filter(|term| text.contains(*term))
        .count();

    if high_count >= 2 {
        Priority::High
    } else if low_count >= 2 {
        Priority::Low
    } else if high_count > low_count {
        Priority::High
    } else if low_count > high_count {
        Priority::Low
    } else {
        Priority::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiple_high_terms_suggest_high() {
        // emergency, dangerous, hazard, immediate
        let p = suggest_priority("Emergency", "Dangerous hazard, immediate attention needed");
        assert_eq!(p, Priority::High);
    }

    #[test]
    fn multiple_low_terms_suggest_low() {
        // minor, small, cosmetic
        let p = suggest_priority("Minor issue", "Small cosmetic problem");
        assert_eq!(p, Priority::Low);
    }

    #[test]
    fn empty_text_suggests_medium() {
        assert_eq!(suggest_priority("", ""), Priority::Medium);
    }

    #[test]
    fn no_keywords_suggest_medium() {
        let p = suggest_priority("Pothole", "There is a pothole on Main Street");
        assert_eq!(p, Priority::Medium);
    }

    #[test]
    fn single_high_term_wins_comparison() {
        let p = suggest_priority("Dangerous pothole", "It keeps growing");
        assert_eq!(p, Priority::High);
    }

    #[test]
    fn single_low_term_wins_comparison() {
        let p = suggest_priority("Cosmetic damage", "Paint peeling on the railing");
        assert_eq!(p, Priority::Low);
    }

    #[test]
    fn two_high_terms_outrank_three_low_terms() {
        // Rule order: high >= 2 fires before the low >= 2 and comparison rules
        let p = suggest_priority(
            "Dangerous hazard",
            "A minor, small, cosmetic issue that is still dangerous",
        );
        assert_eq!(p, Priority::High);
    }

    #[test]
    fn non_urgent_registers_in_both_sets() {
        // "non-urgent" contains "urgent": one high, one low, tie -> Medium
        let p = suggest_priority("Fence repair", "Non-urgent fix");
        assert_eq!(p, Priority::Medium);
    }

    #[test]
    fn keyword_case_is_ignored() {
        let p = suggest_priority("URGENT", "CRITICAL failure of the water main");
        assert_eq!(p, Priority::High);
    }

    #[test]
    fn repeated_keyword_counts_once() {
        // "urgent" repeated is still one high term, comparison rule applies
        let p = suggest_priority("Urgent urgent urgent", "");
        assert_eq!(p, Priority::High);
    }
}
