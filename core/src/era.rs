//! Era classification for selected years.
//!
//! Years are bucketed by their distance from [`PRESENT_YEAR`] into a display
//! era (badge + one-line description) shown above the slider.

/// The app's notion of "now". Year math on both travel directions is
/// relative to this.
pub const PRESENT_YEAR: i32 = 2025;

/// Display era for a selected year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraInfo {
    pub era: &'static str,
    pub description: &'static str,
}

/// Era bucket for a year in the past flow.
pub fn past_era(year: i32) -> EraInfo {
    let diff = PRESENT_YEAR - year;
    if diff > 1000 {
        EraInfo { era: "Ancient Times", description: "Dawn of civilizations" }
    } else if diff > 500 {
        EraInfo { era: "Medieval Period", description: "Age of kingdoms and empires" }
    } else if diff > 200 {
        EraInfo { era: "Early Modern", description: "Renaissance and exploration" }
    } else if diff > 100 {
        EraInfo { era: "Industrial Age", description: "Steam, steel, and progress" }
    } else if diff > 50 {
        EraInfo { era: "Modern Era", description: "Technology revolution begins" }
    } else {
        EraInfo { era: "Recent Past", description: "Digital age emergence" }
    }
}

/// Era bucket for a year in the future flow.
pub fn future_era(year: i32) -> EraInfo {
    let diff = year - PRESENT_YEAR;
    if diff <= 25 {
        EraInfo { era: "Near Future", description: "Sustainable tech & smart cities" }
    } else if diff <= 50 {
        EraInfo { era: "Mid Century", description: "AI integration & climate adaptation" }
    } else if diff <= 100 {
        EraInfo { era: "Late Century", description: "Space colonization era" }
    } else if diff <= 200 {
        EraInfo { era: "22nd Century", description: "Transhuman civilization" }
    } else {
        EraInfo { era: "Far Future", description: "Beyond imagination" }
    }
}

/// Era qualifier woven into past generation prompts.
pub(crate) fn past_qualifier(year: i32) -> &'static str {
    let diff = PRESENT_YEAR - year;
    if diff > 500 {
        "ancient"
    } else if diff > 200 {
        "historical"
    } else if diff > 100 {
        "vintage"
    } else {
        "recent past"
    }
}

/// Era qualifier woven into future generation prompts.
pub(crate) fn future_qualifier(year: i32) -> &'static str {
    let diff = year - PRESENT_YEAR;
    if diff > 100 {
        "far future"
    } else if diff > 50 {
        "advanced future"
    } else {
        "near future"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn past_era_buckets() {
        assert_eq!(past_era(900).era, "Ancient Times");
        assert_eq!(past_era(1400).era, "Medieval Period");
        assert_eq!(past_era(1700).era, "Early Modern");
        assert_eq!(past_era(1900).era, "Industrial Age");
        assert_eq!(past_era(1970).era, "Modern Era");
        assert_eq!(past_era(2020).era, "Recent Past");
    }

    #[test]
    fn future_era_buckets() {
        assert_eq!(future_era(2040).era, "Near Future");
        assert_eq!(future_era(2070).era, "Mid Century");
        assert_eq!(future_era(2120).era, "Late Century");
        assert_eq!(future_era(2200).era, "22nd Century");
        assert_eq!(future_era(2400).era, "Far Future");
    }

    #[test]
    fn prompt_qualifiers_switch_at_the_documented_distances() {
        assert_eq!(past_qualifier(1500), "ancient");
        assert_eq!(past_qualifier(1800), "historical");
        assert_eq!(past_qualifier(1910), "vintage");
        assert_eq!(past_qualifier(2000), "recent past");

        assert_eq!(future_qualifier(2200), "far future");
        assert_eq!(future_qualifier(2090), "advanced future");
        assert_eq!(future_qualifier(2040), "near future");
    }
}
