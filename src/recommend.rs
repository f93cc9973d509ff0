//! Static recommendation lists per risk label
//!
//! The match is exhaustive over [`RiskLabel`]; unknown labels never reach
//! this point because response parsing already rejected them.

use crate::predict::RiskLabel;

const LOW_RISK: &[&str] = &[
    "🎉 Great job! Your phone usage appears healthy and balanced.",
    "📱 Continue maintaining conscious phone usage habits.",
    "⏰ Consider setting specific times for phone-free activities.",
    "🧘 Use mindfulness apps to stay aware of your digital habits.",
    "👥 Keep prioritizing face-to-face social interactions.",
];

const MODERATE_RISK: &[&str] = &[
    "⚠️ Your phone usage shows some concerning patterns that need attention.",
    "📵 Try implementing phone-free zones in your home (bedroom, dining table).",
    "⏰ Set specific times to check messages rather than constantly monitoring.",
    "🔔 Turn off non-essential notifications to reduce checking impulses.",
    "🚶 Replace some phone activities with physical activities or hobbies.",
    "😴 Keep your phone out of the bedroom to improve sleep quality.",
    "📊 Consider using apps that track and limit your screen time.",
];

const HIGH_RISK: &[&str] = &[
    "🚨 Your results indicate high mobile addiction risk requiring immediate action.",
    "📵 Implement immediate digital detox periods (start with 1-2 hours daily).",
    "🔒 Use app blockers and screen time controls to limit access.",
    "😴 Establish a strict no-phone policy 1 hour before bedtime.",
    "🏃 Replace phone activities with physical exercise and outdoor activities.",
    "👥 Seek support from family and friends for accountability.",
    "📚 Engage in offline hobbies like reading, cooking, or crafts.",
    "🧠 Practice mindfulness and meditation to reduce dependency.",
    "👨‍⚕️ Consider professional help if you can't control usage on your own.",
    "📞 Contact a mental health professional if addiction impacts daily life.",
];

/// Recommendation list for a classification
pub fn recommendations(risk: RiskLabel) -> &'static [&'static str] {
    match risk {
        RiskLabel::Low => LOW_RISK,
        RiskLabel::Moderate => MODERATE_RISK,
        RiskLabel::High => HIGH_RISK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_has_recommendations() {
        for risk in [RiskLabel::Low, RiskLabel::Moderate, RiskLabel::High] {
            assert!(!recommendations(risk).is_empty());
        }
    }

    #[test]
    fn high_risk_includes_professional_help() {
        let items = recommendations(RiskLabel::High);
        assert!(items.iter().any(|i| i.contains("professional help")));
        assert!(!items.iter().any(|i| i.contains("Great job")));
    }

    #[test]
    fn low_risk_has_no_detox_items() {
        let items = recommendations(RiskLabel::Low);
        assert!(items.iter().any(|i| i.contains("Great job")));
        assert!(!items.iter().any(|i| i.contains("detox")));
    }
}
