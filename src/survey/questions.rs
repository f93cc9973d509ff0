//! Fixed question catalog for the assessment form
//!
//! The order here is the order the form presents the yes/no questions,
//! and the `key` of each entry is the exact camelCase field name the
//! prediction service expects in the request body.

/// A single yes/no assessment question.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    /// Wire key in the request payload
    pub key: &'static str,
    /// Prompt shown to the user
    pub prompt: &'static str,
}

/// Options for the yes/no questions.
pub const YES_NO: &[&str] = &["Yes", "No"];

/// Options for the gender profile field.
pub const GENDERS: &[&str] = &["Male", "Female"];

/// Options for the notification-checking frequency question.
pub const FREQUENCIES: &[&str] = &["Never", "Rarely", "Sometimes", "Often"];

/// The sixteen yes/no questions, in form order.
pub const QUESTIONS: [Question; 16] = [
    Question {
        key: "usePhoneForClassNotes",
        prompt: "Do you use your phone to take notes in class?",
    },
    Question {
        key: "buyBooksFromPhone",
        prompt: "Do you buy books from your phone?",
    },
    Question {
        key: "batteryLastsDay",
        prompt: "Does your battery last a full day?",
    },
    Question {
        key: "runForCharger",
        prompt: "Do you run for a charger as soon as the low battery warning appears?",
    },
    Question {
        key: "worryAboutLosingPhone",
        prompt: "Do you worry about losing your phone?",
    },
    Question {
        key: "takePhoneToBathroom",
        prompt: "Do you take your phone to the bathroom?",
    },
    Question {
        key: "usePhoneInSocialGatherings",
        prompt: "Do you use your phone during social gatherings?",
    },
    Question {
        key: "checkPhoneBeforeSleepAfterWaking",
        prompt: "Do you check your phone right before sleeping and right after waking?",
    },
    Question {
        key: "keepPhoneNextToWhileSleeping",
        prompt: "Do you keep your phone next to you while sleeping?",
    },
    Question {
        key: "checkEmailsCallsTextsDuringClass",
        prompt: "Do you check emails, calls or texts during class?",
    },
    Question {
        key: "relyOnPhoneInAwkwardSituations",
        prompt: "Do you rely on your phone in awkward social situations?",
    },
    Question {
        key: "onPhoneWhileWatchingTvEating",
        prompt: "Are you on your phone while watching TV or eating?",
    },
    Question {
        key: "panicAttackIfPhoneLeftElsewhere",
        prompt: "Do you panic when you realize your phone was left somewhere else?",
    },
    Question {
        key: "checkPhoneWithSomeone",
        prompt: "Do you check your phone while in a conversation with someone?",
    },
    Question {
        key: "liveADayWithoutPhone",
        prompt: "Could you live a whole day without your phone?",
    },
    Question {
        key: "addictedToPhone",
        prompt: "Do you consider yourself addicted to your phone?",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_sixteen_unique_keys() {
        let keys: HashSet<&str> = QUESTIONS.iter().map(|q| q.key).collect();
        assert_eq!(keys.len(), 16);
    }

    #[test]
    fn every_question_has_a_prompt() {
        for q in QUESTIONS {
            assert!(!q.prompt.is_empty(), "missing prompt for {}", q.key);
        }
    }
}
