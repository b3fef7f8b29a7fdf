//! Canned question table.
//!
//! Common open-house questions are answered from a fixed table so the kiosk
//! stays responsive (and free) for the questions every visitor asks. A hit
//! bypasses the hosted chat API entirely.

/// The school questions shown as quick-question buttons, with their answers.
const QA_PAIRS: &[(&str, &str)] = &[
    ("Who is the principal", "Ms. Anne Yam"),
    ("Who is the vice principal", "Ms. Eleni Gardikiotis"),
    (
        "What subjects do you learn",
        "Math, science, Mandarin, French, coding, arts, Physical education, \
         English language arts, social emotional learning, health and career education",
    ),
    (
        "What are the school hours",
        "8:30 to 3:30 every day, except Wednesday: 8:30 to 2:30",
    ),
    (
        "What sport events do you have",
        "Track and field, soccer, basketball, volleyball, badminton, cross country",
    ),
    (
        "What clubs are there?",
        "Destination Imagination, choir, Afterschool sports, green club, leadership club",
    ),
];

/// Lookup table of canonical questions to precomputed answers.
pub struct FaqTable {
    pairs: &'static [(&'static str, &'static str)],
}

impl FaqTable {
    /// A table backed by the built-in school Q&A pairs.
    pub fn new() -> Self {
        Self { pairs: QA_PAIRS }
    }

    /// Canonical question strings, in table order.
    pub fn questions(&self) -> Vec<&'static str> {
        self.pairs.iter().map(|(q, _)| *q).collect()
    }

    /// Return the canned answer when the question matches a canonical one.
    ///
    /// Matching is forgiving about casing, surrounding whitespace, and a
    /// trailing punctuation mark, so a typed question takes the same fast path
    /// as the button with the same text.
    pub fn lookup(&self, question: &str) -> Option<&'static str> {
        let wanted = normalize(question);
        self.pairs
            .iter()
            .find(|(q, _)| normalize(q) == wanted)
            .map(|(_, a)| *a)
    }

    /// Number of canned questions.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when the table has no questions.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Default for FaqTable {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(question: &str) -> String {
    question
        .trim()
        .trim_end_matches(['?', '!', '.'])
        .trim_end()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn table_has_six_questions_in_order() {
        let faq = FaqTable::new();
        let questions = faq.questions();
        assert_eq!(questions.len(), 6);
        assert_eq!(questions[0], "Who is the principal");
        assert_eq!(questions[5], "What clubs are there?");
    }

    #[rstest]
    #[case("Who is the principal", "Ms. Anne Yam")]
    #[case("who is the principal?", "Ms. Anne Yam")]
    #[case("  What are the school hours  ", "8:30 to 3:30 every day, except Wednesday: 8:30 to 2:30")]
    #[case("what clubs are there", "Destination Imagination, choir, Afterschool sports, green club, leadership club")]
    fn lookup_matches_canonical_questions(#[case] question: &str, #[case] answer: &str) {
        let faq = FaqTable::new();
        assert_eq!(faq.lookup(question), Some(answer));
    }

    #[rstest]
    #[case("What time is lunch")]
    #[case("")]
    #[case("principal")]
    fn lookup_misses_unknown_questions(#[case] question: &str) {
        let faq = FaqTable::new();
        assert_eq!(faq.lookup(question), None);
    }
}
