// Case policy and case conversion for candidate words

/// How the loader treats the letter case of base words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CasePolicy {
    /// Keep the word as written plus its lowercase form.
    #[default]
    None,
    /// Like `None`, and additionally the capitalized form: "Pass".
    IncludeUpper,
    /// Only the capitalized form is kept.
    ForceUpper,
}

impl CasePolicy {
    /// Resolve the policy from the two CLI switches.
    ///
    /// Forcing uppercase takes priority when both are given.
    pub fn from_flags(include_upper: bool, force_upper: bool) -> Self {
        match (include_upper, force_upper) {
            (_, true) => CasePolicy::ForceUpper,
            (true, false) => CasePolicy::IncludeUpper,
            (false, false) => CasePolicy::None,
        }
    }

    /// The case forms inserted for every base word, in insertion order.
    pub fn forms(self) -> &'static [CaseForm] {
        match self {
            CasePolicy::None => &[CaseForm::Verbatim, CaseForm::Lower],
            CasePolicy::IncludeUpper => {
                &[CaseForm::Verbatim, CaseForm::Lower, CaseForm::Capitalized]
            }
            CasePolicy::ForceUpper => &[CaseForm::Capitalized],
        }
    }
}

/// One case rendering of a base word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseForm {
    /// The word exactly as read.
    Verbatim,
    /// Every letter lowercased: "pass".
    Lower,
    /// The lowercased word with its first character uppercased: "Pass".
    Capitalized,
}

impl CaseForm {
    /// Render `word` in this form.
    pub fn apply(self, word: &str) -> String {
        match self {
            CaseForm::Verbatim => word.to_string(),
            CaseForm::Lower => lower(word),
            CaseForm::Capitalized => capitalize(&lower(word)),
        }
    }
}

/// Lowercase every character using the full Unicode mapping.
pub fn lower(word: &str) -> String {
    word.to_lowercase()
}

/// Uppercase the first character and lowercase the rest.
///
/// Characters whose uppercase form expands to several characters ("ß" to
/// "SS") keep the full expansion. The empty string stays empty.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
    }
}
