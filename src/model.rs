use serde::Deserialize;

/// One multiple-choice question of the knowledge check.
///
/// The bank is immutable after load; `correct` always indexes into
/// `options` (checked once in `data::validate_bank`).
#[derive(Deserialize, Debug, Clone)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
}

/// Per-option display classification, derived from quiz state.
/// Everything is `Neutral` until results are shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionFeedback {
    /// The answer key for its question.
    Correct,
    /// The user's pick, and it was wrong.
    IncorrectSelected,
    Neutral,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
}

/// The notification triple raised after grading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

// ---- Page copy ----
//
// Every visible string of the portal lives in the embedded YAML bank, so
// the views stay layout-only.

#[derive(Deserialize, Debug, Clone)]
pub struct PortalContent {
    pub header: Header,
    pub intro: IntroSection,
    pub mistakes: MistakesSection,
    pub prohibited: ProhibitedSection,
    pub rescuers: RescuersSection,
    pub quiz: QuizSectionText,
    pub hotlines: HotlinesSection,
    pub footer: Footer,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Header {
    pub title: String,
    pub subtitle: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct IntroSection {
    pub icon: String,
    pub title: String,
    /// Markdown; keeps the emphasis of the source text.
    pub lead: String,
    pub callout: Callout,
    pub stats: Vec<StatTile>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Callout {
    pub label: String,
    pub text: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct StatTile {
    pub icon: String,
    pub value: String,
    pub caption: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MistakesSection {
    pub icon: String,
    pub title: String,
    pub items: Vec<Mistake>,
}

/// One entry of the typical-mistakes accordion.
#[derive(Deserialize, Debug, Clone)]
pub struct Mistake {
    pub title: String,
    pub danger_label: String,
    pub danger: String,
    pub advice_label: String,
    pub advice: String,
    pub footnote: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ProhibitedSection {
    pub icon: String,
    pub title: String,
    pub cards: Vec<ProhibitedCard>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ProhibitedCard {
    pub icon: String,
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RescuersSection {
    pub icon: String,
    pub title: String,
    pub card_title: String,
    pub card_subtitle: String,
    pub steps: Vec<RescuerStep>,
    pub callout: InfoCallout,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RescuerStep {
    pub title: String,
    pub text: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct InfoCallout {
    pub title: String,
    /// Markdown body plus a highlighted closing line.
    pub body: String,
    pub emphasis: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct QuizSectionText {
    pub icon: String,
    pub title: String,
    pub card_title: String,
    pub card_subtitle: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct HotlinesSection {
    pub icon: String,
    pub title: String,
    pub numbers: Vec<Hotline>,
    pub advice: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Hotline {
    pub number: String,
    pub label: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Footer {
    pub lines: Vec<String>,
}
