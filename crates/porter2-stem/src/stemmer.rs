//! Step orchestration and the public `stem` entry point.
//!
//! A word goes through pre-processing (apostrophe, `Y` marking, regions),
//! then steps 0, 1a, 1b, 1c, 2, 3 and 4 in that order. The Snowball variant
//! adds the exceptional word lists and step 5.

use serde::Serialize;
use tracing::debug;

use porter2_core::{StemmerConfig, Variant};

use crate::buffer::WordBuffer;
use crate::region::{is_vowel, Region, Regions};
use crate::rules::{self, Rule};
use crate::syllable;

/// Whole words with a fixed stem. Checked before any step.
const EXCEPTIONAL_FORMS: &[(&str, &str)] = &[
    ("skis", "ski"),
    ("skies", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("idly", "idl"),
    ("gently", "gentl"),
    ("ugly", "ugli"),
    ("early", "earli"),
    ("only", "onli"),
    ("singly", "singl"),
    ("sky", "sky"),
    ("news", "news"),
    ("howe", "howe"),
    ("atlas", "atlas"),
    ("cosmos", "cosmos"),
    ("bias", "bias"),
    ("andes", "andes"),
];

/// Words left as they are once step 1a is done.
const INVARIANT_AFTER_1A: &[&str] = &[
    "inning", "outing", "canning", "herring", "earring", "proceed", "exceed", "succeed",
];

/// Processing stage, as reported in a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Prelude,
    Step0,
    Step1a,
    Step1b,
    Step1c,
    Step2,
    Step3,
    Step4,
    Step5,
}

/// The word's state after one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepSnapshot {
    pub step: Step,
    pub word: String,
    pub r1: usize,
    pub r2: usize,
}

/// A stem together with the state after every stage that ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StemTrace {
    pub input: String,
    pub stem: String,
    pub steps: Vec<StepSnapshot>,
}

/// Collects snapshots and mirrors them to `tracing` when asked to.
struct Recorder {
    emit: bool,
    steps: Option<Vec<StepSnapshot>>,
}

impl Recorder {
    fn new(emit: bool, collect: bool) -> Self {
        Self {
            emit,
            steps: collect.then(Vec::new),
        }
    }

    fn record(&mut self, step: Step, word: &str, regions: Regions) {
        if self.emit {
            debug!(
                target: "porter2::trace",
                step = ?step,
                word,
                r1 = regions.r1,
                r2 = regions.r2,
                "after {:?}",
                step
            );
        }
        if let Some(steps) = self.steps.as_mut() {
            steps.push(StepSnapshot {
                step,
                word: word.to_string(),
                r1: regions.r1,
                r2: regions.r2,
            });
        }
    }

    fn snapshot(&mut self, step: Step, word: &WordBuffer) {
        if self.emit || self.steps.is_some() {
            self.record(step, word.as_str(), word.regions());
        }
    }

    fn into_steps(self) -> Vec<StepSnapshot> {
        self.steps.unwrap_or_default()
    }
}

/// A configured stemmer. Holds no per-word state; share it freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stemmer {
    config: StemmerConfig,
}

impl Stemmer {
    pub fn new(config: StemmerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StemmerConfig {
        &self.config
    }

    /// Stem one token. Never fails; unmatched rules leave the word as it is.
    pub fn stem(&self, word: &str) -> String {
        let mut recorder = Recorder::new(self.config.trace, false);
        self.run(word, &mut recorder)
    }

    /// Stem one token and return the state after every stage.
    pub fn stem_traced(&self, word: &str) -> StemTrace {
        let mut recorder = Recorder::new(self.config.trace, true);
        let stem = self.run(word, &mut recorder);
        StemTrace {
            input: word.to_string(),
            stem,
            steps: recorder.into_steps(),
        }
    }

    fn run(&self, raw: &str, recorder: &mut Recorder) -> String {
        let snowball = self.config.variant == Variant::Snowball;

        // Two letters or less: leave it as it is.
        if raw.chars().count() <= 2 {
            recorder.record(Step::Prelude, raw, Regions::of(raw));
            return raw.to_string();
        }

        if snowball {
            if let Some(&(_, fixed)) = EXCEPTIONAL_FORMS.iter().find(|(form, _)| *form == raw) {
                recorder.record(Step::Prelude, fixed, Regions::of(fixed));
                return fixed.to_string();
            }
        }

        let mut word = WordBuffer::new(prepare(raw), self.config.regions);
        recorder.snapshot(Step::Prelude, &word);

        rules::apply_table(rules::STEP0, &mut word);
        recorder.snapshot(Step::Step0, &word);

        rules::apply_table(rules::STEP1A, &mut word);
        recorder.snapshot(Step::Step1a, &word);

        if snowball && INVARIANT_AFTER_1A.contains(&word.as_str()) {
            word.unmark_y();
            return word.into_string();
        }

        rules::apply_table(rules::STEP1B, &mut word);
        recorder.snapshot(Step::Step1b, &word);

        step1c(&mut word);
        recorder.snapshot(Step::Step1c, &word);

        rules::apply_table(rules::STEP2, &mut word);
        recorder.snapshot(Step::Step2, &word);

        rules::apply_table(step3_table(self.config.variant), &mut word);
        recorder.snapshot(Step::Step3, &word);

        rules::apply_table(step4_table(self.config.variant), &mut word);
        recorder.snapshot(Step::Step4, &word);

        if snowball {
            step5(&mut word);
            recorder.snapshot(Step::Step5, &word);
            word.unmark_y();
        }

        word.into_string()
    }
}

fn step3_table(variant: Variant) -> &'static [Rule] {
    match variant {
        Variant::Distilled => rules::STEP3,
        Variant::Snowball => rules::STEP3_SNOWBALL,
    }
}

fn step4_table(variant: Variant) -> &'static [Rule] {
    match variant {
        Variant::Distilled => rules::STEP4,
        Variant::Snowball => rules::STEP4_SNOWBALL,
    }
}

/// Drop one leading apostrophe, then mark `y` as `Y` at the start of the
/// word and after a vowel. Marking runs left to right, so a `y` that follows
/// a freshly marked `Y` stays lowercase, while a `y` after an unmarked `y`
/// counts as following a vowel and is marked.
pub fn prepare(raw: &str) -> String {
    let word = raw.strip_prefix('\'').unwrap_or(raw);
    let mut out = String::with_capacity(word.len());
    let mut prev: Option<char> = None;
    for c in word.chars() {
        let c = if c == 'y' && prev.map_or(true, is_vowel) {
            'Y'
        } else {
            c
        };
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Step 1c: a final `y` or `Y` after a non-vowel that is not the first
/// letter becomes `i`.
fn step1c(word: &mut WordBuffer) {
    let mut chars = word.as_str().chars().rev();
    let (Some(last), Some(before)) = (chars.next(), chars.next()) else {
        return;
    };
    let not_first = chars.next().is_some();
    if matches!(last, 'y' | 'Y') && !is_vowel(before) && not_first {
        word.replace_suffix(1, "i");
    }
}

/// Step 5: final `e` goes if in R2, or in R1 and not after a short syllable;
/// final `l` goes if in R2 and after another `l`.
fn step5(word: &mut WordBuffer) {
    match word.last_char() {
        Some('e') => {
            let pos = word.len() - 1;
            let regions = word.regions();
            let in_r2 = pos >= regions.r2;
            let in_r1 = pos >= regions.r1;
            if in_r2 || (in_r1 && !syllable::ends_in_short_syllable(word.stem_before(1))) {
                word.pop();
            }
        }
        Some('l') => {
            if word.suffix_in(Region::R2, "l") && word.stem_before(1).ends_with('l') {
                word.pop();
            }
        }
        _ => {}
    }
}

/// Stem with the default configuration.
pub fn stem(word: &str) -> String {
    Stemmer::default().stem(word)
}

/// Stem with an explicit configuration.
pub fn stem_with(word: &str, config: &StemmerConfig) -> String {
    Stemmer::new(*config).stem(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use porter2_core::RegionMode;

    fn snowball() -> Stemmer {
        Stemmer::new(StemmerConfig {
            variant: Variant::Snowball,
            ..StemmerConfig::default()
        })
    }

    #[test]
    fn test_documented_scenarios() {
        assert_eq!(stem("caresses"), "caress");
        assert_eq!(stem("ties"), "tie");
        assert_eq!(stem("cats"), "cat");
        assert_eq!(stem("feed"), "feed");
        assert_eq!(stem("agreed"), "agree");
        assert_eq!(stem("plastered"), "plaster");
        assert_eq!(stem("motoring"), "motor");
    }

    #[test]
    fn test_short_words_untouched() {
        for word in ["", "a", "is", "'s", "''", "by", "A!"] {
            assert_eq!(stem(word), word);
        }
    }

    #[test]
    fn test_prepare() {
        assert_eq!(prepare("'youth"), "Youth");
        assert_eq!(prepare("saying"), "saYing");
        assert_eq!(prepare("ayy"), "aYy");
        assert_eq!(prepare("ayyy"), "aYyY");
        assert_eq!(prepare("''s"), "'s");
        assert_eq!(prepare("cry"), "cry");
    }

    #[test]
    fn test_step1c() {
        assert_eq!(stem("cry"), "cri");
        assert_eq!(stem("happy"), "happi");
        // y after a vowel was marked and stays marked.
        assert_eq!(stem("say"), "saY");
        assert_eq!(stem("toy"), "toY");
    }

    #[test]
    fn test_derivational_steps() {
        assert_eq!(stem("relational"), "relate");
        assert_eq!(stem("generalization"), "general");
        assert_eq!(stem("hopeful"), "hope");
        assert_eq!(stem("goodness"), "good");
        assert_eq!(stem("effective"), "effect");
        assert_eq!(stem("national"), "nation");
        assert_eq!(stem("conditional"), "condition");
        assert_eq!(stem("adoption"), "adop");
    }

    #[test]
    fn test_snowball_variant() {
        let stemmer = snowball();
        assert_eq!(stemmer.stem("agreed"), "agre");
        assert_eq!(stemmer.stem("relational"), "relat");
        assert_eq!(stemmer.stem("conditional"), "condit");
        assert_eq!(stemmer.stem("adoption"), "adopt");
        assert_eq!(stemmer.stem("say"), "say");
        assert_eq!(stemmer.stem("skies"), "sky");
        assert_eq!(stemmer.stem("news"), "news");
        assert_eq!(stemmer.stem("succeed"), "succeed");
        assert_eq!(stemmer.stem("hopeful"), "hope");
    }

    #[test]
    fn test_trace_records_each_step() {
        let trace = Stemmer::default().stem_traced("motoring");
        assert_eq!(trace.stem, "motor");
        let steps: Vec<Step> = trace.steps.iter().map(|s| s.step).collect();
        assert_eq!(
            steps,
            vec![
                Step::Prelude,
                Step::Step0,
                Step::Step1a,
                Step::Step1b,
                Step::Step1c,
                Step::Step2,
                Step::Step3,
                Step::Step4,
            ]
        );
        assert_eq!(trace.steps[3].word, "motor");
        for snapshot in &trace.steps {
            assert!(snapshot.r1 <= snapshot.r2 && snapshot.r2 <= snapshot.word.len());
        }
    }

    #[test]
    fn test_trace_does_not_change_result() {
        let traced = Stemmer::new(StemmerConfig::traced());
        for word in ["caresses", "generalization", "say", "x", ""] {
            assert_eq!(traced.stem(word), stem(word));
            assert_eq!(traced.stem_traced(word).stem, stem(word));
        }
    }

    #[test]
    fn test_region_modes_agree_on_vocabulary() {
        let recompute = StemmerConfig {
            regions: RegionMode::Recompute,
            ..StemmerConfig::default()
        };
        for word in [
            "caresses", "ponies", "hoping", "hopping", "generalization", "relational",
            "effective", "happily", "motoring", "plastered", "agreed", "feed",
        ] {
            assert_eq!(stem_with(word, &recompute), stem(word), "{}", word);
        }
    }

    #[test]
    fn test_total_on_odd_input() {
        for word in ["'''", "!!!", "123", "???s", "naïve", "\u{1F600}ing", "'s'"] {
            let _ = stem(word);
            let _ = snowball().stem(word);
        }
        assert_eq!(stem("'''"), "'");
        // Leading apostrophe goes first, then the trailing one in step 0.
        assert_eq!(stem("'s'"), "s");
    }
}
