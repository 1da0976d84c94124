//! Practice question generation and grading.
//!
//! Two stages mirror how the Major System is learned: single digit to
//! consonant sound (either direction), then two-digit number to mnemonic
//! word. Generation takes the RNG as a parameter so sessions are seedable
//! in tests; grading is pure.

use rand::Rng;

use crate::matcher;
use crate::table;

/// Practice stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Stage {
    /// Stage 1: single digit to consonant sound.
    Sounds,
    /// Stage 2: two-digit number to mnemonic word.
    Words,
}

impl Stage {
    /// Returns the stage as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sounds => "sounds",
            Self::Words => "words",
        }
    }
}

/// Direction of a stage-1 sound drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SoundDrillMode {
    /// Show a digit, ask for a sound letter.
    #[default]
    DigitToSound,
    /// Show a sound label, ask for the digit.
    SoundToDigit,
}

/// One practice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    /// Which sound stands for this digit?
    DigitToSound {
        /// The digit shown to the user.
        digit: u8,
    },
    /// Which digit does this sound stand for?
    SoundToDigit {
        /// The digit the sound belongs to.
        digit: u8,
        /// The sound label shown to the user.
        sound: &'static str,
    },
    /// Name a word that encodes this number.
    NumberToWord {
        /// The two-digit target, leading zero preserved.
        number: String,
    },
}

/// The outcome of grading one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the answer was accepted.
    pub correct: bool,
    /// Human-readable description of accepted answers, for feedback.
    pub expected: String,
}

impl Question {
    /// The text shown to the user.
    pub fn prompt(&self) -> String {
        match self {
            Self::DigitToSound { digit } => {
                format!("Digit: {digit} — enter a sound letter")
            }
            Self::SoundToDigit { sound, .. } => {
                format!("Sound: {sound} — enter the digit (0-9)")
            }
            Self::NumberToWord { number } => {
                format!("Number: {number} — enter a word that encodes it")
            }
        }
    }

    /// The progress key this question tallies under.
    pub fn stat_key(&self) -> String {
        match self {
            Self::DigitToSound { digit } | Self::SoundToDigit { digit, .. } => {
                format!("digit:{digit}")
            }
            Self::NumberToWord { number } => format!("number:{number}"),
        }
    }

    /// Grade a user answer. Pure; leading/trailing whitespace is forgiven.
    pub fn grade(&self, answer: &str) -> Verdict {
        let answer = answer.trim();
        match self {
            Self::DigitToSound { digit } => {
                let sounds = table::rule_for(*digit).map_or(&[][..], |r| r.sounds);
                let correct = answer.chars().next().is_some_and(|first| {
                    answer.chars().count() == 1
                        && sounds
                            .iter()
                            .any(|s| table::trigger_letter(s) == first.to_ascii_uppercase())
                });
                Verdict {
                    correct,
                    expected: format!("accepted letters: {}", sounds.join(", ")),
                }
            }
            Self::SoundToDigit { digit, .. } => Verdict {
                correct: answer == digit.to_string(),
                expected: format!("the digit is {digit}"),
            },
            Self::NumberToWord { number } => Verdict {
                correct: !answer.is_empty() && matcher::matches(number, answer),
                expected: format!("any word whose encoding contains {number} in order"),
            },
        }
    }
}

/// Generate a stage-1 question.
pub fn sound_question<R: Rng + ?Sized>(rng: &mut R, mode: SoundDrillMode) -> Question {
    let rule = &table::MAJOR_SYSTEM[rng.gen_range(0..table::MAJOR_SYSTEM.len())];
    match mode {
        SoundDrillMode::DigitToSound => Question::DigitToSound { digit: rule.digit },
        SoundDrillMode::SoundToDigit => Question::SoundToDigit {
            digit: rule.digit,
            sound: rule.sounds[rng.gen_range(0..rule.sounds.len())],
        },
    }
}

/// Generate a stage-2 question: a two-digit target `"00"`-`"99"`.
///
/// The leading zero is preserved; `"07"` is a different target than `"7"`.
pub fn word_question<R: Rng + ?Sized>(rng: &mut R) -> Question {
    Question::NumberToWord {
        number: format!("{:02}", rng.gen_range(0..100u8)),
    }
}
