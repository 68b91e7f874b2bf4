//! Hangul syllable decomposition and Dubeolsik pangram tracking.
//!
//! Precomposed syllables (U+AC00..=U+D7A3) are laid out as
//! `0xAC00 + (lead * 21 + vowel) * 28 + trail`, so decomposition is three
//! integer divisions. Compound vowels and compound finals are then split into
//! the base jamo typed on a Dubeolsik keyboard.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::timer::OneShotTimer;

const SYLLABLE_BASE: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;
const VOWEL_COUNT: u32 = 21;
const TRAIL_COUNT: u32 = 28;

/// How long the completion banner stays up by default.
pub const DEFAULT_CELEBRATION: Duration = Duration::from_secs(3);

/// Initial consonants in Unicode order.
pub const LEADS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// Medial vowels in Unicode order.
pub const VOWELS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Final consonants in Unicode order; index 0 of the encoding means "none"
/// and is not listed.
pub const TRAILS: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ',
    'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

const COMPOUND_VOWELS: [(char, [char; 2]); 7] = [
    ('ㅘ', ['ㅗ', 'ㅏ']),
    ('ㅙ', ['ㅗ', 'ㅐ']),
    ('ㅚ', ['ㅗ', 'ㅣ']),
    ('ㅝ', ['ㅜ', 'ㅓ']),
    ('ㅞ', ['ㅜ', 'ㅔ']),
    ('ㅟ', ['ㅜ', 'ㅣ']),
    ('ㅢ', ['ㅡ', 'ㅣ']),
];

const COMPOUND_FINALS: [(char, [char; 2]); 11] = [
    ('ㄳ', ['ㄱ', 'ㅅ']),
    ('ㄵ', ['ㄴ', 'ㅈ']),
    ('ㄶ', ['ㄴ', 'ㅎ']),
    ('ㄺ', ['ㄹ', 'ㄱ']),
    ('ㄻ', ['ㄹ', 'ㅁ']),
    ('ㄼ', ['ㄹ', 'ㅂ']),
    ('ㄽ', ['ㄹ', 'ㅅ']),
    ('ㄾ', ['ㄹ', 'ㅌ']),
    ('ㄿ', ['ㄹ', 'ㅍ']),
    ('ㅀ', ['ㄹ', 'ㅎ']),
    ('ㅄ', ['ㅂ', 'ㅅ']),
];

/// A decomposed syllable block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    /// Initial consonant
    pub lead: char,
    /// Medial vowel (possibly compound)
    pub vowel: char,
    /// Final consonant (possibly compound), if any
    pub trail: Option<char>,
}

/// Splits a precomposed syllable. Returns `None` for anything else.
///
/// # Examples
///
/// ```
/// use pocketdesk::models::hangul::decompose;
///
/// let syllable = decompose('\u{AC01}').unwrap(); // 각
/// assert_eq!((syllable.lead, syllable.vowel, syllable.trail), ('ㄱ', 'ㅏ', Some('ㄱ')));
/// assert!(decompose('a').is_none());
/// ```
#[must_use]
pub fn decompose(ch: char) -> Option<Syllable> {
    let code = u32::from(ch);
    if !(SYLLABLE_BASE..=SYLLABLE_LAST).contains(&code) {
        return None;
    }

    let offset = code - SYLLABLE_BASE;
    let lead = offset / (VOWEL_COUNT * TRAIL_COUNT);
    let vowel = (offset % (VOWEL_COUNT * TRAIL_COUNT)) / TRAIL_COUNT;
    let trail = offset % TRAIL_COUNT;

    Some(Syllable {
        lead: LEADS[lead as usize],
        vowel: VOWELS[vowel as usize],
        trail: (trail > 0).then(|| TRAILS[trail as usize - 1]),
    })
}

/// Builds a precomposed syllable from its jamo.
///
/// Returns `None` if any part is not valid in its position.
#[must_use]
pub fn compose(lead: char, vowel: char, trail: Option<char>) -> Option<char> {
    let lead = LEADS.iter().position(|&c| c == lead)?;
    let vowel = VOWELS.iter().position(|&c| c == vowel)?;
    let trail = match trail {
        Some(t) => TRAILS.iter().position(|&c| c == t)? + 1,
        None => 0,
    };
    let code = SYLLABLE_BASE as usize
        + (lead * VOWEL_COUNT as usize + vowel) * TRAIL_COUNT as usize
        + trail;
    char::from_u32(u32::try_from(code).ok()?)
}

fn split(table: &[(char, [char; 2])], jamo: char) -> Vec<char> {
    table
        .iter()
        .find(|(compound, _)| *compound == jamo)
        .map_or_else(|| vec![jamo], |(_, parts)| parts.to_vec())
}

/// Splits a compound vowel into its two base vowels; other vowels map to themselves.
#[must_use]
pub fn split_vowel(vowel: char) -> Vec<char> {
    split(&COMPOUND_VOWELS, vowel)
}

/// Splits a compound final into its two consonants; other finals map to themselves.
#[must_use]
pub fn split_final(trail: char) -> Vec<char> {
    split(&COMPOUND_FINALS, trail)
}

/// Every jamo typed to produce `text`, rebuilt from scratch.
///
/// Non-Hangul characters are ignored.
#[must_use]
pub fn used_jamo(text: &str) -> BTreeSet<char> {
    let mut used = BTreeSet::new();
    for syllable in text.chars().filter_map(decompose) {
        used.insert(syllable.lead);
        used.extend(split_vowel(syllable.vowel));
        if let Some(trail) = syllable.trail {
            used.extend(split_final(trail));
        }
    }
    used
}

/// Consonant or vowel key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JamoKind {
    /// Consonant key (left hand)
    Consonant,
    /// Vowel key (right hand)
    Vowel,
}

/// One physical key on the Dubeolsik layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCap {
    /// Jamo typed without shift
    pub base: char,
    /// Jamo typed with shift, if the key has one
    pub shift: Option<char>,
    /// Consonant or vowel
    pub kind: JamoKind,
}

const fn consonant(base: char, shift: Option<char>) -> KeyCap {
    KeyCap {
        base,
        shift,
        kind: JamoKind::Consonant,
    }
}

const fn vowel(base: char, shift: Option<char>) -> KeyCap {
    KeyCap {
        base,
        shift,
        kind: JamoKind::Vowel,
    }
}

/// The three letter rows of the Dubeolsik layout.
pub const DUBEOLSIK: [&[KeyCap]; 3] = [
    &[
        consonant('ㅂ', Some('ㅃ')),
        consonant('ㅈ', Some('ㅉ')),
        consonant('ㄷ', Some('ㄸ')),
        consonant('ㄱ', Some('ㄲ')),
        consonant('ㅅ', Some('ㅆ')),
        vowel('ㅛ', None),
        vowel('ㅕ', None),
        vowel('ㅑ', None),
        vowel('ㅐ', Some('ㅒ')),
        vowel('ㅔ', Some('ㅖ')),
    ],
    &[
        consonant('ㅁ', None),
        consonant('ㄴ', None),
        consonant('ㅇ', None),
        consonant('ㄹ', None),
        consonant('ㅎ', None),
        vowel('ㅗ', None),
        vowel('ㅓ', None),
        vowel('ㅏ', None),
        vowel('ㅣ', None),
    ],
    &[
        consonant('ㅋ', None),
        consonant('ㅌ', None),
        consonant('ㅊ', None),
        consonant('ㅍ', None),
        vowel('ㅠ', None),
        vowel('ㅜ', None),
        vowel('ㅡ', None),
    ],
];

/// The unshifted jamo of every key: the set a pangram has to cover.
pub fn reference_keys() -> impl Iterator<Item = char> {
    DUBEOLSIK.into_iter().flatten().map(|key| key.base)
}

/// Tracks which keys a piece of text uses and celebrates full coverage once.
#[derive(Debug, Clone)]
pub struct PangramTracker {
    text: String,
    used: BTreeSet<char>,
    complete: bool,
    celebration: OneShotTimer,
    celebration_duration: Duration,
}

impl Default for PangramTracker {
    fn default() -> Self {
        Self::new(DEFAULT_CELEBRATION)
    }
}

impl PangramTracker {
    /// Creates an empty tracker whose banner lasts `celebration_duration`.
    #[must_use]
    pub fn new(celebration_duration: Duration) -> Self {
        Self {
            text: String::new(),
            used: BTreeSet::new(),
            complete: false,
            celebration: OneShotTimer::new(),
            celebration_duration,
        }
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Jamo used by the current text.
    #[must_use]
    pub const fn used(&self) -> &BTreeSet<char> {
        &self.used
    }

    /// Whether `jamo` appears in the current text.
    #[must_use]
    pub fn is_used(&self, jamo: char) -> bool {
        self.used.contains(&jamo)
    }

    /// Whether every key has been used.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Whether the completion banner is showing.
    #[must_use]
    pub const fn is_celebrating(&self) -> bool {
        self.celebration.is_pending()
    }

    /// When the banner ends.
    #[must_use]
    pub const fn next_deadline(&self) -> Option<Instant> {
        self.celebration.deadline()
    }

    /// `(used keys, total keys)` over the reference set.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        let total = reference_keys().count();
        let used = reference_keys().filter(|key| self.used.contains(key)).count();
        (used, total)
    }

    /// Replaces the text and recomputes everything from scratch.
    ///
    /// Returns `true` when this change completed the set, which also starts
    /// the banner. Staying complete never fires again; the set must first
    /// become incomplete.
    pub fn set_text(&mut self, text: impl Into<String>, now: Instant) -> bool {
        self.text = text.into();
        self.used = used_jamo(&self.text);

        let was_complete = self.complete;
        self.complete = reference_keys().all(|key| self.used.contains(&key));

        let just_completed = self.complete && !was_complete;
        if just_completed {
            self.celebration.schedule(now, self.celebration_duration);
            info!("pangram completed");
        } else if was_complete && !self.complete {
            debug!("pangram no longer complete");
        }
        just_completed
    }

    /// Appends text (typing or paste).
    pub fn push_str(&mut self, s: &str, now: Instant) -> bool {
        let text = format!("{}{s}", self.text);
        self.set_text(text, now)
    }

    /// Removes the last character.
    pub fn pop_char(&mut self, now: Instant) -> bool {
        let mut text = std::mem::take(&mut self.text);
        text.pop();
        self.set_text(text, now)
    }

    /// Clears the text.
    pub fn clear(&mut self, now: Instant) {
        self.set_text(String::new(), now);
    }

    /// Ends the banner when its time is up. Returns `true` when it ended.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.celebration.fire_if_due(now)
    }

    /// Teardown hook: drops the banner timer.
    pub fn cancel_pending(&mut self) {
        self.celebration.cancel();
    }
}
