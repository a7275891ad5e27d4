//! Weekday-code decoding ("MWF", "TuTh", "MTuWThF").

use chrono::Weekday;
use std::collections::BTreeMap;

/// Lookup table from day-code token to weekday.
///
/// Decoding is longest-match-first: at each position the longest token in the
/// table is tried first, down to single characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCodeTable {
    codes: BTreeMap<String, Weekday>,
    max_len: usize,
}

impl Default for DayCodeTable {
    fn default() -> Self {
        Self::new(default_day_codes())
    }
}

pub fn default_day_codes() -> BTreeMap<String, Weekday> {
    BTreeMap::from([
        ("M".to_string(), Weekday::Mon),
        ("Tu".to_string(), Weekday::Tue),
        ("W".to_string(), Weekday::Wed),
        ("Th".to_string(), Weekday::Thu),
        ("F".to_string(), Weekday::Fri),
    ])
}

impl DayCodeTable {
    pub fn new(codes: BTreeMap<String, Weekday>) -> Self {
        let max_len = codes.keys().map(|k| k.chars().count()).max().unwrap_or(1);
        Self { codes, max_len }
    }

    /// Decode a compact code left to right. Unknown characters are skipped.
    pub fn weekday_indices(&self, code: &str) -> Vec<Weekday> {
        let chars: Vec<char> = code.chars().collect();
        let mut out = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let longest = self.max_len.min(chars.len() - i);
            let hit = (1..=longest).rev().find_map(|len| {
                let token: String = chars[i..i + len].iter().collect();
                self.codes.get(&token).map(|wd| (*wd, len))
            });

            match hit {
                Some((wd, len)) => {
                    out.push(wd);
                    i += len;
                }
                None => i += 1,
            }
        }

        out
    }

    /// Reverse lookup, preferring the shortest token (used for display).
    pub fn code_for(&self, weekday: Weekday) -> Option<&str> {
        self.codes
            .iter()
            .filter(|(_, wd)| **wd == weekday)
            .map(|(code, _)| code.as_str())
            .min_by_key(|code| code.len())
    }
}

/// Decode with the standard WebReg table.
pub fn weekday_indices(code: &str) -> Vec<Weekday> {
    DayCodeTable::default().weekday_indices(code)
}

/// Monday = 0 ... Sunday = 6.
pub fn weekday_index(wd: Weekday) -> u32 {
    wd.num_days_from_monday()
}
