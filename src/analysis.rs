use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::AnagramIndex;
use crate::types::*;

///Maximum number of longest words listed in the report
const MAX_LONGEST_WORDS: usize = 10;

///Statistics for a single character over the whole word list
#[derive(Clone,Debug,Default,PartialEq)]
pub struct CharStats {
    ///Highest number of occurrences within a single word
    pub max: usize,
    ///Total number of occurrences
    pub total: usize,
    ///Number of words containing the character
    pub words: usize,
}

///Letter frequency statistics for a word list, and anagram statistics from its index.
///Useful for choosing the order of the alphabet: letters with a low maximum come first.
#[derive(Clone,Debug)]
pub struct DictionaryReport {
    pub wordcount: usize,
    pub groupcount: usize,
    pub nodecount: usize,
    ///Number of words per length in characters (index = length)
    pub lengths: Vec<usize>,
    pub longest_words: Vec<String>,
    ///Total number of characters over all words
    pub charcount: usize,
    ///Per (lowercased) character statistics
    pub chars: BTreeMap<char, CharStats>,
    ///The anagram groups with the most words
    pub largest_groups: Vec<Leaf>,
}

impl DictionaryReport {
    pub fn new<S: AsRef<str>>(words: &[S], index: &AnagramIndex) -> Self {
        let mut report = Self {
            wordcount: 0,
            groupcount: index.leaf_count(),
            nodecount: index.node_count(),
            lengths: Vec::new(),
            longest_words: Vec::new(),
            charcount: 0,
            chars: BTreeMap::new(),
            largest_groups: Vec::new(),
        };

        let mut maxlength = 0;
        for word in words.iter().map(|word| word.as_ref()) {
            if word.is_empty() {
                continue;
            }
            report.wordcount += 1;
            let length = word.chars().count();
            if report.lengths.len() <= length {
                report.lengths.resize(length + 1, 0);
            }
            report.lengths[length] += 1;
            report.charcount += length;

            if length > maxlength {
                maxlength = length;
                report.longest_words.clear();
                report.longest_words.push(word.to_owned());
            } else if length == maxlength {
                report.longest_words.push(word.to_owned());
            }

            let mut counts: HashMap<char, usize> = HashMap::new();
            for c in word.chars().flat_map(|c| c.to_lowercase()) {
                *counts.entry(c).or_insert(0) += 1;
            }
            for (c, count) in counts {
                let stats = report.chars.entry(c).or_default();
                stats.total += count;
                stats.words += 1;
                if count > stats.max {
                    stats.max = count;
                }
            }
        }

        let maxgroup = index.leaves().iter().map(|leaf| leaf.len()).max().unwrap_or(0);
        if maxgroup > 0 {
            report.largest_groups = index.leaves().iter().filter(|leaf| leaf.len() == maxgroup).cloned().collect();
        }
        report
    }
}

impl fmt::Display for DictionaryReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Words  : {} ({} anagram groups, {} tree nodes)", self.wordcount, self.groupcount, self.nodecount)?;
        writeln!(f)?;
        writeln!(f, "Word lengths:")?;
        for (length, count) in self.lengths.iter().enumerate() {
            writeln!(f, "{:2}: {:8}", length, count)?;
        }
        if self.longest_words.len() > MAX_LONGEST_WORDS {
            writeln!(f, "Longest words: {}...", self.longest_words[..MAX_LONGEST_WORDS].join(", "))?;
        } else {
            writeln!(f, "Longest words: {}", self.longest_words.join(", "))?;
        }
        writeln!(f)?;
        writeln!(f, "Letters: max    total   percent    words   percent")?;
        for (c, stats) in self.chars.iter() {
            let total_percent = if self.charcount > 0 { 100.0 * stats.total as f64 / self.charcount as f64 } else { 0.0 };
            let words_percent = if self.wordcount > 0 { 100.0 * stats.words as f64 / self.wordcount as f64 } else { 0.0 };
            writeln!(f, "  {} {:8} {:8}  ({:5.2}%) {:8}  ({:5.2}%)", c, stats.max, stats.total, total_percent, stats.words, words_percent)?;
        }
        writeln!(f)?;
        writeln!(f, "Most anagrams:")?;
        for leaf in self.largest_groups.iter() {
            writeln!(f, "{}", leaf.join("  "))?;
        }
        Ok(())
    }
}
