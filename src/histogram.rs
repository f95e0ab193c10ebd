use std::ops::{Deref, DerefMut};

use crate::types::*;
use crate::alphabet::Alphabet;

///Counts how often every letter of the alphabet occurs in a word,
///the last entry counts characters that are not in the alphabet.
///Two words are anagrams of each other if and only if their histograms are equal.
#[derive(Clone,Debug,Default,PartialEq,Eq,Hash)]
pub struct Histogram(Vec<CountType>);

impl Histogram {
    ///An empty histogram for an alphabet of the given size (including the unknown position)
    pub fn new(size: usize) -> Self {
        Self(vec![0; size])
    }

    ///Total number of characters
    pub fn char_count(&self) -> usize {
        self.0.iter().map(|count| *count as usize).sum()
    }

    ///Resets all counts to zero
    pub fn clear(&mut self) {
        for count in self.0.iter_mut() {
            *count = 0;
        }
    }

    ///Tests whether every count in this histogram is at most the corresponding count in `other`,
    ///i.e. whether this word can be spelled with the letters of the other.
    pub fn is_subset_of(&self, other: &Histogram) -> bool {
        self.0.len() == other.0.len() && self.0.iter().zip(other.0.iter()).all(|(a, b)| a <= b)
    }

    ///Tests whether all counts are zero
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|count| *count == 0)
    }

    pub fn insert(&mut self, index: CharIndexType) {
        self.0[index as usize] += 1;
    }

    ///Removes one occurrence, counts never drop below zero
    pub fn remove(&mut self, index: CharIndexType) {
        let count = &mut self.0[index as usize];
        *count = count.saturating_sub(1);
    }
}

impl Deref for Histogram {
    type Target = [CountType];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Histogram {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

///Trait for objects that can be counted into a histogram (string-like)
pub trait Histogrammable {
    fn histogram(&self, alphabet: &Alphabet) -> Histogram;
    fn add_to_histogram(&self, alphabet: &Alphabet, histogram: &mut Histogram);
    fn remove_from_histogram(&self, alphabet: &Alphabet, histogram: &mut Histogram);
}

impl Histogrammable for str {
    ///Compute the histogram for a given string, according to the alphabet
    ///
    /// # Examples
    ///
    /// ```
    /// # use anatree::*;
    /// let alphabet = Alphabet::new("abc").expect("valid alphabet");
    /// let histogram = "Abba!".histogram(&alphabet);
    /// assert_eq!(&histogram[..], &[2, 2, 0, 1]);
    /// ```
    fn histogram(&self, alphabet: &Alphabet) -> Histogram {
        let mut histogram = Histogram::new(alphabet.size());
        self.add_to_histogram(alphabet, &mut histogram);
        histogram
    }

    ///Add all characters of the string to an existing histogram
    fn add_to_histogram(&self, alphabet: &Alphabet, histogram: &mut Histogram) {
        for c in self.chars() {
            histogram.insert(alphabet.index_of(c));
        }
    }

    ///Remove all characters of the string from an existing histogram
    fn remove_from_histogram(&self, alphabet: &Alphabet, histogram: &mut Histogram) {
        for c in self.chars() {
            histogram.remove(alphabet.index_of(c));
        }
    }
}

///Removes spaces and hyphens from a query, so phrases are treated as one bag of letters
pub fn normalize_query(query: &str) -> String {
    query.chars().filter(|c| *c != ' ' && *c != '-').collect()
}
