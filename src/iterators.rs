use std::collections::VecDeque;

use crate::AnagramIndex;
use crate::types::*;
use crate::histogram::*;

///Length in characters of the first word of a leaf
fn leaf_length(index: &AnagramIndex, leaf_id: LeafId) -> usize {
    index.leaf(leaf_id).and_then(|leaf| leaf.first()).map(|word| word.chars().count()).unwrap_or(0)
}

///Iterates over all sequences of anagram groups that together use exactly
///the letters of a query histogram.
///
///The iterator owns a reduced index that only holds the partial anagrams of the query,
///the sequences it yields consist of leaf IDs in that index; use `resolve()` to get the words.
///Sequences are extended breadth-first, so shorter sequences come first.
pub struct DecompositionIterator {
    index: AnagramIndex,
    query: Histogram,
    querylength: usize,
    max_words: usize,
    min_length: usize,
    permutations: bool,

    ///incomplete sequences that still have to be extended
    queue: VecDeque<Vec<LeafId>>,

    ///complete sequences that have not been yielded yet
    complete: VecDeque<Vec<LeafId>>,

    ///scratch histogram holding the letters not yet used by a sequence
    remainder: Histogram,
}

impl DecompositionIterator {
    pub fn new(index: AnagramIndex, query: Histogram, max_words: usize, min_length: usize, permutations: bool) -> DecompositionIterator {
        let querylength = query.char_count();
        let mut queue = VecDeque::new();
        let mut complete = VecDeque::new();
        for leaf_id in 0..index.leaf_count() {
            if leaf_length(&index, leaf_id) == querylength {
                complete.push_back(vec!(leaf_id));
            } else if max_words != 1 {
                queue.push_back(vec!(leaf_id));
            }
        }
        let remainder = Histogram::new(query.len());
        DecompositionIterator {
            index,
            query,
            querylength,
            max_words,
            min_length,
            permutations,
            queue,
            complete,
            remainder,
        }
    }

    ///The reduced index that the yielded leaf IDs refer to
    pub fn index(&self) -> &AnagramIndex {
        &self.index
    }

    ///Resolves a yielded sequence to anagram groups
    pub fn resolve(&self, sequence: &[LeafId]) -> Vec<&Leaf> {
        sequence.iter().filter_map(|leaf_id| self.index.leaf(*leaf_id)).collect()
    }

    ///Extends one incomplete sequence by every group that fits in the remaining letters
    fn expand(&mut self, sequence: Vec<LeafId>) {
        self.remainder.copy_from_slice(&self.query);
        let mut length = 0;
        for leaf_id in sequence.iter() {
            if let Some(word) = self.index.leaf(*leaf_id).and_then(|leaf| leaf.first()) {
                length += word.chars().count();
                word.remove_from_histogram(&self.index.alphabet, &mut self.remainder);
            }
        }

        let last = match sequence.last() {
            Some(last) => *last,
            None => return,
        };
        for candidate in self.index.find_partial_anagrams(&self.remainder, self.min_length) {
            if !self.permutations && candidate < last {
                continue;
            }
            debug_assert!(self.index.leaf(candidate).and_then(|leaf| leaf.first())
                .map(|word| word.histogram(&self.index.alphabet).is_subset_of(&self.remainder))
                .unwrap_or(false));
            let mut extended = sequence.clone();
            extended.push(candidate);
            if length + leaf_length(&self.index, candidate) == self.querylength {
                self.complete.push_back(extended);
            } else if self.max_words == 0 || extended.len() < self.max_words {
                self.queue.push_back(extended);
            }
        }
    }
}

impl Iterator for DecompositionIterator {
    type Item = Vec<LeafId>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(sequence) = self.complete.pop_front() {
                return Some(sequence);
            }
            let sequence = self.queue.pop_front()?;
            self.expand(sequence);
        }
    }
}

impl AnagramIndex {
    ///Finds all sequences of anagram groups that together use exactly the letters in the histogram.
    ///The search runs over a reduced index holding only the partial anagrams of the query.
    pub fn find_multi_anagrams(&self, histogram: &Histogram, max_words: usize, min_length: usize, permutations: bool) -> DecompositionIterator {
        let mut subindex = AnagramIndex::new(self.alphabet.clone(), 0);
        for leaf_id in self.find_partial_anagrams(histogram, min_length) {
            if let Some(leaf) = self.leaf(leaf_id) {
                //words in a leaf share their path, so this can not fail
                subindex.add_words(leaf.as_slice(), None).expect("adding partial anagrams to reduced index");
            }
        }
        if self.debug >= 2 {
            eprintln!("(reduced index for multi-word anagrams has {} groups, {} nodes)", subindex.leaf_count(), subindex.node_count());
        }
        DecompositionIterator::new(subindex, histogram.clone(), max_words, min_length, permutations)
    }
}
