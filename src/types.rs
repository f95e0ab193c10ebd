use serde::Serialize;
use simple_error::SimpleError;

///Position of a letter in the alphabet, the highest position is reserved for unknown characters
pub type CharIndexType = u8;

///Number of occurrences of a letter in a word
pub type CountType = u32;

///Index of a node in the node arena of an anagram tree
pub type NodeId = usize;

///Index of a leaf in the leaf store of an anagram tree
pub type LeafId = usize;

///A group of words that are anagrams of each other, in the order they were added
pub type Leaf = Vec<String>;

///The default alphabet (the unknown slot is implicit and comes last).
///Letters that rarely occur more than once come first, letters with high
///count variance come last, so branching in the tree is deferred as long as possible.
pub const DEFAULT_LETTERS: &str = "qjxyzäöüßvwkfpbgmhcdulotsrnaie";

///Capacity of the progress channel used when building in the background
pub const PROGRESS_CHANNEL_CAPACITY: usize = 8;

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize)]
pub enum QueryMode {
    ///Full anagrams, optionally with unknown letters
    Exact,

    ///Words that can be spelled with a subset of the letters, optionally with unknown letters
    Partial,

    ///Sequences of words that together use up all the letters
    Multi,
}

#[derive(Clone,Debug,Serialize)]
pub struct QueryParams {
    pub mode: QueryMode,

    ///Minimum length (in characters) of a matched word, 0 disables the check. Only used in
    ///partial and multi mode.
    pub min_length: usize,

    ///Minimum number of letters a match must have beyond those in the query
    pub min_unknown: CountType,

    ///Maximum number of letters a match may have beyond those in the query
    pub max_unknown: CountType,

    ///Maximum number of words in a multi-word anagram, 0 for unlimited
    pub max_words: usize,

    ///Return all orderings of multi-word anagrams instead of one canonical ordering
    pub permutations: bool,

    /// Use only a single-thread instead of leveraging multiple cores for batch queries
    pub single_thread: bool,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            mode: QueryMode::Exact,
            min_length: 0,
            min_unknown: 0,
            max_unknown: 0,
            max_words: 0,
            permutations: false,
            single_thread: false,
        }
    }
}

impl QueryParams {
    pub fn with_mode(mut self, mode: QueryMode) -> Self {
        self.mode = mode;
        self
    }
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }
    pub fn with_unknown(mut self, min_unknown: CountType, max_unknown: CountType) -> Self {
        self.min_unknown = min_unknown;
        self.max_unknown = max_unknown;
        self
    }
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }
    pub fn with_permutations(mut self) -> Self {
        self.permutations = true;
        self
    }
    pub fn with_single_thread(mut self) -> Self {
        self.single_thread = true;
        self
    }

    ///Checks the parameters for consistency, the index itself assumes valid parameters.
    pub fn validate(&self) -> Result<(), SimpleError> {
        if self.min_unknown > self.max_unknown {
            return Err(SimpleError::new(format!("minimum number of unknown letters ({}) must not be larger than the maximum ({})", self.min_unknown, self.max_unknown)));
        }
        match self.mode {
            QueryMode::Multi => {
                if self.max_unknown > 0 {
                    return Err(SimpleError::new("unknown letters are not supported for multi-word anagrams"));
                }
            },
            QueryMode::Partial => {
                if self.max_words > 0 {
                    return Err(SimpleError::new("a maximum number of words is only supported for multi-word anagrams"));
                }
            },
            QueryMode::Exact => {
                if self.max_words > 0 {
                    return Err(SimpleError::new("a maximum number of words is only supported for multi-word anagrams"));
                }
                if self.min_length > 0 {
                    return Err(SimpleError::new("a minimum length is only supported for partial and multi-word anagrams"));
                }
            }
        }
        Ok(())
    }
}

///The matches found for a single input.
///Each match is a sequence of anagram groups; exact and partial queries
///produce sequences of exactly one group.
#[derive(Clone,Debug,PartialEq,Serialize)]
pub struct QueryResult {
    pub input: String,
    pub matches: Vec<Vec<Leaf>>,
}

impl QueryResult {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
            matches: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_defaults() {
        assert!(QueryParams::default().validate().is_ok());
    }

    #[test]
    fn validate_unknown_range() {
        let params = QueryParams::default().with_unknown(2, 1);
        assert!(params.validate().is_err());
        let params = QueryParams::default().with_unknown(1, 2);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn validate_mode_restrictions() {
        assert!(QueryParams::default().with_mode(QueryMode::Multi).with_unknown(0, 1).validate().is_err());
        assert!(QueryParams::default().with_mode(QueryMode::Partial).with_max_words(2).validate().is_err());
        assert!(QueryParams::default().with_min_length(3).validate().is_err());
        assert!(QueryParams::default().with_mode(QueryMode::Partial).with_min_length(3).validate().is_ok());
        assert!(QueryParams::default().with_mode(QueryMode::Multi).with_max_words(3).with_min_length(2).validate().is_ok());
    }
}
