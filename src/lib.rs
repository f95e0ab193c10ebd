extern crate rayon;
extern crate simple_error;

use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::thread::{self, JoinHandle};
use std::time::SystemTime;
use rayon::prelude::*;
use simple_error::SimpleError;

pub mod types;
pub mod alphabet;
pub mod histogram;
pub mod index;
pub mod search;
pub mod iterators;
pub mod vocab;
pub mod pattern;
pub mod analysis;


pub use crate::types::*;
pub use crate::alphabet::*;
pub use crate::histogram::*;
pub use crate::index::*;
pub use crate::iterators::*;
pub use crate::vocab::*;
pub use crate::pattern::*;
pub use crate::analysis::*;


///The anagram tree: indexes words by their letter histogram.
///
///The tree has one level per alphabet position; at each level a node's children are indexed by
///the count of that letter. Every path from the root to a terminal node corresponds to exactly
///one histogram and one leaf, which holds all words with that histogram in insertion order.
///Nodes and leaves are only ever added, the tree is built once and queried afterwards.
pub struct AnagramIndex {
    pub alphabet: Alphabet,

    ///Node arena, the root is at position `ROOT`
    pub(crate) nodes: Vec<Node>,

    ///Leaf store, nodes refer to leaves by index
    pub(crate) leaves: Vec<Leaf>,

    ///Number of words added
    wordcount: usize,

    pub debug: u8,
}

impl AnagramIndex {
    ///Creates an empty index for the given alphabet
    pub fn new(alphabet: Alphabet, debug: u8) -> AnagramIndex {
        AnagramIndex {
            alphabet,
            nodes: vec!(Node::new(0)),
            leaves: Vec::new(),
            wordcount: 0,
            debug,
        }
    }

    ///Creates an index from a list of words, empty words are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use anatree::*;
    /// let index = AnagramIndex::build(Alphabet::default(), &["listen", "silent", "enlist", "tin"], 0).expect("building index");
    /// assert_eq!(index.anagrams("Tinsel").to_vec(), vec!("listen".to_string(), "silent".to_string(), "enlist".to_string()));
    /// assert!(index.anagrams("stone").is_empty());
    /// ```
    pub fn build<S: AsRef<str>>(alphabet: Alphabet, words: &[S], debug: u8) -> Result<AnagramIndex, SimpleError> {
        let mut index = AnagramIndex::new(alphabet, debug);
        index.add_words(words, None)?;
        Ok(index)
    }

    ///Builds the index in a separate thread. Progress is reported as whole percentages over a
    ///bounded channel, which is closed once construction finishes. The channel has to be drained,
    ///the builder blocks while it is full.
    pub fn build_in_background(alphabet: Alphabet, words: Vec<String>, debug: u8) -> (JoinHandle<Result<AnagramIndex, SimpleError>>, Receiver<u8>) {
        let (sender, receiver) = sync_channel(PROGRESS_CHANNEL_CAPACITY);
        let handle = thread::spawn(move || {
            let mut index = AnagramIndex::new(alphabet, debug);
            index.add_words(&words, Some(&sender))?;
            Ok(index)
        });
        (handle, receiver)
    }

    ///Adds words to the index, optionally reporting progress percentages.
    ///Fails only if the tree turns out to be inconsistent.
    pub fn add_words<S: AsRef<str>>(&mut self, words: &[S], progress: Option<&SyncSender<u8>>) -> Result<(), SimpleError> {
        let begintime = if self.debug >= 1 {
            eprintln!("Adding {} words to the anagram tree...", words.len());
            Some(SystemTime::now())
        } else {
            None
        };

        let total = words.len();
        let mut last_percent: u8 = 0;
        let mut histogram = Histogram::new(self.alphabet.size());
        for (i, word) in words.iter().enumerate() {
            histogram.clear();
            self.insert(word.as_ref(), &mut histogram)?;
            if let Some(progress) = progress {
                let percent = ((i + 1) * 100 / total) as u8;
                if percent > last_percent {
                    last_percent = percent;
                    //the receiver may have gone away, progress is advisory only
                    progress.send(percent).ok();
                }
            }
        }
        if total == 0 {
            if let Some(progress) = progress {
                progress.send(100).ok();
            }
        }

        if let Some(begintime) = begintime {
            let duration = SystemTime::now().duration_since(begintime).expect("clock can't go backwards").as_millis();
            eprintln!(" - Found {} anagram groups for {} words, using {} nodes ({} ms)", self.leaves.len(), self.wordcount, self.nodes.len(), duration);
        }
        Ok(())
    }

    ///Adds a single word to the index
    pub fn add_word(&mut self, word: &str) -> Result<(), SimpleError> {
        let mut histogram = Histogram::new(self.alphabet.size());
        self.insert(word, &mut histogram)
    }

    fn insert(&mut self, word: &str, histogram: &mut Histogram) -> Result<(), SimpleError> {
        if word.is_empty() {
            return Ok(());
        }
        let depth = CharIndexType::try_from(self.alphabet.size()).map_err(|_| SimpleError::new(format!("Alphabet of size {} is too large for the anagram tree", self.alphabet.size())))?;
        word.add_to_histogram(&self.alphabet, histogram);
        if self.debug >= 3 {
            eprintln!("   -- Histogram={:?} Text={}", &histogram[..], word);
        }

        let last = histogram.len() - 1;
        let mut node_id = ROOT;
        for (i, count) in histogram.iter().enumerate() {
            node_id = match self.nodes[node_id].child(*count) {
                Some(child_id) => child_id,
                None => {
                    let child_id = self.nodes.len();
                    self.nodes[node_id].add_child(*count, child_id)?;
                    let child = if i < last {
                        Node::new((i + 1) as CharIndexType)
                    } else {
                        self.leaves.push(Vec::new());
                        Node::new_terminal(depth, self.leaves.len() - 1)
                    };
                    self.nodes.push(child);
                    child_id
                }
            };
        }

        let leaf = self.nodes[node_id].leaf.ok_or_else(|| SimpleError::new(format!("Path for '{}' does not end in a leaf", word)))?;
        self.leaves[leaf].push(word.to_owned());
        self.wordcount += 1;
        Ok(())
    }

    ///All anagram groups, in order of creation
    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }

    ///Resolves a leaf ID
    pub fn leaf(&self, leaf_id: LeafId) -> Option<&Leaf> {
        self.leaves.get(leaf_id)
    }

    ///Number of anagram groups
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    ///Number of nodes in the tree, including the root
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    ///Number of words added (excluding empty ones)
    pub fn word_count(&self) -> usize {
        self.wordcount
    }

    ///Computes the histogram of a query
    pub fn query_histogram(&self, query: &str) -> Histogram {
        normalize_query(query).histogram(&self.alphabet)
    }

    fn resolve(&self, leaf_ids: &[LeafId]) -> Vec<&Leaf> {
        leaf_ids.iter().filter_map(|leaf_id| self.leaf(*leaf_id)).collect()
    }

    ///Finds all words that are anagrams of the query, returns an empty slice if there are none
    pub fn anagrams(&self, query: &str) -> &[String] {
        let histogram = self.query_histogram(query);
        match self.find_anagram(&histogram).and_then(|leaf_id| self.leaf(leaf_id)) {
            Some(leaf) => leaf.as_slice(),
            None => &[],
        }
    }

    ///Finds all anagram groups that consist of the letters of the query plus between
    ///`min_unknown` and `max_unknown` further letters
    pub fn anagrams_with_unknown(&self, query: &str, min_unknown: CountType, max_unknown: CountType) -> Vec<&Leaf> {
        let histogram = self.query_histogram(query);
        self.resolve(&self.find_anagrams_with_unknown(&histogram, min_unknown, max_unknown))
    }

    ///Finds all anagram groups that can be spelled with a subset of the letters of the query,
    ///with words of at least `min_length` characters (0 for no restriction)
    pub fn partial_anagrams(&self, query: &str, min_length: usize) -> Vec<&Leaf> {
        let histogram = self.query_histogram(query);
        self.resolve(&self.find_partial_anagrams(&histogram, min_length))
    }

    ///Like `partial_anagrams()`, but matched words may additionally use between `min_unknown`
    ///and `max_unknown` letters that are not in the query
    pub fn partial_anagrams_with_unknown(&self, query: &str, min_length: usize, min_unknown: CountType, max_unknown: CountType) -> Vec<&Leaf> {
        let histogram = self.query_histogram(query);
        self.resolve(&self.find_partial_anagrams_with_unknown(&histogram, min_length, min_unknown, max_unknown))
    }

    ///Finds sequences of anagram groups that together use exactly the letters of the query.
    ///`max_words` limits the length of the sequences (0 for unlimited). Unless `permutations` is
    ///set, every combination of groups is returned once, in the order of the groups.
    ///
    /// # Examples
    ///
    /// ```
    /// # use anatree::*;
    /// let index = AnagramIndex::build(Alphabet::default(), &["dirty", "room", "moor", "dormitory"], 0).expect("building index");
    /// let results = index.multi_anagrams("dormitory", 0, 0, false);
    /// assert_eq!(results.len(), 2);
    /// ```
    pub fn multi_anagrams(&self, query: &str, max_words: usize, min_length: usize, permutations: bool) -> Vec<Vec<Leaf>> {
        let histogram = self.query_histogram(query);
        let mut decompositions = self.find_multi_anagrams(&histogram, max_words, min_length, permutations);
        let mut results = Vec::new();
        while let Some(sequence) = decompositions.next() {
            results.push(decompositions.resolve(&sequence).into_iter().cloned().collect());
        }
        results
    }

    ///Runs a query as configured by the parameters
    pub fn query(&self, input: &str, params: &QueryParams) -> QueryResult {
        let mut result = QueryResult::new(input);
        match params.mode {
            QueryMode::Exact => {
                for leaf in self.anagrams_with_unknown(input, params.min_unknown, params.max_unknown) {
                    result.matches.push(vec!(leaf.clone()));
                }
            },
            QueryMode::Partial => {
                for leaf in self.partial_anagrams_with_unknown(input, params.min_length, params.min_unknown, params.max_unknown) {
                    result.matches.push(vec!(leaf.clone()));
                }
            },
            QueryMode::Multi => {
                result.matches = self.multi_anagrams(input, params.max_words, params.min_length, params.permutations);
            }
        }
        result
    }

    ///Runs a query for every input, in parallel unless configured otherwise.
    ///Results are in the order of the inputs.
    pub fn query_all<S: AsRef<str> + Sync>(&self, inputs: &[S], params: &QueryParams) -> Vec<QueryResult> {
        if params.single_thread {
            inputs.iter().map(|input| self.query(input.as_ref(), params)).collect()
        } else {
            inputs.par_iter().map(|input| self.query(input.as_ref(), params)).collect()
        }
    }
}
