use std::time::SystemTime;

use crate::AnagramIndex;
use crate::types::*;
use crate::index::*;
use crate::histogram::*;

///A node on the search frontier, with the number of unknown letters it may still consume
#[derive(Clone,Copy,Debug)]
struct FrontierEntry {
    node: NodeId,
    budget: CountType,
}

impl AnagramIndex {
    ///Finds the leaf for exactly this histogram, following a single path down the tree
    pub fn find_anagram(&self, histogram: &Histogram) -> Option<LeafId> {
        let mut node_id = ROOT;
        for count in histogram.iter() {
            node_id = self.nodes[node_id].child(*count)?;
        }
        self.nodes[node_id].leaf
    }

    ///Finds all leaves whose histogram contains the query histogram plus between `min_unknown` and
    ///`max_unknown` additional letters. At every level, children with counts from the query count up
    ///to the query count plus the remaining budget are followed.
    pub fn find_anagrams_with_unknown(&self, histogram: &Histogram, min_unknown: CountType, max_unknown: CountType) -> Vec<LeafId> {
        if min_unknown > max_unknown {
            return Vec::new();
        }
        if max_unknown == 0 {
            return self.find_anagram(histogram).into_iter().collect();
        }
        self.frontier_search(histogram, false, 0, min_unknown, max_unknown)
    }

    ///Finds all leaves whose histogram is a subset of the query histogram,
    ///with words of at least `min_length` characters (0 for no restriction).
    ///At every level, all children with counts up to the query count are followed.
    pub fn find_partial_anagrams(&self, histogram: &Histogram, min_length: usize) -> Vec<LeafId> {
        self.frontier_search(histogram, true, min_length, 0, 0)
    }

    ///Like `find_partial_anagrams()`, but a leaf may exceed the query by between
    ///`min_unknown` and `max_unknown` letters in total.
    pub fn find_partial_anagrams_with_unknown(&self, histogram: &Histogram, min_length: usize, min_unknown: CountType, max_unknown: CountType) -> Vec<LeafId> {
        self.frontier_search(histogram, true, min_length, min_unknown, max_unknown)
    }

    ///Breadth-first search over the tree, one alphabet position at a time.
    ///Descending into a child with a count above the query count consumes budget;
    ///when `partial` is set, children with counts below the query count are followed as well.
    ///Terminals are accepted if the consumed budget is at least `min_unknown`.
    fn frontier_search(&self, histogram: &Histogram, partial: bool, min_length: usize, min_unknown: CountType, max_unknown: CountType) -> Vec<LeafId> {
        let max_remaining = match max_unknown.checked_sub(min_unknown) {
            Some(max_remaining) => max_remaining,
            None => return Vec::new(),
        };
        let begintime = if self.debug >= 2 {
            eprintln!("(searching {} anagrams, unknown={},{}, min_length={})", if partial { "partial" } else { "fuzzy" }, min_unknown, max_unknown, min_length);
            Some(SystemTime::now())
        } else {
            None
        };

        let mut frontier: Vec<FrontierEntry> = vec!(FrontierEntry { node: ROOT, budget: max_unknown });
        let mut next: Vec<FrontierEntry> = Vec::new();
        for count in histogram.iter() {
            for entry in frontier.iter() {
                let min_count = if partial { 0 } else { *count };
                let max_count = count.saturating_add(entry.budget);
                for (childcount, child) in self.nodes[entry.node].children_in_range(min_count, max_count) {
                    next.push(FrontierEntry {
                        node: child,
                        budget: entry.budget - childcount.saturating_sub(*count),
                    });
                }
            }
            std::mem::swap(&mut frontier, &mut next);
            next.clear();
            if frontier.is_empty() {
                break;
            }
        }

        let results: Vec<LeafId> = frontier.iter()
            .filter(|entry| entry.budget <= max_remaining)
            .filter_map(|entry| self.nodes[entry.node].leaf)
            .filter(|leaf_id| min_length == 0 || self.leaves[*leaf_id].first().map(|word| word.chars().count() >= min_length).unwrap_or(false))
            .collect();

        if let Some(begintime) = begintime {
            let duration = SystemTime::now().duration_since(begintime).expect("clock can't go backwards").as_micros();
            eprintln!(" (found {} anagram groups out of {} candidates in {} μs)", results.len(), frontier.len(), duration);
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use crate::test::*;

    #[test]
    fn exact_path() {
        let index = get_test_index();
        let histogram = index.query_histogram("cba");
        let leaf_id = index.find_anagram(&histogram).expect("leaf found");
        assert_eq!(index.leaf(leaf_id).expect("leaf exists"), &strings(&["abc", "bca", "cab"]));
        assert_eq!(index.find_anagram(&index.query_histogram("abcd")), None);
        assert_eq!(index.find_anagram(&index.query_histogram("ab")), None);
    }

    #[test]
    fn fuzzy_budget_consumed() {
        let index = get_test_index();
        let histogram = index.query_histogram("abc");
        assert_eq!(index.find_anagrams_with_unknown(&histogram, 0, 2).len(), 1);
        assert_eq!(index.find_anagrams_with_unknown(&histogram, 0, 3).len(), 2);
        //exactly three unknown letters excludes the exact match
        let leaves = index.find_anagrams_with_unknown(&histogram, 3, 3);
        assert_eq!(leaves.len(), 1);
        assert_eq!(index.leaf(leaves[0]).expect("leaf exists"), &strings(&["abcdef", "fedcba"]));
    }

    #[test]
    fn inverted_unknown_range() {
        let index = get_test_index();
        let histogram = index.query_histogram("abc");
        assert!(index.find_anagrams_with_unknown(&histogram, 1, 0).is_empty());
        assert!(index.find_anagrams_with_unknown(&histogram, 3, 2).is_empty());
        assert!(index.find_partial_anagrams_with_unknown(&histogram, 0, 1, 0).is_empty());
    }

    #[test]
    fn partial_minimum_length() {
        let index = get_test_index();
        let histogram = index.query_histogram("abcdef");
        assert_eq!(index.find_partial_anagrams(&histogram, 0).len(), 2);
        assert_eq!(index.find_partial_anagrams(&histogram, 3).len(), 2);
        assert_eq!(index.find_partial_anagrams(&histogram, 4).len(), 1);
        assert_eq!(index.find_partial_anagrams(&histogram, 7).len(), 0);
    }

    #[test]
    fn partial_unknown_range() {
        let index = get_test_index();
        let histogram = index.query_histogram("abcd");
        assert_eq!(index.find_partial_anagrams_with_unknown(&histogram, 0, 0, 1).len(), 1);
        assert_eq!(index.find_partial_anagrams_with_unknown(&histogram, 0, 0, 2).len(), 2);
        assert_eq!(index.find_partial_anagrams_with_unknown(&histogram, 0, 1, 2).len(), 1);
        assert_eq!(index.find_partial_anagrams_with_unknown(&histogram, 0, 3, 3).len(), 0);
    }
}
