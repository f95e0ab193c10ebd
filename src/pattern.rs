use regex::Regex;

use crate::types::*;

///A simple word pattern: `.` stands for one arbitrary letter, `*` for zero or more arbitrary
///letters, every other character stands for itself (case-insensitively). Patterns always match
///against the whole word.
///
/// # Examples
///
/// ```
/// # use anatree::*;
/// let pattern = Pattern::new("a....").expect("valid pattern");
/// assert!(pattern.is_match("Apple"));
/// assert!(!pattern.is_match("apples"));
/// assert!(Pattern::new("*pf").expect("valid pattern").is_match("Kopf"));
/// ```
#[derive(Clone,Debug)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let mut expression = String::from("(?i)^");
        for c in pattern.chars() {
            match c {
                '.' => expression.push_str("\\p{L}"),
                '*' => expression.push_str("\\p{L}*"),
                _ => expression.push_str(&regex::escape(&c.to_string())),
            }
        }
        expression.push('$');
        Ok(Self {
            regex: Regex::new(&expression)?,
        })
    }

    ///Tests whether the entire word matches the pattern
    pub fn is_match(&self, word: &str) -> bool {
        self.regex.is_match(word)
    }

    ///Returns the words of an anagram group that match the pattern
    pub fn filter_group<'a>(&self, group: &'a [String]) -> Vec<&'a str> {
        group.iter().filter(|word| self.is_match(word)).map(|word| word.as_str()).collect()
    }

    ///Restricts the matches of a query result to words matching the pattern.
    ///In every match, the first group containing a matching word is reduced to its matching
    ///words, matches without any matching word are dropped.
    pub fn filter_result(&self, result: QueryResult) -> QueryResult {
        let matches = result.matches.into_iter().filter_map(|mut sequence| {
            let position = sequence.iter().position(|group| group.iter().any(|word| self.is_match(word)))?;
            sequence[position].retain(|word| self.is_match(word));
            Some(sequence)
        }).collect();
        QueryResult {
            input: result.input,
            matches,
        }
    }
}

///Returns all words in the list that match the pattern, in order
pub fn match_words<'a, S: AsRef<str>>(words: &'a [S], pattern: &Pattern) -> Vec<&'a str> {
    words.iter().map(|word| word.as_ref()).filter(|word| pattern.is_match(word)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal() {
        let pattern = Pattern::new("house").expect("valid pattern");
        assert!(pattern.is_match("house"));
        assert!(pattern.is_match("HOUSE"));
        assert!(!pattern.is_match("houses"));
        assert!(!pattern.is_match("hous"));
    }

    #[test]
    fn wildcards() {
        assert!(Pattern::new("a....b").expect("valid pattern").is_match("abcdeb"));
        assert!(!Pattern::new("a....b").expect("valid pattern").is_match("abcdb"));
        assert!(Pattern::new("*pf").expect("valid pattern").is_match("pf"));
        assert!(Pattern::new("*pf").expect("valid pattern").is_match("Kopf"));
        assert!(!Pattern::new("*pf").expect("valid pattern").is_match("Kopfe"));
        assert!(Pattern::new("h*e").expect("valid pattern").is_match("house"));
        assert!(Pattern::new("**").expect("valid pattern").is_match(""));
        assert!(Pattern::new("").expect("valid pattern").is_match(""));
        assert!(!Pattern::new("").expect("valid pattern").is_match("a"));
    }

    #[test]
    fn wildcards_match_letters_only() {
        assert!(!Pattern::new(".").expect("valid pattern").is_match("1"));
        assert!(!Pattern::new("a*").expect("valid pattern").is_match("a-b"));
        assert!(Pattern::new("a-*").expect("valid pattern").is_match("a-b"));
    }

    #[test]
    fn special_characters_are_literal() {
        let pattern = Pattern::new("c++").expect("valid pattern");
        assert!(pattern.is_match("C++"));
        assert!(!pattern.is_match("ccc"));
        assert!(Pattern::new("(.)").expect("valid pattern").is_match("(a)"));
        assert!(Pattern::new("*ß").expect("valid pattern").is_match("Fuß"));
        assert!(Pattern::new("ö.").expect("valid pattern").is_match("Öl"));
    }

    #[test]
    fn filtering() {
        let group = vec!("listen".to_string(), "silent".to_string(), "enlist".to_string());
        assert_eq!(Pattern::new("s*").expect("valid pattern").filter_group(&group), vec!("silent"));
        assert_eq!(match_words(&group, &Pattern::new("*t").expect("valid pattern")), vec!("silent", "enlist"));
    }

    #[test]
    fn filtering_results() {
        let mut result = QueryResult::new("tinsel");
        result.matches.push(vec!(vec!("listen".to_string(), "silent".to_string())));
        result.matches.push(vec!(vec!("dog".to_string()), vec!("cat".to_string(), "act".to_string())));
        result.matches.push(vec!(vec!("god".to_string())));
        let filtered = Pattern::new("*t").expect("valid pattern").filter_result(result);
        assert_eq!(filtered.input, "tinsel");
        assert_eq!(filtered.matches, vec!(
            vec!(vec!("silent".to_string())),
            vec!(vec!("dog".to_string()), vec!("cat".to_string(), "act".to_string())),
        ));
    }
}
