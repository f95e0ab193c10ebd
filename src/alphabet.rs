use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, BufRead};
use simple_error::SimpleError;

use crate::types::*;

///Maximum number of letter positions; the unknown position and the terminal level of the
///anagram tree must still fit in a `CharIndexType`
pub const MAX_ALPHABET_LETTERS: usize = CharIndexType::MAX as usize - 1;

///Defines the letters of the anagram tree and the order in which they are branched on.
///Every position may hold multiple equivalent characters, upper and lower case variants
///always map to the same position. All other characters map to the unknown position,
///which is always the last one.
#[derive(Clone,Debug)]
pub struct Alphabet {
    letters: Vec<Vec<char>>,
    map: HashMap<char, CharIndexType>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(DEFAULT_LETTERS).expect("default alphabet fits")
    }
}

impl Alphabet {
    ///Creates an alphabet with one position per character in `letters`, in order.
    ///Duplicate characters are ignored. Fails if there are more than `MAX_ALPHABET_LETTERS`
    ///distinct positions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use anatree::*;
    /// let alphabet = Alphabet::new("abc").expect("valid alphabet");
    /// assert_eq!(alphabet.size(), 4);
    /// assert_eq!(alphabet.index_of('B'), 1);
    /// assert_eq!(alphabet.index_of('-'), alphabet.unknown());
    /// ```
    pub fn new(letters: &str) -> Result<Self, SimpleError> {
        let mut alphabet = Self {
            letters: Vec::new(),
            map: HashMap::new(),
        };
        for letter in letters.chars() {
            if !alphabet.map.contains_key(&letter) {
                alphabet.push(vec!(letter))?;
            }
        }
        Ok(alphabet)
    }

    ///Read the alphabet from a TSV file.
    ///The file contains one alphabet position per line, but may
    ///consist of multiple tab-separated characters on that line, which
    ///will be treated as identical. The order of the lines determines the
    ///order of the levels in the anagram tree.
    pub fn from_file(filename: &str) -> Result<Self, io::Error> {
        let mut alphabet = Self {
            letters: Vec::new(),
            map: HashMap::new(),
        };
        let f = File::open(filename)?;
        let f_buffer = BufReader::new(f);
        for line in f_buffer.lines() {
            let line = line?;
            let line = line.trim_end_matches(&['\r', '\n'][..]);
            if line.is_empty() {
                continue;
            }
            let mut chars: Vec<char> = Vec::new();
            for field in line.split('\t') {
                let field = match field {
                    "\\s" => " ",
                    "\\t" => "\t",
                    _ => field
                };
                let mut fieldchars = field.chars();
                match (fieldchars.next(), fieldchars.next()) {
                    (Some(c), None) => {
                        if alphabet.map.contains_key(&c) || chars.contains(&c) {
                            return Err(io::Error::new(io::ErrorKind::InvalidData, format!("Character '{}' occurs more than once in alphabet {}", c, filename)));
                        }
                        chars.push(c);
                    },
                    (None, _) => continue,
                    _ => return Err(io::Error::new(io::ErrorKind::InvalidData, format!("Alphabet entry '{}' in {} is not a single character", field, filename))),
                }
            }
            if !chars.is_empty() {
                alphabet.push(chars).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Alphabet {}: {}", filename, e)))?;
            }
        }
        Ok(alphabet)
    }

    fn push(&mut self, chars: Vec<char>) -> Result<(), SimpleError> {
        if self.letters.len() >= MAX_ALPHABET_LETTERS {
            return Err(SimpleError::new(format!("alphabet has more than {} positions", MAX_ALPHABET_LETTERS)));
        }
        let index = CharIndexType::try_from(self.letters.len()).map_err(|e| SimpleError::new(format!("alphabet position out of range: {}", e)))?;
        for c in chars.iter() {
            self.map.insert(*c, index);
            let lower: Vec<char> = c.to_lowercase().collect();
            let upper: Vec<char> = c.to_uppercase().collect();
            for variant in [lower, upper] {
                //skip multi-character case mappings (ß -> SS)
                if let [single] = variant.as_slice() {
                    self.map.entry(*single).or_insert(index);
                }
            }
        }
        self.letters.push(chars);
        Ok(())
    }

    ///Number of positions in the alphabet, including the unknown position
    pub fn size(&self) -> usize {
        self.letters.len() + 1
    }

    ///The position reserved for all characters that are not in the alphabet
    pub fn unknown(&self) -> CharIndexType {
        self.letters.len() as CharIndexType
    }

    ///Returns the position of a character, case-insensitively
    pub fn index_of(&self, c: char) -> CharIndexType {
        match self.map.get(&c) {
            Some(index) => *index,
            None => self.unknown(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_alphabet() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.size(), 31);
        assert_eq!(alphabet.unknown(), 30);
        assert_eq!(alphabet.index_of('q'), 0);
        assert_eq!(alphabet.index_of('Q'), 0);
        assert_eq!(alphabet.index_of('e'), 29);
        assert_eq!(alphabet.index_of('Ä'), alphabet.index_of('ä'));
        assert_eq!(alphabet.index_of('7'), alphabet.unknown());
        assert_eq!(alphabet.index_of(' '), alphabet.unknown());
    }

    #[test]
    fn sharp_s() {
        let alphabet = Alphabet::default();
        assert_ne!(alphabet.index_of('ß'), alphabet.unknown());
        assert_eq!(alphabet.index_of('S'), alphabet.index_of('s'));
    }

    #[test]
    fn duplicates_ignored() {
        let alphabet = Alphabet::new("abca").expect("valid alphabet");
        assert_eq!(alphabet.size(), 4);
    }

    #[test]
    fn too_many_letters() {
        let letters: String = ('\u{4E00}'..='\u{4F00}').collect();
        assert!(Alphabet::new(&letters).is_err());
        let letters: String = letters.chars().take(MAX_ALPHABET_LETTERS).collect();
        let alphabet = Alphabet::new(&letters).expect("valid alphabet");
        assert_eq!(alphabet.size(), MAX_ALPHABET_LETTERS + 1);
        assert_eq!(alphabet.index_of('\u{4E00}'), 0);
        assert_eq!(alphabet.index_of('\u{4EFD}'), (MAX_ALPHABET_LETTERS - 1) as CharIndexType);
        assert_eq!(alphabet.index_of('!'), alphabet.unknown());
        assert_ne!(alphabet.index_of('\u{4EFD}'), alphabet.unknown());
    }
}
