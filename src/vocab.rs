use std::fs::File;
use std::io::{self, BufReader, BufRead, Read};

pub struct VocabParams {
    ///Column containing the Text (0-indexed), for tab separated word lists
    pub text_column: u8,
}

impl Default for VocabParams {
    fn default() -> Self {
        Self {
            text_column: 0,
        }
    }
}

///Read a word list from a file, one entry per line.
///Lines may contain multiple tab-separated columns, the text is read from the configured column.
///Empty entries are skipped, the order of the file is retained.
pub fn read_wordlist(filename: &str, params: &VocabParams) -> Result<Vec<String>, io::Error> {
    let f = File::open(filename)?;
    read_words(f, params)
}

///Read a word list from any input stream, see `read_wordlist()`
pub fn read_words(input: impl Read, params: &VocabParams) -> Result<Vec<String>, io::Error> {
    let f_buffer = BufReader::new(input);
    let mut words = Vec::new();
    for line in f_buffer.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        if let Some(text) = line.split('\t').nth(params.text_column as usize) {
            let text = text.trim_end();
            if !text.is_empty() {
                words.push(text.to_owned());
            }
        }
    }
    Ok(words)
}
