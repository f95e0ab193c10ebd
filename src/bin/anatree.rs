extern crate clap;

use std::io::{self, BufRead, Write};
use std::process::exit;
use clap::{Arg, App, ArgMatches, SubCommand};
use simple_error::SimpleError;

use anatree::*;

fn parse_unknown(value: &str) -> Result<(CountType, CountType), SimpleError> {
    let mut bounds: Vec<CountType> = Vec::new();
    for part in value.split(',') {
        let bound = part.trim().parse::<CountType>().map_err(|e| SimpleError::new(format!("invalid number of unknown letters '{}': {}", part, e)))?;
        bounds.push(bound);
    }
    match bounds.as_slice() {
        [exact] => Ok((*exact, *exact)),
        [min, max] => Ok((*min, *max)),
        _ => Err(SimpleError::new("unknown letters expects one or two numbers ([min,]max)")),
    }
}

fn format_match(sequence: &[Leaf]) -> String {
    sequence.iter().map(|group| group.join("  ")).collect::<Vec<String>>().join("  |  ")
}

fn output_result(result: &QueryResult, show_input: bool) {
    if show_input {
        println!("{}:", result.input);
    }
    for sequence in result.matches.iter() {
        println!("  {}", format_match(sequence));
    }
}

fn load_wordlist(args: &ArgMatches) -> Vec<String> {
    let filename = args.value_of("dict").expect("dictionary is a required argument");
    eprintln!("Loading word list...");
    let words = read_wordlist(filename, &VocabParams::default()).unwrap_or_else(|e| {
        eprintln!("ERROR: Unable to read word list {}: {}", filename, e);
        exit(1);
    });
    eprintln!(" - Read {} words", words.len());
    words
}

fn load_alphabet(args: &ArgMatches) -> Alphabet {
    if let Some(filename) = args.value_of("alphabet") {
        Alphabet::from_file(filename).unwrap_or_else(|e| {
            eprintln!("ERROR: Unable to read alphabet {}: {}", filename, e);
            exit(1);
        })
    } else {
        Alphabet::default()
    }
}

///Builds the index in the background while rendering a progress bar
fn build_index(alphabet: Alphabet, words: Vec<String>, debug: u8) -> AnagramIndex {
    let (handle, progress) = AnagramIndex::build_in_background(alphabet, words, debug);
    for percent in progress {
        let bar = "#".repeat(percent as usize / 2);
        eprint!("\rBuilding anagram tree: [{:<50}]", bar);
    }
    eprintln!();
    handle.join().expect("anagram tree builder panicked").expect("constructing anagram tree")
}

fn query_params(args: &ArgMatches) -> Result<(QueryParams, Option<Pattern>), SimpleError> {
    let mut params = QueryParams::default();
    if args.is_present("partial") {
        params = params.with_mode(QueryMode::Partial);
    } else if args.is_present("multi") {
        params = params.with_mode(QueryMode::Multi);
    }
    if let Some(value) = args.value_of("max-words") {
        params = params.with_max_words(value.parse::<usize>().map_err(|e| SimpleError::new(format!("invalid max-words: {}", e)))?);
    }
    if let Some(value) = args.value_of("min-length") {
        params = params.with_min_length(value.parse::<usize>().map_err(|e| SimpleError::new(format!("invalid min-length: {}", e)))?);
    }
    if let Some(value) = args.value_of("unknown") {
        let (min_unknown, max_unknown) = parse_unknown(value)?;
        params = params.with_unknown(min_unknown, max_unknown);
    }
    if args.is_present("permutations") {
        params = params.with_permutations();
    }
    if args.is_present("single-thread") {
        params = params.with_single_thread();
    }
    params.validate()?;
    let pattern = args.value_of("filter").map(Pattern::new).transpose().map_err(|e| SimpleError::new(format!("invalid filter: {}", e)))?;
    Ok((params, pattern))
}

fn print_settings(params: &QueryParams, filter: &str) {
    println!("To change settings, enter the setting's name and the value, separated by '='");
    println!("Available settings with their current value:");
    println!("  filter = {}", filter);
    if params.mode == QueryMode::Multi {
        println!("  max-words = {}", params.max_words);
    }
    if params.mode != QueryMode::Exact {
        println!("  min-length = {}", params.min_length);
    }
    if params.mode != QueryMode::Multi {
        println!("  unknown = {},{}", params.min_unknown, params.max_unknown);
    }
}

///Applies a `name=value` setting entered in interactive mode
fn apply_setting(params: &mut QueryParams, pattern: &mut Option<Pattern>, filter: &mut String, line: &str) -> Result<(), SimpleError> {
    let (name, value) = match line.split_once('=') {
        Some((name, value)) => (name.trim(), value.trim()),
        None => return Err(SimpleError::new("no value provided")),
    };
    let mut changed = params.clone();
    match name {
        "filter" | "f" => {
            *pattern = if value.is_empty() {
                None
            } else {
                Some(Pattern::new(value).map_err(|e| SimpleError::new(format!("invalid filter: {}", e)))?)
            };
            *filter = value.to_owned();
        },
        "max-words" | "w" => {
            changed.max_words = value.parse::<usize>().map_err(|e| SimpleError::new(format!("invalid max-words: {}", e)))?;
        },
        "min-length" | "l" => {
            changed.min_length = value.parse::<usize>().map_err(|e| SimpleError::new(format!("invalid min-length: {}", e)))?;
        },
        "unknown" | "u" => {
            let (min_unknown, max_unknown) = parse_unknown(value)?;
            changed.min_unknown = min_unknown;
            changed.max_unknown = max_unknown;
        },
        _ => return Err(SimpleError::new(format!("unknown setting '{}'", name))),
    }
    changed.validate()?;
    *params = changed;
    println!("set {}={}", name, value);
    Ok(())
}

fn process_interactive(index: &AnagramIndex, mut params: QueryParams, mut pattern: Option<Pattern>, mut filter: String, json: bool) {
    println!("Enter ? for help.");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Enter a word: ");
        io::stdout().flush().expect("flushing stdout");
        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if line == "?" {
            print_settings(&params, &filter);
            continue;
        }
        if line.contains('=') {
            if let Err(e) = apply_setting(&mut params, &mut pattern, &mut filter, line) {
                println!("failed to change setting: {}", e);
            }
            continue;
        }
        let mut result = index.query(line, &params);
        if let Some(pattern) = pattern.as_ref() {
            result = pattern.filter_result(result);
        }
        if json {
            println!("{}", serde_json::to_string(&result).expect("serializing result"));
        } else {
            output_result(&result, false);
        }
    }
}

///Prints the words matching each pattern
fn output_matching_words(words: &[String], value: &str, show_pattern: bool) {
    match Pattern::new(value) {
        Ok(pattern) => {
            if show_pattern {
                println!("{}:", value);
            }
            for word in match_words(words, &pattern) {
                println!("  {}", word);
            }
        },
        Err(e) => eprintln!("ERROR: invalid pattern '{}': {}", value, e),
    }
}

fn process_interactive_match(words: &[String]) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Enter a pattern: ");
        io::stdout().flush().expect("flushing stdout");
        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        output_matching_words(words, line, false);
    }
}

pub fn dictionary_arguments<'a,'b>() -> Vec<clap::Arg<'a,'b>> {
    let mut args: Vec<Arg> = Vec::new();
    args.push(Arg::with_name("dict")
        .long("dict")
        .short("d")
        .help("Word list to find anagrams in, one word per line")
        .takes_value(true)
        .required(true));
    args
}

pub fn anagram_arguments<'a,'b>() -> Vec<clap::Arg<'a,'b>> {
    let mut args: Vec<Arg> = dictionary_arguments();
    args.push(Arg::with_name("alphabet")
        .long("alphabet")
        .short("a")
        .help("Alphabet file, one letter per line, optionally with tab-separated equivalent letters. The order of the letters determines the layout (and memory use) of the anagram tree.")
        .takes_value(true));
    args.push(Arg::with_name("partial")
        .long("partial")
        .short("p")
        .help("Find partial anagrams: words that can be spelled with a subset of the letters")
        .conflicts_with("multi"));
    args.push(Arg::with_name("multi")
        .long("multi")
        .short("m")
        .help("Find combinations of multiple words that together use all the letters"));
    args.push(Arg::with_name("max-words")
        .long("max-words")
        .short("w")
        .help("Maximum number of words in multi-word anagrams (0 for unlimited)")
        .takes_value(true)
        .requires("multi"));
    args.push(Arg::with_name("min-length")
        .long("min-length")
        .short("l")
        .help("Minimum word length for partial and multi-word anagrams")
        .takes_value(true));
    args.push(Arg::with_name("unknown")
        .long("unknown")
        .short("u")
        .help("Number of unknown/open letters ([min,]max). Use a single number like '1' for an exact number of unknown letters, otherwise a range like '0,2'")
        .takes_value(true)
        .conflicts_with("multi"));
    args.push(Arg::with_name("permutations")
        .long("permutations")
        .help("Output all orderings of multi-word anagrams rather than one")
        .requires("multi"));
    args.push(Arg::with_name("filter")
        .long("filter")
        .short("f")
        .help("Only output words matching this pattern, '.' stands for one letter, '*' for any number of letters")
        .takes_value(true));
    args.push(Arg::with_name("json")
        .long("json")
        .short("j")
        .help("Output json instead of text"));
    args.push(Arg::with_name("single-thread")
        .long("single-thread")
        .help("Process the given words on a single thread rather than in parallel"));
    args.push(Arg::with_name("words")
        .help("Words to find anagrams for, enters interactive mode if none are given")
        .takes_value(true)
        .multiple(true)
        .required(false));
    args
}

fn main() {
    let rootargs = App::new("Anatree")
                    .version(env!("CARGO_PKG_VERSION"))
                    .author("Maarten van Gompel (proycon) <proycon@anaproy.nl>")
                    .about("Finds exact, partial, fuzzy and multi-word anagrams in a word list")
                    .subcommand(
                        SubCommand::with_name("anagram")
                            .about("Find anagrams, partial anagrams or multi-word anagrams")
                            .alias("a")
                            .args(&anagram_arguments())
                    )
                    .subcommand(
                        SubCommand::with_name("match")
                            .about("Find words matching a pattern: '.' stands for one letter, '*' for any number of letters")
                            .alias("m")
                            .args(&dictionary_arguments())
                            .arg(Arg::with_name("patterns")
                                .help("Patterns to match, enters interactive mode if none are given")
                                .takes_value(true)
                                .multiple(true)
                                .required(false))
                    )
                    .subcommand(
                        SubCommand::with_name("analyze")
                            .about("Compute letter statistics and anagram statistics for a word list")
                            .args(&dictionary_arguments())
                            .arg(Arg::with_name("alphabet")
                                .long("alphabet")
                                .short("a")
                                .help("Alphabet file")
                                .takes_value(true))
                    )
                    .arg(Arg::with_name("debug")
                        .long("debug")
                        .short("D")
                        .help("Debug output, may be repeated for more verbosity")
                        .multiple(true)
                        .required(false))
                    .get_matches();

    let debug = rootargs.occurrences_of("debug").min(u8::MAX as u64) as u8;

    if let Some(args) = rootargs.subcommand_matches("anagram") {
        let (params, pattern) = query_params(args).unwrap_or_else(|e| {
            eprintln!("ERROR: {}", e);
            exit(2);
        });
        let json = args.is_present("json");
        let alphabet = load_alphabet(args);
        let words = load_wordlist(args);
        let index = build_index(alphabet, words, debug);

        if let Some(inputs) = args.values_of("words") {
            let inputs: Vec<&str> = inputs.collect();
            let mut results = index.query_all(&inputs, &params);
            if let Some(pattern) = pattern.as_ref() {
                results = results.into_iter().map(|result| pattern.filter_result(result)).collect();
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&results).expect("serializing results"));
            } else {
                for result in results.iter() {
                    output_result(result, true);
                }
            }
        } else {
            let filter = args.value_of("filter").unwrap_or("").to_owned();
            process_interactive(&index, params, pattern, filter, json);
        }
    } else if let Some(args) = rootargs.subcommand_matches("match") {
        let words = load_wordlist(args);
        if let Some(values) = args.values_of("patterns") {
            for value in values {
                output_matching_words(&words, value, true);
            }
        } else {
            process_interactive_match(&words);
        }
    } else if let Some(args) = rootargs.subcommand_matches("analyze") {
        let alphabet = load_alphabet(args);
        let words = load_wordlist(args);
        let index = build_index(alphabet, words.clone(), debug);
        print!("{}", DictionaryReport::new(&words, &index));
    } else {
        eprintln!("No command specified, see --help");
        exit(2);
    }
}
