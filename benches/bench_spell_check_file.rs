use rayon::prelude::*;
use spellcheck::{Dictionary, SpellCheckConfig};
use std::fs;
use std::time::Instant;

fn main() {
    let dict_file = "words_100k.txt".to_string();
    let text_file = "benches/test_text.txt".to_string();
    let max_edit_distance = 3;

    let text_content = fs::read_to_string(text_file).expect(
        "Unable to read text file, please ensure you have a file named test_text.txt in the current directory with any text contents.",
    );

    let config = SpellCheckConfig { edit_distance_max: max_edit_distance, ..SpellCheckConfig::default() };
    let mut dictionary = Dictionary::new(config);
    dictionary
        .load_frequency_file(&dict_file, 0, 1, "en")
        .expect("unable to load dictionary file");

    let words: Vec<String> = text_content
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect();

    let start_time = Instant::now();

    let _: Vec<_> = words
        .par_iter()
        .map(|word| dictionary.lookup(word, "en", max_edit_distance))
        .collect();

    let elapsed_time = start_time.elapsed();
    println!("Elapsed time for spell checking: {:?}", elapsed_time);
    println!(
        "Words corrected per second: {}",
        words.len() as f64 / elapsed_time.as_secs_f64()
    );
}
