use spellcheck::{Dictionary, SpellCheckConfig};
use std::{
    env,
    io::{self, Write},
    path::Path,
};

const MAX_EDIT_DISTANCE: usize = 2;

/// Line-oriented driver per the external-interfaces contract: reads stdin
/// lines until EOF or an empty line, writes one output line per returned
/// suggestion as `term distance count` (the compound path returns exactly
/// one line). Console formatting and the read-eval loop around it are
/// deliberately outside the core's contract.
fn main() -> io::Result<()> {
    env_logger::init();

    let dict_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "words_100k.txt".into());

    let config = SpellCheckConfig {
        edit_distance_max: MAX_EDIT_DISTANCE,
        ..SpellCheckConfig::default()
    };
    let mut dictionary = Dictionary::new(config);

    if Path::new(&dict_path).exists() {
        if let Err(err) = dictionary.load_frequency_file(&dict_path, 0, 1, "en") {
            log::warn!("{err}, continuing with an empty dictionary");
        }
    } else {
        log::warn!("dictionary file not found: {dict_path}, continuing with an empty dictionary");
    }

    println!("spellcheck REPL - dictionary: {dict_path}\ntype text, empty line or EOF to quit");
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 || input.trim().is_empty() {
            break;
        }

        let line = input.trim();
        if dictionary.config().enable_compound_check {
            let result = dictionary.lookup_compound(line, "en", MAX_EDIT_DISTANCE);
            println!("{} {} {}", result.term, result.distance, result.count);
        } else {
            for token in line.split_whitespace() {
                for suggestion in dictionary.lookup(token, "en", MAX_EDIT_DISTANCE) {
                    println!("{} {} {}", suggestion.term, suggestion.distance, suggestion.count);
                }
            }
        }
    }
    Ok(())
}
