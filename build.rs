//! Build script to embed the default dictionary
//!
//! Normalizes `data/words.txt` (lowercase, sorted, de-duplicated) and writes it out as a
//! const slice for `src/wordlists/embedded.rs`.

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const WORD_LIST: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let content =
        fs::read_to_string(WORD_LIST).unwrap_or_else(|e| panic!("Failed to read {WORD_LIST}: {e}"));
    let words = normalize_words(&content);

    write_word_list(
        &Path::new(&out_dir).join("words.rs"),
        &words,
        "Default word ladder dictionary (3 to 5 letter words)",
    );

    println!("cargo:rerun-if-changed={WORD_LIST}");
}

/// Lowercase, skip blanks, drop anything that is not plain a-z
fn normalize_words(content: &str) -> BTreeSet<String> {
    let mut words = BTreeSet::new();
    for (number, line) in content.lines().enumerate() {
        let word = line.trim().to_ascii_lowercase();
        if word.is_empty() {
            continue;
        }
        if word.bytes().all(|b| b.is_ascii_lowercase()) {
            words.insert(word);
        } else {
            println!("cargo:warning={WORD_LIST}:{}: skipped '{word}'", number + 1);
        }
    }
    words
}

fn write_word_list(output_path: &Path, words: &BTreeSet<String>, doc_comment: &str) {
    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {WORD_LIST}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const WORDS: &[&str] = &[").unwrap();
    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in `WORDS`").unwrap();
    writeln!(output, "pub const WORDS_COUNT: usize = {};", words.len()).unwrap();
}
