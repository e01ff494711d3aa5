use epipes::{efilter, emap, esorted, esum, Pipe};

fn main() {
    let text = "If a stream allows water to flow down the hill a pipe lets it flow left to right";

    let long_word = efilter(|word: &&str| word.len() > 3);
    let length = emap(|word: &str| word.len());

    let words: Vec<_> = text.split_whitespace().collect();
    let long_words = words.clone() | &long_word | esorted().key(|word: &&str| word.len()).reverse(true);
    println!("long words, longest first: {long_words:?}");

    let total = text.split_whitespace().pipe(&length).pipe(esum());
    println!("total letters: {total}");

    let long_total = words | &long_word | emap(|word: &str| word.len()) | esum().start(0usize);
    println!("letters in long words: {long_total}");
}
