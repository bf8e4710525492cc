#![allow(missing_docs)]

use std::sync::LazyLock;

use divan::{Bencher, black_box, counter::BytesCount};
use wordslicer::{Tokenizer, build_vocabulary};

fn main() {
    divan::main();
}

static SAMPLE: &str = "\
The quick brown fox jumps over the lazy dog. It's a beautiful day, and I'll be
taking my dogs for a walk--or so I thought. (Don't forget: the temperature is
high!) Would you come along? Yes; of course_ I would.
";

fn corpus() -> String {
    SAMPLE.repeat(200)
}

static TOKENIZER: LazyLock<Tokenizer<u32>> =
    LazyLock::new(|| Tokenizer::new(build_vocabulary(SAMPLE).unwrap()).unwrap());

#[divan::bench]
fn build_vocab(bencher: Bencher) {
    let text = corpus();
    bencher
        .counter(BytesCount::of_str(&text))
        .bench(|| build_vocabulary(black_box(&text)).unwrap());
}

#[divan::bench]
fn encode(bencher: Bencher) {
    let text = corpus();
    bencher
        .counter(BytesCount::of_str(&text))
        .bench(|| TOKENIZER.encode(black_box(&text)).unwrap());
}

#[divan::bench]
fn decode(bencher: Bencher) {
    let text = corpus();
    let ids = TOKENIZER.encode(&text).unwrap();
    bencher
        .counter(BytesCount::of_str(&text))
        .bench(|| TOKENIZER.decode(black_box(&ids)).unwrap());
}
