//! Lexer Benchmarks
//!
//! Measures tokenizing throughput over typical query and schema documents.
//! Run with: `cargo bench --package gqlex-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use gqlex_lex::{Lexer, LexerConfig};

const QUERY: &str = r#"
query HeroNameAndFriends($episode: Episode = JEDI, $withFriends: Boolean!) {
  hero(episode: $episode) {
    name
    ... on Droid { primaryFunction }
    friends @include(if: $withFriends) {
      name
      appearsIn
    }
  }
}
"#;

const SCHEMA: &str = r#"
"""
The query root of the schema.
"""
type Query {
  "Search across characters and starships"
  search(text: String = "r2", first: Int = 10, ratio: Float = -0.5e2): [SearchResult!]!
  hero(episode: Episode): Character # returns the hero
}

union SearchResult = Human | Droid | Starship

enum Episode { NEWHOPE, EMPIRE, JEDI }
"#;

/// Counts tokens, stopping at the first error.
fn lexer_token_count(source: &str) -> usize {
    Lexer::new(source).map_while(Result::ok).count()
}

fn large_document(fields: usize) -> String {
    let mut source = String::from("{\n");
    for i in 0..fields {
        source.push_str(&format!(
            "  field{i}(id: {i}, ratio: {i}.5, name: \"item \\u00E9 {i}\") {{ id, name }}\n"
        ));
    }
    source.push('}');
    source
}

fn bench_lexer_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    group.throughput(Throughput::Bytes(QUERY.len() as u64));
    group.bench_function("query", |b| {
        b.iter(|| lexer_token_count(black_box(QUERY)))
    });

    group.throughput(Throughput::Bytes(SCHEMA.len() as u64));
    group.bench_function("schema", |b| {
        b.iter(|| lexer_token_count(black_box(SCHEMA)))
    });

    group.finish();
}

fn bench_lexer_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_large");

    let source = large_document(1000);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("generated_1000_fields", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("escaped_string", |b| {
        let source = r#"{ a(s: "tab\there \"quoted\" Aß 😀 done") }"#;
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.bench_function("block_string", |b| {
        let body = "      indented line of documentation text\n".repeat(50);
        let source = format!("\"\"\"\n{body}    \"\"\"");
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

fn bench_lexer_comments(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_comments");
    let source = "# a comment line that says something\n{ a }\n".repeat(100);

    group.bench_function("skipped", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.bench_function("preserved", |b| {
        let config = LexerConfig::preserving_comments();
        b.iter(|| {
            Lexer::with_config(black_box(source.as_str()), config.clone())
                .map_while(Result::ok)
                .count()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_documents,
    bench_lexer_large,
    bench_lexer_strings,
    bench_lexer_comments
);
criterion_main!(benches);
