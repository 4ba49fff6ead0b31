use criterion::{Criterion, criterion_group, criterion_main};
use genbook::book::{BookParser, normalize_str};
use genbook::dot::to_dot;
use genbook::gedcom::to_gedcom;
use genbook::model::View;
use std::hint::black_box;

const BOOK_SIZES: &[(&str, usize)] = &[("small", 100), ("medium", 2_000), ("large", 20_000)];

/// Generates a raw book with wrapped descriptions and a spouse on every third person.
fn generate_book(num_persons: usize) -> String {
    let mut book = String::from("1 Adam Root Wallick b: 1700\n");
    let mut generation = 1;

    for i in 1..num_persons {
        // Descend up to depth 12, then climb back to generation 2
        generation = if generation >= 12 { 2 } else { generation + 1 - (i % 3 == 0) as usize };
        generation = generation.max(2);
        let dots = ".".repeat(generation - 1);
        book.push_str(&format!(
            "{dots}{generation} Person{i} Middle Wallick b: {} d: {}\n",
            1700 + i % 300,
            1760 + i % 300
        ));
        book.push_str("   farmer and blacksmith, moved west\n");
        if i % 3 == 0 {
            book.push_str(&format!("+ Spouse{i} Other b: {}\n", 1705 + i % 300));
        }
    }

    book
}

fn book_parsing(c: &mut Criterion) {
    for (name, size) in BOOK_SIZES {
        let raw = generate_book(*size);
        let cleaned = normalize_str(&raw).join("\n");

        c.bench_function(&format!("normalize_{name}"), |b| {
            b.iter(|| normalize_str(black_box(&raw)));
        });
        c.bench_function(&format!("parse_{name}"), |b| {
            b.iter(|| BookParser::new().parse_str(black_box(&cleaned)).unwrap());
        });
    }
}

fn tree_writing(c: &mut Criterion) {
    for (name, size) in BOOK_SIZES {
        let tree = BookParser::new()
            .parse_str(&normalize_str(&generate_book(*size)).join("\n"))
            .unwrap();

        c.bench_function(&format!("dot_{name}"), |b| {
            b.iter(|| to_dot(black_box(&tree), View::Full));
        });
        c.bench_function(&format!("gedcom_{name}"), |b| {
            b.iter(|| to_gedcom(black_box(&tree), View::Full));
        });
    }
}

criterion_group!(regression, book_parsing, tree_writing);
criterion_main!(regression);
