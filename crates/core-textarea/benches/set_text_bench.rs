use core_font::{BitmapFont, GlyphMetrics};
use core_textarea::{TextArea, TextAreaOptions};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn font() -> BitmapFont {
    BitmapFont::monospace((6, 8), ALPHABET, GlyphMetrics::new(5, 8, 0, 0, 6))
}

fn text_of(len: usize, line_len: usize, seed: usize) -> String {
    let chars: Vec<char> = ALPHABET.chars().collect();
    let mut s = String::with_capacity(len + len / line_len);
    for i in 0..len {
        if i > 0 && i % line_len == 0 {
            s.push('\n');
        }
        s.push(chars[(i + seed) % chars.len()]);
    }
    s
}

fn bench_set_text(c: &mut Criterion) {
    let base = text_of(512, 32, 0);
    let replaced = text_of(512, 32, 7);
    let mut one_edit = base.clone();
    one_edit.replace_range(100..101, "Z");

    c.bench_function("set_text_identical_512", |b| {
        let mut area = TextArea::new(font(), TextAreaOptions::with_max_glyphs(600)).unwrap();
        area.set_text(&base).unwrap();
        b.iter(|| area.set_text(black_box(&base)).unwrap())
    });

    c.bench_function("set_text_single_edit_512", |b| {
        let mut area = TextArea::new(font(), TextAreaOptions::with_max_glyphs(600)).unwrap();
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let next = if flip { &one_edit } else { &base };
            area.set_text(black_box(next)).unwrap()
        })
    });

    c.bench_function("set_text_full_replace_512", |b| {
        let mut area = TextArea::new(font(), TextAreaOptions::with_max_glyphs(600)).unwrap();
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let next = if flip { &replaced } else { &base };
            area.set_text(black_box(next)).unwrap()
        })
    });
}

criterion_group!(benches, bench_set_text);
criterion_main!(benches);
