#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// SURT benchmarks: parsing, canonicalization and key formatting
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use surt::{
    CanonicalizeOptions, Canonicalizer, DefaultIaCanonicalizer, Format, FormatOptions,
    GoogleCanonicalizer, IaCanonicalizer, SurtOptions, UrlComponents,
};

/// A mix of the URL shapes found in crawl logs
const CORPUS: &[&str] = &[
    "http://www.archive.org/",
    "http://archive.org/goo/?a=2&b&a=1",
    "https://www.example.com:443/path/to/page.html?utm_source=x&id=42#top",
    "http://www34.archive.org/index.html?b=a&b=b&a=b",
    "http://host/%25%32%35%25%32%35",
    "http://3279880203/blah",
    "http://archive.org/index.php?PHPSESSID=0123456789abcdefghijklemopqrstuv&action=profile;u=4221",
    "http://bücher.ch:8080/",
    "dns:archive.org",
    "mailto:foo@example.com",
    "http://visit.webhosting.yahoo.com/visit.gif?&r=http%3A//web.archive.org/web/20090517140029/http%3A//anthonystewarthead.electric-chi.com/&b=Netscape%205.0%20%28Windows%3B%20en-US%29&s=1366x768&o=Win32&c=24&j=true&v=1.2",
];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Elements(CORPUS.len() as u64));

    group.bench_function("corpus", |b| {
        b.iter(|| {
            for url in CORPUS {
                let _ = UrlComponents::parse(black_box(url));
            }
        });
    });

    group.finish();
}

fn bench_canonicalize(c: &mut Criterion) {
    let parsed: Vec<UrlComponents> = CORPUS.iter().map(|url| UrlComponents::parse(url).unwrap()).collect();
    let options = CanonicalizeOptions::default();
    let mut group = c.benchmark_group("canonicalize");
    group.throughput(Throughput::Elements(parsed.len() as u64));

    let canonicalizers: [(&str, &dyn Canonicalizer); 3] = [
        ("google", &GoogleCanonicalizer::new()),
        ("ia", &IaCanonicalizer),
        ("default_ia", &DefaultIaCanonicalizer::new()),
    ];

    for (name, canonicalizer) in canonicalizers {
        group.bench_function(name, |b| {
            b.iter(|| {
                for url in &parsed {
                    let mut url = url.clone();
                    canonicalizer.canonicalize(black_box(&mut url), &options);
                }
            });
        });
    }

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let canonicalizer = DefaultIaCanonicalizer::new();
    let canonical: Vec<UrlComponents> = CORPUS
        .iter()
        .map(|url| {
            let mut url = UrlComponents::parse(url).unwrap();
            canonicalizer.canonicalize(&mut url, &CanonicalizeOptions::default());
            url
        })
        .collect();
    let options = FormatOptions::default();
    let mut group = c.benchmark_group("format");

    for (name, format) in [("surt", Format::Surt), ("uri", Format::Uri), ("ssurt", Format::Ssurt)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                for url in &canonical {
                    black_box(format.format(url, &options));
                }
            });
        });
    }

    group.bench_function("surt_public_suffix", |b| {
        let options = FormatOptions::default().with_public_suffix(true);
        b.iter(|| {
            for url in &canonical {
                black_box(Format::Surt.format(url, &options));
            }
        });
    });

    group.finish();
}

fn bench_surt(c: &mut Criterion) {
    let mut group = c.benchmark_group("surt");
    group.throughput(Throughput::Elements(CORPUS.len() as u64));

    group.bench_function("default", |b| {
        b.iter(|| {
            for url in CORPUS {
                black_box(surt::surt(black_box(url)));
            }
        });
    });

    let options = SurtOptions::default().with_scheme(true).with_trailing_comma(true);
    let canonicalizer = DefaultIaCanonicalizer::new();
    group.bench_function("with_scheme", |b| {
        b.iter(|| {
            for url in CORPUS {
                black_box(surt::surt_with(black_box(url), &options, &canonicalizer));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_canonicalize, bench_format, bench_surt);
criterion_main!(benches);
