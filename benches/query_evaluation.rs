use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use imas_clip_search::filters::{filter_clips, par_filter_clips, parse_query, tokenize};
use imas_clip_search::models::{BrandType, Clip, LiveType, Performer};

const BRANDS: [BrandType; 4] =
    [BrandType::CINDERELLA, BrandType::MILLION, BrandType::SIDEM, BrandType::SHINY];

/// Generate synthetic catalog clips
fn generate_clips(num_clips: usize) -> Vec<Clip> {
    (0..num_clips)
        .map(|i| Clip {
            id: i as i64,
            file_path: Some(format!("/media/live/clip-{}.mp4", i)),
            song_title: Some(format!("Song {}", i % 97)),
            concert_name: Some(format!("Concert {}", i % 13)),
            lyrics: if i % 4 == 0 { Some("shine on the stage ".repeat(20)) } else { None },
            duration_ms: (60 + (i % 300) as u64) * 1000,
            concert_date: NaiveDate::from_ymd_opt(2015 + (i % 10) as i32, 1 + (i % 12) as u32, 1)
                .and_then(|d| d.and_hms_opt(18, 0, 0)),
            live_type: if i % 5 == 0 { LiveType::Mr } else { LiveType::Seiyuu },
            brands: BRANDS[i % BRANDS.len()],
            performers: vec![Performer::new(format!("Performer {}", i % 50), "")],
            ..Clip::default()
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_parsing");
    let query = r#"shine -?type:MR ?brands:("シンデレラガールズ" OR "ミリオンライブ！") ?duration:90-240 ?date:2020/01/01-"#;

    group.bench_function("tokenize", |b| b.iter(|| tokenize(black_box(query))));
    group.bench_function("parse_query", |b| b.iter(|| parse_query(black_box(query), None)));

    group.finish();
}

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_evaluation");

    let queries = [
        ("global_keyword", "shine"),
        ("keyed_text", "?song:\"Song 42\""),
        ("numeric_range", "?duration:120-180"),
        ("complex", "-?type:MR ?brands:(シンデレラ OR ミリオン) ?date:2020/01/01- -?performers:\"Performer 1\""),
    ];

    for size in [1_000, 10_000, 50_000].iter() {
        let clips = generate_clips(*size);
        group.throughput(Throughput::Elements(*size as u64));

        for (name, query) in queries {
            let predicate = parse_query(query, None);
            group.bench_with_input(BenchmarkId::new(name, size), size, |b, _| {
                b.iter(|| filter_clips(black_box(&clips), black_box(&predicate)).len());
            });
        }

        let predicate = parse_query(queries[3].1, None);
        group.bench_with_input(BenchmarkId::new("complex_parallel", size), size, |b, _| {
            b.iter(|| par_filter_clips(black_box(&clips), black_box(&predicate)).len());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_evaluation);
criterion_main!(benches);
