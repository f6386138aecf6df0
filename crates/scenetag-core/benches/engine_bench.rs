use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scenetag_core::{AudioAttributes, Engine, Track, TrackSet, VideoAttributes};

fn sample_tracks() -> TrackSet {
    TrackSet::new(vec![
        Track::Video(VideoAttributes {
            width: Some(3840),
            height: Some(2160),
            format: Some("HEVC".into()),
            bit_rate: Some(58_000_000),
            hdr_format: Some("Dolby Vision, Version 1.0, dvhe.07.06".into()),
            hdr_format_compatibility: Some("HDR10".into()),
            ..Default::default()
        }),
        Track::Audio(AudioAttributes {
            format: Some("MLP FBA".into()),
            channels: Some(8),
            language: Some("en".into()),
            additional_features: Some("16-ch".into()),
            commercial_name: Some("Dolby TrueHD with Dolby Atmos".into()),
        }),
        Track::Audio(AudioAttributes {
            format: Some("AC-3".into()),
            channels: Some(6),
            language: Some("it".into()),
            ..Default::default()
        }),
    ])
}

fn bench_engine(c: &mut Criterion) {
    let engine = Engine::with_defaults().unwrap();
    let tracks = sample_tracks();

    let inputs = vec![
        "Black.Dog.2024.2160p.UHD.BluRay.REMUX-iSlaNd.mkv",
        "Dying for Sex S01E01 Una bibita dietetica conveniente.mkv",
        "Hedda.2025.2160p.AMZN.WEB-DL.DDP5.1.Atmos.DV.HDR.H.265-FHC.mkv",
        "Avatar The Way of Water 2022 2160p UHD BluRay REMUX HEVC.mkv",
        "Movie.Without.Tag.mkv",
    ];

    c.bench_function("classify_and_name_single", |b| {
        b.iter(|| engine.classify_and_name(black_box(inputs[0]), black_box(&tracks), None));
    });

    c.bench_function("classify_and_name_batch_5", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = engine.classify_and_name(black_box(input), &tracks, None);
            }
        });
    });

    c.bench_function("search_query_batch_5", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = engine.search_query(black_box(input));
            }
        });
    });
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
