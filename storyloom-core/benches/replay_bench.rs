use std::hint::black_box;
use std::time::Duration;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use loomscript_core::{parse, Script};
use storyloom_core::runtime::{AssetTable, Character, Library, Scene};
use storyloom_core::{replay, Executor, SessionState};

fn make_script(lines: usize) -> Script {
    let mut buf = String::with_capacity(lines * 32);
    for i in 0..lines {
        match i % 5 {
            0 => buf.push_str(&format!("scene bg{}\n", i % 3)),
            1 => buf.push_str("show ch1 at left\n"),
            2 => buf.push_str(&format!("ch1 \"dialogue {i}\"\n")),
            3 => buf.push_str("hide ch1\n"),
            4 => buf.push_str(&format!("\"narration {i}\"\n")),
            _ => unreachable!(),
        }
    }
    parse(&buf)
}

fn make_library() -> Library {
    let mut characters: AssetTable<Character> = AssetTable::new();
    characters.register("ch1", "ch1.png");
    let mut scenes: AssetTable<Scene> = AssetTable::new();
    for i in 0..3 {
        scenes.register(format!("bg{i}"), format!("bg{i}.png"));
    }
    Library::new(characters, scenes)
}

fn bench_replay(c: &mut Criterion) {
    let script = make_script(1_000);
    let library = make_library();
    let mut group = c.benchmark_group("replay");
    group.sample_size(10);

    group.bench_function("replay at end of 1k", |b| {
        b.iter(|| replay(black_box(&script), black_box(script.len() - 1), &library))
    });

    group.bench_function("click through 1k", |b| {
        b.iter_batched(
            || Executor::new(script.clone(), library.clone(), Duration::from_millis(30)),
            |mut exe| {
                exe.start();
                while exe.status() != SessionState::Terminated {
                    exe.next();
                    exe.drain();
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_replay);
criterion_main!(benches);
