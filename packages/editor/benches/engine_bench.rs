use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vitrine_core::{OverrideMap, StyleOverride};
use vitrine_editor::EditorEngine;

fn apply_overrides(c: &mut Criterion) {
    c.bench_function("apply_100_overrides", |b| {
        b.iter(|| {
            let mut engine = EditorEngine::new(OverrideMap::new(), |_| {});
            for i in 0..100 {
                engine.set_override(
                    black_box(&format!("el-{}", i)),
                    StyleOverride::single("color", "#3366ff"),
                );
            }
            engine
        })
    });
}

fn undo_redo_cycle(c: &mut Criterion) {
    c.bench_function("undo_redo_50_levels", |b| {
        b.iter(|| {
            let mut engine = EditorEngine::new(OverrideMap::new(), |_| {});
            for i in 0..50 {
                engine.set_override(
                    &format!("el-{}", i % 5),
                    StyleOverride::single("fontSize", format!("{}px", 10 + i)),
                );
            }
            for _ in 0..50 {
                engine.undo();
            }
            for _ in 0..50 {
                engine.redo();
            }
            engine
        })
    });
}

fn preset_load(c: &mut Criterion) {
    let mut engine = EditorEngine::new(OverrideMap::new(), |_| {});
    for i in 0..50 {
        engine.set_override(&format!("el-{}", i), StyleOverride::single("color", "#abc"));
    }
    let preset = engine.save_preset("bench");

    c.bench_function("load_50_element_preset", |b| {
        b.iter(|| {
            let mut engine = EditorEngine::new(OverrideMap::new(), |_| {});
            engine.load_preset(black_box(&preset));
            engine
        })
    });
}

criterion_group!(benches, apply_overrides, undo_redo_cycle, preset_load);
criterion_main!(benches);
