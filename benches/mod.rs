use criterion::{criterion_group, criterion_main};

mod shell;

criterion_group!(
    benches,
    shell::input::bench_handle_char,
    shell::input::bench_edit_and_complete,
    shell::dispatch::bench_run_dispatch,
    shell::dispatch::bench_search_deep_registry
);
criterion_main!(benches);
