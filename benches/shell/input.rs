use criterion::{Criterion, Throughput};
use libcli::shell::input::ASCII_BACKSPACE;
use libcli::shell::{Cli, Settings};
use std::hint::black_box;

fn no_input() -> Option<u8> {
    None
}

fn sink(c: u8) {
    black_box(c);
}

fn new_cli() -> Cli<'static> {
    Cli::new(Settings {
        get_char: Some(no_input),
        send_char: Some(sink),
        ..Settings::default()
    })
    .expect("callbacks present")
}

pub fn bench_handle_char(c: &mut Criterion) {
    let mut group = c.benchmark_group("input");
    let line = b"set led 1 on\n";
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("handle_char", |b| {
        let mut cli = new_cli();
        b.iter(|| {
            for &ch in line {
                black_box(cli.handle_char(black_box(ch)));
            }
        })
    });
    group.finish();
}

pub fn bench_edit_and_complete(c: &mut Criterion) {
    let mut group = c.benchmark_group("input");
    let mut script = Vec::new();
    for _ in 0..8 {
        script.extend_from_slice(b"abcd");
        script.extend_from_slice(&[ASCII_BACKSPACE; 2]);
    }
    script.extend_from_slice(b"\r\n");
    group.throughput(Throughput::Bytes(script.len() as u64));
    group.bench_function("edit_and_complete", |b| {
        let mut cli = new_cli();
        b.iter(|| {
            for &ch in &script {
                black_box(cli.handle_char(ch));
            }
        })
    });
    group.finish();
}
