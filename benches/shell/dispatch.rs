use criterion::{Criterion, Throughput};
use libcli::shell::{Cli, Command, Settings};
use std::cell::Cell;
use std::hint::black_box;

const SCRIPT: &[u8] = b"status\r\nversion\r\nunknown\r\nhelp\r\n";

thread_local! {
    static POSITION: Cell<usize> = const { Cell::new(0) };
}

fn scripted_input() -> Option<u8> {
    POSITION.with(|position| {
        let index = position.get();
        position.set(index + 1);
        SCRIPT.get(index).copied()
    })
}

fn rewind() {
    POSITION.with(|position| position.set(0));
}

fn sink(c: u8) {
    black_box(c);
}

fn status(cli: &Cli, _input: &str) {
    cli.output().send_str("OK\r\n");
}

fn version(cli: &Cli, _input: &str) {
    cli.output().send_str("v0.1.0\r\n");
}

fn settings() -> Settings<'static> {
    Settings {
        get_char: Some(scripted_input),
        send_char: Some(sink),
        input_end_char: b'\n',
        prompt: Some("> "),
    }
}

pub fn bench_run_dispatch(c: &mut Criterion) {
    let status = Command::new("status", Some("Show status"), status);
    let version = Command::new("version", Some("Show version"), version);
    let mut cli: Cli = Cli::new(settings()).expect("callbacks present");
    cli.add_command(&status).expect("fresh entry");
    cli.add_command(&version).expect("fresh entry");

    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Bytes(SCRIPT.len() as u64));
    group.bench_function("run", |b| {
        b.iter(|| {
            rewind();
            black_box(cli.run())
        })
    });
    group.finish();
}

pub fn bench_search_deep_registry(c: &mut Criterion) {
    let names: &'static [String] = (0..64).map(|i| format!("cmd{i}")).collect::<Vec<_>>().leak();
    let entries: &'static [Command<'static>] = names
        .iter()
        .map(|name| Command::new(name, None, status))
        .collect::<Vec<_>>()
        .leak();
    let mut cli: Cli<'static> = Cli::new(settings()).expect("callbacks present");
    for entry in entries {
        cli.add_command(entry).expect("fresh entry");
    }

    let mut group = c.benchmark_group("dispatch");
    group.bench_function("search_last_of_64", |b| {
        b.iter(|| black_box(cli.search_command(black_box("cmd63"))))
    });
    group.bench_function("search_miss", |b| {
        b.iter(|| black_box(cli.search_command(black_box("missing"))))
    });
    group.finish();
}
