use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use procwatch::config::FilterConfig;
use procwatch::system::process::{ProcessRecord, build_process_list};
use procwatch::ui::process_table;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

fn make_records(n: usize) -> Vec<ProcessRecord> {
    (0..n)
        .map(|i| {
            let mut record = ProcessRecord::new(
                i as u32 + 1,
                format!("proc_{i}_with_a_fairly_long_executable_name"),
                ((n - i) as u64 + 1) * 64 * 1024,
            );
            record.parent_pid = (i as u32 / 2) + 1;
            record.threads = Some((i % 64) as u32 + 1);
            record
        })
        .collect()
}

fn bench_build_process_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_process_list_500_1000_2000");
    let filter = FilterConfig::default();
    for size in [500usize, 1000, 2000] {
        let records = make_records(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| {
                let list = build_process_list(black_box(records.clone()), &filter, 24);
                black_box(list);
            })
        });
    }
    group.finish();
}

fn bench_process_table_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_table_render_500_1000_2000");
    let filter = FilterConfig::default();
    for size in [500usize, 1000, 2000] {
        let list = build_process_list(make_records(size), &filter, 24);
        let mut terminal = Terminal::new(TestBackend::new(160, 50)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &list, |b, list| {
            b.iter(|| {
                terminal
                    .draw(|frame| {
                        process_table::render(frame, Rect::new(0, 0, 160, 50), black_box(list), 24);
                    })
                    .unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_process_list, bench_process_table_render);
criterion_main!(benches);
