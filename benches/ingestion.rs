use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use ml_data_ingestion::ingestion::csv::{read_csv_from_reader, write_csv_to_writer};
use ml_data_ingestion::ingestion::{SplitOptions, train_test_split};
use ml_data_ingestion::types::{DataSet, Schema};

fn synthetic_dataset(n: usize) -> DataSet {
    let schema = Schema::from_names(["gender", "lunch", "math score", "reading score"]);
    let rows = (0..n)
        .map(|i| {
            vec![
                if i % 2 == 0 { "female" } else { "male" }.to_string(),
                if i % 3 == 0 { "free/reduced" } else { "standard" }.to_string(),
                (i % 100).to_string(),
                ((i * 7) % 100).to_string(),
            ]
        })
        .collect();
    DataSet::new(schema, rows)
}

fn to_csv_bytes(ds: &DataSet) -> Vec<u8> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    write_csv_to_writer(ds, &mut wtr).unwrap();
    wtr.into_inner().unwrap()
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("train_test_split");
    for n in [1_000usize, 100_000] {
        let ds = synthetic_dataset(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &ds, |b, ds| {
            b.iter(|| train_test_split(black_box(ds), &SplitOptions::default()).unwrap())
        });
    }
    group.finish();
}

fn bench_csv_round_trip(c: &mut Criterion) {
    let ds = synthetic_dataset(10_000);
    let bytes = to_csv_bytes(&ds);

    c.bench_function("csv_read_10k", |b| {
        b.iter(|| {
            let mut rdr = csv::ReaderBuilder::new()
                .has_headers(true)
                .from_reader(black_box(bytes.as_slice()));
            read_csv_from_reader(&mut rdr).unwrap()
        })
    });
    c.bench_function("csv_write_10k", |b| b.iter(|| to_csv_bytes(black_box(&ds))));
}

criterion_group!(benches, bench_split, bench_csv_round_trip);
criterion_main!(benches);
