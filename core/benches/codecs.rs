use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use codec_core::compression::{BuiltinFactory, Codec, CodecConfig, CodecFactory};

fn block(len: usize) -> Vec<u8> {
    b"timestamp=1700000000 level=info msg=\"block written\" bytes=65536\n"
        .iter()
        .cycle()
        .take(len)
        .copied()
        .collect()
}

fn bench_codecs(c: &mut Criterion) {
    let data = block(64 * 1024);
    let mut group = c.benchmark_group("codecs");
    group.throughput(Throughput::Bytes(data.len() as u64));

    for config in CodecConfig::defaults() {
        let factory = BuiltinFactory::new(config);
        let mut codec = factory.create_instance();
        let compressed = codec.compress(&data).expect("compress");

        group.bench_with_input(BenchmarkId::new("compress", config.name()), &data, |b, data| {
            b.iter(|| codec.compress(black_box(data)).expect("compress"))
        });
        group.bench_with_input(BenchmarkId::new("decompress", config.name()), &compressed, |b, input| {
            b.iter(|| codec.decompress(black_box(input)).expect("decompress"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_codecs);
criterion_main!(benches);
