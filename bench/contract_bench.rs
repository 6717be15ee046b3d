use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pact_grpc_repro::{
    InteractionContents,
    contents::parse_expression,
    sample::{BrokenSampleRequest, broken_interaction, sample_proto_path, working_interaction},
};
use prost::Message;
use rand::Rng;
use tokio::runtime::Runtime;

fn random_request(count: usize) -> BrokenSampleRequest {
    let mut rng = rand::thread_rng();
    BrokenSampleRequest {
        r#type: (0..count).map(|_| rng.gen_range(1..=2)).collect(),
    }
}

// Loading a contract, including the proto file check
fn bench_load_contents(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("load_contents");
    for (name, contents) in [
        ("working", working_interaction(&sample_proto_path())),
        ("broken", broken_interaction(&sample_proto_path())),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &contents, |b, contents| {
            b.to_async(&rt)
                .iter(|| async { InteractionContents::load(contents).await.unwrap() })
        });
    }
    group.finish();
}

fn bench_parse_expression(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_expression");
    for expression in [
        "notEmpty('TYPE1')",
        "matching(boolean, true)",
        "atLeast(1), atMost(10), eachValue(matching(type, 'TYPE1'))",
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(expression), expression, |b, e| {
            b.iter(|| parse_expression(e).unwrap())
        });
    }
    group.finish();
}

// Encoding and decoding repeated enums of different lengths
fn bench_repeated_enum(c: &mut Criterion) {
    let mut group = c.benchmark_group("repeated_enum");
    for count in [1, 100, 10000] {
        let request = random_request(count);
        let payload = request.encode_to_vec();
        group.bench_with_input(BenchmarkId::new("encode", count), &request, |b, request| {
            b.iter(|| request.encode_to_vec())
        });
        group.bench_with_input(BenchmarkId::new("decode", count), &payload, |b, payload| {
            b.iter(|| BrokenSampleRequest::decode(payload.as_slice()).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_load_contents,
    bench_parse_expression,
    bench_repeated_enum
);
criterion_main!(benches);
