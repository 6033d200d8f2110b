use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigInt;
use serde_leaf::{
    are_keys_array_like, encode_value, transform_value, untransform_value, ObjectMap, RegExp, Value,
    ValueMap, ValueSet,
};

fn leaves() -> Vec<(&'static str, Value)> {
    vec![
        ("bigint", Value::BigInt(BigInt::from(u64::MAX) * 1_000u32)),
        (
            "date",
            Value::Date(Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap()),
        ),
        ("regexp", Value::RegExp(RegExp::new("^[a-z]+/\\d+$", "gi"))),
        ("undefined", Value::Undefined),
        ("nan", Value::from(f64::NAN)),
        ("plain_string", Value::from("not special")),
    ]
}

fn benchmark_transform_leaves(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_leaf");

    for (name, value) in leaves() {
        group.bench_function(name, |b| b.iter(|| transform_value(black_box(&value))));
    }
    group.finish();
}

fn benchmark_untransform_leaves(c: &mut Criterion) {
    let mut group = c.benchmark_group("untransform_leaf");

    for (name, value) in leaves() {
        let Some((payload, tag)) = encode_value(&value) else {
            continue;
        };
        group.bench_function(name, |b| {
            b.iter(|| untransform_value(black_box(payload.clone()), tag.as_str()))
        });
    }
    group.finish();
}

fn benchmark_array_like_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_like_keys");

    for size in [10, 100, 1000].iter() {
        let keys: Vec<String> = (0..*size).rev().map(|i: usize| i.to_string()).collect();
        let obj: ObjectMap = keys
            .iter()
            .map(|k| (k.clone(), Value::Null))
            .collect();

        group.bench_with_input(BenchmarkId::new("key_list", size), &keys, |b, keys| {
            b.iter(|| are_keys_array_like(black_box(keys)))
        });
        group.bench_with_input(BenchmarkId::new("object", size), &obj, |b, obj| {
            b.iter(|| transform_value(black_box(&Value::Object(obj.clone()))))
        });
    }
    group.finish();
}

fn benchmark_collections(c: &mut Criterion) {
    let mut group = c.benchmark_group("collections");

    for size in [10, 100, 500].iter() {
        let set: ValueSet = (0..*size).map(|i: i64| Value::from(i)).collect();
        let map: ValueMap = (0..*size)
            .map(|i: i64| (Value::from(i), Value::from(format!("v{}", i))))
            .collect();
        let set = Value::Set(set);
        let map = Value::Map(map);

        group.bench_with_input(BenchmarkId::new("encode_set", size), &set, |b, set| {
            b.iter(|| encode_value(black_box(set)))
        });
        group.bench_with_input(BenchmarkId::new("encode_map", size), &map, |b, map| {
            b.iter(|| encode_value(black_box(map)))
        });

        if let Some((payload, _)) = encode_value(&set) {
            group.bench_with_input(BenchmarkId::new("decode_set", size), &payload, |b, p| {
                b.iter(|| untransform_value(black_box(p.clone()), "set"))
            });
        }
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_transform_leaves,
    benchmark_untransform_leaves,
    benchmark_array_like_keys,
    benchmark_collections
);
criterion_main!(benches);
