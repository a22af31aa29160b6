use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fixturegen::adapters::fake_provider::FakeValueProvider;
use fixturegen::adapters::random_string::{generate_random_string, Charset};
use fixturegen::adapters::request_builder::RequestBuilder;
use fixturegen::application::Evaluator;
use fixturegen::domain::FieldDef;
use axum::http::Method;

fn user_schema() -> Vec<FieldDef> {
    vec![
        FieldDef::uuid("id"),
        FieldDef::string("email", "{firstname}.{lastname}@example.com"),
        FieldDef::int("age").with_int_range(18, 90),
        FieldDef::float("score").with_float_range(0.0, 5.0),
        FieldDef::bool("active"),
        FieldDef::fixed_char("code", 8),
        FieldDef::static_value("role", "member"),
    ]
}

fn benchmark_flat_schema(c: &mut Criterion) {
    let fields = user_schema();
    let mut evaluator = Evaluator::new(FakeValueProvider::seeded(1));

    c.bench_function("evaluate_flat_schema", |b| {
        b.iter(|| evaluator.evaluate(black_box(&fields)).unwrap());
    });
}

fn benchmark_nested_lists(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_nested_lists");

    for width in [1i64, 5, 25] {
        let fields = vec![
            FieldDef::uuid("order_id"),
            FieldDef::object_list(
                "items",
                vec![
                    FieldDef::fixed_char("sku", 6),
                    FieldDef::int("quantity").with_int_range(1, 10),
                    FieldDef::object_list("tags", vec![FieldDef::string("label", "{word}")])
                        .with_int_range(2, 2),
                ],
            )
            .with_int_range(width, width),
        ];
        let mut evaluator = Evaluator::new(FakeValueProvider::seeded(width as u64));

        group.bench_with_input(BenchmarkId::from_parameter(width), &fields, |b, fields| {
            b.iter(|| evaluator.evaluate(black_box(fields)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_build_request(c: &mut Criterion) {
    let fields = user_schema();
    let mut builder = RequestBuilder::new(Evaluator::new(FakeValueProvider::seeded(2)));

    c.bench_function("build_request", |b| {
        b.iter(|| {
            builder
                .build_request(Method::POST, "/users", black_box(&fields))
                .unwrap()
        });
    });
}

fn benchmark_random_string(c: &mut Criterion) {
    c.bench_function("random_string_32", |b| {
        b.iter(|| generate_random_string(black_box(32), Charset::CaseSensitive));
    });
}

criterion_group!(
    benches,
    benchmark_flat_schema,
    benchmark_nested_lists,
    benchmark_build_request,
    benchmark_random_string
);
criterion_main!(benches);
