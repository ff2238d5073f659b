use chrono::{TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use serde_json::{Value, json};

use invoiceqc_validation::{InvoiceRecord, ValidationEngine};

/// A record with `lines` consistent line items (one in ten has a math mismatch).
fn raw_invoice(lines: usize) -> Value {
    let items: Vec<Value> = (0..lines)
        .map(|i| {
            let quantity = (i % 7 + 1) as f64;
            let unit_price = 9.99 + (i % 13) as f64;
            let total = if i % 10 == 0 {
                quantity * unit_price + 1.0
            } else {
                quantity * unit_price
            };
            json!({
                "description": format!("Item {i}"),
                "quantity": quantity,
                "unit_price": unit_price,
                "total": total,
            })
        })
        .collect();

    json!({
        "invoice_number": "INV-BENCH",
        "vendor_name": "Acme",
        "invoice_date": "2024-01-15",
        "due_date": "2024-02-15",
        "currency": "USD",
        "total_amount": 1000.0,
        "line_items": items,
    })
}

fn bench_evaluate(c: &mut Criterion) {
    let engine = ValidationEngine::default();
    let now = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();

    let mut group = c.benchmark_group("evaluate");
    for lines in [1usize, 10, 100, 1_000] {
        let record = InvoiceRecord::from_value(&raw_invoice(lines));
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &record, |b, record| {
            b.iter(|| engine.evaluate_at(black_box(record), now));
        });
    }
    group.finish();
}

fn bench_decode_and_evaluate(c: &mut Criterion) {
    let engine = ValidationEngine::default();
    let now = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
    let raw = raw_invoice(100);

    c.bench_function("decode_and_evaluate/100", |b| {
        b.iter(|| {
            let record = InvoiceRecord::from_value(black_box(&raw));
            engine.evaluate_at(&record, now)
        });
    });
}

criterion_group!(benches, bench_evaluate, bench_decode_and_evaluate);
criterion_main!(benches);
