// Performance benchmarks for certificate lookups
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use pandaweb::ssl::ssl::{create_certificate_store, generate_self_signed};
use pandaweb::ssl::structs::certificate::Certificate;
use pandaweb::ssl::structs::certificate_store::CertificateStore;

fn create_certificate(common_name: &str, alternate_names: &[String]) -> Certificate {
    let (cert_pem, key_pem) = generate_self_signed(common_name, alternate_names).unwrap();
    Certificate::from_pem(cert_pem.as_bytes(), key_pem.as_bytes()).unwrap()
}

fn create_store(sites: usize) -> Arc<CertificateStore> {
    let store = create_certificate_store();
    store.set_certificates((0..sites).map(|i| {
        let domain = format!("site{}.example", i);
        create_certificate(&domain, &[format!("*.{}", domain)])
    }));
    store
}

fn bench_lookup_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_exact");
    for sites in [1usize, 16, 128] {
        let store = create_store(sites);
        let name = format!("site{}.example", sites - 1);
        group.bench_with_input(BenchmarkId::from_parameter(sites), &name, |b, name| {
            b.iter(|| black_box(store.get_certificate(Some(name)).is_ok()));
        });
    }
    group.finish();
}

fn bench_lookup_wildcard(c: &mut Criterion) {
    let store = create_store(16);
    c.bench_function("lookup_wildcard", |b| {
        b.iter(|| black_box(store.get_certificate(Some("www.site7.example")).is_ok()));
    });
}

fn bench_lookup_default(c: &mut Criterion) {
    let store = create_store(16);
    c.bench_function("lookup_default", |b| {
        b.iter(|| black_box(store.get_certificate(None).is_ok()));
    });
}

fn bench_lookup_miss(c: &mut Criterion) {
    let store = create_store(16);
    c.bench_function("lookup_miss", |b| {
        b.iter(|| black_box(store.get_certificate(Some("unknown.example")).is_err()));
    });
}

fn bench_set_certificates(c: &mut Criterion) {
    let store = create_certificate_store();
    let certificates: Vec<Certificate> = (0..16)
        .map(|i| create_certificate(&format!("site{}.example", i), &[]))
        .collect();
    c.bench_function("set_certificates_16", |b| {
        b.iter(|| store.set_certificates(certificates.clone()));
    });
}

criterion_group!(
    benches,
    bench_lookup_exact,
    bench_lookup_wildcard,
    bench_lookup_default,
    bench_lookup_miss,
    bench_set_certificates
);
criterion_main!(benches);
