use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use yobatis_docs::request::Request;

fn simple_request_parse_benchmark(c: &mut Criterion) {
    let request: &[u8] = b"GET /usage HTTP/1.1\r\nHost: localhost:7878\r\nUser-Agent: Test\r\n\r\n";

    c.bench_function("simple_request_parse", |b| {
        b.iter(|| Request::try_from(black_box(request), 0));
    });
}

fn browser_request_parse_benchmark(c: &mut Criterion) {
    let request: &[u8] = b"GET /code-intro?tab=dao HTTP/1.1\r\n\
                    Host: localhost:7878\r\n\
                    User-Agent: Mozilla/5.0 (Windows NT 10.0; Win64; x64)\r\n\
                    Accept: text/html,application/xhtml+xml\r\n\
                    Accept-Language: zh-CN,zh;q=0.9\r\n\
                    Accept-Encoding: gzip, deflate, br\r\n\
                    Connection: keep-alive\r\n\
                    \r\n";

    c.bench_function("browser_request_parse", |b| {
        b.iter(|| Request::try_from(black_box(request), 0));
    });
}

fn request_parse_negotiation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("request_parse_negotiation");

    let requests = [
        (
            "document",
            b"GET /usage HTTP/1.1\r\nHost: localhost\r\n\r\n".as_slice(),
        ),
        (
            "fragment",
            b"GET /usage HTTP/1.1\r\nHost: localhost\r\nX-Requested-With: fragment\r\n\r\n".as_slice(),
        ),
        (
            "json",
            b"GET /usage HTTP/1.1\r\nHost: localhost\r\nAccept: application/json\r\n\r\n".as_slice(),
        ),
        (
            "padded",
            b"GET /usage HTTP/1.1\r\nHost: localhost\r\n\r\n\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0".as_slice(),
        ),
    ];

    for (name, request) in requests.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), request, |b, request| {
            b.iter(|| Request::try_from(black_box(request), 0));
        });
    }

    group.finish();
}

fn request_parse_methods_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("request_parse_methods");

    for method in ["GET", "HEAD", "OPTIONS", "POST"] {
        let request = format!("{} /config HTTP/1.1\r\nHost: localhost\r\n\r\n", method);
        group.bench_with_input(BenchmarkId::from_parameter(method), &request, |b, request| {
            b.iter(|| Request::try_from(black_box(request.as_bytes()), 0));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    simple_request_parse_benchmark,
    browser_request_parse_benchmark,
    request_parse_negotiation_benchmark,
    request_parse_methods_benchmark
);
criterion_main!(benches);
