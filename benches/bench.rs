use criterion::{black_box, criterion_group, criterion_main, Criterion};

use deeplink::Router;

const ROUTES: &[&str] = &[
    "app://store",
    "app://store/products",
    "app://store/products/:id",
    "app://store/products/:id/reviews",
    "app://store/products/:id/reviews/:review",
    "app://store/cart",
    "app://store/cart/items/:item",
    "app://store/search/**terms",
    "app://account/profile",
    "app://account/profile/:section",
    "app://account/orders",
    "app://account/orders/:id",
    "app://account/orders/:id/track",
    "app://support/*/contact",
    "app://support/faq/**topic",
    "http://www.example.com/products/:id",
    "http://www.example.com/campaigns/:campaign/products/:id",
    "https://www.example.com/products/:id",
    "/fallback/:reason",
];

const URLS: &[&str] = &[
    "app://store",
    "app://store/products",
    "app://store/products/1047",
    "app://store/products/1047/reviews",
    "app://store/products/1047/reviews/33",
    "app://store/cart",
    "app://store/cart/items/8",
    "app://store/search/red/shoes/size/42",
    "app://account/profile",
    "app://account/profile/privacy",
    "app://account/orders",
    "app://account/orders/991",
    "app://account/orders/991/track",
    "app://support/billing/contact",
    "app://support/faq/returns/damaged",
    "HTTP://WWW.EXAMPLE.COM/products/1047",
    "http://www.example.com/campaigns/summer/products/1047",
    "https://www.example.com/products/1047",
    "other://anywhere/fallback/timeout",
];

fn route_urls(c: &mut Criterion) {
    let mut router = Router::new();
    for route in ROUTES {
        router.register(route, true).unwrap();
    }

    c.bench_function("route", |b| {
        b.iter(|| {
            for url in black_box(URLS) {
                let matched = black_box(router.route(url).unwrap());
                assert!(*matched.handler);
            }
        });
    });
}

fn register_routes(c: &mut Criterion) {
    c.bench_function("register", |b| {
        b.iter(|| {
            let mut router = Router::new();
            for route in black_box(ROUTES) {
                router.register(route, true).unwrap();
            }
            router
        });
    });
}

criterion_group!(benches, route_urls, register_routes);
criterion_main!(benches);
