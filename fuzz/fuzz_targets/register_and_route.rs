#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<(String, u32)>, String)| {
    let mut router = deeplink::Router::new();

    for (route, handler) in data.0 {
        if router.register(&route, handler).is_err() {
            return;
        }
    }

    let _ = router.route(&data.1);
});
