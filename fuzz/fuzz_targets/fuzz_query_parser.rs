#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Interpretation is total: it must never panic, and stripping keywords
    // never produces a name with stray separators
    let filters = shipsearch::query::parse_query(data);
    if filters.has_classification() {
        assert_eq!(filters.ship_name.trim(), filters.ship_name);
        assert!(!filters.ship_name.contains([',', ';']));
    }
});
