#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|pairs: Vec<(String, i64)>| {
    let tame = pairs
        .iter()
        .all(|(name, _)| !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric()));
    if !tame {
        return;
    }

    let options: sqx::Options = pairs.into_iter().collect();
    let fragment = options.to_query_fragment();

    if options.is_empty() {
        assert!(fragment.is_empty());
    } else {
        assert_eq!(fragment.matches(' ').count(), options.len() - 1);
        assert!(!fragment.starts_with(' '));
        assert!(!fragment.ends_with(' '));
    }
});
