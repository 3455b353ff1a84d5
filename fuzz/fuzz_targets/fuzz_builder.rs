#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    value: String,
    field: Option<String>,
    distance: Option<u32>,
    boost: Option<i64>,
    negate: bool,
    siblings: u8,
}

/// Identifier-shaped strings only: quoting is unescaped by contract, so
/// values carrying quotes, parens, or whitespace are outside the
/// structural invariant's domain.
fn tame(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fuzz_target!(|input: Input| {
    if !tame(&input.value) {
        return;
    }
    if let Some(field) = &input.field {
        if !tame(field) {
            return;
        }
    }

    let mut options = sqx::Options::new();
    if let Some(boost) = input.boost {
        options = options.set("boost", boost);
    }

    let leaf = sqx::near(
        input.value.as_str(),
        input.field.as_deref(),
        input.distance,
        Some(&options),
    );

    let children: Vec<sqx::Expression> = (0..=input.siblings % 8).map(|_| leaf.clone()).collect();
    let combined = sqx::and(&children, Some(&options)).unwrap();
    let expression = if input.negate {
        sqx::not(&combined, None)
    } else {
        combined
    };

    let text = expression.as_str();
    let mut depth: i32 = 0;
    for ch in text.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        assert!(depth >= 0);
    }
    assert_eq!(depth, 0);
    assert!(!text.contains("  "));
    assert!(!text.contains(" )"));
});
