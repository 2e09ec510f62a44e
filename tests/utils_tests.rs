use std::collections::{HashMap, HashSet};

use tinylink::utils::{allocate_unique_code, generate_random_code};

#[test]
fn test_generate_random_code_length() {
    assert_eq!(generate_random_code(6).len(), 6);
    assert_eq!(generate_random_code(10).len(), 10);
    assert_eq!(generate_random_code(1).len(), 1);
    assert_eq!(generate_random_code(0).len(), 0);
}

#[test]
fn test_generate_random_code_characters() {
    let code = generate_random_code(100);
    let valid_chars: HashSet<char> =
        "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789"
            .chars()
            .collect();

    for ch in code.chars() {
        assert!(valid_chars.contains(&ch), "Invalid character: {}", ch);
    }
}

#[test]
fn test_generate_random_code_uniqueness() {
    let mut codes = HashSet::new();

    for _ in 0..1000 {
        codes.insert(generate_random_code(8));
    }

    // 应该生成大量不同的代码
    assert!(
        codes.len() > 990,
        "Generated codes lack sufficient randomness"
    );
}

#[test]
fn test_allocate_unique_code_avoids_taken_keys() {
    let mut taken: HashMap<String, ()> = HashMap::new();
    for _ in 0..500 {
        taken.insert(generate_random_code(6), ());
    }

    for _ in 0..100 {
        let code = allocate_unique_code(&taken, 6);
        assert!(!taken.contains_key(&code));
        // Insert it so later rounds must avoid it too.
        taken.insert(code, ());
    }
}

#[test]
fn test_allocate_unique_code_retries_until_free() {
    // Fill 61 of the 62 single-character codes; the allocator must still
    // land on the one free key.
    let alphabet = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut taken: HashMap<String, ()> = HashMap::new();
    for ch in alphabet.chars().take(61) {
        taken.insert(ch.to_string(), ());
    }

    let code = allocate_unique_code(&taken, 1);
    assert_eq!(code.len(), 1);
    assert!(!taken.contains_key(&code));
}
