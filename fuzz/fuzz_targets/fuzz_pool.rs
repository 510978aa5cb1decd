#![no_main]

use libfuzzer_sys::fuzz_target;
use swem::pooling::{hierarchical_pool, pool, Pooling};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let mut offset = 0;
    let n_tokens = (data[offset] as usize % 32) + 1; // 1-32 tokens
    offset += 1;
    let dim = (data[offset] as usize % 64) + 1; // 1-64 dimensions
    offset += 1;
    let window = data[offset] as usize % 40; // 0-39, may exceed n_tokens
    offset += 1;

    let required_bytes = n_tokens * dim * 4;
    if data.len() < offset + required_bytes {
        return;
    }

    // Build token vectors from fuzz input
    let mut tokens = Vec::with_capacity(n_tokens);
    for _ in 0..n_tokens {
        let mut token = Vec::with_capacity(dim);
        for _ in 0..dim {
            let val = f32::from_le_bytes(data[offset..offset + 4].try_into().unwrap());
            // Skip if NaN or infinite (these are handled but slow down fuzzing)
            if !val.is_finite() {
                return;
            }
            token.push(val);
            offset += 4;
        }
        tokens.push(token);
    }

    // Fixed-method reductions never fail on a well-shaped non-empty input
    let max = pool(&tokens, Pooling::Max).unwrap();
    let avg = pool(&tokens, Pooling::Average).unwrap();
    let cat = pool(&tokens, Pooling::Concat).unwrap();
    assert_eq!(max.len(), dim);
    assert_eq!(avg.len(), dim);
    assert_eq!(cat.len(), 2 * dim);

    // Hierarchical errors iff the window precondition is violated, no panics
    let hier = hierarchical_pool(&tokens, window);
    match hier {
        Ok(out) => {
            assert!(window >= 1 && window <= n_tokens);
            assert_eq!(out.len(), dim);
        }
        Err(_) => assert!(window == 0 || window > n_tokens),
    }
});
