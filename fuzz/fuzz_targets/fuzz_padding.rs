#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_core::padding::multiply_padded;
use strassen_core::{Matrix, Multiplier, NaiveMultiplier, StrassenMultiplier};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Any dimension in 1..=24, padded up to a power of two.
    let n = usize::from(data[0] % 24) + 1;
    let cells = &data[1..];
    let cell = |idx: usize| i64::from(cells[idx % cells.len()] as i8);

    let (Ok(a), Ok(b)) = (
        Matrix::from_fn(n, |i, j| cell(i * n + j)),
        Matrix::from_fn(n, |i, j| cell(i * n + j + 7)),
    ) else {
        return;
    };

    let expected = NaiveMultiplier.multiply(&a, &b).expect("naive accepts any size");
    let padded = multiply_padded(&StrassenMultiplier::new(), &a, &b).expect("padding aligns size");
    assert_eq!(padded, expected, "padded Strassen != Naive at n={n}");
});
