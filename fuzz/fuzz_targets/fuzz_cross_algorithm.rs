#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_core::{Matrix, Multiplier, NaiveMultiplier, RecursiveMultiplier, StrassenMultiplier};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte picks n = 2^k for k in 0..=5; the rest fill A then B.
    let n = 1usize << (data[0] % 6);
    let cells = &data[1..];
    let cell = |idx: usize| i64::from(cells[idx % cells.len()] as i8);

    let (Ok(a), Ok(b)) = (
        Matrix::from_fn(n, |i, j| cell(i * n + j)),
        Matrix::from_fn(n, |i, j| cell(n * n + i * n + j)),
    ) else {
        return;
    };

    let naive = NaiveMultiplier.multiply(&a, &b);
    let recursive = RecursiveMultiplier::new().multiply(&a, &b);
    let strassen = StrassenMultiplier::new().multiply(&a, &b);

    match (naive, recursive, strassen) {
        (Ok(nv), Ok(r), Ok(s)) => {
            assert_eq!(nv, r, "Naive != Recursive at n={n}");
            assert_eq!(nv, s, "Naive != Strassen at n={n}");
        }
        _ => panic!("power-of-two operands must multiply at n={n}"),
    }
});
