//! Golden file integration tests.
//!
//! Reads tests/testdata/matrix_golden.json and verifies every multiplier
//! produces the recorded product. Power-of-two cases go through each
//! strategy directly; other sizes go through the padding boundary.

use std::sync::Arc;

use serde::Deserialize;

use strassen_core::padding::multiply_padded;
use strassen_core::{DefaultFactory, MatmulError, Matrix, Multiplier, MultiplierFactory};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    cases: Vec<GoldenCase>,
}

#[derive(Deserialize)]
struct GoldenCase {
    name: String,
    a: Vec<Vec<i64>>,
    b: Vec<Vec<i64>>,
    product: Vec<Vec<i64>>,
}

struct Case {
    name: String,
    a: Matrix<i64>,
    b: Matrix<i64>,
    product: Matrix<i64>,
}

fn load_golden() -> anyhow::Result<Vec<Case>> {
    // Try workspace root path first, then crate-local path
    let data = std::fs::read_to_string("tests/testdata/matrix_golden.json")
        .or_else(|_| std::fs::read_to_string("../../tests/testdata/matrix_golden.json"))?;
    let golden: GoldenData = serde_json::from_str(&data)?;
    golden
        .cases
        .into_iter()
        .map(|c| {
            Ok(Case {
                name: c.name,
                a: Matrix::from_rows(c.a)?,
                b: Matrix::from_rows(c.b)?,
                product: Matrix::from_rows(c.product)?,
            })
        })
        .collect()
}

fn all_multipliers() -> anyhow::Result<Vec<Arc<dyn Multiplier<i64>>>> {
    let factory = DefaultFactory::<i64>::new();
    Ok(factory
        .available()
        .into_iter()
        .map(|name| factory.get(name))
        .collect::<Result<_, _>>()?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_file_loads() -> anyhow::Result<()> {
    let cases = load_golden()?;
    assert!(cases.len() >= 5);
    assert!(cases.iter().any(|c| c.name == "two_by_two"));
    Ok(())
}

#[test]
fn golden_power_of_two_products() -> anyhow::Result<()> {
    let multipliers = all_multipliers()?;
    for case in load_golden()?
        .iter()
        .filter(|c| c.a.dimension().is_power_of_two())
    {
        for m in &multipliers {
            let product = m.multiply(&case.a, &case.b)?;
            assert_eq!(product, case.product, "{} with {}", case.name, m.name());
        }
    }
    Ok(())
}

#[test]
fn golden_non_power_of_two_products() -> anyhow::Result<()> {
    let multipliers = all_multipliers()?;
    let cases = load_golden()?;
    let odd: Vec<_> = cases
        .iter()
        .filter(|c| !c.a.dimension().is_power_of_two())
        .collect();
    assert!(!odd.is_empty());

    for case in odd {
        for m in &multipliers {
            let product = multiply_padded(m.as_ref(), &case.a, &case.b)?;
            assert_eq!(product, case.product, "{} padded with {}", case.name, m.name());
        }

        // Without padding only the naive oracle accepts the size.
        for m in &multipliers[1..] {
            let err = m.multiply(&case.a, &case.b).unwrap_err();
            assert!(
                matches!(err, MatmulError::InvalidDimension { .. }),
                "{}: {err}",
                m.name()
            );
        }
    }
    Ok(())
}
