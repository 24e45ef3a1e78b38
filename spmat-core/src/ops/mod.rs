//! Algebraic operations on sparse stores
//!
//! Every operation borrows its operands, checks shapes before allocating, and
//! returns a freshly built [`SparseStore`]. Results are written only through
//! `set_element`, so cancellation to zero leaves no entry behind.

pub mod row_index;

pub use row_index::RowIndex;

use alloc::collections::BTreeMap;

use crate::{MatrixElement, Result, SparseStore, SpmatError};

/// Element-wise sum of two equally shaped matrices
pub fn add<T: MatrixElement>(a: &SparseStore<T>, b: &SparseStore<T>) -> Result<SparseStore<T>> {
    combine(a, b, "add", T::checked_add)
}

/// Element-wise difference `a - b` of two equally shaped matrices
pub fn subtract<T: MatrixElement>(
    a: &SparseStore<T>,
    b: &SparseStore<T>,
) -> Result<SparseStore<T>> {
    combine(a, b, "subtract", T::checked_sub)
}

/// Matrix product `a * b`
///
/// `b` is grouped by row once, then each entry `a[i, k]` meets only the
/// entries of row `k` of `b`. The work is proportional to the number of
/// non-zero partial products rather than to `rows * inner * cols`.
///
/// Each output row is summed in `T::Wide` and narrowed once per cell, so
/// the outcome depends only on the final sums and not on the order of the
/// contributions.
pub fn multiply<T: MatrixElement>(
    a: &SparseStore<T>,
    b: &SparseStore<T>,
) -> Result<SparseStore<T>> {
    if a.ncols() != b.nrows() {
        return Err(SpmatError::DimensionMismatch {
            op: "multiply",
            lhs: a.dimensions(),
            rhs: b.dimensions(),
        });
    }

    let index = RowIndex::build(b);
    let mut result: SparseStore<T> = SparseStore::new(a.nrows(), b.ncols());
    let mut sums: BTreeMap<usize, T::Wide> = BTreeMap::new();
    let mut current = None;

    for (i, k, lhs) in a.non_zero_entries() {
        if current != Some(i) {
            if let Some(row) = current {
                flush_row(&mut result, row, &mut sums)?;
            }
            current = Some(i);
        }
        for &(j, rhs) in index.row(k) {
            let product = lhs.wide_mul(rhs);
            match sums.get_mut(&j) {
                Some(sum) => {
                    *sum = T::wide_add(*sum, product)
                        .ok_or(SpmatError::ArithmeticOverflow { row: i, col: j })?;
                }
                None => {
                    sums.insert(j, product);
                }
            }
        }
    }
    if let Some(row) = current {
        flush_row(&mut result, row, &mut sums)?;
    }

    Ok(result)
}

fn flush_row<T: MatrixElement>(
    result: &mut SparseStore<T>,
    row: usize,
    sums: &mut BTreeMap<usize, T::Wide>,
) -> Result<()> {
    for (col, sum) in core::mem::take(sums) {
        let value = T::from_wide(sum).ok_or(SpmatError::ArithmeticOverflow { row, col })?;
        result.set_element(row, col, value)?;
    }
    Ok(())
}

/// Every entry multiplied by -1
pub fn negate<T: MatrixElement>(a: &SparseStore<T>) -> Result<SparseStore<T>> {
    let (rows, cols) = a.dimensions();
    let mut result = SparseStore::new(rows, cols);
    for (row, col, value) in a.non_zero_entries() {
        let negated = value
            .checked_neg()
            .ok_or(SpmatError::ArithmeticOverflow { row, col })?;
        result.set_element(row, col, negated)?;
    }
    Ok(result)
}

fn combine<T, F>(
    a: &SparseStore<T>,
    b: &SparseStore<T>,
    op: &'static str,
    merge: F,
) -> Result<SparseStore<T>>
where
    T: MatrixElement,
    F: Fn(T, T) -> Option<T>,
{
    if a.dimensions() != b.dimensions() {
        return Err(SpmatError::DimensionMismatch {
            op,
            lhs: a.dimensions(),
            rhs: b.dimensions(),
        });
    }

    let (rows, cols) = a.dimensions();
    let mut result = SparseStore::new(rows, cols);
    for (row, col, value) in a.non_zero_entries() {
        result.set_element(row, col, value)?;
    }
    for (row, col, value) in b.non_zero_entries() {
        let merged = merge(result.get_element(row, col)?, value)
            .ok_or(SpmatError::ArithmeticOverflow { row, col })?;
        result.set_element(row, col, merged)?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn store(rows: usize, cols: usize, entries: &[(usize, usize, i64)]) -> SparseStore {
        SparseStore::from_entries(rows, cols, entries.iter().copied()).unwrap()
    }

    fn triples(store: &SparseStore) -> Vec<(usize, usize, i64)> {
        store.non_zero_entries().collect()
    }

    fn random_store(rng: &mut StdRng, rows: usize, cols: usize, nnz: usize) -> SparseStore {
        let mut store = SparseStore::new(rows, cols);
        for _ in 0..nnz {
            let row = rng.gen_range(0..rows);
            let col = rng.gen_range(0..cols);
            store
                .set_element(row, col, rng.gen_range(-50i64..=50))
                .unwrap();
        }
        store
    }

    fn a() -> SparseStore {
        store(2, 2, &[(0, 0, 1), (1, 1, 2)])
    }

    fn b() -> SparseStore {
        store(2, 2, &[(0, 0, 5), (0, 1, 3)])
    }

    #[test]
    fn test_add() {
        let sum = add(&a(), &b()).unwrap();
        assert_eq!(triples(&sum), vec![(0, 0, 6), (0, 1, 3), (1, 1, 2)]);
        assert_eq!(sum.dimensions(), (2, 2));
    }

    #[test]
    fn test_subtract() {
        let diff = subtract(&a(), &b()).unwrap();
        assert_eq!(triples(&diff), vec![(0, 0, -4), (0, 1, -3), (1, 1, 2)]);
    }

    #[test]
    fn test_multiply() {
        let product = multiply(&a(), &b()).unwrap();
        assert_eq!(triples(&product), vec![(0, 0, 5), (0, 1, 3)]);
        assert_eq!(product.get_element(1, 1), Ok(0));
    }

    #[test]
    fn test_cancellation_leaves_no_entry() {
        let x = store(2, 3, &[(0, 1, 4), (1, 2, -9)]);
        let y = store(2, 3, &[(0, 1, -4), (1, 2, 1)]);

        let sum = add(&x, &y).unwrap();
        assert_eq!(triples(&sum), vec![(1, 2, -8)]);

        let diff = subtract(&x, &x).unwrap();
        assert!(diff.is_empty());
    }

    #[test]
    fn test_multiply_accumulates_contributions() {
        // (0,0) receives 1*2 + 3*4 through k = 0 and k = 1
        let x = store(1, 2, &[(0, 0, 1), (0, 1, 3)]);
        let y = store(2, 1, &[(0, 0, 2), (1, 0, 4)]);
        let product = multiply(&x, &y).unwrap();
        assert_eq!(product.dimensions(), (1, 1));
        assert_eq!(triples(&product), vec![(0, 0, 14)]);

        // contributions that cancel leave nothing stored
        let y = store(2, 1, &[(0, 0, 3), (1, 0, -1)]);
        assert!(multiply(&x, &y).unwrap().is_empty());
    }

    #[test]
    fn test_multiply_rectangular() {
        let x = store(2, 3, &[(0, 2, 2), (1, 0, 1)]);
        let y = store(3, 4, &[(2, 3, 5), (0, 1, -1), (1, 1, 8)]);
        let product = multiply(&x, &y).unwrap();
        assert_eq!(product.dimensions(), (2, 4));
        assert_eq!(triples(&product), vec![(0, 3, 10), (1, 1, -1)]);
    }

    #[test]
    fn test_multiply_by_zero_matrix() {
        let x = store(3, 2, &[(0, 0, 1), (2, 1, 7)]);
        let zero = SparseStore::new(2, 5);
        let product = multiply(&x, &zero).unwrap();
        assert_eq!(product.dimensions(), (3, 5));
        assert!(product.is_empty());
    }

    #[test]
    fn test_dimension_mismatch() {
        let x = store(2, 3, &[(0, 0, 1)]);
        let y = store(3, 2, &[(0, 0, 1)]);

        assert_eq!(
            add(&x, &y),
            Err(SpmatError::DimensionMismatch {
                op: "add",
                lhs: (2, 3),
                rhs: (3, 2)
            })
        );
        assert_eq!(
            subtract(&x, &y),
            Err(SpmatError::DimensionMismatch {
                op: "subtract",
                lhs: (2, 3),
                rhs: (3, 2)
            })
        );
        assert_eq!(
            multiply(&x, &x),
            Err(SpmatError::DimensionMismatch {
                op: "multiply",
                lhs: (2, 3),
                rhs: (2, 3)
            })
        );
        assert!(multiply(&x, &y).is_ok());
    }

    #[test]
    fn test_operands_untouched() {
        let x = a();
        let y = b();
        let _ = add(&x, &y).unwrap();
        let _ = subtract(&x, &y).unwrap();
        let _ = multiply(&x, &y).unwrap();
        assert_eq!(x, a());
        assert_eq!(y, b());
    }

    #[test]
    fn test_overflow_reported() {
        let x = SparseStore::from_entries(1, 1, vec![(0, 0, i32::MAX)]).unwrap();
        let y = SparseStore::from_entries(1, 1, vec![(0, 0, 1i32)]).unwrap();

        assert_eq!(
            add(&x, &y),
            Err(SpmatError::ArithmeticOverflow { row: 0, col: 0 })
        );
        assert_eq!(
            multiply(&x, &store_i32(1, 1, 2)),
            Err(SpmatError::ArithmeticOverflow { row: 0, col: 0 })
        );

        let min = SparseStore::from_entries(1, 1, vec![(0, 0, i32::MIN)]).unwrap();
        assert!(negate(&min).is_err());
    }

    #[test]
    fn test_multiply_independent_of_accumulation_order() {
        // the running sum passes i32::MAX before the last contribution
        let a = SparseStore::from_entries(1, 3, vec![(0, 0, i32::MAX), (0, 1, 1), (0, 2, 1)])
            .unwrap();
        let b = SparseStore::from_entries(3, 1, vec![(0, 0, 1i32), (1, 0, 1), (2, 0, -1)])
            .unwrap();
        let product = multiply(&a, &b).unwrap();
        assert_eq!(product.get_element(0, 0), Ok(i32::MAX));

        let a = SparseStore::from_entries(1, 3, vec![(0, 0, 1i32), (0, 1, 1), (0, 2, i32::MAX)])
            .unwrap();
        let b = SparseStore::from_entries(3, 1, vec![(0, 0, 1i32), (1, 0, -1), (2, 0, 1)])
            .unwrap();
        assert_eq!(multiply(&a, &b).unwrap().get_element(0, 0), Ok(i32::MAX));
    }

    #[test]
    fn test_multiply_cancellation_leaves_no_entry() {
        let a = store(1, 2, &[(0, 0, 3), (0, 1, 2)]);
        let b = store(2, 1, &[(0, 0, 2), (1, 0, -3)]);
        assert_eq!(multiply(&a, &b).unwrap().nnz(), 0);
    }

    fn store_i32(rows: usize, cols: usize, value: i32) -> SparseStore<i32> {
        SparseStore::from_entries(rows, cols, vec![(0, 0, value)]).unwrap()
    }

    #[test]
    fn test_negate() {
        let x = store(2, 2, &[(0, 1, 3), (1, 0, -2)]);
        assert_eq!(triples(&negate(&x).unwrap()), vec![(0, 1, -3), (1, 0, 2)]);
    }

    #[test]
    fn test_add_commutes() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let x = random_store(&mut rng, 6, 9, 15);
            let y = random_store(&mut rng, 6, 9, 15);
            assert_eq!(add(&x, &y).unwrap(), add(&y, &x).unwrap());
        }
    }

    #[test]
    fn test_subtract_is_add_of_negation() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let x = random_store(&mut rng, 5, 5, 12);
            let y = random_store(&mut rng, 5, 5, 12);
            let expected = add(&x, &negate(&y).unwrap()).unwrap();
            assert_eq!(subtract(&x, &y).unwrap(), expected);
        }
    }

    #[test]
    fn test_multiply_matches_dense() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..10 {
            let (n, m, p) = (4, 6, 3);
            let x = random_store(&mut rng, n, m, 8);
            let y = random_store(&mut rng, m, p, 8);
            let product = multiply(&x, &y).unwrap();

            for i in 0..n {
                for j in 0..p {
                    let mut dense = 0i64;
                    for k in 0..m {
                        dense += x.get_element(i, k).unwrap() * y.get_element(k, j).unwrap();
                    }
                    assert_eq!(product.get_element(i, j), Ok(dense));
                }
            }
            assert!(product.non_zero_entries().all(|(_, _, v)| v != 0));
        }
    }
}
