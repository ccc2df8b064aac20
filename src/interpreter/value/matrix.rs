use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// A dense two-dimensional matrix stored in row-major order.
///
/// Elements are ordinary [`Value`]s, so a matrix may hold numbers, strings or
/// other matrices (block matrices). The shape is fixed at construction;
/// `data.len() == rows * cols` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Value>,
}

impl Matrix {
    /// Builds a matrix from its rows.
    ///
    /// An empty list of rows yields the `0x0` matrix.
    ///
    /// # Errors
    /// Returns `DimensionError` if the rows have different lengths.
    ///
    /// ## Example
    /// ```
    /// use matlang::interpreter::value::{core::Value, matrix::Matrix};
    ///
    /// let m = Matrix::from_rows(vec![vec![Value::Integer(1), Value::Integer(2)],
    ///                                vec![Value::Integer(3), Value::Integer(4)]]).unwrap();
    /// assert_eq!(m.shape(), (2, 2));
    /// assert_eq!(m.get(1, 0).unwrap(), &Value::Integer(3));
    ///
    /// let jagged = Matrix::from_rows(vec![vec![Value::Integer(1)], vec![]]);
    /// assert!(jagged.is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Value>>) -> EvalResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != cols) {
            return Err(RuntimeError::DimensionError {
                details: "Jagged matrix literal (rows with different lengths)".to_string(),
                line: None,
            });
        }

        Ok(Self { rows: rows.len(),
                  cols,
                  data: rows.into_iter().flatten().collect() })
    }

    /// Creates a `rows x cols` matrix with every element set to `value`.
    ///
    /// # Errors
    /// Returns `DimensionError` if the shape has more elements than can be
    /// stored.
    ///
    /// ## Example
    /// ```
    /// use matlang::interpreter::value::{core::Value, matrix::Matrix};
    ///
    /// let m = Matrix::filled(2, 3, &Value::Integer(7)).unwrap();
    /// assert_eq!(m.get(1, 2).unwrap(), &Value::Integer(7));
    ///
    /// let huge = Matrix::filled(1 << 32, 1 << 32, &Value::Integer(0));
    /// assert_eq!(huge.unwrap_err().kind(), "DimensionError");
    /// ```
    pub fn filled(rows: usize, cols: usize, value: &Value) -> EvalResult<Self> {
        let mut data = storage(rows, cols)?;
        data.resize(rows * cols, value.clone());
        Ok(Self { rows, cols, data })
    }

    /// Creates a `rows x cols` float matrix with ones on the main diagonal
    /// and zeros elsewhere. For non-square shapes the diagonal has
    /// `min(rows, cols)` ones.
    ///
    /// # Errors
    /// Returns `DimensionError` if the shape has more elements than can be
    /// stored.
    pub fn identity(rows: usize, cols: usize) -> EvalResult<Self> {
        let mut data = storage(rows, cols)?;
        data.extend((0..rows * cols).map(|i| {
                                        Value::Real(if i / cols == i % cols { 1.0 } else { 0.0 })
                                    }));
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix from row-major elements produced by `element(row,
    /// col)`.
    ///
    /// # Errors
    /// - `DimensionError` if the shape has more elements than can be stored.
    /// - The first error returned by `element`.
    pub fn try_from_fn(rows: usize,
                       cols: usize,
                       mut element: impl FnMut(usize, usize) -> EvalResult<Value>)
                       -> EvalResult<Self> {
        let mut data = storage(rows, cols)?;
        for row in 0..rows {
            for col in 0..cols {
                data.push(element(row, col)?);
            }
        }
        Ok(Self { rows, cols, data })
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// The `(rows, cols)` pair.
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Borrows the element at `(row, col)`.
    ///
    /// # Errors
    /// Returns `IndexError` if either index is outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> EvalResult<&Value> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(&self.data[row * self.cols + col])
    }

    /// Copies row `row` out as a `1 x cols` matrix.
    ///
    /// # Errors
    /// Returns `IndexError` if the row does not exist.
    pub fn row(&self, row: usize) -> EvalResult<Self> {
        self.check_row(row)?;
        let start = row * self.cols;
        Ok(Self { rows: 1,
                  cols: self.cols,
                  data: self.data[start..start + self.cols].to_vec() })
    }

    /// Overwrites the element at `(row, col)`.
    ///
    /// # Errors
    /// Returns `IndexError` if either index is outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: Value) -> EvalResult<()> {
        self.check_row(row)?;
        self.check_col(col)?;
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Overwrites row `row` with the elements of a `1 x cols` matrix.
    ///
    /// # Errors
    /// - `IndexError` if the row does not exist.
    /// - `DimensionError` if `values` is not a single row of matching width.
    pub fn set_row(&mut self, row: usize, values: &Self) -> EvalResult<()> {
        self.check_row(row)?;
        if values.shape() != (1, self.cols) {
            return Err(RuntimeError::DimensionError {
                details: format!("Cannot assign a ({}x{}) matrix to a row of width {}",
                                 values.rows, values.cols, self.cols),
                line: None,
            });
        }
        let start = row * self.cols;
        self.data[start..start + self.cols].clone_from_slice(&values.data);
        Ok(())
    }

    /// Returns the transpose. Elements are moved, not transposed themselves.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self.data[row * self.cols + col].clone());
            }
        }
        Self { rows: self.cols,
               cols: self.rows,
               data }
    }

    /// Applies `f` to every element, keeping the shape.
    ///
    /// # Errors
    /// Propagates the first error returned by `f`.
    pub fn map(&self, f: impl FnMut(&Value) -> EvalResult<Value>) -> EvalResult<Self> {
        Ok(Self { rows: self.rows,
                  cols: self.cols,
                  data: self.data.iter().map(f).collect::<EvalResult<_>>()? })
    }

    /// Combines two matrices of equal shape element by element.
    ///
    /// # Errors
    /// Propagates the first error returned by `f`. Shapes must be checked by
    /// the caller, which knows how to word the mismatch.
    pub fn zip_with(&self,
                    other: &Self,
                    mut f: impl FnMut(&Value, &Value) -> EvalResult<Value>)
                    -> EvalResult<Self> {
        debug_assert_eq!(self.shape(), other.shape());
        Ok(Self { rows: self.rows,
                  cols: self.cols,
                  data: self.data
                            .iter()
                            .zip(&other.data)
                            .map(|(a, b)| f(a, b))
                            .collect::<EvalResult<_>>()? })
    }

    /// Iterates over the rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Value]> {
        (0..self.rows).map(|row| &self.data[row * self.cols..(row + 1) * self.cols])
    }

    fn check_row(&self, row: usize) -> EvalResult<()> {
        if row < self.rows {
            Ok(())
        } else {
            Err(out_of_bounds(row, 0, self.rows))
        }
    }

    fn check_col(&self, col: usize) -> EvalResult<()> {
        if col < self.cols {
            Ok(())
        } else {
            Err(out_of_bounds(col, 1, self.cols))
        }
    }
}

/// Reserves room for the elements of a `rows x cols` matrix.
fn storage(rows: usize, cols: usize) -> EvalResult<Vec<Value>> {
    let too_large = || RuntimeError::DimensionError {
        details: format!("Matrix shape ({rows}x{cols}) is too large"),
        line:    None,
    };
    let len = rows.checked_mul(cols).ok_or_else(too_large)?;
    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|_| too_large())?;
    Ok(data)
}

fn out_of_bounds(index: usize, dimension: usize, size: usize) -> RuntimeError {
    RuntimeError::IndexError { details: format!("Index {index} out of bounds for dimension \
                                                 {dimension} of matrix (size {size})"),
                               line:    None, }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (index, row) in self.row_slices().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (col, value) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
