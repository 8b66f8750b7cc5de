use crate::error::{ChartError, Result};

/// Immutable table: one heading per column (objects column first), one label per row,
/// and a `rows × columns` matrix of finite numbers.
///
/// Negative cells are kept; [`Table::vector`] refuses the column that holds them, so only
/// the charts drawn from that column fail.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headings: Vec<String>,
    objects: Vec<String>,
    data: Vec<Vec<f64>>,
}

impl Table {
    /// Build a table, enforcing the shape and value invariants.
    ///
    /// `headings[0]` names the objects column and `headings[i + 1]` names data column `i`.
    /// Every row must have `headings.len() - 1` finite cells.
    pub fn new(headings: Vec<String>, objects: Vec<String>, data: Vec<Vec<f64>>) -> Result<Self> {
        if headings.len() < 2 {
            return Err(ChartError::EmptyInput);
        }
        let columns = headings.len() - 1;
        if objects.len() != data.len() {
            return Err(ChartError::LengthMismatch {
                heading: headings[0].clone(),
                expected: data.len(),
                found: objects.len(),
            });
        }
        for (row, cells) in data.iter().enumerate() {
            // +2: one for the heading line, one for 1-based numbering
            let line = row + 2;
            if cells.len() != columns {
                return Err(ChartError::MalformedRow {
                    line,
                    expected: columns + 1,
                    found: cells.len() + 1,
                });
            }
            for (column, &value) in cells.iter().enumerate() {
                if !value.is_finite() {
                    return Err(ChartError::NotANumber {
                        line,
                        column: column + 1,
                        cell: value.to_string(),
                    });
                }
            }
        }
        Ok(Self {
            headings,
            objects,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.objects.len()
    }

    /// Number of numeric columns (the objects column is not counted).
    pub fn columns(&self) -> usize {
        self.headings.len() - 1
    }

    pub fn headings(&self) -> &[String] {
        &self.headings
    }

    pub fn heading(&self, index: usize) -> Option<&str> {
        self.headings.get(index).map(String::as_str)
    }

    pub fn value(&self, row: usize, column: usize) -> Option<f64> {
        self.data.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Row labels, named by the first heading.
    pub fn objects(&self) -> Vector<String> {
        Vector::new(self.headings[0].clone(), self.objects.clone())
    }

    /// Numeric column `column` (0-based, counted after the objects column).
    ///
    /// Fails with [`ChartError::NegativeValue`] at the first negative cell of the column.
    pub fn vector(&self, column: usize) -> Result<Vector<f64>> {
        if column >= self.columns() {
            return Err(ChartError::ColumnOutOfRange {
                column,
                columns: self.columns(),
            });
        }
        let values: Vec<f64> = self.data.iter().map(|row| row[column]).collect();
        if let Some((row, &value)) = values.iter().enumerate().find(|(_, v)| **v < 0.0) {
            return Err(ChartError::NegativeValue {
                line: row + 2,
                column: column + 1,
                value,
            });
        }
        Ok(Vector::new(self.headings[column + 1].clone(), values))
    }
}

/// A named ordered sequence: either the row labels or one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    heading: String,
    data: Vec<T>,
}

impl<T> Vector<T> {
    pub fn new(heading: impl Into<String>, data: Vec<T>) -> Self {
        Self {
            heading: heading.into(),
            data,
        }
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Vector<f64> {
    /// Largest value, `0.0` for an empty vector.
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(0.0, f64::max)
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}

/// One (label, value) data point; the unit a chart draws and a tooltip reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mark<'a> {
    pub label: &'a str,
    pub value: f64,
}

/// Pair labels with values at the same index.
pub fn marks<'a>(
    objects: &'a Vector<String>,
    values: &'a Vector<f64>,
) -> impl Iterator<Item = Mark<'a>> + 'a {
    objects
        .data()
        .iter()
        .zip(values.data())
        .map(|(label, &value)| Mark {
            label: label.as_str(),
            value,
        })
}

/// All vectors of one chart must carry one entry per row.
pub fn ensure_same_len(objects: &Vector<String>, vectors: &[&Vector<f64>]) -> Result<()> {
    if objects.is_empty() {
        return Err(ChartError::NoRows);
    }
    for v in vectors {
        if v.len() != objects.len() {
            return Err(ChartError::LengthMismatch {
                heading: v.heading().to_string(),
                expected: objects.len(),
                found: v.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Table {
        Table::new(
            vec!["all".into(), "n1".into(), "n2".into()],
            vec!["a".into(), "b".into()],
            vec![vec![1.0, 9.0], vec![2.0, 7.0]],
        )
        .unwrap()
    }

    #[test]
    fn vector_is_named_by_its_heading() {
        let t = small();
        assert_eq!(t.vector(1).unwrap(), Vector::new("n2", vec![9.0, 7.0]));
        assert_eq!(t.objects().heading(), "all");
        assert_eq!(t.value(1, 0), Some(2.0));
        assert_eq!(t.value(2, 0), None);
    }

    #[test]
    fn column_past_the_end_is_rejected() {
        let t = small();
        assert!(matches!(
            t.vector(2),
            Err(ChartError::ColumnOutOfRange { column: 2, columns: 2 })
        ));
    }

    #[test]
    fn negative_cell_rejects_only_its_column() {
        let t = Table::new(
            vec!["all".into(), "n1".into(), "n2".into()],
            vec!["a".into(), "b".into()],
            vec![vec![1.0, 3.0], vec![-1.0, 4.0]],
        )
        .unwrap();
        assert!(matches!(
            t.vector(0),
            Err(ChartError::NegativeValue { line: 3, column: 1, value }) if value == -1.0
        ));
        assert_eq!(t.vector(1).unwrap().data(), &[3.0, 4.0]);
    }

    #[test]
    fn marks_pair_labels_and_values() {
        let t = small();
        let objects = t.objects();
        let v = t.vector(0).unwrap();
        let m: Vec<_> = marks(&objects, &v).collect();
        assert_eq!(m[1], Mark { label: "b", value: 2.0 });
    }

    #[test]
    fn mismatched_lengths_fail() {
        let objects = Vector::new("all", vec!["a".to_string(), "b".to_string()]);
        let short = Vector::new("x", vec![1.0]);
        assert!(matches!(
            ensure_same_len(&objects, &[&short]),
            Err(ChartError::LengthMismatch { expected: 2, found: 1, .. })
        ));
    }
}
