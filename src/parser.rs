//! Text to matrix conversion.
//!
//! Rows are separated by newlines or semicolons, values within a row by commas
//! and/or whitespace. Runs of separators collapse and empty rows are ignored,
//! so `"1, 2; 3 4\n\n"` parses as a 2x2 matrix.

use crate::error::ParseError;
use crate::types::{Matrix, empty_matrix};

fn is_row_separator(c: char) -> bool {
    c == '\n' || c == ';'
}

fn is_value_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

fn parse_value(token: &str, row: usize) -> Result<f64, ParseError> {
    match token.parse::<f64>() {
        Ok(v) if !v.is_nan() => Ok(v),
        _ => Err(ParseError::NonNumeric {
            row,
            token: token.to_string(),
        }),
    }
}

/// Parse free-form delimited text into a rectangular matrix.
///
/// Returns the empty matrix when the text contains no rows. The width of the
/// first row is the width every other row must match.
pub fn parse_matrix(text: &str) -> Result<Matrix, ParseError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (row, line) in text
        .trim()
        .split(is_row_separator)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
    {
        let values = line
            .split(is_value_separator)
            .filter(|token| !token.is_empty())
            .map(|token| parse_value(token, row))
            .collect::<Result<Vec<f64>, _>>()?;
        rows.push(values);
    }

    matrix_from_rows(&rows)
}

/// Build a matrix from numeric rows, enforcing rectangularity.
pub fn matrix_from_rows(rows: &[Vec<f64>]) -> Result<Matrix, ParseError> {
    let Some(first) = rows.first() else {
        return Ok(empty_matrix());
    };

    let width = first.len();
    if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
        return Err(ParseError::InconsistentRowLength {
            row,
            expected: width,
            found: r.len(),
        });
    }

    Ok(Matrix::from_row_iterator(
        rows.len(),
        width,
        rows.iter().flatten().copied(),
    ))
}

/// Write a matrix back as text: values separated by spaces, rows by newlines.
///
/// This is the form preset matrices are pasted into an editable text field;
/// [`parse_matrix`] reads it back unchanged.
pub fn format_matrix(matrix: &Matrix) -> String {
    join_rows(matrix, " ")
}

/// Tab-separated numeric table for display. An empty matrix renders as `—`.
pub fn format_table(matrix: &Matrix) -> String {
    if matrix.nrows() == 0 {
        return "—".to_string();
    }
    join_rows(matrix, "\t")
}

fn join_rows(matrix: &Matrix, separator: &str) -> String {
    matrix
        .row_iter()
        .map(|row| {
            row.iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(separator)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_separators() {
        let m = parse_matrix("1, 2;3 4\n  5,,\t6 ").unwrap();
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 2);
        assert_eq!(m, Matrix::from_row_slice(3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]));
    }

    #[test]
    fn collapses_repeated_row_separators() {
        let m = parse_matrix("1 2;;;3 4\n\n\n5 6").unwrap();
        assert_eq!(m.nrows(), 3);
    }

    #[test]
    fn handles_windows_line_endings() {
        let m = parse_matrix("1 0\r\n0 1\r\n").unwrap();
        assert_eq!(m, Matrix::identity(2, 2));
    }

    #[test]
    fn accepts_signs_decimals_and_exponents() {
        let m = parse_matrix("-1.5 +2e3 .25").unwrap();
        assert_eq!(m[(0, 0)], -1.5);
        assert_eq!(m[(0, 1)], 2000.0);
        assert_eq!(m[(0, 2)], 0.25);
    }

    #[test]
    fn empty_input_is_empty_matrix() {
        for text in ["", "   ", "\n\n", " ; ; "] {
            let m = parse_matrix(text).unwrap();
            assert_eq!(m.nrows(), 0, "input {text:?}");
        }
    }

    #[test]
    fn rejects_non_numeric_token() {
        let err = parse_matrix("1 2\n3 x").unwrap_err();
        assert_eq!(
            err,
            ParseError::NonNumeric {
                row: 1,
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn rejects_nan_token() {
        assert!(matches!(
            parse_matrix("NaN 1"),
            Err(ParseError::NonNumeric { .. })
        ));
    }

    #[test]
    fn number_grammar_is_rusts_float_syntax() {
        let m = parse_matrix("inf -infinity").unwrap();
        assert_eq!(m[(0, 0)], f64::INFINITY);
        assert_eq!(m[(0, 1)], f64::NEG_INFINITY);

        for token in ["0x10", "1_000", "1.2.3"] {
            assert_eq!(
                parse_matrix(token).unwrap_err(),
                ParseError::NonNumeric {
                    row: 0,
                    token: token.to_string()
                }
            );
        }
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = parse_matrix("1 2\n3 4 5").unwrap_err();
        assert_eq!(
            err,
            ParseError::InconsistentRowLength {
                row: 1,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn parsing_is_deterministic() {
        let text = "0.1 0.2\n0.3 0.4";
        assert_eq!(parse_matrix(text).unwrap(), parse_matrix(text).unwrap());
    }

    #[test]
    fn formatted_matrix_parses_back() {
        let m = Matrix::from_row_slice(2, 3, &[1.0, -0.5, 2.25, 0.0, 1e-7, 3.0]);
        assert_eq!(parse_matrix(&format_matrix(&m)).unwrap(), m);
    }

    #[test]
    fn table_uses_tabs_and_dash_for_empty() {
        let m = Matrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(format_table(&m), "1\t2\n3\t4");
        assert_eq!(format_table(&empty_matrix()), "—");
    }

    #[test]
    fn rows_must_be_rectangular() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(
            matrix_from_rows(&rows),
            Err(ParseError::InconsistentRowLength { row: 1, .. })
        ));
        assert_eq!(matrix_from_rows(&[]).unwrap().nrows(), 0);
    }
}
