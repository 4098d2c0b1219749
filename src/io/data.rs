//! Tokenizing reader for the bracketed data file.
//!
//! The file carries two nested numeric arrays (time matrix, then distance
//! matrix) written as `[ [v,v,...], [v,v,...], ... ]` with `.`-decimal
//! numbers. Brackets and commas are split into their own tokens, so the
//! format tolerates arbitrary whitespace and line breaks. Any structural
//! violation is a [`DataFormat`](crate::Error::DataFormat) error.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::matrix::SquareMatrix;
use crate::model::CostModel;

/// A token-stream reader over the data-file text.
///
/// # Examples
///
/// ```
/// use pareto_tsp::io::DataReader;
///
/// let mut reader = DataReader::from_text("[ [0, 1.5], [2, 0] ]", "inline");
/// let matrix = reader.read_double_matrix().unwrap();
/// assert_eq!(matrix, vec![vec![0.0, 1.5], vec![2.0, 0.0]]);
/// ```
#[derive(Debug)]
pub struct DataReader {
    tokens: Vec<String>,
    current: usize,
    path: String,
}

impl DataReader {
    /// Opens and tokenizes the file at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_text(&text, &path.display().to_string()))
    }

    /// Tokenizes text directly; `label` stands in for the file name in
    /// error messages.
    pub fn from_text(text: &str, label: &str) -> Self {
        let padded = text
            .replace('[', " [ ")
            .replace(']', " ] ")
            .replace(',', " , ")
            .replace('"', " ");
        Self {
            tokens: padded.split_whitespace().map(str::to_owned).collect(),
            current: 0,
            path: label.to_owned(),
        }
    }

    fn next_token(&mut self) -> Result<String> {
        let token = self
            .tokens
            .get(self.current)
            .ok_or_else(|| self.bad_format("unexpected end of input"))?;
        self.current += 1;
        Ok(token.clone())
    }

    fn push_back(&mut self) {
        self.current -= 1;
    }

    fn bad_format(&self, detail: impl Into<String>) -> Error {
        Error::data_format(&self.path, detail)
    }

    /// Reads one floating-point number.
    pub fn read_double(&mut self) -> Result<f64> {
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|_| self.bad_format(format!("expected a number, found '{token}'")))
    }

    /// Reads one integer.
    pub fn read_int(&mut self) -> Result<i64> {
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|_| self.bad_format(format!("expected an integer, found '{token}'")))
    }

    /// Reads one raw token.
    pub fn read_string(&mut self) -> Result<String> {
        self.next_token()
    }

    /// Reads a bracketed array of numbers: `[ v, v, ... ]`.
    ///
    /// Commas between values are optional; anything after a value that is
    /// neither `,` nor `]` is a format error.
    pub fn read_double_array(&mut self) -> Result<Vec<f64>> {
        let open = self.next_token()?;
        if open != "[" {
            return Err(self.bad_format(format!("expected '[', found '{open}'")));
        }

        let mut values = Vec::new();
        let mut token = self.next_token()?;
        while token != "]" {
            let value = token
                .parse()
                .map_err(|_| self.bad_format(format!("expected a number, found '{token}'")))?;
            values.push(value);

            token = self.next_token()?;
            if token == "," {
                token = self.next_token()?;
            } else if token != "]" {
                return Err(self.bad_format(format!("expected ',' or ']', found '{token}'")));
            }
        }
        Ok(values)
    }

    /// Reads a bracketed array of arrays: `[ [..], [..], ... ]`.
    pub fn read_double_matrix(&mut self) -> Result<Vec<Vec<f64>>> {
        let open = self.next_token()?;
        if open != "[" {
            return Err(self.bad_format(format!("expected '[', found '{open}'")));
        }

        let mut rows = Vec::new();
        let mut token = self.next_token()?;
        while token == "[" {
            self.push_back();
            rows.push(self.read_double_array()?);

            token = self.next_token()?;
            if token == "," {
                token = self.next_token()?;
            } else if token != "]" {
                return Err(self.bad_format(format!("expected ',' or ']', found '{token}'")));
            }
        }
        if token != "]" {
            return Err(self.bad_format(format!("expected ']', found '{token}'")));
        }
        Ok(rows)
    }
}

/// Loads the cost model from a data file: time matrix first, then distance.
///
/// Both matrices must be square and of equal size.
pub fn load_cost_model(path: &Path) -> Result<CostModel> {
    let mut reader = DataReader::open(path)?;
    let label = path.display().to_string();

    let time_rows = reader.read_double_matrix()?;
    let distance_rows = reader.read_double_matrix()?;

    let n = time_rows.len();
    if distance_rows.len() != n {
        return Err(Error::data_format(
            &label,
            format!(
                "time matrix has {n} rows but distance matrix has {}",
                distance_rows.len()
            ),
        ));
    }
    let time = SquareMatrix::from_rows(time_rows)
        .ok_or_else(|| Error::data_format(&label, "time matrix is not square"))?;
    let distance = SquareMatrix::from_rows(distance_rows)
        .ok_or_else(|| Error::data_format(&label, "distance matrix is not square"))?;

    Ok(CostModel::new(time, distance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_nested_arrays_with_mixed_whitespace() {
        let text = "[\n  [0, 1.5 , 2],\n  [3,0,4] ,\n  [5, 6, 0]\n]";
        let mut reader = DataReader::from_text(text, "test");
        let rows = reader.read_double_matrix().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec![3.0, 0.0, 4.0]);
    }

    #[test]
    fn scalar_primitives_parse() {
        let mut reader = DataReader::from_text("42 3.75 label", "test");
        assert_eq!(reader.read_int().unwrap(), 42);
        assert!((reader.read_double().unwrap() - 3.75).abs() < 1e-12);
        assert_eq!(reader.read_string().unwrap(), "label");
    }

    #[test]
    fn missing_open_bracket_is_a_format_error() {
        let mut reader = DataReader::from_text("0, 1]", "test");
        let err = reader.read_double_array().unwrap_err();
        assert_eq!(err.category(), "Data Error");
    }

    #[test]
    fn bad_separator_is_a_format_error() {
        let mut reader = DataReader::from_text("[0 ; 1]", "test");
        assert!(reader.read_double_array().is_err());
    }

    #[test]
    fn truncated_stream_is_a_format_error() {
        let mut reader = DataReader::from_text("[ [0, 1], [2", "test");
        let err = reader.read_double_matrix().unwrap_err();
        assert!(err.to_string().contains("unexpected end of input"));
    }

    #[test]
    fn load_rejects_mismatched_matrix_sizes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[[0,1],[1,0]] [[0,1,2],[1,0,3],[2,3,0]]").unwrap();
        let err = load_cost_model(file.path()).unwrap_err();
        assert_eq!(err.category(), "Data Error");
    }

    #[test]
    fn load_round_trips_raw_values_exactly() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[ [0, 2.25], [4.5, 0] ]\n[ [0, 1.125], [3.375, 0] ]"
        )
        .unwrap();
        let model = load_cost_model(file.path()).unwrap();
        // Normalization must not disturb the stored raw matrices.
        assert_eq!(model.time().get(0, 1), 2.25);
        assert_eq!(model.time().get(1, 0), 4.5);
        assert_eq!(model.distance().get(0, 1), 1.125);
        assert_eq!(model.distance().get(1, 0), 3.375);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_cost_model(Path::new("no-such-file.dat")).unwrap_err();
        assert_eq!(err.category(), "IO Error");
    }
}
