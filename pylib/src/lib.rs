use pyo3::{create_exception, exceptions::PyException, prelude::*, wrap_pyfunction, PyErr};

create_exception!(pyascii_katas, AsciiKatasException, PyException);

#[pyfunction]
fn figure_rectangles(figure: &str) -> PyResult<Vec<String>> {
    let rects = ascii_katas::figure_rectangles(figure).map_err(AsciiKatasError::from)?;
    Ok(rects)
}

#[pyfunction]
fn parse_bank_account(text: &str) -> PyResult<u64> {
    let number = ascii_katas::parse_bank_account(text).map_err(AsciiKatasError::from)?;
    Ok(number)
}

#[pyfunction]
fn wrap_text(text: &str, columns: usize) -> PyResult<Vec<String>> {
    let lines = ascii_katas::wrap_text(text, columns).map_err(AsciiKatasError::from)?;
    Ok(lines.collect())
}

#[pyfunction]
fn poker_hand_rank(hand: Vec<String>) -> PyResult<u8> {
    let rank = ascii_katas::poker_hand_rank(&hand[..]).map_err(AsciiKatasError::from)?;
    Ok(rank as u8)
}

/// Wrapper around ascii_katas::Error so we convert to PyErr
struct AsciiKatasError(ascii_katas::Error);

impl From<ascii_katas::Error> for AsciiKatasError {
    fn from(err: ascii_katas::Error) -> AsciiKatasError {
        AsciiKatasError(err)
    }
}

impl From<AsciiKatasError> for PyErr {
    fn from(err: AsciiKatasError) -> PyErr {
        PyErr::new::<AsciiKatasException, String>(err.0.to_string())
    }
}

#[pymodule]
fn pyascii_katas(py: Python, m: &PyModule) -> PyResult<()> {
    m.add("AsciiKatasException", py.get_type::<AsciiKatasException>())?;
    m.add_function(wrap_pyfunction!(figure_rectangles, m)?)?;
    m.add_function(wrap_pyfunction!(parse_bank_account, m)?)?;
    m.add_function(wrap_pyfunction!(wrap_text, m)?)?;
    m.add_function(wrap_pyfunction!(poker_hand_rank, m)?)?;
    Ok(())
}
