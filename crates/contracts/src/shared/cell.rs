use serde::{Deserialize, Serialize};

/// A loosely typed spreadsheet cell as delivered by the upstream macro.
///
/// The sheet does not enforce column types: the same column can carry a
/// number in one row and a string in the next. Consumers coerce through
/// the accessors below instead of matching on the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl CellValue {
    /// Numeric view of the cell. Numeric strings parse, anything else is `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            CellValue::Bool(_) => None,
        }
    }

    /// Display form of the cell. Integral numbers render without `.0`.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            CellValue::Bool(b) => b.to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }

    /// Truthiness the way the sheet formulas use it: zero and blank are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Number(n) => *n != 0.0,
            CellValue::Bool(b) => *b,
            CellValue::Text(s) => {
                let t = s.trim();
                !t.is_empty() && t != "0"
            }
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    pub fn number(n: f64) -> Self {
        CellValue::Number(n)
    }
}

/// Truthiness over an optional cell; an absent cell is false.
pub fn truthy(cell: Option<&CellValue>) -> bool {
    cell.map(CellValue::is_truthy).unwrap_or(false)
}

/// Integer coercion with the parse-or-zero policy every sum uses.
pub fn int_or_zero(cell: Option<&CellValue>) -> i64 {
    cell.and_then(CellValue::as_f64).map(|v| v as i64).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_f64_coercion() {
        assert_eq!(CellValue::Number(12.5).as_f64(), Some(12.5));
        assert_eq!(CellValue::text(" 42 ").as_f64(), Some(42.0));
        assert_eq!(CellValue::text("PO0001").as_f64(), None);
        assert_eq!(CellValue::Bool(true).as_f64(), None);
    }

    #[test]
    fn test_as_text_drops_integral_fraction() {
        assert_eq!(CellValue::Number(120.0).as_text(), "120");
        assert_eq!(CellValue::Number(12.5).as_text(), "12.5");
        assert_eq!(CellValue::text("NAVY").as_text(), "NAVY");
    }

    #[test]
    fn test_truthiness() {
        assert!(!truthy(None));
        assert!(!truthy(Some(&CellValue::Number(0.0))));
        assert!(!truthy(Some(&CellValue::text(""))));
        assert!(!truthy(Some(&CellValue::text("0"))));
        assert!(truthy(Some(&CellValue::Number(3.0))));
        assert!(truthy(Some(&CellValue::text("PO0001"))));
    }

    #[test]
    fn test_int_or_zero_never_propagates_garbage() {
        assert_eq!(int_or_zero(Some(&CellValue::text("n/a"))), 0);
        assert_eq!(int_or_zero(Some(&CellValue::Number(30.0))), 30);
        assert_eq!(int_or_zero(None), 0);
    }

    #[test]
    fn test_untagged_deserialization() {
        let v: Vec<CellValue> = serde_json::from_str(r#"[45210, "PO0001", true]"#).unwrap();
        assert_eq!(v[0], CellValue::Number(45210.0));
        assert_eq!(v[1], CellValue::text("PO0001"));
        assert_eq!(v[2], CellValue::Bool(true));
    }
}
