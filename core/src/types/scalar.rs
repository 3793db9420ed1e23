//! Scalar kinds and scalar values — the terminal data a namespace points at.

use std::fmt;

use serde::{Deserialize, Serialize};


/// The declared type of a scalar slot.
///
/// Integer and float kinds are the "fixed numeric" kinds: a map whose value
/// kind is numeric is treated as a flat key → number table by both the
/// namespace builder and the value resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Str,
}

impl ScalarKind {
    /// True for every integer and float kind.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, ScalarKind::Bool | ScalarKind::Str)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::I8 => "i8",
            ScalarKind::I16 => "i16",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::U8 => "u8",
            ScalarKind::U16 => "u16",
            ScalarKind::U32 => "u32",
            ScalarKind::U64 => "u64",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
            ScalarKind::Str => "string",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


/// A live scalar value. The variant doubles as the value's declared kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(String),
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Bool(_) => ScalarKind::Bool,
            Scalar::I8(_) => ScalarKind::I8,
            Scalar::I16(_) => ScalarKind::I16,
            Scalar::I32(_) => ScalarKind::I32,
            Scalar::I64(_) => ScalarKind::I64,
            Scalar::U8(_) => ScalarKind::U8,
            Scalar::U16(_) => ScalarKind::U16,
            Scalar::U32(_) => ScalarKind::U32,
            Scalar::U64(_) => ScalarKind::U64,
            Scalar::F32(_) => ScalarKind::F32,
            Scalar::F64(_) => ScalarKind::F64,
            Scalar::Str(_) => ScalarKind::Str,
        }
    }

    /// The zero value of a scalar kind: `false`, `0`, `0.0` or `""`.
    pub fn zero(kind: ScalarKind) -> Scalar {
        match kind {
            ScalarKind::Bool => Scalar::Bool(false),
            ScalarKind::I8 => Scalar::I8(0),
            ScalarKind::I16 => Scalar::I16(0),
            ScalarKind::I32 => Scalar::I32(0),
            ScalarKind::I64 => Scalar::I64(0),
            ScalarKind::U8 => Scalar::U8(0),
            ScalarKind::U16 => Scalar::U16(0),
            ScalarKind::U32 => Scalar::U32(0),
            ScalarKind::U64 => Scalar::U64(0),
            ScalarKind::F32 => Scalar::F32(0.0),
            ScalarKind::F64 => Scalar::F64(0.0),
            ScalarKind::Str => Scalar::Str(String::new()),
        }
    }

    /// Widen to `f64` for numeric kinds. `None` for bools and strings.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::I8(v) => Some(*v as f64),
            Scalar::I16(v) => Some(*v as f64),
            Scalar::I32(v) => Some(*v as f64),
            Scalar::I64(v) => Some(*v as f64),
            Scalar::U8(v) => Some(*v as f64),
            Scalar::U16(v) => Some(*v as f64),
            Scalar::U32(v) => Some(*v as f64),
            Scalar::U64(v) => Some(*v as f64),
            Scalar::F32(v) => Some(*v as f64),
            Scalar::F64(v) => Some(*v),
            Scalar::Bool(_) | Scalar::Str(_) => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as J;
        match self {
            Scalar::Bool(v) => J::Bool(*v),
            Scalar::I8(v) => J::from(*v),
            Scalar::I16(v) => J::from(*v),
            Scalar::I32(v) => J::from(*v),
            Scalar::I64(v) => J::from(*v),
            Scalar::U8(v) => J::from(*v),
            Scalar::U16(v) => J::from(*v),
            Scalar::U32(v) => J::from(*v),
            Scalar::U64(v) => J::from(*v),
            // NaN and infinities have no JSON form and come out as null.
            Scalar::F32(v) => J::from(*v as f64),
            Scalar::F64(v) => J::from(*v),
            Scalar::Str(v) => J::String(v.clone()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(v) => write!(f, "{}", v),
            Scalar::I8(v) => write!(f, "{}", v),
            Scalar::I16(v) => write!(f, "{}", v),
            Scalar::I32(v) => write!(f, "{}", v),
            Scalar::I64(v) => write!(f, "{}", v),
            Scalar::U8(v) => write!(f, "{}", v),
            Scalar::U16(v) => write!(f, "{}", v),
            Scalar::U32(v) => write!(f, "{}", v),
            Scalar::U64(v) => write!(f, "{}", v),
            Scalar::F32(v) => write!(f, "{}", v),
            Scalar::F64(v) => write!(f, "{}", v),
            Scalar::Str(v) => f.write_str(v),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_kinds() {
        assert!(ScalarKind::U64.is_numeric());
        assert!(ScalarKind::F32.is_numeric());
        assert!(!ScalarKind::Bool.is_numeric());
        assert!(!ScalarKind::Str.is_numeric());
    }

    #[test]
    fn zero_matches_kind() {
        for kind in [ScalarKind::Bool, ScalarKind::I16, ScalarKind::U32, ScalarKind::F64, ScalarKind::Str] {
            assert_eq!(Scalar::zero(kind).kind(), kind);
        }
        assert_eq!(Scalar::zero(ScalarKind::Str), Scalar::Str(String::new()));
    }

    #[test]
    fn widen_to_f64() {
        assert_eq!(Scalar::U32(254).as_f64(), Some(254.0));
        assert_eq!(Scalar::F32(20.0).as_f64(), Some(20.0));
        assert_eq!(Scalar::Str("x".into()).as_f64(), None);
    }

    #[test]
    fn json_form() {
        assert_eq!(Scalar::I64(-3).to_json(), serde_json::json!(-3));
        assert_eq!(Scalar::Str("a".into()).to_json(), serde_json::json!("a"));
        assert_eq!(Scalar::Bool(true).to_json(), serde_json::json!(true));
    }

    #[test]
    fn kind_serde_is_snake_case() {
        let json = serde_json::to_string(&ScalarKind::U64).unwrap();
        assert_eq!(json, "\"u64\"");
    }
}
