//! Cell values and the casters that produce them.
//!
//! A fixed-width column is just text until a [`DataType`] casts it. Casting
//! never fails loudly: text that does not parse becomes [`Value::Missing`],
//! which is a value in its own right and not the absence of a column.

use std::fmt::Display;

/// Marker written wherever a cell could not be parsed or computed.
pub const MISSING_MARKER: &str = "NA";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    Int,
    Float,
}

impl DataType {
    pub fn cast(&self, raw: &[u8]) -> Value {
        //! Cast the raw column bytes into a [`Value`] of this type.
        //!
        //! Surrounding whitespace is ignored. Empty, non-numeric or non-UTF-8
        //! text yields [`Value::Missing`].

        let text = match std::str::from_utf8(raw) {
            Ok(text) => text.trim(),
            Err(_) => return Value::Missing,
        };

        match self {
            DataType::Int => text.parse::<i64>().map_or(Value::Missing, Value::Int),
            DataType::Float => text.parse::<f64>().map_or(Value::Missing, Value::Float),
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let datatype = match self {
            DataType::Int => "INT",
            DataType::Float => "FLT",
        };
        write!(f, "{}", datatype)
    }
}

/// A dynamically typed cell, as produced by the record parser.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Missing,
}

impl Value {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    pub fn as_int(&self) -> Field<i64> {
        //! Typed view of an integer cell. A float cell is not narrowed and
        //! reads as missing.

        match self {
            Value::Int(value) => Field::Present(*value),
            _ => Field::Missing,
        }
    }

    pub fn as_float(&self) -> Field<f64> {
        //! Typed view of a numeric cell, widening integers.

        match self {
            Value::Int(value) => Field::Present(*value as f64),
            Value::Float(value) => Field::Present(*value),
            Value::Missing => Field::Missing,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::Missing => write!(f, "{}", MISSING_MARKER),
        }
    }
}

/// A typed record field: either a parsed value or the missing marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Field<T> {
    Present(T),
    Missing,
}

impl<T> Field<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Field::Missing)
    }

    pub fn present(self) -> Option<T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Missing => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Field::Present(value) => Field::Present(f(value)),
            Field::Missing => Field::Missing,
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Field::Missing, Field::Present)
    }
}

impl From<Field<i64>> for Value {
    fn from(field: Field<i64>) -> Self {
        field.present().map_or(Value::Missing, Value::Int)
    }
}

impl From<Field<f64>> for Value {
    fn from(field: Field<f64>) -> Self {
        field.present().map_or(Value::Missing, Value::Float)
    }
}

impl<T: Display> Display for Field<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Present(value) => write!(f, "{}", value),
            Field::Missing => write!(f, "{}", MISSING_MARKER),
        }
    }
}
