use std::fmt::Display;

use indexmap::IndexMap;

use crate::persistence::schema::Schema;
use crate::persistence::value::{Field, Value};

/// The named cells of one parsed line, in schema order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row(pub IndexMap<&'static str, Value>);

impl Row {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn int(&self, name: &str) -> Field<i64> {
        //! Typed read of an integer column. A column the schema does not
        //! define reads as missing.

        self.get(name).map_or(Field::Missing, Value::as_int)
    }

    pub fn float(&self, name: &str) -> Field<f64> {
        self.get(name).map_or(Field::Missing, Value::as_float)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row: Vec<String> = self.0.values().map(|value| value.to_string()).collect();
        write!(f, "{}", row.join(" | "))
    }
}

pub fn parse_record(line: impl AsRef<[u8]>, schema: &Schema) -> Row {
    //! Slice every column of `schema` out of `line` and cast it.
    //!
    //! Never fails: a column that is out of range or does not cast is stored
    //! as [`Value::Missing`], so the returned row always carries every schema
    //! field.

    let line = line.as_ref();
    let cells = schema
        .iter()
        .map(|spec| (spec.name, spec.datatype.cast(spec.slice(line))))
        .collect();

    Row(cells)
}
