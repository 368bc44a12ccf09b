//! Survey tables are built from the following components
//! - Schema (ordered fixed-width column ranges and their casters, static per record kind)
//! - Row (the named cells of one parsed line)
//! - Record (the typed respondent or pregnancy built from a row)
//! - Table (records of one kind in file order, recoded once after loading)
//!

//  All modules of this lib
mod record;
mod row;
mod schema;
mod source;
mod table;
mod value;

//  External API
pub use record::{MAX_BIRTH_WEIGHT_LB, MAX_BIRTH_WEIGHT_OZ, Pregnancy, Respondent, SurveyRecord};
pub use row::{Row, parse_record};
pub use schema::{FieldSpec, PREGNANCY_SCHEMA, RESPONDENT_SCHEMA, Schema};
pub use source::{LineSource, is_gzip};
pub use table::{Raw, Recoded, Table, TableState};
pub use value::{DataType, Field, MISSING_MARKER, Value};
