use crate::persistence::value::DataType;

/// One column of a fixed-width layout.
///
/// `start` and `end` are 1-indexed and inclusive, as column ranges are
/// written in the survey codebooks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub start: usize,
    pub end: usize,
    pub datatype: DataType,
}

impl FieldSpec {
    pub const fn new(name: &'static str, start: usize, end: usize, datatype: DataType) -> FieldSpec {
        FieldSpec {
            name,
            start,
            end,
            datatype,
        }
    }

    pub fn slice<'a>(&self, line: &'a [u8]) -> &'a [u8] {
        //! Cut this column out of `line`.
        //!
        //! Ranges running past the end of the line are clamped, so a short
        //! line yields an empty slice rather than an error.

        let end = self.end.min(line.len());
        let start = self.start.saturating_sub(1).min(end);
        &line[start..end]
    }
}

/// An ordered, static list of [`FieldSpec`]s for one record kind.
#[derive(Clone, Copy, Debug)]
pub struct Schema(&'static [FieldSpec]);

impl Schema {
    pub const fn new(fields: &'static [FieldSpec]) -> Schema {
        Schema(fields)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

const RESPONDENT_FIELDS: [FieldSpec; 1] = [FieldSpec::new("caseid", 1, 12, DataType::Int)];

const PREGNANCY_FIELDS: [FieldSpec; 10] = [
    FieldSpec::new("caseid", 1, 12, DataType::Int),
    FieldSpec::new("nbrnaliv", 22, 22, DataType::Int),
    FieldSpec::new("babysex", 56, 56, DataType::Int),
    FieldSpec::new("birthwgt_lb", 57, 58, DataType::Int),
    FieldSpec::new("birthwgt_oz", 59, 60, DataType::Int),
    FieldSpec::new("prglength", 275, 276, DataType::Int),
    FieldSpec::new("outcome", 277, 277, DataType::Int),
    // Code 1 marks a normal (live) first birth.
    FieldSpec::new("birthord", 278, 279, DataType::Int),
    // Centi-years until recoded.
    FieldSpec::new("agepreg", 284, 287, DataType::Int),
    FieldSpec::new("finalwgt", 423, 440, DataType::Float),
];

pub const RESPONDENT_SCHEMA: Schema = Schema::new(&RESPONDENT_FIELDS);
pub const PREGNANCY_SCHEMA: Schema = Schema::new(&PREGNANCY_FIELDS);
