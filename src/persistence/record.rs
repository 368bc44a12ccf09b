//! The record kinds a [`super::Table`] can hold.
//!
//! Each kind knows its default file, its fixed-width [`Schema`], how to build
//! itself from a parsed [`Row`] and how to recode its derived fields. The set
//! of kinds is closed: respondents and pregnancies.

use indexmap::IndexMap;

use crate::persistence::row::Row;
use crate::persistence::schema::{PREGNANCY_SCHEMA, RESPONDENT_SCHEMA, Schema};
use crate::persistence::value::{DataType, Field, Value};

/// Birth weights at or above this many pounds are treated as coding errors.
pub const MAX_BIRTH_WEIGHT_LB: i64 = 20;
pub const MAX_BIRTH_WEIGHT_OZ: i64 = 16;

pub trait SurveyRecord: Sized {
    /// File read by [`super::Table::read_records`], relative to the data directory.
    const FILE_NAME: &'static str;
    const SCHEMA: Schema;

    fn from_row(row: &Row) -> Self;

    /// Derive or rescale fields after loading.
    ///
    /// Not idempotent in general: tables call it exactly once per record.
    fn recode(&mut self) {}

    /// All fields of the record by name, in schema order followed by any
    /// derived fields.
    fn fields(&self) -> IndexMap<&'static str, Value>;

    /// Names and types of the fields listed by [`SurveyRecord::fields`],
    /// before or after recoding.
    fn columns(_recoded: bool) -> Vec<(&'static str, DataType)> {
        Self::SCHEMA
            .iter()
            .map(|spec| (spec.name, spec.datatype))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Respondent {
    pub caseid: Field<i64>,
}

impl SurveyRecord for Respondent {
    const FILE_NAME: &'static str = "2002FemResp.dat.gz";
    const SCHEMA: Schema = RESPONDENT_SCHEMA;

    fn from_row(row: &Row) -> Self {
        Respondent {
            caseid: row.int("caseid"),
        }
    }

    fn fields(&self) -> IndexMap<&'static str, Value> {
        IndexMap::from([("caseid", self.caseid.into())])
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pregnancy {
    pub caseid: Field<i64>,
    pub nbrnaliv: Field<i64>,
    pub babysex: Field<i64>,
    pub birthwgt_lb: Field<i64>,
    pub birthwgt_oz: Field<i64>,
    pub prglength: Field<i64>,
    pub outcome: Field<i64>,
    /// Code 1 is a normal first live birth.
    pub birthord: Field<i64>,
    /// Centi-years as read, years once recoded.
    pub agepreg: Field<f64>,
    pub finalwgt: Field<f64>,
    /// Total birth weight in ounces. `None` until the record is recoded.
    pub totalwgt_oz: Option<Field<i64>>,
}

impl Pregnancy {
    pub fn is_first_birth(&self) -> bool {
        self.birthord == Field::Present(1)
    }

    fn total_weight_oz(&self) -> Field<i64> {
        match (self.birthwgt_lb, self.birthwgt_oz) {
            (Field::Present(lb), Field::Present(oz))
                if lb < MAX_BIRTH_WEIGHT_LB && oz <= MAX_BIRTH_WEIGHT_OZ =>
            {
                Field::Present(lb * 16 + oz)
            }
            _ => Field::Missing,
        }
    }
}

impl SurveyRecord for Pregnancy {
    const FILE_NAME: &'static str = "2002FemPreg.dat.gz";
    const SCHEMA: Schema = PREGNANCY_SCHEMA;

    fn from_row(row: &Row) -> Self {
        Pregnancy {
            caseid: row.int("caseid"),
            nbrnaliv: row.int("nbrnaliv"),
            babysex: row.int("babysex"),
            birthwgt_lb: row.int("birthwgt_lb"),
            birthwgt_oz: row.int("birthwgt_oz"),
            prglength: row.int("prglength"),
            outcome: row.int("outcome"),
            birthord: row.int("birthord"),
            agepreg: row.int("agepreg").map(|centi_years| centi_years as f64),
            finalwgt: row.float("finalwgt"),
            totalwgt_oz: None,
        }
    }

    fn recode(&mut self) {
        //! Convert `agepreg` from centi-years to years and derive
        //! `totalwgt_oz` from the pound and ounce columns.
        //!
        //! Calling this twice divides `agepreg` by 100 twice.

        self.agepreg = self.agepreg.map(|age| age / 100.0);
        self.totalwgt_oz = Some(self.total_weight_oz());
    }

    fn fields(&self) -> IndexMap<&'static str, Value> {
        let mut fields: IndexMap<&'static str, Value> = IndexMap::from([
            ("caseid", self.caseid.into()),
            ("nbrnaliv", self.nbrnaliv.into()),
            ("babysex", self.babysex.into()),
            ("birthwgt_lb", self.birthwgt_lb.into()),
            ("birthwgt_oz", self.birthwgt_oz.into()),
            ("prglength", self.prglength.into()),
            ("outcome", self.outcome.into()),
            ("birthord", self.birthord.into()),
            ("agepreg", self.agepreg.into()),
            ("finalwgt", self.finalwgt.into()),
        ]);

        if let Some(total) = self.totalwgt_oz {
            fields.insert("totalwgt_oz", total.into());
        }

        fields
    }

    fn columns(recoded: bool) -> Vec<(&'static str, DataType)> {
        // agepreg is held as f64 so that recoding can turn it into years.
        let mut columns: Vec<(&'static str, DataType)> = PREGNANCY_SCHEMA
            .iter()
            .map(|spec| match spec.name {
                "agepreg" => (spec.name, DataType::Float),
                _ => (spec.name, spec.datatype),
            })
            .collect();

        if recoded {
            columns.push(("totalwgt_oz", DataType::Int));
        }

        columns
    }
}
