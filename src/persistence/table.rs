use std::fmt::Display;
use std::marker::PhantomData;
use std::path::Path;

use log::{debug, info, trace};

use super::record::{Pregnancy, SurveyRecord};
use super::value::MISSING_MARKER;
use super::row::parse_record;
use super::source::LineSource;
use crate::error::Result;

/// Table state before [`Table::recode`] has run.
#[derive(Debug)]
pub struct Raw;

/// Table state after [`Table::recode`]. Such a table is read-only.
#[derive(Debug)]
pub struct Recoded;

pub trait TableState {
    const RECODED: bool;
}

impl TableState for Raw {
    const RECODED: bool = false;
}

impl TableState for Recoded {
    const RECODED: bool = true;
}

/// An ordered collection of records of one kind, in file line order.
///
/// The state parameter makes recoding one-shot: only a [`Raw`] table can be
/// read into or recoded, and recoding consumes it.
#[derive(Debug)]
pub struct Table<R, S = Raw> {
    records: Vec<R>,
    state: PhantomData<S>,
}

impl<R: SurveyRecord> Table<R, Raw> {
    pub fn new() -> Table<R, Raw> {
        Table {
            records: Vec::new(),
            state: PhantomData,
        }
    }

    pub fn load(data_dir: impl AsRef<Path>, limit: Option<usize>) -> Result<Table<R, Recoded>> {
        //! Read the record kind's default file and recode it.

        let mut table = Table::<R, Raw>::new();
        table.read_records(data_dir, limit)?;
        Ok(table.recode())
    }

    pub fn read_records(&mut self, data_dir: impl AsRef<Path>, limit: Option<usize>) -> Result<usize> {
        //! Read the record kind's default file, see [`SurveyRecord::FILE_NAME`].

        self.read_file(data_dir, R::FILE_NAME, limit)
    }

    pub fn read_file(
        &mut self,
        data_dir: impl AsRef<Path>,
        file_name: &str,
        limit: Option<usize>,
    ) -> Result<usize> {
        //! Parse up to `limit` lines of `data_dir/file_name` and append them.
        //!
        //! Files whose name ends in `gz` are decompressed on the fly. A failure
        //! to open or read the file is returned as is; records appended before
        //! a read failure stay in the table.
        //!
        //! Returns the number of records appended.

        let mut source = LineSource::open(data_dir.as_ref().join(file_name))?;
        let schema = R::SCHEMA;
        let before = self.records.len();

        for line in source.by_ref().take(limit.unwrap_or(usize::MAX)) {
            let row = parse_record(line?, &schema);
            trace!(
                "{} missing cell(s) in record {}",
                row.0.values().filter(|value| value.is_missing()).count(),
                self.records.len() + 1
            );
            self.add_record(R::from_row(&row));
        }

        let appended = self.records.len() - before;
        info!("read {} record(s) from {}", appended, source.path().display());
        Ok(appended)
    }

    pub fn add_record(&mut self, record: R) {
        self.records.push(record);
    }

    pub fn extend_records(&mut self, records: impl IntoIterator<Item = R>) {
        self.records.extend(records);
    }

    pub fn recode(self) -> Table<R, Recoded> {
        //! Apply [`SurveyRecord::recode`] to every record, once.
        //!
        //! ```
        //! use nsfg_survey::persistence::{Pregnancy, Recoded, Table};
        //!
        //! let table: Table<Pregnancy> = Table::new();
        //! let recoded: Table<Pregnancy, Recoded> = table.recode();
        //! assert!(recoded.is_empty());
        //! ```
        //!
        //! A recoded table has no `recode`:
        //!
        //! ```compile_fail
        //! use nsfg_survey::persistence::{Pregnancy, Table};
        //!
        //! let table: Table<Pregnancy> = Table::new();
        //! table.recode().recode();
        //! ```

        let mut records = self.records;
        records.iter_mut().for_each(R::recode);
        debug!("recoded {} record(s)", records.len());

        Table {
            records,
            state: PhantomData,
        }
    }
}

impl<R: SurveyRecord> Default for Table<R, Raw> {
    fn default() -> Self {
        Table::new()
    }
}

impl<R, S> Table<R, S> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn count_where<F>(&self, filter: F) -> usize
    where
        F: Fn(&R) -> bool,
    {
        self.records.iter().filter(|record| filter(record)).count()
    }
}

impl Table<Pregnancy> {
    pub fn birth_order_count(data_dir: impl AsRef<Path>, limit: Option<usize>) -> Result<usize> {
        //! Read the pregnancy file afresh and count first births
        //! (`birthord == 1`). Missing birth orders are not counted.

        let mut table = Table::<Pregnancy, Raw>::new();
        table.read_records(data_dir, limit)?;
        Ok(table.count_where(Pregnancy::is_first_birth))
    }
}

impl<'a, R, S> IntoIterator for &'a Table<R, S> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<R: SurveyRecord, S: TableState> Display for Table<R, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let columns = R::columns(S::RECODED);
        let header: Vec<String> = columns
            .iter()
            .map(|(name, datatype)| format!("{} ({})", name, datatype))
            .collect();

        let rows: Vec<String> = self
            .records
            .iter()
            .map(|record| {
                let fields = record.fields();
                let cells: Vec<String> = columns
                    .iter()
                    .map(|(name, _)| {
                        fields
                            .get(*name)
                            .map_or(MISSING_MARKER.to_string(), |value| value.to_string())
                    })
                    .collect();
                cells.join(" | ")
            })
            .collect();

        writeln!(f, "{}\n{}", header.join(" | "), rows.join("\n"))
    }
}
