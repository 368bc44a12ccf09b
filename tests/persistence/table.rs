use nsfg_survey::SurveyError;
use nsfg_survey::persistence::{Field, Pregnancy, Raw, Recoded, Respondent, SurveyRecord, Table};

use super::fixtures::{
    PregnancyLine, pregnancy_with_birthord, respondent_line, write_gzip, write_plain,
};

fn respondent_ids<S>(table: &Table<Respondent, S>) -> Vec<Field<i64>> {
    table.iter().map(|record| record.caseid).collect()
}

#[test]
fn reads_every_line_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let lines: Vec<String> = [3, 1, 2].map(respondent_line).to_vec();
    write_plain(dir.path(), "resp.dat", &lines);

    let mut table: Table<Respondent> = Table::new();
    let appended = table.read_file(dir.path(), "resp.dat", None).unwrap();

    assert_eq!(appended, 3);
    assert_eq!(
        respondent_ids(&table),
        vec![Field::Present(3), Field::Present(1), Field::Present(2)]
    );
}

#[test]
fn limit_keeps_leading_lines() {
    let dir = tempfile::tempdir().unwrap();
    let lines: Vec<String> = (1..=5).map(respondent_line).collect();
    write_plain(dir.path(), "resp.dat", &lines);

    let mut table: Table<Respondent> = Table::new();
    table.read_file(dir.path(), "resp.dat", Some(2)).unwrap();

    assert_eq!(respondent_ids(&table), vec![Field::Present(1), Field::Present(2)]);
}

#[test]
fn limit_zero_reads_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write_plain(dir.path(), "resp.dat", &[respondent_line(1)]);

    let mut table: Table<Respondent> = Table::new();
    table.read_file(dir.path(), "resp.dat", Some(0)).unwrap();

    assert!(table.is_empty());
}

#[test]
fn gzip_and_plain_parse_identically() {
    let dir = tempfile::tempdir().unwrap();
    let lines = vec![
        PregnancyLine::default().build(),
        PregnancyLine {
            caseid: "2",
            birthwgt_lb: "25",
            ..Default::default()
        }
        .build(),
        pregnancy_with_birthord("2"),
    ];
    write_plain(dir.path(), "preg.dat", &lines);
    write_gzip(dir.path(), "preg.dat.gz", &lines);

    let mut plain: Table<Pregnancy> = Table::new();
    plain.read_file(dir.path(), "preg.dat", None).unwrap();
    let mut gzip: Table<Pregnancy> = Table::new();
    gzip.read_file(dir.path(), "preg.dat.gz", None).unwrap();

    assert_eq!(plain.len(), 3);
    assert_eq!(plain.records(), gzip.records());
}

#[test]
fn default_file_names() {
    let dir = tempfile::tempdir().unwrap();
    write_gzip(dir.path(), Respondent::FILE_NAME, &[respondent_line(9)]);

    let mut table: Table<Respondent> = Table::new();
    table.read_records(dir.path(), None).unwrap();

    assert_eq!(Respondent::FILE_NAME, "2002FemResp.dat.gz");
    assert_eq!(Pregnancy::FILE_NAME, "2002FemPreg.dat.gz");
    assert_eq!(respondent_ids(&table), vec![Field::Present(9)]);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut table: Table<Respondent> = Table::new();

    let result = table.read_file(dir.path(), "absent.dat", None);

    assert!(matches!(result, Err(SurveyError::Open { .. })));
    assert!(table.is_empty());
}

#[test]
fn corrupt_gzip_keeps_records_read_so_far() {
    let dir = tempfile::tempdir().unwrap();
    let lines: Vec<String> = (1..=3).map(respondent_line).collect();
    write_gzip(dir.path(), "resp.dat.gz", &lines);

    let path = dir.path().join("resp.dat.gz");
    let mut bytes = std::fs::read(&path).unwrap();
    bytes.extend_from_slice(b"not a gzip member");
    std::fs::write(&path, bytes).unwrap();

    let mut table: Table<Respondent> = Table::new();
    let result = table.read_file(dir.path(), "resp.dat.gz", None);

    assert!(matches!(result, Err(SurveyError::Read { .. })));
    assert_eq!(table.len(), 3);
}

#[test]
fn recode_converts_age_and_derives_weight() {
    let dir = tempfile::tempdir().unwrap();
    let lines = vec![
        PregnancyLine::default().build(),
        PregnancyLine {
            birthwgt_lb: "25",
            birthwgt_oz: "3",
            agepreg: "",
            ..Default::default()
        }
        .build(),
    ];
    write_plain(dir.path(), "preg.dat", &lines);

    let mut table: Table<Pregnancy> = Table::new();
    table.read_file(dir.path(), "preg.dat", None).unwrap();
    let table: Table<Pregnancy, Recoded> = table.recode();

    let first = &table.records()[0];
    assert_eq!(first.agepreg, Field::Present(33.16));
    assert_eq!(first.totalwgt_oz, Some(Field::Present(141)));
    assert_eq!(first.birthord, Field::Present(1));

    let heavy = &table.records()[1];
    assert!(heavy.agepreg.is_missing());
    assert_eq!(heavy.totalwgt_oz, Some(Field::Missing));
}

#[test]
fn load_reads_and_recodes_default_file() {
    let dir = tempfile::tempdir().unwrap();
    write_gzip(dir.path(), Pregnancy::FILE_NAME, &[PregnancyLine::default().build()]);

    let table = Table::<Pregnancy, Raw>::load(dir.path(), None).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.records()[0].agepreg, Field::Present(33.16));
}

#[test]
fn recoding_records_twice_compounds_age_division() {
    let dir = tempfile::tempdir().unwrap();
    write_plain(dir.path(), "preg.dat", &[PregnancyLine::default().build()]);

    let mut table: Table<Pregnancy> = Table::new();
    table.read_file(dir.path(), "preg.dat", None).unwrap();
    let table = table.recode();

    let mut record = table.records()[0].clone();
    record.recode();

    assert_eq!(record.agepreg, Field::Present(33.16 / 100.0));
    assert_ne!(record.agepreg, table.records()[0].agepreg);
}

#[test]
fn birth_order_count_reads_afresh() {
    let dir = tempfile::tempdir().unwrap();
    let lines = ["1", "2", "1", "", "x"].map(pregnancy_with_birthord).to_vec();
    write_gzip(dir.path(), Pregnancy::FILE_NAME, &lines);

    let count = Table::<Pregnancy, Raw>::birth_order_count(dir.path(), None).unwrap();
    assert_eq!(count, 2);

    let count = Table::<Pregnancy, Raw>::birth_order_count(dir.path(), Some(2)).unwrap();
    assert_eq!(count, 1);
}
