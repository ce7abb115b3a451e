//! Fake sample data for demonstrating table formats

mod words;

use std::fmt;

use chrono::{Days, NaiveDate};
use indexmap::IndexMap;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Builder;

use crate::error::TableError;
use crate::model::{CellValue, TabularData};

use self::words::*;

/// Kind of fake value, selected by field name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FakeKind {
    Name,
    FirstName,
    LastName,
    Email,
    UserName,
    PhoneNumber,
    Address,
    City,
    Country,
    Company,
    Job,
    Url,
    Date,
    DateOfBirth,
    Age,
    RandomInt,
    Float,
    Boolean,
    Word,
    Sentence,
    Uuid,
}

impl FakeKind {
    /// Every kind, in the order they are listed to users
    pub const ALL: [FakeKind; 21] = [
        FakeKind::Name,
        FakeKind::FirstName,
        FakeKind::LastName,
        FakeKind::Email,
        FakeKind::UserName,
        FakeKind::PhoneNumber,
        FakeKind::Address,
        FakeKind::City,
        FakeKind::Country,
        FakeKind::Company,
        FakeKind::Job,
        FakeKind::Url,
        FakeKind::Date,
        FakeKind::DateOfBirth,
        FakeKind::Age,
        FakeKind::RandomInt,
        FakeKind::Float,
        FakeKind::Boolean,
        FakeKind::Word,
        FakeKind::Sentence,
        FakeKind::Uuid,
    ];

    /// Canonical field name for this kind
    pub fn name(self) -> &'static str {
        match self {
            FakeKind::Name => "name",
            FakeKind::FirstName => "first_name",
            FakeKind::LastName => "last_name",
            FakeKind::Email => "email",
            FakeKind::UserName => "user_name",
            FakeKind::PhoneNumber => "phone_number",
            FakeKind::Address => "address",
            FakeKind::City => "city",
            FakeKind::Country => "country",
            FakeKind::Company => "company",
            FakeKind::Job => "job",
            FakeKind::Url => "url",
            FakeKind::Date => "date",
            FakeKind::DateOfBirth => "date_of_birth",
            FakeKind::Age => "age",
            FakeKind::RandomInt => "random_int",
            FakeKind::Float => "pyfloat",
            FakeKind::Boolean => "boolean",
            FakeKind::Word => "word",
            FakeKind::Sentence => "sentence",
            FakeKind::Uuid => "uuid4",
        }
    }
}

impl fmt::Display for FakeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for FakeKind {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_lowercase().as_str() {
            "name" => FakeKind::Name,
            "first_name" => FakeKind::FirstName,
            "last_name" => FakeKind::LastName,
            "email" => FakeKind::Email,
            "user_name" | "username" => FakeKind::UserName,
            "phone_number" | "phone" => FakeKind::PhoneNumber,
            "address" => FakeKind::Address,
            "city" => FakeKind::City,
            "country" => FakeKind::Country,
            "company" => FakeKind::Company,
            "job" => FakeKind::Job,
            "url" => FakeKind::Url,
            "date" => FakeKind::Date,
            "date_of_birth" | "birthdate" => FakeKind::DateOfBirth,
            "age" => FakeKind::Age,
            "random_int" | "integer" | "int" => FakeKind::RandomInt,
            "pyfloat" | "float" => FakeKind::Float,
            "boolean" | "pybool" | "bool" => FakeKind::Boolean,
            "word" => FakeKind::Word,
            "sentence" => FakeKind::Sentence,
            "uuid4" | "uuid" => FakeKind::Uuid,
            _ => return Err(TableError::UnknownFakeField(s.to_string())),
        };
        Ok(kind)
    }
}

/// The table rendered when no input is given
pub fn demo_table() -> Result<TabularData, TableError> {
    let mut data: IndexMap<String, Vec<CellValue>> = IndexMap::new();
    data.insert(
        "Name".to_string(),
        vec!["Alice".into(), "Bob".into(), "Charlie".into()],
    );
    data.insert(
        "Age".to_string(),
        vec![CellValue::Int(30), CellValue::Int(45), CellValue::Int(25)],
    );
    data.insert(
        "City".to_string(),
        vec!["New York".into(), "Los Angeles".into(), "Chicago".into()],
    );
    TabularData::new(data)
}

/// Generator of fake table contents.
///
/// Owns its random source; seed it for reproducible output.
pub struct SampleGenerator {
    rng: StdRng,
}

impl Default for SampleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleGenerator {
    /// Generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generator with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Build a table with one column per field, each holding `size` values.
    ///
    /// Every field name is resolved before any value is generated, so an
    /// unknown field fails without consuming randomness.
    pub fn generate<S: AsRef<str>>(&mut self, fields: &[S], size: usize) -> Result<TabularData, TableError> {
        let kinds = fields
            .iter()
            .map(|f| f.as_ref().parse::<FakeKind>())
            .collect::<Result<Vec<_>, _>>()?;

        debug!("generating {} rows for fields {:?}", size, kinds);

        let columns: Vec<(String, Vec<CellValue>)> = fields
            .iter()
            .zip(kinds)
            .map(|(field, kind)| {
                let values = (0..size).map(|_| self.value(kind)).collect();
                (field.as_ref().to_string(), values)
            })
            .collect();

        TabularData::from_columns(columns)
    }

    /// One fake value of the given kind
    pub fn value(&mut self, kind: FakeKind) -> CellValue {
        match kind {
            FakeKind::Name => format!("{} {}", self.pick(FIRST_NAMES), self.pick(LAST_NAMES)).into(),
            FakeKind::FirstName => self.pick(FIRST_NAMES).into(),
            FakeKind::LastName => self.pick(LAST_NAMES).into(),
            FakeKind::Email => format!("{}@{}", self.user_name(), self.pick(DOMAINS)).into(),
            FakeKind::UserName => self.user_name().into(),
            FakeKind::PhoneNumber => format!(
                "+1-{:03}-{:03}-{:04}",
                self.rng.gen_range(200..1000),
                self.rng.gen_range(0..1000),
                self.rng.gen_range(0..10000)
            )
            .into(),
            FakeKind::Address => format!(
                "{} {}, {}",
                self.rng.gen_range(1..2000),
                self.pick(STREETS),
                self.pick(CITIES)
            )
            .into(),
            FakeKind::City => self.pick(CITIES).into(),
            FakeKind::Country => self.pick(COUNTRIES).into(),
            FakeKind::Company => {
                format!("{} {}", self.pick(COMPANY_WORDS), self.pick(COMPANY_SUFFIXES)).into()
            }
            FakeKind::Job => self.pick(JOBS).into(),
            FakeKind::Url => format!("https://www.{}.{}/", self.pick(WORDS), self.pick(TLDS)).into(),
            FakeKind::Date => {
                // 1970-01-01 through 2029
                let offset = self.rng.gen_range(0..21_915);
                CellValue::Date(NaiveDate::default() + Days::new(offset))
            }
            FakeKind::DateOfBirth => {
                // Between 1940 and 2005
                let back = self.rng.gen_range(1..=10_957);
                let forward = self.rng.gen_range(0..=12_783);
                CellValue::Date(NaiveDate::default() - Days::new(back) + Days::new(forward))
            }
            FakeKind::Age => CellValue::Int(self.rng.gen_range(18..=90)),
            FakeKind::RandomInt => CellValue::Int(self.rng.gen_range(0..=9999)),
            FakeKind::Float => {
                let x: f64 = self.rng.gen_range(-1000.0..1000.0);
                CellValue::Float((x * 100.0).round() / 100.0)
            }
            FakeKind::Boolean => CellValue::Bool(self.rng.gen_bool(0.5)),
            FakeKind::Word => self.pick(WORDS).into(),
            FakeKind::Sentence => self.sentence().into(),
            FakeKind::Uuid => self.uuid4().into(),
        }
    }

    fn pick(&mut self, words: &'static [&'static str]) -> &'static str {
        words[self.rng.gen_range(0..words.len())]
    }

    fn user_name(&mut self) -> String {
        format!(
            "{}.{}{}",
            self.pick(FIRST_NAMES).to_lowercase(),
            self.pick(LAST_NAMES).to_lowercase().replace('\'', ""),
            self.rng.gen_range(1..100)
        )
    }

    fn sentence(&mut self) -> String {
        let count = self.rng.gen_range(4..=8);
        let words: Vec<&str> = (0..count).map(|_| self.pick(WORDS)).collect();
        let text = words.join(" ");
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
            None => text,
        }
    }

    fn uuid4(&mut self) -> String {
        Builder::from_random_bytes(self.rng.gen()).into_uuid().to_string()
    }
}
