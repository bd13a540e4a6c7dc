//! Health records owned by the logged in user.
//!
//! The API renders decimal columns (cost, height, weight, lab values) as
//! strings and computed values such as BMI as numbers, so every decimal here
//! accepts either.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Medical,
    Medication,
    Vaccination,
    PhysicalExam,
}

impl RecordKind {
    /// Collection path relative to the API base url
    pub fn path(self) -> &'static str {
        match self {
            Self::Medical => "records/medical/",
            Self::Medication => "records/medication/",
            Self::Vaccination => "records/vaccination/",
            Self::PhysicalExam => "records/physical-exam/",
        }
    }

    /// Path of a single record
    pub fn item_path(self, id: i32) -> String {
        format!("{}{}/", self.path(), id)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Medical => "Medical Records",
            Self::Medication => "Medications",
            Self::Vaccination => "Vaccinations",
            Self::PhysicalExam => "Physical Exams",
        }
    }
}

/// A record type listed and deleted through a [`RecordKind`] collection.
pub trait HealthRecord {
    const KIND: RecordKind;

    fn id(&self) -> i32;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecordDto {
    pub id: i32,
    pub visit_date: NaiveDate,
    pub hospital: String,
    pub department: String,
    /// Localized department name
    #[serde(default)]
    pub department_display: Option<String>,
    pub doctor: String,
    #[serde(default)]
    pub chief_complaint: String,
    #[serde(default)]
    pub diagnosis: String,
    #[serde(default)]
    pub treatment: String,
    #[serde(default)]
    pub follow_up_date: Option<NaiveDate>,
    #[serde(deserialize_with = "decimal")]
    pub cost: f64,
    #[serde(default)]
    pub notes: String,
}

impl HealthRecord for MedicalRecordDto {
    const KIND: RecordKind = RecordKind::Medical;

    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    #[serde(rename = "QD")]
    OnceDaily,
    #[serde(rename = "BID")]
    TwiceDaily,
    #[serde(rename = "TID")]
    ThreeTimesDaily,
    #[serde(rename = "QW")]
    Weekly,
    #[serde(rename = "PRN")]
    AsNeeded,
}

impl Frequency {
    pub fn label(self) -> &'static str {
        match self {
            Self::OnceDaily => "Once a day",
            Self::TwiceDaily => "Twice a day",
            Self::ThreeTimesDaily => "Three times a day",
            Self::Weekly => "Once a week",
            Self::AsNeeded => "As needed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MedicationRecordDto {
    pub id: i32,
    /// Id of the medical record the prescription came from
    pub medical_record: i32,
    pub drug_name: String,
    pub dosage: String,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub reminder_enabled: bool,
    #[serde(default)]
    pub reminder_time: Option<NaiveTime>,
    /// Days left until `end_date`, computed by the API
    #[serde(default)]
    pub remaining_days: Option<i64>,
}

impl HealthRecord for MedicationRecordDto {
    const KIND: RecordKind = RecordKind::Medication;

    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VaccinationRecordDto {
    pub id: i32,
    /// `CV`, `FL`, `HPV` or `HB`
    pub vaccine_type: String,
    #[serde(default)]
    pub vaccine_type_display: Option<String>,
    pub dose_number: u16,
    pub vaccination_date: NaiveDate,
    #[serde(default)]
    pub next_due_date: Option<NaiveDate>,
    pub institution: String,
    pub batch_number: String,
}

impl VaccinationRecordDto {
    pub fn vaccine_name(&self) -> &str {
        if let Some(display) = self.vaccine_type_display.as_deref() {
            return display;
        }

        match self.vaccine_type.as_str() {
            "CV" => "COVID-19",
            "FL" => "Influenza",
            "HPV" => "HPV",
            "HB" => "Hepatitis B",
            other => other,
        }
    }
}

impl HealthRecord for VaccinationRecordDto {
    const KIND: RecordKind = RecordKind::Vaccination;

    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhysicalExamDto {
    pub id: i32,
    pub exam_date: NaiveDate,
    /// Centimetres
    #[serde(deserialize_with = "decimal")]
    pub height: f64,
    /// Kilograms
    #[serde(deserialize_with = "decimal")]
    pub weight: f64,
    /// `systolic/diastolic` in mmHg
    pub blood_pressure: String,
    pub heart_rate: u16,
    #[serde(default, deserialize_with = "optional_decimal")]
    pub blood_glucose: Option<f64>,
    #[serde(default, deserialize_with = "optional_decimal")]
    pub cholesterol: Option<f64>,
    #[serde(default, deserialize_with = "optional_decimal")]
    pub bmi: Option<f64>,
    #[serde(default)]
    pub report_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl HealthRecord for PhysicalExamDto {
    const KIND: RecordKind = RecordKind::PhysicalExam;

    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Decimal {
    Number(f64),
    Text(String),
}

impl Decimal {
    fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            Self::Number(value) => Ok(value),
            Self::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid decimal {:?}", text))),
        }
    }
}

fn decimal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Decimal::deserialize(deserializer)?.into_f64()
}

fn optional_decimal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Option::<Decimal>::deserialize(deserializer)?
        .map(Decimal::into_f64)
        .transpose()
}
