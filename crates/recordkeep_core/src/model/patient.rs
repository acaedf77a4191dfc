//! Patient and prescription records.
//!
//! # Invariants
//! - A prescription references its patient only through `patient_id`; the
//!   patient → prescriptions mapping is derived, never stored on `Patient`.

use crate::model::record::{Dependent, Record};
use serde::{Deserialize, Serialize};

pub type PatientId = u32;
pub type PrescriptionId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    /// Birth year, used only for display.
    pub birth_year: u16,
}

impl Patient {
    pub fn new(id: PatientId, name: impl Into<String>, birth_year: u16) -> Self {
        Self {
            id,
            name: name.into(),
            birth_year,
        }
    }
}

impl Record for Patient {
    type Key = PatientId;

    fn key(&self) -> PatientId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: PrescriptionId,
    /// Foreign key to `Patient::id`.
    pub patient_id: PatientId,
    pub medication: String,
    /// Daily dosage in milligrams. Always positive once stored.
    pub dosage_mg: i64,
}

impl Prescription {
    pub fn new(
        id: PrescriptionId,
        patient_id: PatientId,
        medication: impl Into<String>,
        dosage_mg: i64,
    ) -> Self {
        Self {
            id,
            patient_id,
            medication: medication.into(),
            dosage_mg,
        }
    }
}

impl Record for Prescription {
    type Key = PrescriptionId;

    fn key(&self) -> PrescriptionId {
        self.id
    }
}

impl Dependent for Prescription {
    type OwnerKey = PatientId;

    fn owner_key(&self) -> PatientId {
        self.patient_id
    }
}
