//! Patient/prescription lookup.
//!
//! # Responsibility
//! - Own patients and prescriptions as separate keyed repositories.
//! - Answer "prescriptions for patient" through a rebuilt group index.
//!
//! # Invariants
//! - Every stored prescription references a registered patient.
//! - A missing patient is `NotFound`; a patient without prescriptions yields
//!   an empty list.

use crate::index::group_index::GroupIndex;
use crate::model::patient::{Patient, PatientId, Prescription, PrescriptionId};
use crate::repo::keyed_repo::{MemoryRepository, RepoError, RepoResult, Repository};
use crate::repo::mutator::{positive, ValidatedMutator};
use crate::service::logged;

const MODULE: &str = "pharmacy";

#[derive(Debug, Default)]
pub struct PharmacyService {
    patients: MemoryRepository<Patient>,
    prescriptions: MemoryRepository<Prescription>,
    by_patient: GroupIndex<Prescription>,
}

impl PharmacyService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_patient(&mut self, patient: Patient) -> RepoResult<()> {
        let id = patient.id;
        let result = self.patients.add(patient);
        logged(MODULE, "patient_register", id, result)
    }

    pub fn patient(&self, id: PatientId) -> RepoResult<Patient> {
        self.patients.get_by_id(&id)
    }

    pub fn patients(&self) -> Vec<Patient> {
        self.patients.list_all()
    }

    /// Stores a prescription for an already registered patient.
    pub fn add_prescription(&mut self, prescription: Prescription) -> RepoResult<()> {
        let id = prescription.id;
        let result = self.add_prescription_inner(prescription);
        logged(MODULE, "prescription_add", id, result)
    }

    fn add_prescription_inner(&mut self, prescription: Prescription) -> RepoResult<()> {
        positive("dosage_mg", prescription.dosage_mg)?;
        if !self.patients.contains(&prescription.patient_id) {
            return Err(RepoError::not_found(&prescription.patient_id));
        }
        self.prescriptions.add(prescription)
    }

    pub fn prescription(&self, id: PrescriptionId) -> RepoResult<Prescription> {
        self.prescriptions.get_by_id(&id)
    }

    pub fn update_dosage(&mut self, id: PrescriptionId, dosage_mg: i64) -> RepoResult<()> {
        let result = self.prescriptions.update_validated(
            &id,
            dosage_mg,
            |dosage| positive("dosage_mg", *dosage),
            |prescription, dosage| prescription.dosage_mg = dosage,
        );
        logged(MODULE, "dosage_update", id, result)
    }

    /// Prescriptions of `patient_id` in prescription-id order.
    ///
    /// Rebuilds the patient index from the prescription repository first.
    pub fn prescriptions_for(&mut self, patient_id: PatientId) -> RepoResult<Vec<Prescription>> {
        if !self.patients.contains(&patient_id) {
            return Err(RepoError::not_found(&patient_id));
        }
        // Why: add/update/discharge do not touch the index, so it is stale
        // until rebuilt from the repository.
        self.by_patient.rebuild(self.prescriptions.iter().cloned());
        Ok(self.by_patient.lookup(&patient_id).to_vec())
    }

    /// Removes a patient together with all of their prescriptions.
    pub fn discharge_patient(
        &mut self,
        patient_id: PatientId,
    ) -> RepoResult<(Patient, Vec<Prescription>)> {
        let result = self.discharge_inner(patient_id);
        logged(MODULE, "patient_discharge", patient_id, result)
    }

    fn discharge_inner(
        &mut self,
        patient_id: PatientId,
    ) -> RepoResult<(Patient, Vec<Prescription>)> {
        let patient = self.patients.remove(&patient_id)?;
        let owned: Vec<PrescriptionId> = self
            .prescriptions
            .iter()
            .filter(|prescription| prescription.patient_id == patient_id)
            .map(|prescription| prescription.id)
            .collect();

        let mut removed = Vec::with_capacity(owned.len());
        for id in owned {
            removed.push(self.prescriptions.remove(&id)?);
        }
        Ok((patient, removed))
    }
}
