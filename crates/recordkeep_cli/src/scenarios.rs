//! Scripted runs of each record-keeping scenario.
//!
//! Each scenario returns the lines it would print. Expected rejections are
//! reported inline and the script continues; only a failed mandatory load
//! returns `Err`.

use log::error;
use recordkeep_core::service::grading_service::{class_average, process_file};
use recordkeep_core::{
    FinanceService, InventoryLogService, Patient, PharmacyService, Prescription, Product,
    RunConfig, WarehouseService,
};
use std::fmt::Display;

fn rejected(report: &mut Vec<String>, action: &str, err: impl Display) {
    report.push(format!("  ! {action}: {err}"));
}

pub fn warehouse(config: &RunConfig) -> Vec<String> {
    let mut report = vec!["== Warehouse inventory".to_string()];
    let mut service = WarehouseService::in_memory();

    for product in [
        Product::new(1, "Pallet jack", 4, "A-01"),
        Product::new(2, "Shrink wrap", 120, "B-03"),
        Product::new(3, "Label roll", 30, "B-04"),
        Product::new(2, "Shrink wrap (dup)", 1, "B-03"),
    ] {
        if let Err(err) = service.add_product(product) {
            rejected(&mut report, "add product", err);
        }
    }

    if let Err(err) = service.ship(3, 25) {
        rejected(&mut report, "ship", err);
    }
    if let Err(err) = service.update_quantity(1, -3) {
        rejected(&mut report, "update quantity", err);
    }
    if let Err(err) = service.remove_product(42) {
        rejected(&mut report, "remove product", err);
    }

    for product in service.list_products() {
        report.push(format!(
            "  {:>3} {:<14} qty={:<4} at {}",
            product.id, product.name, product.quantity, product.location
        ));
    }
    let low: Vec<String> = service
        .low_stock(config.low_stock_threshold)
        .into_iter()
        .map(|product| product.name)
        .collect();
    report.push(format!("  low stock: {}", low.join(", ")));
    report.push(format!("  total units: {}", service.total_units()));
    report
}

pub fn pharmacy() -> Vec<String> {
    let mut report = vec!["== Patient prescriptions".to_string()];
    let mut service = PharmacyService::new();

    for patient in [
        Patient::new(1, "Alice Smith", 1984),
        Patient::new(2, "Bob Jones", 1972),
    ] {
        if let Err(err) = service.register_patient(patient) {
            rejected(&mut report, "register patient", err);
        }
    }
    for prescription in [
        Prescription::new(10, 1, "Lisinopril", 10),
        Prescription::new(11, 1, "Atorvastatin", 20),
        Prescription::new(12, 3, "Metformin", 500),
    ] {
        if let Err(err) = service.add_prescription(prescription) {
            rejected(&mut report, "add prescription", err);
        }
    }

    for patient_id in [1, 2, 3] {
        match service.prescriptions_for(patient_id) {
            Ok(found) if found.is_empty() => {
                report.push(format!("  patient {patient_id}: no prescriptions"));
            }
            Ok(found) => {
                let meds: Vec<String> = found
                    .iter()
                    .map(|p| format!("{} {}mg", p.medication, p.dosage_mg))
                    .collect();
                report.push(format!("  patient {patient_id}: {}", meds.join(", ")));
            }
            Err(err) => rejected(&mut report, "lookup", err),
        }
    }
    report
}

pub fn grading(config: &RunConfig) -> Result<Vec<String>, String> {
    let mut report = vec!["== Student grades".to_string()];
    let input = config.students_path();
    let output = config.grades_path();

    let records = process_file(&input, &output).map_err(|err| {
        error!(
            "event=grading_run module=cli status=error input={} error={}",
            input.display(),
            err
        );
        format!("grading aborted: {err}")
    })?;

    report.push(format!(
        "  graded {} students into {}",
        records.len(),
        output.display()
    ));
    if let Some(average) = class_average(&records) {
        report.push(format!("  class average: {average:.1}"));
    }
    Ok(report)
}

pub fn finance() -> Vec<String> {
    let mut report = vec!["== Finance simulator".to_string()];
    let mut service = FinanceService::new();

    for (number, owner) in [("ACC-100", "Dana Lee"), ("ACC-200", "Sam Ortiz")] {
        if let Err(err) = service.open_account(number, owner) {
            rejected(&mut report, "open account", err);
        }
    }
    if let Err(err) = service.deposit("ACC-100", 250_00) {
        rejected(&mut report, "deposit", err);
    }
    if let Err(err) = service.transfer("ACC-100", "ACC-200", 75_50) {
        rejected(&mut report, "transfer", err);
    }
    if let Err(err) = service.withdraw("ACC-200", 100_00) {
        rejected(&mut report, "withdraw", err);
    }
    if let Err(err) = service.deposit("ACC-100", -5_00) {
        rejected(&mut report, "deposit", err);
    }

    for account in service.accounts() {
        let entries = service.history(&account.number).map(|h| h.len()).unwrap_or(0);
        report.push(format!(
            "  {} ({}): balance {} cents, {} transactions",
            account.number, account.owner, account.balance_cents, entries
        ));
    }
    report
}

pub fn inventory_log(config: &RunConfig) -> Vec<String> {
    let mut report = vec!["== Inventory log".to_string()];
    let path = config.inventory_log_path();

    let mut log = match InventoryLogService::open(&path) {
        Ok(log) => log,
        Err(err) => {
            rejected(&mut report, "open log", err);
            return report;
        }
    };
    if log.restored_from_disk() {
        report.push(format!("  restored {} items", log.items().len()));
    } else {
        report.push("  no previous log, starting fresh".to_string());
    }

    for (name, quantity) in [("Laptop", 5), ("Monitor", 12), ("Cable", -1)] {
        if let Err(err) = log.log_item(name, quantity) {
            rejected(&mut report, "log item", err);
        }
    }
    if let Err(err) = log.save() {
        rejected(&mut report, "save log", err);
    }

    for item in log.items() {
        report.push(format!(
            "  #{} {} x{} added {}",
            item.id,
            item.name,
            item.quantity,
            item.date_added.format("%Y-%m-%d %H:%M:%S")
        ));
    }
    report
}
