//! Console front-end for the patient intake record store.
//!
//! Thin consumer only: collects raw field values, hands them to the store,
//! and renders what comes back. All validation and persistence lives in
//! `intake-core`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use intake_core::{PatientRecord, Questionnaire, RawPatientFields, RecordStore, StoreError};

/// Patient intake record keeper
#[derive(Parser, Debug)]
#[command(name = "intake")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the backing JSON file
    #[arg(short, long, default_value = "patients.json", env = "INTAKE_FILE")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new patient record
    Add(AddArgs),

    /// List all patient records
    List,

    /// Show one patient record by id
    Show {
        /// 6-digit patient id
        patient_id: String,
    },

    /// Write a standalone questionnaire submission
    Questionnaire(QuestionnaireArgs),
}

#[derive(Args, Debug)]
struct AddArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    /// Date of birth, YYYY-MM-DD
    #[arg(long)]
    date_of_birth: String,
    #[arg(long)]
    phone_number: String,
    #[arg(long, default_value = "")]
    address: String,
    #[arg(long, default_value = "")]
    reason_for_visit: String,
    #[arg(long, default_value = "")]
    notes: String,
}

#[derive(Args, Debug)]
struct QuestionnaireArgs {
    #[arg(long)]
    patient_id: String,
    #[arg(long)]
    feeling: String,
    #[arg(long, default_value = "")]
    symptoms: String,
    #[arg(long, default_value = "")]
    notes: String,
    /// Directory the submission file is written into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Add(args) => add(&cli.file, args),
        Commands::List => list(&cli.file),
        Commands::Show { patient_id } => show(&cli.file, &patient_id),
        Commands::Questionnaire(args) => questionnaire(args),
    }
}

fn add(file: &Path, args: AddArgs) -> anyhow::Result<ExitCode> {
    let raw = RawPatientFields {
        first_name: args.first_name,
        last_name: args.last_name,
        date_of_birth: args.date_of_birth,
        phone_number: args.phone_number,
        address: args.address,
        reason_for_visit: args.reason_for_visit,
        notes: args.notes,
    };

    let mut store = RecordStore::open(file);
    match store.add(&raw) {
        Ok(record) => {
            println!("Patient added successfully with ID: {}", record.patient_id);
            Ok(ExitCode::SUCCESS)
        }
        Err(StoreError::Validation(errors)) => {
            for error in errors {
                eprintln!("{}", error);
            }
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err).context("failed to save patient record"),
    }
}

fn list(file: &Path) -> anyhow::Result<ExitCode> {
    let store = RecordStore::open(file);
    if store.is_empty() {
        println!("No patient records.");
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{:<8} {:<24} {:<12} {}",
        "ID", "Name", "DOB", "Phone"
    );
    for record in store.records() {
        println!(
            "{:<8} {:<24} {:<12} {}",
            record.patient_id,
            record.full_name(),
            record.date_of_birth,
            record.phone_number
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn show(file: &Path, patient_id: &str) -> anyhow::Result<ExitCode> {
    let store = RecordStore::open(file);
    match store.find_by_id(patient_id) {
        Some(record) => {
            print_detail(record);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("Patient not found: {}", patient_id);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_detail(record: &PatientRecord) {
    println!("Patient ID: {}", record.patient_id);
    println!("First Name: {}", record.first_name);
    println!("Last Name: {}", record.last_name);
    println!("Date of Birth: {}", record.date_of_birth);
    println!("Phone Number: {}", record.phone_number);
    println!("Address: {}", record.address);
    println!("Reason for Visit: {}", record.reason_for_visit);
    println!("Notes: {}", record.notes);
}

fn questionnaire(args: QuestionnaireArgs) -> anyhow::Result<ExitCode> {
    let submission = Questionnaire {
        patient_id: args.patient_id,
        feeling: args.feeling,
        symptoms: args.symptoms,
        notes: args.notes,
    };

    let path = submission
        .write_to_dir(&args.out_dir)
        .context("failed to write questionnaire")?;
    println!(
        "Questionnaire submitted successfully! Data written to {}",
        path.display()
    );
    Ok(ExitCode::SUCCESS)
}
