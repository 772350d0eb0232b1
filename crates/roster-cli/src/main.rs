use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use dotenvy::dotenv;
use roster_config::{ReportTarget, RosterConfig};
use roster_cli::seeder::{self, SeedConfig};
use roster_core::Modality;
use roster_models::{
    Class, CreateStudentDto, ReportSink, School, StdoutSink, Student, TracingSink,
};
use roster_observability::init_basic_console_logging;
use tracing::info;

#[derive(Parser)]
#[command(name = "roster-cli")]
#[command(about = "Roster CLI - build school rosters and print reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SeedArgs {
    /// Number of classes to create (codes 1..=N)
    #[arg(short = 'c', long, default_value = "3", value_parser = clap::value_parser!(u8).range(1..=10))]
    classes: u8,

    /// Number of generated students per class
    #[arg(short = 's', long, default_value = "8")]
    students: usize,

    /// Capacity of every class
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u8).range(5..=10))]
    capacity: u8,

    /// Make every n-th class remote (0 keeps all classes in person)
    #[arg(long, default_value = "0")]
    remote_every: u8,

    /// School name
    #[arg(long, default_value = "Escola Sempre Lógica")]
    name: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the sample scenario: one class, one student, a rejected duplicate
    Demo,
    /// Seed a school with fake students and print its report
    Seed(SeedArgs),
    /// Seed a school and print the report as JSON
    Report {
        #[command(flatten)]
        seed: SeedArgs,

        /// Print the report as JSON instead of text lines
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenv().ok();
    init_basic_console_logging();

    let config = RosterConfig::from_env();
    let cli = Cli::parse();

    let mut sink: Box<dyn ReportSink> = match config.report_target {
        ReportTarget::Stdout => Box::new(StdoutSink),
        ReportTarget::Log => Box::new(TracingSink),
    };

    match cli.command {
        Commands::Demo => handle_demo(&config, &mut *sink),
        Commands::Seed(args) => handle_seed(&config, args, &mut *sink, false),
        Commands::Report { seed, json } => handle_seed(&config, seed, &mut *sink, json),
    }
}

fn handle_demo(config: &RosterConfig, sink: &mut dyn ReportSink) -> Result<()> {
    let mut class = Class::new(1, 10, "Mathematics", Modality::InPerson)?;

    let birth_date = NaiveDate::from_ymd_opt(2005, 6, 15).context("invalid birth date")?;
    let dto = CreateStudentDto {
        first_name: "João".to_string(),
        last_name: "Silva".to_string(),
        email: "joao.silva@email.com".to_string(),
        modality: Modality::InPerson,
        class_code: 1,
        birth_date,
        grades: Some(vec![8.0, 9.0, 10.0]),
    };

    let student = Student::create_with_policy(dto.clone(), config.oversized_grades)?;
    let enrolled = class.enroll(student)?;
    sink.emit(&enrolled.to_string());
    sink.emit(&format!("Average: {}", enrolled.average()));
    sink.emit(&enrolled.classify());

    let duplicate = Student::create_with_policy(dto, config.oversized_grades)?;
    if let Err(err) = class.enroll(duplicate) {
        sink.emit(&format!("Duplicate enrollment rejected: {}", err));
    }
    sink.emit(&class.to_string());

    match class.find("joao.silva@email.com") {
        Some(found) => sink.emit(&format!("Found: {}", found.full_name())),
        None => sink.emit("Not found: joao.silva@email.com"),
    }

    let mut school = School::new("Escola Sempre Lógica");
    school.add_class(class)?;
    school.generate_report(sink);
    Ok(())
}

fn handle_seed(
    config: &RosterConfig,
    args: SeedArgs,
    sink: &mut dyn ReportSink,
    json: bool,
) -> Result<()> {
    let seed_config = SeedConfig::new(args.classes)
        .with_students_per_class(args.students)
        .with_capacity(args.capacity)
        .with_remote_every(args.remote_every);

    let outcome = seeder::seed_school(&args.name, &seed_config, config.oversized_grades)
        .context("failed to seed school")?;
    info!(
        enrolled = outcome.enrolled,
        rejected = outcome.rejected,
        "Seeding finished"
    );

    if json {
        let report = outcome.school.report();
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for class in outcome.school.list_classes() {
        sink.emit(&class.to_string());
    }
    outcome.school.generate_report(sink);
    Ok(())
}
