mod report;
mod telemetry;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use namecase_person::Person;
use namecase_protocol::{Case, Gender, NamePart};
use tracing::{debug, info};

use report::{ClassifyReport, DeclineReport, GenderReport, RoleForms, WordRole};

#[derive(Parser)]
#[command(author, version, about = "Declines Ukrainian personal names")]
struct Cli {
    /// Log filter used when RUST_LOG is unset, e.g. `debug` or `namecase_person=trace`.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Prints every case of the given name parts.
    Decline {
        #[arg(long)]
        first: Option<String>,
        #[arg(long)]
        last: Option<String>,
        #[arg(long)]
        father: Option<String>,
        /// Skips gender detection.
        #[arg(long, value_enum)]
        gender: Option<GenderArg>,
        #[arg(long)]
        json: bool,
    },
    /// Prints one case of a single word.
    Case {
        #[arg(long, value_enum)]
        role: RoleArg,
        /// 0 nominative .. 6 vocative
        #[arg(long = "case")]
        case_index: usize,
        #[arg(long, value_enum)]
        gender: GenderArg,
        word: String,
    },
    /// Guesses the gender behind a full name.
    Gender {
        #[arg(required = true)]
        name: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Tells which word of a full name is which.
    Classify {
        #[arg(required = true)]
        name: Vec<String>,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Man,
    Woman,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Man => Gender::Man,
            GenderArg::Woman => Gender::Woman,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    First,
    Last,
    Father,
}

impl From<RoleArg> for NamePart {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::First => NamePart::FirstName,
            RoleArg::Last => NamePart::FamilyName,
            RoleArg::Father => NamePart::Patronymic,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level)?;
    execute(cli.command)
}

fn execute(command: Command) -> anyhow::Result<()> {
    let mut person = Person::new();
    match command {
        Command::Decline { first, last, father, gender, json } => {
            person.set_full_name(
                last.as_deref().unwrap_or_default(),
                first.as_deref().unwrap_or_default(),
                father.as_deref().unwrap_or_default(),
            );
            if let Some(gender) = gender {
                person.set_gender(gender.into());
            }
            debug!(words = person.len(), forced_gender = gender.is_some(), "declining name");

            let mut roles = Vec::new();
            for role in NamePart::ALL {
                if person.words().iter().any(|w| w.name_part() == Some(role)) {
                    roles.push(RoleForms::new(role, person.decline(role)?));
                }
            }
            let report = DeclineReport { gender: person.detect_gender(), roles };
            info!(roles = report.roles.len(), gender = ?report.gender, "name declined");

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for role in &report.roles {
                    println!("{}:", role.role);
                    for form in &role.forms {
                        println!("  {:<13}{}", form.case.name(), form.form);
                    }
                }
            }
        }
        Command::Case { role, case_index, gender, word } => {
            let case = Case::from_index(case_index)?;
            let gender = Gender::from(gender);
            debug!(%word, %case, %gender, "declining single word");
            let form = match NamePart::from(role) {
                NamePart::FirstName => person.first_name_case(&word, case.index(), gender),
                NamePart::FamilyName => person.last_name_case(&word, case.index(), gender),
                NamePart::Patronymic => person.father_name_case(&word, case.index(), gender),
            }
            .with_context(|| format!("cannot decline '{word}'"))?;
            println!("{form}");
        }
        Command::Gender { name, json } => {
            let gender = person.detect_gender_of(&name.join(" "));
            let report = GenderReport { gender, confidence: person.gender_confidence() };
            debug!(words = person.len(), ?gender, confidence = report.confidence, "gender detected");
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                match report.gender {
                    Some(gender) => println!("{gender} ({:.2})", report.confidence),
                    None => println!("unknown"),
                }
            }
        }
        Command::Classify { name, json } => {
            let full_name = name.join(" ");
            let format = person.name_format(&full_name);
            debug!(words = person.len(), %format, "name classified");
            let words = person
                .words()
                .iter()
                .filter_map(|w| Some(WordRole { word: w.original().to_owned(), role: w.name_part()? }))
                .collect();
            let report = ClassifyReport { format, words };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.format);
                for word in &report.words {
                    println!("  {:<16}{}", word.word, word.role);
                }
            }
        }
    }
    Ok(())
}
