use std::process;

use kinship::config::{Command, Config, DB_ENV_VAR};
use kinship::error::{KinError, KinResult};
use kinship::model::{Gender, Id, Person, PersonId};
use kinship::queries::{person_queries, profile_queries};
use kinship::store::SqlitePersonStore;
use kinship::validation;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match Config::from_args(std::env::args().skip(1), std::env::var(DB_ENV_VAR).ok()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information.");
            process::exit(1);
        }
    };

    if config.command == Command::Help {
        print_help();
        return;
    }

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(if e.is_store_failure() { 2 } else { 1 });
    }
}

fn run(config: &Config) -> KinResult<()> {
    config.ensure_db_dir()?;

    if let Command::Import(json_path) = &config.command {
        if config.db_path.exists() {
            return Err(KinError::Other(format!(
                "Database file {} already exists. Remove it first or use --file to specify a different path.",
                config.db_path.display()
            )));
        }
        println!("Importing from {}...", json_path.display());
        let stats = kinship::migrate::import_json(json_path, &config.db_path)?;
        println!("Import complete!");
        println!("  People: {}", stats.people);
        println!("  Parent links: {}", stats.parent_links);
        println!("  Spouse links: {}", stats.spouse_links);
        println!("  Dangling references: {}", stats.dangling);
        return Ok(());
    }

    let store = SqlitePersonStore::open(&config.db_path)?;

    match &config.command {
        Command::List => print_people(&person_queries::all_people(&store)?),
        Command::Show(id) => {
            let id = parse_id(id)?;
            let details = person_queries::get_person_details(&store, id)?
                .ok_or_else(|| KinError::person_not_found(id))?;
            println!("{}", serde_json::to_string_pretty(&details)?);
        }
        Command::Profile(id) => {
            let profile = profile_queries::profile(&store, parse_id(id)?)?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        Command::Fathers(date) => {
            let date = validation::parse_date(date)?;
            print_people(&person_queries::father_candidates(&store, date)?);
        }
        Command::Mothers(date) => {
            let date = validation::parse_date(date)?;
            print_people(&person_queries::mother_candidates(&store, date)?);
        }
        Command::Spouses { date, gender } => {
            let date = validation::parse_date(date)?;
            let gender = Gender::parse(gender)
                .ok_or_else(|| KinError::Other(format!("Unknown gender: {}", gender)))?;
            print_people(&person_queries::spouse_candidates(&store, date, gender)?);
        }
        Command::Help | Command::Import(_) => {}
    }
    Ok(())
}

fn parse_id(s: &str) -> KinResult<PersonId> {
    Id::parse(s).map_err(|_| KinError::person_not_found(s))
}

fn print_people(people: &[Person]) {
    if people.is_empty() {
        println!("No people found.");
        return;
    }
    for p in people {
        let born = p
            .birth_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".into());
        println!("{}  {:<6}  {:<10}  {}", p.id, p.gender, born, p.name);
    }
}

fn print_help() {
    println!("kinship - family relationship resolver");
    println!();
    println!("Usage: kinship [OPTIONS] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  list                      List everyone, newest first");
    println!("  show <ID>                 Show a person with father/mother/spouse");
    println!("  profile <ID>              Print the full kinship profile as JSON");
    println!("  fathers <DATE>            Possible fathers for a birth date");
    println!("  mothers <DATE>            Possible mothers for a birth date");
    println!("  spouses <DATE> <GENDER>   Possible spouses for a birth date and gender");
    println!();
    println!("Options:");
    println!("  -f, --file <PATH>      Database file path (default: $KINSHIP_DB or .data/kinship.db)");
    println!("  --import <JSON_PATH>   Import people from a JSON export into a new database");
    println!("  -h, --help             Show this help");
}
