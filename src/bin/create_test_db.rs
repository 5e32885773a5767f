use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use kakeibo_api::initialize_db;

/// A utility for creating a seeded database for the kakeibo_api server.
///
/// Categories are maintained outside the API, so this is how a local
/// database gets its category rows.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating categories...");

    for name in ["Salary", "Food", "Rent", "Utilities", "Leisure"] {
        conn.execute("INSERT INTO category (name) VALUES (?1)", (name,))?;
    }

    println!("Success!");

    Ok(())
}
