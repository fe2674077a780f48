//! Menu command handler: runs the interactive loop on stdin/stdout

use nu_roster::config::Config;
use nu_roster::core::roster::Roster;
use nu_roster::core::session::Session;
use nu_roster::{error, info, verbose};
use std::io;
use std::path::PathBuf;

/// Seed the catalog and run the menu loop until the operator exits.
///
/// The roster lives only for this run; option 5 is the only way to keep its
/// data.
pub fn run(config: &Config) {
    let roster = Roster::seeded();
    let export_path = PathBuf::from(&config.paths.export_file);

    info!(
        "Catalog seeded with {} course(s); exports go to {}",
        roster.catalog().len(),
        export_path.display()
    );
    verbose!("Exports will be written to: {}", export_path.display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(roster, stdin.lock(), stdout.lock(), export_path);

    if let Err(e) = session.run() {
        error!("Console I/O failed: {e}");
        eprintln!("✗ Console I/O failed: {e}");
        std::process::exit(1);
    }

    info!(
        "Menu closed with {} student(s) in the roster",
        session.roster().students().len()
    );
}
