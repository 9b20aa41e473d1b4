//! link-annotate CLI
//!
//! CI helper: runs lychee over the current directory and turns its JSON
//! report into GitHub Actions warning annotations on the offending lines.

use clap::Parser;

mod annotate;
mod checker;
mod report;

use annotate::run_annotate;

#[derive(Parser)]
#[command(name = "link-annotate")]
#[command(version)]
#[command(about = "Annotate broken URLs found by lychee as CI warnings")]
#[command(
    long_about = "Runs `lychee --format=json .` against the current directory, maps each broken URL back to the source line citing it, and prints one ::warning annotation per match.\n\nExit codes:\n  0  no broken URLs\n  1  broken URLs reported\n  2  internal error (checker missing, unparseable report, unreadable file)"
)]
struct Cli {}

#[tokio::main]
async fn main() {
    let _cli = Cli::parse();

    // 0 = clean, 1 = broken URLs found, 2 = internal error
    let exit_code = match run_annotate().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}
