//! rTimeReport main entrypoint.

use rtimereport::run;
use rtimereport::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
