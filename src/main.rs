//! punchcat main entrypoint.

use punchcat::run;
use punchcat::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
