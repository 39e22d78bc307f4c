//! bikeshare main entrypoint.

use bikeshare::ui::messages;
use bikeshare::{init_tracing, run};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
