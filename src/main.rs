//! eventbuddy main entrypoint.

use eventbuddy::run;
use eventbuddy::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
