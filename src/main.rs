//! babybirthdays main entrypoint.

use babybirthdays::run;
use babybirthdays::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
