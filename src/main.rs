//! agrimpact main entrypoint.

use agrimpact::run;
use agrimpact::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
