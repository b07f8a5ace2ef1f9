//! kpiview main entrypoint.

use kpiview::run;

fn main() {
    if let Err(e) = run() {
        kpiview::ui::messages::error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
