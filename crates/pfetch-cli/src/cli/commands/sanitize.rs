//! `pfetch sanitize <name>...` – show how names map to folder names.

use pfetch_core::naming::sanitize_name;

pub fn run_sanitize(names: &[String]) {
    for name in names {
        println!("{}", sanitize_name(name));
    }
}
