use migrun_config::{Config, MIGRATIONS_DIR_VAR};
use migrun_db::naming;

/// Print version, platform and configuration info for the `info` command.
pub fn print_info() {
    let version = env!("CARGO_PKG_VERSION");

    println!("---CLI Info---");
    println!("migrun version: {version}");
    println!("---System Info---");
    println!("OS: {}", std::env::consts::OS);
    println!("CPU: {}", std::env::consts::ARCH);
    println!("---Migration Info---");
    match Config::migrations_dir_opt() {
        Some(dir) => println!("Migration directory: {}", dir.display()),
        None => println!("Migration directory: ({MIGRATIONS_DIR_VAR} not set)"),
    }
    println!("---Configuration---");
    println!("Word separator: {}", naming::WORD_SEPARATOR);
}
