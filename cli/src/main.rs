//! plugin-ns — command-line front end for the plugin namespace utilities.
//!
//! # Usage
//!
//! ```text
//! plugin-ns json metrics.json --prefix intel/mock
//! plugin-ns derive state.json --prefix root --policy policy.yaml
//! plugin-ns get state.json data/data_three/nested_data_one
//! plugin-ns sanitize 'cpu.0' 'test(test1)'
//! plugin-ns validate cpu_0
//! ```

use std::process;

use plugin_ns_core::cli::parse_args;
use plugin_ns_core::command::Response;
use plugin_ns_core::sys::Sys;
use tracing_subscriber::EnvFilter;


fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    let arg_refs: Vec<&str> = args[1..].iter().map(|s| s.as_str()).collect();

    let cmd = match parse_args(&arg_refs) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("plugin-ns: {}", e);
            process::exit(2);
        }
    };

    match Sys::new().execute(cmd) {
        Response::Ok { output } => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Response::Error { message } => {
            eprintln!("plugin-ns error: {}", message);
            process::exit(1);
        }
    }
}


/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
