use crate::command::Command;


/// Parse CLI arguments into a typed Command enum.
///
/// Arguments are expected WITHOUT the program name (i.e., `args` should
/// be `["json", "data.json"]`, not `["plugin-ns", "json", "data.json"]`).
pub fn parse_args(args: &[&str]) -> Result<Command, String> {
    if args.is_empty() {
        return Err("No command specified. Run 'plugin-ns help' for usage.".into());
    }

    match args[0] {
        "json" => parse_json(args),
        "derive" => parse_derive(args),
        "get" => parse_get(args),
        "sanitize" => parse_parts(args).map(|parts| Command::Sanitize { parts }),
        "validate" => parse_parts(args).map(|parts| Command::Validate { parts }),
        "help" | "--help" | "-h" => parse_help(args),
        _ => Err(format!("Unknown command: '{}'", args[0])),
    }
}


// ---------------------------------------------------------------------------
// Sub-parsers
// ---------------------------------------------------------------------------

/// `plugin-ns json <file|-> [--prefix <p>]`
fn parse_json(args: &[&str]) -> Result<Command, String> {
    if args.len() < 2 {
        return Err("Usage: plugin-ns json <file|-> [--prefix <p>]".into());
    }
    let input = args[1].to_string();
    let mut prefix = None;

    let rest = &args[2..];
    let mut i = 0;
    while i < rest.len() {
        match rest[i] {
            "--prefix" => {
                i += 1;
                prefix = Some(take_arg(rest, i, "--prefix")?);
            }
            other => return Err(format!("Unknown flag for json: '{}'", other)),
        }
        i += 1;
    }
    Ok(Command::Json { input, prefix })
}

/// `plugin-ns derive <file|-> [--prefix <p>] [--policy <file>]`
fn parse_derive(args: &[&str]) -> Result<Command, String> {
    if args.len() < 2 {
        return Err("Usage: plugin-ns derive <file|-> [--prefix <p>] [--policy <file>]".into());
    }
    let input = args[1].to_string();
    let mut prefix = None;
    let mut policy = None;

    let rest = &args[2..];
    let mut i = 0;
    while i < rest.len() {
        match rest[i] {
            "--prefix" => {
                i += 1;
                prefix = Some(take_arg(rest, i, "--prefix")?);
            }
            "--policy" => {
                i += 1;
                policy = Some(take_arg(rest, i, "--policy")?);
            }
            other => return Err(format!("Unknown flag for derive: '{}'", other)),
        }
        i += 1;
    }
    Ok(Command::Derive { input, prefix, policy })
}

/// `plugin-ns get <file|-> <namespace>`
fn parse_get(args: &[&str]) -> Result<Command, String> {
    if args.len() != 3 {
        return Err("Usage: plugin-ns get <file|-> <namespace>".into());
    }
    Ok(Command::Get {
        input: args[1].into(),
        namespace: args[2].into(),
    })
}

/// `plugin-ns sanitize|validate <part>...`
fn parse_parts(args: &[&str]) -> Result<Vec<String>, String> {
    if args.len() < 2 {
        return Err(format!("Usage: plugin-ns {} <part>...", args[0]));
    }
    Ok(args[1..].iter().map(|s| s.to_string()).collect())
}

/// `plugin-ns help [topic]`
fn parse_help(args: &[&str]) -> Result<Command, String> {
    let topic = if args.len() > 1 {
        Some(args[1..].join(" "))
    } else {
        None
    };
    Ok(Command::Help { topic })
}


// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Safely take an argument value after a flag.
fn take_arg(args: &[&str], index: usize, flag: &str) -> Result<String, String> {
    if index >= args.len() {
        return Err(format!("{} requires a value", flag));
    }
    Ok(args[index].into())
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
