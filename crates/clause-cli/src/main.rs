use anyhow::Context;
use clause_cli::{build_cli, commands, logging, CliConfig, Session};
use std::io::{self, IsTerminal, Write};

fn run() -> anyhow::Result<()> {
    let matches = build_cli().get_matches();
    let config = CliConfig::from_matches(&matches);
    logging::init_logging(&config);

    let catalog = config.load_catalog()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match matches.subcommand() {
        Some(("categories", _)) => commands::categories(&catalog, config.json, &mut out)?,
        Some(("search", args)) => {
            let query = args.get_one::<String>("query").map_or("", String::as_str);
            let category = args.get_one::<String>("category").map_or("", String::as_str);
            commands::search(&catalog, query, category, config.json, &mut out)?;
        }
        Some(("show", args)) => {
            let id = args.get_one::<String>("id").context("missing template id")?;
            commands::show(&catalog, id, config.json, &mut out)?;
        }
        Some(("render", args)) => {
            let id = args.get_one::<String>("id").context("missing template id")?;
            let assignments: Vec<(String, String)> = args
                .get_many::<(String, String)>("set")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();
            let strict = args.get_flag("strict");
            commands::render(&catalog, id, &assignments, strict, config.json, &mut out)?;
        }
        Some(("check", _)) => commands::check(&catalog, config.json, &mut out)?,
        Some(("session", _)) => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            Session::new(&catalog, stdin.lock(), &mut out)
                .with_prompt(interactive)
                .run()?;
        }
        _ => {}
    }
    out.flush()?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
