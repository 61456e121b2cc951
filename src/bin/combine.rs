//! Concatenates documentation modules into a single instruction file.
//!
//! Each positional argument is a module reference (`languages/typescript` or
//! a bare `typescript`). Resolved modules are appended after a fixed header
//! and, unless `--no-base` is given, the library's base document. References
//! that match nothing are warned about and skipped.

use anyhow::{Result, anyhow, bail};
use combiner::{
    BaseStatus, CombineError, CombineReport, CombineRequest, ModuleCatalog, ModuleStatus,
    Namespace, OutputTarget, Palette, combine, find_library_root,
};
use std::env;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        if err.downcast_ref::<CombineError>().is_some() {
            eprintln!("combine: {err}\n");
            usage(1);
        }
        eprintln!("combine: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse()?;
    let palette = Palette::for_stderr(cli.no_color);

    if cli.modules.is_empty() && !cli.list {
        return Err(CombineError::NoModules.into());
    }

    let root = find_library_root(cli.root.as_deref())?;

    if cli.list {
        let catalog = ModuleCatalog::scan(&root)?;
        let mut stdout = io::stdout().lock();
        if cli.json {
            serde_json::to_writer_pretty(&mut stdout, &catalog)?;
            writeln!(stdout)?;
        } else {
            let palette = Palette::detect(io::stdout().is_terminal(), cli.no_color);
            print_catalog(&mut stdout, &catalog, palette)?;
        }
        return Ok(());
    }

    let request = CombineRequest {
        root,
        modules: cli.modules,
        include_base: !cli.no_base,
        output: cli.output,
    };

    let mut stdout = io::stdout().lock();
    let report = combine(&request, &mut stdout)?;
    print_report(&report, palette);
    Ok(())
}

fn print_report(report: &CombineReport, palette: Palette) {
    match &report.base {
        BaseStatus::Included(_) => eprintln!("{}", palette.found("base")),
        BaseStatus::Missing => eprintln!("combine: base document not found; continuing without it"),
        BaseStatus::Excluded => {}
    }

    for status in &report.modules {
        match status {
            ModuleStatus::Found(module) => eprintln!("{}", palette.found(&module.qualified_name())),
            ModuleStatus::NotFound(reference) => eprintln!("{}", palette.not_found(reference)),
        }
    }

    let destination = match &report.output {
        OutputTarget::Path(path) => path.display().to_string(),
        OutputTarget::Stdout => "stdout".to_string(),
    };
    eprintln!(
        "{} {destination} ({} lines, {} of {} modules)",
        palette.heading("Generated"),
        report.lines,
        report.resolved_count(),
        report.modules.len()
    );
}

fn print_catalog(out: &mut dyn Write, catalog: &ModuleCatalog, palette: Palette) -> Result<()> {
    writeln!(out, "{}", palette.heading("Available modules:"))?;
    for namespace in Namespace::PROBE_ORDER {
        writeln!(out)?;
        writeln!(out, "{}", palette.note(&format!("{namespace}/")))?;
        let modules = catalog.modules(namespace);
        if modules.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for name in modules {
            writeln!(out, "  {name}")?;
        }
    }
    Ok(())
}

struct Cli {
    modules: Vec<String>,
    output: OutputTarget,
    no_base: bool,
    list: bool,
    json: bool,
    no_color: bool,
    root: Option<PathBuf>,
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut args = env::args_os();
        let _program = args.next();
        let mut cli = Cli {
            modules: Vec::new(),
            output: OutputTarget::default(),
            no_base: false,
            list: false,
            json: false,
            no_color: false,
            root: None,
        };
        let mut positional_only = false;

        while let Some(arg) = args.next() {
            let arg_str = arg
                .to_str()
                .ok_or_else(|| anyhow!("invalid UTF-8 in argument"))?;
            if positional_only || !arg_str.starts_with('-') {
                cli.modules.push(arg_str.to_string());
                continue;
            }
            match arg_str {
                "-o" | "--output" => {
                    cli.output = OutputTarget::from_arg(&next_value(arg_str, &mut args)?)
                }
                "-r" | "--root" => cli.root = Some(PathBuf::from(next_value(arg_str, &mut args)?)),
                "-n" | "--no-base" => cli.no_base = true,
                "-l" | "--list" => cli.list = true,
                "--json" => cli.json = true,
                "--no-color" => cli.no_color = true,
                "-h" | "--help" => usage(0),
                "--" => positional_only = true,
                other => bail!("unknown argument: {other}"),
            }
        }

        if cli.json && !cli.list {
            bail!("--json is only valid with --list");
        }
        Ok(cli)
    }
}

fn next_value(flag: &str, args: &mut env::ArgsOs) -> Result<String> {
    let value = args
        .next()
        .ok_or_else(|| anyhow!("{flag} requires a value"))?
        .into_string()
        .map_err(|_| anyhow!("{flag} must be valid UTF-8"))?;
    if value.is_empty() {
        bail!("{flag} must not be empty");
    }
    Ok(value)
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: combine [OPTIONS] <module>...\n\nCombine documentation modules into one instruction file.\n\nOptions:\n  -o, --output PATH         Output file (default: output/CLAUDE.md; '-' for stdout).\n  -n, --no-base             Exclude the base document.\n  -l, --list                List available modules by namespace and exit.\n      --json                With --list, print the catalog as JSON.\n  -r, --root PATH           Documentation library root (or set COMBINE_ROOT).\n      --no-color            Disable coloured status output.\n  -h, --help                Show this help text.\n\nModules:\n  languages/typescript      Namespaced reference.\n  typescript                Bare reference; probed in languages, frameworks,\n                            infra, practices, agents order."
    );
    std::process::exit(code);
}
