use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "fabric-native", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the modules compiled into the builtin table.
    Modules(ModulesArgs),
    /// Resolve one module by name through the active strategy.
    Resolve(ResolveArgs),
    /// Build a safe-area state and print it as JSON.
    State(StateArgs),
    /// Print the width of the geometry scalar for this build.
    Float,
}

#[derive(Parser, Debug)]
struct ModulesArgs {
    /// Emit JSON instead of one line per module.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Capability name, e.g. `BlobModule`.
    name: String,
}

#[derive(Parser, Debug)]
struct StateArgs {
    #[arg(long, default_value_t = 0.0)]
    top: fabric_native::Float,

    #[arg(long, default_value_t = 0.0)]
    left: fabric_native::Float,

    #[arg(long, default_value_t = 0.0)]
    bottom: fabric_native::Float,

    #[arg(long, default_value_t = 0.0)]
    right: fabric_native::Float,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Modules(args) => cmd_modules(args),
        Command::Resolve(args) => cmd_resolve(args),
        Command::State(args) => cmd_state(args),
        Command::Float => {
            println!("f{}", fabric_native::FLOAT_BITS);
            Ok(())
        }
    }
}

fn describe(handle: &fabric_native::ModuleHandle) -> serde_json::Value {
    serde_json::json!({
        "name": handle.name(),
        "methods": handle.methods(),
    })
}

fn cmd_modules(args: ModulesArgs) -> anyhow::Result<()> {
    let handles: Vec<_> = fabric_native::builtin_table().handles().collect();

    if args.json {
        let out: Vec<_> = handles.into_iter().map(describe).collect();
        let s = serde_json::to_string_pretty(&out).context("serialize module list")?;
        println!("{s}");
        return Ok(());
    }

    for h in handles {
        println!("{}\t{} methods", h.name(), h.methods().len());
    }
    Ok(())
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    match fabric_native::resolve(&args.name) {
        Some(handle) => {
            let s = serde_json::to_string_pretty(&describe(handle))
                .context("serialize module descriptor")?;
            println!("{s}");
        }
        None => println!("unavailable: {}", args.name),
    }
    Ok(())
}

fn cmd_state(args: StateArgs) -> anyhow::Result<()> {
    let padding = fabric_native::EdgeInsets::new(args.top, args.left, args.bottom, args.right);
    let state = fabric_native::SafeAreaViewState::new(padding);
    let s = serde_json::to_string_pretty(&state).context("serialize state")?;
    println!("{s}");
    Ok(())
}
