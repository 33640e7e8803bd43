use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use wabbit::abi::llvm_declarations;
use wabbit::link::{link_object_file, LinkConfig, DEFAULT_LINKER};

#[derive(Parser, Debug)]
#[command(author, version, about = "Links compiled Wabbit objects against the Wabbit runtime")]
struct Args {
    /// Object file emitted by the Wabbit compiler
    #[arg(required_unless_present = "print_decls")]
    object: Option<PathBuf>,

    /// Output executable file path
    #[arg(short, long, default_value = "a.out")]
    output: PathBuf,

    /// C linker used to produce the executable
    #[arg(long, default_value = DEFAULT_LINKER)]
    linker: String,

    /// Runtime static library (defaults to the one in the cargo target dir)
    #[arg(long)]
    runtime_lib: Option<PathBuf>,

    /// Cargo target directory to look for the runtime library in
    #[arg(long)]
    target_dir: Option<PathBuf>,

    /// Build profile directory (debug or release)
    #[arg(long)]
    profile: Option<String>,

    /// Print the LLVM declarations of the runtime entry points and exit
    #[arg(long, default_value_t = false)]
    print_decls: bool,

    /// Enable verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Args {
    fn link_config(&self) -> LinkConfig {
        let runtime_lib = self.runtime_lib.clone().unwrap_or_else(|| {
            LinkConfig::default_runtime_lib(self.target_dir.as_deref(), self.profile.as_deref())
        });
        LinkConfig {
            linker: self.linker.clone(),
            runtime_lib,
            verbose: self.verbose,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if args.print_decls {
        println!("{}", llvm_declarations());
        return ExitCode::SUCCESS;
    }

    // clap enforces the object unless --print-decls was given
    let Some(object) = args.object.as_deref() else {
        return ExitCode::FAILURE;
    };

    let config = args.link_config();
    if config.verbose {
        eprintln!("Runtime library: {}", config.runtime_lib.display());
    }

    match link_object_file(&config, object, &args.output) {
        Ok(()) => {
            println!("Linked executable: {}", args.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Linking Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
