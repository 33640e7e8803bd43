use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

pub const DEFAULT_LINKER: &str = "clang";
pub const RUNTIME_LIB_NAME: &str = "libwabbit_runtime.a";

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("object file not found at {}", .0.display())]
    ObjectMissing(PathBuf),
    #[error("runtime library not found at {} (build the workspace first)", .0.display())]
    RuntimeLibraryMissing(PathBuf),
    #[error("failed to execute linker '{linker}': {source}")]
    LinkerSpawn {
        linker: String,
        #[source]
        source: io::Error,
    },
    #[error("linker '{linker}' failed with {status}")]
    LinkerFailed { linker: String, status: ExitStatus },
}

/// Where the linker and runtime library come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    pub linker: String,
    pub runtime_lib: PathBuf,
    pub verbose: bool,
}

impl LinkConfig {
    /// `<target_dir>/<profile>/libwabbit_runtime.a`, where cargo leaves it.
    pub fn default_runtime_lib(target_dir: Option<&Path>, profile: Option<&str>) -> PathBuf {
        let target_dir = match target_dir {
            Some(dir) => dir.to_path_buf(),
            None => std::env::var_os("CARGO_TARGET_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("target")),
        };
        let profile = profile.unwrap_or(if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        });
        target_dir.join(profile).join(RUNTIME_LIB_NAME)
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        LinkConfig {
            linker: DEFAULT_LINKER.to_string(),
            runtime_lib: LinkConfig::default_runtime_lib(None, None),
            verbose: false,
        }
    }
}

/// `<linker> <object> <runtime_lib> -o <output>`
pub fn link_command(config: &LinkConfig, object: &Path, output: &Path) -> Command {
    let mut command = Command::new(&config.linker);
    command
        .arg(object)
        .arg(&config.runtime_lib)
        .arg("-o")
        .arg(output);
    command
}

/// Links an object file emitted by the compiler into an executable.
/// The object must define a C `main`; every `print` in it resolves to the
/// runtime library.
pub fn link_object_file(config: &LinkConfig, object: &Path, output: &Path) -> Result<(), LinkError> {
    if !object.exists() {
        return Err(LinkError::ObjectMissing(object.to_path_buf()));
    }
    if !config.runtime_lib.exists() {
        return Err(LinkError::RuntimeLibraryMissing(config.runtime_lib.clone()));
    }

    log::info!(
        "linking {} with {} using {}",
        object.display(),
        config.runtime_lib.display(),
        config.linker
    );

    let mut command = link_command(config, object, output);
    log::debug!("running {:?}", command);

    let status = command.status().map_err(|source| LinkError::LinkerSpawn {
        linker: config.linker.clone(),
        source,
    })?;
    if !status.success() {
        return Err(LinkError::LinkerFailed {
            linker: config.linker.clone(),
            status,
        });
    }

    log::info!("linked executable {}", output.display());
    Ok(())
}
