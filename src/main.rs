//! p3dc command-line interface.
//!
//! A thin wrapper over the library: parse arguments, load the input,
//! run the requested outputs, write files. All format semantics live in
//! the library; the binary only maps errors to exit codes.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use image::ImageFormat;
use log::{error, info};

use p3dc::emit::{Mode, emit};
use p3dc::error::CompileError;
use p3dc::rasterize::rasterize;
use p3dc::resources;
use p3dc::snap::Snap;

/// Compile p3di intermediate models into binary P3D models, P3DR rigs
/// and UV reference maps.
#[derive(Parser, Debug)]
#[command(name = "p3dc", version, about)]
struct Args {
    /// Input .p3di file.
    input: PathBuf,
    /// Emit the visual model (.p3d). Default when nothing is selected.
    #[arg(long)]
    model: bool,
    /// Emit the rig (.p3dr).
    #[arg(long)]
    rig: bool,
    /// Rasterize the UV layout to a PNG with the given edge length.
    #[arg(long, value_name = "RESOLUTION")]
    map: Option<u32>,
    /// Directory for output files (defaults to the input's directory).
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,
    /// Disable UV snapping.
    #[arg(long)]
    no_snap: bool,
    /// Texture pixel grid used for UV snapping.
    #[arg(long, default_value_t = 128, value_name = "PIXELS")]
    snap_resolution: i32,
    /// Snap tolerance around a grid line, in pixels.
    #[arg(long, default_value_t = 0.1, value_name = "PIXELS")]
    snap_epsilon: f32,
    /// Log per-stage details of the compile.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = exit_code(&err);
            error!("{:#}", anyhow::Error::new(err));
            ExitCode::from(code)
        }
    }
}

fn run(args: &Args) -> Result<(), CompileError> {
    let snap = Snap {
        enabled: !args.no_snap,
        resolution: args.snap_resolution,
        epsilon: args.snap_epsilon,
    };
    let model = resources::load_model(&args.input)?;

    let out_dir = match &args.out_dir {
        Some(dir) => dir.clone(),
        None => args.input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    let stem = args.input.file_stem().unwrap_or(args.input.as_os_str());
    let out_path = |extension: &str| out_dir.join(stem).with_extension(extension);

    // --model is implied when no output was asked for at all.
    let generate_model = args.model || (!args.rig && args.map.is_none());

    if generate_model {
        let bytes = emit(&model, Mode::Model, &snap)?;
        write_file(&out_path("p3d"), &bytes)?;
    }
    if args.rig {
        let bytes = emit(&model, Mode::Rig, &snap)?;
        write_file(&out_path("p3dr"), &bytes)?;
    }
    if let Some(resolution) = args.map {
        let image = rasterize(&model, resolution, &snap);
        let path = out_path("png");
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|source| CompileError::Png {
                path: path.display().to_string(),
                source,
            })?;
        write_file(&path, &bytes)?;
    }
    Ok(())
}

// Outputs are written from fully-built buffers only, so a fatal error
// earlier in the run never leaves a partial file.
fn write_file(path: &Path, bytes: &[u8]) -> Result<(), CompileError> {
    fs::write(path, bytes).map_err(|source| CompileError::Io {
        path: path.display().to_string(),
        source,
    })?;
    info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

fn exit_code(err: &CompileError) -> u8 {
    match err {
        CompileError::Io { .. } | CompileError::Png { .. } => 1,
        CompileError::Parse(_) | CompileError::InvalidName { .. } => 2,
        CompileError::UnsupportedPolygon { .. } => 3,
    }
}
