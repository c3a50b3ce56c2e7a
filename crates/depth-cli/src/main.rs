//! Depth Bridge - Command-Line Entry Point

use argh::FromArgs;
use inference_bridge::{EncodedImage, EncodedModel, InferenceBridge};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(FromArgs)]
/// Run depth estimation over an image file with an ONNX model artifact.
struct DepthArgs {
    /// path to the source image (PNG/JPEG/...)
    #[argh(option, short = 'i')]
    image: PathBuf,

    /// path to the ONNX model artifact
    #[argh(option, short = 'm')]
    model: PathBuf,

    /// path to write the depth PNG to
    #[argh(option, short = 'o', default = "PathBuf::from(\"depth.png\")")]
    output: PathBuf,
}

fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: DepthArgs = argh::from_env();
    init_logging();

    info!("=== Depth Bridge v{} ===", env!("CARGO_PKG_VERSION"));

    let image = EncodedImage::new(std::fs::read(&args.image)?)?;
    let model = EncodedModel::new(std::fs::read(&args.model)?)?;
    info!(
        "Loaded {} image bytes from {:?}, {} model bytes from {:?}",
        image.len(),
        args.image,
        model.len(),
        args.model
    );

    let bridge = InferenceBridge::new();
    let depth = bridge.infer(&image, &model)?;

    std::fs::write(&args.output, depth.as_bytes())?;
    info!("Wrote {} byte depth image to {:?}", depth.len(), args.output);

    Ok(())
}
