/// Inspect a dataset: report its length and the first sample's shapes.
///
/// Takes a directory of per-sample `.mat` files or a single stacked
/// container; pass `--augment` to see the augmented apparent length.
use candle_core::Device;
use hypersr_data::{MatFolderDataset, MatStackDataset, TripletDataset};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("usage: mat_info <dataset-dir|stack.mat> [--augment]"))?;
    let augment = args.any(|a| a == "--augment");

    let device = Device::Cpu;
    let dataset: Box<dyn TripletDataset> = if std::fs::metadata(&path)?.is_dir() {
        Box::new(MatFolderDataset::new(&path, augment, device)?)
    } else {
        Box::new(MatStackDataset::new(&path, device)?)
    };

    log::info!("dataset length: {}", dataset.len());

    if dataset.is_empty() {
        log::warn!("dataset is empty, nothing to sample");
        return Ok(());
    }

    let (ms, lms, gt) = dataset.get(0)?;
    log::info!(
        "sample 0: ms {:?}, lms {:?}, gt {:?}",
        ms.dims(),
        lms.dims(),
        gt.dims()
    );

    Ok(())
}
