use anyhow::{Context, Result};
use housing_regression::{run, PipelineOptions};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = PipelineOptions::default();
    let report = run(&options)
        .with_context(|| format!("housing regression on {}", options.data_path.display()))?;

    let attributes = report.standardized_coefficients.len().saturating_sub(1);
    for (i, c) in report.standardized_coefficients[..attributes].iter().enumerate() {
        log::info!("attribute {:>2}: significance {:+.4}", i + 1, c);
    }
    Ok(())
}
