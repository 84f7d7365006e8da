use crate::config;
use anyhow::Result;
use log::info;

pub fn dispatch_logs() -> Result<()> {
    let path = config::log_file_path()?;
    let log_file = fern::log_file(&path)?;
    let path = path.to_string_lossy().to_string();
    println!("Write logs to path: {}", &path);

    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339(std::time::SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .chain(log_file)
        .apply()?;

    info!("Logs setup to path: {}", &path);
    Ok(())
}
