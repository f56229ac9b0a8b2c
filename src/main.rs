use notebook_metadata::get_notebook_instance_name;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        // stdout is reserved for the resource name
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let path = std::env::args_os().nth(1).map(PathBuf::from);

    match get_notebook_instance_name(path.as_deref()) {
        Ok(name) => {
            info!("Resolved notebook instance name: {}", name);
            println!("{}", name);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to read notebook instance name: {}", e);
            ExitCode::FAILURE
        }
    }
}
